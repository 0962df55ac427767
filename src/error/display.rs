use std::fmt;

use crate::language::FormulaError;
use crate::rendering::{Render, Syntax};

/// A FormulaError together with the formula it came from, so that it can be
/// shown with a caret pointing at the offending character.
#[derive(Debug, Clone, PartialEq)]
pub struct MolarError<'i> {
    pub problem: String,
    pub details: String,
    pub source: &'i str,
    pub offset: Option<usize>,
}

impl<'i> MolarError<'i> {
    pub fn new(source: &'i str, error: &FormulaError) -> MolarError<'i> {
        MolarError {
            problem: error.message(),
            details: error.details(),
            source,
            offset: error.offset(),
        }
    }

    // Verbose detailed explanation
    pub fn full_details(&self, renderer: &dyn Render) -> String {
        let header = format!(
            "{}: {}",
            renderer.style(Syntax::Error, "error"),
            renderer.style(Syntax::Problem, &self.problem)
        );

        let offset = match self.offset {
            Some(offset) => offset,
            None => {
                return format!("{}\n\n{}", header, self.details);
            }
        };

        let j = calculate_column_number(self.source, offset);
        let column = j + 1;
        let bar = renderer.style(Syntax::Gutter, "|");

        format!(
            r#"
{}
{}:{}

{} {}
{} {:>j$}{}

{}
            "#,
            header,
            self.source,
            column,
            bar,
            self.source,
            bar,
            "",
            renderer.style(Syntax::Caret, "^"),
            self.details
        )
        .trim_ascii()
        .to_string()
    }
}

// Concise version for internal use
impl<'i> fmt::Display for MolarError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => {
                let column = calculate_column_number(self.source, offset) + 1;
                write!(f, "error: {}:{} {}", self.source, column, self.problem)
            }
            None => write!(f, "error: {} {}", self.source, self.problem),
        }
    }
}

// Zero-origin, counted in characters rather than bytes so the caret lines up
// under the right place. Offsets past the end clamp to the end.
fn calculate_column_number(content: &str, offset: usize) -> usize {
    let end = offset.min(content.len());
    content
        .get(..end)
        .map_or(end, |before| {
            before
                .chars()
                .count()
        })
}
