//! Output of formulas: canonical Hill ordering, subscript digits, and
//! highlighting for display.

mod hill;
mod subscript;
mod syntax;
mod terminal;

pub use hill::render;
pub use subscript::prettify;
pub use syntax::{Identity, Render, Syntax};
pub use terminal::Terminal;

/// We do the highlighting in two passes. First we split the formula into a
/// Vec of "fragments" (Syntax tag, str pairs). Then second we apply the
/// specified renderer to each pair to result in an embellished String. This
/// works on both ASCII and prettified formulas.
pub fn highlight(renderer: &dyn Render, formula: &str) -> String {
    // Pass 1: split into tagged fragments
    let fragments = formula_to_fragments(formula);

    // Pass 2: render tagged fragments to final output
    let mut output = String::new();
    for (syntax, content) in fragments {
        output.push_str(&renderer.style(syntax, content));
    }
    output
}

fn classify(c: char) -> Syntax {
    if c.is_ascii_alphabetic() {
        Syntax::Element
    } else if c.is_ascii_digit() || subscript::is_subscript(c) {
        Syntax::Count
    } else {
        Syntax::Neutral
    }
}

fn formula_to_fragments(formula: &str) -> Vec<(Syntax, &str)> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut previous: Option<Syntax> = None;

    for (i, c) in formula.char_indices() {
        let syntax = classify(c);

        // a new symbol starts at every capital, even right after another symbol
        let boundary = match previous {
            None => false,
            Some(kind) => kind != syntax || c.is_ascii_uppercase(),
        };

        if boundary {
            if let Some(kind) = previous {
                fragments.push((kind, &formula[start..i]));
            }
            start = i;
        }
        previous = Some(syntax);
    }

    if let Some(kind) = previous {
        fragments.push((kind, &formula[start..]));
    }

    fragments
}
