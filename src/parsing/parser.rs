use tracing::debug;

use crate::language::{ElementCounts, FormulaError};
use crate::parsing::tokens::{is_element_start, is_number_start, next_element_symbol, next_integer};

/// The pieces a formula is made of. Counts and multipliers that were not
/// written are reported as 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'i> {
    Element {
        offset: usize,
        symbol: &'i str,
        count: u64,
    },
    Open {
        offset: usize,
    },
    Close {
        offset: usize,
        multiplier: u64,
    },
}

#[derive(Debug)]
pub struct Parser<'i> {
    original: &'i str,
    source: &'i str,
    offset: usize,
}

impl<'i> Parser<'i> {
    pub fn new() -> Parser<'i> {
        Parser {
            original: "",
            source: "",
            offset: 0,
        }
    }

    pub fn initialize(&mut self, content: &'i str) {
        self.original = content;
        self.source = content;
        self.offset = 0;
    }

    fn advance(&mut self, width: usize) {
        // advance the parser position
        self.source = &self.source[width..];
        self.offset += width;
    }

    fn entire(&self) -> &'i str {
        self.source
    }

    pub fn original(&self) -> &'i str {
        self.original
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_finished(&self) -> bool {
        self.source
            .is_empty()
    }

    /// consume an optional run of digits, defaulting to 1 if there isn't one
    fn read_multiplier(&mut self) -> Result<u64, FormulaError> {
        let content = self.entire();
        if !is_number_start(content) {
            return Ok(1);
        }

        let (value, width) = next_integer(content).map_err(|error| error.at(self.offset))?;
        self.advance(width);

        Ok(value)
    }

    /// Read the next token, or None at the end of input.
    pub fn read_token(&mut self) -> Result<Option<Token<'i>>, FormulaError> {
        let content = self.entire();
        let offset = self.offset;

        if is_element_start(content) {
            let (symbol, width) = next_element_symbol(content).map_err(|error| error.at(offset))?;
            self.advance(width);

            let count = self.read_multiplier()?;
            return Ok(Some(Token::Element {
                offset,
                symbol,
                count,
            }));
        }

        let c = match content
            .chars()
            .next()
        {
            Some(c) => c,
            None => return Ok(None),
        };

        match c {
            '(' => {
                self.advance(1);
                Ok(Some(Token::Open { offset }))
            }
            ')' => {
                self.advance(1);
                let multiplier = self.read_multiplier()?;
                Ok(Some(Token::Close { offset, multiplier }))
            }
            _ => Err(FormulaError::UnexpectedCharacter(offset, c)),
        }
    }
}

/// Count the atoms of each element in a formula, flattening nested groups.
///
/// Groups are tracked on an explicit stack rather than by recursion, so
/// nesting depth is limited only by memory. Each entry remembers where its
/// opening parenthesis was so an unclosed group can be reported there.
pub fn count_elements(formula: &str) -> Result<ElementCounts, FormulaError> {
    let mut input = Parser::new();
    input.initialize(formula);

    let mut current = ElementCounts::new();
    let mut stack: Vec<(usize, ElementCounts)> = Vec::new();

    while let Some(token) = input.read_token()? {
        match token {
            Token::Element {
                offset,
                symbol,
                count,
            } => {
                current
                    .add(symbol, count)
                    .map_err(|_| FormulaError::CountOverflow(offset))?;
            }
            Token::Open { offset } => {
                stack.push((offset, std::mem::take(&mut current)));
            }
            Token::Close { offset, multiplier } => {
                let (_, mut outer) = stack
                    .pop()
                    .ok_or(FormulaError::UnbalancedParentheses(offset))?;

                current
                    .scale(multiplier)
                    .map_err(|_| FormulaError::CountOverflow(offset))?;
                outer
                    .merge(current)
                    .map_err(|_| FormulaError::CountOverflow(offset))?;

                current = outer;
            }
        }
    }

    if let Some((offset, _)) = stack.last() {
        return Err(FormulaError::UnbalancedParentheses(*offset));
    }

    debug!(
        "Found {} element{} in {}",
        current.len(),
        if current.len() == 1 { "" } else { "s" },
        formula
    );

    Ok(current)
}
