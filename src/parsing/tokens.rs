//! Recognizers for the two kinds of lexeme in a formula: element symbols and
//! integer counts. These look only at the start of the slice they are given;
//! the caller keeps track of where that slice sits in the whole formula.

use crate::language::FormulaError;
use crate::regex::compile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    MalformedSymbol,
    MalformedNumber,
    NumberTooLarge,
}

impl TokenError {
    /// Attach the position at which the failed token started.
    pub fn at(self, offset: usize) -> FormulaError {
        match self {
            TokenError::MalformedSymbol => FormulaError::MalformedSymbol(offset),
            TokenError::MalformedNumber => FormulaError::MalformedNumber(offset),
            TokenError::NumberTooLarge => FormulaError::CountOverflow(offset),
        }
    }
}

pub fn is_element_start(content: &str) -> bool {
    content
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_uppercase())
}

pub fn is_number_start(content: &str) -> bool {
    content
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit())
}

/// Match one uppercase letter followed by as many lowercase letters as there
/// are, returning the symbol and its width in bytes.
pub fn next_element_symbol(content: &str) -> Result<(&str, usize), TokenError> {
    let re = compile!(r"^[A-Z][a-z]*");

    let symbol = re
        .find(content)
        .ok_or(TokenError::MalformedSymbol)?
        .as_str();

    Ok((symbol, symbol.len()))
}

/// Match a run of ASCII digits, returning its value and width in bytes.
pub fn next_integer(content: &str) -> Result<(u64, usize), TokenError> {
    let re = compile!(r"^[0-9]+");

    let digits = re
        .find(content)
        .ok_or(TokenError::MalformedNumber)?
        .as_str();

    let value = digits
        .parse::<u64>()
        .map_err(|_| TokenError::NumberTooLarge)?;

    Ok((value, digits.len()))
}
