//! Molar mass calculation. There are three ways to get at the mass of a
//! formula: directly from the formula text, from the counted elements, and
//! from the canonical Hill string. They must all agree.

use tracing::{debug, error};

use crate::elements::atomic_mass;
use crate::language::{ElementCounts, FormulaError};
use crate::parsing::parser::{Parser, Token};
use crate::regex::compile;

/// Largest relative difference tolerated between two computations of the
/// same mass. They differ only in the order floating point sums are done.
pub const TOLERANCE: f64 = 1e-9;

fn lookup(symbol: &str, offset: Option<usize>) -> Result<f64, FormulaError> {
    atomic_mass(symbol).ok_or_else(|| FormulaError::UnknownElement(offset, symbol.to_string()))
}

/// Compute the mass by walking the formula and accumulating as we go, without
/// building any counts. Each open group keeps a running subtotal which is
/// multiplied out and added to its parent when the group closes.
pub fn direct_mass(formula: &str) -> Result<f64, FormulaError> {
    let mut input = Parser::new();
    input.initialize(formula);

    let mut current = 0.0;
    let mut stack: Vec<(usize, f64)> = Vec::new();

    while let Some(token) = input.read_token()? {
        match token {
            Token::Element {
                offset,
                symbol,
                count,
            } => {
                current += lookup(symbol, Some(offset))? * count as f64;
            }
            Token::Open { offset } => {
                stack.push((offset, current));
                current = 0.0;
            }
            Token::Close { offset, multiplier } => {
                let (_, outer) = stack
                    .pop()
                    .ok_or(FormulaError::UnbalancedParentheses(offset))?;
                current = outer + current * multiplier as f64;
            }
        }
    }

    if let Some((offset, _)) = stack.last() {
        return Err(FormulaError::UnbalancedParentheses(*offset));
    }

    Ok(current)
}

/// Sum atomic mass times count over every element.
pub fn mass_from_counts(counts: &ElementCounts) -> Result<f64, FormulaError> {
    let mut total = 0.0;
    for (symbol, count) in counts.iter() {
        total += lookup(symbol, None)? * count as f64;
    }
    Ok(total)
}

/// Compute the mass of a flat formula such as the output of
/// [`crate::rendering::render`]. A symbol without digits counts once.
/// Characters that are neither letters nor digits are skipped over.
pub fn mass_from_canonical(canonical: &str) -> Result<f64, FormulaError> {
    let re = compile!(r"([A-Z][a-z]*)([0-9]*)");

    let mut total = 0.0;
    for cap in re.captures_iter(canonical) {
        let (whole, [symbol, digits]) = cap.extract();
        let offset = cap
            .get(0)
            .map_or(0, |m| m.start());

        let count = if digits.is_empty() {
            1
        } else {
            digits
                .parse::<u64>()
                .map_err(|_| FormulaError::CountOverflow(offset + symbol.len()))?
        };

        debug!(?whole, count);
        total += lookup(symbol, Some(offset))? * count as f64;
    }
    Ok(total)
}

/// Confirm that two independently computed masses agree.
pub fn check_consistency(expected: f64, actual: f64) -> Result<(), FormulaError> {
    let scale = expected
        .abs()
        .max(actual.abs());

    let agree = if scale == 0.0 {
        true
    } else {
        (expected - actual).abs() / scale < TOLERANCE
    };

    if agree {
        Ok(())
    } else {
        error!(expected, actual, "Mass calculations disagree");
        Err(FormulaError::InconsistentMass { expected, actual })
    }
}
