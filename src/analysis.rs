use tracing::debug;

use crate::language::{ElementCounts, FormulaError};
use crate::mass::{check_consistency, direct_mass, mass_from_canonical, mass_from_counts};
use crate::parsing::count_elements;
use crate::rendering::{prettify, render};

/// The result of working through a formula: how many of each element it
/// contains, its canonical Hill form, and its molar mass in g/mol.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis<'i> {
    pub formula: &'i str,
    pub counts: ElementCounts,
    pub canonical: String,
    pub mass: f64,
}

impl<'i> Analysis<'i> {
    /// The canonical formula with subscript digits, for display.
    pub fn pretty(&self) -> String {
        prettify(&self.canonical)
    }
}

/// Parse a formula, count its elements, and compute its molar mass.
///
/// The mass is computed three ways (directly from the formula text, from the
/// element counts, and from the canonical formula) and the results are
/// required to agree. Disagreement is reported as
/// [`FormulaError::InconsistentMass`].
pub fn analyse(formula: &str) -> Result<Analysis<'_>, FormulaError> {
    let direct = direct_mass(formula)?;

    let counts = count_elements(formula)?;
    let mass = mass_from_counts(&counts)?;
    check_consistency(direct, mass)?;

    let canonical = render(counts.clone());
    let reparsed = mass_from_canonical(&canonical)?;
    check_consistency(mass, reparsed)?;

    debug!(formula, %canonical, mass, "Analysed");

    Ok(Analysis {
        formula,
        counts,
        canonical,
        mass,
    })
}

/// Compute the molar mass of a formula in g/mol.
pub fn molar_mass(formula: &str) -> Result<f64, FormulaError> {
    analyse(formula).map(|analysis| analysis.mass)
}
