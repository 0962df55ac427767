use std::fmt;

/// Everything that can go wrong turning a formula into a molar mass. Offsets
/// are byte positions into the formula as given.
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaError {
    MalformedSymbol(usize),
    MalformedNumber(usize),
    UnexpectedCharacter(usize, char),
    UnbalancedParentheses(usize),
    UnknownElement(Option<usize>, String),
    CountOverflow(usize),
    InconsistentMass { expected: f64, actual: f64 },
}

impl FormulaError {
    pub fn offset(&self) -> Option<usize> {
        match self {
            FormulaError::MalformedSymbol(offset) => Some(*offset),
            FormulaError::MalformedNumber(offset) => Some(*offset),
            FormulaError::UnexpectedCharacter(offset, _) => Some(*offset),
            FormulaError::UnbalancedParentheses(offset) => Some(*offset),
            FormulaError::UnknownElement(offset, _) => *offset,
            FormulaError::CountOverflow(offset) => Some(*offset),
            FormulaError::InconsistentMass { .. } => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            FormulaError::MalformedSymbol(_) => "malformed element symbol".to_string(),
            FormulaError::MalformedNumber(_) => "malformed number".to_string(),
            FormulaError::UnexpectedCharacter(_, c) => format!("unexpected character '{}'", c),
            FormulaError::UnbalancedParentheses(_) => "unbalanced parentheses".to_string(),
            FormulaError::UnknownElement(_, symbol) => format!("unknown element '{}'", symbol),
            FormulaError::CountOverflow(_) => "element count too large".to_string(),
            FormulaError::InconsistentMass { expected, actual } => format!(
                "internal inconsistency: computed masses {} and {} disagree",
                expected, actual
            ),
        }
    }

    /// Longer explanation suitable for showing underneath a diagnostic.
    pub fn details(&self) -> String {
        match self {
            FormulaError::MalformedSymbol(_) => {
                "Element symbols begin with an uppercase letter.".to_string()
            }
            FormulaError::MalformedNumber(_) => "Counts are written as ASCII digits.".to_string(),
            FormulaError::UnexpectedCharacter(..) => {
                "Formulas consist of element symbols, counts, and parentheses only.".to_string()
            }
            FormulaError::UnbalancedParentheses(_) => {
                "Every '(' must be closed by a matching ')'.".to_string()
            }
            FormulaError::UnknownElement(_, _) => {
                "Symbols are case sensitive: a capital letter followed by lowercase letters."
                    .to_string()
            }
            FormulaError::CountOverflow(_) => {
                "The total number of atoms of this element does not fit in 64 bits.".to_string()
            }
            FormulaError::InconsistentMass { .. } => {
                "This is a bug in the mass calculation, not a problem with the formula."
                    .to_string()
            }
        }
    }
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset() {
            Some(offset) => write!(f, "{} at offset {}", self.message(), offset),
            None => write!(f, "{}", self.message()),
        }
    }
}

impl std::error::Error for FormulaError {}
