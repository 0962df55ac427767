//! Atomic mass lookup by element symbol

use std::collections::HashMap;
use std::sync::OnceLock;

mod masses;

use masses::ATOMIC_MASSES;

fn table() -> &'static HashMap<&'static str, f64> {
    static TABLE: OnceLock<HashMap<&'static str, f64>> = OnceLock::new();
    TABLE.get_or_init(|| {
        ATOMIC_MASSES
            .iter()
            .copied()
            .collect()
    })
}

/// Look up the atomic mass (g/mol) of an element by its exact symbol. Symbols
/// are case sensitive, so "co" is not cobalt.
pub fn atomic_mass(symbol: &str) -> Option<f64> {
    table()
        .get(symbol)
        .copied()
}

/// Every known element symbol, in order of atomic number.
pub fn symbols() -> impl Iterator<Item = &'static str> {
    ATOMIC_MASSES
        .iter()
        .map(|(symbol, _)| *symbol)
}
