//! parser for chemical formulas

pub mod parser;
pub mod tokens;

pub use parser::count_elements;
