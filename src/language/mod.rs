// Types representing chemical formulas and the ways they can be wrong

mod counts;
mod error;

// Re-export all public symbols
pub use counts::*;
pub use error::*;
