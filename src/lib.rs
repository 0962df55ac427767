//! Molar mass of chemical formulas.
//!
//! A formula such as `Ca(OH)2` is parsed into counts of each element, its
//! molar mass is computed from a table of standard atomic weights, and it can
//! be written back out in Hill system order with subscript digits.
//!
//! ```
//! let mass = molar::molar_mass("C6H12O6").unwrap();
//! assert!((mass - 180.156).abs() < 0.001);
//! ```

mod analysis;
pub mod elements;
pub mod error;
pub mod language;
pub mod mass;
pub mod output;
pub mod parsing;
pub mod rendering;

mod regex;

pub use analysis::{analyse, molar_mass, Analysis};
