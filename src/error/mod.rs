//! Presentation of formula errors to humans

mod display;

pub use display::*;
