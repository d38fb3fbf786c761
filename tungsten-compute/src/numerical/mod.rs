//! Numerical evaluation of trees.

pub mod eval;
pub mod plot;

pub use eval::Eval;
