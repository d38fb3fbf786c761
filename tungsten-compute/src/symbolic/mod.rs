//! Symbolic manipulation of trees: simplification, differentiation, and Taylor expansion.

pub mod derivative;
pub mod simplify;
pub mod step_collector;
pub mod taylor;

pub use derivative::{derivative, derivative_of, Differentiator};
pub use simplify::{simplify, simplify_rounds, simplify_with_steps};
pub use taylor::{expand, taylor, taylor_of, Expansion};
