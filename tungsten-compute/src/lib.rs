//! Evaluation and symbolic manipulation of expression trees produced by [`tungsten_parser`].
//!
//! - [`numerical`]: evaluating trees to numbers, and sampling them for plotting.
//! - [`symbolic`]: simplification, differentiation, and Taylor expansion.
//! - [`fmt`]: LaTeX and Graphviz output.
//!
//! ```
//! use tungsten_compute::{numerical::Eval, symbolic::{derivative_of, simplify}};
//! use tungsten_parser::{parse_expression, VariableTable};
//!
//! let mut vars = VariableTable::new();
//! let tree = parse_expression("x^2 + 3*x", &mut vars).unwrap();
//! let derivative = simplify(&derivative_of(&tree, "x", &vars).unwrap());
//!
//! vars.set_by_name("x", 2.0).unwrap();
//! assert_eq!(derivative.eval(&vars).unwrap(), 7.0);
//! ```

pub mod error;
pub mod fmt;
pub mod numerical;
pub mod symbolic;
