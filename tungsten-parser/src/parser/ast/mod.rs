//! The expression tree produced by the parser.

pub mod node;

pub use node::{Node, EPSILON};
pub use super::token::op::{BinOpKind, OpInfo, Operator, UnaryOpKind, OPERATORS};
