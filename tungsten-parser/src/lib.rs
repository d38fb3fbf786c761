//! Parser and expression tree for infix mathematical expressions.
//!
//! Source text such as `x^2 + sin(3*x)` is split into tokens by the [`tokenizer`], then parsed
//! by a recursive-descent [`Parser`](parser::Parser) into a [`Node`] tree. Variable names are
//! interned into a [`VariableTable`], and the tree only stores their indices.
//!
//! ```
//! use tungsten_parser::{parse_expression, VariableTable};
//!
//! let mut vars = VariableTable::new();
//! let tree = parse_expression("2 * x + 1", &mut vars).unwrap();
//! assert_eq!(tree.display(&vars).to_string(), "2 * x + 1");
//! assert_eq!(vars.find("x"), Some(0));
//! ```

pub mod parser;
pub mod tokenizer;
pub mod vars;

pub use parser::{ast::Node, parse_expression};
pub use vars::VariableTable;
