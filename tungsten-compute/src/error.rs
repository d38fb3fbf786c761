//! Error kinds raised while evaluating, differentiating, or expanding trees.
//!
//! None of these point at source code, so they are always created with
//! [`Error::without_spans`](tungsten_error::Error::without_spans).

use ariadne::Fmt;
use tungsten_attrs::ErrorKind;
use tungsten_error::{ErrorKind, EXPR};

pub use tungsten_parser::{parser::error::kind::TooDeep, vars::UnknownVariable};

/// A variable node refers to an index that is not in the variable table.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown variable index `{}`", index),
    help = "the tree was built with a different variable table",
)]
pub struct UnknownVariableIndex {
    /// The index that was looked up.
    pub index: usize,
}

/// The number of Taylor series terms requested is out of range.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot expand {} terms of a Taylor series", given),
    help = format!("the number of terms must be at most {}", max.fg(EXPR)),
)]
pub struct TooManyTerms {
    /// The number of terms that was requested.
    pub given: usize,

    /// The maximum number of terms.
    pub max: usize,
}
