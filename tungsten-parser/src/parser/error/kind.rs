use ariadne::Fmt;
use tungsten_attrs::ErrorKind;
use tungsten_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of expression",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of expression",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// Expected to see a certain kind of expression here.
///
/// The `expected` field should also contain the word "a" or "an" at the beginning to make the
/// error grammatically correct.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected {}", expected),
    labels = [format!("I expected to see {} here", expected)],
    help = format!("a {} is a number, a variable, a function call, or a parenthesized expression", "primary expression".fg(EXPR)),
)]
pub struct ExpectedExpr {
    /// The kind of expression that was expected.
    pub expected: &'static str,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// A function was called without any arguments, or a pair of parentheses was left empty.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
    help = match name {
        Some(name) => format!("`{}` takes {} argument(s)", name.fg(EXPR), arity),
        None => "parentheses must contain an expression".to_string(),
    },
)]
pub struct EmptyArguments {
    /// The name of the function that was called, if the parentheses belong to a call.
    pub name: Option<&'static str>,

    /// The number of arguments the function takes.
    pub arity: usize,
}

/// A number literal could not be converted to a floating-point value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid number literal",
    labels = ["this number could not be read"],
)]
pub struct InvalidNumber;

/// The expression is nested more deeply than the configured limit.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = ["the limit was exceeded here"],
    help = format!("the maximum nesting depth is {}", limit.fg(EXPR)),
)]
pub struct TooDeep {
    /// The maximum depth that was allowed.
    pub limit: usize,
}
