use once_cell::sync::Lazy;
use std::{collections::HashMap, ops::Range};
use crate::tokenizer::TokenKind;
use super::{
    ast::{BinOpKind, Node, Operator, UnaryOpKind},
    binary::parse_sum,
    error::{kind, Error},
    token::{CloseParen, Comma, OpenParen},
    Parser,
};

/// The names that can be called as functions, and the operator each one builds.
///
/// `tan` and `cot` are accepted as aliases of `tg` and `ctg`.
pub static FUNCTIONS: Lazy<HashMap<&'static str, Operator>> = Lazy::new(|| {
    HashMap::from([
        ("sin", Operator::Unary(UnaryOpKind::Sin)),
        ("cos", Operator::Unary(UnaryOpKind::Cos)),
        ("tg", Operator::Unary(UnaryOpKind::Tan)),
        ("tan", Operator::Unary(UnaryOpKind::Tan)),
        ("ctg", Operator::Unary(UnaryOpKind::Cot)),
        ("cot", Operator::Unary(UnaryOpKind::Cot)),
        ("ln", Operator::Unary(UnaryOpKind::Ln)),
        ("log", Operator::Binary(BinOpKind::Log)),
    ])
});

/// A function call, such as `sin(x)` or `log(2, x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// The node built from the function's operator and arguments.
    pub node: Node,

    /// The region of the source code that this call was parsed from.
    pub span: Range<usize>,
}

impl Call {
    /// Parses the parenthesized argument list of a call to the given function. The name of the
    /// function has already been consumed, and the next token is known to be `(`.
    ///
    /// All errors are fatal, since the name followed by `(` commits the parser to a call.
    pub fn parse_args(input: &mut Parser, op: Operator, name_span: Range<usize>) -> Result<Self, Error> {
        let open_paren = input.try_parse::<OpenParen>().map_err(Error::into_fatal)?;
        if input.peek_kind() == Some(TokenKind::CloseParen) {
            return Err(input.error_fatal(kind::EmptyArguments {
                name: Some(op.text()),
                arity: op.arity(),
            }));
        }

        let first = input.nested(parse_sum).map_err(Error::into_fatal)?;
        let node = match op {
            Operator::Unary(op) => Node::unary(op, first),
            Operator::Binary(op) => {
                input.try_parse::<Comma>().map_err(Error::into_fatal)?;
                let second = input.nested(parse_sum).map_err(Error::into_fatal)?;
                Node::binary(op, first, second)
            },
        };

        let close_paren = input.try_parse::<CloseParen>()
            .map_err(|_| Error::new_fatal(vec![open_paren.span.clone()], kind::UnclosedParenthesis { opening: true }))?;
        input.check_tree_depth(node.depth(), name_span.clone())?;

        Ok(Self {
            node,
            span: name_span.start..close_paren.span.end,
        })
    }
}
