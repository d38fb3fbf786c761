use std::ops::Range;
use crate::tokenizer::TokenKind;
use super::{
    ast::Node,
    binary::parse_sum,
    error::{kind, Error},
    token::{CloseParen, OpenParen},
    Parse,
    Parser,
};

/// A parenthesized expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Paren {
    /// The inner expression.
    pub expr: Node,

    /// The region of the source code that this expression was parsed from.
    pub span: Range<usize>,
}

impl Parse for Paren {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open_paren = input.try_parse::<OpenParen>()?;
        if input.peek_kind() == Some(TokenKind::CloseParen) {
            return Err(input.error_fatal(kind::EmptyArguments { name: None, arity: 1 }));
        }

        let expr = input.nested(parse_sum).map_err(Error::into_fatal)?;
        let close_paren = input.try_parse::<CloseParen>()
            .map_err(|_| Error::new_fatal(vec![open_paren.span.clone()], kind::UnclosedParenthesis { opening: true }))?;
        Ok(Self {
            expr,
            span: open_paren.span.start..close_paren.span.end,
        })
    }
}
