use crate::{tokenizer::TokenKind, try_parse_catch_fatal};
use super::{
    ast::Node,
    call::{Call, FUNCTIONS},
    error::{kind, Error},
    literal::{LitNum, LitSym},
    paren::Paren,
    Parser,
};

/// Parses a primary expression: a parenthesized expression, a function call, a variable, or a
/// number, tried in that order.
///
/// A primary expression is required wherever this is called, so if no alternative matches, the
/// error is fatal.
pub fn parse_primary(input: &mut Parser) -> Result<Node, Error> {
    let _ = try_parse_catch_fatal!(
        input.try_parse::<Paren>().map(|paren| paren.expr),
        input.try_parse_with_fn(parse_name),
        input.try_parse::<LitNum>().map(|num| Node::Number(num.value)),
    );

    Err(match input.peek_kind() {
        None => input.error_fatal(kind::UnexpectedEof),
        Some(_) => input.error_fatal(kind::ExpectedExpr { expected: "a primary expression" }),
    })
}

/// Parses an identifier. A known function name followed by `(` is parsed as a call; any other
/// identifier is registered as a variable.
fn parse_name(input: &mut Parser) -> Result<Node, Error> {
    let sym = input.try_parse::<LitSym>()?;
    if let Some(&op) = FUNCTIONS.get(sym.name.as_str()) {
        if input.peek_kind() == Some(TokenKind::OpenParen) {
            return Call::parse_args(input, op, sym.span).map(|call| call.node);
        }
    }

    let index = input.vars_mut().insert(&sym.name);
    Ok(Node::Variable(index))
}
