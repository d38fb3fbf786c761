//! The infix levels of the grammar.
//!
//! ```text
//! Expr    ::= MulTerm (('+' | '-') MulTerm)*
//! MulTerm ::= PowTerm (('*' | '/') PowTerm)*
//! PowTerm ::= Primary ('^' PowTerm)?
//! ```
//!
//! Operator precedence is encoded by which level parses which operators. Once an operator has
//! been consumed, its right-hand side is required, so any failure to parse it is fatal.
//!
//! Chains are parsed in a loop rather than recursively, so each level tracks the depth of the
//! tree it builds and fails with a fatal [`TooDeep`](super::error::kind::TooDeep) error as soon
//! as it exceeds the parser's limit.

use crate::tokenizer::TokenKind;
use super::{
    ast::Node,
    error::Error,
    primary::parse_primary,
    token::op::BinOp,
    Parse,
    Parser,
};

impl Parse for Node {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        parse_sum(input)
    }
}

/// Parses a chain of operands separated by any of the given operators, building a
/// left-associative tree.
fn parse_chain(
    input: &mut Parser,
    ops: &'static [TokenKind],
    operand: fn(&mut Parser) -> Result<Node, Error>,
) -> Result<Node, Error> {
    let mut lhs = operand(input)?;
    let mut depth = lhs.depth();
    while let Ok(op) = input.try_parse_with_fn(|input| BinOp::parse_one_of(input, ops)) {
        let rhs = operand(input).map_err(Error::into_fatal)?;
        depth = depth.max(rhs.depth()) + 1;
        input.check_tree_depth(depth, op.span)?;
        lhs = Node::binary(op.kind, lhs, rhs);
    }
    Ok(lhs)
}

/// Parses a chain of terms separated by `+` or `-`, building a left-associative tree.
pub fn parse_sum(input: &mut Parser) -> Result<Node, Error> {
    parse_chain(input, &[TokenKind::Add, TokenKind::Sub], parse_product)
}

/// Parses a chain of factors separated by `*` or `/`, building a left-associative tree.
pub fn parse_product(input: &mut Parser) -> Result<Node, Error> {
    parse_chain(input, &[TokenKind::Mul, TokenKind::Div], parse_power)
}

/// Parses a power. The exponent is parsed recursively, making `^` right-associative.
pub fn parse_power(input: &mut Parser) -> Result<Node, Error> {
    let base = parse_primary(input)?;
    match input.try_parse_with_fn(|input| BinOp::parse_one_of(input, &[TokenKind::Exp])) {
        Ok(op) => {
            let exp = input.nested(parse_power).map_err(Error::into_fatal)?;
            input.check_tree_depth(base.depth().max(exp.depth()) + 1, op.span)?;
            Ok(Node::binary(op.kind, base, exp))
        },
        Err(_) => Ok(base),
    }
}
