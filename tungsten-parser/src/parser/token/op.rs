//! Operator kinds, the operator catalog, and structs to help parse binary operators.

use crate::{
    parser::{
        error::{Error, kind},
        Associativity,
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    Sin,
    Cos,
    Tan,
    Cot,
    Ln,
}

impl UnaryOpKind {
    /// Returns the precedence of the unary operation. Functions always bind tighter than any
    /// infix operator.
    pub fn precedence(self) -> Precedence {
        Precedence::Func
    }

    /// Applies the operation to the given value.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Sin => value.sin(),
            Self::Cos => value.cos(),
            Self::Tan => value.tan(),
            Self::Cot => 1.0 / value.tan(),
            Self::Ln => value.ln(),
        }
    }
}

/// An operation of two operands.
///
/// [`BinOpKind::Log`] is written with function syntax, `log(base, value)`; the left operand is
/// the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Log,
}

impl BinOpKind {
    /// Returns the precedence of the binary operation.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul => Precedence::Factor,
            Self::Div | Self::Pow => Precedence::Exp,
            Self::Log => Precedence::Func,
        }
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Log => Associativity::Left,
        }
    }

    /// Returns true if the operation is commutative.
    pub fn is_commutative(self) -> bool {
        Operator::Binary(self).info().commutative
    }

    /// Returns true if the operation is written between its operands.
    pub fn is_infix(self) -> bool {
        !matches!(self, Self::Log)
    }

    /// Applies the operation to the given operands.
    ///
    /// Division by zero and invalid powers follow IEEE 754 semantics, producing infinities or NaN
    /// instead of failing.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
            Self::Log => rhs.ln() / lhs.ln(),
        }
    }
}

/// Any operator that can appear in a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Unary(UnaryOpKind),
    Binary(BinOpKind),
}

impl Operator {
    /// Returns the position of the operator in [`OPERATORS`].
    pub fn code(self) -> usize {
        match self {
            Self::Binary(BinOpKind::Add) => 0,
            Self::Binary(BinOpKind::Sub) => 1,
            Self::Binary(BinOpKind::Mul) => 2,
            Self::Binary(BinOpKind::Div) => 3,
            Self::Binary(BinOpKind::Pow) => 4,
            Self::Unary(UnaryOpKind::Sin) => 5,
            Self::Unary(UnaryOpKind::Cos) => 6,
            Self::Unary(UnaryOpKind::Tan) => 7,
            Self::Unary(UnaryOpKind::Cot) => 8,
            Self::Binary(BinOpKind::Log) => 9,
            Self::Unary(UnaryOpKind::Ln) => 10,
        }
    }

    /// Returns the catalog entry of the operator.
    pub fn info(self) -> &'static OpInfo {
        &OPERATORS[self.code()]
    }

    /// Returns the text used to display the operator.
    pub fn text(self) -> &'static str {
        self.info().text
    }

    /// Returns the number of operands the operator takes.
    pub fn arity(self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }

    /// Returns the precedence of the operator.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Unary(op) => op.precedence(),
            Self::Binary(op) => op.precedence(),
        }
    }
}

/// A record in the operator catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpInfo {
    /// The operator this record describes.
    pub op: Operator,

    /// Whether the operands of the operator can be swapped.
    pub commutative: bool,

    /// The text used to display the operator.
    pub text: &'static str,

    /// The precedence rank used when rendering: additive operators are `0`, multiplication is
    /// `1`, division and powers are `2`, and functions are `3`.
    pub rank: u8,
}

/// The operator catalog, ordered by operator code.
pub const OPERATORS: [OpInfo; 11] = [
    OpInfo { op: Operator::Binary(BinOpKind::Add), commutative: true, text: "+", rank: 0 },
    OpInfo { op: Operator::Binary(BinOpKind::Sub), commutative: false, text: "-", rank: 0 },
    OpInfo { op: Operator::Binary(BinOpKind::Mul), commutative: true, text: "*", rank: 1 },
    OpInfo { op: Operator::Binary(BinOpKind::Div), commutative: false, text: "/", rank: 2 },
    OpInfo { op: Operator::Binary(BinOpKind::Pow), commutative: false, text: "^", rank: 2 },
    OpInfo { op: Operator::Unary(UnaryOpKind::Sin), commutative: false, text: "sin", rank: 3 },
    OpInfo { op: Operator::Unary(UnaryOpKind::Cos), commutative: false, text: "cos", rank: 3 },
    OpInfo { op: Operator::Unary(UnaryOpKind::Tan), commutative: false, text: "tg", rank: 3 },
    OpInfo { op: Operator::Unary(UnaryOpKind::Cot), commutative: false, text: "ctg", rank: 3 },
    OpInfo { op: Operator::Binary(BinOpKind::Log), commutative: false, text: "log", rank: 3 },
    OpInfo { op: Operator::Unary(UnaryOpKind::Ln), commutative: false, text: "ln", rank: 3 },
];

/// An infix binary operator token.
#[derive(Debug, Clone, PartialEq)]
pub struct BinOp {
    /// The kind of binary operator.
    pub kind: BinOpKind,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

impl BinOp {
    /// Parses a binary operator, only accepting the given operators.
    ///
    /// The returned error is non-fatal: finding a different token simply means the operator
    /// chain being parsed has ended.
    pub fn parse_one_of(input: &mut Parser, allowed: &'static [TokenKind]) -> Result<Self, Error> {
        let op = Self::parse(input)?;
        let token = match op.kind {
            BinOpKind::Add => TokenKind::Add,
            BinOpKind::Sub => TokenKind::Sub,
            BinOpKind::Mul => TokenKind::Mul,
            BinOpKind::Div => TokenKind::Div,
            BinOpKind::Pow => TokenKind::Exp,
            BinOpKind::Log => TokenKind::Name,
        };

        if allowed.contains(&token) {
            Ok(op)
        } else {
            Err(Error::new(vec![op.span], kind::UnexpectedToken {
                expected: allowed,
                found: token,
            }))
        }
    }
}

impl Parse for BinOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        let kind = match token.kind {
            TokenKind::Add => Ok(BinOpKind::Add),
            TokenKind::Sub => Ok(BinOpKind::Sub),
            TokenKind::Mul => Ok(BinOpKind::Mul),
            TokenKind::Div => Ok(BinOpKind::Div),
            TokenKind::Exp => Ok(BinOpKind::Pow),
            _ => Err(Error::new(vec![token.span.clone()], kind::UnexpectedToken {
                expected: &[
                    TokenKind::Add,
                    TokenKind::Sub,
                    TokenKind::Mul,
                    TokenKind::Div,
                    TokenKind::Exp,
                ],
                found: token.kind,
            })),
        }?;

        Ok(Self {
            kind,
            span: token.span,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_ordered_by_code() {
        for (code, info) in OPERATORS.iter().enumerate() {
            assert_eq!(info.op.code(), code);
            assert_eq!(info.op.info(), info);
        }
    }

    #[test]
    fn catalog_texts() {
        let texts = OPERATORS.iter().map(|info| info.text).collect::<Vec<_>>();
        assert_eq!(texts, ["+", "-", "*", "/", "^", "sin", "cos", "tg", "ctg", "log", "ln"]);
    }

    #[test]
    fn only_add_and_mul_commute() {
        let commutative = OPERATORS.iter()
            .filter(|info| info.commutative)
            .map(|info| info.op)
            .collect::<Vec<_>>();
        assert_eq!(commutative, [Operator::Binary(BinOpKind::Add), Operator::Binary(BinOpKind::Mul)]);
    }

    #[test]
    fn rank_agrees_with_precedence() {
        for info in OPERATORS.iter() {
            assert_eq!(info.op.precedence().rank(), info.rank, "{:?}", info.op);
        }
    }

    #[test]
    fn numeric_rules() {
        assert_eq!(BinOpKind::Div.apply(1.0, 0.0), f64::INFINITY);
        assert!(BinOpKind::Pow.apply(-1.0, 0.5).is_nan());
        assert_eq!(BinOpKind::Log.apply(2.0, 8.0), 3.0);
        assert_eq!(UnaryOpKind::Cot.apply(std::f64::consts::FRAC_PI_4).round(), 1.0);
    }
}
