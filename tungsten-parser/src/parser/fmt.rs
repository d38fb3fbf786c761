//! Infix formatting of expression trees.

use std::fmt::{Display, Formatter, Result};
use crate::vars::VariableTable;
use super::{ast::{BinOpKind, Node, Operator}, Associativity};

/// Resolves variable indices to names when formatting a tree.
pub trait VarNames {
    /// Returns the name of the variable at the given index.
    fn var_name(&self, index: usize) -> Option<&str>;
}

impl VarNames for VariableTable {
    fn var_name(&self, index: usize) -> Option<&str> {
        self.name(index)
    }
}

impl VarNames for [&str] {
    fn var_name(&self, index: usize) -> Option<&str> {
        self.get(index).copied()
    }
}

/// Writes the name of the variable at the given index, or `v{index}` if it has no name.
pub fn fmt_var(f: &mut Formatter, names: &(impl VarNames + ?Sized), index: usize) -> Result {
    match names.var_name(index) {
        Some(name) => write!(f, "{}", name),
        None => write!(f, "v{}", index),
    }
}

/// Which operand of a binary operator a node is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Side {
    Left,
    Right,
}

/// Returns true if `child`, appearing on the given side of an infix `parent` operator, must be
/// parenthesized to keep its meaning.
///
/// A child of equal precedence only needs parentheses on the side its parent does not group
/// towards, unless the parent is associative (`a + (b - c)` is written `a + b - c`). Division
/// shares the precedence of exponentiation, so `(a / b)^c` and `a^(b / c)` are parenthesized.
pub fn needs_parens(parent: BinOpKind, child: &Node, side: Side) -> bool {
    let child_op = match child {
        Node::Number(n) => return *n < 0.0 || !n.is_finite(),
        Node::Variable(_) | Node::Unary(..) => return false,
        Node::Binary(op, ..) if !op.is_infix() => return false,
        Node::Binary(op, ..) => *op,
    };

    if child_op.precedence() != parent.precedence() {
        return child_op.precedence() < parent.precedence();
    }

    match (parent.associativity(), side) {
        (Associativity::Left, Side::Left) => false,
        (Associativity::Right, Side::Right) => child_op != parent,
        _ => !parent.is_commutative(),
    }
}

/// Writes a number. Non-finite numbers have no literal, so they are written as the division that
/// produces them.
fn fmt_number(f: &mut Formatter, n: f64) -> Result {
    if n.is_nan() {
        write!(f, "0 / 0")
    } else if n.is_infinite() {
        write!(f, "{} / 0", n.signum())
    } else {
        write!(f, "{}", n)
    }
}

/// A wrapper that formats a tree in infix notation, created by [`Node::display`].
pub struct NodeDisplay<'a, N: ?Sized> {
    node: &'a Node,
    names: &'a N,
}

impl Node {
    /// Returns a wrapper implementing [`Display`] that formats the tree in infix notation, using
    /// `names` to resolve variable names.
    pub fn display<'a, N: VarNames + ?Sized>(&'a self, names: &'a N) -> NodeDisplay<'a, N> {
        NodeDisplay { node: self, names }
    }
}

impl<N: VarNames + ?Sized> NodeDisplay<'_, N> {
    fn fmt_operand(&self, f: &mut Formatter, parent: BinOpKind, child: &Node, side: Side) -> Result {
        let inner = child.display(self.names);
        if needs_parens(parent, child, side) {
            write!(f, "({})", inner)
        } else {
            write!(f, "{}", inner)
        }
    }
}

impl<N: VarNames + ?Sized> Display for NodeDisplay<'_, N> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self.node {
            Node::Number(n) => fmt_number(f, *n),
            Node::Variable(index) => fmt_var(f, self.names, *index),
            Node::Unary(op, arg) => write!(f, "{}({})", Operator::Unary(*op).text(), arg.display(self.names)),
            Node::Binary(BinOpKind::Log, base, value) => {
                write!(f, "log({}, {})", base.display(self.names), value.display(self.names))
            },
            Node::Binary(op, lhs, rhs) => {
                self.fmt_operand(f, *op, lhs, Side::Left)?;
                match op {
                    BinOpKind::Pow => write!(f, "^")?,
                    _ => write!(f, " {} ", Operator::Binary(*op).text())?,
                }
                self.fmt_operand(f, *op, rhs, Side::Right)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::parser::parse_expression;

    /// Parses the source, then formats it back.
    fn roundtrip(source: &str) -> String {
        let mut vars = VariableTable::new();
        let node = parse_expression(source, &mut vars).unwrap();
        node.display(&vars).to_string()
    }

    #[test]
    fn fmt_display() {
        assert_eq!(roundtrip("x*3+2-x^(3+2)"), "x * 3 + 2 - x^(3 + 2)");
    }

    #[test]
    fn fmt_display_minimal_parens() {
        assert_eq!(roundtrip("((a+b))*c"), "(a + b) * c");
        assert_eq!(roundtrip("a-(b-c)"), "a - (b - c)");
        assert_eq!(roundtrip("a-b-c"), "a - b - c");
        assert_eq!(roundtrip("a/(b*c)"), "a / (b * c)");
    }

    #[test]
    fn fmt_display_powers() {
        assert_eq!(roundtrip("x^y^z"), "x^y^z");
        assert_eq!(roundtrip("(x^y)^z"), "(x^y)^z");
        assert_eq!(roundtrip("x^(a/b)"), "x^(a / b)");
        assert_eq!(roundtrip("(a/b)^2"), "(a / b)^2");
    }

    #[test]
    fn fmt_display_regrouping() {
        assert_eq!(roundtrip("a+(b-c)"), "a + b - c");
        assert_eq!(roundtrip("a*(b*c)"), "a * b * c");
        assert_eq!(roundtrip("a/(b/c)"), "a / (b / c)");
        assert_eq!(roundtrip("a/b/c"), "a / b / c");
        assert_eq!(roundtrip("(a^b)/c"), "a^b / c");
        assert_eq!(roundtrip("a/b^c"), "a / (b^c)");
        assert_eq!(roundtrip("a*b/c"), "(a * b) / c");
    }

    #[test]
    fn needs_parens_by_side() {
        let (a, b) = (Node::var(0), Node::var(1));
        assert!(needs_parens(BinOpKind::Sub, &(a.clone() + b.clone()), Side::Right));
        assert!(!needs_parens(BinOpKind::Sub, &(a.clone() + b.clone()), Side::Left));
        assert!(needs_parens(BinOpKind::Pow, &a.clone().pow(b.clone()), Side::Left));
        assert!(!needs_parens(BinOpKind::Pow, &a.clone().pow(b.clone()), Side::Right));
        assert!(needs_parens(BinOpKind::Pow, &(a.clone() / b.clone()), Side::Right));
        assert!(!needs_parens(BinOpKind::Add, &Node::log(a, b), Side::Right));
    }

    #[test]
    fn fmt_display_functions() {
        assert_eq!(roundtrip("tan(x) + cot(log(2, x))"), "tg(x) + ctg(log(2, x))");
        assert_eq!(roundtrip("sin(x)^2"), "sin(x)^2");
    }

    #[test]
    fn fmt_display_negative_constant() {
        let node = Node::num(-1.0) * Node::var(0);
        assert_eq!(node.display(&["t"][..]).to_string(), "(-1) * t");
    }

    #[test]
    fn fmt_display_non_finite() {
        let mut vars = VariableTable::new();
        let node = parse_expression("1e999", &mut vars).unwrap();
        assert_eq!(node, Node::num(f64::INFINITY));
        assert_eq!(node.display(&vars).to_string(), "1 / 0");

        let reparsed = parse_expression("1 / 0", &mut vars).unwrap();
        assert!(vars.is_empty());
        assert_eq!(reparsed, Node::num(1.0) / 0.0);

        let names: &[&str] = &["x"];
        let node = Node::var(0) * f64::NEG_INFINITY + f64::NAN;
        assert_eq!(node.display(names).to_string(), "x * (-1 / 0) + (0 / 0)");
    }

    #[test]
    fn unnamed_variable() {
        let node = Node::var(3) + 1.0;
        assert_eq!(node.display(&["x"][..]).to_string(), "v3 + 1");
    }
}
