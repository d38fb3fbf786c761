use crate::parser::{
    iter::NodeIter,
    token::op::{BinOpKind, Operator, UnaryOpKind},
};
use std::{mem, ops::{Add, Div, Mul, Sub}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance used when comparing numbers against the neutral elements `0` and `1`.
pub const EPSILON: f64 = 1e-12;

/// A node in an expression tree.
///
/// Each node exclusively owns its children, so cloning a node deep-copies the whole subtree and
/// dropping it frees the whole subtree. Nodes do not know their parent; code that needs the
/// parent's operator (such as the renderers) passes it down explicitly.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// A numeric constant.
    Number(f64),

    /// A variable, identified by its index in a [`VariableTable`](crate::vars::VariableTable).
    Variable(usize),

    /// A function of one argument, such as `sin(x)`.
    Unary(UnaryOpKind, Box<Node>),

    /// An operation of two operands. For [`BinOpKind::Log`], the left operand is the base.
    Binary(BinOpKind, Box<Node>, Box<Node>),
}

impl Node {
    /// Creates a number node.
    pub fn num(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a variable node.
    pub fn var(index: usize) -> Self {
        Self::Variable(index)
    }

    /// Creates a unary node.
    pub fn unary(op: UnaryOpKind, arg: Node) -> Self {
        Self::Unary(op, Box::new(arg))
    }

    /// Creates a binary node.
    pub fn binary(op: BinOpKind, lhs: Node, rhs: Node) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Creates the node `self ^ exp`.
    pub fn pow(self, exp: impl Into<Node>) -> Self {
        Self::binary(BinOpKind::Pow, self, exp.into())
    }

    /// Creates the node `log(base, value)`.
    pub fn log(base: Node, value: Node) -> Self {
        Self::binary(BinOpKind::Log, base, value)
    }

    /// Creates the node `sin(self)`.
    pub fn sin(self) -> Self {
        Self::unary(UnaryOpKind::Sin, self)
    }

    /// Creates the node `cos(self)`.
    pub fn cos(self) -> Self {
        Self::unary(UnaryOpKind::Cos, self)
    }

    /// Creates the node `tg(self)`.
    pub fn tan(self) -> Self {
        Self::unary(UnaryOpKind::Tan, self)
    }

    /// Creates the node `ctg(self)`.
    pub fn cot(self) -> Self {
        Self::unary(UnaryOpKind::Cot, self)
    }

    /// Creates the node `ln(self)`.
    pub fn ln(self) -> Self {
        Self::unary(UnaryOpKind::Ln, self)
    }

    /// Returns the operator of this node, if it is an operator node.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Self::Number(_) | Self::Variable(_) => None,
            Self::Unary(op, _) => Some(Operator::Unary(*op)),
            Self::Binary(op, _, _) => Some(Operator::Binary(*op)),
        }
    }

    /// Returns the value of the node if it is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the node is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns true if the node is a number within [`EPSILON`] of the given value.
    pub fn is_number_near(&self, value: f64) -> bool {
        self.as_number().map_or(false, |n| (n - value).abs() < EPSILON)
    }

    /// Returns true if the node contains the variable with the given index.
    pub fn contains_var(&self, index: usize) -> bool {
        self.post_order_iter().any(|node| matches!(node, Self::Variable(i) if *i == index))
    }

    /// Returns the number of nodes in the tree.
    pub fn size(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns the depth of the tree. A single node has depth `1`.
    pub fn depth(&self) -> usize {
        let mut stack = vec![(self, 1)];
        let mut max = 0;
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            match node {
                Self::Number(_) | Self::Variable(_) => (),
                Self::Unary(_, arg) => stack.push((arg, depth + 1)),
                Self::Binary(_, lhs, rhs) => {
                    stack.push((lhs, depth + 1));
                    stack.push((rhs, depth + 1));
                },
            }
        }
        max
    }

    /// Returns an iterator that traverses the tree in left-to-right post-order (i.e.
    /// depth-first).
    pub fn post_order_iter(&self) -> NodeIter {
        NodeIter::new(self)
    }

    /// Moves the children of this node that are operators onto `stack`, leaving `0` in their
    /// place. Leaf children stay where they are.
    fn detach_children(&mut self, stack: &mut Vec<Node>) {
        let mut detach = |child: &mut Box<Node>| {
            if matches!(**child, Self::Unary(..) | Self::Binary(..)) {
                stack.push(mem::take(&mut **child));
            }
        };
        match self {
            Self::Number(_) | Self::Variable(_) => (),
            Self::Unary(_, arg) => detach(arg),
            Self::Binary(_, lhs, rhs) => {
                detach(lhs);
                detach(rhs);
            },
        }
    }
}

impl Default for Node {
    /// The number `0`.
    fn default() -> Self {
        Self::Number(0.0)
    }
}

impl Drop for Node {
    /// Frees the subtree with an explicit stack, so that dropping a deep tree cannot overflow the
    /// call stack.
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.detach_children(&mut stack);
        while let Some(mut node) = stack.pop() {
            node.detach_children(&mut stack);
        }
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Implements the arithmetic operators for [`Node`], building the corresponding binary node.
macro_rules! binary_ops {
    ($($trait:ident $method:ident $kind:ident),* $(,)?) => {
        $(
            impl $trait for Node {
                type Output = Node;

                fn $method(self, rhs: Node) -> Self::Output {
                    Node::binary(BinOpKind::$kind, self, rhs)
                }
            }

            impl $trait<f64> for Node {
                type Output = Node;

                fn $method(self, rhs: f64) -> Self::Output {
                    Node::binary(BinOpKind::$kind, self, Node::Number(rhs))
                }
            }

            impl $trait<Node> for f64 {
                type Output = Node;

                fn $method(self, rhs: Node) -> Self::Output {
                    Node::binary(BinOpKind::$kind, Node::Number(self), rhs)
                }
            }
        )*
    };
}

binary_ops!(
    Add add Add,
    Sub sub Sub,
    Mul mul Mul,
    Div div Div,
);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn build_with_operators() {
        let x = Node::var(0);
        let tree = 2.0 * x.clone() + x.pow(2.0);
        assert_eq!(
            tree,
            Node::binary(
                BinOpKind::Add,
                Node::binary(BinOpKind::Mul, Node::num(2.0), Node::var(0)),
                Node::binary(BinOpKind::Pow, Node::var(0), Node::num(2.0)),
            ),
        );
    }

    #[test]
    fn clone_is_independent() {
        let original = Node::var(0).sin() + 1.0;
        let mut copy = original.clone();
        if let Node::Binary(_, _, rhs) = &mut copy {
            **rhs = Node::num(2.0);
        }
        assert_eq!(original, Node::var(0).sin() + 1.0);
        assert_ne!(original, copy);
    }

    #[test]
    fn size_and_depth() {
        let tree = Node::log(Node::num(2.0), Node::var(0) * Node::var(1)).ln();
        assert_eq!(tree.size(), 6);
        assert_eq!(tree.depth(), 4);
        assert_eq!(Node::num(1.0).depth(), 1);
    }

    #[test]
    fn drop_deep_tree() {
        let mut tree = Node::var(0);
        for i in 0..200_000 {
            tree = if i % 2 == 0 { tree + 1.0 } else { tree.cos() };
        }
        assert_eq!(tree.depth(), 200_001);
        drop(tree);
    }

    #[test]
    fn free_variable_scan() {
        let tree = Node::var(0).pow(Node::var(2) + 1.0);
        assert!(tree.contains_var(0));
        assert!(tree.contains_var(2));
        assert!(!tree.contains_var(1));
    }

    #[test]
    fn near_neutral() {
        assert!(Node::num(1e-13).is_number_near(0.0));
        assert!(!Node::num(1e-6).is_number_near(0.0));
        assert!(!Node::var(0).is_number_near(0.0));
    }
}
