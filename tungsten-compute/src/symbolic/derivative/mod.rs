//! Symbolic differentiation.
//!
//! The derivative is built as a new tree; the input is never modified, and every operand reused
//! in the result is a clone. The result is not simplified, so it is usually passed through
//! [`simplify`](crate::symbolic::simplify()) afterwards.

mod function;

use tracing::debug;
use tungsten_error::Error;
use tungsten_parser::{parser::ast::BinOpKind, Node, VariableTable};
use crate::error::TooDeep;

/// The default maximum depth of the tree that can be differentiated.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Differentiates trees with respect to a single variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Differentiator {
    /// The index of the variable to differentiate with respect to.
    var: usize,

    /// The maximum depth of the tree that can be differentiated.
    max_depth: usize,
}

impl Differentiator {
    /// Creates a differentiator with respect to the variable at the given index.
    pub fn new(var: usize) -> Self {
        Self { var, max_depth: DEFAULT_MAX_DEPTH }
    }

    /// Sets the maximum depth of the tree that can be differentiated.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Computes the derivative of the given tree.
    ///
    /// Returns a [`TooDeep`] error if the tree is deeper than the maximum depth.
    pub fn differentiate(&self, node: &Node) -> Result<Node, Error> {
        let result = self.derive(node, 0)?;
        debug!(var = self.var, input = node.size(), output = result.size(), "computed derivative");
        Ok(result)
    }

    fn derive(&self, node: &Node, depth: usize) -> Result<Node, Error> {
        if depth >= self.max_depth {
            return Err(Error::without_spans(TooDeep { limit: self.max_depth }));
        }

        match node {
            Node::Number(_) => Ok(Node::num(0.0)),
            Node::Variable(index) => Ok(Node::num(if *index == self.var { 1.0 } else { 0.0 })),
            Node::Unary(op, arg) => self.function_derivative(*op, arg, depth),
            Node::Binary(op, f, g) => {
                let (f, g) = (&**f, &**g);
                match op {
                    // (f + g)' = f' + g'
                    BinOpKind::Add => Ok(self.derive(f, depth + 1)? + self.derive(g, depth + 1)?),

                    // (f - g)' = f' - g'
                    BinOpKind::Sub => Ok(self.derive(f, depth + 1)? - self.derive(g, depth + 1)?),

                    // (f * g)' = f' * g + f * g'
                    BinOpKind::Mul => {
                        let df = self.derive(f, depth + 1)?;
                        let dg = self.derive(g, depth + 1)?;
                        Ok(df * g.clone() + f.clone() * dg)
                    },

                    // (f / g)' = (f' * g - f * g') / g^2
                    BinOpKind::Div => {
                        let df = self.derive(f, depth + 1)?;
                        let dg = self.derive(g, depth + 1)?;
                        Ok((df * g.clone() - f.clone() * dg) / g.clone().pow(2.0))
                    },

                    BinOpKind::Pow => self.power_derivative(f, g, depth),
                    BinOpKind::Log => self.log_derivative(f, g, depth),
                }
            },
        }
    }

    /// Computes the derivative of `f^g`. The rule applied depends on which of the base and the
    /// exponent contain the variable.
    fn power_derivative(&self, f: &Node, g: &Node, depth: usize) -> Result<Node, Error> {
        match (f.contains_var(self.var), g.contains_var(self.var)) {
            // constant
            (false, false) => Ok(Node::num(0.0)),

            // (f^n)' = f' * (n * f^(n - 1))
            (true, false) => {
                let df = self.derive(f, depth + 1)?;
                Ok(df * (g.clone() * f.clone().pow(g.clone() - 1.0)))
            },

            // (a^g)' = a^g * ln(a) * g'
            (false, true) => {
                let dg = self.derive(g, depth + 1)?;
                Ok(f.clone().pow(g.clone()) * f.clone().ln() * dg)
            },

            // (f^g)' = f^g * (g' * ln(f) + g * f' / f)
            (true, true) => {
                let df = self.derive(f, depth + 1)?;
                let dg = self.derive(g, depth + 1)?;
                Ok(f.clone().pow(g.clone()) * (dg * f.clone().ln() + g.clone() * df / f.clone()))
            },
        }
    }
}

/// Computes the derivative of the given tree with respect to the variable at index `var`.
pub fn derivative(node: &Node, var: usize) -> Result<Node, Error> {
    Differentiator::new(var).differentiate(node)
}

/// Computes the derivative of the given tree with respect to the variable with the given name.
///
/// Returns an [`UnknownVariable`](crate::error::UnknownVariable) error, with suggestions, if the
/// name was never registered.
pub fn derivative_of(node: &Node, name: &str, vars: &VariableTable) -> Result<Node, Error> {
    let var = vars.resolve(name)?;
    derivative(node, var)
}
