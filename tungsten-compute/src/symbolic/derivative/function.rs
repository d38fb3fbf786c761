//! Symbolic derivatives of the supported functions, with the chain rule applied.

use tungsten_error::Error;
use tungsten_parser::{parser::ast::UnaryOpKind, Node};
use super::Differentiator;

impl Differentiator {
    /// Computes the derivative of a function of one argument.
    pub(super) fn function_derivative(&self, op: UnaryOpKind, arg: &Node, depth: usize) -> Result<Node, Error> {
        let du = self.derive(arg, depth + 1)?;
        let u = arg.clone();

        Ok(match op {
            // sin(u)' = cos(u) * u'
            UnaryOpKind::Sin => u.cos() * du,

            // cos(u)' = sin(u) * (-1 * u')
            UnaryOpKind::Cos => u.sin() * (-1.0 * du),

            // tg(u)' = u' / cos(u)^2
            UnaryOpKind::Tan => du / u.cos().pow(2.0),

            // ctg(u)' = (-1 * u') / sin(u)^2
            UnaryOpKind::Cot => (-1.0 * du) / u.sin().pow(2.0),

            // ln(u)' = u' / u
            UnaryOpKind::Ln => du / u,
        })
    }

    /// Computes the derivative of `log(base, value)`, assuming the base is constant.
    pub(super) fn log_derivative(&self, base: &Node, value: &Node, depth: usize) -> Result<Node, Error> {
        let dx = self.derive(value, depth + 1)?;
        Ok(dx / (value.clone() * base.clone().ln()))
    }
}
