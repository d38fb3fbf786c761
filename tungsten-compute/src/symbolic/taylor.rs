//! Truncated Taylor series expansion.

use tracing::debug;
use tungsten_error::Error;
use tungsten_parser::{Node, VariableTable};
use crate::{
    error::{TooManyTerms, UnknownVariableIndex},
    numerical::Eval,
    symbolic::{derivative::derivative, simplify::simplify},
};

/// The maximum number of terms that can be expanded.
pub const MAX_TAYLOR_TERMS: usize = 20;

/// A truncated Taylor series.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    /// The simplified polynomial `c0 + c1 * (x - a) + c2 * (x - a)^2 + ...`.
    pub polynomial: Node,

    /// The coefficient of each term, in increasing order of power. Each coefficient is the
    /// derivative of that order at the expansion point, divided by the factorial of the order.
    pub coefficients: Vec<f64>,
}

/// Expands the first `terms` terms of the Taylor series of the given tree, with respect to the
/// variable at index `var`, centered at `point`.
///
/// The variable is bound to `point` while the coefficients are computed, and restored to its
/// previous value before returning, including when an error occurs.
pub fn expand(
    node: &Node,
    var: usize,
    point: f64,
    terms: usize,
    vars: &mut VariableTable,
) -> Result<Expansion, Error> {
    if terms > MAX_TAYLOR_TERMS {
        return Err(Error::without_spans(TooManyTerms { given: terms, max: MAX_TAYLOR_TERMS }));
    }

    let previous = vars.set(var, point)
        .ok_or_else(|| Error::without_spans(UnknownVariableIndex { index: var }))?;
    let result = expand_at_point(node, var, point, terms, vars);
    vars.set(var, previous);
    result
}

fn expand_at_point(
    node: &Node,
    var: usize,
    point: f64,
    terms: usize,
    vars: &VariableTable,
) -> Result<Expansion, Error> {
    let mut coefficients = Vec::with_capacity(terms);
    let mut sum = Node::num(0.0);
    let mut current = simplify(node);
    let mut factorial = 1.0;

    for k in 0..terms {
        if k > 0 {
            current = simplify(&derivative(&current, var)?);
            factorial *= k as f64;
        }

        let coefficient = current.eval(vars)? / factorial;
        debug!(k, coefficient, "taylor coefficient");
        coefficients.push(coefficient);

        let term = match k {
            0 => Node::num(coefficient),
            _ => coefficient * (Node::var(var) - point).pow(k as f64),
        };
        sum = sum + term;
    }

    Ok(Expansion { polynomial: simplify(&sum), coefficients })
}

/// Returns the simplified polynomial of the first `terms` terms of the Taylor series of the given
/// tree, centered at `point`. See [`expand`].
pub fn taylor(
    node: &Node,
    var: usize,
    point: f64,
    terms: usize,
    vars: &mut VariableTable,
) -> Result<Node, Error> {
    expand(node, var, point, terms, vars).map(|expansion| expansion.polynomial)
}

/// Like [`taylor`], with the variable given by name.
pub fn taylor_of(
    node: &Node,
    name: &str,
    point: f64,
    terms: usize,
    vars: &mut VariableTable,
) -> Result<Node, Error> {
    let var = vars.resolve(name)?;
    taylor(node, var, point, terms, vars)
}
