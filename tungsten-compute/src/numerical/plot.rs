//! Sampling of expressions for plotting.
//!
//! Only the sampling is provided here; drawing the points is left to the caller.

use std::ops::RangeInclusive;
use tracing::debug;
use tungsten_error::Error;
use tungsten_parser::{Node, VariableTable};
use crate::error::UnknownVariableIndex;
use super::eval::Eval;

/// A pair of `(x, y)` values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GraphPoint<T>(pub T, pub T);

impl<T> From<(T, T)> for GraphPoint<T> {
    fn from((x, y): (T, T)) -> GraphPoint<T> {
        GraphPoint(x, y)
    }
}

/// Evaluates the expression at `samples` evenly spaced values of the variable across `range`,
/// returning the points to draw.
///
/// Samples that evaluate to a non-finite number, or whose magnitude exceeds `bound`, are
/// dropped. The variable is restored to its previous value before returning.
pub fn sample(
    node: &Node,
    var: usize,
    vars: &mut VariableTable,
    range: RangeInclusive<f64>,
    samples: usize,
    bound: f64,
) -> Result<Vec<GraphPoint<f64>>, Error> {
    let previous = vars.get(var)
        .ok_or_else(|| Error::without_spans(UnknownVariableIndex { index: var }))?;

    let (start, end) = range.into_inner();
    let step = if samples > 1 {
        (end - start) / (samples - 1) as f64
    } else {
        0.0
    };

    let mut points = Vec::with_capacity(samples);
    let mut result = Ok(());
    for i in 0..samples {
        let x = start + step * i as f64;
        vars.set(var, x);
        match node.eval(vars) {
            Ok(y) if y.is_finite() && y.abs() <= bound => points.push(GraphPoint(x, y)),
            Ok(_) => (),
            Err(err) => {
                result = Err(err);
                break;
            },
        }
    }

    vars.set(var, previous);
    result?;

    debug!(samples, kept = points.len(), "sampled expression");
    Ok(points)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use tungsten_parser::parse_expression;

    #[test]
    fn evenly_spaced() {
        let mut vars = VariableTable::new();
        let node = parse_expression("2 * x", &mut vars).unwrap();
        let points = sample(&node, 0, &mut vars, 0.0..=2.0, 5, 100.0).unwrap();
        assert_eq!(points, vec![
            GraphPoint(0.0, 0.0),
            GraphPoint(0.5, 1.0),
            GraphPoint(1.0, 2.0),
            GraphPoint(1.5, 3.0),
            GraphPoint(2.0, 4.0),
        ]);
    }

    #[test]
    fn drops_poles_and_out_of_bounds() {
        let mut vars = VariableTable::new();
        let node = parse_expression("1 / x", &mut vars).unwrap();
        let points = sample(&node, 0, &mut vars, -1.0..=1.0, 5, 1.5).unwrap();

        // x = 0 is a pole, x = ±0.5 exceed the bound
        assert_eq!(points, vec![GraphPoint(-1.0, -1.0), GraphPoint(1.0, 1.0)]);
    }

    #[test]
    fn restores_binding() {
        let mut vars = VariableTable::new();
        let node = parse_expression("x + y", &mut vars).unwrap();
        vars.set_by_name("x", 42.0).unwrap();
        sample(&node, 0, &mut vars, 0.0..=1.0, 3, 10.0).unwrap();
        assert_eq!(vars.get_by_name("x").unwrap(), 42.0);
    }

    #[test]
    fn unknown_variable() {
        let mut vars = VariableTable::new();
        let node = Node::num(1.0);
        let err = sample(&node, 0, &mut vars, 0.0..=1.0, 3, 10.0).unwrap_err();
        assert!(err.is::<UnknownVariableIndex>());
    }
}
