use tungsten_error::Error;
use tungsten_parser::{Node, VariableTable};
use crate::error::UnknownVariableIndex;

/// Any type that can be evaluated to produce a number.
pub trait Eval {
    /// Evaluate the expression to produce a number, looking up variables in the given table.
    ///
    /// Arithmetic follows IEEE 754: division by zero and out-of-domain functions produce
    /// infinities or NaN rather than errors. The only error is a variable index that the table
    /// does not contain.
    fn eval(&self, vars: &VariableTable) -> Result<f64, Error>;
}

impl Eval for Node {
    fn eval(&self, vars: &VariableTable) -> Result<f64, Error> {
        match self {
            Node::Number(value) => Ok(*value),
            Node::Variable(index) => vars
                .get(*index)
                .ok_or_else(|| Error::without_spans(UnknownVariableIndex { index: *index })),
            Node::Unary(op, arg) => Ok(op.apply(arg.eval(vars)?)),
            Node::Binary(op, lhs, rhs) => Ok(op.apply(lhs.eval(vars)?, rhs.eval(vars)?)),
        }
    }
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use super::*;
    use tungsten_parser::parse_expression;

    /// Parses and evaluates the source, with the given variable values.
    fn eval_with(source: &str, values: &[(&str, f64)]) -> f64 {
        let mut vars = VariableTable::new();
        let node = parse_expression(source, &mut vars).unwrap();
        for (name, value) in values {
            vars.set_by_name(name, *value).unwrap();
        }
        node.eval(&vars).unwrap()
    }

    #[test]
    fn binary_expr() {
        assert_eq!(eval_with("2+3*4", &[]), 14.0);
    }

    #[test]
    fn parenthesized() {
        assert_eq!(eval_with("(2+3)*4", &[]), 20.0);
        assert_eq!(eval_with("((1 + 9) / 5) * 3", &[]), 6.0);
    }

    #[test]
    fn power_right_associative() {
        assert_eq!(eval_with("2^3^2", &[]), 512.0);
    }

    #[test]
    fn with_variables() {
        assert_eq!(eval_with("x * 3 + 2 - x^(3+2)", &[("x", 2.0)]), -24.0);
        assert_eq!(eval_with("(2+x)^2", &[("x", 1.0)]), 9.0);
        assert_eq!(eval_with("x", &[("x", -7.5)]), -7.5);
        assert_eq!(eval_with("4", &[]), 4.0);
    }

    #[test]
    fn unset_variable_is_zero() {
        assert_eq!(eval_with("y + 1", &[]), 1.0);
    }

    #[test]
    fn functions() {
        assert_float_relative_eq!(eval_with("sin(x)^2 + cos(x)^2", &[("x", 0.7)]), 1.0);
        assert_float_relative_eq!(eval_with("tg(x) * ctg(x)", &[("x", 0.3)]), 1.0);
        assert_float_relative_eq!(eval_with("log(2, 1024)", &[]), 10.0);
        assert_float_relative_eq!(eval_with("ln(x)", &[("x", std::f64::consts::E)]), 1.0);
    }

    #[test]
    fn ieee_semantics() {
        assert_eq!(eval_with("1 / 0", &[]), f64::INFINITY);
        assert!(eval_with("ln(0 - 1)", &[]).is_nan());
    }

    #[test]
    fn unknown_index() {
        let vars = VariableTable::new();
        let err = Node::var(3).eval(&vars).unwrap_err();
        assert_eq!(err.downcast_ref::<UnknownVariableIndex>(), Some(&UnknownVariableIndex { index: 3 }));
    }

    #[test]
    fn does_not_mutate() {
        let mut vars = VariableTable::new();
        let node = parse_expression("x^2 + 1", &mut vars).unwrap();
        let before = node.clone();
        node.eval(&vars).unwrap();
        assert_eq!(node, before);
    }
}
