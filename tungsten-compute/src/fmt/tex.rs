//! LaTeX formatting of trees.

use std::fmt::{Display, Formatter, Result};
use tungsten_parser::{
    parser::{
        ast::{BinOpKind, UnaryOpKind},
        fmt::{needs_parens, Side, VarNames},
    },
    Node,
};

/// A trait for trees that can be formatted as LaTeX.
pub trait ToTex {
    /// Wraps the tree in a [`TexFormatter`], which implements [`Display`]. Variable names are
    /// looked up in `names`.
    fn to_tex<'a, N: VarNames + ?Sized>(&'a self, names: &'a N) -> TexFormatter<'a, N>;
}

impl ToTex for Node {
    fn to_tex<'a, N: VarNames + ?Sized>(&'a self, names: &'a N) -> TexFormatter<'a, N> {
        TexFormatter { node: self, names }
    }
}

/// A wrapper type that implements [`Display`] for a tree, formatting it as LaTeX math (without
/// the surrounding `$` delimiters).
pub struct TexFormatter<'a, N: ?Sized> {
    node: &'a Node,
    names: &'a N,
}

impl<N: VarNames + ?Sized> TexFormatter<'_, N> {
    fn fmt_node(&self, f: &mut Formatter, node: &Node) -> Result {
        node.to_tex(self.names).fmt(f)
    }

    fn fmt_paren(&self, f: &mut Formatter, node: &Node) -> Result {
        write!(f, "\\left(")?;
        self.fmt_node(f, node)?;
        write!(f, "\\right)")
    }

    fn fmt_operand(&self, f: &mut Formatter, parent: BinOpKind, child: &Node, side: Side) -> Result {
        // `\infty` and `\mathrm{NaN}` are single symbols
        let symbol = matches!(child, Node::Number(n) if n.is_nan() || (n.is_infinite() && n.is_sign_positive()));
        if needs_parens(parent, child, side) && !symbol {
            self.fmt_paren(f, child)
        } else {
            self.fmt_node(f, child)
        }
    }

    /// Helper to format powers.
    fn fmt_pow(&self, f: &mut Formatter, base: &Node, exp: &Node) -> Result {
        match base {
            Node::Binary(..) | Node::Unary(..) => self.fmt_paren(f, base)?,
            Node::Number(n) if *n < 0.0 => self.fmt_paren(f, base)?,
            _ => self.fmt_node(f, base)?,
        }
        write!(f, "^{{")?;
        self.fmt_node(f, exp)?;
        write!(f, "}}")
    }
}

impl<N: VarNames + ?Sized> Display for TexFormatter<'_, N> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self.node {
            Node::Number(n) if n.is_nan() => write!(f, "\\mathrm{{NaN}}"),
            Node::Number(n) if n.is_infinite() => {
                write!(f, "{}\\infty", if *n < 0.0 { "-" } else { "" })
            },
            Node::Number(n) => write!(f, "{}", n),
            Node::Variable(index) => match self.names.var_name(*index) {
                Some(name) => write!(f, "{}", name.replace('_', "\\_")),
                None => write!(f, "v_{{{}}}", index),
            },
            Node::Unary(op, arg) => {
                let name = match op {
                    UnaryOpKind::Sin => "\\sin",
                    UnaryOpKind::Cos => "\\cos",
                    UnaryOpKind::Tan => "\\operatorname{tg}",
                    UnaryOpKind::Cot => "\\operatorname{ctg}",
                    UnaryOpKind::Ln => "\\ln",
                };
                write!(f, "{}", name)?;
                self.fmt_paren(f, arg)
            },
            Node::Binary(op, lhs, rhs) => match op {
                BinOpKind::Pow => self.fmt_pow(f, lhs, rhs),
                BinOpKind::Div => {
                    write!(f, "\\frac{{")?;
                    self.fmt_node(f, lhs)?;
                    write!(f, "}}{{")?;
                    self.fmt_node(f, rhs)?;
                    write!(f, "}}")
                },
                BinOpKind::Log => {
                    write!(f, "\\log_{{")?;
                    self.fmt_node(f, lhs)?;
                    write!(f, "}}")?;
                    self.fmt_paren(f, rhs)
                },
                BinOpKind::Add | BinOpKind::Sub | BinOpKind::Mul => {
                    self.fmt_operand(f, *op, lhs, Side::Left)?;
                    match op {
                        BinOpKind::Add => write!(f, " + ")?,
                        BinOpKind::Sub => write!(f, " - ")?,
                        _ => write!(f, " \\cdot ")?,
                    }
                    self.fmt_operand(f, *op, rhs, Side::Right)
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use tungsten_parser::{parse_expression, VariableTable};

    fn tex(source: &str) -> String {
        let mut vars = VariableTable::new();
        let node = parse_expression(source, &mut vars).unwrap();
        node.to_tex(&vars).to_string()
    }

    #[test]
    fn fractions() {
        assert_eq!(tex("1/x + 5/x^2"), "\\frac{1}{x} + \\frac{5}{x^{2}}");
        assert_eq!(tex("(a + b) / (c - d)"), "\\frac{a + b}{c - d}");
    }

    #[test]
    fn powers() {
        assert_eq!(tex("x^(3*(x + 6))"), "x^{3 \\cdot \\left(x + 6\\right)}");
        assert_eq!(tex("(x + 1)^2"), "\\left(x + 1\\right)^{2}");
        assert_eq!(tex("sin(x)^2"), "\\left(\\sin\\left(x\\right)\\right)^{2}");
        assert_eq!(tex("x^y^z"), "x^{y^{z}}");
    }

    #[test]
    fn functions() {
        assert_eq!(tex("tg(x) - ctg(x)"), "\\operatorname{tg}\\left(x\\right) - \\operatorname{ctg}\\left(x\\right)");
        assert_eq!(tex("ln(x) * cos(x)"), "\\ln\\left(x\\right) \\cdot \\cos\\left(x\\right)");
        assert_eq!(tex("log(2, x + 1)"), "\\log_{2}\\left(x + 1\\right)");
    }

    #[test]
    fn precedence() {
        assert_eq!(tex("a - (b - c)"), "a - \\left(b - c\\right)");
        assert_eq!(tex("(a + b) * c"), "\\left(a + b\\right) \\cdot c");
        assert_eq!(tex("a + b * c"), "a + b \\cdot c");
    }

    #[test]
    fn names_and_numbers() {
        assert_eq!(tex("x_1 * 2.5"), "x\\_1 \\cdot 2.5");

        let names: &[&str] = &[];
        let node = Node::num(2.0) * Node::num(-1.0).pow(Node::var(0));
        assert_eq!(node.to_tex(names).to_string(), "2 \\cdot \\left(-1\\right)^{v_{0}}");
    }

    #[test]
    fn non_finite_numbers() {
        assert_eq!(tex("1e999 * x"), "\\infty \\cdot x");

        let names: &[&str] = &["x"];
        let node = Node::var(0) - f64::NEG_INFINITY + f64::NAN;
        assert_eq!(node.to_tex(names).to_string(), "x - \\left(-\\infty\\right) + \\mathrm{NaN}");
        assert_eq!(Node::num(f64::NEG_INFINITY).pow(2.0).to_tex(names).to_string(), "\\left(-\\infty\\right)^{2}");
    }
}
