//! Standalone LaTeX report of a processed expression.

use std::fmt::{Display, Formatter, Result};
use tungsten_compute::{
    fmt::ToTex,
    symbolic::{simplify::Round, Expansion},
};
use tungsten_parser::{Node, VariableTable};

/// Everything computed for one expression, formatted as a LaTeX `article` by its [`Display`]
/// implementation.
pub struct Report<'a> {
    /// Table used to name the variables of every tree in the report.
    pub vars: &'a VariableTable,

    /// Name of the variable the expression was differentiated / expanded with respect to.
    pub var: &'a str,

    /// The expression as parsed.
    pub input: &'a Node,

    /// Rounds taken to simplify the input.
    pub rounds: &'a [Round],

    /// Rounds taken to simplify the derivative.
    pub derivative_rounds: &'a [Round],

    /// The simplified derivative.
    pub derivative: &'a Node,

    /// Expansion point of the Taylor series.
    pub point: f64,

    /// The Taylor series.
    pub expansion: &'a Expansion,
}

impl Report<'_> {
    fn fmt_rounds(&self, f: &mut Formatter, rounds: &[Round]) -> Result {
        if rounds.is_empty() {
            return writeln!(f, "Nothing to simplify.\n");
        }

        for (i, round) in rounds.iter().enumerate() {
            writeln!(f, "Round {}:", i + 1)?;
            writeln!(
                f,
                "\\[ {} = {} \\]\n",
                round.before.to_tex(self.vars),
                round.after.to_tex(self.vars),
            )?;
        }
        Ok(())
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let var = self.var.replace('_', "\\_");

        writeln!(f, "\\documentclass{{article}}")?;
        writeln!(f, "\\usepackage{{amsmath}}")?;
        writeln!(f, "\\begin{{document}}\n")?;

        writeln!(f, "\\section*{{Expression}}")?;
        writeln!(f, "\\[ f({}) = {} \\]\n", var, self.input.to_tex(self.vars))?;

        writeln!(f, "\\section*{{Simplification}}")?;
        self.fmt_rounds(f, self.rounds)?;

        writeln!(f, "\\section*{{Derivative}}")?;
        self.fmt_rounds(f, self.derivative_rounds)?;
        writeln!(f, "\\[ f'({}) = {} \\]\n", var, self.derivative.to_tex(self.vars))?;

        writeln!(f, "\\section*{{Taylor expansion}}")?;
        writeln!(
            f,
            "First {} terms at ${} = {}$:",
            self.expansion.coefficients.len(),
            var,
            self.point,
        )?;
        writeln!(f, "\\[ f({}) \\approx {} \\]\n", var, self.expansion.polynomial.to_tex(self.vars))?;
        if !self.expansion.coefficients.is_empty() {
            writeln!(f, "\\begin{{itemize}}")?;
            for (k, coefficient) in self.expansion.coefficients.iter().enumerate() {
                writeln!(f, "\\item $c_{{{}}} = {}$", k, Node::num(*coefficient).to_tex(self.vars))?;
            }
            writeln!(f, "\\end{{itemize}}\n")?;
        }

        writeln!(f, "\\end{{document}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tungsten_compute::symbolic::{derivative, expand, simplify_rounds};
    use tungsten_parser::parse_expression;

    #[test]
    fn full_report() {
        let mut vars = VariableTable::new();
        let input = parse_expression("x^2 * 1", &mut vars).unwrap();
        let (simplified, rounds) = simplify_rounds(&input);
        let (derivative, derivative_rounds) = simplify_rounds(&derivative(&simplified, 0).unwrap());
        let expansion = expand(&input, 0, 0.0, 3, &mut vars).unwrap();

        let report = Report {
            vars: &vars,
            var: "x",
            input: &input,
            rounds: &rounds,
            derivative_rounds: &derivative_rounds,
            derivative: &derivative,
            point: 0.0,
            expansion: &expansion,
        }.to_string();

        assert!(report.starts_with("\\documentclass{article}\n"));
        assert!(report.contains("\\[ f(x) = x^{2} \\cdot 1 \\]"));
        assert!(report.contains("Round 1:\n\\[ x^{2} \\cdot 1 = x^{2} \\]"));
        assert!(report.contains("\\item $c_{2} = 1$"));
        assert!(report.trim_end().ends_with("\\end{document}"));
    }

    #[test]
    fn nothing_to_simplify() {
        let mut vars = VariableTable::new();
        let input = parse_expression("y", &mut vars).unwrap();
        let expansion = expand(&input, 0, 1.0, 0, &mut vars).unwrap();

        let report = Report {
            vars: &vars,
            var: "y",
            input: &input,
            rounds: &[],
            derivative_rounds: &[],
            derivative: &Node::num(1.0),
            point: 1.0,
            expansion: &expansion,
        }.to_string();

        assert!(report.contains("\\section*{Simplification}\nNothing to simplify."));
        assert!(report.contains("\\[ f(y) \\approx 0 \\]"));
        assert!(!report.contains("itemize"));
    }
}
