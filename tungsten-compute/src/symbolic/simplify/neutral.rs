//! Neutral element elimination.

use std::mem;
use tracing::trace;
use tungsten_parser::{parser::ast::BinOpKind, Node};
use crate::symbolic::step_collector::StepCollector;
use super::step::Step;

/// Removes operations with a neutral or absorbing operand, bottom-up.
///
/// For each operator, the rules are tried in this order:
///
/// | operator | rules                          |
/// | -------- | ------------------------------ |
/// | `+`      | `a+0 = a`, `0+a = a`           |
/// | `-`      | `a-0 = a`                      |
/// | `*`      | `1*a`, `0*a`, `a*1`, `a*0`     |
/// | `^`      | `a^1 = a`, `a^0 = 1`, `0^a = 0`|
///
/// Numbers are compared to `0` and `1` within [`EPSILON`](tungsten_parser::parser::ast::EPSILON).
pub fn eliminate(node: &mut Node, changed: &mut bool, steps: &mut dyn StepCollector<Step>) {
    let rewrite = match node {
        Node::Number(_) | Node::Variable(_) => None,
        Node::Unary(_, arg) => {
            eliminate(arg, changed, steps);
            None
        },
        Node::Binary(op, lhs, rhs) => {
            eliminate(lhs, changed, steps);
            eliminate(rhs, changed, steps);
            apply_rule(*op, lhs, rhs)
        },
    };

    if let Some((step, rewritten)) = rewrite {
        trace!(?step, "simplification step");
        *changed = true;
        steps.push(step);
        *node = rewritten;
    }
}

/// Applies the first matching rule to the operands of a binary operator, returning the node that
/// replaces the operation. The operand that is kept is moved out of the tree.
fn apply_rule(op: BinOpKind, lhs: &mut Node, rhs: &mut Node) -> Option<(Step, Node)> {
    match op {
        BinOpKind::Add => {
            if rhs.is_number_near(0.0) {
                Some((Step::AddZero, mem::take(lhs)))
            } else if lhs.is_number_near(0.0) {
                Some((Step::AddZero, mem::take(rhs)))
            } else {
                None
            }
        },
        BinOpKind::Sub => {
            if rhs.is_number_near(0.0) {
                Some((Step::SubtractZero, mem::take(lhs)))
            } else {
                None
            }
        },
        BinOpKind::Mul => {
            if lhs.is_number_near(1.0) {
                Some((Step::MultiplyOne, mem::take(rhs)))
            } else if lhs.is_number_near(0.0) {
                Some((Step::MultiplyZero, Node::Number(0.0)))
            } else if rhs.is_number_near(1.0) {
                Some((Step::MultiplyOne, mem::take(lhs)))
            } else if rhs.is_number_near(0.0) {
                Some((Step::MultiplyZero, Node::Number(0.0)))
            } else {
                None
            }
        },
        BinOpKind::Pow => {
            if rhs.is_number_near(1.0) {
                Some((Step::PowerOne, mem::take(lhs)))
            } else if rhs.is_number_near(0.0) {
                Some((Step::PowerZero, Node::Number(1.0)))
            } else if lhs.is_number_near(0.0) {
                Some((Step::PowerZeroLeft, Node::Number(0.0)))
            } else {
                None
            }
        },
        BinOpKind::Div | BinOpKind::Log => None,
    }
}
