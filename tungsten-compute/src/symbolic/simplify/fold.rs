//! Constant folding.

use std::mem;
use tracing::trace;
use tungsten_parser::{parser::ast::BinOpKind, Node};
use crate::symbolic::step_collector::StepCollector;
use super::step::Step;

/// Folds every subtree whose operands are all numbers into a single number, in place.
///
/// Chains of the same commutative operator (`a + 2 + b + 3`) are flattened first, so constants
/// that are not direct siblings still combine; the combined constant is placed first and the
/// chain is rebuilt left-associatively (`5 + a + b`).
///
/// Values follow the same IEEE 754 rules as evaluation, so `1 / 0` folds to infinity.
pub fn fold(node: &mut Node, changed: &mut bool, steps: &mut dyn StepCollector<Step>) {
    let value = match node {
        Node::Number(_) | Node::Variable(_) => return,
        Node::Unary(op, arg) => {
            fold(arg, changed, steps);
            arg.as_number().map(|n| op.apply(n))
        },
        Node::Binary(op, lhs, rhs) if op.is_commutative() => {
            let (op, lhs, rhs) = (*op, mem::take(&mut **lhs), mem::take(&mut **rhs));
            *node = fold_chain(op, lhs, rhs, changed, steps);
            return;
        },
        Node::Binary(op, lhs, rhs) => {
            fold(lhs, changed, steps);
            fold(rhs, changed, steps);
            lhs.as_number().zip(rhs.as_number()).map(|(a, b)| op.apply(a, b))
        },
    };

    if let Some(value) = value {
        record(changed, steps);
        *node = Node::Number(value);
    }
}

/// Folds the maximal chain `lhs op rhs` of the commutative operator `op`.
fn fold_chain(
    op: BinOpKind,
    lhs: Node,
    rhs: Node,
    changed: &mut bool,
    steps: &mut dyn StepCollector<Step>,
) -> Node {
    // descend the left spine to the leftmost operand, stacking the right operands
    let mut first = lhs;
    let mut stack = vec![rhs];
    while let Node::Binary(inner, lhs, rhs) = &mut first {
        if *inner != op {
            break;
        }
        stack.push(mem::take(&mut **rhs));
        first = mem::take(&mut **lhs);
    }
    fold(&mut first, changed, steps);

    // left-to-right walk of the remaining operands
    let mut constants = Vec::new();
    let mut others = Vec::new();
    while let Some(mut node) = stack.pop() {
        if let Node::Binary(inner, lhs, rhs) = &mut node {
            if *inner == op {
                stack.push(mem::take(&mut **rhs));
                stack.push(mem::take(&mut **lhs));
                continue;
            }
        }

        fold(&mut node, changed, steps);
        match node {
            Node::Number(value) => constants.push(value),
            operand => others.push(operand),
        }
    }

    // the combined constant leads the chain
    let mut tail = Vec::with_capacity(others.len() + 1);
    let head = match (first, constants.split_first()) {
        (Node::Number(value), _) => combine(op, value, &constants, changed, steps),
        (first, Some((&value, rest))) => {
            tail.push(first);
            combine(op, value, rest, changed, steps)
        },
        (first, None) => first,
    };
    tail.extend(others);
    tail.into_iter().fold(head, |acc, operand| Node::binary(op, acc, operand))
}

/// Combines the number `first` with the numbers in `rest`.
fn combine(
    op: BinOpKind,
    first: f64,
    rest: &[f64],
    changed: &mut bool,
    steps: &mut dyn StepCollector<Step>,
) -> Node {
    if !rest.is_empty() {
        record(changed, steps);
    }
    Node::Number(rest.iter().fold(first, |acc, value| op.apply(acc, *value)))
}

fn record(changed: &mut bool, steps: &mut dyn StepCollector<Step>) {
    trace!(step = ?Step::FoldConstants, "simplification step");
    *changed = true;
    steps.push(Step::FoldConstants);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn fold_once(mut node: Node) -> (Node, bool) {
        let mut changed = false;
        fold(&mut node, &mut changed, &mut ());
        (node, changed)
    }

    #[test]
    fn folds_constants() {
        let (node, changed) = fold_once(Node::num(2.0) + Node::num(3.0) * 4.0);
        assert_eq!(node, Node::num(14.0));
        assert!(changed);
    }

    #[test]
    fn combines_constants_across_chain() {
        let (a, b) = (Node::var(0), Node::var(1));
        let (node, changed) = fold_once(a.clone() + 2.0 + b.clone() + 3.0);
        assert_eq!(node, Node::num(5.0) + a + b);
        assert!(changed);
    }

    #[test]
    fn single_constant_moves_first() {
        let x = Node::var(0);
        let (node, changed) = fold_once(x.clone() * 3.0);
        assert_eq!(node, Node::num(3.0) * x);
        assert!(!changed);
    }

    #[test]
    fn non_commutative_needs_both_numbers() {
        let x = Node::var(0);
        let (node, changed) = fold_once(x.clone() - (Node::num(2.0) - 1.0));
        assert_eq!(node, x - 1.0);
        assert!(changed);
    }

    #[test]
    fn functions_of_constants() {
        let (node, _) = fold_once(Node::num(0.0).sin() + Node::num(1.0).ln());
        assert_eq!(node, Node::num(0.0));
    }

    #[test]
    fn folds_to_non_finite() {
        let (node, changed) = fold_once(Node::num(1.0) / 0.0);
        assert_eq!(node, Node::num(f64::INFINITY));
        assert!(changed);

        let (node, _) = fold_once(Node::num(-1.0).ln() + Node::var(0));
        assert!(matches!(&node, Node::Binary(BinOpKind::Add, lhs, _) if lhs.as_number().map_or(false, f64::is_nan)));
    }

    #[test]
    fn chain_of_constants() {
        let (node, changed) = fold_once(Node::num(2.0) + 3.0 + 4.0);
        assert_eq!(node, Node::num(9.0));
        assert!(changed);
    }

    #[test]
    fn chain_without_constants() {
        let (a, b, c) = (Node::var(0), Node::var(1), Node::var(2));
        let tree = a.clone() * (b.clone() * c.clone());
        let (node, changed) = fold_once(tree);
        assert_eq!(node, a * b * c);
        assert!(!changed);
    }

    #[test]
    fn leftmost_constant_combines() {
        let (a, b) = (Node::var(0), Node::var(1));
        let (node, changed) = fold_once(Node::num(2.0) * a.clone() * (b.clone() * 5.0));
        assert_eq!(node, Node::num(10.0) * a * b);
        assert!(changed);
    }

    #[test]
    fn chain_overflows_to_infinity() {
        let x = Node::var(0);
        let (node, changed) = fold_once(x.clone() * 1e300 * 1e300);
        assert_eq!(node, Node::num(f64::INFINITY) * x);
        assert!(changed);
    }

    #[test]
    fn mixed_chains() {
        // the product inside the sum is its own chain
        let x = Node::var(0);
        let (node, _) = fold_once(Node::num(1.0) + x.clone() * 2.0 * 3.0 + 4.0);
        assert_eq!(node, Node::num(5.0) + Node::num(6.0) * x);
    }
}
