//! Algebraic simplification of trees.
//!
//! Simplification alternates two passes until a full round changes nothing:
//!
//! - [`fold`]: replaces subtrees whose operands are all numbers with their value, combining the
//!   constants of whole `+` / `*` chains.
//! - [`eliminate`]: removes neutral and absorbing operands, such as `x + 0` or `0 * x`.
//!
//! Every rewrite strictly reduces the number of nodes, so the loop always terminates.
//!
//! ```
//! use tungsten_compute::symbolic::simplify;
//! use tungsten_parser::{parse_expression, Node, VariableTable};
//!
//! let mut vars = VariableTable::new();
//! let tree = parse_expression("x * 1 + 0", &mut vars).unwrap();
//! assert_eq!(simplify(&tree), Node::var(0));
//! ```

pub mod fold;
pub mod neutral;
pub mod step;

use tracing::debug;
use tungsten_parser::Node;
use crate::symbolic::step_collector::StepCollector;
pub use fold::fold;
pub use neutral::eliminate;
use step::Step;

/// One round of simplification that changed the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    /// The tree before the round.
    pub before: Node,

    /// The tree after the round.
    pub after: Node,
}

fn inner_simplify(
    node: &Node,
    step_collector: &mut dyn StepCollector<Step>,
    mut rounds: Option<&mut Vec<Round>>,
) -> Node {
    let mut node = node.clone();
    let mut round = 0;

    loop {
        let before = rounds.as_ref().map(|_| node.clone());
        let mut changed = false;
        fold(&mut node, &mut changed, step_collector);
        eliminate(&mut node, &mut changed, step_collector);

        if !changed {
            break;
        }

        round += 1;
        if let (Some(rounds), Some(before)) = (rounds.as_deref_mut(), before) {
            rounds.push(Round { before, after: node.clone() });
        }
    }

    debug!(rounds = round, size = node.size(), "simplified tree");
    node
}

/// Simplify the given tree.
pub fn simplify(node: &Node) -> Node {
    inner_simplify(node, &mut (), None)
}

/// Simplify the given tree. The steps taken by the simplifier will also be collected and
/// returned. This is useful for debugging, and also for displaying the steps taken to the user.
pub fn simplify_with_steps(node: &Node) -> (Node, Vec<Step>) {
    let mut steps = Vec::new();
    let node = inner_simplify(node, &mut steps, None);
    (node, steps)
}

/// Simplify the given tree, returning the tree before and after every round that changed it.
pub fn simplify_rounds(node: &Node) -> (Node, Vec<Round>) {
    let mut rounds = Vec::new();
    let node = inner_simplify(node, &mut (), Some(&mut rounds));
    (node, rounds)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::numerical::Eval;
    use tungsten_parser::{parse_expression, VariableTable};

    fn parse(source: &str) -> (Node, VariableTable) {
        let mut vars = VariableTable::new();
        let node = parse_expression(source, &mut vars).unwrap();
        (node, vars)
    }

    /// Returns true if some operator node has only number operands.
    fn has_constant_operation(node: &Node) -> bool {
        node.post_order_iter().any(|node| match node {
            Node::Unary(_, arg) => arg.is_number(),
            Node::Binary(_, lhs, rhs) => lhs.is_number() && rhs.is_number(),
            _ => false,
        })
    }

    #[test]
    fn bare_variable() {
        let (node, _) = parse("x*1+0");
        assert_eq!(simplify(&node), Node::var(0));
    }

    #[test]
    fn constants_around_variable() {
        let (node, mut vars) = parse("a+2+3");
        let simplified = simplify(&node);
        assert!(!has_constant_operation(&simplified));

        vars.set_by_name("a", 5.0).unwrap();
        assert_eq!(simplified.eval(&vars).unwrap(), 10.0);
        assert_eq!(simplified, Node::num(5.0) + Node::var(0));
    }

    #[test]
    fn needs_several_rounds() {
        // eliminating `x^0` exposes `sin(1)`, which is folded in the next round
        let (node, _) = parse("sin(x^0) + 1");
        let (simplified, rounds) = simplify_rounds(&node);
        assert_eq!(simplified, Node::num(1.0 + 1f64.sin()));
        assert_eq!(rounds.len(), 2);
        assert_eq!(rounds[0].before, node);
        assert_eq!(rounds[1].after, simplified);
    }

    #[test]
    fn steps_are_reported() {
        let (node, _) = parse("(x + 0)^1 * (2 - 1)");
        let (simplified, steps) = simplify_with_steps(&node);
        assert_eq!(simplified, Node::var(0));
        assert_eq!(steps, vec![
            Step::FoldConstants,
            Step::AddZero,
            Step::PowerOne,
            Step::MultiplyOne,
        ]);
    }

    #[test]
    fn idempotent() {
        for source in ["x*1+0", "a+2+b+3", "0^x + x^0 * y", "sin(0) * ln(x) + 2 * 3 * z"] {
            let (node, _) = parse(source);
            let once = simplify(&node);
            assert_eq!(simplify(&once), once, "{}", source);
        }
    }

    #[test]
    fn already_simple() {
        let (node, _) = parse("x^2 + sin(y)");
        let (simplified, rounds) = simplify_rounds(&node);
        assert_eq!(simplified, node);
        assert!(rounds.is_empty());
    }
}
