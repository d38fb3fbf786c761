/// Receives the rewrite steps taken by the simplifier, in the order they are applied.
///
/// Implemented for `()`, which discards every step, and for [`Vec`], which records them:
///
/// ```
/// use tungsten_compute::symbolic::{simplify::step::Step, simplify_with_steps};
/// use tungsten_parser::{Node, VariableTable, parse_expression};
///
/// let mut vars = VariableTable::new();
/// let tree = parse_expression("x^1", &mut vars).unwrap();
/// assert_eq!(simplify_with_steps(&tree), (Node::var(0), vec![Step::PowerOne]));
/// ```
pub trait StepCollector<S> {
    /// Records one step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
