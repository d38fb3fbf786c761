//! Graphviz dumps of trees, for debugging.
//!
//! Nodes are numbered in pre-order, starting at `0` for the root. In the full format, each node is
//! drawn as a record showing its number, its kind, its payload, and ports for its children;
//! operators, variables and numbers are filled with different colors. The minified format only
//! shows the payload of each node.

use std::fmt::{Display, Formatter, Result};
use tungsten_parser::{
    parser::{ast::Operator, fmt::VarNames},
    Node,
};

const OPERATOR_COLOR: &str = "#EDE1CF";
const VARIABLE_COLOR: &str = "#f3d4de";
const NUMBER_COLOR: &str = "#107980";

/// A wrapper type that implements [`Display`] for a tree, formatting it as a Graphviz `digraph`.
pub struct DotFormatter<'a, N: ?Sized> {
    node: &'a Node,
    names: &'a N,
    minified: bool,
}

impl<'a, N: VarNames + ?Sized> DotFormatter<'a, N> {
    /// Creates a formatter for the given tree.
    pub fn new(node: &'a Node, names: &'a N, minified: bool) -> Self {
        Self { node, names, minified }
    }

    /// Returns the payload of the node, as shown in its label.
    fn payload(&self, node: &Node) -> String {
        match node {
            Node::Number(n) => n.to_string(),
            Node::Variable(index) => match self.names.var_name(*index) {
                Some(name) => name.to_string(),
                None => format!("v{}", index),
            },
            Node::Unary(op, _) => Operator::Unary(*op).text().to_string(),
            Node::Binary(op, ..) => Operator::Binary(*op).text().to_string(),
        }
    }

    fn fmt_node(&self, f: &mut Formatter, id: usize, node: &Node) -> Result {
        let payload = self.payload(node);
        if self.minified {
            return writeln!(f, "\tnode{} [label = \"{}\"];", id, payload);
        }

        let (kind, field, color) = match node {
            Node::Number(_) => ("NUM", "NUM", NUMBER_COLOR),
            Node::Variable(_) => ("VAR", "VAR", VARIABLE_COLOR),
            Node::Unary(..) | Node::Binary(..) => ("OPR", "OP", OPERATOR_COLOR),
        };
        writeln!(
            f,
            "\tnode{id} [shape = Mrecord, style = filled, fillcolor = \"{color}\", \
            label = \"{{ node[{id}] | TYPE = {kind} | {field} = {payload} | {{ <left>left | <right>right }} }}\"];",
        )
    }

    fn fmt_edge(&self, f: &mut Formatter, parent: usize, port: &str, child: usize) -> Result {
        if self.minified {
            writeln!(f, "\tnode{} -> node{};", parent, child)
        } else {
            writeln!(f, "\tnode{}:<{}> -> node{};", parent, port, child)
        }
    }
}

impl<N: VarNames + ?Sized> Display for DotFormatter<'_, N> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        writeln!(f, "digraph {{")?;
        writeln!(f, "graph [splines=line]")?;

        // (node, parent id and port)
        let mut stack = vec![(self.node, None)];
        let mut next_id = 0;
        while let Some((node, parent)) = stack.pop() {
            let id = next_id;
            next_id += 1;

            self.fmt_node(f, id, node)?;
            if let Some((parent, port)) = parent {
                self.fmt_edge(f, parent, port, id)?;
            }

            match node {
                Node::Number(_) | Node::Variable(_) => (),
                Node::Unary(_, arg) => stack.push((&**arg, Some((id, "left")))),
                Node::Binary(_, lhs, rhs) => {
                    stack.push((&**rhs, Some((id, "right"))));
                    stack.push((&**lhs, Some((id, "left"))));
                },
            }
        }

        writeln!(f, "}}")
    }
}

/// Returns the Graphviz `digraph` source for the given tree.
pub fn dump<N: VarNames + ?Sized>(node: &Node, names: &N, minified: bool) -> String {
    DotFormatter::new(node, names, minified).to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use tungsten_parser::{parse_expression, VariableTable};

    #[test]
    fn minified() {
        let mut vars = VariableTable::new();
        let node = parse_expression("x * 2 + sin(y)", &mut vars).unwrap();
        assert_eq!(dump(&node, &vars, true), [
            "digraph {",
            "graph [splines=line]",
            "\tnode0 [label = \"+\"];",
            "\tnode1 [label = \"*\"];",
            "\tnode0 -> node1;",
            "\tnode2 [label = \"x\"];",
            "\tnode1 -> node2;",
            "\tnode3 [label = \"2\"];",
            "\tnode1 -> node3;",
            "\tnode4 [label = \"sin\"];",
            "\tnode0 -> node4;",
            "\tnode5 [label = \"y\"];",
            "\tnode4 -> node5;",
            "}",
            "",
        ].join("\n"));
    }

    #[test]
    fn full() {
        let mut vars = VariableTable::new();
        let node = parse_expression("x - 1", &mut vars).unwrap();
        let dot = dump(&node, &vars, false);
        assert!(dot.starts_with("digraph {\ngraph [splines=line]\n"));
        assert!(dot.contains("\tnode0 [shape = Mrecord, style = filled, fillcolor = \"#EDE1CF\", label = \"{ node[0] | TYPE = OPR | OP = - | { <left>left | <right>right } }\"];"));
        assert!(dot.contains("label = \"{ node[1] | TYPE = VAR | VAR = x |"));
        assert!(dot.contains("fillcolor = \"#107980\", label = \"{ node[2] | TYPE = NUM | NUM = 1 |"));
        assert!(dot.contains("\tnode0:<left> -> node1;"));
        assert!(dot.contains("\tnode0:<right> -> node2;"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn deep_tree() {
        let mut node = Node::var(0);
        for _ in 0..10_000 {
            node = node.ln();
        }
        let names: &[&str] = &["x"];
        let dot = dump(&node, names, true);
        assert!(dot.contains("\tnode9999 -> node10000;"));
    }
}
