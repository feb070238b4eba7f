use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use crate::scalar_data::ScalarData;
use crate::tape::{NodeId, Tape};
use std::fmt::Write as _;
use std::io;

const UNVISITED: u8 = 0;
const ON_PATH: u8 = 1;
const DONE: u8 = 2;

/// Builds a topological sort of the nodes reachable from `root`.
///
/// Depth-first post-order: every operand appears before each of its consumers
/// and `root` comes last. Each node is visited at most once; visit marks are
/// kept in an array indexed like the arena, so identity is the index, never the
/// value. The traversal is iterative and does not grow the call stack.
///
/// # Errors
/// * [`ScalarGradError::CyclicGraph`] if a node is reached again while it is
///   still on the active DFS path.
/// * [`ScalarGradError::NodeNotFound`] if `root` or an operand index is outside
///   the arena.
pub(crate) fn topological_sort(
    nodes: &[ScalarData],
    root: usize,
) -> Result<Vec<usize>, ScalarGradError> {
    if root >= nodes.len() {
        return Err(ScalarGradError::NodeNotFound {
            index: root,
            epoch: 0,
        });
    }

    let mut marks = vec![UNVISITED; nodes.len()];
    let mut sorted = Vec::new();
    // (node, position of the next operand to visit)
    let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
    marks[root] = ON_PATH;

    while let Some(frame) = stack.last_mut() {
        let (node, next_input) = *frame;
        match nodes[node].op.inputs().nth(next_input) {
            Some(input) => {
                frame.1 += 1;
                let input_index = input.index();
                match marks.get(input_index).copied() {
                    Some(UNVISITED) => {
                        marks[input_index] = ON_PATH;
                        stack.push((input_index, 0));
                    }
                    Some(ON_PATH) => {
                        return Err(ScalarGradError::CyclicGraph { node: input_index });
                    }
                    Some(_) => {}
                    None => {
                        return Err(ScalarGradError::NodeNotFound {
                            index: input_index,
                            epoch: input.epoch(),
                        });
                    }
                }
            }
            None => {
                marks[node] = DONE;
                sorted.push(node);
                stack.pop();
            }
        }
    }
    Ok(sorted)
}

/// Read-only snapshot of a graph: every node reachable from a root and every
/// operand -> consumer edge, deduplicated by node identity.
///
/// Meant for external visualization; nothing in training depends on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphTrace {
    /// Reachable nodes, operands before consumers, root last.
    pub nodes: Vec<NodeId>,
    /// `(operand, consumer)` pairs.
    pub edges: Vec<(NodeId, NodeId)>,
}

/// Enumerates all nodes and edges reachable from `root`.
pub fn trace_graph(root: &Scalar<'_>) -> Result<GraphTrace, ScalarGradError> {
    let tape = root.tape();
    let nodes = tape.topological_order(root.id())?;
    let mut edges = Vec::new();
    for &consumer in &nodes {
        let scalar = tape.scalar(consumer)?;
        let mut previous = None;
        for operand in scalar.op().inputs() {
            // `a + a` has one edge, not two. Distinct consumers never share an edge.
            if previous != Some(operand) {
                edges.push((operand, consumer));
            }
            previous = Some(operand);
        }
    }
    Ok(GraphTrace { nodes, edges })
}

impl GraphTrace {
    /// Renders the trace as a Graphviz `digraph`.
    ///
    /// Each node becomes a record with its label, value and gradient; every
    /// non-leaf gets an extra op node, so edges read operand -> op -> result.
    pub fn to_dot(&self, tape: &Tape) -> Result<String, ScalarGradError> {
        self.check(tape)?;
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_dot_fmt(tape, &mut out);
        Ok(out)
    }

    /// Writes the Graphviz rendering of [`GraphTrace::to_dot`] to `writer`.
    pub fn write_dot(&self, tape: &Tape, writer: &mut impl io::Write) -> io::Result<()> {
        let dot = self
            .to_dot(tape)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        writer.write_all(dot.as_bytes())
    }

    fn check(&self, tape: &Tape) -> Result<(), ScalarGradError> {
        for id in &self.nodes {
            tape.scalar(*id)?;
        }
        Ok(())
    }

    fn write_dot_fmt(&self, tape: &Tape, out: &mut String) -> std::fmt::Result {
        writeln!(out, "digraph G {{")?;
        writeln!(out, "rankdir=\"LR\";")?;
        for id in &self.nodes {
            let Ok(node) = tape.scalar(*id) else {
                continue;
            };
            let label = escape_record_label(&node.label().unwrap_or_default());
            writeln!(
                out,
                "{} [label=\"{{ {} | value {:.4} | grad {:.4} }}\", shape=record];",
                id,
                label,
                node.value(),
                node.grad()
            )?;
            let tag = node.op_tag();
            if !tag.is_empty() {
                writeln!(out, "{}_op [label=\"{}\"];", id, tag)?;
                writeln!(out, "{}_op -> {};", id, id)?;
            }
        }
        for (operand, consumer) in &self.edges {
            writeln!(out, "{} -> {}_op;", operand, consumer)?;
        }
        writeln!(out, "}}")
    }
}

/// Backslash-escapes the characters that are structural in a record label.
fn escape_record_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        if matches!(c, '"' | '\\' | '{' | '}' | '|' | '<' | '>') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
