use alloc::vec::Vec;
use core::fmt;

use crate::node::{collect_indices, Node};
use crate::Float;

enum Frame {
    Node { node_id: usize, depth: usize },
    Child { label: &'static str, node_id: Option<usize>, depth: usize },
}

/// Writes the indented dump of `nodes` used by `KdTree`'s `Display` impl.
pub(crate) fn write_tree<T: Float>(
    f: &mut fmt::Formatter<'_>,
    nodes: &[Node<T>],
    dim: usize,
) -> fmt::Result {
    if nodes.is_empty() {
        return writeln!(f, "null");
    }

    let mut stack = Vec::from([Frame::Node {
        node_id: 0,
        depth: 0,
    }]);
    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Node { node_id, depth } => {
                let indent = "  ".repeat(depth);
                let indices = collect_indices(nodes, node_id);
                match &nodes[node_id] {
                    Node::Leaf { .. } => {
                        writeln!(
                            f,
                            "{}d={} split_dim=none split_value=none indices={:?}",
                            indent, dim, indices
                        )?;
                        stack.push(Frame::Child {
                            label: "high",
                            node_id: None,
                            depth,
                        });
                        stack.push(Frame::Child {
                            label: "low",
                            node_id: None,
                            depth,
                        });
                    }
                    Node::Internal {
                        split_dim,
                        threshold,
                        low,
                        high,
                    } => {
                        writeln!(
                            f,
                            "{}d={} split_dim={} split_value={} indices={:?}",
                            indent, dim, split_dim, threshold, indices
                        )?;
                        stack.push(Frame::Child {
                            label: "high",
                            node_id: Some(*high),
                            depth,
                        });
                        stack.push(Frame::Child {
                            label: "low",
                            node_id: Some(*low),
                            depth,
                        });
                    }
                }
            }
            Frame::Child {
                label,
                node_id: None,
                depth,
            } => writeln!(f, "{}{}: null", "  ".repeat(depth), label)?,
            Frame::Child {
                label,
                node_id: Some(node_id),
                depth,
            } => {
                writeln!(f, "{}{}:", "  ".repeat(depth), label)?;
                stack.push(Frame::Node {
                    node_id,
                    depth: depth + 1,
                });
            }
        }
    }
    Ok(())
}
