use alloc::vec::Vec;

/// A node of the tree. Nodes live in an arena owned by the tree; slot 0 is
/// the root and every other slot is referenced by exactly one parent.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node<T> {
    /// Indices into the point array, resolved by linear scan.
    Leaf { indices: Vec<usize> },
    /// Points with `point[split_dim] < threshold` live under `low`,
    /// the rest under `high`.
    Internal {
        split_dim: usize,
        threshold: T,
        low: usize,
        high: usize,
    },
}

impl<T> Node<T> {
    /// A leaf without indices, used to reserve a slot before the node is known.
    pub(crate) fn placeholder() -> Self {
        Node::Leaf {
            indices: Vec::new(),
        }
    }

    pub(crate) fn children(&self) -> Option<(usize, usize)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { low, high, .. } => Some((*low, *high)),
        }
    }
}

/// Collects the point indices stored below `node_id`, in ascending order.
pub(crate) fn collect_indices<T>(nodes: &[Node<T>], node_id: usize) -> Vec<usize> {
    let mut indices = Vec::new();
    let mut stack = Vec::from([node_id]);
    while let Some(node_id) = stack.pop() {
        match &nodes[node_id] {
            Node::Leaf { indices: leaf } => indices.extend_from_slice(leaf),
            Node::Internal { low, high, .. } => {
                stack.push(*high);
                stack.push(*low);
            }
        }
    }
    indices.sort_unstable();
    indices
}

/// Number of edges on the longest root-to-leaf path. Zero for an empty arena.
pub(crate) fn depth<T>(nodes: &[Node<T>]) -> usize {
    if nodes.is_empty() {
        return 0;
    }
    let mut max_depth = 0;
    let mut stack = Vec::from([(0, 0)]);
    while let Some((node_id, depth)) = stack.pop() {
        match nodes[node_id].children() {
            None => max_depth = max_depth.max(depth),
            Some((low, high)) => {
                stack.push((low, depth + 1));
                stack.push((high, depth + 1));
            }
        }
    }
    max_depth
}
