use alloc::vec::Vec;
use core::cmp::Ordering;

use log::debug;
use nalgebra::DVector;

use crate::node::{depth, Node};
use crate::Float;

/// Value at sorted position `indices.len() / 2` of the coordinates along `dim`.
///
/// For an even count this is the element just past the midpoint, never an
/// average, so the value is always one of the stored coordinates.
pub(crate) fn median<T: Float>(points: &[DVector<T>], indices: &[usize], dim: usize) -> T {
    debug_assert!(!indices.is_empty());
    let mut coordinates: Vec<T> = indices.iter().map(|&i| points[i][dim]).collect();
    let k = coordinates.len() / 2;
    let (_, &mut m, _) = coordinates
        .select_nth_unstable_by(k, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    m
}

/// Splits `indices` around the median along `dim`.
///
/// Returns `None` when one side would be empty, which happens when every
/// coordinate below the median position ties with it.
fn divide<T: Float>(
    indices: &[usize],
    points: &[DVector<T>],
    dim: usize,
) -> Option<(T, Vec<usize>, Vec<usize>)> {
    let boundary = median(points, indices, dim);
    let (indices_l, indices_r): (Vec<usize>, Vec<usize>) = indices
        .iter()
        .copied()
        .partition(|&i| points[i][dim] < boundary);
    if indices_l.is_empty() || indices_r.is_empty() {
        return None;
    }
    Some((boundary, indices_l, indices_r))
}

/// Builds the node arena for `points`. The result is empty when there are no
/// points; otherwise slot 0 is the root.
pub(crate) fn build_nodes<T: Float>(
    points: &[DVector<T>],
    dim: usize,
    leaf_size: usize,
) -> Vec<Node<T>> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut nodes = Vec::from([Node::placeholder()]);
    let mut stack = Vec::from([((0..points.len()).collect::<Vec<usize>>(), 0, 0)]);
    while let Some((indices, node_id, split_dim)) = stack.pop() {
        if indices.len() <= leaf_size {
            nodes[node_id] = Node::Leaf { indices };
            continue;
        }

        let Some((threshold, indices_l, indices_r)) = divide(&indices, points, split_dim) else {
            // All coordinates tie at the median; splitting again would not shrink the set.
            nodes[node_id] = Node::Leaf { indices };
            continue;
        };

        let low = nodes.len();
        let high = low + 1;
        nodes.push(Node::placeholder());
        nodes.push(Node::placeholder());
        nodes[node_id] = Node::Internal {
            split_dim,
            threshold,
            low,
            high,
        };

        let next_dim = (split_dim + 1) % dim;
        stack.push((indices_r, high, next_dim));
        stack.push((indices_l, low, next_dim));
    }

    debug!(
        "built kd-tree: {} points, {} nodes, {} leaves, depth {}",
        points.len(),
        nodes.len(),
        nodes.iter().filter(|n| n.children().is_none()).count(),
        depth(&nodes)
    );
    nodes
}
