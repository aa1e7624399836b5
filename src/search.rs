use alloc::vec::Vec;

use nalgebra::DVector;

use crate::node::Node;
use crate::Float;

#[inline]
pub(crate) fn squared_euclidean<T: Float>(a: &DVector<T>, b: &DVector<T>) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + squared_diff(x, y))
}

#[inline]
fn squared_diff<T: Float>(a: T, b: T) -> T {
    (a - b) * (a - b)
}

#[inline]
fn distance_to_boundary<T: Float>(query: &DVector<T>, boundary: T, dim: usize) -> T {
    squared_diff(query[dim], boundary)
}

#[inline]
fn children_near_far<T: Float>(
    query_element: T,
    boundary: T,
    low: usize,
    high: usize,
) -> (usize, usize) {
    if query_element < boundary {
        (low, high)
    } else {
        (high, low)
    }
}

/// Linear scan over `indices`. The first index wins ties.
#[inline]
pub(crate) fn find_nearest<T: Float>(
    query: &DVector<T>,
    indices: &[usize],
    data: &[DVector<T>],
) -> Option<(usize, T)> {
    let mut nearest: Option<(usize, T)> = None;
    for &index in indices {
        let d = squared_euclidean(query, &data[index]);
        match nearest {
            Some((_, min_distance)) if min_distance <= d => {}
            _ => nearest = Some((index, d)),
        }
    }
    nearest
}

/// Returns the index of the stored point nearest to `query` and its squared
/// distance, or `None` if `nodes` is empty.
///
/// Subtrees are visited near side first. A far side is skipped when the best
/// distance so far is strictly smaller than the squared distance to its
/// splitting plane, so among equally near points the one reached first is kept.
pub(crate) fn search<T: Float>(
    nodes: &[Node<T>],
    data: &[DVector<T>],
    query: &DVector<T>,
) -> Option<(usize, T)> {
    if nodes.is_empty() {
        return None;
    }

    let mut nearest: Option<(usize, T)> = None;
    // (node, lower bound on the distance to any point below it)
    let mut stack = Vec::from([(0, T::zero())]);
    while let Some((node_id, bound)) = stack.pop() {
        if let Some((_, min_distance)) = nearest {
            if min_distance < bound {
                continue;
            }
        }

        match &nodes[node_id] {
            Node::Leaf { indices } => {
                let Some((candidate, distance)) = find_nearest(query, indices, data) else {
                    continue;
                };
                match nearest {
                    Some((_, min_distance)) if min_distance <= distance => {}
                    _ => nearest = Some((candidate, distance)),
                }
            }
            Node::Internal {
                split_dim,
                threshold,
                low,
                high,
            } => {
                let (near, far) = children_near_far(query[*split_dim], *threshold, *low, *high);
                let far_bound = distance_to_boundary(query, *threshold, *split_dim);
                // Popped after the whole near side has been searched
                stack.push((far, if far_bound > bound { far_bound } else { bound }));
                stack.push((near, bound));
            }
        }
    }
    nearest
}
