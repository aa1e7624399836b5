//! # KD-Tree based Nearest neighbor search in Rust
//!
//! A [`KdTree`] stores points of a fixed dimensionality together with an
//! arbitrary value per point. It is built once from the whole point set and
//! then answers nearest neighbor queries under squared euclidean distance.
//!
//! ## Example
//!
//! ```
//! use nearest_neighbor::KdTree;
//! use nalgebra::DVector;
//!
//! let raw_data: [[f64; 3]; 7] = [
//!     [3., 2., -1.],
//!     [2., 4., -2.],
//!     [1., 6., 4.],
//!     [7., 8., 3.],
//!     [9., 1., 2.],
//!     [-4., -9., 7.],
//!     [4., 0., 17.],
//! ];
//!
//! let points: Vec<DVector<f64>> = raw_data.iter().map(|e| DVector::from_row_slice(e)).collect();
//! let values = vec!["item 1", "item 2", "item 3", "item 4", "item 5", "item 6", "item 7"];
//!
//! let tree = KdTree::new(3)?.build(points, values)?;
//!
//! let query = DVector::from_row_slice(&[8., 2., 2.]);
//! assert_eq!(tree.query(&query)?, Some(&"item 5"));
//!
//! // The stored index and squared euclidean distance are also available
//! assert_eq!(tree.nearest(&query)?, Some((4, 2.)));
//! # Ok::<(), nearest_neighbor::KdTreeError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
use log::info; // Use log crate when building application

#[cfg(feature = "std")]
use std::println as info;

mod build;
mod display;
mod error;
mod node;
mod search;

extern crate alloc;

use crate::alloc::string::{String, ToString};
use crate::node::Node;
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display};
use core::ops::{AddAssign, MulAssign, SubAssign};
use num_traits::float::FloatCore;

use nalgebra::DVector;

pub use crate::error::KdTreeError;

pub trait Float: 'static + FloatCore + Debug + Display + SubAssign + AddAssign + MulAssign {}
impl<T: 'static + FloatCore + Debug + Display + SubAssign + AddAssign + MulAssign> Float for T {}

/// KD-Tree for nearest neighbor search.
///
/// The tree owns its points and values. [`KdTree::build`] produces a new,
/// immutable tree; queries never mutate it, so a built tree can be shared
/// between readers freely.
#[derive(Debug, Clone)]
pub struct KdTree<T: Float, V> {
    dim: usize,
    leaf_size: usize,
    /// Node arena. Empty when the tree holds no points, otherwise slot 0 is the root.
    nodes: Vec<Node<T>>,
    points: Vec<DVector<T>>,
    values: Vec<V>,
}

impl<T: Float, V> KdTree<T, V> {
    /// Constructs an empty tree for `dim`-dimensional points.
    ///
    /// Leaves are split down to a single point, except where coordinates tie.
    pub fn new(dim: usize) -> Result<Self, KdTreeError> {
        Self::with_leaf_size(dim, 1)
    }

    /// Constructs an empty tree whose leaves hold up to `leaf_size` points
    /// before being split.
    pub fn with_leaf_size(dim: usize, leaf_size: usize) -> Result<Self, KdTreeError> {
        if dim == 0 {
            return Err(KdTreeError::ZeroDimension);
        }
        if leaf_size == 0 {
            return Err(KdTreeError::ZeroLeafSize);
        }
        Ok(KdTree {
            dim,
            leaf_size,
            nodes: Vec::new(),
            points: Vec::new(),
            values: Vec::new(),
        })
    }

    /// Builds a new tree with the same dimensionality and leaf size from
    /// `points` and the parallel `values`. `self` is left untouched.
    ///
    /// Fails with [`KdTreeError::DimensionMismatch`] if `points` and `values`
    /// differ in length or any point does not have `dim` elements, and with
    /// [`KdTreeError::NotANumber`] if any coordinate is NaN.
    pub fn build(&self, points: Vec<DVector<T>>, values: Vec<V>) -> Result<Self, KdTreeError> {
        if points.len() != values.len() {
            return Err(KdTreeError::DimensionMismatch {
                expected: points.len(),
                found: values.len(),
            });
        }
        for (index, point) in points.iter().enumerate() {
            self.check_point(point).map_err(|e| match e {
                KdTreeError::NotANumber { .. } => KdTreeError::NotANumber { index: Some(index) },
                e => e,
            })?;
        }

        let nodes = build::build_nodes(&points, self.dim, self.leaf_size);
        Ok(KdTree {
            dim: self.dim,
            leaf_size: self.leaf_size,
            nodes,
            points,
            values,
        })
    }

    /// Replaces the contents of this tree with a tree built from `points` and
    /// `values`. On error the current contents are kept as they were.
    pub fn rebuild(&mut self, points: Vec<DVector<T>>, values: Vec<V>) -> Result<(), KdTreeError> {
        *self = self.build(points, values)?;
        Ok(())
    }

    /// Returns the value associated with the stored point nearest to `point`,
    /// or `None` if the tree holds no points.
    ///
    /// When several stored points are equally near, the one the search
    /// reaches first is returned, which is not necessarily the lowest index.
    pub fn query(&self, point: &DVector<T>) -> Result<Option<&V>, KdTreeError> {
        Ok(self.nearest(point)?.map(|(index, _)| &self.values[index]))
    }

    /// Returns the index of the stored point nearest to `point` along with the
    /// squared euclidean distance to it, or `None` if the tree holds no points.
    pub fn nearest(&self, point: &DVector<T>) -> Result<Option<(usize, T)>, KdTreeError> {
        self.check_point(point)?;
        Ok(search::search(&self.nodes, &self.points, point))
    }

    fn check_point(&self, point: &DVector<T>) -> Result<(), KdTreeError> {
        if point.len() != self.dim {
            return Err(KdTreeError::DimensionMismatch {
                expected: self.dim,
                found: point.len(),
            });
        }
        if point.iter().any(|x| x.is_nan()) {
            return Err(KdTreeError::NotANumber { index: None });
        }
        Ok(())
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn leaf_size(&self) -> usize {
        self.leaf_size
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[DVector<T>] {
        &self.points
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Multi-line dump of the tree structure, the same text as `Display`.
    pub fn debug_string(&self) -> String {
        self.to_string()
    }

    pub fn print(&self) {
        for line in self.debug_string().lines() {
            info!("{}", line);
        }
    }
}

impl<T: Float, V> Display for KdTree<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::write_tree(f, &self.nodes, self.dim)
    }
}
