use core::fmt;

/// Errors returned when building or querying a [`KdTree`](crate::KdTree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KdTreeError {
    /// A vector or array did not have the expected length.
    ///
    /// Raised for points or queries whose length differs from the tree's
    /// dimensionality, and for point/value arrays of differing lengths.
    DimensionMismatch { expected: usize, found: usize },
    /// The tree was constructed with zero dimensions.
    ZeroDimension,
    /// The tree was constructed with a leaf size of zero.
    ZeroLeafSize,
    /// A coordinate is NaN. `index` is the offending stored point, or `None`
    /// when the NaN is in a query.
    NotANumber { index: Option<usize> },
}

impl fmt::Display for KdTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KdTreeError::DimensionMismatch { expected, found } => write!(
                f,
                "KD-Tree Dimension Mismatch: expected {} elements, found {}",
                expected, found
            ),
            KdTreeError::ZeroDimension => write!(f, "KD-Tree Dimension cannot be 0"),
            KdTreeError::ZeroLeafSize => write!(f, "KD-Tree Leaf size cannot be 0"),
            KdTreeError::NotANumber { index: Some(index) } => {
                write!(f, "KD-Tree Not A Number: point {} has a NaN coordinate", index)
            }
            KdTreeError::NotANumber { index: None } => {
                write!(f, "KD-Tree Not A Number: query has a NaN coordinate")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KdTreeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display() {
        let e = KdTreeError::DimensionMismatch {
            expected: 3,
            found: 2,
        };
        assert_eq!(
            e.to_string(),
            "KD-Tree Dimension Mismatch: expected 3 elements, found 2"
        );
        assert_eq!(
            KdTreeError::NotANumber { index: Some(4) }.to_string(),
            "KD-Tree Not A Number: point 4 has a NaN coordinate"
        );
    }
}
