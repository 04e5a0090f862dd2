//! Shape envelopes for batched categorical data.
//!
//! [`FeatureArray`] carries values plus the structural metadata of a batch
//! (dense grid, sparse coordinate list, or ragged rows). The hashing
//! engine only ever maps values element-wise; the metadata passes through
//! untouched, so a sparse batch in is a sparse batch out with the same
//! indices, and a ragged batch keeps its row lengths.
//!
//! This is deliberately the minimal envelope, not a tensor library: no
//! broadcasting, no reordering, no arithmetic.

use crate::error::{CubetaError, Result};

/// A batch of values in one of three structural forms.
///
/// The constructors validate structural invariants once; after that, every
/// operation preserves them.
///
/// # Examples
///
/// ```
/// use cubeta::array::FeatureArray;
///
/// let batch = FeatureArray::dense(vec!["a", "b", "c", "d"], vec![2, 2]).unwrap();
/// let lengths = batch.map(|s| s.len());
/// assert_eq!(lengths.values(), &[1, 1, 1, 1]);
/// assert_eq!(lengths, FeatureArray::dense(vec![1, 1, 1, 1], vec![2, 2]).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureArray<T> {
    /// Row-major dense grid. A scalar is an empty `shape`.
    Dense {
        /// Element values, `shape.iter().product()` of them.
        values: Vec<T>,
        /// Dimension sizes, outermost first.
        shape: Vec<usize>,
    },
    /// Sparse coordinate list over a dense bounding shape.
    Sparse {
        /// One coordinate per value, each of rank `dense_shape.len()`.
        indices: Vec<Vec<usize>>,
        /// The stored (non-default) values.
        values: Vec<T>,
        /// Bounding shape of the underlying dense grid.
        dense_shape: Vec<usize>,
    },
    /// Variable-length rows over a flat value buffer.
    Ragged {
        /// Concatenated row values.
        values: Vec<T>,
        /// Row boundaries: starts at 0, non-decreasing, ends at
        /// `values.len()`. Row `i` is `values[row_splits[i]..row_splits[i+1]]`.
        row_splits: Vec<usize>,
    },
}

impl<T> FeatureArray<T> {
    /// Creates a dense array, checking that `shape` accounts for every value.
    ///
    /// # Errors
    ///
    /// Returns `CubetaError::InvalidStructure` if the product of `shape`
    /// does not equal `values.len()`.
    pub fn dense(values: Vec<T>, shape: Vec<usize>) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if expected != values.len() {
            return Err(CubetaError::InvalidStructure {
                message: format!(
                    "shape {shape:?} holds {expected} elements, got {} values",
                    values.len()
                ),
            });
        }
        Ok(FeatureArray::Dense { values, shape })
    }

    /// Creates a 1-D dense array from a flat vector.
    #[must_use]
    pub fn from_vec(values: Vec<T>) -> Self {
        let shape = vec![values.len()];
        FeatureArray::Dense { values, shape }
    }

    /// Creates a sparse array, checking coordinate arity and bounds.
    ///
    /// # Errors
    ///
    /// Returns `CubetaError::InvalidStructure` if the number of coordinates
    /// differs from the number of values, if any coordinate's rank differs
    /// from `dense_shape.len()`, or if any coordinate component is out of
    /// bounds.
    pub fn sparse(
        indices: Vec<Vec<usize>>,
        values: Vec<T>,
        dense_shape: Vec<usize>,
    ) -> Result<Self> {
        if indices.len() != values.len() {
            return Err(CubetaError::InvalidStructure {
                message: format!(
                    "{} coordinates for {} values",
                    indices.len(),
                    values.len()
                ),
            });
        }
        for coord in &indices {
            if coord.len() != dense_shape.len() {
                return Err(CubetaError::InvalidStructure {
                    message: format!(
                        "coordinate {coord:?} has rank {}, dense_shape {dense_shape:?} has rank {}",
                        coord.len(),
                        dense_shape.len()
                    ),
                });
            }
            for (axis, (&i, &bound)) in coord.iter().zip(dense_shape.iter()).enumerate() {
                if i >= bound {
                    return Err(CubetaError::InvalidStructure {
                        message: format!(
                            "coordinate {coord:?} exceeds dense_shape {dense_shape:?} on axis {axis}"
                        ),
                    });
                }
            }
        }
        Ok(FeatureArray::Sparse {
            indices,
            values,
            dense_shape,
        })
    }

    /// Creates a ragged array, checking the row-splits invariants.
    ///
    /// # Errors
    ///
    /// Returns `CubetaError::InvalidStructure` if `row_splits` is empty,
    /// does not start at 0, decreases anywhere, or does not end at
    /// `values.len()`.
    pub fn ragged(values: Vec<T>, row_splits: Vec<usize>) -> Result<Self> {
        if row_splits.first() != Some(&0) {
            return Err(CubetaError::InvalidStructure {
                message: format!("row_splits must start at 0, got {row_splits:?}"),
            });
        }
        if row_splits.windows(2).any(|w| w[0] > w[1]) {
            return Err(CubetaError::InvalidStructure {
                message: format!("row_splits must be non-decreasing, got {row_splits:?}"),
            });
        }
        if row_splits.last() != Some(&values.len()) {
            return Err(CubetaError::InvalidStructure {
                message: format!(
                    "row_splits must end at {} (the value count), got {row_splits:?}",
                    values.len()
                ),
            });
        }
        Ok(FeatureArray::Ragged { values, row_splits })
    }

    /// The flat value buffer, in storage order, for any structural form.
    #[must_use]
    pub fn values(&self) -> &[T] {
        match self {
            FeatureArray::Dense { values, .. }
            | FeatureArray::Sparse { values, .. }
            | FeatureArray::Ragged { values, .. } => values,
        }
    }

    /// Number of stored elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// Whether the array stores no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Applies `f` to every value, copying all structural metadata verbatim.
    ///
    /// Element `i` of the output depends only on element `i` of the input;
    /// there is no cross-element state.
    #[must_use]
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> FeatureArray<U> {
        match self {
            FeatureArray::Dense { values, shape } => FeatureArray::Dense {
                values: values.iter().map(&mut f).collect(),
                shape: shape.clone(),
            },
            FeatureArray::Sparse {
                indices,
                values,
                dense_shape,
            } => FeatureArray::Sparse {
                indices: indices.clone(),
                values: values.iter().map(&mut f).collect(),
                dense_shape: dense_shape.clone(),
            },
            FeatureArray::Ragged { values, row_splits } => FeatureArray::Ragged {
                values: values.iter().map(&mut f).collect(),
                row_splits: row_splits.clone(),
            },
        }
    }
}

impl<T> FeatureArray<T> {
    /// Number of rows of a ragged array, or `None` for other forms.
    #[must_use]
    pub fn num_rows(&self) -> Option<usize> {
        match self {
            FeatureArray::Ragged { row_splits, .. } => Some(row_splits.len().saturating_sub(1)),
            _ => None,
        }
    }

    /// Row `i` of a ragged array, or `None` for other forms or out-of-range `i`.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[T]> {
        match self {
            FeatureArray::Ragged { values, row_splits } => {
                let (start, end) = (*row_splits.get(i)?, *row_splits.get(i + 1)?);
                Some(&values[start..end])
            }
            _ => None,
        }
    }
}
