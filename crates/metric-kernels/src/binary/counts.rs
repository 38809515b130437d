//! Co-occurrence counts of the boolean coding of two vectors.

use crate::error::{check_pair, dim_as, Result};

/// Per-dimension co-occurrence counts of two boolean-coded vectors.
///
/// An element is `true` iff it is nonzero. The counts are stored in the float type of the vectors so that the kernels can divide them directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryCounts<T> {
    /// Dimensions where both vectors are `true`.
    pub true_true: T,
    /// Dimensions where only the first vector is `true`.
    pub true_false: T,
    /// Dimensions where only the second vector is `true`.
    pub false_true: T,
    /// The dimensionality of the vectors.
    pub n: T,
}

impl<T: num_traits::Float> BinaryCounts<T> {
    /// Counts the co-occurrences in two vectors.
    ///
    /// # Errors
    ///
    /// If the vectors are empty or have different lengths.
    pub fn new(x: &[T], y: &[T]) -> Result<Self> {
        let n = check_pair(x, y)?;
        let (tt, tf, ft) = x.iter().zip(y).fold((0_usize, 0_usize, 0_usize), |(tt, tf, ft), (&a, &b)| {
            match (!a.is_zero(), !b.is_zero()) {
                (true, true) => (tt + 1, tf, ft),
                (true, false) => (tt, tf + 1, ft),
                (false, true) => (tt, tf, ft + 1),
                (false, false) => (tt, tf, ft),
            }
        });
        Ok(Self {
            true_true: dim_as(tt)?,
            true_false: dim_as(tf)?,
            false_true: dim_as(ft)?,
            n: dim_as(n)?,
        })
    }

    /// Dimensions where both vectors are `false`.
    pub fn false_false(&self) -> T {
        self.n - self.true_true - self.true_false - self.false_true
    }

    /// Dimensions where the vectors disagree.
    pub fn not_equal(&self) -> T {
        self.true_false + self.false_true
    }

    /// Dimensions where at least one of the vectors is `true`.
    pub fn either(&self) -> T {
        self.true_true + self.not_equal()
    }
}
