//! Rank-based statistics using Tukey's inclusive method.
//!
//! For `n` sorted values, boundary `k` of `q` divisions is the value at the
//! 1-indexed rank `ceil(n * k / q)`. No interpolation happens between
//! neighbouring values, so even-length partitions pick the upper neighbour
//! instead of averaging. The results are always elements of the data.

use num_traits::ToPrimitive;

use crate::{
    aggregate::{sorted_copy, to_f64},
    error::StatsError,
};

/// Returns boundary `k` of `q` divisions of a dataset.
///
/// # Arguments
///
/// * `data` - The observations; sorted internally on a private copy
/// * `q` - The number of divisions (4 for quartiles, 10 for deciles, ...)
/// * `k` - The 1-indexed boundary to return, `1 ≤ k ≤ q - 1` for interior boundaries
///
/// # Errors
///
/// * [`StatsError::EmptyInput`] - if `data` is empty
/// * [`StatsError::TypeConsistency`] - if an element is not comparable (`NaN`)
/// * [`StatsError::InvalidRange`] - if the computed rank is outside `1..=n`,
///   which includes `k = 0` and `q = 0`
///
/// # Examples
///
/// ```
/// use tukey_stats::quantile::quantile;
///
/// assert_eq!(quantile(&[1, 2, 3, 4, 5], 2, 1).unwrap(), 3);
/// let values = (0..10).collect::<Vec<_>>();
/// assert_eq!(quantile(&values, 4, 3).unwrap(), 7);
/// ```
pub fn quantile<T>(data: &[T], q: usize, k: usize) -> Result<T, StatsError>
where
    T: PartialOrd + Clone,
{
    let sorted = sorted_copy(data)?;
    quantile_from_sorted(&sorted, q, k).cloned()
}

/// Third quartile minus first quartile.
///
/// The difference is taken in `f64`, so it cannot overflow the element type.
///
/// # Errors
///
/// * [`StatsError::EmptyInput`] - if `data` is empty
/// * [`StatsError::TypeConsistency`] - if an element is not comparable or
///   has no `f64` representation
///
/// # Examples
///
/// ```
/// use tukey_stats::quantile::interquartile_range;
///
/// let values = (0..10).collect::<Vec<i32>>();
/// assert_eq!(interquartile_range(&values).unwrap(), 5.0);
/// assert_eq!(interquartile_range(&[-100i8, 0, 50, 100]).unwrap(), 150.0);
/// ```
pub fn interquartile_range<T>(data: &[T]) -> Result<f64, StatsError>
where
    T: PartialOrd + Clone + ToPrimitive,
{
    let sorted = sorted_copy(data)?;
    let upper = to_f64(quantile_from_sorted(&sorted, 4, 3)?)?;
    let lower = to_f64(quantile_from_sorted(&sorted, 4, 1)?)?;
    Ok(upper - lower)
}

/// Looks up boundary `k` of `q` divisions in data already sorted ascending.
///
/// # Panics
///
/// Panics in debug mode if `sorted_values` is not sorted in ascending order.
pub fn quantile_from_sorted<T>(sorted_values: &[T], q: usize, k: usize) -> Result<&T, StatsError>
where
    T: PartialOrd,
{
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );
    if sorted_values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let rank = tukey_rank(sorted_values.len(), q, k)?;
    Ok(&sorted_values[rank - 1])
}

fn tukey_rank(len: usize, q: usize, k: usize) -> Result<usize, StatsError> {
    let out_of_range = |rank| StatsError::InvalidRange {
        rank,
        len,
        divisions: q,
        boundary: k,
    };
    if q == 0 {
        return Err(out_of_range(0));
    }
    // u128 keeps `len * k` exact for every pair of `usize` inputs.
    let rank = (len as u128 * k as u128).div_ceil(q as u128);
    let rank = usize::try_from(rank).map_err(|_| out_of_range(usize::MAX))?;
    if (1..=len).contains(&rank) {
        Ok(rank)
    } else {
        Err(out_of_range(rank))
    }
}

/// Precomputed boundaries of a dataset split into `q` divisions.
///
/// Stores the value at every interior boundary `1..q`, so repeated lookups
/// (all quartiles, all deciles) sort the data once.
///
/// # Examples
///
/// ```
/// use tukey_stats::quantile::Quantiles;
///
/// let values = (0..10).collect::<Vec<_>>();
/// let quartiles = Quantiles::new(&values, 4).unwrap();
///
/// assert_eq!(quartiles.get(1), Some(&2));
/// assert_eq!(quartiles.get(2), Some(&4));
/// assert_eq!(quartiles.get(3), Some(&7));
/// assert_eq!(quartiles.get(4), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Quantiles<T> {
    divisions: usize,
    /// Boundary values for `k = 1..divisions`, in order.
    values: Vec<T>,
}

impl<T> Quantiles<T>
where
    T: PartialOrd + Clone,
{
    /// Computes every interior boundary from unsorted values.
    ///
    /// # Errors
    ///
    /// * [`StatsError::EmptyInput`] - if `data` is empty
    /// * [`StatsError::TypeConsistency`] - if an element is not comparable (`NaN`)
    /// * [`StatsError::InvalidRange`] - if `divisions` is zero
    pub fn new(data: &[T], divisions: usize) -> Result<Self, StatsError> {
        let sorted = sorted_copy(data)?;
        Self::from_sorted(&sorted, divisions)
    }

    /// Computes every interior boundary from values sorted ascending.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `sorted_values` is not sorted in ascending order.
    pub fn from_sorted(sorted_values: &[T], divisions: usize) -> Result<Self, StatsError> {
        if sorted_values.is_empty() {
            return Err(StatsError::EmptyInput);
        }
        if divisions == 0 {
            return Err(StatsError::InvalidRange {
                rank: 0,
                len: sorted_values.len(),
                divisions,
                boundary: 0,
            });
        }
        let values = (1..divisions)
            .map(|k| quantile_from_sorted(sorted_values, divisions, k).cloned())
            .collect::<Result<_, _>>()?;
        Ok(Self { divisions, values })
    }
}

impl<T> Quantiles<T> {
    /// Number of divisions the data was split into.
    #[must_use]
    pub fn divisions(&self) -> usize {
        self.divisions
    }

    /// Value at interior boundary `k`, or `None` outside `1..divisions`.
    #[must_use]
    pub fn get(&self, k: usize) -> Option<&T> {
        k.checked_sub(1).and_then(|i| self.values.get(i))
    }

    /// Iterates over `(k, value)` pairs in ascending order of `k`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.values.iter().enumerate().map(|(i, v)| (i + 1, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_reference_values() {
        assert_eq!(quantile(&[1, 2, 3, 4, 5], 2, 1).unwrap(), 3);
        let values = (0..10).collect::<Vec<u32>>();
        assert_eq!(quantile(&values, 4, 3).unwrap(), 7);
        assert_eq!(quantile(&values, 4, 1).unwrap(), 2);
        // ceil(10 / 2) = 5 selects the lower middle element, not their average.
        assert_eq!(quantile(&values, 2, 1).unwrap(), 4);
    }

    #[test]
    fn test_quantile_unsorted_input_is_untouched() {
        let values = [9, 1, 8, 2, 7];
        assert_eq!(quantile(&values, 4, 1).unwrap(), 2);
        assert_eq!(values, [9, 1, 8, 2, 7]);
    }

    #[test]
    fn test_quantile_extremes() {
        let values = [4, 8, 15, 16, 23, 42];
        assert_eq!(quantile(&values, 4, 4).unwrap(), 42);
        assert_eq!(
            quantile(&values, 4, 0),
            Err(StatsError::InvalidRange {
                rank: 0,
                len: 6,
                divisions: 4,
                boundary: 0
            })
        );
        assert!(quantile(&values, 4, 5).unwrap_err().is_invalid_range());
        assert!(quantile(&values, 0, 1).unwrap_err().is_invalid_range());
    }

    #[test]
    fn test_quantile_huge_boundary() {
        let err = quantile(&[1, 2, 3], 1, usize::MAX).unwrap_err();
        assert!(err.is_invalid_range());
    }

    #[test]
    fn test_quantile_errors() {
        assert_eq!(quantile::<i32>(&[], 4, 1), Err(StatsError::EmptyInput));
        assert!(
            quantile(&[1.0, f64::NAN], 2, 1)
                .unwrap_err()
                .is_type_consistency()
        );
    }

    #[test]
    fn test_quantile_strings() {
        let words = ["delta", "alpha", "charlie", "bravo"];
        assert_eq!(quantile(&words, 4, 1).unwrap(), "alpha");
        assert_eq!(quantile(&words, 4, 3).unwrap(), "charlie");
    }

    #[test]
    fn test_interquartile_range() {
        assert_eq!(interquartile_range(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap(), 4.0);
        assert_eq!(interquartile_range(&[3.5]).unwrap(), 0.0);
        assert_eq!(interquartile_range::<u8>(&[]), Err(StatsError::EmptyInput));
    }

    #[test]
    fn test_interquartile_range_wider_than_element_type() {
        // Q3 - Q1 = 50 - (-100) does not fit in an i8.
        assert_eq!(interquartile_range(&[-100i8, 0, 50, 100]).unwrap(), 150.0);
        assert_eq!(
            interquartile_range(&[i64::MIN, 0, i64::MAX]).unwrap(),
            2f64.powi(64)
        );
        assert_eq!(
            interquartile_range(&[u64::MIN, u64::MAX, 7, 9]).unwrap(),
            9.0
        );
    }

    #[test]
    fn test_quantiles_quartiles() {
        let values = (0..10).collect::<Vec<i32>>();
        let quartiles = Quantiles::new(&values, 4).unwrap();
        for (k, value) in quartiles.iter() {
            assert_eq!(*value, quantile(&values, 4, k).unwrap());
        }
        assert_eq!(quartiles.get(2), Some(&4));
    }

    #[test]
    fn test_quantiles_deciles() {
        let values = (1..=20).collect::<Vec<u16>>();
        let deciles = Quantiles::new(&values, 10).unwrap();
        assert_eq!(deciles.divisions(), 10);
        let collected = deciles.iter().map(|(_, v)| *v).collect::<Vec<_>>();
        assert_eq!(collected, vec![2, 4, 6, 8, 10, 12, 14, 16, 18]);
        assert_eq!(deciles.get(0), None);
    }

    #[test]
    fn test_quantiles_single_division() {
        let quantiles = Quantiles::new(&[3, 1, 2], 1).unwrap();
        assert_eq!(quantiles.iter().count(), 0);
        assert!(Quantiles::new(&[1], 0).unwrap_err().is_invalid_range());
    }
}
