//! Aggregate primitives: mean, median, mode and the sum of squared deviations.
//!
//! These are pure reductions over a borrowed slice. Functions that need the
//! data in order sort a private copy, so the caller's slice is never touched.

use std::{cmp::Ordering, collections::HashMap, hash::Hash};

use num_traits::ToPrimitive;

use crate::error::StatsError;

/// Computes the arithmetic mean of a dataset.
///
/// The division is always performed in `f64`, so integer inputs never
/// truncate.
///
/// # Errors
///
/// * [`StatsError::EmptyInput`] - if `data` is empty
/// * [`StatsError::TypeConsistency`] - if an element has no `f64` representation
///
/// # Examples
///
/// ```
/// use tukey_stats::aggregate::mean;
///
/// assert_eq!(mean(&[1, 2, 3]).unwrap(), 2.0);
/// assert_eq!(mean(&[-3, -4, -8]).unwrap(), -5.0);
/// assert!(mean::<i32>(&[]).unwrap_err().is_empty_input());
/// ```
pub fn mean<T>(data: &[T]) -> Result<f64, StatsError>
where
    T: ToPrimitive,
{
    let values = to_f64_values(data)?;
    Ok(mean_of(&values))
}

/// Computes the median of a numeric dataset.
///
/// For an odd number of elements this is the middle element of the sorted
/// data. For an even number it is the average of the two middle elements.
///
/// # Errors
///
/// * [`StatsError::EmptyInput`] - if `data` is empty
/// * [`StatsError::TypeConsistency`] - if an element is not comparable (`NaN`)
///   or has no `f64` representation
///
/// # Examples
///
/// ```
/// use tukey_stats::aggregate::median;
///
/// assert_eq!(median(&[0, 2, 3, 10]).unwrap(), 2.5);
/// assert_eq!(median(&[13, 42, 666]).unwrap(), 42.0);
/// ```
pub fn median<T>(data: &[T]) -> Result<f64, StatsError>
where
    T: PartialOrd + Clone + ToPrimitive,
{
    let sorted = sorted_copy(data)?;
    let n = sorted.len();
    if n % 2 == 0 {
        let lower = to_f64(&sorted[n / 2 - 1])?;
        let upper = to_f64(&sorted[n / 2])?;
        Ok((lower + upper) / 2.0)
    } else {
        to_f64(&sorted[n / 2])
    }
}

/// Computes the median of a dataset whose elements only support ordering.
///
/// Returns the middle element itself. Averaging two middle elements needs
/// arithmetic, so an even-length input is rejected; use [`median`] for
/// numbers.
///
/// # Errors
///
/// * [`StatsError::EmptyInput`] - if `data` is empty
/// * [`StatsError::TypeConsistency`] - if `data` has an even number of elements
///   or contains an element not comparable with itself
///
/// # Examples
///
/// ```
/// use tukey_stats::aggregate::median_by_order;
///
/// let words = ["a string", "string", "a string"];
/// assert_eq!(median_by_order(&words).unwrap(), "a string");
/// assert!(median_by_order(&["a", "b"]).unwrap_err().is_type_consistency());
/// ```
pub fn median_by_order<T>(data: &[T]) -> Result<T, StatsError>
where
    T: PartialOrd + Clone,
{
    let mut sorted = sorted_copy(data)?;
    let n = sorted.len();
    if n % 2 == 0 {
        return Err(StatsError::type_consistency::<T>());
    }
    Ok(sorted.swap_remove(n / 2))
}

/// Returns the most frequent element of a dataset.
///
/// Frequencies are counted in a single pass. On ties the element that
/// *first reached* the winning count is kept: a later element that merely
/// matches the current maximum does not replace it.
///
/// # Errors
///
/// * [`StatsError::EmptyInput`] - if `data` is empty
///
/// # Examples
///
/// ```
/// use tukey_stats::aggregate::mode;
///
/// assert_eq!(mode(&[1, 2, 3, 4, 4, 4, 4]).unwrap(), 4);
/// // 2 reaches a count of two before 1 does.
/// assert_eq!(mode(&[1, 2, 2, 1]).unwrap(), 2);
/// ```
pub fn mode<T>(data: &[T]) -> Result<T, StatsError>
where
    T: Eq + Hash + Clone,
{
    let mut counts: HashMap<&T, usize> = HashMap::new();
    let mut best: Option<(&T, usize)> = None;
    for value in data {
        let count = counts.entry(value).or_default();
        *count += 1;
        if best.is_none_or(|(_, best_count)| *count > best_count) {
            best = Some((value, *count));
        }
    }
    best.map(|(value, _)| value.clone())
        .ok_or(StatsError::EmptyInput)
}

/// Returns every element sharing the highest frequency, in order of first
/// appearance.
///
/// A result with more than one element means the data is multimodal. An
/// empty input gives an empty result.
///
/// # Examples
///
/// ```
/// use tukey_stats::aggregate::multimode;
///
/// assert_eq!(multimode(&[3, 1, 1, 3, 2]), vec![3, 1]);
/// assert_eq!(multimode(&['a', 'b', 'b']), vec!['b']);
/// assert!(multimode::<u8>(&[]).is_empty());
/// ```
#[must_use]
pub fn multimode<T>(data: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut index: HashMap<&T, usize> = HashMap::new();
    let mut counts: Vec<(&T, usize)> = vec![];
    for value in data {
        let slot = *index.entry(value).or_insert_with(|| {
            counts.push((value, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }

    let Some(max) = counts.iter().map(|(_, count)| *count).max() else {
        return vec![];
    };
    counts
        .into_iter()
        .filter(|(_, count)| *count == max)
        .map(|(value, _)| value.clone())
        .collect()
}

/// Computes the sum of squared deviations from the mean, `Σ(xᵢ − mean)²`.
///
/// # Errors
///
/// Propagates the errors of [`mean`].
///
/// # Examples
///
/// ```
/// use tukey_stats::aggregate::sum_of_squares;
///
/// assert_eq!(sum_of_squares(&[1, 3, 5, 7, 14]).unwrap(), 100.0);
/// ```
pub fn sum_of_squares<T>(data: &[T]) -> Result<f64, StatsError>
where
    T: ToPrimitive,
{
    let values = to_f64_values(data)?;
    Ok(sum_of_squares_of(&values))
}

/// Converts every element to `f64`, rejecting an empty slice.
pub(crate) fn to_f64_values<T>(data: &[T]) -> Result<Vec<f64>, StatsError>
where
    T: ToPrimitive,
{
    if data.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    data.iter().map(to_f64).collect()
}

pub(crate) fn to_f64<T>(value: &T) -> Result<f64, StatsError>
where
    T: ToPrimitive,
{
    value
        .to_f64()
        .ok_or_else(StatsError::type_consistency::<T>)
}

/// Mean of an already converted, non-empty slice.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn mean_of(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty());
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sum of squared deviations of an already converted, non-empty slice.
pub(crate) fn sum_of_squares_of(values: &[f64]) -> f64 {
    let mean = mean_of(values);
    values.iter().map(|v| (v - mean).powi(2)).sum()
}

/// Returns an ascending copy of `data`.
///
/// Elements are expected to be totally ordered apart from `NaN`. Fails on an
/// empty slice, on an element that does not compare equal to itself (`NaN`),
/// and on any incomparable pair met while sorting or left adjacent in the
/// result, since such a slice has no well-defined order.
pub(crate) fn sorted_copy<T>(data: &[T]) -> Result<Vec<T>, StatsError>
where
    T: PartialOrd + Clone,
{
    if data.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let incomparable = StatsError::type_consistency::<T>;
    if data.iter().any(|v| v.partial_cmp(v).is_none()) {
        return Err(incomparable());
    }
    let sorted = merge_sort(data).ok_or_else(incomparable)?;
    if !sorted.is_sorted_by(|a, b| a <= b) {
        return Err(incomparable());
    }
    Ok(sorted)
}

/// Stable merge sort that gives up on the first incomparable pair.
///
/// `slice::sort_by` may panic when its comparator is not a total order, which
/// a genuine `PartialOrd` can produce.
fn merge_sort<T>(values: &[T]) -> Option<Vec<T>>
where
    T: PartialOrd + Clone,
{
    if values.len() <= 1 {
        return Some(values.to_vec());
    }
    let (left, right) = values.split_at(values.len() / 2);
    let mut left = merge_sort(left)?.into_iter().peekable();
    let mut right = merge_sort(right)?.into_iter().peekable();

    let mut merged = Vec::with_capacity(values.len());
    loop {
        let order = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l.partial_cmp(r)?,
            _ => break,
        };
        let next = if order == Ordering::Greater {
            right.next()
        } else {
            left.next()
        };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    Some(merged)
}
