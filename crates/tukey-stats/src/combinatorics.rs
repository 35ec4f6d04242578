//! Exact factorials, permutations and combinations.
//!
//! Results are [`BigUint`], so large arguments grow the result instead of
//! overflowing.

use num_bigint::BigUint;
use num_traits::One;

use crate::error::{DomainError, StatsError};

/// Computes `n!`.
///
/// # Errors
///
/// * [`StatsError::Domain`] - if `n` is negative
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use tukey_stats::combinatorics::factorial;
///
/// assert_eq!(factorial(0).unwrap(), BigUint::from(1u32));
/// assert_eq!(factorial(5).unwrap(), BigUint::from(120u32));
/// ```
pub fn factorial(n: i64) -> Result<BigUint, StatsError> {
    let n = non_negative("n", n)?;
    Ok((2..=n).fold(BigUint::one(), |acc, i| acc * i))
}

/// Number of ordered selections of `k` items from `n`, `n! / (n − k)!`.
///
/// # Errors
///
/// * [`StatsError::Domain`] - unless `0 ≤ k ≤ n`
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use tukey_stats::combinatorics::permutations;
///
/// assert_eq!(permutations(5, 2).unwrap(), BigUint::from(20u32));
/// ```
pub fn permutations(n: i64, k: i64) -> Result<BigUint, StatsError> {
    check_selection(n, k)?;
    Ok(factorial(n)? / factorial(n - k)?)
}

/// Number of unordered selections of `k` items from `n`, `n! / (k! (n − k)!)`.
///
/// # Errors
///
/// * [`StatsError::Domain`] - unless `0 ≤ k ≤ n`
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use tukey_stats::combinatorics::combinations;
///
/// assert_eq!(combinations(5, 2).unwrap(), BigUint::from(10u32));
/// ```
pub fn combinations(n: i64, k: i64) -> Result<BigUint, StatsError> {
    Ok(permutations(n, k)? / factorial(k)?)
}

fn non_negative(name: &'static str, value: i64) -> Result<u64, StatsError> {
    u64::try_from(value).map_err(|_| StatsError::Domain(DomainError::Negative { name, value }))
}

fn check_selection(n: i64, k: i64) -> Result<(), StatsError> {
    non_negative("n", n)?;
    non_negative("k", k)?;
    if k > n {
        return Err(StatsError::Domain(DomainError::SelectionExceedsPool {
            n,
            k,
        }));
    }
    Ok(())
}
