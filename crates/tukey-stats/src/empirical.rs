//! The 68-95-99.7 rule for normally distributed data.
//!
//! A bound is converted to a z-score, truncated toward zero, and looked up in
//! a fixed table of cumulative percentages. Only `|z| < 4` is covered.

use serde::{Deserialize, Serialize};

use crate::{
    dispersion::z_score,
    error::{DomainError, StatsError},
};

/// Percentage of a normal distribution below `mean + z * sd` for `z = 0..=3`.
const CUMULATIVE_PERCENT: [f64; 4] = [50.0, 84.0, 97.5, 99.85];

/// The range an [`empirical_rule`] query asks about.
///
/// `less_than` alone asks for the mass below it, `greater_than` alone for the
/// mass above it, and both together for the mass between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub less_than: Option<f64>,
    pub greater_than: Option<f64>,
}

impl Bounds {
    /// Values below `upper`.
    #[must_use]
    pub fn below(upper: f64) -> Self {
        Self {
            less_than: Some(upper),
            greater_than: None,
        }
    }

    /// Values above `lower`.
    #[must_use]
    pub fn above(lower: f64) -> Self {
        Self {
            less_than: None,
            greater_than: Some(lower),
        }
    }

    /// Values between `lower` and `upper`.
    #[must_use]
    pub fn between(lower: f64, upper: f64) -> Self {
        Self {
            less_than: Some(upper),
            greater_than: Some(lower),
        }
    }
}

/// Estimates the percentage of normally distributed data inside `bounds`.
///
/// # Errors
///
/// * [`StatsError::Domain`] - if `bounds` has neither limit, or its lower
///   limit exceeds its upper limit
/// * [`StatsError::UnsupportedRange`] - if a limit lies 4 or more standard
///   deviations from the mean
/// * [`StatsError::DivisionByZero`] - if `sd` is zero
///
/// # Examples
///
/// ```
/// use tukey_stats::empirical::{Bounds, empirical_rule};
///
/// assert_eq!(empirical_rule(100.0, 15.0, Bounds::below(115.0)).unwrap(), 84.0);
/// assert_eq!(empirical_rule(100.0, 15.0, Bounds::above(130.0)).unwrap(), 2.5);
/// assert_eq!(empirical_rule(100.0, 15.0, Bounds::between(70.0, 130.0)).unwrap(), 95.0);
/// ```
pub fn empirical_rule(mean: f64, sd: f64, bounds: Bounds) -> Result<f64, StatsError> {
    match (bounds.greater_than, bounds.less_than) {
        (None, None) => Err(StatsError::Domain(DomainError::MissingBound)),
        (None, Some(upper)) => percent_below(upper, mean, sd),
        (Some(lower), None) => Ok(100.0 - percent_below(lower, mean, sd)?),
        (Some(lower), Some(upper)) => {
            if lower > upper {
                return Err(StatsError::Domain(DomainError::InvertedBounds {
                    less_than: upper,
                    greater_than: lower,
                }));
            }
            Ok(percent_below(upper, mean, sd)? - percent_below(lower, mean, sd)?)
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn percent_below(x: f64, mean: f64, sd: f64) -> Result<f64, StatsError> {
    let z = z_score(x, mean, sd)?;
    let magnitude = z.abs().trunc();
    if magnitude.is_nan() || magnitude >= CUMULATIVE_PERCENT.len() as f64 {
        return Err(StatsError::UnsupportedRange { z });
    }
    let cumulative = CUMULATIVE_PERCENT[magnitude as usize];
    Ok(if z < 0.0 { 100.0 - cumulative } else { cumulative })
}
