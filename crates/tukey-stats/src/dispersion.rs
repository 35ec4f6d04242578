//! Dispersion and standardization: variance, standard deviation, mean
//! absolute deviation and z-scores.

use num_traits::ToPrimitive;

use crate::{
    aggregate::{self, mean_of, sum_of_squares_of, to_f64_values},
    error::StatsError,
};

/// Population variance, `Σ(xᵢ − mean)² / n`.
///
/// # Examples
///
/// ```
/// use tukey_stats::dispersion::population_variance;
///
/// assert_eq!(population_variance(&[1, 3, 5, 7, 14]).unwrap(), 20.0);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn population_variance<T>(data: &[T]) -> Result<f64, StatsError>
where
    T: ToPrimitive,
{
    let sum_of_squares = aggregate::sum_of_squares(data)?;
    Ok(sum_of_squares / data.len() as f64)
}

/// Sample variance with Bessel's correction, `Σ(xᵢ − mean)² / (n − 1)`.
///
/// One observation is enough for a population variance but not for a sample
/// variance, so a single-element slice fails with
/// [`StatsError::InsufficientData`].
///
/// # Examples
///
/// ```
/// use tukey_stats::dispersion::sample_variance;
///
/// let variance = sample_variance(&[9, 8, 5, 1, 1]).unwrap();
/// assert!((variance - 14.2).abs() < 1e-9);
/// assert!(sample_variance(&[1]).unwrap_err().is_insufficient_data());
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn sample_variance<T>(data: &[T]) -> Result<f64, StatsError>
where
    T: ToPrimitive,
{
    let values = to_f64_values(data)?;
    if values.len() == 1 {
        return Err(StatsError::InsufficientData {
            required: 2,
            actual: 1,
        });
    }
    Ok(sum_of_squares_of(&values) / (values.len() - 1) as f64)
}

/// Square root of [`population_variance`].
pub fn population_stddev<T>(data: &[T]) -> Result<f64, StatsError>
where
    T: ToPrimitive,
{
    population_variance(data).map(f64::sqrt)
}

/// Square root of [`sample_variance`].
pub fn sample_stddev<T>(data: &[T]) -> Result<f64, StatsError>
where
    T: ToPrimitive,
{
    sample_variance(data).map(f64::sqrt)
}

/// Mean absolute deviation around the mean, `(1/n) · Σ|xᵢ − mean|`.
///
/// # Examples
///
/// ```
/// use tukey_stats::dispersion::mean_absolute_deviation;
///
/// assert_eq!(mean_absolute_deviation(&[1, 3, 5, 7, 14]).unwrap(), 3.6);
/// ```
pub fn mean_absolute_deviation<T>(data: &[T]) -> Result<f64, StatsError>
where
    T: ToPrimitive,
{
    let values = to_f64_values(data)?;
    let mean = mean_of(&values);
    let deviations = values.iter().map(|v| (v - mean).abs()).collect::<Vec<_>>();
    Ok(mean_of(&deviations))
}

/// Number of standard deviations `x` lies from `mean`.
///
/// # Errors
///
/// * [`StatsError::DivisionByZero`] - if `sd` is zero
///
/// # Examples
///
/// ```
/// use tukey_stats::dispersion::z_score;
///
/// assert_eq!(z_score(130.0, 100.0, 15.0).unwrap(), 2.0);
/// assert!(z_score(1.0, 1.0, 0.0).unwrap_err().is_division_by_zero());
/// ```
pub fn z_score(x: f64, mean: f64, sd: f64) -> Result<f64, StatsError> {
    if sd == 0.0 {
        return Err(StatsError::DivisionByZero);
    }
    Ok((x - mean) / sd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_population_variance() {
        assert_eq!(population_variance(&[1, 3, 5, 7, 14]).unwrap(), 20.0);
        assert_eq!(population_variance(&[4.0]).unwrap(), 0.0);
        assert_eq!(population_variance::<f64>(&[]), Err(StatsError::EmptyInput));
    }

    #[test]
    fn test_sample_variance() {
        assert_close(sample_variance(&[9, 8, 5, 1, 1]).unwrap(), 14.2);
        assert_close(sample_variance(&[1, 3, 5, 7, 14]).unwrap(), 25.0);
    }

    #[test]
    fn test_sample_variance_needs_two_observations() {
        assert_eq!(
            sample_variance(&[3.0]),
            Err(StatsError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
        assert_eq!(sample_variance::<f64>(&[]), Err(StatsError::EmptyInput));
        assert!(sample_stddev(&[3.0]).unwrap_err().is_insufficient_data());
    }

    #[test]
    fn test_sample_variance_reports_conversion_before_count() {
        struct Opaque;
        impl ToPrimitive for Opaque {
            fn to_i64(&self) -> Option<i64> {
                None
            }
            fn to_u64(&self) -> Option<u64> {
                None
            }
            fn to_f64(&self) -> Option<f64> {
                None
            }
        }
        assert!(sample_variance(&[Opaque]).unwrap_err().is_type_consistency());
        assert!(sample_stddev(&[Opaque]).unwrap_err().is_type_consistency());
    }

    #[test]
    fn test_stddev() {
        assert_close(population_stddev(&[1, 3, 5, 7, 14]).unwrap(), 20f64.sqrt());
        assert_close(sample_stddev(&[1, 3, 5, 7, 14]).unwrap(), 5.0);
        assert_close(population_stddev(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap(), 2.0);
    }

    #[test]
    fn test_mean_absolute_deviation() {
        assert_close(mean_absolute_deviation(&[2, 2, 2]).unwrap(), 0.0);
        assert_close(mean_absolute_deviation(&[1, 2, 3, 4]).unwrap(), 1.0);
        assert_eq!(
            mean_absolute_deviation::<u8>(&[]),
            Err(StatsError::EmptyInput)
        );
    }

    #[test]
    fn test_z_score() {
        assert_eq!(z_score(85.0, 100.0, 15.0).unwrap(), -1.0);
        assert_eq!(z_score(100.0, 100.0, 15.0).unwrap(), 0.0);
        assert_eq!(z_score(5.0, 0.0, 0.0), Err(StatsError::DivisionByZero));
    }
}
