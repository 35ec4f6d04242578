use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::{
    aggregate::{self, sorted_copy, to_f64_values},
    dispersion,
    empirical::{self, Bounds},
    error::StatsError,
    quantile::quantile_from_sorted,
};

/// Descriptive statistics summarizing a dataset.
///
/// Collects the central-tendency, dispersion and rank-based measures of this
/// crate for one dataset, computed from a single sorted copy of the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The number of observations.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean of the dataset.
    pub mean: f64,
    /// The median value of the dataset.
    pub median: f64,
    /// The population variance (divides by `count`).
    pub population_variance: f64,
    /// The population standard deviation.
    pub population_std_dev: f64,
    /// The sample variance (divides by `count - 1`); `None` for a single observation.
    pub sample_variance: Option<f64>,
    /// The sample standard deviation; `None` for a single observation.
    pub sample_std_dev: Option<f64>,
    /// The mean absolute deviation around the mean.
    pub mean_absolute_deviation: f64,
    /// Third quartile minus first quartile, by Tukey's inclusive method.
    pub interquartile_range: f64,
}

impl Summary {
    /// Computes the summary from unsorted values.
    ///
    /// This method sorts a copy of the values before computing statistics.
    ///
    /// # Errors
    ///
    /// * [`StatsError::EmptyInput`] - if `data` is empty
    /// * [`StatsError::TypeConsistency`] - if an element has no `f64`
    ///   representation or converts to `NaN`
    ///
    /// # Examples
    ///
    /// ```
    /// use tukey_stats::summary::Summary;
    ///
    /// let summary = Summary::new(&[5, 2, 4, 1, 3]).unwrap();
    /// assert_eq!(summary.min, 1.0);
    /// assert_eq!(summary.max, 5.0);
    /// assert_eq!(summary.mean, 3.0);
    /// assert_eq!(summary.median, 3.0);
    /// assert_eq!(summary.sample_variance, Some(2.5));
    /// ```
    pub fn new<T>(data: &[T]) -> Result<Self, StatsError>
    where
        T: ToPrimitive,
    {
        let values = to_f64_values(data)?;
        let sorted = sorted_copy(&values)?;
        Self::from_sorted(&sorted)
    }

    /// Computes the summary from pre-sorted values.
    ///
    /// Skips the sorting step. Use this when the data is already in
    /// ascending order.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tukey_stats::summary::Summary;
    ///
    /// let summary = Summary::from_sorted(&[7.0]).unwrap();
    /// assert_eq!(summary.population_variance, 0.0);
    /// assert_eq!(summary.sample_variance, None);
    /// ```
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self, StatsError> {
        debug_assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
            return Err(StatsError::EmptyInput);
        };
        let count = sorted_values.len();
        let population_variance = dispersion::population_variance(sorted_values)?;
        let sample_variance = if count > 1 {
            Some(dispersion::sample_variance(sorted_values)?)
        } else {
            None
        };
        let interquartile_range = quantile_from_sorted(sorted_values, 4, 3)?
            - quantile_from_sorted(sorted_values, 4, 1)?;

        Ok(Self {
            count,
            min,
            max,
            mean: aggregate::mean(sorted_values)?,
            median: aggregate::median(sorted_values)?,
            population_variance,
            population_std_dev: population_variance.sqrt(),
            sample_variance,
            sample_std_dev: sample_variance.map(f64::sqrt),
            mean_absolute_deviation: dispersion::mean_absolute_deviation(sorted_values)?,
            interquartile_range,
        })
    }

    /// The mean and population standard deviation as a [`Spread`].
    #[must_use]
    pub fn population_spread(&self) -> Spread {
        Spread::new(self.mean, self.population_std_dev)
    }

    /// The mean and sample standard deviation as a [`Spread`], if defined.
    #[must_use]
    pub fn sample_spread(&self) -> Option<Spread> {
        self.sample_std_dev.map(|sd| Spread::new(self.mean, sd))
    }
}

/// A distribution described by its center and spread.
///
/// # Examples
///
/// ```
/// use tukey_stats::{empirical::Bounds, summary::Spread};
///
/// let iq = Spread::new(100.0, 15.0);
/// assert_eq!(iq.z_score(145.0).unwrap(), 3.0);
/// assert_eq!(iq.empirical_rule(Bounds::between(85.0, 115.0)).unwrap(), 68.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spread {
    pub mean: f64,
    pub std_dev: f64,
}

impl Spread {
    #[must_use]
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    /// Mean and population standard deviation of `data`.
    pub fn population<T>(data: &[T]) -> Result<Self, StatsError>
    where
        T: ToPrimitive,
    {
        Ok(Self::new(
            aggregate::mean(data)?,
            dispersion::population_stddev(data)?,
        ))
    }

    /// Mean and sample standard deviation of `data`.
    pub fn sample<T>(data: &[T]) -> Result<Self, StatsError>
    where
        T: ToPrimitive,
    {
        Ok(Self::new(
            aggregate::mean(data)?,
            dispersion::sample_stddev(data)?,
        ))
    }

    /// See [`dispersion::z_score`].
    pub fn z_score(&self, x: f64) -> Result<f64, StatsError> {
        dispersion::z_score(x, self.mean, self.std_dev)
    }

    /// See [`empirical::empirical_rule`].
    pub fn empirical_rule(&self, bounds: Bounds) -> Result<f64, StatsError> {
        empirical::empirical_rule(self.mean, self.std_dev, bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_integers() {
        let summary = Summary::new(&[14, 1, 7, 3, 5]).unwrap();
        assert_eq!(summary.count, 5);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 14.0);
        assert_eq!(summary.mean, 6.0);
        assert_eq!(summary.median, 5.0);
        assert_eq!(summary.population_variance, 20.0);
        assert_eq!(summary.sample_variance, Some(25.0));
        assert_eq!(summary.sample_std_dev, Some(5.0));
        assert_eq!(summary.mean_absolute_deviation, 3.6);
        // Q3 = 7 (rank 4), Q1 = 3 (rank 2).
        assert_eq!(summary.interquartile_range, 4.0);
    }

    #[test]
    fn test_summary_errors() {
        assert_eq!(Summary::new::<u32>(&[]), Err(StatsError::EmptyInput));
        assert_eq!(Summary::from_sorted(&[]), Err(StatsError::EmptyInput));
        assert!(
            Summary::new(&[1.0, f64::NAN])
                .unwrap_err()
                .is_type_consistency()
        );
    }

    #[test]
    fn test_summary_spreads() {
        let summary = Summary::new(&[1, 3, 5, 7, 14]).unwrap();
        assert_eq!(summary.population_spread().mean, 6.0);
        assert_eq!(summary.sample_spread(), Some(Spread::new(6.0, 5.0)));
        assert_eq!(Summary::new(&[2]).unwrap().sample_spread(), None);
    }

    #[test]
    fn test_spread_from_data() {
        let spread = Spread::population(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert_eq!(spread, Spread::new(5.0, 2.0));
        assert_eq!(spread.z_score(9.0).unwrap(), 2.0);
        assert_eq!(spread.empirical_rule(Bounds::above(3.0)).unwrap(), 84.0);

        assert!(Spread::sample(&[1]).unwrap_err().is_insufficient_data());
    }

    #[test]
    fn test_constant_data_has_no_spread() {
        let spread = Spread::population(&[3, 3, 3]).unwrap();
        assert_eq!(spread.z_score(4.0), Err(StatsError::DivisionByZero));
    }

    #[test]
    fn test_summary_serialization() {
        let summary = Summary::new(&[4.0]).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["median"], 4.0);
        assert!(json["sample_variance"].is_null());

        let restored: Summary = serde_json::from_value(json).unwrap();
        assert_eq!(restored, summary);
    }
}
