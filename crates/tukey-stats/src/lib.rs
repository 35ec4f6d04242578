//! Textbook descriptive statistics over in-memory datasets.
//!
//! This crate provides a collection of statistical primitives including:
//!
//! - **Aggregates**: mean, median, mode and the sum of squared deviations
//! - **Dispersion**: population/sample variance and standard deviation, mean
//!   absolute deviation and z-scores
//! - **Quantiles**: Tukey's inclusive quantiles and the inter-quartile range
//! - **Combinatorics**: exact factorials, permutations and combinations
//! - **Empirical rule**: the 68-95-99.7 lookup for normal distributions
//! - **Summary**: all of the above for one dataset in a single serializable value
//!
//! Every function borrows its input and never modifies it. Preconditions are
//! checked on entry and reported as a [`StatsError`].
//!
//! # Modules
//!
//! - [`aggregate`]: Central tendency and the sum of squares
//! - [`dispersion`]: Spread around the mean and standardization
//! - [`quantile`]: Rank-based statistics
//! - [`combinatorics`]: Counting selections
//! - [`empirical`]: Empirical-rule percentages
//! - [`summary`]: Combined descriptive statistics
//! - [`error`]: The error taxonomy
//!
//! # Examples
//!
//! ## Central tendency
//!
//! ```
//! use tukey_stats::aggregate::{mean, median, mode};
//!
//! assert_eq!(mean(&[1, 2, 3]).unwrap(), 2.0);
//! assert_eq!(median(&[0, 2, 3, 10]).unwrap(), 2.5);
//! assert_eq!(mode(&[1, 2, 3, 4, 4, 4, 4]).unwrap(), 4);
//! ```
//!
//! ## Dispersion
//!
//! ```
//! use tukey_stats::dispersion::{population_variance, sample_stddev};
//!
//! assert_eq!(population_variance(&[1, 3, 5, 7, 14]).unwrap(), 20.0);
//! assert_eq!(sample_stddev(&[1, 3, 5, 7, 14]).unwrap(), 5.0);
//! ```
//!
//! ## Quantiles
//!
//! ```
//! use tukey_stats::quantile::{interquartile_range, quantile};
//!
//! let values = (0..10).collect::<Vec<i32>>();
//! assert_eq!(quantile(&values, 4, 3).unwrap(), 7);
//! assert_eq!(interquartile_range(&values).unwrap(), 5.0);
//! ```
//!
//! ## Errors
//!
//! ```
//! use tukey_stats::{StatsError, aggregate::mean, dispersion::sample_variance};
//!
//! assert_eq!(mean::<f64>(&[]), Err(StatsError::EmptyInput));
//! assert!(sample_variance(&[42]).unwrap_err().is_insufficient_data());
//! ```

pub use self::error::{DomainError, StatsError};

pub mod aggregate;
pub mod combinatorics;
pub mod dispersion;
pub mod empirical;
pub mod error;
pub mod quantile;
pub mod summary;
