//! Error taxonomy shared by every statistic in this crate.
//!
//! Each function checks its preconditions on entry and returns the first
//! violated one as a [`StatsError`]. Errors are never caught and replaced by a
//! default value inside the crate; callers decide how to present them.

/// Errors returned by the statistical functions.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum StatsError {
    /// The collection has no elements but the statistic needs at least one.
    #[display("needs at least one observation")]
    EmptyInput,
    /// The collection has fewer elements than the formula's denominator allows.
    #[display("needs at least {required} observations, got {actual}")]
    InsufficientData { required: usize, actual: usize },
    /// The elements cannot be combined under the arithmetic the statistic needs.
    #[display("elements of type `{type_name}` do not support the arithmetic this statistic needs")]
    TypeConsistency { type_name: &'static str },
    /// A z-score was requested against a zero standard deviation.
    #[display("standard deviation is zero")]
    DivisionByZero,
    /// A combinatorial or table-lookup argument is outside its domain.
    #[display("{_0}")]
    Domain(DomainError),
    /// A quantile rank falls outside the sorted data.
    #[display(
        "rank {rank} for boundary {boundary} of {divisions} divisions is outside 1..={len}"
    )]
    InvalidRange {
        rank: usize,
        len: usize,
        divisions: usize,
        boundary: usize,
    },
    /// A z-score falls outside the empirical-rule table.
    #[display("z-score {z} is outside the empirical-rule table (|z| < 4)")]
    UnsupportedRange { z: f64 },
}

impl StatsError {
    pub(crate) fn type_consistency<T>() -> Self {
        Self::TypeConsistency {
            type_name: std::any::type_name::<T>(),
        }
    }
}

/// Reasons a combinatorial or empirical-rule argument is rejected.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum DomainError {
    #[display("`{name}` must be non-negative, got {value}")]
    Negative { name: &'static str, value: i64 },
    #[display("cannot select {k} items from a pool of {n}")]
    SelectionExceedsPool { n: i64, k: i64 },
    #[display("at least one of `less_than` or `greater_than` must be given")]
    MissingBound,
    #[display("`greater_than` ({greater_than}) exceeds `less_than` ({less_than})")]
    InvertedBounds { less_than: f64, greater_than: f64 },
}
