use thiserror::Error;

use crate::basics::Real;

/// Errors reported when validating a stroke configuration.
///
/// The geometry itself never fails: degenerate paths simply produce no
/// outline. Only explicit style validation is fallible.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StrokeError {
    #[error("{parameter} must be finite, got {value}")]
    NonFinite { parameter: &'static str, value: Real },

    #[error("miter limit must be at least 1, got {0}")]
    MiterLimitBelowOne(Real),

    #[error("approximation scale must be positive, got {0}")]
    InvalidApproximationScale(Real),

    #[error("shorten length must not be negative, got {0}")]
    NegativeShorten(Real),
}

/// Convenience type alias for results using [`StrokeError`].
pub type Result<T> = std::result::Result<T, StrokeError>;
