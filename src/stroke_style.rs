//! Stroke configuration.
//!
//! `StrokeStyle` gathers every parameter of the stroke generator in one
//! plain value so it can be built once, validated, and applied to any
//! number of generators.

use crate::basics::Real;
use crate::error::{Result, StrokeError};
use crate::math_stroke::{InnerJoin, LineCap, LineJoin, DEFAULT_CHORD_ERROR};

/// Parameters of a stroke.
///
/// Defaults: width 1, butt caps, miter joins with limit 4, miter inner
/// joins with limit 1.01, approximation scale 1 (round caps and joins
/// deviate from the true arc by at most 0.125 units), no shortening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Full stroke width. Negative widths swap the emitted sides.
    pub width: Real,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub inner_join: InnerJoin,
    /// Maximum miter length as a multiple of the half-width.
    pub miter_limit: Real,
    pub inner_miter_limit: Real,
    /// Divides the default chord error of round caps and joins.
    pub approximation_scale: Real,
    /// Arc length trimmed off the end of each path before stroking.
    pub shorten: Real,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            inner_join: InnerJoin::Miter,
            miter_limit: 4.0,
            inner_miter_limit: 1.01,
            approximation_scale: 1.0,
            shorten: 0.0,
        }
    }
}

impl StrokeStyle {
    /// Default style with the given width.
    pub fn new(width: Real) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn with_line_cap(mut self, line_cap: LineCap) -> Self {
        self.line_cap = line_cap;
        self
    }

    pub fn with_line_join(mut self, line_join: LineJoin) -> Self {
        self.line_join = line_join;
        self
    }

    pub fn with_inner_join(mut self, inner_join: InnerJoin) -> Self {
        self.inner_join = inner_join;
        self
    }

    pub fn with_miter_limit(mut self, miter_limit: Real) -> Self {
        self.miter_limit = miter_limit;
        self
    }

    pub fn with_inner_miter_limit(mut self, inner_miter_limit: Real) -> Self {
        self.inner_miter_limit = inner_miter_limit;
        self
    }

    pub fn with_approximation_scale(mut self, approximation_scale: Real) -> Self {
        self.approximation_scale = approximation_scale;
        self
    }

    /// Set the approximation scale from a maximum chord error.
    pub fn with_max_chord_error(mut self, error: Real) -> Self {
        self.approximation_scale = DEFAULT_CHORD_ERROR / error;
        self
    }

    pub fn with_shorten(mut self, shorten: Real) -> Self {
        self.shorten = shorten;
        self
    }

    /// Maximum distance between a round cap/join arc and its chords.
    pub fn max_chord_error(&self) -> Real {
        DEFAULT_CHORD_ERROR / self.approximation_scale
    }

    /// Check that every parameter describes a usable stroke.
    ///
    /// # Errors
    ///
    /// - `StrokeError::NonFinite` if any numeric parameter is NaN or infinite
    /// - `StrokeError::MiterLimitBelowOne` if either miter limit is below 1
    /// - `StrokeError::InvalidApproximationScale` if the scale is not positive
    /// - `StrokeError::NegativeShorten` if the shorten length is negative
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("width", self.width),
            ("miter_limit", self.miter_limit),
            ("inner_miter_limit", self.inner_miter_limit),
            ("approximation_scale", self.approximation_scale),
            ("shorten", self.shorten),
        ] {
            if !value.is_finite() {
                return Err(StrokeError::NonFinite { parameter, value });
            }
        }
        if self.miter_limit < 1.0 {
            return Err(StrokeError::MiterLimitBelowOne(self.miter_limit));
        }
        if self.inner_miter_limit < 1.0 {
            return Err(StrokeError::MiterLimitBelowOne(self.inner_miter_limit));
        }
        if self.approximation_scale <= 0.0 {
            return Err(StrokeError::InvalidApproximationScale(
                self.approximation_scale,
            ));
        }
        if self.shorten < 0.0 {
            return Err(StrokeError::NegativeShorten(self.shorten));
        }
        Ok(())
    }
}
