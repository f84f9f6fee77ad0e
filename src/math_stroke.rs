//! Stroke math: cap, join, and miter calculations for stroked paths.
//!
//! `MathStroke` is a pure geometry engine: given an endpoint (for caps) or
//! three consecutive vertices (for joins) it writes the offset vertices of
//! one side of the stroke into a caller-supplied buffer. It holds only
//! configuration, never vertices.

use crate::basics::{PointR, Real, PI};
use crate::math::{calc_distance, calc_intersection, cross_product};
use crate::stroke_style::StrokeStyle;
use crate::vertex_sequence::VertexDist;

// ============================================================================
// Enums
// ============================================================================

/// Line cap style for path endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Square,
    Round,
}

/// Line join style at the outer side of path corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Sharp miter; falls back to a bevel once the miter exceeds the limit.
    #[default]
    Miter,
    /// Sharp miter truncated at the limit distance.
    MiterClip,
    /// Sharp miter; falls back to a round join once the miter exceeds the limit.
    MiterRound,
    Round,
    Bevel,
}

/// Join style at the inner side of path corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InnerJoin {
    Bevel,
    #[default]
    Miter,
    Jag,
    Round,
}

/// Chord error of round caps and joins at approximation scale 1.
pub const DEFAULT_CHORD_ERROR: Real = 0.125;

// ============================================================================
// MathStroke
// ============================================================================

/// Stroke geometry calculator.
///
/// `width` is stored as the half-width. A negative width swaps the side the
/// stroke is emitted on.
#[derive(Debug, Clone)]
pub struct MathStroke {
    width: Real,
    width_abs: Real,
    width_eps: Real,
    width_sign: Real,
    miter_limit: Real,
    inner_miter_limit: Real,
    approx_scale: Real,
    line_cap: LineCap,
    line_join: LineJoin,
    inner_join: InnerJoin,
}

impl MathStroke {
    pub fn new() -> Self {
        Self {
            width: 0.5,
            width_abs: 0.5,
            width_eps: 0.5 / 1024.0,
            width_sign: 1.0,
            miter_limit: 4.0,
            inner_miter_limit: 1.01,
            approx_scale: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            inner_join: InnerJoin::Miter,
        }
    }

    /// Stroker configured from `style`. The style is applied as-is; call
    /// [`StrokeStyle::validate`] first for strict input checking.
    pub fn from_style(style: &StrokeStyle) -> Self {
        let mut ms = Self::new();
        ms.apply_style(style);
        ms
    }

    pub fn apply_style(&mut self, style: &StrokeStyle) {
        self.set_width(style.width);
        self.line_cap = style.line_cap;
        self.line_join = style.line_join;
        self.inner_join = style.inner_join;
        self.miter_limit = style.miter_limit;
        self.inner_miter_limit = style.inner_miter_limit;
        self.approx_scale = style.approximation_scale;
    }

    pub fn set_line_cap(&mut self, lc: LineCap) {
        self.line_cap = lc;
    }
    pub fn line_cap(&self) -> LineCap {
        self.line_cap
    }

    pub fn set_line_join(&mut self, lj: LineJoin) {
        self.line_join = lj;
    }
    pub fn line_join(&self) -> LineJoin {
        self.line_join
    }

    pub fn set_inner_join(&mut self, ij: InnerJoin) {
        self.inner_join = ij;
    }
    pub fn inner_join(&self) -> InnerJoin {
        self.inner_join
    }

    /// Set the full stroke width.
    pub fn set_width(&mut self, w: Real) {
        self.width = w * 0.5;
        if self.width < 0.0 {
            self.width_abs = -self.width;
            self.width_sign = -1.0;
        } else {
            self.width_abs = self.width;
            self.width_sign = 1.0;
        }
        self.width_eps = self.width / 1024.0;
    }

    /// Full stroke width.
    pub fn width(&self) -> Real {
        self.width * 2.0
    }

    pub fn set_miter_limit(&mut self, ml: Real) {
        self.miter_limit = ml;
    }
    pub fn miter_limit(&self) -> Real {
        self.miter_limit
    }

    /// Set the miter limit from the smallest corner angle (radians) that
    /// still gets a sharp miter.
    pub fn set_miter_limit_theta(&mut self, t: Real) {
        self.miter_limit = 1.0 / (t * 0.5).sin();
    }

    pub fn set_inner_miter_limit(&mut self, ml: Real) {
        self.inner_miter_limit = ml;
    }
    pub fn inner_miter_limit(&self) -> Real {
        self.inner_miter_limit
    }

    pub fn set_approximation_scale(&mut self, s: Real) {
        self.approx_scale = s;
    }
    pub fn approximation_scale(&self) -> Real {
        self.approx_scale
    }

    /// Maximum distance between a round cap/join arc and its chords.
    pub fn max_chord_error(&self) -> Real {
        DEFAULT_CHORD_ERROR / self.approx_scale
    }

    /// Angular step between consecutive arc vertices.
    fn arc_step(&self) -> Real {
        (self.width_abs / (self.width_abs + self.max_chord_error())).acos() * 2.0
    }

    /// Calculate cap vertices at a line endpoint.
    ///
    /// `vc` is cleared first. `v0` is the endpoint, `v1` the adjacent vertex
    /// and `len` the distance between them.
    pub fn calc_cap(&self, vc: &mut Vec<PointR>, v0: &VertexDist, v1: &VertexDist, len: Real) {
        vc.clear();

        let dx1 = (v1.y - v0.y) / len * self.width;
        let dy1 = (v1.x - v0.x) / len * self.width;

        if self.line_cap != LineCap::Round {
            let (mut dx2, mut dy2) = (0.0, 0.0);
            if self.line_cap == LineCap::Square {
                dx2 = dy1 * self.width_sign;
                dy2 = dx1 * self.width_sign;
            }
            vc.push(PointR::new(v0.x - dx1 - dx2, v0.y + dy1 - dy2));
            vc.push(PointR::new(v0.x + dx1 - dx2, v0.y - dy1 - dy2));
            return;
        }

        let da = self.arc_step();
        let n = (PI / da) as i32;
        let da = PI / (n + 1) as Real;

        vc.push(PointR::new(v0.x - dx1, v0.y + dy1));

        if self.width_sign > 0.0 {
            let mut a1 = dy1.atan2(-dx1) + da;
            for _ in 0..n {
                vc.push(PointR::new(
                    v0.x + a1.cos() * self.width,
                    v0.y + a1.sin() * self.width,
                ));
                a1 += da;
            }
        } else {
            let mut a1 = (-dy1).atan2(dx1) - da;
            for _ in 0..n {
                vc.push(PointR::new(
                    v0.x + a1.cos() * self.width,
                    v0.y + a1.sin() * self.width,
                ));
                a1 -= da;
            }
        }

        vc.push(PointR::new(v0.x + dx1, v0.y - dy1));
    }

    /// Calculate join vertices at `v1`, between `v0`→`v1` and `v1`→`v2`.
    ///
    /// `vc` is cleared first. `len1` and `len2` are the segment lengths.
    pub fn calc_join(
        &self,
        vc: &mut Vec<PointR>,
        v0: &VertexDist,
        v1: &VertexDist,
        v2: &VertexDist,
        len1: Real,
        len2: Real,
    ) {
        let dx1 = self.width * (v1.y - v0.y) / len1;
        let dy1 = self.width * (v1.x - v0.x) / len1;
        let dx2 = self.width * (v2.y - v1.y) / len2;
        let dy2 = self.width * (v2.x - v1.x) / len2;

        vc.clear();

        let cp = cross_product(v0.x, v0.y, v1.x, v1.y, v2.x, v2.y);
        if cp != 0.0 && (cp > 0.0) == (self.width > 0.0) {
            self.calc_inner_join(vc, v0, v1, v2, (dx1, dy1, dx2, dy2), len1, len2);
            return;
        }

        // Outer join
        let dx = (dx1 + dx2) / 2.0;
        let dy = (dy1 + dy2) / 2.0;
        let dbevel = (dx * dx + dy * dy).sqrt();

        // Nearly straight continuation: a single intersection vertex is
        // indistinguishable from a round or bevel join at this scale.
        if matches!(self.line_join, LineJoin::Round | LineJoin::Bevel)
            && self.approx_scale * (self.width_abs - dbevel) < self.width_eps
        {
            match calc_intersection(
                v0.x + dx1,
                v0.y - dy1,
                v1.x + dx1,
                v1.y - dy1,
                v1.x + dx2,
                v1.y - dy2,
                v2.x + dx2,
                v2.y - dy2,
            ) {
                Some((ix, iy)) => vc.push(PointR::new(ix, iy)),
                None => vc.push(PointR::new(v1.x + dx1, v1.y - dy1)),
            }
            return;
        }

        match self.line_join {
            LineJoin::Miter | LineJoin::MiterClip | LineJoin::MiterRound => {
                self.calc_miter(
                    vc,
                    v0,
                    v1,
                    v2,
                    (dx1, dy1, dx2, dy2),
                    self.line_join,
                    self.miter_limit,
                    dbevel,
                );
            }
            LineJoin::Round => {
                self.calc_arc(vc, v1.x, v1.y, dx1, -dy1, dx2, -dy2);
            }
            LineJoin::Bevel => {
                vc.push(PointR::new(v1.x + dx1, v1.y - dy1));
                vc.push(PointR::new(v1.x + dx2, v1.y - dy2));
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn calc_inner_join(
        &self,
        vc: &mut Vec<PointR>,
        v0: &VertexDist,
        v1: &VertexDist,
        v2: &VertexDist,
        offsets: (Real, Real, Real, Real),
        len1: Real,
        len2: Real,
    ) {
        let (dx1, dy1, dx2, dy2) = offsets;
        let limit = (len1.min(len2) / self.width_abs).max(self.inner_miter_limit);

        match self.inner_join {
            InnerJoin::Bevel => {
                vc.push(PointR::new(v1.x + dx1, v1.y - dy1));
                vc.push(PointR::new(v1.x + dx2, v1.y - dy2));
            }
            InnerJoin::Miter => {
                self.calc_miter(vc, v0, v1, v2, offsets, LineJoin::Miter, limit, 0.0);
            }
            InnerJoin::Jag | InnerJoin::Round => {
                let d = (dx1 - dx2) * (dx1 - dx2) + (dy1 - dy2) * (dy1 - dy2);
                if d < len1 * len1 && d < len2 * len2 {
                    self.calc_miter(vc, v0, v1, v2, offsets, LineJoin::Miter, limit, 0.0);
                } else if self.inner_join == InnerJoin::Jag {
                    vc.push(PointR::new(v1.x + dx1, v1.y - dy1));
                    vc.push(PointR::new(v1.x, v1.y));
                    vc.push(PointR::new(v1.x + dx2, v1.y - dy2));
                } else {
                    vc.push(PointR::new(v1.x + dx1, v1.y - dy1));
                    vc.push(PointR::new(v1.x, v1.y));
                    self.calc_arc(vc, v1.x, v1.y, dx2, -dy2, dx1, -dy1);
                    vc.push(PointR::new(v1.x, v1.y));
                    vc.push(PointR::new(v1.x + dx2, v1.y - dy2));
                }
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn calc_arc(
        &self,
        vc: &mut Vec<PointR>,
        x: Real,
        y: Real,
        dx1: Real,
        dy1: Real,
        dx2: Real,
        dy2: Real,
    ) {
        let mut a1 = (dy1 * self.width_sign).atan2(dx1 * self.width_sign);
        let mut a2 = (dy2 * self.width_sign).atan2(dx2 * self.width_sign);
        let da = self.arc_step();

        vc.push(PointR::new(x + dx1, y + dy1));

        if self.width_sign > 0.0 {
            if a1 > a2 {
                a2 += 2.0 * PI;
            }
            let n = ((a2 - a1) / da) as i32;
            let da = (a2 - a1) / (n + 1) as Real;
            a1 += da;
            for _ in 0..n {
                vc.push(PointR::new(x + a1.cos() * self.width, y + a1.sin() * self.width));
                a1 += da;
            }
        } else {
            if a1 < a2 {
                a2 -= 2.0 * PI;
            }
            let n = ((a1 - a2) / da) as i32;
            let da = (a1 - a2) / (n + 1) as Real;
            a1 -= da;
            for _ in 0..n {
                vc.push(PointR::new(x + a1.cos() * self.width, y + a1.sin() * self.width));
                a1 -= da;
            }
        }

        vc.push(PointR::new(x + dx2, y + dy2));
    }

    #[allow(clippy::too_many_arguments)]
    fn calc_miter(
        &self,
        vc: &mut Vec<PointR>,
        v0: &VertexDist,
        v1: &VertexDist,
        v2: &VertexDist,
        offsets: (Real, Real, Real, Real),
        lj: LineJoin,
        mlimit: Real,
        dbevel: Real,
    ) {
        let (dx1, dy1, dx2, dy2) = offsets;
        let lim = self.width_abs * mlimit;

        let intersection = calc_intersection(
            v0.x + dx1,
            v0.y - dy1,
            v1.x + dx1,
            v1.y - dy1,
            v1.x + dx2,
            v1.y - dy2,
            v2.x + dx2,
            v2.y - dy2,
        );

        match intersection {
            Some((xi, yi)) => {
                let di = calc_distance(v1.x, v1.y, xi, yi);
                if di <= lim {
                    vc.push(PointR::new(xi, yi));
                    return;
                }
                match lj {
                    LineJoin::MiterRound => self.calc_arc(vc, v1.x, v1.y, dx1, -dy1, dx2, -dy2),
                    LineJoin::MiterClip => {
                        let x1 = v1.x + dx1;
                        let y1 = v1.y - dy1;
                        let x2 = v1.x + dx2;
                        let y2 = v1.y - dy2;
                        let k = (lim - dbevel) / (di - dbevel);
                        vc.push(PointR::new(x1 + (xi - x1) * k, y1 + (yi - y1) * k));
                        vc.push(PointR::new(x2 + (xi - x2) * k, y2 + (yi - y2) * k));
                    }
                    _ => {
                        vc.push(PointR::new(v1.x + dx1, v1.y - dy1));
                        vc.push(PointR::new(v1.x + dx2, v1.y - dy2));
                    }
                }
            }
            None => {
                // Parallel offset lines: either a straight continuation (one
                // vertex is enough) or a full turn-back.
                let x2 = v1.x + dx1;
                let y2 = v1.y - dy1;
                if (cross_product(v0.x, v0.y, v1.x, v1.y, x2, y2) < 0.0)
                    == (cross_product(v1.x, v1.y, v2.x, v2.y, x2, y2) < 0.0)
                {
                    vc.push(PointR::new(x2, y2));
                    return;
                }
                match lj {
                    LineJoin::MiterRound => self.calc_arc(vc, v1.x, v1.y, dx1, -dy1, dx2, -dy2),
                    LineJoin::MiterClip => {
                        let m = mlimit * self.width_sign;
                        vc.push(PointR::new(v1.x + dx1 + dy1 * m, v1.y - dy1 + dx1 * m));
                        vc.push(PointR::new(v1.x + dx2 - dy2 * m, v1.y - dy2 - dx2 * m));
                    }
                    _ => {
                        vc.push(PointR::new(v1.x + dx1, v1.y - dy1));
                        vc.push(PointR::new(v1.x + dx2, v1.y - dy2));
                    }
                }
            }
        }
    }
}

impl Default for MathStroke {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
