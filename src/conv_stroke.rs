//! Stroke converter for vertex sources.
//!
//! Combines `ConvAdaptorVcgen` with `VcgenStroke` so any path producer can be
//! stroked sub-path by sub-path.

use crate::basics::{Real, VertexSource};
use crate::conv_adaptor_vcgen::ConvAdaptorVcgen;
use crate::error::Result;
use crate::math_stroke::{InnerJoin, LineCap, LineJoin};
use crate::stroke_style::StrokeStyle;
use crate::vcgen_stroke::VcgenStroke;

// ============================================================================
// ConvStroke
// ============================================================================

/// Stroke converter: generates a stroked outline from a centre-line path.
#[derive(Debug)]
pub struct ConvStroke<VS: VertexSource> {
    base: ConvAdaptorVcgen<VS, VcgenStroke>,
}

impl<VS: VertexSource> ConvStroke<VS> {
    pub fn new(source: VS) -> Self {
        Self {
            base: ConvAdaptorVcgen::new(source, VcgenStroke::new()),
        }
    }

    /// Converter with every parameter taken from a validated `style`.
    pub fn with_style(source: VS, style: &StrokeStyle) -> Result<Self> {
        Ok(Self {
            base: ConvAdaptorVcgen::new(source, VcgenStroke::with_style(style)?),
        })
    }

    pub fn set_style(&mut self, style: &StrokeStyle) -> Result<()> {
        self.base.generator_mut().set_style(style)
    }
    pub fn style(&self) -> StrokeStyle {
        self.base.generator().style()
    }

    // Parameter forwarding
    pub fn set_line_cap(&mut self, lc: LineCap) {
        self.base.generator_mut().set_line_cap(lc);
    }
    pub fn line_cap(&self) -> LineCap {
        self.base.generator().line_cap()
    }

    pub fn set_line_join(&mut self, lj: LineJoin) {
        self.base.generator_mut().set_line_join(lj);
    }
    pub fn line_join(&self) -> LineJoin {
        self.base.generator().line_join()
    }

    pub fn set_inner_join(&mut self, ij: InnerJoin) {
        self.base.generator_mut().set_inner_join(ij);
    }
    pub fn inner_join(&self) -> InnerJoin {
        self.base.generator().inner_join()
    }

    pub fn set_width(&mut self, w: Real) {
        self.base.generator_mut().set_width(w);
    }
    pub fn width(&self) -> Real {
        self.base.generator().width()
    }

    pub fn set_miter_limit(&mut self, ml: Real) {
        self.base.generator_mut().set_miter_limit(ml);
    }
    pub fn miter_limit(&self) -> Real {
        self.base.generator().miter_limit()
    }

    pub fn set_miter_limit_theta(&mut self, t: Real) {
        self.base.generator_mut().set_miter_limit_theta(t);
    }

    pub fn set_inner_miter_limit(&mut self, ml: Real) {
        self.base.generator_mut().set_inner_miter_limit(ml);
    }
    pub fn inner_miter_limit(&self) -> Real {
        self.base.generator().inner_miter_limit()
    }

    pub fn set_approximation_scale(&mut self, s: Real) {
        self.base.generator_mut().set_approximation_scale(s);
    }
    pub fn approximation_scale(&self) -> Real {
        self.base.generator().approximation_scale()
    }

    pub fn set_shorten(&mut self, s: Real) {
        self.base.generator_mut().set_shorten(s);
    }
    pub fn shorten(&self) -> Real {
        self.base.generator().shorten()
    }

    pub fn source(&self) -> &VS {
        self.base.source()
    }

    pub fn source_mut(&mut self) -> &mut VS {
        self.base.source_mut()
    }
}

impl<VS: VertexSource> VertexSource for ConvStroke<VS> {
    fn rewind(&mut self, path_id: u32) {
        self.base.rewind(path_id);
    }

    fn vertex(&mut self, x: &mut Real, y: &mut Real) -> u32 {
        self.base.vertex(x, y)
    }
}

// ============================================================================
// Tests
// ============================================================================
