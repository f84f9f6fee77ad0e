//! Stroke vertex generator.
//!
//! Accumulates a centre-line path and replays it as the closed outline of a
//! stroke, asking `MathStroke` for the cap and join geometry at every
//! vertex. Open paths become a single contour: first cap, forward joins,
//! second cap, backward joins. Closed paths become two contours of opposite
//! orientation so a non-zero winding fill leaves the interior hollow.

use log::{debug, trace};

use crate::basics::{
    is_closed, is_move_to, is_vertex, PointR, Real, VertexSource, PATH_CMD_END_POLY,
    PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP, PATH_FLAGS_CCW, PATH_FLAGS_CLOSE,
    PATH_FLAGS_CW,
};
use crate::conv_adaptor_vcgen::VcgenGenerator;
use crate::error::Result;
use crate::math_stroke::{InnerJoin, LineCap, LineJoin, MathStroke};
use crate::shorten_path::shorten_path;
use crate::stroke_style::StrokeStyle;
use crate::vertex_sequence::{VertexDist, VertexSequence};

// ============================================================================
// Status / Cursor
// ============================================================================

/// State of the outline generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Source buffer not finalized yet.
    Initial,
    /// Finalized, nothing emitted.
    Ready,
    /// First end cap of an open path.
    Cap1,
    /// Second end cap of an open path.
    Cap2,
    /// Forward traversal.
    Outline1,
    /// Boundary between the two contours of a closed path.
    CloseFirst,
    /// Backward traversal.
    Outline2,
    /// Draining the stroker's output, then resuming `Cursor::resume`.
    OutVertices,
    EndPoly1,
    EndPoly2,
    Stop,
}

/// Traversal position of the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Next source vertex to visit (forward pass) or one past it (backward).
    pub src_vertex: usize,
    /// Next vertex of the scratch buffer to emit.
    pub out_vertex: usize,
    /// State to continue with once the scratch buffer is drained, or after
    /// an end-of-polygon marker.
    pub resume: Status,
}

impl Cursor {
    fn start() -> Self {
        Self {
            src_vertex: 0,
            out_vertex: 0,
            resume: Status::Initial,
        }
    }
}

// ============================================================================
// VcgenStroke
// ============================================================================

/// Stroke vertex generator.
///
/// Feed a path with `add_vertex`, then pull the outline with `pull_vertex`
/// (or through `VertexSource`) until `PATH_CMD_STOP`. Feeding invalidates
/// any pull in progress; the next pull finalizes the buffer again.
///
/// The fed path is kept as given. Closing and shortening work on a copy, so
/// vertices fed after a pull extend the original path and the trim is
/// applied once to the new end.
#[derive(Debug, Clone)]
pub struct VcgenStroke {
    stroker: MathStroke,
    src_vertices: VertexSequence,
    path: VertexSequence,
    out_vertices: Vec<PointR>,
    shorten: Real,
    close_requested: bool,
    closed: bool,
    min_vertices: usize,
    status: Status,
    cursor: Cursor,
}

impl VcgenStroke {
    pub fn new() -> Self {
        Self {
            stroker: MathStroke::new(),
            src_vertices: VertexSequence::new(),
            path: VertexSequence::new(),
            out_vertices: Vec::new(),
            shorten: 0.0,
            close_requested: false,
            closed: false,
            min_vertices: 2,
            status: Status::Initial,
            cursor: Cursor::start(),
        }
    }

    /// Generator configured from a validated style.
    pub fn with_style(style: &StrokeStyle) -> Result<Self> {
        let mut gen = Self::new();
        gen.set_style(style)?;
        Ok(gen)
    }

    /// Validate `style` and apply every parameter of it.
    pub fn set_style(&mut self, style: &StrokeStyle) -> Result<()> {
        style.validate()?;
        self.stroker.apply_style(style);
        self.shorten = style.shorten;
        Ok(())
    }

    /// Current parameters as a style value.
    pub fn style(&self) -> StrokeStyle {
        StrokeStyle {
            width: self.stroker.width(),
            line_cap: self.stroker.line_cap(),
            line_join: self.stroker.line_join(),
            inner_join: self.stroker.inner_join(),
            miter_limit: self.stroker.miter_limit(),
            inner_miter_limit: self.stroker.inner_miter_limit(),
            approximation_scale: self.stroker.approximation_scale(),
            shorten: self.shorten,
        }
    }

    // Parameter forwarding to MathStroke
    pub fn set_line_cap(&mut self, lc: LineCap) {
        self.stroker.set_line_cap(lc);
    }
    pub fn line_cap(&self) -> LineCap {
        self.stroker.line_cap()
    }

    pub fn set_line_join(&mut self, lj: LineJoin) {
        self.stroker.set_line_join(lj);
    }
    pub fn line_join(&self) -> LineJoin {
        self.stroker.line_join()
    }

    pub fn set_inner_join(&mut self, ij: InnerJoin) {
        self.stroker.set_inner_join(ij);
    }
    pub fn inner_join(&self) -> InnerJoin {
        self.stroker.inner_join()
    }

    pub fn set_width(&mut self, w: Real) {
        self.stroker.set_width(w);
    }
    pub fn width(&self) -> Real {
        self.stroker.width()
    }

    pub fn set_miter_limit(&mut self, ml: Real) {
        self.stroker.set_miter_limit(ml);
    }
    pub fn miter_limit(&self) -> Real {
        self.stroker.miter_limit()
    }

    pub fn set_miter_limit_theta(&mut self, t: Real) {
        self.stroker.set_miter_limit_theta(t);
    }

    pub fn set_inner_miter_limit(&mut self, ml: Real) {
        self.stroker.set_inner_miter_limit(ml);
    }
    pub fn inner_miter_limit(&self) -> Real {
        self.stroker.inner_miter_limit()
    }

    pub fn set_approximation_scale(&mut self, s: Real) {
        self.stroker.set_approximation_scale(s);
    }
    pub fn approximation_scale(&self) -> Real {
        self.stroker.approximation_scale()
    }

    pub fn set_shorten(&mut self, s: Real) {
        self.shorten = s;
    }
    pub fn shorten(&self) -> Real {
        self.shorten
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    pub fn status(&self) -> Status {
        self.status
    }

    /// Snapshot of the traversal position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Effective closed flag. Only meaningful after `rewind`.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The path exactly as fed, before closing and shortening.
    pub fn source_vertices(&self) -> &VertexSequence {
        &self.src_vertices
    }

    /// The closed and shortened path the outline is built from. Only
    /// meaningful after `rewind`.
    pub fn finalized_vertices(&self) -> &VertexSequence {
        &self.path
    }

    // ------------------------------------------------------------------
    // Vertex generator interface
    // ------------------------------------------------------------------

    pub fn remove_all(&mut self) {
        self.src_vertices.remove_all();
        self.path.remove_all();
        self.close_requested = false;
        self.closed = false;
        self.status = Status::Initial;
    }

    /// Feed one source vertex. A move-to replaces the pending last vertex,
    /// a drawing command appends, anything else records the close flag.
    pub fn add_vertex(&mut self, x: Real, y: Real, cmd: u32) {
        self.status = Status::Initial;
        if is_move_to(cmd) {
            self.src_vertices.modify_last(VertexDist::new(x, y));
        } else if is_vertex(cmd) {
            self.src_vertices.add(VertexDist::new(x, y));
        } else {
            self.close_requested = is_closed(cmd);
        }
    }

    /// Finalize the source buffer (once per fed path) and restart the pull
    /// sequence from the beginning.
    pub fn rewind(&mut self) {
        if self.status == Status::Initial {
            self.closed = self.close_requested;
            self.path.copy_from(&self.src_vertices);
            self.path.close(self.closed);
            shorten_path(&mut self.path, self.shorten, self.closed);

            self.min_vertices = if self.closed { 3 } else { 2 };
            if self.path.size() < 3 {
                if self.closed {
                    debug!(
                        "closed path collapsed to {} vertices, nothing to stroke",
                        self.path.size()
                    );
                }
                self.closed = false;
            }
            if self.path.size() < self.min_vertices {
                debug!(
                    "path has {} vertices after merging, nothing to stroke",
                    self.path.size()
                );
            }
            trace!(
                "stroke path finalized: {} vertices, closed = {}",
                self.path.size(),
                self.closed
            );
        }
        self.status = Status::Ready;
        self.cursor = Cursor::start();
    }

    /// Emit the next outline vertex into `x` / `y` and return its command.
    /// Returns `PATH_CMD_STOP` once the outline is exhausted.
    pub fn pull_vertex(&mut self, x: &mut Real, y: &mut Real) -> u32 {
        // The first vertex emitted after Ready or CloseFirst opens a contour.
        let mut cmd = PATH_CMD_LINE_TO;
        loop {
            match self.status {
                Status::Initial => {
                    self.rewind();
                }
                Status::Ready => {
                    if self.path.size() < self.min_vertices {
                        return PATH_CMD_STOP;
                    }
                    self.status = if self.closed {
                        Status::Outline1
                    } else {
                        Status::Cap1
                    };
                    cmd = PATH_CMD_MOVE_TO;
                    self.cursor.src_vertex = 0;
                    self.cursor.out_vertex = 0;
                }
                Status::Cap1 => {
                    let v0 = self.path[0];
                    let v1 = self.path[1];
                    self.stroker
                        .calc_cap(&mut self.out_vertices, &v0, &v1, v0.dist);
                    self.cursor.src_vertex = 1;
                    self.drain_then(Status::Outline1);
                }
                Status::Cap2 => {
                    let n = self.path.size();
                    let v0 = self.path[n - 1];
                    let v1 = self.path[n - 2];
                    self.stroker
                        .calc_cap(&mut self.out_vertices, &v0, &v1, v1.dist);
                    self.drain_then(Status::Outline2);
                }
                Status::Outline1 => {
                    let end = if self.closed {
                        self.path.size()
                    } else {
                        self.path.size() - 1
                    };
                    if self.cursor.src_vertex >= end {
                        if self.closed {
                            self.cursor.resume = Status::CloseFirst;
                            self.status = Status::EndPoly1;
                        } else {
                            self.status = Status::Cap2;
                        }
                        continue;
                    }
                    let (prev, curr, next) = self
                        .path
                        .neighbors(self.cursor.src_vertex, self.closed);
                    self.stroker.calc_join(
                        &mut self.out_vertices,
                        &prev,
                        &curr,
                        &next,
                        prev.dist,
                        curr.dist,
                    );
                    self.cursor.src_vertex += 1;
                    self.drain_then(Status::Outline1);
                }
                Status::CloseFirst => {
                    self.status = Status::Outline2;
                    cmd = PATH_CMD_MOVE_TO;
                }
                Status::Outline2 => {
                    if self.cursor.src_vertex <= usize::from(!self.closed) {
                        if self.closed {
                            self.cursor.resume = Status::Stop;
                            self.status = Status::EndPoly2;
                        } else {
                            self.status = Status::Stop;
                        }
                        continue;
                    }
                    self.cursor.src_vertex -= 1;
                    let (prev, curr, next) = self
                        .path
                        .neighbors(self.cursor.src_vertex, self.closed);
                    self.stroker.calc_join(
                        &mut self.out_vertices,
                        &next,
                        &curr,
                        &prev,
                        curr.dist,
                        prev.dist,
                    );
                    self.drain_then(Status::Outline2);
                }
                Status::OutVertices => {
                    match self.out_vertices.get(self.cursor.out_vertex) {
                        Some(c) => {
                            self.cursor.out_vertex += 1;
                            *x = c.x;
                            *y = c.y;
                            return cmd;
                        }
                        None => self.status = self.cursor.resume,
                    }
                }
                Status::EndPoly1 => {
                    self.status = self.cursor.resume;
                    return PATH_CMD_END_POLY | PATH_FLAGS_CLOSE | PATH_FLAGS_CCW;
                }
                Status::EndPoly2 => {
                    self.status = self.cursor.resume;
                    return PATH_CMD_END_POLY | PATH_FLAGS_CLOSE | PATH_FLAGS_CW;
                }
                Status::Stop => {
                    return PATH_CMD_STOP;
                }
            }
        }
    }

    /// Switch to draining the freshly computed scratch buffer, continuing
    /// with `resume` afterwards.
    fn drain_then(&mut self, resume: Status) {
        self.cursor.resume = resume;
        self.cursor.out_vertex = 0;
        self.status = Status::OutVertices;
    }
}

impl Default for VcgenStroke {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexSource for VcgenStroke {
    fn rewind(&mut self, _path_id: u32) {
        VcgenStroke::rewind(self);
    }

    fn vertex(&mut self, x: &mut Real, y: &mut Real) -> u32 {
        self.pull_vertex(x, y)
    }
}

impl VcgenGenerator for VcgenStroke {
    fn remove_all(&mut self) {
        VcgenStroke::remove_all(self);
    }
    fn add_vertex(&mut self, x: Real, y: Real, cmd: u32) {
        VcgenStroke::add_vertex(self, x, y, cmd);
    }
    fn rewind(&mut self, _path_id: u32) {
        VcgenStroke::rewind(self);
    }
    fn vertex(&mut self, x: &mut Real, y: &mut Real) -> u32 {
        self.pull_vertex(x, y)
    }
}

// ============================================================================
// Tests
// ============================================================================
