//! Foundation types, constants, and path command utilities.
//!
//! The scalar type, points, tagged vertices and the path command vocabulary
//! shared by every producer, generator and consumer in the crate.

// ============================================================================
// Scalar
// ============================================================================

/// Scalar used for all coordinates. Strokes are computed in single precision.
pub type Real = f32;

pub const PI: Real = std::f32::consts::PI;

/// Convert degrees to radians.
#[inline]
pub fn deg2rad(deg: Real) -> Real {
    deg * PI / 180.0
}

// ============================================================================
// Path commands
// ============================================================================

pub const PATH_CMD_STOP: u32 = 0;
pub const PATH_CMD_MOVE_TO: u32 = 1;
pub const PATH_CMD_LINE_TO: u32 = 2;
pub const PATH_CMD_END_POLY: u32 = 0x0F;
pub const PATH_CMD_MASK: u32 = 0x0F;

// ============================================================================
// Path flags
// ============================================================================

pub const PATH_FLAGS_NONE: u32 = 0;
pub const PATH_FLAGS_CCW: u32 = 0x10;
pub const PATH_FLAGS_CW: u32 = 0x20;
pub const PATH_FLAGS_CLOSE: u32 = 0x40;
pub const PATH_FLAGS_MASK: u32 = 0xF0;

// ============================================================================
// Path command query functions
// ============================================================================

/// Returns `true` if `c` carries a coordinate (move_to or line_to).
#[inline]
pub fn is_vertex(c: u32) -> bool {
    (PATH_CMD_MOVE_TO..PATH_CMD_END_POLY).contains(&c)
}

/// Returns `true` if `c` is a drawing command.
#[inline]
pub fn is_drawing(c: u32) -> bool {
    (PATH_CMD_LINE_TO..PATH_CMD_END_POLY).contains(&c)
}

#[inline]
pub fn is_stop(c: u32) -> bool {
    c == PATH_CMD_STOP
}

#[inline]
pub fn is_move_to(c: u32) -> bool {
    c == PATH_CMD_MOVE_TO
}

#[inline]
pub fn is_line_to(c: u32) -> bool {
    c == PATH_CMD_LINE_TO
}

/// Returns `true` if `c` is an end_poly command (with any flags).
#[inline]
pub fn is_end_poly(c: u32) -> bool {
    (c & PATH_CMD_MASK) == PATH_CMD_END_POLY
}

/// Returns `true` if `c` is a close polygon command, ignoring orientation.
#[inline]
pub fn is_close(c: u32) -> bool {
    (c & !(PATH_FLAGS_CW | PATH_FLAGS_CCW)) == (PATH_CMD_END_POLY | PATH_FLAGS_CLOSE)
}

#[inline]
pub fn is_cw(c: u32) -> bool {
    (c & PATH_FLAGS_CW) != 0
}

#[inline]
pub fn is_ccw(c: u32) -> bool {
    (c & PATH_FLAGS_CCW) != 0
}

/// Returns `true` if `c` has the close flag set.
#[inline]
pub fn is_closed(c: u32) -> bool {
    (c & PATH_FLAGS_CLOSE) != 0
}

/// Extract the orientation flags from a command.
#[inline]
pub fn get_orientation(c: u32) -> u32 {
    c & (PATH_FLAGS_CW | PATH_FLAGS_CCW)
}

// ============================================================================
// Point / Vertex
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointR {
    pub x: Real,
    pub y: Real,
}

impl PointR {
    pub fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }
}

/// A point tagged with a path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexR {
    pub x: Real,
    pub y: Real,
    pub cmd: u32,
}

impl VertexR {
    pub fn new(x: Real, y: Real, cmd: u32) -> Self {
        Self { x, y, cmd }
    }
}

// ============================================================================
// VertexSource trait
// ============================================================================

/// Pull interface implemented by every path producer and converter.
///
/// A consumer calls `rewind` once, then `vertex` repeatedly until it
/// returns `PATH_CMD_STOP`.
pub trait VertexSource {
    /// Reset the source to the beginning of the given path.
    fn rewind(&mut self, path_id: u32);

    /// Write the next coordinate to `x` / `y` and return its command.
    fn vertex(&mut self, x: &mut Real, y: &mut Real) -> u32;
}

/// Lets pipeline stages borrow their source instead of owning it.
impl<T: VertexSource> VertexSource for &mut T {
    fn rewind(&mut self, path_id: u32) {
        (*self).rewind(path_id);
    }

    fn vertex(&mut self, x: &mut Real, y: &mut Real) -> u32 {
        (*self).vertex(x, y)
    }
}

/// Drain a vertex source into a vector, stopping at `PATH_CMD_STOP`.
pub fn collect_vertices<VS: VertexSource + ?Sized>(vs: &mut VS, path_id: u32) -> Vec<VertexR> {
    vs.rewind(path_id);
    let mut out = Vec::new();
    loop {
        let (mut x, mut y) = (0.0, 0.0);
        let cmd = vs.vertex(&mut x, &mut y);
        if is_stop(cmd) {
            break;
        }
        out.push(VertexR::new(x, y, cmd));
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
