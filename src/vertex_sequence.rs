//! Distance-augmented vertex sequence.
//!
//! The source buffer of the stroke generator: an ordered list of points, each
//! carrying the distance to its successor. Coincident neighbours are merged
//! as they arrive so downstream direction vectors are never degenerate.

use crate::basics::Real;
use crate::math::{calc_distance, VERTEX_DIST_EPSILON};

// ============================================================================
// VertexDist
// ============================================================================

/// A vertex with coordinates and the distance to the next vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexDist {
    pub x: Real,
    pub y: Real,
    pub dist: Real,
}

impl VertexDist {
    pub fn new(x: Real, y: Real) -> Self {
        Self { x, y, dist: 0.0 }
    }

    /// Distance from this vertex to `other`.
    #[inline]
    pub fn distance_to(&self, other: &VertexDist) -> Real {
        calc_distance(self.x, self.y, other.x, other.y)
    }

    /// Store the distance to `val`. Returns `false` if the two points are
    /// coincident within `epsilon`.
    pub fn calc_dist(&mut self, val: &VertexDist, epsilon: Real) -> bool {
        self.dist = self.distance_to(val);
        self.dist > epsilon
    }
}

// ============================================================================
// Merge policy
// ============================================================================

/// Append `val` to `buffer`, merging it with any trailing vertices that lie
/// within `epsilon` of it. Only the newest point of a coincident run
/// survives. The predecessor's `dist` is updated and `val` is stored with
/// `dist = 0`.
///
/// Returns `true` if the buffer grew, `false` if `val` replaced a vertex.
pub fn merge_or_append(buffer: &mut Vec<VertexDist>, val: VertexDist, epsilon: Real) -> bool {
    let before = buffer.len();
    while let Some(last) = buffer.last() {
        if last.distance_to(&val) > epsilon {
            break;
        }
        buffer.pop();
    }
    if let Some(last) = buffer.last_mut() {
        last.calc_dist(&val, epsilon);
    }
    buffer.push(VertexDist { dist: 0.0, ..val });
    buffer.len() > before
}

// ============================================================================
// Index arithmetic
// ============================================================================

/// Index `i + offset` wrapped into `0..len`.
#[inline]
pub fn wrap_index(i: usize, offset: isize, len: usize) -> usize {
    debug_assert!(len > 0);
    (i as isize + offset).rem_euclid(len as isize) as usize
}

/// Index `i + offset` clamped into `0..len`.
#[inline]
pub fn clamp_index(i: usize, offset: isize, len: usize) -> usize {
    debug_assert!(len > 0);
    (i as isize + offset).clamp(0, len as isize - 1) as usize
}

// ============================================================================
// VertexSequence
// ============================================================================

/// Ordered, resizable sequence of `VertexDist` with eager coincident-point
/// merging.
///
/// Invariant: for consecutive stored vertices `a`, `b`, `a.dist` is the
/// distance from `a` to `b` and exceeds [`VERTEX_DIST_EPSILON`]. After
/// `close(true)` the last vertex's `dist` is the wrap-around distance to the
/// first vertex; after `close(false)` it is zero.
#[derive(Debug, Clone, Default)]
pub struct VertexSequence {
    vertices: Vec<VertexDist>,
}

impl VertexSequence {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Append a vertex, merging it with a coincident predecessor.
    pub fn add(&mut self, val: VertexDist) {
        merge_or_append(&mut self.vertices, val, VERTEX_DIST_EPSILON);
    }

    /// Replace the last vertex. On an empty sequence this is `add`.
    pub fn modify_last(&mut self, val: VertexDist) {
        self.vertices.pop();
        self.add(val);
    }

    /// Remove the last vertex.
    pub fn remove_last(&mut self) {
        self.vertices.pop();
    }

    /// Finalize the sequence.
    ///
    /// When `closed` is true, trailing vertices coincident with the first are
    /// dropped and the last vertex receives the wrap-around distance. The
    /// closing segment stays implicit: no copy of the first vertex is stored.
    pub fn close(&mut self, closed: bool) {
        if closed {
            while self.vertices.len() > 1 {
                let first = self.vertices[0];
                let len = self.vertices.len();
                if self.vertices[len - 1].calc_dist(&first, VERTEX_DIST_EPSILON) {
                    break;
                }
                self.vertices.pop();
            }
            if self.vertices.len() == 1 {
                self.vertices[0].dist = 0.0;
            }
        } else if let Some(last) = self.vertices.last_mut() {
            last.dist = 0.0;
        }
    }

    pub fn remove_all(&mut self) {
        self.vertices.clear();
    }

    /// Replace the contents with a copy of `other`, reusing the allocation.
    pub fn copy_from(&mut self, other: &VertexSequence) {
        self.vertices.clear();
        self.vertices.extend_from_slice(&other.vertices);
    }

    pub fn as_slice(&self) -> &[VertexDist] {
        &self.vertices
    }

    pub fn as_mut_slice(&mut self) -> &mut [VertexDist] {
        &mut self.vertices
    }

    /// Last vertex, if any.
    pub fn last(&self) -> Option<&VertexDist> {
        self.vertices.last()
    }

    /// Sum of all segment lengths (including the wrap segment when closed).
    pub fn total_length(&self) -> Real {
        self.vertices.iter().map(|v| v.dist).sum()
    }

    // ------------------------------------------------------------------
    // Neighbour access
    // ------------------------------------------------------------------

    fn neighbor_index(&self, i: usize, offset: isize, closed: bool) -> usize {
        if closed {
            wrap_index(i, offset, self.vertices.len())
        } else {
            clamp_index(i, offset, self.vertices.len())
        }
    }

    /// Vertex before `i`: wraps when `closed`, clamps otherwise.
    pub fn prev(&self, i: usize, closed: bool) -> &VertexDist {
        &self.vertices[self.neighbor_index(i, -1, closed)]
    }

    pub fn curr(&self, i: usize) -> &VertexDist {
        &self.vertices[i]
    }

    /// Vertex after `i`: wraps when `closed`, clamps otherwise.
    pub fn next(&self, i: usize, closed: bool) -> &VertexDist {
        &self.vertices[self.neighbor_index(i, 1, closed)]
    }

    /// `(prev, curr, next)` around `i`, copied out of the buffer.
    pub fn neighbors(&self, i: usize, closed: bool) -> (VertexDist, VertexDist, VertexDist) {
        (*self.prev(i, closed), *self.curr(i), *self.next(i, closed))
    }
}

impl core::ops::Index<usize> for VertexSequence {
    type Output = VertexDist;

    fn index(&self, i: usize) -> &VertexDist {
        &self.vertices[i]
    }
}

impl core::ops::IndexMut<usize> for VertexSequence {
    fn index_mut(&mut self, i: usize) -> &mut VertexDist {
        &mut self.vertices[i]
    }
}

// ============================================================================
// Tests
// ============================================================================
