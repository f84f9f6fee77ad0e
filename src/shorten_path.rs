//! Path shortening.
//!
//! Trims a given arc length off the tail of a vertex sequence so that
//! geometry attached to the path end (arrowheads, markers) does not overlap
//! the stroke.

use crate::basics::Real;
use crate::math::VERTEX_DIST_EPSILON;
use crate::vertex_sequence::{VertexDist, VertexSequence};

/// Shortest final segment a trim leaves behind.
pub const MIN_SEGMENT_LENGTH: Real = 4.0 * VERTEX_DIST_EPSILON;

/// Remove `s` units of arc length from the end of `vs`.
///
/// Whole trailing segments are dropped while they are no longer than the
/// remaining length, but the path never drops below its first segment. The
/// last vertex is then pulled back along the final segment by whatever
/// length is left, stopping [`MIN_SEGMENT_LENGTH`] short of its
/// predecessor. A trim longer than the path therefore leaves a minimal
/// 2-point path that keeps the direction of the first segment. The
/// sequence is re-closed with `closed` so every `dist` is valid afterwards.
///
/// A non-positive `s` or a sequence with fewer than two vertices is left
/// untouched.
pub fn shorten_path(vs: &mut VertexSequence, mut s: Real, closed: bool) {
    if s <= 0.0 || vs.size() < 2 {
        return;
    }

    // The last vertex's dist may hold the wrap-around segment; only the
    // open segments count here.
    while vs.size() > 2 {
        let d = vs[vs.size() - 2].dist;
        if d > s {
            break;
        }
        vs.remove_last();
        s -= d;
    }

    let n = vs.size() - 1;
    let prev = vs[n - 1];
    let last = vs[n];
    let seg = prev.distance_to(&last);
    let k = ((seg - s) / seg).max(MIN_SEGMENT_LENGTH / seg);
    let moved = VertexDist {
        x: prev.x + (last.x - prev.x) * k,
        y: prev.y + (last.y - prev.y) * k,
        dist: 0.0,
    };

    // At large coordinates the minimal step can round onto the predecessor;
    // the unmoved vertex is the nearest distinct end point left.
    if vs[n - 1].calc_dist(&moved, VERTEX_DIST_EPSILON) {
        vs[n] = moved;
    } else {
        vs[n - 1].dist = seg;
    }
    vs.close(closed);
}

// ============================================================================
// Tests
// ============================================================================
