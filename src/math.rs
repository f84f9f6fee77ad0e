//! Geometric math utilities.
//!
//! Distances, cross products, line intersection and signed polygon area.

use crate::basics::{PointR, Real};

// ============================================================================
// Constants
// ============================================================================

/// Coinciding points maximal distance (epsilon).
pub const VERTEX_DIST_EPSILON: Real = 1e-5;

/// Epsilon for intersection calculations.
pub const INTERSECTION_EPSILON: Real = 1.0e-30;

// ============================================================================
// Cross product and distances
// ============================================================================

/// Cross product of vectors (x2-x1, y2-y1) and (x-x2, y-y2).
/// The sign indicates which side of the line (x1,y1)→(x2,y2) the point (x,y) is on.
#[inline]
pub fn cross_product(x1: Real, y1: Real, x2: Real, y2: Real, x: Real, y: Real) -> Real {
    (x - x2) * (y2 - y1) - (y - y2) * (x2 - x1)
}

/// Euclidean distance between two points.
#[inline]
pub fn calc_distance(x1: Real, y1: Real, x2: Real, y2: Real) -> Real {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

// ============================================================================
// Intersection
// ============================================================================

/// Intersection of the infinite lines (ax,ay)→(bx,by) and (cx,cy)→(dx,dy).
/// Returns `None` if they are parallel.
#[inline]
#[allow(clippy::too_many_arguments)]
pub fn calc_intersection(
    ax: Real,
    ay: Real,
    bx: Real,
    by: Real,
    cx: Real,
    cy: Real,
    dx: Real,
    dy: Real,
) -> Option<(Real, Real)> {
    let num = (ay - cy) * (dx - cx) - (ax - cx) * (dy - cy);
    let den = (bx - ax) * (dy - cy) - (by - ay) * (dx - cx);
    if den.abs() < INTERSECTION_EPSILON {
        return None;
    }
    let r = num / den;
    Some((ax + r * (bx - ax), ay + r * (by - ay)))
}

// ============================================================================
// Area
// ============================================================================

/// Signed area of a polygon. Positive for counter-clockwise winding in a
/// y-up coordinate system.
pub fn calc_polygon_area(vertices: &[PointR]) -> Real {
    let Some(first) = vertices.first() else {
        return 0.0;
    };
    let mut sum = 0.0;
    let (mut x, mut y) = (first.x, first.y);

    for v in &vertices[1..] {
        sum += x * v.y - y * v.x;
        x = v.x;
        y = v.y;
    }
    (sum + x * first.y - y * first.x) * 0.5
}

// ============================================================================
// Tests
// ============================================================================
