//! Convex hull of a point set (Andrew's monotone chain).
//!
//! Output vertices run counter-clockwise in a y-up frame, starting from the
//! lexicographically smallest point. In a y-down screen frame the same
//! sequence appears clockwise. Collinear points are dropped, so every
//! returned vertex is a strict corner.

use crate::error::ClothError;
use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Positive if `o -> a -> b` turns counter-clockwise, negative if clockwise,
/// zero if the three points are collinear.
pub fn turn<F: Float>(o: Vec2<F>, a: Vec2<F>, b: Vec2<F>) -> F {
    (a - o).cross(b - o)
}

/// Sorted, deduplicated, finite copy of `points`.
fn prepare<F: Float>(points: &[Vec2<F>]) -> AllocVec<Vec2<F>> {
    let mut pts: AllocVec<Vec2<F>> = points.iter().copied().filter(|p| p.is_finite()).collect();
    pts.sort_unstable_by(|a, b| a.lexical_cmp(b));
    pts.dedup();
    pts
}

/// Convex hull of `points`.
///
/// Never fails. Non-finite points are ignored and duplicates collapse to
/// one. Fewer than 3 distinct points come back as-is (sorted), so an empty
/// input gives an empty hull. Collinear input collapses to its two extreme
/// points.
pub fn convex_hull<F: Float>(points: &[Vec2<F>]) -> AllocVec<Vec2<F>> {
    let pts = prepare(points);
    if pts.len() < 3 {
        return pts;
    }

    let mut hull: AllocVec<Vec2<F>> = AllocVec::with_capacity(pts.len() + 1);

    // Lower hull, left to right.
    for &p in pts.iter() {
        while hull.len() >= 2 && turn(hull[hull.len() - 2], hull[hull.len() - 1], p) <= F::zero() {
            hull.pop();
        }
        hull.push(p);
    }

    // Upper hull, right to left. The rightmost point is already in place.
    let lower_len = hull.len() + 1;
    for &p in pts.iter().rev().skip(1) {
        while hull.len() >= lower_len && turn(hull[hull.len() - 2], hull[hull.len() - 1], p) <= F::zero() {
            hull.pop();
        }
        hull.push(p);
    }

    // The scan ends back at the starting point.
    hull.pop();
    hull
}

/// Convex hull as a closed polygon with at least three corners.
///
/// Fails with [`ClothError::DegenerateGeometry`] when the hull has fewer
/// than three vertices (fewer than three distinct points, or all collinear).
/// Callers drawing a frame should skip it rather than invent a shape.
pub fn closed_hull<F: Float>(points: &[Vec2<F>]) -> Result<AllocVec<Vec2<F>>, ClothError> {
    let hull = convex_hull(points);
    if hull.len() < 3 {
        return Err(ClothError::DegenerateGeometry { hull_points: hull.len() });
    }
    Ok(hull)
}

/// Twice the signed area of a polygon. Positive for counter-clockwise.
pub fn signed_area_doubled<F: Float>(polygon: &[Vec2<F>]) -> F {
    let n = polygon.len();
    (0..n).fold(F::zero(), |acc, i| acc + polygon[i].cross(polygon[(i + 1) % n]))
}

/// True if `point` lies inside or on a counter-clockwise convex polygon,
/// within `epsilon` of each edge.
pub fn contains<F: Float>(polygon: &[Vec2<F>], point: Vec2<F>, epsilon: F) -> bool {
    let n = polygon.len();
    match n {
        0 => false,
        1 => polygon[0].distance(point) <= epsilon,
        2 => {
            let (a, b) = (polygon[0], polygon[1]);
            let edge = b - a;
            let len = edge.length();
            if len.is_near_zero(epsilon) {
                return a.distance(point) <= epsilon;
            }
            // Off the line, or past either endpoint along it.
            let along = (point - a).dot(edge) / len;
            turn(a, b, point).abs() / len <= epsilon
                && along >= -epsilon
                && along <= len + epsilon
        }
        _ => (0..n).all(|i| {
            let a = polygon[i];
            let b = polygon[(i + 1) % n];
            let edge = b - a;
            let len = edge.length();
            if len.is_near_zero(epsilon) {
                return a.distance(point) <= epsilon;
            }
            // Signed distance to the left of the edge.
            turn(a, b, point) / len >= -epsilon
        }),
    }
}
