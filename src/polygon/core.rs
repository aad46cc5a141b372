//! Polygon measurements used to check fragment outlines.

use crate::primitives::Point2;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A simple polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the first).
/// Winding is whatever the producer emitted; fragment outlines inherit the
/// winding of the triangle they were cut from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon<F> {
    /// The vertices of the polygon.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the signed area (positive for CCW winding).
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Tests if the polygon is convex.
    pub fn is_convex(&self) -> bool {
        polygon_is_convex(&self.vertices)
    }

    /// Tests if no two non-adjacent edges cross.
    pub fn is_simple(&self) -> bool {
        polygon_is_simple(&self.vertices)
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let n = vertices.len();
    let twice = (0..n).fold(F::zero(), |acc, i| {
        let p = vertices[i];
        let q = vertices[(i + 1) % n];
        acc + p.x * q.y - q.x * p.y
    });

    twice / F::from(2.0).unwrap()
}

/// Computes the absolute area of a polygon.
pub fn polygon_area<F: Float>(vertices: &[Point2<F>]) -> F {
    polygon_signed_area(vertices).abs()
}

/// Tests if a polygon is convex.
///
/// Returns true if all non-vanishing turns between consecutive edges have
/// the same sign. Collinear runs are tolerated.
pub fn polygon_is_convex<F: Float>(vertices: &[Point2<F>]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return true;
    }

    let mut sign: Option<bool> = None;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let c = vertices[(i + 2) % n];

        let turn = (b - a).cross(c - b);
        if turn.abs() > F::epsilon() {
            let positive = turn > F::zero();
            match sign {
                None => sign = Some(positive),
                Some(s) if s != positive => return false,
                _ => {}
            }
        }
    }

    true
}

/// Tests if a polygon is simple (no two non-adjacent edges properly cross).
pub fn polygon_is_simple<F: Float>(vertices: &[Point2<F>]) -> bool {
    let n = vertices.len();
    if n < 4 {
        return true;
    }

    for i in 0..n {
        let a1 = vertices[i];
        let a2 = vertices[(i + 1) % n];

        for j in (i + 2)..n {
            let j_next = (j + 1) % n;
            if j_next == i {
                continue;
            }
            if segments_cross(a1, a2, vertices[j], vertices[j_next]) {
                return false;
            }
        }
    }

    true
}

fn segments_cross<F: Float>(a1: Point2<F>, a2: Point2<F>, b1: Point2<F>, b2: Point2<F>) -> bool {
    let d1 = (b2 - b1).cross(a1 - b1);
    let d2 = (b2 - b1).cross(a2 - b1);
    let d3 = (a2 - a1).cross(b1 - a1);
    let d4 = (a2 - a1).cross(b2 - a1);

    d1 * d2 < F::zero() && d3 * d4 < F::zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ]
    }

    #[test]
    fn test_signed_area_follows_winding() {
        let mut pts = square();
        assert_relative_eq!(polygon_signed_area(&pts), 4.0);
        pts.reverse();
        assert_relative_eq!(polygon_signed_area(&pts), -4.0);
        assert_relative_eq!(polygon_area(&pts), 4.0);
    }

    #[test]
    fn test_area_of_short_inputs() {
        let pts = [Point2::new(0.0_f64, 0.0), Point2::new(1.0, 1.0)];
        assert_eq!(polygon_signed_area(&pts), 0.0);
    }

    #[test]
    fn test_convexity() {
        assert!(polygon_is_convex(&square()));

        let l_shape = [
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        assert!(!polygon_is_convex(&l_shape));
    }

    #[test]
    fn test_simplicity() {
        let poly = Polygon::new(square());
        assert!(poly.is_simple());
        assert_eq!(poly.len(), 4);

        let bow_tie = [
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
        ];
        assert!(!polygon_is_simple(&bow_tie));
        assert!(!polygon_is_convex(&bow_tie));
    }
}
