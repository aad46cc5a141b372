//! 2D triangle type with incircle measurements.

use super::{Circle2, Point2};
use crate::error::{FractureError, FractureResult};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle given by three positions.
///
/// Vertex order names the edges `AB`, `BC` and `CA`; either winding is
/// accepted. Triangles are plain values and are never modified once built.
///
/// # Example
///
/// ```
/// use fractum::primitives::{Point2, Triangle2};
///
/// let t = Triangle2::new(
///     Point2::new(-10.0_f64, 0.0),
///     Point2::new(0.0, 10.0),
///     Point2::new(10.0, 0.0),
/// );
///
/// assert_eq!(t.area(), 100.0);
/// assert!(t.signed_area() < 0.0); // clockwise
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle2<F> {
    pub a: Point2<F>,
    pub b: Point2<F>,
    pub c: Point2<F>,
}

impl<F: Float> Triangle2<F> {
    /// Creates a triangle from three vertices.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self { a, b, c }
    }

    /// Returns the signed area (positive for CCW, negative for CW).
    #[inline]
    pub fn signed_area(&self) -> F {
        (self.b - self.a).cross(self.c - self.a) * F::from(0.5).unwrap()
    }

    /// Returns the absolute area.
    #[inline]
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the edge lengths `[|AB|, |BC|, |CA|]`.
    #[inline]
    pub fn edge_lengths(&self) -> [F; 3] {
        [
            self.a.distance(self.b),
            self.b.distance(self.c),
            self.c.distance(self.a),
        ]
    }

    /// Returns the perimeter.
    #[inline]
    pub fn perimeter(&self) -> F {
        let [ab, bc, ca] = self.edge_lengths();
        ab + bc + ca
    }

    /// Returns true for triangles that cannot be measured reliably.
    ///
    /// A triangle is degenerate when a coordinate is not finite, the
    /// perimeter is not positive, or the area is within
    /// `F::epsilon() * perimeter²` of zero (collinear or sliver input).
    pub fn is_degenerate(&self) -> bool {
        if !(self.a.is_finite() && self.b.is_finite() && self.c.is_finite()) {
            return true;
        }
        let p = self.perimeter();
        if !(p > F::zero()) || !p.is_finite() {
            return true;
        }
        self.area() <= F::epsilon() * p * p
    }

    /// Returns the inscribed circle, or `None` for degenerate triangles.
    ///
    /// The center is the perimeter-weighted average of the vertices, each
    /// vertex weighted by the length of the opposite edge; the radius is
    /// `2·area / perimeter`.
    pub fn incircle(&self) -> Option<Circle2<F>> {
        if self.is_degenerate() {
            return None;
        }
        let [ab, bc, ca] = self.edge_lengths();
        let p = ab + bc + ca;
        let s = self.area();
        let center = Point2::new(
            (bc * self.a.x + ca * self.b.x + ab * self.c.x) / p,
            (bc * self.a.y + ca * self.b.y + ab * self.c.y) / p,
        );
        Some(Circle2::new(center, (s + s) / p))
    }

    /// Returns the incenter, or `None` for degenerate triangles.
    pub fn incenter(&self) -> Option<Point2<F>> {
        self.incircle().map(|circle| circle.center)
    }

    /// Returns the inradius, or zero for degenerate triangles.
    pub fn inradius(&self) -> F {
        self.incircle().map_or_else(F::zero, |circle| circle.radius)
    }
}

/// Builds triangles from a point buffer and a flat index buffer.
///
/// Indices are consumed three at a time; vertex order is preserved.
///
/// # Errors
///
/// Returns [`FractureError::IncompleteTriangle`] when the index count is not
/// a multiple of three and [`FractureError::IndexOutOfBounds`] when an index
/// does not address a point.
///
/// # Example
///
/// ```
/// use fractum::primitives::{triangles_from_indices, Point2};
///
/// let points = [
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
/// let triangles = triangles_from_indices(&points, &[0, 1, 2, 0, 2, 3]).unwrap();
/// assert_eq!(triangles.len(), 2);
/// ```
pub fn triangles_from_indices<F: Float>(
    points: &[Point2<F>],
    indices: &[usize],
) -> FractureResult<Vec<Triangle2<F>>> {
    if indices.len() % 3 != 0 {
        return Err(FractureError::IncompleteTriangle { len: indices.len() });
    }

    let fetch = |index: usize| {
        points
            .get(index)
            .copied()
            .ok_or(FractureError::IndexOutOfBounds {
                index,
                len: points.len(),
            })
    };

    indices
        .chunks_exact(3)
        .map(|tri| -> FractureResult<Triangle2<F>> {
            Ok(Triangle2::new(fetch(tri[0])?, fetch(tri[1])?, fetch(tri[2])?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn right_triangle() -> Triangle2<f64> {
        // 3-4-5 triangle: inradius (3 + 4 - 5) / 2 = 1, incenter (1, 1)
        Triangle2::new(
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 3.0),
        )
    }

    #[test]
    fn test_area_is_winding_independent() {
        let t = right_triangle();
        let flipped = Triangle2::new(t.a, t.c, t.b);
        assert_relative_eq!(t.signed_area(), 6.0);
        assert_relative_eq!(flipped.signed_area(), -6.0);
        assert_relative_eq!(flipped.area(), t.area());
    }

    #[test]
    fn test_edges_and_perimeter() {
        let t = right_triangle();
        assert_eq!(t.edge_lengths(), [4.0, 5.0, 3.0]);
        assert_relative_eq!(t.perimeter(), 12.0);
    }

    #[test]
    fn test_incircle_of_right_triangle() {
        let circle = right_triangle().incircle().unwrap();
        assert_relative_eq!(circle.radius, 1.0, epsilon = 1e-12);
        assert_relative_eq!(circle.center.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(circle.center.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_triangles() {
        let collinear = Triangle2::new(
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        );
        assert!(collinear.is_degenerate());
        assert!(collinear.incircle().is_none());
        assert_eq!(collinear.inradius(), 0.0);

        let p = Point2::new(5.0_f64, 5.0);
        let point = Triangle2::new(p, p, p);
        assert!(point.is_degenerate());

        let nan = Triangle2::new(
            Point2::new(f64::NAN, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        );
        assert!(nan.is_degenerate());

        assert!(!right_triangle().is_degenerate());
    }

    #[test]
    fn test_tiny_but_well_shaped_triangle_is_not_degenerate() {
        let t = Triangle2::new(
            Point2::new(0.0_f64, 0.0),
            Point2::new(1e-6, 0.0),
            Point2::new(0.0, 1e-6),
        );
        assert!(!t.is_degenerate());
    }

    #[test]
    fn test_triangles_from_indices() {
        let points = [
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        let tris = triangles_from_indices(&points, &[0, 1, 2, 2, 3, 0]).unwrap();
        assert_eq!(tris.len(), 2);
        assert_eq!(tris[1].a, points[2]);
        assert_eq!(tris[1].b, points[3]);
        assert_eq!(tris[1].c, points[0]);
    }

    #[test]
    fn test_triangles_from_indices_errors() {
        let points = [Point2::new(0.0_f64, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)];
        assert_eq!(
            triangles_from_indices(&points, &[0, 1]),
            Err(FractureError::IncompleteTriangle { len: 2 })
        );
        assert_eq!(
            triangles_from_indices(&points, &[0, 1, 3]),
            Err(FractureError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert!(triangles_from_indices(&points, &[]).unwrap().is_empty());
    }
}
