//! Fragment shapes emitted by the kernel.

use crate::polygon::{polygon_signed_area, Polygon};
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The central piece cut from a triangle, in absolute coordinates.
///
/// The six points come two per edge in the order `CA, AB, BC`, so the
/// outline winds the same way as the source triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hexagon<F> {
    /// Outline points `[CA0, CA1, AB0, AB1, BC0, BC1]`.
    pub points: [Point2<F>; 6],
    /// Incenter of the source triangle.
    pub center: Point2<F>,
    /// Inradius of the source triangle.
    pub radius: F,
}

impl<F: Float> Hexagon<F> {
    /// Returns the outline points.
    #[inline]
    pub fn outline(&self) -> [Point2<F>; 6] {
        self.points
    }

    /// Returns the signed area; the sign matches the source triangle.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.points)
    }

    /// Returns the enclosed area.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Re-expresses the outline relative to the incenter.
    pub fn to_centered(&self) -> CenteredHexagon<F> {
        CenteredHexagon {
            vertices: self.points.map(|p| p - self.center),
            center: self.center,
        }
    }
}

/// A fragment stored as offsets from its center.
///
/// Consumers that spin or scatter fragments independently transform the
/// offsets and move the center without touching the shape.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CenteredHexagon<F> {
    /// Outline vertices relative to `center`.
    pub vertices: [Vec2<F>; 6],
    /// Fragment center (incenter of the source triangle).
    pub center: Point2<F>,
}

impl<F: Float> CenteredHexagon<F> {
    /// Returns the outline in absolute coordinates.
    pub fn absolute(&self) -> [Point2<F>; 6] {
        self.vertices.map(|v| self.center + v)
    }

    /// Returns the enclosed area.
    pub fn area(&self) -> F {
        // shoelace on the offsets; translation does not change area
        let n = self.vertices.len();
        let twice = (0..n).fold(F::zero(), |acc, i| {
            acc + self.vertices[i].cross(self.vertices[(i + 1) % n])
        });
        (twice / F::from(2.0).unwrap()).abs()
    }

    /// Returns the fragment moved by `offset`.
    pub fn translated(&self, offset: Vec2<F>) -> Self {
        Self {
            vertices: self.vertices,
            center: self.center + offset,
        }
    }

    /// Returns the fragment spun about its center by `angle` radians.
    pub fn rotated(&self, angle: F) -> Self {
        Self {
            vertices: self.vertices.map(|v| v.rotated(angle)),
            center: self.center,
        }
    }
}

/// Output shape built from each split.
///
/// The scheduler is generic over this trait; outline and structured modes
/// differ only in which implementation they collect.
pub trait Fragment<F>: Sized {
    /// Packages a freshly cut hexagon.
    fn from_hexagon(hexagon: &Hexagon<F>) -> Self;
}

impl<F: Float> Fragment<F> for [Point2<F>; 6] {
    fn from_hexagon(hexagon: &Hexagon<F>) -> Self {
        hexagon.points
    }
}

impl<F: Float> Fragment<F> for CenteredHexagon<F> {
    fn from_hexagon(hexagon: &Hexagon<F>) -> Self {
        hexagon.to_centered()
    }
}

impl<F: Float> Fragment<F> for Hexagon<F> {
    fn from_hexagon(hexagon: &Hexagon<F>) -> Self {
        *hexagon
    }
}

impl<F: Float> Fragment<F> for Polygon<F> {
    fn from_hexagon(hexagon: &Hexagon<F>) -> Self {
        Polygon::new(hexagon.points.to_vec())
    }
}
