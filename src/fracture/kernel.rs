//! Per-triangle construction: one hexagon and three corner triangles.
//!
//! # Construction
//!
//! For a triangle `ABC` with area `s`, edge lengths `|AB|, |BC|, |CA|` and
//! perimeter `p`:
//!
//! 1. inradius `r = 2s / p` and incenter `O = (|BC|·A + |CA|·B + |AB|·C) / p`
//! 2. on each edge `XY`, the projection `t` of `O - X` onto the edge locates
//!    the incircle tangency; the near cut point sits at `t·(|XY| - r) / |XY|`
//!    from `X` and the far cut point `r` further along
//! 3. the six cut points form the hexagon; each corner keeps the triangle
//!    spanned by its vertex and the two cut points adjacent to it
//!
//! The hexagon and the three corner triangles tile the source triangle.

use super::hexagon::Hexagon;
use super::sampler::AreaSampler;
use super::strategy::SpawnStrategy;
use crate::primitives::{Circle2, Point2, Triangle2, Vec2};
use num_traits::Float;

/// Why a triangle was not split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discard {
    /// Below `min_area` and rejected by the spawn strategy.
    BelowThreshold,
    /// Zero-area, sliver or non-finite triangle.
    Degenerate,
}

/// A triangle cut into its central hexagon and three corner triangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split<F> {
    /// The central fragment.
    pub hexagon: Hexagon<F>,
    /// Corner triangles at `A`, `B` and `C`, in that order.
    pub children: [Triangle2<F>; 3],
}

/// Kernel outcome for one triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Subdivision<F> {
    /// The triangle was split.
    Split(Split<F>),
    /// The triangle was dropped.
    Discarded(Discard),
}

impl<F> Subdivision<F> {
    /// Returns true if the triangle was split.
    #[inline]
    pub fn is_split(&self) -> bool {
        matches!(self, Self::Split(_))
    }
}

/// Decides whether `triangle` splits and, if so, splits it.
///
/// Degenerate triangles are discarded before the strategy is consulted.
/// The sampler is only called for triangles with `area < min_area`.
///
/// # Example
///
/// ```
/// use fractum::fracture::{subdivide, AreaHash, SpawnStrategy, Subdivision};
/// use fractum::primitives::{Point2, Triangle2};
///
/// let t = Triangle2::new(
///     Point2::new(-10.0_f64, 0.0),
///     Point2::new(0.0, 10.0),
///     Point2::new(10.0, 0.0),
/// );
///
/// match subdivide(&t, SpawnStrategy::None, 5.0, &mut AreaHash) {
///     Subdivision::Split(split) => assert_eq!(split.children.len(), 3),
///     Subdivision::Discarded(_) => unreachable!(),
/// }
/// ```
pub fn subdivide<F, S>(
    triangle: &Triangle2<F>,
    strategy: SpawnStrategy,
    min_area: F,
    sampler: &mut S,
) -> Subdivision<F>
where
    F: Float,
    S: AreaSampler<F> + ?Sized,
{
    let Some(incircle) = triangle.incircle() else {
        return Subdivision::Discarded(Discard::Degenerate);
    };

    let area = triangle.area();
    if !strategy.admits(area, min_area, || sampler.sample(area)) {
        return Subdivision::Discarded(Discard::BelowThreshold);
    }

    Subdivision::Split(cut(triangle, incircle))
}

/// Cuts a triangle regardless of the spawn strategy.
///
/// Returns `None` if the triangle is degenerate.
pub fn split<F: Float>(triangle: &Triangle2<F>) -> Option<Split<F>> {
    triangle
        .incircle()
        .map(|incircle| cut(triangle, incircle))
}

fn cut<F: Float>(triangle: &Triangle2<F>, incircle: Circle2<F>) -> Split<F> {
    let Triangle2 { a, b, c } = *triangle;
    let Circle2 { center, radius: r } = incircle;

    let (ab0, ab1) = cut_points(a, b, center, r);
    let (bc0, bc1) = cut_points(b, c, center, r);
    let (ca0, ca1) = cut_points(c, a, center, r);

    Split {
        hexagon: Hexagon {
            points: [ca0, ca1, ab0, ab1, bc0, bc1],
            center,
            radius: r,
        },
        children: [
            Triangle2::new(ca1, a, ab0),
            Triangle2::new(ab1, b, bc0),
            Triangle2::new(bc1, c, ca0),
        ],
    }
}

/// Returns the near and far cut points on edge `from -> to`.
///
/// Both points are kept on the edge segment: the span is clamped to the
/// edge length and the near offset to `[0, len - span]`.
fn cut_points<F: Float>(
    from: Point2<F>,
    to: Point2<F>,
    center: Point2<F>,
    r: F,
) -> (Point2<F>, Point2<F>) {
    let edge: Vec2<F> = to - from;
    let len = edge.magnitude();
    let dir = edge / len;

    let tangency = (center - from).dot(edge) / len;
    let span = r.min(len);
    let offset = (tangency * (len - r) / len).max(F::zero()).min(len - span);

    let near = from + dir * offset;
    (near, near + dir * span)
}
