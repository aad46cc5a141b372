//! 2D circle type, used for triangle incircles.

use super::Point2;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D circle defined by center and radius.
///
/// # Example
///
/// ```
/// use fractum::primitives::{Point2, Triangle2};
///
/// let t = Triangle2::new(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(0.0, 3.0),
/// );
/// let circle = t.incircle().unwrap();
/// assert_eq!(circle.center, Point2::new(1.0, 1.0));
/// assert_eq!(circle.radius, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle2<F> {
    /// Center point of the circle
    pub center: Point2<F>,
    /// Radius of the circle (non-negative)
    pub radius: F,
}

impl<F: Float> Circle2<F> {
    /// Creates a new circle from center and radius.
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self { center, radius }
    }
}
