use crate::error::Result;
use crate::tolerance::Tolerance;

/// Validate structural integrity of a path entity.
///
/// All checks in this domain are floating-point comparisons, so validation
/// is parameterized over a [`Tolerance`].
pub trait Validate {
    fn validate(&self, tol: &Tolerance) -> Result<()>;
}

/// Compute an axis-aligned bounding box.
pub trait BoundingBox {
    type Point;
    fn bounding_box(&self) -> Option<(Self::Point, Self::Point)>;
}
