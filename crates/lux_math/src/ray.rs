use crate::Vec3;

/// A ray in 3D space with origin and direction.
///
/// The direction is not required to be normalized. Primary rays keep the
/// viewport direction as-is, and point-light shadow rays span the full
/// surface-to-light vector so the light sits at `t = 1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}
