//! Pinhole camera mapping canvas pixels to viewport directions.

use lux_math::{Ray, Vec3};

/// Camera parameters for primary ray generation.
///
/// The camera looks down +Z from `origin`. Canvas coordinates are centered:
/// `(0, 0)` is the middle of the image, x grows right and y grows up.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    /// Eye position
    pub origin: Vec3,
    /// Viewport size in scene units
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Distance from the origin to the viewport plane
    pub projection_distance: f32,
}

impl Camera {
    /// Create a camera with default settings (800x600, 1x1 viewport at d=1,
    /// eye at z=-5).
    pub fn new() -> Self {
        Self {
            image_width: 800,
            image_height: 600,
            origin: Vec3::new(0.0, 0.0, -5.0),
            viewport_width: 1.0,
            viewport_height: 1.0,
            projection_distance: 1.0,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set camera position.
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    /// Set viewport size and projection distance.
    pub fn with_viewport(mut self, width: f32, height: f32, projection_distance: f32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self.projection_distance = projection_distance;
        self
    }

    /// Direction from the origin through canvas point `(cx, cy)`.
    pub fn canvas_to_viewport(&self, cx: i32, cy: i32) -> Vec3 {
        Vec3::new(
            cx as f32 * (self.viewport_width / self.image_width as f32),
            cy as f32 * (self.viewport_height / self.image_height as f32),
            self.projection_distance,
        )
    }

    /// Primary ray through canvas point `(cx, cy)`.
    pub fn primary_ray(&self, cx: i32, cy: i32) -> Ray {
        Ray::new(self.origin, self.canvas_to_viewport(cx, cy))
    }

    /// Centered canvas coordinates of buffer pixel `(x, y)` (top-left origin).
    ///
    /// Returns `None` when either coordinate does not fit in an `i32`.
    pub fn pixel_to_canvas(&self, x: u32, y: u32) -> Option<(i32, i32)> {
        let half_w = i64::from(self.image_width / 2);
        let half_h = i64::from(self.image_height / 2);
        let cx = i32::try_from(i64::from(x) - half_w).ok()?;
        let cy = i32::try_from(half_h - i64::from(y)).ok()?;
        Some((cx, cy))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
