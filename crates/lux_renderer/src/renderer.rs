//! Frame renderer.
//!
//! Casts one primary ray per pixel, shades the closest hit with the local
//! Phong model and writes the packed color into a [`FrameBuffer`].

use std::time::Instant;

use lux_core::{Rgba, Scene};
use lux_math::{vector, Interval, Ray};

use crate::intersection::{closest_intersection, PRIMARY_T_MIN, SHADOW_EPSILON};
use crate::shading::{compute_lighting, scale_color};
use crate::{Camera, FrameBuffer, FrameBufferError};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Color written when a primary ray hits nothing
    pub background: Rgba,
    /// Minimum shadow-ray parameter, guards against self-shadowing
    pub shadow_epsilon: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: Rgba::TRANSPARENT_WHITE,
            shadow_epsilon: SHADOW_EPSILON,
        }
    }
}

/// Compute the color seen along a primary ray.
pub fn trace_ray(ray: &Ray, scene: &Scene, config: &RenderConfig) -> Rgba {
    let hit = closest_intersection(
        ray,
        scene.spheres(),
        Interval::new(PRIMARY_T_MIN, f32::INFINITY),
    );

    let Some(sphere) = hit.sphere else {
        return config.background;
    };

    let point = ray.at(hit.t);
    let normal = vector::normalize(vector::subtract(sphere.center, point));
    let view = vector::subtract(ray.origin, point);

    let intensity = compute_lighting(
        point,
        normal,
        view,
        scene,
        sphere.specular,
        config.shadow_epsilon,
    );
    scale_color(sphere.color, intensity)
}

/// Render the pixel at centered canvas coordinates `(cx, cy)`.
pub fn render_pixel(camera: &Camera, scene: &Scene, cx: i32, cy: i32, config: &RenderConfig) -> Rgba {
    trace_ray(&camera.primary_ray(cx, cy), scene, config)
}

/// Render the scene into an existing frame buffer.
///
/// The buffer must match the camera resolution.
pub fn render_into(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    frame: &mut FrameBuffer,
) -> Result<(), FrameBufferError> {
    if frame.width() != camera.image_width || frame.height() != camera.image_height {
        return Err(FrameBufferError::SizeMismatch {
            expected_width: camera.image_width,
            expected_height: camera.image_height,
            actual_width: frame.width(),
            actual_height: frame.height(),
        });
    }

    let start = Instant::now();

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let Some((cx, cy)) = camera.pixel_to_canvas(x, y) else {
                log::warn!("Skipping pixel ({}, {}): outside canvas range", x, y);
                continue;
            };
            let color = render_pixel(camera, scene, cx, cy, config);
            let written = frame.put_pixel_centered(cx, cy, color);
            if let Err(e) = &written {
                log::warn!("Discarding pixel write: {}", e);
            }
            debug_assert!(written.is_ok(), "pixel ({}, {}) mapped outside the frame", x, y);
        }
    }

    log::debug!(
        "Rendered {}x{} frame ({} spheres, {} lights) in {:?}",
        camera.image_width,
        camera.image_height,
        scene.sphere_count(),
        scene.light_count(),
        start.elapsed()
    );

    Ok(())
}

/// Render the entire scene to a new frame buffer.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> FrameBuffer {
    let mut frame = FrameBuffer::new(camera.image_width, camera.image_height);
    // Sized from the camera, so this cannot mismatch.
    if let Err(e) = render_into(camera, scene, config, &mut frame) {
        log::error!("Render failed: {}", e);
    }
    frame
}
