//! Local Phong illumination and color scaling.

use lux_core::{Light, Rgba, Scene};
use lux_math::{vector, Interval, Ray, Vec3};

use crate::intersection::closest_intersection;

/// Total light intensity arriving at `point`.
///
/// `normal` is the inward surface normal (`center - point`) and `view` points
/// from the surface back to the camera. Because the normal faces into the
/// sphere, the light and view vectors are flipped into the same inward frame
/// before the diffuse and specular dot products.
///
/// The result is a plain sum over all lights and is not clamped.
pub fn compute_lighting(
    point: Vec3,
    normal: Vec3,
    view: Vec3,
    scene: &Scene,
    specular: Option<f32>,
    shadow_epsilon: f32,
) -> f32 {
    let mut total = 0.0;

    for light in scene.lights() {
        // Point-light shadow rays span the full surface-to-light vector,
        // so the light itself sits at t = 1.
        let (light_intensity, to_light, t_max) = match *light {
            Light::Ambient { intensity: ambient } => {
                total += ambient;
                continue;
            }
            Light::Point {
                intensity,
                position,
            } => (intensity, vector::subtract(position, point), 1.0),
            Light::Directional {
                intensity,
                direction,
            } => (intensity, direction, f32::INFINITY),
        };

        let shadow_ray = Ray::new(point, to_light);
        let blocker = closest_intersection(
            &shadow_ray,
            scene.spheres(),
            Interval::new(shadow_epsilon, t_max),
        );
        if blocker.is_hit() {
            continue;
        }

        let l = -vector::normalize(to_light);
        let v = -view;

        // Diffuse
        let n_dot_l = vector::dot(normal, l);
        if n_dot_l > 0.0 {
            total += light_intensity * n_dot_l / (normal.length() * l.length());
        }

        // Specular
        if let Some(exponent) = specular {
            let r = vector::normalize(vector::subtract(
                vector::scale(2.0 * n_dot_l, normal),
                l,
            ));
            let v = vector::normalize(v);
            let r_dot_v = vector::dot(r, v);
            if r_dot_v > 0.0 {
                total +=
                    light_intensity * (r_dot_v / (r.length() * v.length())).powf(exponent);
            }
        }
    }

    total
}

/// Multiply the RGB channels by `intensity`, saturating each at 255.
///
/// Channels are clamped independently, so very bright light shifts hue
/// toward white. Alpha is kept as-is.
pub fn scale_color(color: Rgba, intensity: f32) -> Rgba {
    // NaN casts to 0
    let scale = |channel: u8| (channel as f32 * intensity).clamp(0.0, 255.0) as u8;
    Rgba::new(
        scale(color.r()),
        scale(color.g()),
        scale(color.b()),
        color.a(),
    )
}
