//! Built-in demo scene.

use lux_core::{Light, Rgba, Scene, Sphere};
use lux_math::Vec3;

/// Red and purple spheres resting above a large ground sphere, lit by a dim
/// ambient term and one point light above and to the left of the camera.
pub fn demo_scene() -> Scene {
    Scene::new()
        .with_sphere(Sphere::new(Vec3::new(0.0, 1.0, 1.0), 1.0, Rgba::rgb(255, 0, 0)))
        .with_sphere(Sphere::new(Vec3::new(2.0, 0.0, 1.0), 1.0, Rgba::rgb(120, 0, 120)))
        .with_sphere(Sphere::new(
            Vec3::new(2.0, -502.0, 1.0),
            500.0,
            Rgba::rgb(100, 50, 0),
        ))
        .with_light(Light::ambient(0.2))
        .with_light(Light::point(0.8, Vec3::new(-2.0, 5.0, -3.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene_is_valid() {
        let scene = demo_scene();
        assert_eq!(scene.sphere_count(), 3);
        assert_eq!(scene.light_count(), 2);
        assert!(scene.validate().is_ok());
    }
}
