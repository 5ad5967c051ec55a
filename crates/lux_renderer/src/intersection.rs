//! Ray-sphere intersection and closest-hit search.
//!
//! The same search serves primary visibility and shadow tests; callers pick
//! the distance range.

use lux_core::Sphere;
use lux_math::{vector, Interval, Ray};

/// Primary rays ignore anything closer than the projection plane.
pub const PRIMARY_T_MIN: f32 = 1.0;

/// Shadow rays start this far along the ray so a surface does not shadow itself.
pub const SHADOW_EPSILON: f32 = 0.001;

/// Result of a closest-hit query.
///
/// A miss is `sphere: None` with `t = +inf`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection<'a> {
    /// The sphere that was hit, if any
    pub sphere: Option<&'a Sphere>,
    /// Ray parameter of the hit
    pub t: f32,
}

impl<'a> Intersection<'a> {
    pub const MISS: Intersection<'static> = Intersection {
        sphere: None,
        t: f32::INFINITY,
    };

    #[inline]
    pub fn is_hit(&self) -> bool {
        self.sphere.is_some()
    }
}

/// Solve `a·t² + b·t + c = 0` for the ray against a sphere.
///
/// Returns both roots (in no particular order), or `(+inf, +inf)` when the
/// discriminant is negative.
pub fn ray_sphere_intersect(ray: &Ray, sphere: &Sphere) -> (f32, f32) {
    let co = vector::subtract(ray.origin, sphere.center);
    let a = vector::dot(ray.direction, ray.direction);
    let b = 2.0 * vector::dot(co, ray.direction);
    let c = vector::dot(co, co) - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return (f32::INFINITY, f32::INFINITY);
    }

    let sqrtd = discriminant.sqrt();
    ((-b + sqrtd) / (2.0 * a), (-b - sqrtd) / (2.0 * a))
}

/// Find the nearest sphere hit with `ray_t.min < t < ray_t.max`.
///
/// Linear scan in declaration order. Only a strictly smaller `t` replaces
/// the current best, so the earlier sphere keeps a tie.
pub fn closest_intersection<'a>(
    ray: &Ray,
    spheres: &'a [Sphere],
    ray_t: Interval,
) -> Intersection<'a> {
    let mut closest = Intersection::MISS;

    for sphere in spheres {
        let (t1, t2) = ray_sphere_intersect(ray, sphere);
        for t in [t1, t2] {
            if ray_t.surrounds(t) && t < closest.t {
                closest = Intersection {
                    sphere: Some(sphere),
                    t,
                };
            }
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_core::Rgba;
    use lux_math::Vec3;

    fn sphere_at(center: Vec3, radius: f32) -> Sphere {
        Sphere::new(center, radius, Rgba::rgb(255, 0, 0))
    }

    #[test]
    fn test_roots_through_center() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, 10.0), 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let (t1, t2) = ray_sphere_intersect(&ray, &sphere);
        let (near, far) = (t1.min(t2), t1.max(t2));
        assert!((near - 8.0).abs() < 1e-5);
        assert!((far - 12.0).abs() < 1e-5);
    }

    #[test]
    fn test_roots_scale_with_direction_length() {
        // Unnormalized direction halves the parameter values.
        let sphere = sphere_at(Vec3::new(0.0, 0.0, 10.0), 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0));

        let (t1, t2) = ray_sphere_intersect(&ray, &sphere);
        assert!((t1.min(t2) - 4.0).abs() < 1e-5);
        assert!((t1.max(t2) - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_negative_discriminant_is_infinite() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, 10.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);

        assert_eq!(
            ray_sphere_intersect(&ray, &sphere),
            (f32::INFINITY, f32::INFINITY)
        );
    }

    #[test]
    fn test_tangent_ray_has_double_root() {
        let sphere = sphere_at(Vec3::new(1.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let (t1, t2) = ray_sphere_intersect(&ray, &sphere);
        assert!(t1.is_finite());
        assert!((t1 - 5.0).abs() < 1e-4);
        assert!((t2 - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_closest_miss() {
        let spheres = [sphere_at(Vec3::new(0.0, 5.0, 5.0), 1.0)];
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = closest_intersection(&ray, &spheres, Interval::new(PRIMARY_T_MIN, f32::INFINITY));
        assert!(!hit.is_hit());
        assert_eq!(hit.t, f32::INFINITY);
        assert_eq!(hit, Intersection::MISS);
    }

    #[test]
    fn test_closest_empty_scene() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let hit = closest_intersection(&ray, &[], Interval::new(f32::NEG_INFINITY, f32::INFINITY));
        assert_eq!(hit, Intersection::MISS);
    }

    #[test]
    fn test_closest_picks_nearest() {
        let spheres = [
            sphere_at(Vec3::new(0.0, 0.0, 20.0), 1.0),
            sphere_at(Vec3::new(0.0, 0.0, 10.0), 1.0),
        ];
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = closest_intersection(&ray, &spheres, Interval::new(PRIMARY_T_MIN, f32::INFINITY));
        assert!(std::ptr::eq(hit.sphere.unwrap(), &spheres[1]));
        assert!((hit.t - 9.0).abs() < 1e-5);
    }

    #[test]
    fn test_closest_tie_keeps_first_declared() {
        // Identical spheres hit at identical distances.
        let spheres = [
            sphere_at(Vec3::new(0.0, 0.0, 10.0), 1.0),
            sphere_at(Vec3::new(0.0, 0.0, 10.0), 1.0),
        ];
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = closest_intersection(&ray, &spheres, Interval::new(PRIMARY_T_MIN, f32::INFINITY));
        assert!(std::ptr::eq(hit.sphere.unwrap(), &spheres[0]));
    }

    #[test]
    fn test_closest_excludes_range_endpoints() {
        // Near root at exactly t = 1.
        let spheres = [sphere_at(Vec3::new(0.0, 0.0, 2.0), 1.0)];
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = closest_intersection(&ray, &spheres, Interval::new(1.0, f32::INFINITY));
        assert!((hit.t - 3.0).abs() < 1e-5, "t=1 must be excluded, got {}", hit.t);

        let hit = closest_intersection(&ray, &spheres, Interval::new(0.0, 1.0));
        assert!(!hit.is_hit());
    }

    #[test]
    fn test_sphere_behind_origin_is_ignored() {
        let spheres = [sphere_at(Vec3::new(0.0, 0.0, -10.0), 3.0)];
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = closest_intersection(&ray, &spheres, Interval::new(PRIMARY_T_MIN, f32::INFINITY));
        assert!(!hit.is_hit());
    }

    #[test]
    fn test_shadow_range_stops_at_light() {
        // Occluder beyond the light (t > 1 along the surface-to-light vector).
        let spheres = [sphere_at(Vec3::new(0.0, 0.0, 15.0), 1.0)];
        let to_light = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0));

        let point = closest_intersection(&to_light, &spheres, Interval::new(SHADOW_EPSILON, 1.0));
        assert!(!point.is_hit());

        // Same geometry treated as a directional light: any positive t counts.
        let directional =
            closest_intersection(&to_light, &spheres, Interval::new(SHADOW_EPSILON, f32::INFINITY));
        assert!(directional.is_hit());
        assert!(directional.t >= 1.0);
    }
}
