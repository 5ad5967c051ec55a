//! Scene types for Lux.
//!
//! A scene is an ordered list of spheres and an ordered list of lights,
//! built once by the caller and shared read-only with the renderer.

use lux_math::Vec3;
use thiserror::Error;

use crate::color::Rgba;

/// Errors reported by [`Scene::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Sphere {index} has invalid radius {radius} (must be finite and > 0)")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Sphere {index} has a non-finite center")]
    NonFiniteCenter { index: usize },

    #[error("Light {index} has a zero-length or non-finite direction")]
    ZeroDirection { index: usize },

    #[error("Light {index} has non-finite intensity {intensity}")]
    InvalidIntensity { index: usize, intensity: f32 },
}

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center position
    pub center: Vec3,
    /// Radius (> 0)
    pub radius: f32,
    /// Base surface color
    pub color: Rgba,
    /// Phong shininess; `None` disables the specular term
    pub specular: Option<f32>,
}

impl Sphere {
    /// Create a matte sphere (no specular highlight).
    pub fn new(center: Vec3, radius: f32, color: Rgba) -> Self {
        Self {
            center,
            radius,
            color,
            specular: None,
        }
    }

    /// Enable the specular term with the given exponent.
    pub fn with_specular(mut self, exponent: f32) -> Self {
        self.specular = Some(exponent);
        self
    }
}

/// A light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Uniform light reaching every surface, never shadowed.
    Ambient { intensity: f32 },
    /// Light emitted from a single position.
    Point { intensity: f32, position: Vec3 },
    /// Light arriving from infinitely far away. `direction` points from the
    /// surface toward the light.
    Directional { intensity: f32, direction: Vec3 },
}

impl Light {
    pub fn ambient(intensity: f32) -> Self {
        Light::Ambient { intensity }
    }

    pub fn point(intensity: f32, position: Vec3) -> Self {
        Light::Point {
            intensity,
            position,
        }
    }

    pub fn directional(intensity: f32, direction: Vec3) -> Self {
        Light::Directional {
            intensity,
            direction,
        }
    }

    /// Intensity of this light regardless of kind.
    pub fn intensity(&self) -> f32 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }
}

/// The renderable scene: spheres and lights in declaration order.
///
/// Sphere order matters for ties: when two spheres are hit at exactly the
/// same distance, the one declared first wins.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere, returning its index.
    pub fn add_sphere(&mut self, sphere: Sphere) -> usize {
        self.spheres.push(sphere);
        self.spheres.len() - 1
    }

    /// Add a light, returning its index.
    pub fn add_light(&mut self, light: Light) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.add_sphere(sphere);
        self
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.add_light(light);
        self
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Check the geometric preconditions the renderer relies on.
    ///
    /// The per-pixel path performs no checks of its own, so callers should
    /// run this once after authoring the scene.
    pub fn validate(&self) -> Result<(), SceneError> {
        for (index, sphere) in self.spheres.iter().enumerate() {
            if !sphere.center.is_finite() {
                return Err(SceneError::NonFiniteCenter { index });
            }
            if !(sphere.radius.is_finite() && sphere.radius > 0.0) {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
        }

        for (index, light) in self.lights.iter().enumerate() {
            let intensity = light.intensity();
            if !intensity.is_finite() {
                return Err(SceneError::InvalidIntensity { index, intensity });
            }
            if let Light::Directional { direction, .. } = light {
                if !direction.is_finite() || direction.length_squared() == 0.0 {
                    return Err(SceneError::ZeroDirection { index });
                }
            }
        }

        log::debug!(
            "Scene validated: {} spheres, {} lights",
            self.spheres.len(),
            self.lights.len()
        );
        Ok(())
    }
}
