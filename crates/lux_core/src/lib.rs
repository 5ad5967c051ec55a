//! Lux Core - Scene data model for the Lux ray tracer.
//!
//! This crate provides:
//!
//! - **Color**: `Rgba`, a packed `0xAARRGGBB` pixel value
//! - **Scene types**: `Sphere`, `Light`, `Scene`
//!
//! # Example
//!
//! ```
//! use lux_core::{Light, Rgba, Scene, Sphere};
//! use lux_math::Vec3;
//!
//! let scene = Scene::new()
//!     .with_sphere(Sphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0, Rgba::rgb(255, 0, 0)))
//!     .with_light(Light::ambient(1.0));
//!
//! assert!(scene.validate().is_ok());
//! ```

pub mod color;
pub mod scene;

// Re-export commonly used types
pub use color::Rgba;
pub use scene::{Light, Scene, SceneError, Sphere};
