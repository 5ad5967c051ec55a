//! Lux Renderer - CPU Ray Tracing
//!
//! A direct-illumination ray tracer for sphere scenes:
//! one primary ray per pixel, closest-hit search, shadow rays toward every
//! light, and a local Phong model (ambient + diffuse + specular).

mod camera;
mod framebuffer;
mod intersection;
mod renderer;
mod shading;
mod sink;

pub use camera::Camera;
pub use framebuffer::{FrameBuffer, FrameBufferError};
pub use intersection::{
    closest_intersection, ray_sphere_intersect, Intersection, PRIMARY_T_MIN, SHADOW_EPSILON,
};
pub use renderer::{render, render_into, render_pixel, trace_ray, RenderConfig};
pub use shading::{compute_lighting, scale_color};
pub use sink::{FrameSink, ImageFileSink, MemorySink};

/// Re-export scene and math types used in the public API
pub use lux_core::{Light, Rgba, Scene, Sphere};
pub use lux_math::{Interval, Ray, Vec3};
