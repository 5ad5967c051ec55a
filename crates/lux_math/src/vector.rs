//! Free-function vector algebra.
//!
//! Thin wrappers over `glam::Vec3` operators. Every function is pure and
//! returns a new value.

use crate::Vec3;

/// Component-wise sum `a + b`.
#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    a + b
}

/// Component-wise difference `a - b`.
#[inline]
pub fn subtract(a: Vec3, b: Vec3) -> Vec3 {
    a - b
}

/// Scalar multiple `k * a`.
#[inline]
pub fn scale(k: f32, a: Vec3) -> Vec3 {
    k * a
}

/// Dot product.
#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.dot(b)
}

/// Divide `a` by its Euclidean length.
///
/// `a` must not be the zero vector. This is not checked: a zero-length input
/// produces NaN components, which downstream color clamping absorbs.
#[inline]
pub fn normalize(a: Vec3) -> Vec3 {
    let length = dot(a, a).sqrt();
    a / length
}
