//! Packed 32-bit color.

use bytemuck::{Pod, Zeroable};

/// A pixel color packed as `0xAARRGGBB`.
///
/// Alpha occupies the high byte, followed by red, green and blue. This is
/// the layout framebuffer-style display sinks consume directly, so a
/// `&[Rgba]` can be cast to `&[u32]` without copying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(transparent)]
pub struct Rgba(pub u32);

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    /// White with zero alpha, the default background.
    pub const TRANSPARENT_WHITE: Rgba = Rgba::new(255, 255, 255, 0);

    /// Pack four 8-bit channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Pack an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Unpack into `[r, g, b, a]` byte order (for image encoders).
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }
}

impl From<u32> for Rgba {
    fn from(packed: u32) -> Self {
        Self(packed)
    }
}

impl From<Rgba> for u32 {
    fn from(color: Rgba) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing_layout() {
        let c = Rgba::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.0, 0x7812_3456);
        assert_eq!(c.r(), 0x12);
        assert_eq!(c.g(), 0x34);
        assert_eq!(c.b(), 0x56);
        assert_eq!(c.a(), 0x78);
    }

    #[test]
    fn test_rgb_is_opaque() {
        assert_eq!(Rgba::rgb(255, 0, 0).0, 0xFFFF_0000);
    }

    #[test]
    fn test_constants() {
        assert_eq!(Rgba::TRANSPARENT_WHITE.0, 0x00FF_FFFF);
        assert_eq!(Rgba::WHITE.0, 0xFFFF_FFFF);
        assert_eq!(Rgba::BLACK.0, 0xFF00_0000);
    }

    #[test]
    fn test_to_rgba8() {
        assert_eq!(Rgba::new(1, 2, 3, 4).to_rgba8(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_cast_slice() {
        let pixels = [Rgba::rgb(1, 2, 3), Rgba::TRANSPARENT_WHITE];
        let raw: &[u32] = bytemuck::cast_slice(&pixels);
        assert_eq!(raw, &[0xFF01_0203, 0x00FF_FFFF]);
    }
}
