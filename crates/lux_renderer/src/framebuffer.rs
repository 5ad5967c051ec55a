//! Packed-pixel frame buffer.

use std::io::Write;
use std::path::Path;

use lux_core::Rgba;
use thiserror::Error;

/// Errors that can occur when writing to or exporting a frame.
#[derive(Error, Debug)]
pub enum FrameBufferError {
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} frame")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    #[error("Frame is {actual_width}x{actual_height}, expected {expected_width}x{expected_height}")]
    SizeMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// A width x height grid of `0xAARRGGBB` pixels, row-major, top-left origin.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl FrameBuffer {
    /// Create a new frame buffer filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at (x, y), or `None` outside the frame.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        self.index(x as i64, y as i64).map(|i| self.pixels[i])
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Rgba) -> Result<(), FrameBufferError> {
        self.write(x as i64, y as i64, color)
    }

    /// Set a pixel addressed in centered canvas coordinates.
    ///
    /// `(0, 0)` is the image center with y pointing up, so the accepted
    /// range is `-W/2 <= cx < W - W/2` and `H/2 - H < cy <= H/2`.
    pub fn put_pixel_centered(&mut self, cx: i32, cy: i32, color: Rgba) -> Result<(), FrameBufferError> {
        let x = (self.width / 2) as i64 + cx as i64;
        let y = (self.height / 2) as i64 - cy as i64;
        self.write(x, y, color)
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// The frame as raw packed `u32` values, ready for a display sink.
    pub fn as_u32(&self) -> &[u32] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Convert to RGBA bytes (for image encoders).
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color.to_rgba8());
        }
        bytes
    }

    /// Write the frame as an ASCII PPM (P3). Alpha is dropped.
    pub fn write_ppm<W: Write>(&self, mut writer: W) -> Result<(), FrameBufferError> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for color in &self.pixels {
            writeln!(writer, "{} {} {}", color.r(), color.g(), color.b())?;
        }

        Ok(())
    }

    /// Encode the frame as PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), FrameBufferError> {
        image::save_buffer_with_format(
            path,
            &self.to_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )?;
        Ok(())
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn write(&mut self, x: i64, y: i64, color: Rgba) -> Result<(), FrameBufferError> {
        let index = self.index(x, y).ok_or(FrameBufferError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.pixels[index] = color;
        Ok(())
    }
}
