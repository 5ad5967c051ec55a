//! Presentation sinks that receive completed frames.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::{FrameBuffer, FrameBufferError};

/// Consumer of finished frames (a window, a file, a test harness).
///
/// The renderer only hands over a fully computed buffer; the sink owns
/// whatever happens next.
pub trait FrameSink {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), FrameBufferError>;
}

/// Writes each presented frame to an image file.
///
/// The format follows the extension: `.png` or `.ppm`.
#[derive(Debug, Clone)]
pub struct ImageFileSink {
    path: PathBuf,
}

impl ImageFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FrameSink for ImageFileSink {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), FrameBufferError> {
        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("png") => frame.save_png(&self.path)?,
            Some("ppm") => {
                let mut writer = BufWriter::new(File::create(&self.path)?);
                frame.write_ppm(&mut writer)?;
                writer.flush()?;
            }
            _ => {
                return Err(FrameBufferError::UnsupportedFormat(
                    self.path.display().to_string(),
                ))
            }
        }

        log::info!(
            "Wrote {}x{} frame to {}",
            frame.width(),
            frame.height(),
            self.path.display()
        );
        Ok(())
    }
}

/// Keeps a copy of the most recently presented frame.
#[derive(Debug, Default)]
pub struct MemorySink {
    last: Option<FrameBuffer>,
    presented: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.last.as_ref()
    }

    /// Number of frames presented so far.
    pub fn presented(&self) -> usize {
        self.presented
    }
}

impl FrameSink for MemorySink {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), FrameBufferError> {
        self.last = Some(frame.clone());
        self.presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_core::Rgba;

    #[test]
    fn test_memory_sink_keeps_last_frame() {
        let mut sink = MemorySink::new();
        assert!(sink.last_frame().is_none());

        let mut frame = FrameBuffer::new(2, 2);
        sink.present(&frame).unwrap();
        frame.set(1, 1, Rgba::WHITE).unwrap();
        sink.present(&frame).unwrap();

        assert_eq!(sink.presented(), 2);
        assert_eq!(sink.last_frame().and_then(|f| f.get(1, 1)), Some(Rgba::WHITE));
    }

    #[test]
    fn test_image_sink_rejects_unknown_extension() {
        let path = std::env::temp_dir().join("lux_sink_test.bmpx");
        let mut sink = ImageFileSink::new(&path);
        let err = sink.present(&FrameBuffer::new(1, 1)).unwrap_err();
        assert!(matches!(err, FrameBufferError::UnsupportedFormat(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_image_sink_writes_ppm() {
        let path = std::env::temp_dir().join(format!("lux_sink_test_{}.ppm", std::process::id()));
        let mut sink = ImageFileSink::new(&path);

        let mut frame = FrameBuffer::new(1, 1);
        frame.set(0, 0, Rgba::rgb(9, 8, 7)).unwrap();
        sink.present(&frame).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "P3\n1 1\n255\n9 8 7\n");
        std::fs::remove_file(&path).unwrap();
    }
}
