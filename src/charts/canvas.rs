//! Drawing Canvas Module
//! An owned pixel buffer that one chart draws into and then writes out as PNG.
//!
//! Every chart gets its own [`Canvas`]: it is created, painted once, saved and
//! dropped, so nothing drawn for one chart can show up in another.

use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;
use thiserror::Error;

/// The drawing area a chart painter receives.
pub type CanvasArea<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("drawing failed: {0}")]
    Draw(String),
    #[error("pixel buffer does not fit a {width}x{height} image")]
    Buffer { width: u32, height: u32 },
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// RGB pixel buffer for a single chart.
pub struct Canvas {
    width: u32,
    height: u32,
    background: RGBColor,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new((width, height): (u32, u32), background: RGBColor) -> Self {
        Self {
            width,
            height,
            background,
            pixels: vec![0; width as usize * height as usize * 3],
        }
    }

    /// Clear the canvas to its background and run `paint` on it.
    pub fn draw<F>(&mut self, paint: F) -> Result<(), CanvasError>
    where
        F: FnOnce(&CanvasArea<'_>) -> Result<(), Box<dyn Error>>,
    {
        let root = BitMapBackend::with_buffer(&mut self.pixels, (self.width, self.height))
            .into_drawing_area();
        root.fill(&self.background)
            .map_err(|e| CanvasError::Draw(e.to_string()))?;
        paint(&root).map_err(|e| CanvasError::Draw(e.to_string()))?;
        root.present()
            .map_err(|e| CanvasError::Draw(e.to_string()))?;
        Ok(())
    }

    /// Encode the pixels as PNG at `path`, replacing any existing file.
    /// Consumes the canvas.
    pub fn save(self, path: &Path) -> Result<(), CanvasError> {
        let (width, height) = (self.width, self.height);
        let image = RgbImage::from_raw(width, height, self.pixels)
            .ok_or(CanvasError::Buffer { width, height })?;
        image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}
