use std::io::Cursor;

use anyhow::{Context, Result};
use image::ImageReader;

use nc_core::ports::ImageProbePort;
use nc_core::scan::ImageDimensions;

/// Reads width and height from the image header only.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageHeaderProbe;

impl ImageProbePort for ImageHeaderProbe {
    fn dimensions(&self, bytes: &[u8]) -> Result<ImageDimensions> {
        let (width, height) = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .context("read image header failed")?
            .into_dimensions()
            .context("unrecognized image format")?;

        Ok(ImageDimensions { width, height })
    }
}
