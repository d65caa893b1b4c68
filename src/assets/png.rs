use std::path::Path;

use anyhow::Context;

use crate::foundation::error::SpriteResult;
use crate::raster::buffer::PixelBuffer;

impl PixelBuffer {
    /// Write the buffer as an 8-bit RGBA PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> SpriteResult<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            &self.to_rgba8(),
            self.width(),
            self.height(),
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}
