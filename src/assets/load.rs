use std::path::Path;

use crate::assets::bmp::decode_bmp;
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::raster::buffer::PixelBuffer;

/// Image containers recognised by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    /// Windows bitmap (`.bmp`).
    Bmp,
}

impl ImageKind {
    /// Match a path's extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "bmp" => Some(Self::Bmp),
            _ => None,
        }
    }
}

/// Decode an image file, picking the codec from its extension.
///
/// Unknown extensions fail with [`SpriteError::Unsupported`] before the file is opened.
pub fn load_image(path: impl AsRef<Path>) -> SpriteResult<PixelBuffer> {
    let path = path.as_ref();
    let kind = ImageKind::from_path(path).ok_or_else(|| {
        SpriteError::unsupported(format!("no image codec for '{}'", path.display()))
    })?;
    let bytes = std::fs::read(path)?;
    match kind {
        ImageKind::Bmp => decode_bmp(&bytes),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/load.rs"]
mod tests;
