use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::raster::sample::InterpolationMethod;

/// Settings for rendering an animation to a frame sequence.
///
/// Every field has a default, so `{}` is a valid config:
///
/// ```json
/// { "ticks": 24, "tick_ms": 50, "scale": 2.0, "method": "nearest_neighbor",
///   "background": "#202020", "alpha_mode": true }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Frames to render.
    pub ticks: u32,
    /// Time fed to the player before each frame, in milliseconds.
    pub tick_ms: u32,
    /// Uniform scale applied to the animation before playback.
    pub scale: f32,
    /// Resampling used for `scale`.
    pub method: InterpolationMethod,
    /// Surface width; the scaled canvas width when absent.
    pub width: Option<u32>,
    /// Surface height; the scaled canvas height when absent.
    pub height: Option<u32>,
    /// Colour the surface is cleared to before each frame.
    pub background: Color,
    /// Blend partially transparent canvas texels onto the background.
    pub alpha_mode: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            ticks: 1,
            tick_ms: 0,
            scale: 1.0,
            method: InterpolationMethod::NearestNeighbor,
            width: None,
            height: None,
            background: Color::BLACK,
            alpha_mode: true,
        }
    }
}

impl ExportConfig {
    /// Parse from a JSON reader. The result is not validated.
    pub fn from_reader<R: std::io::Read>(r: R) -> SpriteResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SpriteError::validation(format!("parse export config JSON: {e}")))
    }

    /// Parse from a JSON string. The result is not validated.
    pub fn from_json_str(s: &str) -> SpriteResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| SpriteError::validation(format!("parse export config JSON: {e}")))
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SpriteResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SpriteError::validation(format!("open export config '{}': {e}", path.display()))
        })?;
        let cfg = Self::from_reader(BufReader::new(f))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check value ranges.
    pub fn validate(&self) -> SpriteResult<()> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(SpriteError::validation(format!(
                "scale must be a positive number, got {}",
                self.scale
            )));
        }
        if self.ticks > 1 && self.tick_ms == 0 {
            return Err(SpriteError::validation(
                "tick_ms must be > 0 when rendering more than one frame",
            ));
        }
        if self.width == Some(0) || self.height == Some(0) {
            return Err(SpriteError::validation("surface size must be non-zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
