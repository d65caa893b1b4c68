use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;
use crate::raster::buffer::PixelBuffer;

/// An in-place, per-texel colour transform.
///
/// Any `FnMut(&mut Color)` closure is a transform, so ad-hoc filters need no new type.
pub trait PixelTransform {
    /// Rewrite one texel.
    fn transform(&mut self, px: &mut Color);

    /// Rewrite a slice of texels in order.
    fn transform_all(&mut self, pixels: &mut [Color]) {
        for px in pixels {
            self.transform(px);
        }
    }
}

impl<F> PixelTransform for F
where
    F: FnMut(&mut Color),
{
    fn transform(&mut self, px: &mut Color) {
        self(px)
    }
}

/// Built-in filters. Alpha is never modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    /// Unweighted mean of R, G and B.
    Grayscale,
    /// Luma-weighted gray: `0.30 R + 0.59 G + 0.11 B`, truncated.
    WeightedGrayscale,
    /// `255 - c` on every colour channel.
    Invert,
}

impl PixelTransform for FilterType {
    fn transform(&mut self, px: &mut Color) {
        match self {
            Self::Grayscale => {
                let v = (u16::from(px.r) + u16::from(px.g) + u16::from(px.b)) / 3;
                let v = v as u8;
                (px.r, px.g, px.b) = (v, v, v);
            }
            Self::WeightedGrayscale => {
                let v = 0.30f32 * f32::from(px.r)
                    + 0.59f32 * f32::from(px.g)
                    + 0.11f32 * f32::from(px.b);
                let v = v.clamp(0.0, 255.0) as u8;
                (px.r, px.g, px.b) = (v, v, v);
            }
            Self::Invert => {
                px.r ^= 0xFF;
                px.g ^= 0xFF;
                px.b ^= 0xFF;
            }
        }
    }
}

impl PixelBuffer {
    /// Run `transform` over every texel.
    pub fn filter<T: PixelTransform>(&mut self, mut transform: T) {
        transform.transform_all(self.pixels_mut());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/filter.rs"]
mod tests;
