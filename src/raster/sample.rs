use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;
use crate::foundation::math::frac_abs;
use crate::raster::buffer::PixelBuffer;

/// How discrete texels are combined when sampling or resizing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMethod {
    /// No blending; behaves like nearest neighbour.
    None,
    /// Pick the single closest texel.
    #[default]
    NearestNeighbor,
    /// Weight the four surrounding texels by area.
    Bilinear,
    /// Average a kernel of source texels. Only meaningful for downscaling resizes; sampling
    /// treats it as nearest neighbour.
    AreaAveraging,
}

/// How sample coordinates outside `[0, 1]` are resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtrapolationMethod {
    /// Outside samples are transparent black.
    None,
    /// Wrap around, mirrored at 0.
    #[default]
    Repeat,
    /// Clamp to the edge.
    Extend,
}

impl PixelBuffer {
    /// Sample at a normalised coordinate, `(0, 0)` being the first texel and `(1, 1)` the last.
    ///
    /// Never fails: empty buffers and coordinates rejected by `ExtrapolationMethod::None` yield
    /// [`Color::TRANSPARENT`].
    pub fn sample(
        &self,
        x: f32,
        y: f32,
        interpolation: InterpolationMethod,
        extrapolation: ExtrapolationMethod,
    ) -> Color {
        if self.is_empty() {
            return Color::TRANSPARENT;
        }
        let (Some(x), Some(y)) = (
            resolve_coord(x, extrapolation),
            resolve_coord(y, extrapolation),
        ) else {
            return Color::TRANSPARENT;
        };

        match interpolation {
            InterpolationMethod::Bilinear => self.sample_bilinear(x, y, extrapolation),
            InterpolationMethod::None
            | InterpolationMethod::NearestNeighbor
            | InterpolationMethod::AreaAveraging => {
                let ix = grid_index(x, self.width());
                let iy = grid_index(y, self.height());
                self.get_pixel(ix, iy).unwrap_or(Color::TRANSPARENT)
            }
        }
    }

    fn sample_bilinear(&self, x: f32, y: f32, extrapolation: ExtrapolationMethod) -> Color {
        let (ix, fx) = grid_split(x, self.width());
        let (iy, fy) = grid_split(y, self.height());

        let corners = [
            (self.corner(ix, iy, extrapolation), (1.0 - fx) * (1.0 - fy)),
            (self.corner(ix + 1, iy, extrapolation), fx * (1.0 - fy)),
            (self.corner(ix, iy + 1, extrapolation), (1.0 - fx) * fy),
            (self.corner(ix + 1, iy + 1, extrapolation), fx * fy),
        ];

        let mut acc = [0.0f32; 4];
        for (c, w) in corners {
            acc[0] += f32::from(c.r) * w;
            acc[1] += f32::from(c.g) * w;
            acc[2] += f32::from(c.b) * w;
            acc[3] += f32::from(c.a) * w;
        }
        let q = |v: f32| v.round().clamp(0.0, 255.0) as u8;
        Color::rgba(q(acc[0]), q(acc[1]), q(acc[2]), q(acc[3]))
    }

    /// Texel at an integer grid position that may sit one past the last row/column.
    fn corner(&self, cx: u32, cy: u32, extrapolation: ExtrapolationMethod) -> Color {
        if let Some(c) = self.get_pixel(cx, cy) {
            return c;
        }
        let (w, h) = self.dimensions();
        match extrapolation {
            ExtrapolationMethod::None => Color::TRANSPARENT,
            ExtrapolationMethod::Repeat => self
                .get_pixel(cx % w, cy % h)
                .unwrap_or(Color::TRANSPARENT),
            ExtrapolationMethod::Extend => self
                .get_pixel(cx.min(w - 1), cy.min(h - 1))
                .unwrap_or(Color::TRANSPARENT),
        }
    }
}

/// Map a coordinate into `[0, 1]`, or `None` when it must produce the transparent sentinel.
fn resolve_coord(v: f32, extrapolation: ExtrapolationMethod) -> Option<f32> {
    if v.is_nan() {
        return None;
    }
    if (0.0..=1.0).contains(&v) {
        return Some(v);
    }
    match extrapolation {
        ExtrapolationMethod::None => None,
        ExtrapolationMethod::Repeat => {
            let f = frac_abs(v);
            Some(if v < 0.0 { 1.0 - f } else { f })
        }
        ExtrapolationMethod::Extend => Some(v.clamp(0.0, 1.0)),
    }
}

/// `floor(v * (dim - 1))`, kept inside the grid.
fn grid_index(v: f32, dim: u32) -> u32 {
    let last = dim.saturating_sub(1);
    ((v * last as f32).floor().max(0.0) as u32).min(last)
}

/// Integer grid position plus the fractional offset towards the next texel.
fn grid_split(v: f32, dim: u32) -> (u32, f32) {
    let last = dim.saturating_sub(1);
    let p = v * last as f32;
    let i = (p.floor().max(0.0) as u32).min(last);
    (i, (p - i as f32).clamp(0.0, 1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/sample.rs"]
mod tests;
