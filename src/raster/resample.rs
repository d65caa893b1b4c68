use crate::foundation::color::Color;
use crate::foundation::math::trunc_dim;
use crate::raster::buffer::{PixelBuffer, area};
use crate::raster::sample::{ExtrapolationMethod, InterpolationMethod};

/// What a resize request did to the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// Storage was rebuilt at the requested size.
    Resized,
    /// The request was not applicable (area averaging asked to upscale, or a non-positive scale
    /// factor); the buffer is untouched.
    Unchanged,
}

impl ResizeOutcome {
    /// Whether the buffer was rebuilt.
    pub fn is_resized(self) -> bool {
        matches!(self, Self::Resized)
    }
}

impl PixelBuffer {
    /// Resample to `new_width x new_height`.
    ///
    /// A zero in either dimension derives that dimension from the current aspect ratio.
    /// `AreaAveraging` only downscales: when either axis would not shrink, the buffer is left as
    /// it is and [`ResizeOutcome::Unchanged`] is returned.
    pub fn resize(
        &mut self,
        new_width: u32,
        new_height: u32,
        method: InterpolationMethod,
    ) -> ResizeOutcome {
        let (dw, dh) = self.derive_target(new_width, new_height);
        let next = match method {
            InterpolationMethod::None | InterpolationMethod::NearestNeighbor => {
                self.resample_nearest(dw, dh)
            }
            InterpolationMethod::Bilinear => self.resample_bilinear(dw, dh),
            InterpolationMethod::AreaAveraging => match self.resample_area_average(dw, dh) {
                Some(px) => px,
                None => {
                    tracing::warn!(
                        from_width = self.width(),
                        from_height = self.height(),
                        to_width = dw,
                        to_height = dh,
                        "area averaging only downscales; buffer left unchanged"
                    );
                    return ResizeOutcome::Unchanged;
                }
            },
        };
        self.replace_storage(dw, dh, next);
        ResizeOutcome::Resized
    }

    /// Uniform scale; ignored unless `factor > 0`.
    pub fn scale(&mut self, factor: f32, method: InterpolationMethod) -> ResizeOutcome {
        self.scale_xy(factor, factor, method)
    }

    /// Per-axis scale; ignored unless both factors are `> 0`.
    pub fn scale_xy(&mut self, sx: f32, sy: f32, method: InterpolationMethod) -> ResizeOutcome {
        if !(sx > 0.0 && sy > 0.0) {
            return ResizeOutcome::Unchanged;
        }
        let w = trunc_dim(f64::from(self.width()) * f64::from(sx));
        let h = trunc_dim(f64::from(self.height()) * f64::from(sy));
        self.resize(w, h, method)
    }

    fn derive_target(&self, new_width: u32, new_height: u32) -> (u32, u32) {
        let aspect = f64::from(self.aspect_ratio());
        if new_width == 0 {
            (trunc_dim(f64::from(new_height) * aspect), new_height)
        } else if new_height == 0 {
            let h = if aspect > 0.0 {
                trunc_dim(f64::from(new_width) / aspect)
            } else {
                0
            };
            (new_width, h)
        } else {
            (new_width, new_height)
        }
    }

    fn resample_nearest(&self, dw: u32, dh: u32) -> Vec<Color> {
        let (w, h) = self.dimensions();
        if self.is_empty() {
            return vec![Color::default(); area(dw, dh)];
        }
        let x_scale = f64::from(w) / f64::from(dw);
        let y_scale = f64::from(h) / f64::from(dh);
        let src = self.pixels();

        let mut out = Vec::with_capacity(area(dw, dh));
        for y in 0..dh {
            let sy = trunc_dim(f64::from(y) * y_scale).min(h - 1) as usize;
            for x in 0..dw {
                let sx = trunc_dim(f64::from(x) * x_scale).min(w - 1) as usize;
                out.push(src[sy * w as usize + sx]);
            }
        }
        out
    }

    fn resample_bilinear(&self, dw: u32, dh: u32) -> Vec<Color> {
        let mut out = Vec::with_capacity(area(dw, dh));
        for y in 0..dh {
            let ny = y as f32 / dh as f32;
            for x in 0..dw {
                let nx = x as f32 / dw as f32;
                out.push(self.sample(
                    nx,
                    ny,
                    InterpolationMethod::Bilinear,
                    ExtrapolationMethod::Extend,
                ));
            }
        }
        out
    }

    /// Alpha-weighted box average. Kernel samples that fall outside the source reuse the
    /// anchor texel the destination pixel maps to.
    fn resample_area_average(&self, dw: u32, dh: u32) -> Option<Vec<Color>> {
        let (w, h) = self.dimensions();
        let x_scale = w as f32 / dw as f32;
        let y_scale = h as f32 / dh as f32;
        if !(x_scale > 1.0 && y_scale > 1.0) {
            return None;
        }

        let rx = x_scale.round().min(u16::MAX as f32) as u32;
        let ry = y_scale.round().min(u16::MAX as f32) as u32;
        let (half_x, half_y) = (rx / 2, ry / 2);
        let (kw, kh) = (rx.max(2), ry.max(2));
        let div = kw * kh;

        let mut out = Vec::with_capacity(area(dw, dh));
        for y in 0..dh {
            let sy = ((y as f32 * y_scale) as u32).min(h - 1);
            for x in 0..dw {
                let sx = ((x as f32 * x_scale) as u32).min(w - 1);
                let anchor = self.get_pixel(sx, sy).unwrap_or_default();

                let mut acc = [0u32; 4];
                for kx in 0..kw {
                    for ky in 0..kh {
                        let px = (sx + kx)
                            .checked_sub(half_x)
                            .zip((sy + ky).checked_sub(half_y))
                            .and_then(|(tx, ty)| self.get_pixel(tx, ty))
                            .unwrap_or(anchor);
                        let ratio = f32::from(px.a) / 255.0;
                        acc[0] += (f32::from(px.r) * ratio) as u32;
                        acc[1] += (f32::from(px.g) * ratio) as u32;
                        acc[2] += (f32::from(px.b) * ratio) as u32;
                        acc[3] += u32::from(px.a);
                    }
                }
                out.push(Color::rgba(
                    (acc[0] / div) as u8,
                    (acc[1] / div) as u8,
                    (acc[2] / div) as u8,
                    (acc[3] / div) as u8,
                ));
            }
        }
        Some(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/resample.rs"]
mod tests;
