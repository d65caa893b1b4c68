use serde::{Deserialize, Serialize};

use crate::composite::blend::{blend_color, composite_texel};
use crate::foundation::color::Color;
use crate::foundation::math::trunc_dim;
use crate::raster::buffer::PixelBuffer;
use crate::raster::sample::InterpolationMethod;

/// How [`Surface::draw_region`] fills a destination rectangle larger than its source window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawType {
    /// Tile the source, wrapping at the image edges.
    #[default]
    Repeat,
    /// Stretch the source window with nearest-neighbour lookup.
    Resize,
}

/// An opaque software framebuffer that images are drawn onto before presentation.
///
/// Drawing writes colour only; every texel of the frame stays fully opaque. With alpha mode
/// disabled (the default) source alpha is ignored and texels are overwritten.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    frame: PixelBuffer,
    alpha_mode: bool,
}

impl Surface {
    /// Black surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            frame: PixelBuffer::new(width, height),
            alpha_mode: false,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.frame.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.frame.height()
    }

    /// The current frame contents.
    pub fn frame(&self) -> &PixelBuffer {
        &self.frame
    }

    /// Take the frame out of the surface.
    pub fn into_frame(self) -> PixelBuffer {
        self.frame
    }

    /// Blend partially transparent sources instead of overwriting.
    pub fn enable_alpha(&mut self) {
        self.alpha_mode = true;
    }

    /// Overwrite with source colour regardless of alpha.
    pub fn disable_alpha(&mut self) {
        self.alpha_mode = false;
    }

    /// Whether alpha mode is on.
    pub fn alpha_mode(&self) -> bool {
        self.alpha_mode
    }

    /// Fill with a gray level.
    pub fn clear(&mut self, gray: u8) {
        self.frame.fill(Color::gray(gray));
    }

    /// Fill with an opaque colour.
    pub fn clear_color(&mut self, color: Color) {
        self.frame.fill(color.with_alpha(255));
    }

    /// Overwrite one pixel's colour. Out-of-range writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(px) = self.frame.get_pixel_mut(x, y) {
            composite_texel(px, color, false);
        }
    }

    /// Blend one pixel using `color.a` as coverage. Does nothing unless alpha mode is on.
    pub fn draw_pixel(&mut self, x: u32, y: u32, color: Color) {
        if !self.alpha_mode {
            return;
        }
        if let Some(px) = self.frame.get_pixel_mut(x, y) {
            *px = blend_color(*px, color, color.a);
        }
    }

    /// Draw a whole image at its own draw position, clipped to the surface.
    pub fn draw(&mut self, image: &PixelBuffer) {
        let (ox, oy) = image.position();
        let alpha_mode = self.alpha_mode;
        for y in 0..image.height() {
            let Some(dy) = oy.checked_add(y).filter(|&dy| dy < self.height()) else {
                break;
            };
            let Some(row) = image.row(y) else {
                break;
            };
            for (x, &src) in (0u32..).zip(row) {
                let Some(dst) = ox
                    .checked_add(x)
                    .and_then(|dx| self.frame.get_pixel_mut(dx, dy))
                else {
                    break;
                };
                composite_texel(dst, src, alpha_mode);
            }
        }
    }

    /// Fill `size` at `dst_origin` from the window of `image` starting at `src_origin`.
    ///
    /// `DrawType::Repeat` walks the source one texel per destination texel, wrapping to the
    /// image's first column/row. `DrawType::Resize` stretches the window from `src_origin` to the
    /// image's bottom-right corner over the destination rectangle.
    pub fn draw_region(
        &mut self,
        image: &PixelBuffer,
        src_origin: (u32, u32),
        dst_origin: (u32, u32),
        size: (u32, u32),
        draw_type: DrawType,
    ) {
        let (iw, ih) = image.dimensions();
        if iw == 0 || ih == 0 {
            return;
        }
        let (sx0, sy0) = (src_origin.0 % iw, src_origin.1 % ih);
        let (dst_x, dst_y) = dst_origin;
        let (w, h) = size;
        let alpha_mode = self.alpha_mode;

        let x_scale = f64::from(iw - sx0) / f64::from(w.max(1));
        let y_scale = f64::from(ih - sy0) / f64::from(h.max(1));

        for iy in 0..h {
            let Some(dy) = dst_y.checked_add(iy).filter(|&dy| dy < self.height()) else {
                break;
            };
            let sy = match draw_type {
                DrawType::Repeat => wrap_add(sy0, iy, ih),
                DrawType::Resize => sy0
                    .saturating_add(trunc_dim(f64::from(iy) * y_scale))
                    .min(ih - 1),
            };
            for ix in 0..w {
                let sx = match draw_type {
                    DrawType::Repeat => wrap_add(sx0, ix, iw),
                    DrawType::Resize => sx0
                        .saturating_add(trunc_dim(f64::from(ix) * x_scale))
                        .min(iw - 1),
                };
                let Some(dst) = dst_x
                    .checked_add(ix)
                    .and_then(|dx| self.frame.get_pixel_mut(dx, dy))
                else {
                    break;
                };
                if let Some(src) = image.get_pixel(sx, sy) {
                    composite_texel(dst, src, alpha_mode);
                }
            }
        }
    }

    /// Overwrite a clipped rectangle with `color`.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        self.for_each_in_rect(x, y, width, height, |px| composite_texel(px, color, false));
    }

    /// Blend `color` over a clipped rectangle with coverage `a`, independent of alpha mode.
    pub fn blend_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color, a: u8) {
        self.for_each_in_rect(x, y, width, height, |px| *px = blend_color(*px, color, a));
    }

    /// Straight line from `(x0, y0)` towards `(x1, y1)`, stopping at the surface edge.
    ///
    /// The end point itself is not drawn. Opaque colours overwrite; anything else is blended
    /// with `color.a` as coverage.
    pub fn draw_line(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Color) {
        let w = f64::from(x1) - f64::from(x0);
        let h = f64::from(y1) - f64::from(y0);
        let len = (w * w + h * h).sqrt().ceil();
        if len < 1.0 {
            return;
        }
        let (dx, dy) = (w / len, h / len);
        for i in 0..len as u64 {
            let x = f64::from(x0) + dx * i as f64;
            let y = f64::from(y0) + dy * i as f64;
            if x < 0.0 || y < 0.0 {
                break;
            }
            let Some(px) = self.frame.get_pixel_mut(x as u32, y as u32) else {
                break;
            };
            if color.a == 255 {
                composite_texel(px, color, false);
            } else {
                *px = blend_color(*px, color, color.a);
            }
        }
    }

    /// Coarsen the frame into `ratio`-sized blocks.
    ///
    /// Ignored unless `1 < ratio < min(width, height)`.
    pub fn pixelize(&mut self, ratio: f32) {
        let (w, h) = self.frame.dimensions();
        if !(ratio > 1.0 && ratio < w as f32 && ratio < h as f32) {
            return;
        }
        let small_w = trunc_dim(f64::from(w) / f64::from(ratio)).max(1);
        let small_h = trunc_dim(f64::from(h) / f64::from(ratio)).max(1);
        let pos = self.frame.position();
        self.frame
            .resize(small_w, small_h, InterpolationMethod::NearestNeighbor);
        self.frame
            .resize(w, h, InterpolationMethod::NearestNeighbor);
        self.frame.set_position(pos.0, pos.1);
    }

    fn for_each_in_rect(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        mut op: impl FnMut(&mut Color),
    ) {
        let x_end = x.saturating_add(width).min(self.width());
        let y_end = y.saturating_add(height).min(self.height());
        for py in y..y_end {
            for px in x..x_end {
                if let Some(texel) = self.frame.get_pixel_mut(px, py) {
                    op(texel);
                }
            }
        }
    }
}

fn wrap_add(origin: u32, offset: u32, len: u32) -> u32 {
    ((u64::from(origin) + u64::from(offset)) % u64::from(len)) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
