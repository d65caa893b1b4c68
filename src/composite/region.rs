use crate::composite::blend::blend_color;
use crate::foundation::color::Color;
use crate::raster::buffer::PixelBuffer;

impl PixelBuffer {
    /// Copy a `size` window of `src` starting at `src_origin` onto `self` at `dst_origin`.
    ///
    /// Cells whose source or destination falls outside its buffer are skipped. With
    /// `keep_alpha == false` the source alpha replaces the destination alpha; otherwise the
    /// destination alpha is preserved.
    pub fn copy_region(
        &mut self,
        src: &PixelBuffer,
        dst_origin: (u32, u32),
        src_origin: (u32, u32),
        size: (u32, u32),
        keep_alpha: bool,
    ) {
        self.for_each_region_cell(src, dst_origin, src_origin, size, |dst, s| {
            let a = if keep_alpha { dst.a } else { s.a };
            *dst = Color::rgba(s.r, s.g, s.b, a);
        });
    }

    /// Like [`PixelBuffer::copy_region`], but the colour channels are alpha-blended with the
    /// source alpha as coverage.
    ///
    /// The resulting alpha is the destination's (`keep_alpha`) or the source's. With `mask`
    /// set, a fully transparent source texel never changes the destination alpha.
    pub fn blend_region(
        &mut self,
        src: &PixelBuffer,
        dst_origin: (u32, u32),
        src_origin: (u32, u32),
        size: (u32, u32),
        keep_alpha: bool,
        mask: bool,
    ) {
        self.for_each_region_cell(src, dst_origin, src_origin, size, |dst, s| {
            let original_a = dst.a;
            let mut out = blend_color(*dst, s, s.a);
            out.a = if keep_alpha { original_a } else { s.a };
            if mask && s.a == 0 {
                out.a = original_a;
            }
            *dst = out;
        });
    }

    fn for_each_region_cell(
        &mut self,
        src: &PixelBuffer,
        (dst_x, dst_y): (u32, u32),
        (src_x, src_y): (u32, u32),
        (width, height): (u32, u32),
        mut op: impl FnMut(&mut Color, Color),
    ) {
        for iy in 0..height {
            let (Some(dy), Some(sy)) = (dst_y.checked_add(iy), src_y.checked_add(iy)) else {
                break;
            };
            if dy >= self.height() || sy >= src.height() {
                break;
            }
            for ix in 0..width {
                let (Some(dx), Some(sx)) = (dst_x.checked_add(ix), src_x.checked_add(ix)) else {
                    break;
                };
                let Some(s) = src.get_pixel(sx, sy) else {
                    break;
                };
                let Some(d) = self.get_pixel_mut(dx, dy) else {
                    break;
                };
                op(d, s);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/region.rs"]
mod tests;
