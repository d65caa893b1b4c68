use crate::foundation::color::Color;
use crate::foundation::error::{SpriteError, SpriteResult};

/// Side length of a buffer built with [`PixelBuffer::default`].
pub const DEFAULT_BUFFER_SIDE: u32 = 256;

/// A 2D grid of texels in row-major order.
///
/// The texel vector always holds exactly `width * height` entries. Operations that change the
/// dimensions build the new storage first and swap it in as a whole.
///
/// The draw position is only used when the buffer is drawn onto a [`crate::Surface`]; pixel math
/// ignores it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    pos_x: u32,
    pos_y: u32,
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_SIDE, DEFAULT_BUFFER_SIDE)
    }
}

impl PixelBuffer {
    /// Opaque black buffer of the given size. `0x0` is a valid, empty buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::BLACK)
    }

    /// Buffer with every texel set to `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; area(width, height)],
            pos_x: 0,
            pos_y: 0,
        }
    }

    /// Wrap an existing texel vector. Fails when `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> SpriteResult<Self> {
        let expected = area(width, height);
        if pixels.len() != expected {
            return Err(SpriteError::validation(format!(
                "pixel data has {} texels, expected {width}x{height} = {expected}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
            pos_x: 0,
            pos_y: 0,
        })
    }

    /// Load packed `0xAARRGGBB` values. With `with_alpha == false` the top byte is ignored and
    /// every texel is opaque.
    pub fn from_argb_u32(
        data: &[u32],
        width: u32,
        height: u32,
        with_alpha: bool,
    ) -> SpriteResult<Self> {
        let pixels = data
            .iter()
            .map(|&v| {
                let c = Color::from_argb_u32(v);
                if with_alpha { c } else { c.with_alpha(255) }
            })
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Load pre-split `(0x00RRGGBB, alpha)` pairs.
    pub fn from_rgb_alpha(data: &[(u32, u8)], width: u32, height: u32) -> SpriteResult<Self> {
        let pixels = data
            .iter()
            .map(|&(rgb, a)| Color::from_rgb_u32(rgb, a))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Width in texels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in texels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of texels (`width * height`).
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the buffer holds no texels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// `width / height`, or 0 for a buffer with no rows.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 0.0;
        }
        self.width as f32 / self.height as f32
    }

    /// All texels, row-major.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Mutable view of all texels. The length cannot change through this view.
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// One row of texels, or `None` past the last row.
    pub fn row(&self, y: u32) -> Option<&[Color]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Some(&self.pixels[start..start + w])
    }

    /// Storage index of `(x, y)`, or `None` when outside `[0,width) x [0,height)`.
    pub fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Texel at `(x, y)`, or `None` when out of range.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.index_of(x, y).map(|i| self.pixels[i])
    }

    /// Mutable texel at `(x, y)`, or `None` when out of range.
    pub fn get_pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut Color> {
        self.index_of(x, y).map(|i| &mut self.pixels[i])
    }

    /// Overwrite the texel at `(x, y)`. Out-of-range writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(px) = self.get_pixel_mut(x, y) {
            *px = color;
        }
    }

    /// Draw position used by [`crate::Surface::draw`].
    pub fn position(&self) -> (u32, u32) {
        (self.pos_x, self.pos_y)
    }

    /// Set the draw position.
    pub fn set_position(&mut self, x: u32, y: u32) {
        self.pos_x = x;
        self.pos_y = y;
    }

    /// Offset the draw position.
    pub fn move_by(&mut self, dx: u32, dy: u32) {
        self.pos_x = self.pos_x.saturating_add(dx);
        self.pos_y = self.pos_y.saturating_add(dy);
    }

    /// Set every texel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Set every alpha value, leaving colours untouched.
    pub fn set_alpha(&mut self, a: u8) {
        for px in &mut self.pixels {
            px.a = a;
        }
    }

    /// Colour-key transparency: every texel whose RGB equals `key` gets alpha `a`.
    pub fn set_color_to_alpha(&mut self, key: Color, a: u8) {
        for px in self.pixels.iter_mut().filter(|px| px.same_rgb(key)) {
            px.a = a;
        }
    }

    /// Change the logical size without resampling.
    ///
    /// Unless `clear` is set, the overlapping top-left region is copied verbatim; newly exposed
    /// texels are default-initialised (opaque black).
    pub fn set_size(&mut self, width: u32, height: u32, clear: bool) {
        let mut next = vec![Color::default(); area(width, height)];
        if !clear {
            let keep_w = self.width.min(width) as usize;
            let keep_h = self.height.min(height) as usize;
            for y in 0..keep_h {
                let src = y * self.width as usize;
                let dst = y * width as usize;
                next[dst..dst + keep_w].copy_from_slice(&self.pixels[src..src + keep_w]);
            }
        }
        self.replace_storage(width, height, next);
    }

    /// Mirror left-to-right.
    pub fn flip_horizontal(&mut self) {
        let w = self.width as usize;
        if w == 0 {
            return;
        }
        for row in self.pixels.chunks_exact_mut(w) {
            row.reverse();
        }
    }

    /// Mirror top-to-bottom.
    pub fn flip_vertical(&mut self) {
        let w = self.width as usize;
        let h = self.height as usize;
        for y in 0..h / 2 {
            let (top, bottom) = self.pixels.split_at_mut((h - y - 1) * w);
            top[y * w..(y + 1) * w].swap_with_slice(&mut bottom[..w]);
        }
    }

    /// Straight (non-premultiplied) RGBA8 bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            out.extend_from_slice(&[px.r, px.g, px.b, px.a]);
        }
        out
    }

    /// Swap in new storage of the given size in one step.
    pub(crate) fn replace_storage(&mut self, width: u32, height: u32, pixels: Vec<Color>) {
        debug_assert_eq!(pixels.len(), area(width, height));
        self.width = width;
        self.height = height;
        self.pixels = pixels;
    }
}

pub(crate) fn area(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
