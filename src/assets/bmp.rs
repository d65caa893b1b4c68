use crate::foundation::color::Color;
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::raster::buffer::PixelBuffer;

const MAGIC: &[u8; 2] = b"BM";
const OFF_FILE_SIZE: usize = 0x02;
const OFF_PIXEL_DATA: usize = 0x0A;
const OFF_WIDTH: usize = 0x12;
const OFF_HEIGHT: usize = 0x16;
const OFF_BPP: usize = 0x1C;
const OFF_COMPRESSION: usize = 0x1E;
/// Smallest header that still carries the bits-per-pixel field.
const MIN_HEADER_LEN: usize = OFF_BPP + 2;

const BI_RGB: u32 = 0;
const BI_BITFIELDS: u32 = 3;

/// Header fields the decoder relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapHeader {
    /// File size as recorded in the header (informational).
    pub file_size: u32,
    /// Byte offset of the first pixel row.
    pub pixel_offset: u32,
    /// Width in pixels.
    pub width: u32,
    /// Signed height; positive means rows are stored bottom-up.
    pub height: i32,
    /// 24 or 32.
    pub bits_per_pixel: u16,
    /// `BI_RGB` (0) or, for 32-bit files, `BI_BITFIELDS` (3).
    pub compression: u32,
}

impl BitmapHeader {
    /// Parse and validate the fixed-offset header fields.
    pub fn parse(bytes: &[u8]) -> SpriteResult<Self> {
        if bytes.len() < MIN_HEADER_LEN {
            return Err(SpriteError::format(format!(
                "bitmap header needs at least {MIN_HEADER_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        if &bytes[..2] != MAGIC {
            return Err(SpriteError::format("missing 'BM' bitmap signature"));
        }

        let width = le_i32(bytes, OFF_WIDTH);
        if width < 0 {
            return Err(SpriteError::format(format!("negative bitmap width {width}")));
        }
        let bits_per_pixel = le_u16(bytes, OFF_BPP);
        let compression = if bytes.len() >= OFF_COMPRESSION + 4 {
            le_u32(bytes, OFF_COMPRESSION)
        } else {
            BI_RGB
        };

        let header = Self {
            file_size: le_u32(bytes, OFF_FILE_SIZE),
            pixel_offset: le_u32(bytes, OFF_PIXEL_DATA),
            width: width as u32,
            height: le_i32(bytes, OFF_HEIGHT),
            bits_per_pixel,
            compression,
        };

        if !matches!(bits_per_pixel, 24 | 32) {
            return Err(SpriteError::unsupported(format!(
                "{bits_per_pixel}-bit bitmaps (only 24 and 32 are decoded)"
            )));
        }
        let compression_ok = compression == BI_RGB
            || (compression == BI_BITFIELDS && bits_per_pixel == 32);
        if !compression_ok {
            return Err(SpriteError::unsupported(format!(
                "bitmap compression {compression}"
            )));
        }
        Ok(header)
    }

    /// Number of pixel rows.
    pub fn rows(&self) -> u32 {
        self.height.unsigned_abs()
    }

    /// Whether rows are stored bottom-up.
    pub fn is_bottom_up(&self) -> bool {
        self.height > 0
    }

    /// Bytes per stored row, padded to a multiple of four.
    pub fn stride(&self) -> usize {
        let bytes_per_pixel = usize::from(self.bits_per_pixel / 8);
        (self.width as usize * bytes_per_pixel + 3) & !3
    }
}

/// Decode an uncompressed 24/32-bit bitmap into a top-down buffer.
///
/// 24-bit texels are opaque; 32-bit texels carry their stored alpha byte.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_bmp(bytes: &[u8]) -> SpriteResult<PixelBuffer> {
    let header = BitmapHeader::parse(bytes)?;
    tracing::debug!(
        file_size = header.file_size,
        pixel_offset = header.pixel_offset,
        width = header.width,
        height = header.height,
        bits_per_pixel = header.bits_per_pixel,
        compression = header.compression,
        "bitmap header"
    );

    let width = header.width;
    let rows = header.rows();
    let stride = header.stride();
    let start = header.pixel_offset as usize;
    let needed = stride
        .checked_mul(rows as usize)
        .and_then(|n| n.checked_add(start))
        .ok_or_else(|| SpriteError::format("bitmap dimensions overflow"))?;
    if bytes.len() < needed {
        return Err(SpriteError::format(format!(
            "bitmap pixel data truncated: need {needed} bytes, have {}",
            bytes.len()
        )));
    }

    let bpp = usize::from(header.bits_per_pixel / 8);
    let mut pixels = Vec::with_capacity(width as usize * rows as usize);
    for row in bytes[start..needed].chunks_exact(stride.max(1)).take(rows as usize) {
        for px in row[..width as usize * bpp].chunks_exact(bpp) {
            let a = if bpp == 4 { px[3] } else { 255 };
            pixels.push(Color::rgba(px[2], px[1], px[0], a));
        }
    }

    let mut buffer = PixelBuffer::from_pixels(width, rows, pixels)?;
    if header.is_bottom_up() {
        buffer.flip_vertical();
    }
    Ok(buffer)
}

fn le_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn le_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

fn le_i32(bytes: &[u8], at: usize) -> i32 {
    le_u32(bytes, at) as i32
}

#[cfg(test)]
#[path = "../../tests/unit/assets/bmp.rs"]
mod tests;
