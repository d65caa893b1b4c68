//! Reader and writer for the sprite animation container.
//!
//! Layout (all integers little-endian):
//!
//! ```text
//! version        u8          1, or >= 2 for the run-length layout
//! canvas         u32 x2
//! sheet          u32 x2
//! pixels         v1: width*height records
//!                v2: (count u8, record) runs until width*height texels
//! frame count    v1: u8      v2: u32
//! frame ms       u32
//! mode           u8          1 = ping-pong, anything else = loop
//! max cycles     u8          v2 only
//! region count   u8
//! regions        6 x u32, axis u8 (1 = vertical), v2: transparency u8 (1 = on)
//! ```
//!
//! A texel record is 8 bytes: `0x00RRGGBB` as u32, the alpha byte and three bytes of padding.

use std::io::{self, Cursor, Read, Write};
use std::path::Path;

use crate::animation::document::{AnimationDocument, Axis, PlaybackMode, SubFrameRegion};
use crate::foundation::color::Color;
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::raster::buffer::{PixelBuffer, area};

/// Size of one texel record.
pub const TEXEL_RECORD_SIZE: usize = 8;
/// Longest run a single v2 record can describe.
pub const MAX_RUN: usize = u8::MAX as usize;
/// Conventional file extension.
pub const ANIMATION_EXTENSION: &str = "cgai";

const PREALLOC_LIMIT: usize = 1 << 20;

/// Decode a container held in memory.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_animation(bytes: &[u8]) -> SpriteResult<AnimationDocument> {
    let mut cursor = Cursor::new(bytes);
    let doc = AnimationDocument::read_from(&mut cursor)?;
    let trailing = bytes.len() as u64 - cursor.position();
    if trailing > 0 {
        tracing::debug!(trailing, "ignoring bytes after the last region");
    }
    Ok(doc)
}

/// Read and decode a container file. GIF files are rejected before they are opened.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_animation(path: impl AsRef<Path>) -> SpriteResult<AnimationDocument> {
    let path = path.as_ref();
    let is_gif = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gif"));
    if is_gif {
        return Err(SpriteError::unsupported(format!(
            "GIF animations are not decoded: '{}'",
            path.display()
        )));
    }
    let bytes = std::fs::read(path)?;
    decode_animation(&bytes)
}

/// Serialize a document in the layout its `version` selects.
///
/// Fails when a field does not fit that layout (v1 frame count above 255, more than 255
/// regions, version 0).
pub fn encode_animation(doc: &AnimationDocument) -> SpriteResult<Vec<u8>> {
    if doc.version == 0 {
        return Err(SpriteError::validation("container version 0 does not exist"));
    }
    if doc.version == 1 && doc.frame_count > u32::from(u8::MAX) {
        return Err(SpriteError::validation(format!(
            "version 1 stores at most 255 frames, document has {}",
            doc.frame_count
        )));
    }
    if doc.regions.len() > usize::from(u8::MAX) {
        return Err(SpriteError::validation(format!(
            "at most 255 regions can be stored, document has {}",
            doc.regions.len()
        )));
    }
    let mut out = Vec::new();
    doc.write_to(&mut out)?;
    Ok(out)
}

impl AnimationDocument {
    /// Parse a container from a byte stream. Nothing is returned unless every field was read.
    pub fn read_from<R: Read>(r: &mut R) -> SpriteResult<Self> {
        let version = read_u8(r, "version")?;
        if version == 0 {
            return Err(SpriteError::unsupported("container version 0"));
        }
        let canvas_width = read_u32(r, "canvas width")?;
        let canvas_height = read_u32(r, "canvas height")?;
        let sheet_width = read_u32(r, "sheet width")?;
        let sheet_height = read_u32(r, "sheet height")?;

        let texels = area(sheet_width, sheet_height);
        let pixels = if version == 1 {
            read_raw_texels(r, texels)?
        } else {
            read_rle_texels(r, texels)?
        };
        let sheet = PixelBuffer::from_pixels(sheet_width, sheet_height, pixels)?;

        let frame_count = if version == 1 {
            u32::from(read_u8(r, "frame count")?)
        } else {
            read_u32(r, "frame count")?
        };
        let frame_duration_ms = read_u32(r, "frame duration")?;
        let mode = match read_u8(r, "playback mode")? {
            1 => PlaybackMode::PingPong,
            _ => PlaybackMode::Loop,
        };
        let max_cycles = if version >= 2 {
            read_u8(r, "max cycles")?
        } else {
            0
        };

        let region_count = read_u8(r, "region count")?;
        let mut regions = Vec::with_capacity(usize::from(region_count));
        for _ in 0..region_count {
            regions.push(read_region(r, version)?);
        }

        tracing::debug!(
            version,
            canvas_width,
            canvas_height,
            sheet_width,
            sheet_height,
            frame_count,
            frame_duration_ms,
            ?mode,
            max_cycles,
            region_count,
            "animation container"
        );

        Ok(Self {
            version,
            canvas_width,
            canvas_height,
            sheet,
            regions,
            frame_count,
            frame_duration_ms,
            mode,
            max_cycles,
        })
    }

    /// Write the container layout selected by `version`.
    ///
    /// Frame and region counts wider than their v1 fields are truncated; use
    /// [`encode_animation`] for a checked encode.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&[self.version])?;
        w.write_all(&self.canvas_width.to_le_bytes())?;
        w.write_all(&self.canvas_height.to_le_bytes())?;
        w.write_all(&self.sheet.width().to_le_bytes())?;
        w.write_all(&self.sheet.height().to_le_bytes())?;

        if self.version == 1 {
            for &px in self.sheet.pixels() {
                write_texel(w, px)?;
            }
            w.write_all(&[self.frame_count as u8])?;
        } else {
            for run in self.sheet.pixels().chunk_by(|a, b| a == b) {
                for part in run.chunks(MAX_RUN) {
                    w.write_all(&[part.len() as u8])?;
                    write_texel(w, part[0])?;
                }
            }
            w.write_all(&self.frame_count.to_le_bytes())?;
        }

        w.write_all(&self.frame_duration_ms.to_le_bytes())?;
        let mode = match self.mode {
            PlaybackMode::Loop => 0u8,
            PlaybackMode::PingPong => 1u8,
        };
        w.write_all(&[mode])?;
        if self.version >= 2 {
            w.write_all(&[self.max_cycles])?;
        }

        w.write_all(&[self.regions.len() as u8])?;
        for region in &self.regions {
            for v in [
                region.src_x,
                region.src_y,
                region.dst_x,
                region.dst_y,
                region.width,
                region.height,
            ] {
                w.write_all(&v.to_le_bytes())?;
            }
            w.write_all(&[u8::from(region.axis == Axis::Vertical)])?;
            if self.version >= 2 {
                w.write_all(&[u8::from(region.uses_transparency)])?;
            }
        }
        Ok(())
    }
}

fn read_raw_texels<R: Read>(r: &mut R, texels: usize) -> SpriteResult<Vec<Color>> {
    let mut pixels = Vec::with_capacity(texels.min(PREALLOC_LIMIT));
    for _ in 0..texels {
        pixels.push(read_texel(r)?);
    }
    Ok(pixels)
}

fn read_rle_texels<R: Read>(r: &mut R, texels: usize) -> SpriteResult<Vec<Color>> {
    let mut pixels = Vec::with_capacity(texels.min(PREALLOC_LIMIT));
    while pixels.len() < texels {
        let count = usize::from(read_u8(r, "run length")?);
        if count == 0 {
            return Err(SpriteError::format(format!(
                "zero-length run at texel {}",
                pixels.len()
            )));
        }
        let px = read_texel(r)?;
        if pixels.len() + count > texels {
            return Err(SpriteError::format(format!(
                "run of {count} at texel {} overflows the {texels}-texel sheet",
                pixels.len()
            )));
        }
        pixels.resize(pixels.len() + count, px);
    }
    Ok(pixels)
}

fn read_region<R: Read>(r: &mut R, version: u8) -> SpriteResult<SubFrameRegion> {
    let mut fields = [0u32; 6];
    for f in &mut fields {
        *f = read_u32(r, "region geometry")?;
    }
    let [src_x, src_y, dst_x, dst_y, width, height] = fields;
    let axis = match read_u8(r, "region axis")? {
        1 => Axis::Vertical,
        _ => Axis::Horizontal,
    };
    let uses_transparency = version >= 2 && read_u8(r, "region transparency")? == 1;
    Ok(SubFrameRegion {
        src_x,
        src_y,
        dst_x,
        dst_y,
        width,
        height,
        axis,
        uses_transparency,
    })
}

fn read_texel<R: Read>(r: &mut R) -> SpriteResult<Color> {
    let mut buf = [0u8; TEXEL_RECORD_SIZE];
    r.read_exact(&mut buf)
        .map_err(|e| SpriteError::from_read(e, "texel record"))?;
    let rgb = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    Ok(Color::from_rgb_u32(rgb, buf[4]))
}

fn write_texel<W: Write>(w: &mut W, px: Color) -> io::Result<()> {
    w.write_all(&px.to_rgb_u32().to_le_bytes())?;
    w.write_all(&[px.a, 0, 0, 0])
}

fn read_u8<R: Read>(r: &mut R, what: &str) -> SpriteResult<u8> {
    let mut buf1 = [0u8; 1];
    r.read_exact(&mut buf1)
        .map_err(|e| SpriteError::from_read(e, what))?;
    Ok(buf1[0])
}

fn read_u32<R: Read>(r: &mut R, what: &str) -> SpriteResult<u32> {
    let mut buf4 = [0u8; 4];
    r.read_exact(&mut buf4)
        .map_err(|e| SpriteError::from_read(e, what))?;
    Ok(u32::from_le_bytes(buf4))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/format.rs"]
mod tests;
