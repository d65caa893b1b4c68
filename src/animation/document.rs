use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::foundation::math::scale_u32;
use crate::raster::buffer::PixelBuffer;
use crate::raster::resample::ResizeOutcome;
use crate::raster::sample::InterpolationMethod;

/// Direction a region's window steps through the sheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Cells are laid out left to right.
    #[default]
    Horizontal,
    /// Cells are laid out top to bottom.
    Vertical,
}

/// How playback continues after the last frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackMode {
    /// Wrap to frame 0.
    #[default]
    Loop,
    /// Reverse direction at either end.
    PingPong,
}

impl PlaybackMode {
    /// Frame sweeps per cycle: 2 for ping-pong, 1 for loop.
    pub fn sweeps_per_cycle(self) -> u32 {
        match self {
            Self::Loop => 1,
            Self::PingPong => 2,
        }
    }
}

/// One animated window of the sprite sheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubFrameRegion {
    /// Left edge of frame 0 in the sheet.
    pub src_x: u32,
    /// Top edge of frame 0 in the sheet.
    pub src_y: u32,
    /// Left edge on the canvas.
    pub dst_x: u32,
    /// Top edge on the canvas.
    pub dst_y: u32,
    /// Cell width.
    pub width: u32,
    /// Cell height.
    pub height: u32,
    /// Stepping direction.
    pub axis: Axis,
    /// Alpha-blend onto the canvas instead of copying.
    pub uses_transparency: bool,
}

impl SubFrameRegion {
    /// Sheet position of the cell shown at `frame`, or `None` if it does not fit in `u32`.
    pub fn source_for_frame(&self, frame: u32) -> Option<(u32, u32)> {
        match self.axis {
            Axis::Horizontal => {
                let dx = frame.checked_mul(self.width)?;
                Some((self.src_x.checked_add(dx)?, self.src_y))
            }
            Axis::Vertical => {
                let dy = frame.checked_mul(self.height)?;
                Some((self.src_x, self.src_y.checked_add(dy)?))
            }
        }
    }

    fn scale(&mut self, factor: f32) {
        self.src_x = scale_u32(self.src_x, factor);
        self.src_y = scale_u32(self.src_y, factor);
        self.dst_x = scale_u32(self.dst_x, factor);
        self.dst_y = scale_u32(self.dst_y, factor);
        self.width = scale_u32(self.width, factor);
        self.height = scale_u32(self.height, factor);
    }
}

/// A decoded sprite-sheet animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationDocument {
    /// Container generation (1, or 2 and above).
    pub version: u8,
    /// Width of the composited output.
    pub canvas_width: u32,
    /// Height of the composited output.
    pub canvas_height: u32,
    /// Source sheet holding the background and every frame cell.
    pub sheet: PixelBuffer,
    /// Animated windows, drawn in order.
    pub regions: Vec<SubFrameRegion>,
    /// Frames per sweep.
    pub frame_count: u32,
    /// Display time of one frame in milliseconds.
    pub frame_duration_ms: u32,
    /// Loop or ping-pong.
    pub mode: PlaybackMode,
    /// Cycles before the animation reports finished; 0 means never.
    pub max_cycles: u8,
}

impl AnimationDocument {
    /// Whether regions may request alpha blending (version 2 and above).
    pub fn supports_transparency(&self) -> bool {
        self.version >= 2
    }

    /// Per-frame display time.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.frame_duration_ms))
    }

    /// Length of one cycle: `duration * frames`, doubled for ping-pong.
    pub fn cycle_time_ms(&self) -> u64 {
        u64::from(self.frame_duration_ms)
            * u64::from(self.frame_count)
            * u64::from(self.mode.sweeps_per_cycle())
    }

    /// Length of the whole animation: one cycle times `max_cycles` (0 when unbounded).
    pub fn total_time_ms(&self) -> u64 {
        self.cycle_time_ms() * u64::from(self.max_cycles)
    }

    /// Uniformly scale the sheet, the canvas size and every region field.
    ///
    /// Geometry is truncated the same way the sheet dimensions are, so region windows keep
    /// addressing the same cells. Non-positive factors are ignored.
    pub fn scale(&mut self, factor: f32, method: InterpolationMethod) -> ResizeOutcome {
        if !(factor > 0.0) {
            return ResizeOutcome::Unchanged;
        }
        let (w, h) = (
            scale_u32(self.sheet.width(), factor),
            scale_u32(self.sheet.height(), factor),
        );
        if self.sheet.resize(w, h, method) == ResizeOutcome::Unchanged {
            return ResizeOutcome::Unchanged;
        }
        self.canvas_width = scale_u32(self.canvas_width, factor);
        self.canvas_height = scale_u32(self.canvas_height, factor);
        for region in &mut self.regions {
            region.scale(factor);
        }
        ResizeOutcome::Resized
    }

    /// Serializable metadata summary.
    pub fn info(&self) -> AnimationInfo {
        AnimationInfo {
            version: self.version,
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            sheet_width: self.sheet.width(),
            sheet_height: self.sheet.height(),
            frame_count: self.frame_count,
            frame_duration_ms: self.frame_duration_ms,
            mode: self.mode,
            max_cycles: self.max_cycles,
            cycle_time_ms: self.cycle_time_ms(),
            total_time_ms: self.total_time_ms(),
            regions: self.regions.clone(),
        }
    }
}

/// Everything about a document except its pixels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationInfo {
    /// Container generation.
    pub version: u8,
    /// Canvas width.
    pub canvas_width: u32,
    /// Canvas height.
    pub canvas_height: u32,
    /// Sheet width.
    pub sheet_width: u32,
    /// Sheet height.
    pub sheet_height: u32,
    /// Frames per sweep.
    pub frame_count: u32,
    /// Milliseconds per frame.
    pub frame_duration_ms: u32,
    /// Playback mode.
    pub mode: PlaybackMode,
    /// Cycle limit, 0 for unbounded.
    pub max_cycles: u8,
    /// Milliseconds per cycle.
    pub cycle_time_ms: u64,
    /// Milliseconds until finished, 0 for unbounded.
    pub total_time_ms: u64,
    /// Animated regions.
    pub regions: Vec<SubFrameRegion>,
}

#[cfg(test)]
#[path = "../../tests/unit/animation/document.rs"]
mod tests;
