use std::time::Duration;

use crate::animation::document::{AnimationDocument, PlaybackMode};
use crate::raster::buffer::PixelBuffer;
use crate::raster::resample::ResizeOutcome;
use crate::raster::sample::InterpolationMethod;

/// Ping-pong travel direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Towards the last frame.
    #[default]
    Forward,
    /// Towards frame 0.
    Backward,
}

/// Mutable playback state, separate from the document it plays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    /// Frame shown on the canvas.
    pub frame: u32,
    /// Ping-pong direction; ignored in loop mode.
    pub direction: Direction,
    /// Completed cycles.
    pub cycles: u32,
    /// Time accumulated towards the next frame advance.
    pub since_advance: Duration,
    /// Total time fed through [`AnimationPlayer::tick`].
    pub elapsed: Duration,
    /// Set once `elapsed` reaches the document's total time.
    pub finished: bool,
    /// No frame advance has happened yet.
    pub first_frame: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            frame: 0,
            direction: Direction::Forward,
            cycles: 0,
            since_advance: Duration::ZERO,
            elapsed: Duration::ZERO,
            finished: false,
            first_frame: true,
        }
    }
}

/// Drives an [`AnimationDocument`] over time and composites its current frame.
///
/// The canvas is rebuilt on every tick: the sheet's top-left corner is copied in as the
/// background, then each region's current cell is copied or alpha-blended on top.
#[derive(Clone, Debug)]
pub struct AnimationPlayer {
    doc: AnimationDocument,
    canvas: PixelBuffer,
    state: PlayerState,
    first_frame_drawn: bool,
}

impl AnimationPlayer {
    /// Take ownership of a document and compose frame 0.
    pub fn new(doc: AnimationDocument) -> Self {
        let canvas = PixelBuffer::new(doc.canvas_width, doc.canvas_height);
        let mut player = Self {
            doc,
            canvas,
            state: PlayerState::default(),
            first_frame_drawn: false,
        };
        player.compose();
        player
    }

    /// Advance by `delta` and recompose the canvas.
    ///
    /// Every full frame duration contained in the accumulated time advances one frame, so a
    /// long delta catches up several frames at once; the remainder carries over.
    pub fn tick(&mut self, delta: Duration) {
        self.state.elapsed = self.state.elapsed.saturating_add(delta);
        self.state.since_advance = self.state.since_advance.saturating_add(delta);

        let frame = self.doc.frame_duration();
        if !frame.is_zero() && self.doc.frame_count > 0 {
            let step_ns = frame.as_nanos();
            let acc_ns = self.state.since_advance.as_nanos();
            let steps = acc_ns / step_ns;
            // A whole period leaves frame and direction unchanged.
            let period = u128::from(self.steps_per_period());
            let periods = steps / period;
            if periods > 0 {
                self.state.first_frame = false;
                let gained = periods * u128::from(self.cycles_per_period());
                self.state.cycles = self
                    .state
                    .cycles
                    .saturating_add(u32::try_from(gained).unwrap_or(u32::MAX));
            }
            for _ in 0..steps % period {
                self.step();
            }
            self.state.since_advance = Duration::from_nanos((acc_ns % step_ns) as u64);
        }

        self.update_finished();
        self.compose();
    }

    /// Return to frame 0 with no elapsed time, keeping the document, and recompose frame 0.
    pub fn reset(&mut self) {
        self.state = PlayerState::default();
        self.compose();
    }

    /// Jump to `frame` modulo the frame count.
    pub fn set_frame(&mut self, frame: u32) {
        self.state.frame = frame.checked_rem(self.doc.frame_count).unwrap_or(0);
    }

    /// Step one frame forward, wrapping, without touching timing or cycles.
    pub fn advance_frame(&mut self) {
        let n = self.doc.frame_count;
        if n > 0 {
            self.state.frame = (self.state.frame + 1) % n;
        }
    }

    /// Step one frame back, wrapping, without touching timing or cycles.
    pub fn reverse_frame(&mut self) {
        let n = self.doc.frame_count;
        if n > 0 {
            self.state.frame = (self.state.frame + n - 1) % n;
        }
    }

    /// Change the cycle limit; 0 means play forever.
    pub fn set_max_cycles(&mut self, cycles: u8) {
        self.doc.max_cycles = cycles;
        self.update_finished();
    }

    /// Scale the document and canvas together, then recompose.
    pub fn scale(&mut self, factor: f32, method: InterpolationMethod) -> ResizeOutcome {
        let outcome = self.doc.scale(factor, method);
        if outcome.is_resized() {
            let pos = self.canvas.position();
            self.canvas = PixelBuffer::new(self.doc.canvas_width, self.doc.canvas_height);
            self.canvas.set_position(pos.0, pos.1);
            self.compose();
        }
        outcome
    }

    /// Set the canvas draw position.
    pub fn set_position(&mut self, x: u32, y: u32) {
        self.canvas.set_position(x, y);
    }

    /// Current frame index.
    pub fn current_frame(&self) -> u32 {
        self.state.frame
    }

    /// Frames per sweep.
    pub fn frame_count(&self) -> u32 {
        self.doc.frame_count
    }

    /// Completed cycles.
    pub fn current_cycle(&self) -> u32 {
        self.state.cycles
    }

    /// Cycle limit (0 = unbounded).
    pub fn max_cycles(&self) -> u8 {
        self.doc.max_cycles
    }

    /// Milliseconds per cycle.
    pub fn cycle_time_ms(&self) -> u64 {
        self.doc.cycle_time_ms()
    }

    /// Milliseconds until finished (0 = unbounded).
    pub fn total_time_ms(&self) -> u64 {
        self.doc.total_time_ms()
    }

    /// Total time ticked since construction or the last reset.
    pub fn elapsed(&self) -> Duration {
        self.state.elapsed
    }

    /// Whether the cycle limit's total time has been reached. Playback continues regardless.
    pub fn is_finished(&self) -> bool {
        self.state.finished
    }

    /// Whether no frame advance has happened since construction or reset.
    pub fn is_first_frame(&self) -> bool {
        self.state.first_frame
    }

    /// Whether the canvas holds a composed frame. Construction and [`AnimationPlayer::reset`]
    /// both compose frame 0, so this is true from then on.
    pub fn is_first_frame_drawn(&self) -> bool {
        self.first_frame_drawn
    }

    /// Playback state.
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// The document being played.
    pub fn document(&self) -> &AnimationDocument {
        &self.doc
    }

    /// Composited output for the current frame.
    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    /// Source sprite sheet.
    pub fn sheet(&self) -> &PixelBuffer {
        &self.doc.sheet
    }

    /// Release the document.
    pub fn into_document(self) -> AnimationDocument {
        self.doc
    }

    fn steps_per_period(&self) -> u32 {
        let n = self.doc.frame_count.max(1);
        match self.doc.mode {
            PlaybackMode::Loop => n,
            PlaybackMode::PingPong => 2 * (n - 1).max(1),
        }
    }

    fn cycles_per_period(&self) -> u32 {
        u32::from(self.doc.frame_count >= 2)
    }

    fn step(&mut self) {
        let n = self.doc.frame_count;
        let st = &mut self.state;
        st.first_frame = false;
        match self.doc.mode {
            PlaybackMode::Loop => {
                st.frame += 1;
                if st.frame == n - 1 {
                    st.cycles += 1;
                }
                st.frame %= n;
            }
            PlaybackMode::PingPong => {
                if n <= 1 {
                    return;
                }
                match st.direction {
                    Direction::Forward => {
                        st.frame += 1;
                        if st.frame >= n - 1 {
                            st.frame = n - 1;
                            st.direction = Direction::Backward;
                        }
                    }
                    Direction::Backward => {
                        st.frame = st.frame.saturating_sub(1);
                        if st.frame == 0 {
                            st.direction = Direction::Forward;
                            st.cycles += 1;
                        }
                    }
                }
            }
        }
    }

    fn update_finished(&mut self) {
        let total = self.doc.total_time_ms();
        self.state.finished =
            self.doc.max_cycles > 0 && self.state.elapsed.as_millis() >= u128::from(total);
    }

    fn compose(&mut self) {
        let (w, h) = self.canvas.dimensions();
        self.canvas
            .copy_region(&self.doc.sheet, (0, 0), (0, 0), (w, h), false);

        let blend_allowed = self.doc.supports_transparency();
        for region in &self.doc.regions {
            let Some(src) = region.source_for_frame(self.state.frame) else {
                continue;
            };
            let dst = (region.dst_x, region.dst_y);
            let size = (region.width, region.height);
            if blend_allowed && region.uses_transparency {
                self.canvas
                    .blend_region(&self.doc.sheet, dst, src, size, true, true);
            } else {
                self.canvas
                    .copy_region(&self.doc.sheet, dst, src, size, false);
            }
        }
        self.first_frame_drawn = true;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/player.rs"]
mod tests;
