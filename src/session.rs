use std::time::Duration;

use crate::animation::document::AnimationDocument;
use crate::animation::player::AnimationPlayer;
use crate::config::ExportConfig;
use crate::foundation::error::SpriteResult;
use crate::render::present::Presenter;
use crate::render::surface::Surface;

/// Summary of one [`PlaybackSession::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackStats {
    /// Frames handed to the presenter.
    pub frames_presented: u64,
    /// Player frame shown last.
    pub last_frame: u32,
    /// Cycles completed by the end of the run.
    pub cycles: u32,
    /// Whether the animation reached its cycle limit.
    pub finished: bool,
}

/// Player, surface and export settings wired together.
///
/// Each step clears the surface to the configured background, draws the player's canvas at its
/// draw position and presents the surface.
#[derive(Clone, Debug)]
pub struct PlaybackSession {
    player: AnimationPlayer,
    surface: Surface,
    config: ExportConfig,
}

impl PlaybackSession {
    /// Validate `config`, scale the animation and size the surface.
    pub fn new(doc: AnimationDocument, config: ExportConfig) -> SpriteResult<Self> {
        config.validate()?;
        let mut player = AnimationPlayer::new(doc);
        if config.scale != 1.0 && !player.scale(config.scale, config.method).is_resized() {
            tracing::warn!(
                scale = config.scale,
                method = ?config.method,
                "animation scale skipped"
            );
        }

        let (cw, ch) = player.canvas().dimensions();
        let mut surface = Surface::new(config.width.unwrap_or(cw), config.height.unwrap_or(ch));
        if config.alpha_mode {
            surface.enable_alpha();
        }
        Ok(Self {
            player,
            surface,
            config,
        })
    }

    /// The player driving the session.
    pub fn player(&self) -> &AnimationPlayer {
        &self.player
    }

    /// Mutable player access, e.g. to position the canvas or seek.
    pub fn player_mut(&mut self) -> &mut AnimationPlayer {
        &mut self.player
    }

    /// The surface as last drawn.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Active settings.
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Advance the player by `delta` and redraw the surface.
    pub fn step(&mut self, delta: Duration) {
        self.player.tick(delta);
        self.surface.clear_color(self.config.background);
        self.surface.draw(self.player.canvas());
    }

    /// Render `config.ticks` frames into `presenter`.
    ///
    /// The first frame shows the animation as loaded; every later frame advances the player by
    /// `tick_ms`.
    #[tracing::instrument(skip(self, presenter), fields(ticks = self.config.ticks))]
    pub fn run(&mut self, presenter: &mut dyn Presenter) -> SpriteResult<PlaybackStats> {
        let delta = Duration::from_millis(u64::from(self.config.tick_ms));
        presenter.begin(self.surface.width(), self.surface.height())?;
        let mut presented = 0u64;
        for i in 0..u64::from(self.config.ticks) {
            self.step(if i == 0 { Duration::ZERO } else { delta });
            presenter.present(i, self.surface.frame())?;
            presented += 1;
        }
        presenter.end()?;

        let stats = PlaybackStats {
            frames_presented: presented,
            last_frame: self.player.current_frame(),
            cycles: self.player.current_cycle(),
            finished: self.player.is_finished(),
        };
        tracing::debug!(?stats, "playback run complete");
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
