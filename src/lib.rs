//! Spritely is a software 2D pixel-buffer and sprite-sheet animation engine.
//!
//! Everything runs on the CPU, single-threaded, over plain `Vec`-backed texel grids:
//!
//! - Build or decode a [`PixelBuffer`] (see [`load_image`] for bitmaps)
//! - Sample, resize, filter and composite buffers
//! - Decode an [`AnimationDocument`] and play it with an [`AnimationPlayer`]
//! - Draw onto a [`Surface`] and hand frames to a [`Presenter`], or let a [`PlaybackSession`]
//!   do all of that from an [`ExportConfig`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod composite;
mod config;
mod foundation;
mod raster;
mod render;
mod session;

pub use crate::foundation::color::Color;
pub use crate::foundation::error::{SpriteError, SpriteResult};

pub use crate::raster::buffer::{DEFAULT_BUFFER_SIDE, PixelBuffer};
pub use crate::raster::filter::{FilterType, PixelTransform};
pub use crate::raster::resample::ResizeOutcome;
pub use crate::raster::sample::{ExtrapolationMethod, InterpolationMethod};

pub use crate::composite::blend::{blend_channel, blend_color, composite_texel};

pub use crate::assets::bmp::{BitmapHeader, decode_bmp};
pub use crate::assets::load::{ImageKind, load_image};

pub use crate::animation::document::{
    AnimationDocument, AnimationInfo, Axis, PlaybackMode, SubFrameRegion,
};
pub use crate::animation::format::{
    ANIMATION_EXTENSION, MAX_RUN, TEXEL_RECORD_SIZE, decode_animation, encode_animation,
    load_animation,
};
pub use crate::animation::player::{AnimationPlayer, Direction, PlayerState};

pub use crate::render::present::{InMemoryPresenter, PngSequencePresenter, Presenter};
pub use crate::render::surface::{DrawType, Surface};

pub use crate::config::ExportConfig;
pub use crate::session::{PlaybackSession, PlaybackStats};
