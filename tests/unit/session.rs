use super::*;
use crate::animation::document::{Axis, PlaybackMode, SubFrameRegion};
use crate::foundation::color::Color;
use crate::raster::buffer::PixelBuffer;
use crate::raster::sample::InterpolationMethod;
use crate::render::present::InMemoryPresenter;

const CELLS: [Color; 3] = [
    Color::rgba(255, 0, 0, 255),
    Color::rgba(0, 255, 0, 255),
    Color::rgba(0, 0, 255, 255),
];

/// 1x1 canvas whose region walks three single-texel cells at x = 1..=3.
fn doc() -> AnimationDocument {
    let mut sheet = PixelBuffer::filled(4, 1, Color::BLACK);
    for (x, c) in (1u32..).zip(CELLS) {
        sheet.set_pixel(x, 0, c);
    }
    AnimationDocument {
        version: 2,
        canvas_width: 1,
        canvas_height: 1,
        sheet,
        regions: vec![SubFrameRegion {
            src_x: 1,
            src_y: 0,
            dst_x: 0,
            dst_y: 0,
            width: 1,
            height: 1,
            axis: Axis::Horizontal,
            uses_transparency: false,
        }],
        frame_count: 3,
        frame_duration_ms: 100,
        mode: PlaybackMode::Loop,
        max_cycles: 1,
    }
}

#[test]
fn run_presents_every_tick() {
    let cfg = ExportConfig {
        ticks: 4,
        tick_ms: 100,
        ..ExportConfig::default()
    };
    let mut session = PlaybackSession::new(doc(), cfg).unwrap();
    let mut sink = InMemoryPresenter::new();
    let stats = session.run(&mut sink).unwrap();

    assert_eq!(stats.frames_presented, 4);
    assert_eq!(sink.size(), Some((1, 1)));
    assert!(sink.is_ended());
    let shown: Vec<Color> = sink
        .frames()
        .iter()
        .map(|(_, f)| f.get_pixel(0, 0).unwrap())
        .collect();
    assert_eq!(shown, vec![CELLS[0], CELLS[1], CELLS[2], CELLS[0]]);
    assert!(stats.finished);
    assert_eq!(stats.last_frame, 0);
}

#[test]
fn surface_size_and_background_follow_config() {
    let cfg = ExportConfig {
        width: Some(3),
        height: Some(2),
        background: Color::rgb(9, 9, 9),
        ..ExportConfig::default()
    };
    let mut session = PlaybackSession::new(doc(), cfg).unwrap();
    session.player_mut().set_position(1, 1);
    session.step(Duration::ZERO);

    let frame = session.surface().frame();
    assert_eq!(frame.dimensions(), (3, 2));
    assert_eq!(frame.get_pixel(0, 0), Some(Color::rgb(9, 9, 9)));
    assert_eq!(frame.get_pixel(1, 1), Some(CELLS[0]));
}

#[test]
fn scale_grows_the_default_surface() {
    let cfg = ExportConfig {
        scale: 2.0,
        method: InterpolationMethod::NearestNeighbor,
        ..ExportConfig::default()
    };
    let session = PlaybackSession::new(doc(), cfg).unwrap();
    assert_eq!(session.surface().width(), 2);
    assert_eq!(session.player().canvas().get_pixel(1, 1), Some(CELLS[0]));
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = ExportConfig {
        scale: -1.0,
        ..ExportConfig::default()
    };
    assert!(PlaybackSession::new(doc(), cfg).is_err());
}
