use super::*;
use crate::foundation::color::Color;

fn doc(mode: PlaybackMode) -> AnimationDocument {
    AnimationDocument {
        version: 2,
        canvas_width: 4,
        canvas_height: 2,
        sheet: PixelBuffer::filled(8, 2, Color::WHITE),
        regions: vec![SubFrameRegion {
            src_x: 2,
            src_y: 0,
            dst_x: 1,
            dst_y: 1,
            width: 2,
            height: 1,
            axis: Axis::Horizontal,
            uses_transparency: true,
        }],
        frame_count: 3,
        frame_duration_ms: 100,
        mode,
        max_cycles: 2,
    }
}

#[test]
fn timing_helpers_double_for_ping_pong() {
    assert_eq!(doc(PlaybackMode::Loop).cycle_time_ms(), 300);
    assert_eq!(doc(PlaybackMode::Loop).total_time_ms(), 600);
    assert_eq!(doc(PlaybackMode::PingPong).cycle_time_ms(), 600);
    assert_eq!(doc(PlaybackMode::PingPong).total_time_ms(), 1200);
}

#[test]
fn region_source_steps_along_axis() {
    let mut r = doc(PlaybackMode::Loop).regions[0];
    assert_eq!(r.source_for_frame(0), Some((2, 0)));
    assert_eq!(r.source_for_frame(2), Some((6, 0)));
    r.axis = Axis::Vertical;
    assert_eq!(r.source_for_frame(2), Some((2, 2)));
    r.height = u32::MAX;
    assert_eq!(r.source_for_frame(2), None);
}

#[test]
fn scale_keeps_geometry_and_pixels_consistent() {
    let mut d = doc(PlaybackMode::Loop);
    assert!(d.scale(2.0, InterpolationMethod::NearestNeighbor).is_resized());
    assert_eq!(d.sheet.dimensions(), (16, 4));
    assert_eq!((d.canvas_width, d.canvas_height), (8, 4));
    let r = d.regions[0];
    assert_eq!((r.src_x, r.src_y, r.dst_x, r.dst_y), (4, 0, 2, 2));
    assert_eq!((r.width, r.height), (4, 2));
}

#[test]
fn scale_is_skipped_when_sheet_cannot_resize() {
    let mut d = doc(PlaybackMode::Loop);
    let before = d.clone();
    assert_eq!(
        d.scale(2.0, InterpolationMethod::AreaAveraging),
        ResizeOutcome::Unchanged
    );
    assert_eq!(d.scale(0.0, InterpolationMethod::Bilinear), ResizeOutcome::Unchanged);
    assert_eq!(d, before);
}

#[test]
fn info_serializes_to_json() {
    let info = doc(PlaybackMode::PingPong).info();
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["mode"], "ping_pong");
    assert_eq!(json["sheet_width"], 8);
    assert_eq!(json["regions"][0]["axis"], "horizontal");
    assert_eq!(json["total_time_ms"], 1200);
}
