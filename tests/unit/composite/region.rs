use super::*;

fn sheet() -> PixelBuffer {
    let pixels = (0..16u8)
        .map(|i| Color::rgba(i * 10, i, 255 - i, 100 + i))
        .collect();
    PixelBuffer::from_pixels(4, 4, pixels).unwrap()
}

#[test]
fn copy_region_overwrites_window_with_source_alpha() {
    let src = sheet();
    let mut dst = PixelBuffer::filled(3, 3, Color::rgba(1, 1, 1, 255));
    dst.copy_region(&src, (1, 1), (2, 1), (2, 2), false);

    assert_eq!(dst.get_pixel(0, 0), Some(Color::rgba(1, 1, 1, 255)));
    assert_eq!(dst.get_pixel(1, 1), src.get_pixel(2, 1));
    assert_eq!(dst.get_pixel(2, 1), src.get_pixel(3, 1));
    assert_eq!(dst.get_pixel(1, 2), src.get_pixel(2, 2));
    assert_eq!(dst.get_pixel(2, 2), src.get_pixel(3, 2));
}

#[test]
fn copy_region_can_keep_destination_alpha() {
    let src = sheet();
    let mut dst = PixelBuffer::filled(2, 2, Color::rgba(0, 0, 0, 7));
    dst.copy_region(&src, (0, 0), (0, 0), (2, 2), true);
    let s = src.get_pixel(1, 1).unwrap();
    assert_eq!(dst.get_pixel(1, 1), Some(s.with_alpha(7)));
}

#[test]
fn region_ops_skip_out_of_range_cells() {
    let src = sheet();
    let mut dst = PixelBuffer::filled(3, 3, Color::WHITE);
    // Window runs past both buffers; only the overlapping cells change.
    dst.copy_region(&src, (2, 2), (3, 3), (5, 5), false);
    assert_eq!(dst.get_pixel(2, 2), src.get_pixel(3, 3));
    assert_eq!(dst.get_pixel(1, 2), Some(Color::WHITE));
    assert_eq!(dst.get_pixel(2, 1), Some(Color::WHITE));

    let before = dst.clone();
    dst.blend_region(&src, (10, 10), (0, 0), (2, 2), true, true);
    dst.copy_region(&src, (0, 0), (u32::MAX, 0), (2, 2), false);
    assert_eq!(dst, before);
}

#[test]
fn blend_region_masks_transparent_source() {
    let mut src = PixelBuffer::filled(2, 1, Color::rgba(200, 200, 200, 0));
    src.set_pixel(1, 0, Color::rgba(255, 0, 0, 255));
    let mut dst = PixelBuffer::filled(2, 1, Color::rgba(10, 20, 30, 90));

    dst.blend_region(&src, (0, 0), (0, 0), (2, 1), false, true);
    // Transparent source: colour untouched and alpha restored.
    assert_eq!(dst.get_pixel(0, 0), Some(Color::rgba(10, 20, 30, 90)));
    // Opaque source: colour replaced, alpha taken from the source.
    assert_eq!(dst.get_pixel(1, 0), Some(Color::rgba(255, 0, 0, 255)));
}

#[test]
fn blend_region_without_mask_lets_transparent_source_clear_alpha() {
    let src = PixelBuffer::filled(1, 1, Color::rgba(200, 200, 200, 0));
    let mut dst = PixelBuffer::filled(1, 1, Color::rgba(10, 20, 30, 90));
    dst.blend_region(&src, (0, 0), (0, 0), (1, 1), false, false);
    assert_eq!(dst.get_pixel(0, 0), Some(Color::rgba(10, 20, 30, 0)));
}

#[test]
fn blend_region_half_coverage() {
    let src = PixelBuffer::filled(1, 1, Color::rgba(255, 255, 255, 51));
    let mut dst = PixelBuffer::filled(1, 1, Color::rgba(0, 0, 0, 255));
    dst.blend_region(&src, (0, 0), (0, 0), (1, 1), true, true);
    assert_eq!(dst.get_pixel(0, 0), Some(Color::rgba(51, 51, 51, 255)));
}
