use super::*;

fn numbered(width: u32, height: u32) -> PixelBuffer {
    let pixels = (0..width * height)
        .map(|i| Color::rgba(i as u8, 0, 0, 255))
        .collect();
    PixelBuffer::from_pixels(width, height, pixels).unwrap()
}

#[test]
fn default_is_256_square_opaque_black() {
    let buf = PixelBuffer::default();
    assert_eq!(buf.dimensions(), (256, 256));
    assert_eq!(buf.len(), 256 * 256);
    assert!(buf.pixels().iter().all(|&px| px == Color::BLACK));
}

#[test]
fn empty_buffer_is_valid() {
    let buf = PixelBuffer::new(0, 0);
    assert!(buf.is_empty());
    assert_eq!(buf.get_pixel(0, 0), None);
    assert_eq!(buf.aspect_ratio(), 0.0);
}

#[test]
fn from_pixels_rejects_wrong_length() {
    assert!(PixelBuffer::from_pixels(2, 2, vec![Color::BLACK; 3]).is_err());
}

#[test]
fn argb_loader_honours_alpha_flag() {
    let data = [0x80FF_0000, 0x0000_FF00];
    let with = PixelBuffer::from_argb_u32(&data, 2, 1, true).unwrap();
    assert_eq!(with.get_pixel(0, 0), Some(Color::rgba(255, 0, 0, 0x80)));
    assert_eq!(with.get_pixel(1, 0), Some(Color::rgba(0, 255, 0, 0)));

    let without = PixelBuffer::from_argb_u32(&data, 2, 1, false).unwrap();
    assert_eq!(without.get_pixel(0, 0), Some(Color::rgb(255, 0, 0)));
    assert_eq!(without.get_pixel(1, 0), Some(Color::rgb(0, 255, 0)));
}

#[test]
fn rgb_alpha_loader_keeps_split_alpha() {
    let buf = PixelBuffer::from_rgb_alpha(&[(0x0010_2030, 7)], 1, 1).unwrap();
    assert_eq!(buf.get_pixel(0, 0), Some(Color::rgba(0x10, 0x20, 0x30, 7)));
}

#[test]
fn out_of_range_access_is_none_and_writes_are_ignored() {
    let mut buf = PixelBuffer::new(2, 2);
    assert_eq!(buf.index_of(2, 0), None);
    assert_eq!(buf.index_of(1, 1), Some(3));
    assert!(buf.get_pixel_mut(0, 5).is_none());
    buf.set_pixel(9, 9, Color::WHITE);
    assert!(buf.pixels().iter().all(|&px| px == Color::BLACK));
    buf.set_pixel(1, 0, Color::WHITE);
    assert_eq!(buf.get_pixel(1, 0), Some(Color::WHITE));
    assert_eq!(buf.row(0).unwrap()[1], Color::WHITE);
    assert!(buf.row(2).is_none());
}

#[test]
fn flips_reverse_rows_and_columns() {
    let mut h = numbered(3, 2);
    h.flip_horizontal();
    let reds: Vec<u8> = h.pixels().iter().map(|px| px.r).collect();
    assert_eq!(reds, vec![2, 1, 0, 5, 4, 3]);

    let mut v = numbered(2, 3);
    v.flip_vertical();
    let reds: Vec<u8> = v.pixels().iter().map(|px| px.r).collect();
    assert_eq!(reds, vec![4, 5, 2, 3, 0, 1]);
}

#[test]
fn set_size_keeps_top_left_region() {
    let mut buf = numbered(3, 3);
    buf.set_size(2, 4, false);
    assert_eq!(buf.dimensions(), (2, 4));
    assert_eq!(buf.len(), 8);
    let reds: Vec<u8> = buf.pixels().iter().map(|px| px.r).collect();
    assert_eq!(reds, vec![0, 1, 3, 4, 6, 7, 0, 0]);
    assert_eq!(buf.get_pixel(0, 3), Some(Color::default()));
}

#[test]
fn set_size_with_clear_discards_data() {
    let mut buf = PixelBuffer::filled(2, 2, Color::WHITE);
    buf.set_size(3, 1, true);
    assert_eq!(buf.len(), 3);
    assert!(buf.pixels().iter().all(|&px| px == Color::default()));
}

#[test]
fn alpha_helpers_touch_alpha_only() {
    let mut buf = PixelBuffer::from_pixels(
        2,
        1,
        vec![Color::rgb(255, 0, 255), Color::rgb(1, 2, 3)],
    )
    .unwrap();
    buf.set_color_to_alpha(Color::rgb(255, 0, 255), 0);
    assert_eq!(buf.get_pixel(0, 0), Some(Color::rgba(255, 0, 255, 0)));
    assert_eq!(buf.get_pixel(1, 0), Some(Color::rgb(1, 2, 3)));

    buf.set_alpha(9);
    assert!(buf.pixels().iter().all(|px| px.a == 9));
}

#[test]
fn position_moves_without_touching_pixels() {
    let mut buf = PixelBuffer::new(1, 1);
    buf.set_position(3, 4);
    buf.move_by(1, 1);
    assert_eq!(buf.position(), (4, 5));
    assert_eq!(buf.get_pixel(0, 0), Some(Color::BLACK));
}

#[test]
fn rgba8_export_is_straight_alpha() {
    let buf = PixelBuffer::filled(1, 2, Color::rgba(10, 20, 30, 40));
    assert_eq!(buf.to_rgba8(), vec![10, 20, 30, 40, 10, 20, 30, 40]);
}
