use super::*;

fn gradient() -> PixelBuffer {
    // 3x3 with distinct channels per texel.
    let pixels = (0..9u8)
        .map(|i| Color::rgba(i * 20, 200 - i * 10, i * 3 + 1, 255 - i))
        .collect();
    PixelBuffer::from_pixels(3, 3, pixels).unwrap()
}

#[test]
fn nearest_maps_by_floor_of_scaled_coordinate() {
    let buf = gradient();
    let c = buf.sample(
        0.74,
        0.0,
        InterpolationMethod::NearestNeighbor,
        ExtrapolationMethod::None,
    );
    // floor(0.74 * 2) = 1
    assert_eq!(Some(c), buf.get_pixel(1, 0));
    let c = buf.sample(1.0, 1.0, InterpolationMethod::None, ExtrapolationMethod::None);
    assert_eq!(Some(c), buf.get_pixel(2, 2));
}

#[test]
fn bilinear_at_texel_positions_reproduces_texels() {
    let buf = gradient();
    for y in 0..3u32 {
        for x in 0..3u32 {
            for em in [
                ExtrapolationMethod::None,
                ExtrapolationMethod::Repeat,
                ExtrapolationMethod::Extend,
            ] {
                let c = buf.sample(
                    x as f32 / 2.0,
                    y as f32 / 2.0,
                    InterpolationMethod::Bilinear,
                    em,
                );
                assert_eq!(Some(c), buf.get_pixel(x, y), "texel ({x},{y}) {em:?}");
            }
        }
    }
}

#[test]
fn bilinear_midpoint_averages_neighbours() {
    let buf = PixelBuffer::from_pixels(2, 1, vec![Color::BLACK, Color::WHITE]).unwrap();
    let c = buf.sample(
        0.5,
        0.0,
        InterpolationMethod::Bilinear,
        ExtrapolationMethod::Extend,
    );
    assert_eq!(c, Color::rgba(128, 128, 128, 255));
}

#[test]
fn bilinear_substitutes_each_corner_with_extrapolation() {
    // One row: the (ix, iy + 1) corners fall outside and are substituted.
    let buf = PixelBuffer::from_pixels(
        2,
        1,
        vec![Color::rgba(100, 100, 100, 255), Color::rgba(200, 200, 200, 255)],
    )
    .unwrap();

    let extend = buf.sample(
        0.5,
        0.0,
        InterpolationMethod::Bilinear,
        ExtrapolationMethod::Extend,
    );
    assert_eq!(extend, Color::rgba(150, 150, 150, 255));

    // With a single row, fy is always 0, so the out-of-range row has no weight.
    let none = buf.sample(
        0.5,
        0.0,
        InterpolationMethod::Bilinear,
        ExtrapolationMethod::None,
    );
    assert_eq!(none, extend);
}

#[test]
fn outside_coordinates_follow_extrapolation() {
    let buf = gradient();
    let none = buf.sample(
        1.5,
        0.0,
        InterpolationMethod::NearestNeighbor,
        ExtrapolationMethod::None,
    );
    assert_eq!(none, Color::TRANSPARENT);

    let extend = buf.sample(
        7.0,
        -3.0,
        InterpolationMethod::NearestNeighbor,
        ExtrapolationMethod::Extend,
    );
    assert_eq!(Some(extend), buf.get_pixel(2, 0));

    // 1.5 wraps to 0.5 -> column 1; -0.25 mirrors to 0.75 -> row 1.
    let repeat = buf.sample(
        1.5,
        -0.25,
        InterpolationMethod::NearestNeighbor,
        ExtrapolationMethod::Repeat,
    );
    assert_eq!(Some(repeat), buf.get_pixel(1, 1));
}

#[test]
fn empty_buffer_and_nan_sample_transparent() {
    let empty = PixelBuffer::new(0, 0);
    assert_eq!(
        empty.sample(0.5, 0.5, InterpolationMethod::Bilinear, ExtrapolationMethod::Extend),
        Color::TRANSPARENT
    );
    let buf = gradient();
    assert_eq!(
        buf.sample(
            f32::NAN,
            0.5,
            InterpolationMethod::NearestNeighbor,
            ExtrapolationMethod::Extend
        ),
        Color::TRANSPARENT
    );
}

#[test]
fn method_names_serialize_snake_case() {
    assert_eq!(
        serde_json::to_string(&InterpolationMethod::AreaAveraging).unwrap(),
        "\"area_averaging\""
    );
    let em: ExtrapolationMethod = serde_json::from_str("\"extend\"").unwrap();
    assert_eq!(em, ExtrapolationMethod::Extend);
}
