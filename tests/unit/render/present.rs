use super::*;
use crate::foundation::color::Color;

#[test]
fn in_memory_presenter_records_frames_in_order() {
    let mut p = InMemoryPresenter::new();
    p.begin(2, 1).unwrap();
    p.present(0, &PixelBuffer::filled(2, 1, Color::BLACK)).unwrap();
    p.present(1, &PixelBuffer::filled(2, 1, Color::WHITE)).unwrap();
    p.end().unwrap();

    assert_eq!(p.size(), Some((2, 1)));
    assert!(p.is_ended());
    let idx: Vec<u64> = p.frames().iter().map(|(i, _)| *i).collect();
    assert_eq!(idx, vec![0, 1]);
    assert_eq!(p.frames()[1].1.get_pixel(1, 0), Some(Color::WHITE));

    p.begin(2, 1).unwrap();
    assert!(p.frames().is_empty());
    assert!(!p.is_ended());
}

#[test]
fn png_sequence_names_are_zero_padded() {
    let p = PngSequencePresenter::new("/tmp/out").with_prefix("walk");
    assert_eq!(p.frame_path(7), Path::new("/tmp/out/walk_000007.png"));
    assert_eq!(p.dir(), Path::new("/tmp/out"));
}
