use super::*;

#[test]
fn trunc_dim_truncates_and_clamps() {
    assert_eq!(trunc_dim(3.99), 3);
    assert_eq!(trunc_dim(-2.0), 0);
    assert_eq!(trunc_dim(f64::NAN), 0);
    assert_eq!(trunc_dim(1e20), u32::MAX);
}

#[test]
fn scale_u32_matches_float_truncation() {
    assert_eq!(scale_u32(10, 1.5), 15);
    assert_eq!(scale_u32(3, 0.5), 1);
    assert_eq!(scale_u32(7, 0.0), 0);
}

#[test]
fn frac_abs_is_mirrored_around_zero() {
    assert!((frac_abs(1.25) - 0.25).abs() < 1e-6);
    assert!((frac_abs(-1.25) - 0.25).abs() < 1e-6);
    assert_eq!(frac_abs(2.0), 0.0);
}
