/// Float-to-dimension conversion: truncates toward zero, clamps negatives and NaN to 0.
pub(crate) fn trunc_dim(v: f64) -> u32 {
    if v.is_nan() || v <= 0.0 {
        return 0;
    }
    v.min(f64::from(u32::MAX)) as u32
}

/// Scale a `u32` field by `factor`, truncating like [`trunc_dim`].
pub(crate) fn scale_u32(v: u32, factor: f32) -> u32 {
    trunc_dim(f64::from(v) * f64::from(factor))
}

/// `floor(|v|)`-based fractional part, always in `[0, 1)`.
pub(crate) fn frac_abs(v: f32) -> f32 {
    let a = v.abs();
    a - a.floor()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
