use crate::foundation::color::Color;

/// `floor((dst * (255 - a) + src * a) / 255)`.
#[inline]
pub fn blend_channel(dst: u8, src: u8, a: u8) -> u8 {
    let a = u32::from(a);
    ((u32::from(dst) * (255 - a) + u32::from(src) * a) / 255) as u8
}

/// Blend the colour channels of `src` over `dst` with coverage `a`.
///
/// The alpha channel of the result is `dst.a`; callers decide what alpha the composited texel
/// carries.
#[inline]
pub fn blend_color(dst: Color, src: Color, a: u8) -> Color {
    Color::rgba(
        blend_channel(dst.r, src.r, a),
        blend_channel(dst.g, src.g, a),
        blend_channel(dst.b, src.b, a),
        dst.a,
    )
}

/// Composite one texel onto an opaque target.
///
/// Without alpha mode, or when `src` is fully opaque, the colour is overwritten. Otherwise a
/// fully transparent `src` is skipped and anything in between is blended with `src.a` as the
/// coverage. The target's alpha is never touched.
#[inline]
pub fn composite_texel(dst: &mut Color, src: Color, alpha_mode: bool) {
    if !alpha_mode || src.a == 255 {
        *dst = Color::rgba(src.r, src.g, src.b, dst.a);
    } else if src.a != 0 {
        *dst = blend_color(*dst, src, src.a);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/blend.rs"]
mod tests;
