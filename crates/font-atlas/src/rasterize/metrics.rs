use super::Fixed;

/// Distance below the baseline covered by the face, rounded up to the
/// next 1/64th of a pixel.
///
/// `scale` is the face's pixels per em and `hhea_descender` the (negative)
/// descender of the horizontal header.
pub fn scaled_descent(scale: Fixed, hhea_descender: i16, units_per_em: u16) -> Fixed {
    let v = scale.0 as f64 * -(hhea_descender as f64) / units_per_em.max(1) as f64;
    Fixed(v.ceil() as i32)
}

/// Vertical advance of a glyph in font units.
///
/// Fonts without a `vmtx` entry fall back to the typographic line
/// height from `OS/2`, then to the em size.
pub fn vertical_advance_units(
    vmtx_advance: Option<u16>,
    typographic: Option<(i16, i16)>,
    units_per_em: u16,
) -> i32 {
    if let Some(advance) = vmtx_advance {
        return advance as i32;
    }
    match typographic {
        Some((ascender, descender)) => ascender as i32 - descender as i32,
        None => units_per_em as i32,
    }
}
