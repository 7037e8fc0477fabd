use std::ops::Add;

/// A 26.6 fixed point number, the unit font metrics are scaled into
/// before they are rounded to whole pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Fixed(pub i32);

impl Fixed {
    const ONE: i32 = 64;

    /// Whole pixels.
    pub fn from_int(v: i32) -> Fixed {
        Fixed(v * Self::ONE)
    }

    /// Truncates toward zero, like a plain float to integer cast.
    pub fn from_f64(v: f64) -> Fixed {
        Fixed((v * Self::ONE as f64) as i32)
    }

    /// Pixels per em for a size in points at the given resolution.
    pub fn from_points(points: u32, dpi: f32) -> Fixed {
        Fixed::from_f64(points as f64 * dpi as f64 / 72.0)
    }

    /// Like `from_points`, but rounded to the nearest 1/64th.
    pub fn from_points_rounded(points: u32, dpi: f32) -> Fixed {
        Fixed((0.5 + points as f64 * dpi as f64 * Self::ONE as f64 / 72.0) as i32)
    }

    /// Scales a value in font units to pixels at `ppem`.
    ///
    /// Rounds half away from zero.
    pub fn from_font_units(units: i32, ppem: Fixed, units_per_em: u16) -> Fixed {
        let upem = units_per_em.max(1) as i64;
        let mut v = units as i64 * ppem.0 as i64;
        if v >= 0 {
            v += upem / 2;
        } else {
            v -= upem / 2;
        }
        Fixed((v / upem) as i32)
    }

    /// Largest whole pixel not above the value.
    pub fn floor(self) -> i32 {
        self.0 >> 6
    }

    /// Smallest whole pixel not below the value.
    pub fn ceil(self) -> i32 {
        (self.0 + Self::ONE - 1) >> 6
    }

    /// Lossy conversion for APIs taking float pixels.
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / Self::ONE as f32
    }
}

impl Add for Fixed {
    type Output = Fixed;

    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 + rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_and_floor_disagree_on_fractions() {
        let v = Fixed(10 * 64 + 1);
        assert_eq!(v.floor(), 10);
        assert_eq!(v.ceil(), 11);
        assert_eq!(Fixed::from_int(7).ceil(), 7);
        assert_eq!(Fixed::from_int(7).floor(), 7);
    }

    #[test]
    fn negative_values_round_toward_infinities() {
        let v = Fixed(-65);
        assert_eq!(v.floor(), -2);
        assert_eq!(v.ceil(), -1);
    }

    #[test]
    fn points_to_ppem() {
        assert_eq!(Fixed::from_points(16, 72.0), Fixed::from_int(16));
        assert_eq!(Fixed::from_points(12, 96.0), Fixed::from_int(16));
        assert_eq!(Fixed::from_points(10, 100.0).0, 888);
        assert_eq!(Fixed::from_points_rounded(10, 100.0).0, 889);
        assert_eq!(Fixed::from_points_rounded(16, 72.0), Fixed::from_int(16));
    }

    #[test]
    fn font_units_scale_with_rounding() {
        let ppem = Fixed::from_int(16);
        // 1229 units of a 2048 em at 16px is 9.6015625px
        assert_eq!(Fixed::from_font_units(1229, ppem, 2048), Fixed(615));
        assert_eq!(Fixed::from_font_units(1229, ppem, 2048).ceil(), 10);
        assert_eq!(Fixed::from_font_units(-1229, ppem, 2048), Fixed(-615));
        assert_eq!(Fixed::from_font_units(0, ppem, 2048), Fixed(0));
    }
}
