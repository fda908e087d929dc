/// A numeric coordinate that can address a pixel after flooring
///
/// Fractional values are floored, so `-0.5` lands on `-1` and is out of range.
/// Non-finite values never address a pixel.
pub trait Coordinate: Copy {
    /// Floor to an integer, `None` when the value is not finite or does not fit
    fn floor_i64(self) -> Option<i64>;

    /// The value as requested, for error reporting
    fn as_f64(self) -> f64;
}

macro_rules! impl_int_coordinate {
    ($($t:ty),*) => {$(
        impl Coordinate for $t {
            #[inline]
            fn floor_i64(self) -> Option<i64> {
                i64::try_from(self).ok()
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_int_coordinate!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Coordinate for f64 {
    #[inline]
    fn floor_i64(self) -> Option<i64> {
        let floored = self.floor();
        // i64::MAX as f64 rounds up to 2^63, which is itself out of range
        if floored.is_finite() && floored >= i64::MIN as f64 && floored < i64::MAX as f64 {
            Some(floored as i64)
        } else {
            None
        }
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

impl Coordinate for f32 {
    #[inline]
    fn floor_i64(self) -> Option<i64> {
        (self as f64).floor_i64()
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}
