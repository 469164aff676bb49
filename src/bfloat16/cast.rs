use std::num::FpCategory;

use log::trace;

use super::{BFloat16, QUIET_BIT, SIGN_MASK};

impl BFloat16 {
    /// Narrows an `f32`. Lossy.
    ///
    /// - zero and subnormal inputs become the zero of the same sign;
    /// - infinities keep their upper 16 bits;
    /// - NaNs keep their upper 16 bits with the quiet bit forced on, so a
    ///   signaling NaN comes out quiet and never truncates to infinity;
    /// - normal inputs are rounded to nearest, ties to even. Values above
    ///   [`BFloat16::MAX`] by half an ulp or more become infinity.
    pub fn from_f32(value: f32) -> Self {
        let bits = value.to_bits();
        let upper = (bits >> 16) as u16;

        match value.classify() {
            FpCategory::Zero => Self(upper & SIGN_MASK),
            FpCategory::Subnormal => {
                trace!("flushing subnormal {:e} to signed zero", value);
                Self(upper & SIGN_MASK)
            }
            FpCategory::Infinite => Self(upper),
            FpCategory::Nan => {
                if upper & QUIET_BIT == 0 {
                    trace!("quieting signaling NaN {:#010x}", bits);
                }
                Self(upper | QUIET_BIT)
            }
            FpCategory::Normal => {
                // Bit 16 is the lowest kept mantissa bit and breaks ties. The
                // carry may run into the exponent field.
                let rounding_bias = 0x0000_7FFF + ((bits >> 16) & 1);
                Self((bits.wrapping_add(rounding_bias) >> 16) as u16)
            }
        }
    }

    /// Widens to `f32`. Exact for every pattern.
    pub fn to_f32(self) -> f32 {
        f32::from_bits((self.0 as u32) << 16)
    }

    /// Narrows through `f32`: `value as f32` rounds first, then
    /// [`BFloat16::from_f32`] rounds again.
    pub fn from_f64(value: f64) -> Self {
        Self::from_f32(value as f32)
    }

    pub fn to_f64(self) -> f64 {
        self.to_f32() as f64
    }
}

impl From<f32> for BFloat16 {
    fn from(x: f32) -> Self {
        Self::from_f32(x)
    }
}

impl From<f64> for BFloat16 {
    fn from(x: f64) -> Self {
        Self::from_f64(x)
    }
}

impl From<BFloat16> for f32 {
    fn from(x: BFloat16) -> Self {
        x.to_f32()
    }
}

impl From<BFloat16> for f64 {
    fn from(x: BFloat16) -> Self {
        x.to_f64()
    }
}

// Integers go through `f32` and the same narrowing rule. Note that
// `From<u16>` converts the numeric value; raw patterns use `from_bits`.
macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for BFloat16 {
                fn from(x: $ty) -> Self {
                    Self::from_f32(x as f32)
                }
            }
        )*
    };
}

impl_from_int!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize);
