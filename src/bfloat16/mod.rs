mod cast;
mod ops;
#[cfg(feature = "serde")]
mod serialize;

use std::cmp::Ordering;
use std::fmt;
use std::num::FpCategory;
use std::str::FromStr;

use crate::ParseBFloat16Error;

pub(crate) const SIGN_MASK: u16 = 0x8000;
pub(crate) const EXP_MASK: u16 = 0x7F80;
pub(crate) const MANTISSA_MASK: u16 = 0x007F;
pub(crate) const QUIET_BIT: u16 = 0x0040;

/// A bfloat16 value: the upper 16 bits of an IEEE-754 `f32`.
///
/// Layout is 1 sign bit, 8 exponent bits and 7 mantissa bits. Every bit
/// pattern is a valid value. Widening to `f32` is exact; narrowing from
/// `f32` is lossy (see [`BFloat16::from_f32`]).
///
/// Equality and ordering follow IEEE semantics of the widened value, so
/// `0.0 == -0.0` and NaN is unequal to everything. Use [`BFloat16::to_bits`]
/// or [`BFloat16::total_cmp`] to compare patterns.
#[derive(Copy, Clone, Default)]
#[repr(transparent)]
pub struct BFloat16(pub(crate) u16);

const _: () = assert!(std::mem::size_of::<BFloat16>() == 2);

impl BFloat16 {
    pub const ZERO: Self = Self(0x0000);
    pub const NEG_ZERO: Self = Self(0x8000);
    pub const ONE: Self = Self(0x3F80);
    pub const NEG_ONE: Self = Self(0xBF80);
    pub const INFINITY: Self = Self(0x7F80);
    pub const NEG_INFINITY: Self = Self(0xFF80);
    /// Canonical quiet NaN.
    pub const NAN: Self = Self(0x7FC0);
    /// Largest finite value, about 3.38953139e38.
    pub const MAX: Self = Self(0x7F7F);
    pub const MIN: Self = Self(0xFF7F);
    /// Smallest positive normal value, 2^-126.
    pub const MIN_POSITIVE: Self = Self(0x0080);
    /// Difference between 1.0 and the next larger value, 2^-7.
    pub const EPSILON: Self = Self(0x3C00);
    pub const MANTISSA_DIGITS: u32 = 8;
    pub const RADIX: u32 = 2;

    /// Builds a value from its raw pattern. No validation is done.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> u16 {
        self.0
    }

    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub const fn to_ne_bytes(self) -> [u8; 2] {
        self.0.to_ne_bytes()
    }

    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    pub const fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    pub const fn from_ne_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_ne_bytes(bytes))
    }

    /// Category of the value, identical to `self.to_f32().classify()`.
    pub const fn classify(self) -> FpCategory {
        match (self.0 & EXP_MASK, self.0 & MANTISSA_MASK) {
            (0, 0) => FpCategory::Zero,
            (0, _) => FpCategory::Subnormal,
            (EXP_MASK, 0) => FpCategory::Infinite,
            (EXP_MASK, _) => FpCategory::Nan,
            _ => FpCategory::Normal,
        }
    }

    pub const fn is_nan(self) -> bool {
        matches!(self.classify(), FpCategory::Nan)
    }

    pub const fn is_infinite(self) -> bool {
        matches!(self.classify(), FpCategory::Infinite)
    }

    pub const fn is_finite(self) -> bool {
        self.0 & EXP_MASK != EXP_MASK
    }

    pub const fn is_normal(self) -> bool {
        matches!(self.classify(), FpCategory::Normal)
    }

    /// Subnormal patterns can be built with [`BFloat16::from_bits`] but are
    /// never produced by narrowing.
    pub const fn is_subnormal(self) -> bool {
        matches!(self.classify(), FpCategory::Subnormal)
    }

    pub const fn is_sign_negative(self) -> bool {
        self.0 & SIGN_MASK != 0
    }

    pub const fn is_sign_positive(self) -> bool {
        !self.is_sign_negative()
    }

    pub const fn abs(self) -> Self {
        Self(self.0 & !SIGN_MASK)
    }

    /// IEEE-754 total order: `-NaN < -inf < ... < -0 < +0 < ... < +inf < +NaN`.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        let mut left = self.0 as i16;
        let mut right = other.0 as i16;
        // Flip the magnitude bits of negative values so that they order as
        // two's complement integers.
        left ^= (((left >> 15) as u16) >> 1) as i16;
        right ^= (((right >> 15) as u16) >> 1) as i16;
        left.cmp(&right)
    }
}

impl PartialEq for BFloat16 {
    fn eq(&self, other: &Self) -> bool {
        self.to_f32() == other.to_f32()
    }
}

impl PartialOrd for BFloat16 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_f32().partial_cmp(&other.to_f32())
    }
}

impl fmt::Debug for BFloat16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BFloat16({:?}, {:#06x})", self.to_f32(), self.0)
    }
}

impl fmt::Display for BFloat16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}

impl fmt::LowerExp for BFloat16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerExp::fmt(&self.to_f32(), f)
    }
}

impl fmt::UpperExp for BFloat16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperExp::fmt(&self.to_f32(), f)
    }
}

/// Parses as `f32`, then narrows. A literal exactly halfway between two
/// bfloat16 values can therefore be rounded twice.
impl FromStr for BFloat16 {
    type Err = ParseBFloat16Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<f32>()?;
        Ok(Self::from_f32(value))
    }
}
