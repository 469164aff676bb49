use super::{BFloat16, SIGN_MASK};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

// Every operator widens both operands, applies the f32 operator and narrows
// the result again. Nothing is accumulated at higher precision.
macro_rules! impl_binary_op {
    ($op_trait:ident, $op_fn:ident, $assign_trait:ident, $assign_fn:ident, $op:tt) => {
        impl $op_trait for BFloat16 {
            type Output = BFloat16;

            fn $op_fn(self, rhs: BFloat16) -> Self::Output {
                BFloat16::from_f32(self.to_f32() $op rhs.to_f32())
            }
        }

        impl $assign_trait for BFloat16 {
            fn $assign_fn(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, +);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, -);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, *);
impl_binary_op!(Div, div, DivAssign, div_assign, /);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, %);

impl Neg for BFloat16 {
    type Output = BFloat16;

    fn neg(self) -> Self::Output {
        // Sign flip only, also for zero and NaN
        Self(self.0 ^ SIGN_MASK)
    }
}

impl Sum for BFloat16 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(BFloat16::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BFloat16> for BFloat16 {
    fn sum<I: Iterator<Item = &'a BFloat16>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for BFloat16 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(BFloat16::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BFloat16> for BFloat16 {
    fn product<I: Iterator<Item = &'a BFloat16>>(iter: I) -> Self {
        iter.copied().product()
    }
}
