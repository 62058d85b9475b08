//! Operator implementations.
//!
//! Arithmetic and bitwise operators evaluate the exact result on the logical
//! values and feed it back through [`U4::from_int`], so a result outside
//! `0..=15` panics instead of silently wrapping. Use the `overflowing_*`,
//! `checked_*` and `wrapping_*` methods when wraparound must be handled.
//!
//! Mixed operands: `U4 op u8` yields a `U4` (validated the same way) and
//! `u8 op U4` yields a `u8` with native `u8` semantics.

use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use crate::{PrimInt, U4};

macro_rules! forward_ref_binop {
    ($op:ident::$method:ident / $op_assign:ident::$method_assign:ident) => {
        impl $op<U4> for &U4 {
            type Output = U4;
            #[inline]
            #[track_caller]
            fn $method(self, rhs: U4) -> U4 {
                <U4 as $op<U4>>::$method(*self, rhs)
            }
        }

        impl $op<&U4> for U4 {
            type Output = U4;
            #[inline]
            #[track_caller]
            fn $method(self, rhs: &U4) -> U4 {
                <U4 as $op<U4>>::$method(self, *rhs)
            }
        }

        impl $op<&U4> for &U4 {
            type Output = U4;
            #[inline]
            #[track_caller]
            fn $method(self, rhs: &U4) -> U4 {
                <U4 as $op<U4>>::$method(*self, *rhs)
            }
        }

        impl $op_assign<U4> for U4 {
            #[inline]
            #[track_caller]
            fn $method_assign(&mut self, rhs: U4) {
                *self = <U4 as $op<U4>>::$method(*self, rhs);
            }
        }

        impl $op_assign<&U4> for U4 {
            #[inline]
            #[track_caller]
            fn $method_assign(&mut self, rhs: &U4) {
                *self = <U4 as $op<U4>>::$method(*self, *rhs);
            }
        }
    };
}

macro_rules! impl_binop {
    ($($op:ident::$method:ident / $op_assign:ident::$method_assign:ident, $tok:tt;)*) => { $(
        impl $op for U4 {
            type Output = U4;
            #[inline]
            #[track_caller]
            fn $method(self, rhs: U4) -> U4 {
                U4::from_int(i16::from(self.get()) $tok i16::from(rhs.get()))
            }
        }

        impl $op<u8> for U4 {
            type Output = U4;
            #[inline]
            #[track_caller]
            fn $method(self, rhs: u8) -> U4 {
                U4::from_int(i16::from(self.get()) $tok i16::from(rhs))
            }
        }

        impl $op<U4> for u8 {
            type Output = u8;
            #[inline]
            #[track_caller]
            fn $method(self, rhs: U4) -> u8 {
                self $tok rhs.get()
            }
        }

        impl $op_assign<u8> for U4 {
            #[inline]
            #[track_caller]
            fn $method_assign(&mut self, rhs: u8) {
                *self = <U4 as $op<u8>>::$method(*self, rhs);
            }
        }

        impl $op_assign<U4> for u8 {
            #[inline]
            #[track_caller]
            fn $method_assign(&mut self, rhs: U4) {
                *self = <u8 as $op<U4>>::$method(*self, rhs);
            }
        }

        forward_ref_binop!($op::$method / $op_assign::$method_assign);
    )* };
}

impl_binop! {
    Add::add / AddAssign::add_assign, +;
    Sub::sub / SubAssign::sub_assign, -;
    Mul::mul / MulAssign::mul_assign, *;
    Div::div / DivAssign::div_assign, /;
    Rem::rem / RemAssign::rem_assign, %;
    BitAnd::bitand / BitAndAssign::bitand_assign, &;
    BitOr::bitor / BitOrAssign::bitor_assign, |;
    BitXor::bitxor / BitXorAssign::bitxor_assign, ^;
}

impl Not for U4 {
    type Output = U4;

    #[inline]
    fn not(self) -> U4 {
        U4::masked(!self.get())
    }
}

impl Not for &U4 {
    type Output = U4;

    #[inline]
    fn not(self) -> U4 {
        !*self
    }
}

// ============================================================================
// Shifts
// ============================================================================
//
// A negative amount shifts the other way. Amounts are capped at four, after
// which every shift yields zero.

#[inline]
const fn shift_left(value: U4, distance: u32) -> U4 {
    // widened to u8, the bits pushed past the nibble are masked off
    U4::masked(value.get() << distance)
}

#[inline]
const fn shift_right(value: U4, distance: u32) -> U4 {
    U4::masked(value.get() >> distance)
}

impl<T: PrimInt> Shl<T> for U4 {
    type Output = U4;

    #[inline]
    fn shl(self, rhs: T) -> U4 {
        match rhs.shift_distance() {
            (false, distance) => shift_left(self, distance),
            (true, distance) => shift_right(self, distance),
        }
    }
}

impl<T: PrimInt> Shr<T> for U4 {
    type Output = U4;

    #[inline]
    fn shr(self, rhs: T) -> U4 {
        match rhs.shift_distance() {
            (false, distance) => shift_right(self, distance),
            (true, distance) => shift_left(self, distance),
        }
    }
}

impl<T: PrimInt> Shl<T> for &U4 {
    type Output = U4;

    #[inline]
    fn shl(self, rhs: T) -> U4 {
        *self << rhs
    }
}

impl<T: PrimInt> Shr<T> for &U4 {
    type Output = U4;

    #[inline]
    fn shr(self, rhs: T) -> U4 {
        *self >> rhs
    }
}

impl<T: PrimInt> ShlAssign<T> for U4 {
    #[inline]
    fn shl_assign(&mut self, rhs: T) {
        *self = *self << rhs;
    }
}

impl<T: PrimInt> ShrAssign<T> for U4 {
    #[inline]
    fn shr_assign(&mut self, rhs: T) {
        *self = *self >> rhs;
    }
}

// ============================================================================
// Iterator folds
// ============================================================================

impl Sum for U4 {
    #[track_caller]
    fn sum<I: Iterator<Item = U4>>(iter: I) -> U4 {
        iter.fold(U4::ZERO, |acc, n| acc + n)
    }
}

impl<'a> Sum<&'a U4> for U4 {
    #[track_caller]
    fn sum<I: Iterator<Item = &'a U4>>(iter: I) -> U4 {
        iter.fold(U4::ZERO, |acc, n| acc + n)
    }
}

impl Product for U4 {
    #[track_caller]
    fn product<I: Iterator<Item = U4>>(iter: I) -> U4 {
        iter.fold(U4::ONE, |acc, n| acc * n)
    }
}

impl<'a> Product<&'a U4> for U4 {
    #[track_caller]
    fn product<I: Iterator<Item = &'a U4>>(iter: I) -> U4 {
        iter.fold(U4::ONE, |acc, n| acc * n)
    }
}
