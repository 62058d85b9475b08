//! Sealed traits describing the native numbers a [`U4`](crate::U4) can be
//! built from.
//!
//! Every primitive integer implements [`PrimInt`] and both primitive floats
//! implement [`PrimFloat`]. The methods are implementation details of the
//! conversion and shift operators and are hidden from the documentation.

use crate::util::NIBBLE_MASK;
use crate::{Error, Result};

mod private {
    pub trait Sealed {}
}

/// A primitive integer type usable as a conversion source or shift amount.
///
/// This trait is sealed and implemented for `i8` through `i128`, `u8`
/// through `u128`, `isize` and `usize`.
pub trait PrimInt: private::Sealed + Copy {
    /// Validates that `self` lies in `0..=15`.
    #[doc(hidden)]
    fn to_nibble(self) -> Result<u8>;

    /// Saturates `self` into `0..=15`.
    #[doc(hidden)]
    fn clamp_nibble(self) -> u8;

    /// The low four bits of the two's complement pattern of `self`.
    #[doc(hidden)]
    fn low_nibble(self) -> u8;

    /// Direction and distance of a shift by `self`: `(reversed, distance)`,
    /// where `reversed` is set for negative amounts and `distance` is the
    /// magnitude capped at four.
    #[doc(hidden)]
    fn shift_distance(self) -> (bool, u32);
}

/// A primitive floating point type usable as a conversion source.
///
/// This trait is sealed and implemented for `f32` and `f64`.
pub trait PrimFloat: private::Sealed + Copy {
    /// Truncates `self` toward zero and validates the result.
    #[doc(hidden)]
    fn to_nibble(self) -> Result<u8>;
}

macro_rules! impl_prim_int {
    (signed: $($t:ident)*) => { $(
        impl private::Sealed for $t {}

        impl PrimInt for $t {
            #[inline]
            fn to_nibble(self) -> Result<u8> {
                if self < 0 {
                    Err(Error::Negative(self as i128))
                } else if self > 15 {
                    Err(Error::TooLarge(self as u128))
                } else {
                    Ok(self as u8)
                }
            }

            #[inline]
            fn clamp_nibble(self) -> u8 {
                self.clamp(0, 15) as u8
            }

            #[inline]
            fn low_nibble(self) -> u8 {
                self as u8 & NIBBLE_MASK
            }

            #[inline]
            fn shift_distance(self) -> (bool, u32) {
                // unsigned_abs keeps MIN representable
                (self < 0, self.unsigned_abs().min(4) as u32)
            }
        }
    )* };
    (unsigned: $($t:ident)*) => { $(
        impl private::Sealed for $t {}

        impl PrimInt for $t {
            #[inline]
            fn to_nibble(self) -> Result<u8> {
                if self > 15 {
                    Err(Error::TooLarge(self as u128))
                } else {
                    Ok(self as u8)
                }
            }

            #[inline]
            fn clamp_nibble(self) -> u8 {
                self.min(15) as u8
            }

            #[inline]
            fn low_nibble(self) -> u8 {
                self as u8 & NIBBLE_MASK
            }

            #[inline]
            fn shift_distance(self) -> (bool, u32) {
                (false, self.min(4) as u32)
            }
        }
    )* };
}

impl_prim_int!(signed: i8 i16 i32 i64 i128 isize);
impl_prim_int!(unsigned: u8 u16 u32 u64 u128 usize);

macro_rules! impl_prim_float {
    ($($t:ident)*) => { $(
        impl private::Sealed for $t {}

        impl PrimFloat for $t {
            #[inline]
            fn to_nibble(self) -> Result<u8> {
                let whole = self.trunc();
                if whole.is_nan() {
                    Err(Error::NotANumber)
                } else if whole < 0.0 {
                    Err(Error::Negative(whole as i128))
                } else if whole > 15.0 {
                    Err(Error::TooLarge(whole as u128))
                } else {
                    Ok(whole as u8)
                }
            }
        }
    )* };
}

impl_prim_float!(f32 f64);
