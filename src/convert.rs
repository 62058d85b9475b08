use std::cmp::Ordering;

use crate::{Error, PrimInt, U4};

/// Orders a nibble against any primitive without widening either side.
#[inline]
fn cmp_prim<T: PrimInt>(nibble: U4, other: T) -> Ordering {
    match other.to_nibble() {
        Ok(value) => nibble.get().cmp(&value),
        Err(Error::Negative(_)) => Ordering::Greater,
        Err(_) => Ordering::Less,
    }
}

macro_rules! impl_int_interop {
    ($($t:ident)*) => { $(
        impl TryFrom<$t> for U4 {
            type Error = Error;

            #[inline]
            fn try_from(value: $t) -> Result<Self, Self::Error> {
                value.to_nibble().map(U4::masked)
            }
        }

        impl From<U4> for $t {
            #[inline]
            fn from(value: U4) -> Self {
                value.get() as $t
            }
        }

        impl PartialEq<$t> for U4 {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                cmp_prim(*self, *other) == Ordering::Equal
            }
        }

        impl PartialEq<U4> for $t {
            #[inline]
            fn eq(&self, other: &U4) -> bool {
                cmp_prim(*other, *self) == Ordering::Equal
            }
        }

        impl PartialOrd<$t> for U4 {
            #[inline]
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                Some(cmp_prim(*self, *other))
            }
        }

        impl PartialOrd<U4> for $t {
            #[inline]
            fn partial_cmp(&self, other: &U4) -> Option<Ordering> {
                Some(cmp_prim(*other, *self).reverse())
            }
        }
    )* };
}

impl_int_interop!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl From<U4> for f32 {
    #[inline]
    fn from(value: U4) -> Self {
        f32::from(value.get())
    }
}

impl From<U4> for f64 {
    #[inline]
    fn from(value: U4) -> Self {
        f64::from(value.get())
    }
}
