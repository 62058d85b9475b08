use zerocopy::{Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::util::{NIBBLE_MASK, out_of_range};
use crate::{PrimFloat, PrimInt, Result};

/// A 4-bit unsigned integer.
///
/// The stored value is always in `0..=15`. Values are created through one of
/// the conversion constructors, which either validate ([`new`](U4::new),
/// [`from_int`](U4::from_int), [`from_float`](U4::from_float)), report
/// ([`exact`](U4::exact), [`TryFrom`]), saturate ([`clamping`](U4::clamping))
/// or mask ([`truncating`](U4::truncating)) their input.
///
/// `U4` is a single byte in memory and can be viewed as bytes through
/// [`zerocopy::IntoBytes`]. It deliberately does not implement
/// `zerocopy::FromBytes`, since most bytes are not valid nibbles.
///
/// # Example
///
/// ```
/// use uint4::U4;
///
/// let a = U4::new(12);
/// let b = U4::new(3);
///
/// assert_eq!(a + b, U4::MAX);
/// assert_eq!(a.overflowing_add(U4::new(5)), (U4::new(1), true));
/// assert_eq!(U4::clamping(-40), U4::MIN);
/// assert_eq!(U4::truncating(0b1001_0110), 0b0110);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(IntoBytes, Immutable, KnownLayout, Unaligned)]
pub struct U4(u8);

impl U4 {
    /// The smallest value, `0`.
    pub const MIN: Self = Self(0);
    /// The largest value, `15`.
    pub const MAX: Self = Self(NIBBLE_MASK);
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);

    /// The size of this integer type in bits.
    pub const BITS: u32 = 4;

    /// Always `false`: a nibble has no sign bit.
    pub const SIGNED: bool = false;

    /// Creates a nibble from a raw byte that is already known to be in range.
    ///
    /// # Panics
    ///
    /// Panics if `value > 15`.
    ///
    /// ```
    /// use uint4::U4;
    ///
    /// const SEVEN: U4 = U4::new(7);
    /// assert_eq!(SEVEN.get(), 7);
    /// ```
    #[inline]
    #[track_caller]
    pub const fn new(value: u8) -> Self {
        assert!(value <= NIBBLE_MASK, "not enough bits to represent value");
        Self(value)
    }

    /// Keeps the low four bits of `bits`.
    #[inline]
    pub(crate) const fn masked(bits: u8) -> Self {
        Self(bits & NIBBLE_MASK)
    }

    /// The single funnel through which validated values enter the type.
    #[inline]
    #[track_caller]
    fn expect_nibble(nibble: Result<u8>) -> Self {
        match nibble {
            Ok(value) => Self(value),
            Err(error) => out_of_range(error),
        }
    }

    /// Creates a nibble from any primitive integer.
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative or greater than 15. Use
    /// [`exact`](U4::exact) or [`TryFrom`] when the input is not trusted.
    #[inline]
    #[track_caller]
    pub fn from_int<T: PrimInt>(value: T) -> Self {
        Self::expect_nibble(value.to_nibble())
    }

    /// Creates a nibble from a float, truncating toward zero.
    ///
    /// ```
    /// use uint4::U4;
    ///
    /// assert_eq!(U4::from_float(5.4), 5);
    /// assert_eq!(U4::from_float(0.3f32), 0);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the truncated value is outside `0..=15` or `value` is NaN.
    #[inline]
    #[track_caller]
    pub fn from_float<F: PrimFloat>(value: F) -> Self {
        Self::expect_nibble(value.to_nibble())
    }

    /// Like [`from_float`](U4::from_float), but reports a bad input instead of
    /// panicking.
    #[inline]
    pub fn try_from_float<F: PrimFloat>(value: F) -> Result<Self> {
        value.to_nibble().map(Self)
    }

    /// Creates a nibble from any integer, saturating at the bounds.
    ///
    /// ```
    /// use uint4::U4;
    ///
    /// assert_eq!(U4::clamping(-1), U4::MIN);
    /// assert_eq!(U4::clamping(16u64), U4::MAX);
    /// assert_eq!(U4::clamping(9i8), 9);
    /// ```
    #[inline]
    pub fn clamping<T: PrimInt>(value: T) -> Self {
        Self(value.clamp_nibble())
    }

    /// Creates a nibble only if `value` is exactly representable.
    ///
    /// ```
    /// use uint4::U4;
    ///
    /// assert_eq!(U4::exact(15), Some(U4::MAX));
    /// assert_eq!(U4::exact(16), None);
    /// assert_eq!(U4::exact(-1), None);
    /// ```
    #[inline]
    pub fn exact<T: PrimInt>(value: T) -> Option<Self> {
        value.to_nibble().ok().map(Self)
    }

    /// Creates a nibble from the low four bits of `value`'s two's complement
    /// representation, discarding everything above.
    ///
    /// ```
    /// use uint4::U4;
    ///
    /// assert_eq!(U4::truncating(0b1001_0110), 0b0110);
    /// assert_eq!(U4::truncating(-1i64), U4::MAX);
    /// ```
    #[inline]
    pub fn truncating<T: PrimInt>(value: T) -> Self {
        Self(value.low_nibble())
    }

    /// Returns the value as a `u8` in `0..=15`.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Splits a byte into its `(high, low)` nibbles.
    ///
    /// ```
    /// use uint4::U4;
    ///
    /// assert_eq!(U4::split(0xa7), (U4::new(0xa), U4::new(0x7)));
    /// ```
    #[inline]
    pub const fn split(byte: u8) -> (Self, Self) {
        (Self(byte >> 4), Self::masked(byte))
    }

    /// Packs two nibbles into a byte, `high` in the upper four bits.
    #[inline]
    pub const fn join(high: Self, low: Self) -> u8 {
        (high.0 << 4) | low.0
    }
}
