use crate::U4;
use crate::util::cold_path;

/// Overflow-reporting arithmetic.
///
/// Each `overflowing_*` method returns the wrapped result together with a flag
/// telling whether the exact result left `0..=15`. Division and remainder by
/// zero are reported rather than fatal: they return the dividend unchanged with
/// the flag set.
impl U4 {
    /// Calculates `self + rhs`, wrapping at 16.
    ///
    /// ```
    /// use uint4::U4;
    ///
    /// assert_eq!(U4::new(12).overflowing_add(U4::new(3)), (U4::new(15), false));
    /// assert_eq!(U4::new(14).overflowing_add(U4::new(3)), (U4::new(1), true));
    /// ```
    #[inline]
    pub const fn overflowing_add(self, rhs: U4) -> (U4, bool) {
        // at most 30, so a single wrap suffices
        let sum = self.get() + rhs.get();
        if sum > U4::MAX.get() {
            cold_path();
            (U4::masked(sum - 16), true)
        } else {
            (U4::masked(sum), false)
        }
    }

    /// Calculates `self - rhs`, wrapping below zero.
    ///
    /// ```
    /// use uint4::U4;
    ///
    /// assert_eq!(U4::new(1).overflowing_sub(U4::new(3)), (U4::new(14), true));
    /// ```
    #[inline]
    pub const fn overflowing_sub(self, rhs: U4) -> (U4, bool) {
        if self.get() < rhs.get() {
            cold_path();
            (U4::masked(self.get() + 16 - rhs.get()), true)
        } else {
            (U4::masked(self.get() - rhs.get()), false)
        }
    }

    /// Calculates `self * rhs`, keeping the product modulo 16.
    ///
    /// ```
    /// use uint4::U4;
    ///
    /// assert_eq!(U4::new(12).overflowing_mul(U4::new(2)), (U4::new(8), true));
    /// assert_eq!(U4::new(15).overflowing_mul(U4::new(15)), (U4::new(1), true));
    /// ```
    #[inline]
    pub const fn overflowing_mul(self, rhs: U4) -> (U4, bool) {
        // at most 225, fits the byte
        let product = self.get() * rhs.get();
        (U4::masked(product), product > U4::MAX.get())
    }

    /// Calculates `self / rhs`. A zero divisor yields `(self, true)`.
    #[inline]
    pub const fn overflowing_div(self, rhs: U4) -> (U4, bool) {
        if rhs.get() == 0 {
            cold_path();
            return (self, true);
        }
        (U4::masked(self.get() / rhs.get()), false)
    }

    /// Calculates `self % rhs`. A zero divisor yields `(self, true)`.
    #[inline]
    pub const fn overflowing_rem(self, rhs: U4) -> (U4, bool) {
        if rhs.get() == 0 {
            cold_path();
            return (self, true);
        }
        (U4::masked(self.get() % rhs.get()), false)
    }

    #[inline]
    pub const fn checked_add(self, rhs: U4) -> Option<U4> {
        match self.overflowing_add(rhs) {
            (value, false) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub const fn checked_sub(self, rhs: U4) -> Option<U4> {
        match self.overflowing_sub(rhs) {
            (value, false) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub const fn checked_mul(self, rhs: U4) -> Option<U4> {
        match self.overflowing_mul(rhs) {
            (value, false) => Some(value),
            _ => None,
        }
    }

    /// Returns `None` when `rhs` is zero.
    #[inline]
    pub const fn checked_div(self, rhs: U4) -> Option<U4> {
        match self.overflowing_div(rhs) {
            (value, false) => Some(value),
            _ => None,
        }
    }

    /// Returns `None` when `rhs` is zero.
    #[inline]
    pub const fn checked_rem(self, rhs: U4) -> Option<U4> {
        match self.overflowing_rem(rhs) {
            (value, false) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub const fn wrapping_add(self, rhs: U4) -> U4 {
        self.overflowing_add(rhs).0
    }

    #[inline]
    pub const fn wrapping_sub(self, rhs: U4) -> U4 {
        self.overflowing_sub(rhs).0
    }

    #[inline]
    pub const fn wrapping_mul(self, rhs: U4) -> U4 {
        self.overflowing_mul(rhs).0
    }

    /// Returns `(self / rhs, self % rhs)`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn quotient_and_remainder(self, rhs: U4) -> (U4, U4) {
        (self / rhs, self % rhs)
    }

    /// Multiplies into the full 8-bit product, returned as `(high, low)`
    /// nibbles.
    ///
    /// ```
    /// use uint4::U4;
    ///
    /// let (high, low) = U4::new(10).full_mul(U4::new(10));
    /// assert_eq!(U4::join(high, low), 100);
    /// ```
    #[inline]
    pub const fn full_mul(self, rhs: U4) -> (U4, U4) {
        U4::split(self.get() * rhs.get())
    }

    /// Divides the 8-bit value `dividend = (high, low)` by `self`, returning
    /// `(quotient, remainder)`.
    ///
    /// A quotient wider than four bits is truncated to its low nibble.
    ///
    /// ```
    /// use uint4::U4;
    ///
    /// let (q, r) = U4::new(10).full_div((U4::new(0b0110), U4::new(0b0100)));
    /// assert_eq!((q, r), (U4::new(10), U4::new(0)));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    #[inline]
    #[track_caller]
    pub const fn full_div(self, dividend: (U4, U4)) -> (U4, U4) {
        if self.get() == 0 {
            cold_path();
            panic!("attempt to divide by zero");
        }
        let combined = U4::join(dividend.0, dividend.1);
        (
            U4::masked(combined / self.get()),
            U4::masked(combined % self.get()),
        )
    }
}
