use crate::U4;

impl U4 {
    /// Number of trailing zero bits, at most [`U4::BITS`].
    ///
    /// ```
    /// use uint4::U4;
    ///
    /// assert_eq!(U4::new(0b1000).trailing_zeros(), 3);
    /// assert_eq!(U4::ZERO.trailing_zeros(), 4);
    /// ```
    #[inline]
    pub const fn trailing_zeros(self) -> u32 {
        let zeros = self.get().trailing_zeros();
        if zeros > U4::BITS { U4::BITS } else { zeros }
    }

    /// Number of leading zero bits within the nibble.
    #[inline]
    pub const fn leading_zeros(self) -> u32 {
        // the byte carries four padding zeros above the nibble
        self.get().leading_zeros() - (u8::BITS - U4::BITS)
    }

    #[inline]
    pub const fn count_ones(self) -> u32 {
        self.get().count_ones()
    }

    #[inline]
    pub const fn count_zeros(self) -> u32 {
        U4::BITS - self.count_ones()
    }

    /// Identity: a nibble is narrower than a byte.
    #[inline]
    pub const fn swap_bytes(self) -> U4 {
        self
    }

    #[inline]
    pub const fn is_power_of_two(self) -> bool {
        self.get().is_power_of_two()
    }

    /// The absolute value, which for an unsigned type is `self`.
    #[inline]
    pub const fn magnitude(self) -> U4 {
        self
    }

    /// `0` for zero, `1` otherwise.
    #[inline]
    pub const fn signum(self) -> U4 {
        if self.get() == 0 { U4::ZERO } else { U4::ONE }
    }

    /// Moves `n` steps from `self`.
    ///
    /// ```
    /// use uint4::U4;
    ///
    /// assert_eq!(U4::new(3).advanced_by(5), 8);
    /// assert_eq!(U4::new(3).advanced_by(-3), 0);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the result is outside `0..=15`.
    #[inline]
    #[track_caller]
    pub fn advanced_by(self, n: i64) -> U4 {
        U4::from_int(i128::from(self.get()) + i128::from(n))
    }

    /// The signed number of steps from `self` to `other`.
    ///
    /// ```
    /// use uint4::U4;
    ///
    /// assert_eq!(U4::new(2).distance_to(U4::new(14)), 12);
    /// assert_eq!(U4::new(14).distance_to(U4::new(2)), -12);
    /// ```
    #[inline]
    pub const fn distance_to(self, other: U4) -> i8 {
        other.get() as i8 - self.get() as i8
    }
}
