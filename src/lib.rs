//! A 4-bit unsigned integer.
//!
//! [`U4`] stores a value in `0..=15` and behaves like the native unsigned
//! integers: it converts from and to every primitive, compares and mixes with
//! them in expressions, and offers the overflow-reporting, checked, wrapping
//! and full-width arithmetic families, bit queries and shifts.
//!
//! Operators never leave the range silently. `+`, `-`, `*`, `/`, `%` panic
//! when the exact result does not fit; the `overflowing_*` methods report
//! wraparound instead.
//!
//! # Features
//!
//! - `serde` (default): `U4` serializes as a bare integer and deserializes
//!   with the same range check.
//!
//! # Example
//!
//! ```
//! use uint4::U4;
//!
//! let mut n = U4::new(0b0110);
//! n <<= 1;
//! assert_eq!(n, 0b1100);
//! assert_eq!(n >> -1, 0b1000);
//!
//! assert_eq!(U4::exact(16), None);
//! assert_eq!(U4::new(1).overflowing_sub(U4::new(3)), (U4::new(14), true));
//! ```

mod bits;
mod convert;
#[cfg(feature = "serde")]
mod de;
pub mod error;
mod format;
mod ops;
mod overflow;
pub mod prim;
#[cfg(feature = "serde")]
mod ser;
mod u4;
mod util;

pub use error::*;
pub use prim::*;
pub use u4::*;
