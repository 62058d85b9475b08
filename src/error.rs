//! Error types for fallible nibble conversions.
//!
//! This module contains the [`Error`] type which represents every recoverable
//! failure when turning outside data into a [`U4`](crate::U4): integers that
//! do not fit, floats that are not numbers, text that does not parse, and
//! decode errors raised by serde.
//!
//! # Example
//!
//! ```
//! use uint4::{Error, Result, U4};
//!
//! fn try_nibble(raw: i32) -> Result<U4> {
//!     match U4::try_from(raw) {
//!         Ok(n) => Ok(n),
//!         Err(Error::TooLarge(v)) => {
//!             println!("{v} needs more than four bits");
//!             Err(Error::TooLarge(v))
//!         }
//!         Err(Error::Negative(v)) => {
//!             println!("{v} is below zero");
//!             Err(Error::Negative(v))
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//!
//! assert!(try_nibble(9).is_ok());
//! assert!(try_nibble(16).is_err());
//! ```

use std::fmt::{self, Display};
use std::num::ParseIntError;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when converting a
/// value into a [`U4`](crate::U4) through a reporting path.
///
/// # Variants
///
/// - [`Negative`](Error::Negative) - The source value was below zero
/// - [`TooLarge`](Error::TooLarge) - The source value was above 15
/// - [`NotANumber`](Error::NotANumber) - A floating point source was NaN
/// - [`Parse`](Error::Parse) - A string was not a decimal integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Message(String),

    /// The source value was negative.
    ///
    /// Carries the value widened to `i128`, which holds every signed
    /// primitive exactly.
    Negative(i128),

    /// The source value was larger than [`U4::MAX`](crate::U4::MAX).
    ///
    /// Carries the value widened to `u128`, which holds every non-negative
    /// primitive exactly.
    TooLarge(u128),

    /// A floating point source was NaN and has no integer part.
    NotANumber,

    /// The input string was not a valid decimal integer.
    Parse(ParseIntError),
}

impl From<ParseIntError> for Error {
    fn from(error: ParseIntError) -> Self {
        Error::Parse(error)
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

#[cfg(feature = "serde")]
impl serde::de::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    fn invalid_value(unexp: serde::de::Unexpected, exp: &dyn serde::de::Expected) -> Self {
        use serde::de::Unexpected;

        match unexp {
            Unexpected::Unsigned(v) => Error::TooLarge(v as u128),
            Unexpected::Signed(v) if v < 0 => Error::Negative(v as i128),
            Unexpected::Signed(v) => Error::TooLarge(v as u128),
            _ => Error::Message(format!("invalid value: {unexp}, expected {exp}")),
        }
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Message(message) => formatter.write_str(message),
            Error::Negative(value) => {
                write!(formatter, "negative value is not representable: {value}")
            }
            Error::TooLarge(value) => {
                write!(formatter, "not enough bits to represent value: {value}")
            }
            Error::NotANumber => formatter.write_str("NaN has no integer value"),
            Error::Parse(error) => write!(formatter, "invalid nibble literal: {error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(error) => Some(error),
            _ => None,
        }
    }
}
