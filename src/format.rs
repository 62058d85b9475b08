use std::fmt;
use std::str::FromStr;

use crate::{Error, U4};

macro_rules! impl_fmt_traits {
    ($($trait:ident),*) => { $(
        impl fmt::$trait for U4 {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::$trait::fmt(&self.get(), f)
            }
        }
    )* };
}

impl_fmt_traits!(Display, Binary, Octal, LowerHex, UpperHex);

/// Parses a decimal integer and validates it.
///
/// ```
/// use uint4::{Error, U4};
///
/// assert_eq!("7".parse::<U4>(), Ok(U4::new(7)));
/// assert_eq!("16".parse::<U4>(), Err(Error::TooLarge(16)));
/// assert_eq!("-2".parse::<U4>(), Err(Error::Negative(-2)));
/// ```
impl FromStr for U4 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i128 = s.parse()?;
        U4::try_from(value)
    }
}
