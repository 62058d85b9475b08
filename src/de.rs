use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Unexpected, Visitor};

use crate::U4;

struct NibbleVisitor;

impl<'de> Visitor<'de> for NibbleVisitor {
    type Value = U4;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer between 0 and 15")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        U4::exact(v).ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        U4::exact(v).ok_or_else(|| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        U4::try_from(v).map_err(E::custom)
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        U4::try_from(v).map_err(E::custom)
    }
}

/// Deserializes from an integer in `0..=15`.
///
/// Anything else is a decode error carrying the rejected value; with
/// [`Error`](crate::Error) as the deserializer's error type it arrives as
/// [`Error::TooLarge`](crate::Error::TooLarge) or
/// [`Error::Negative`](crate::Error::Negative).
impl<'de> Deserialize<'de> for U4 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_u8(NibbleVisitor)
    }
}
