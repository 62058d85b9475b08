//! Tests for the serde encoding contract

#![cfg(feature = "serde")]

use serde::de::IntoDeserializer;
use serde::de::value::{I64Deserializer, U64Deserializer, U128Deserializer};
use serde::{Deserialize, Serialize};
use uint4::{Error, U4};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
struct Embedded {
    number: U4,
}

// ==================== Serialize ====================

#[test]
fn test_serialize_bare_integer() {
    assert_eq!(serde_json::to_string(&U4::new(4)).unwrap(), "4");
    assert_eq!(serde_json::to_string(&U4::MAX).unwrap(), "15");
}

#[test]
fn test_serialize_embedded() {
    let embedded = Embedded {
        number: U4::new(3),
    };
    assert_eq!(serde_json::to_string(&embedded).unwrap(), r#"{"number":3}"#);
}

#[test]
fn test_serialize_sequence() {
    let nibbles = vec![U4::new(0), U4::new(7), U4::new(15)];
    assert_eq!(serde_json::to_string(&nibbles).unwrap(), "[0,7,15]");
}

// ==================== Deserialize ====================

#[test]
fn test_deserialize_embedded() {
    let json = r#"
        {
          "number": 9
        }
    "#;
    let embedded: Embedded = serde_json::from_str(json).unwrap();
    assert_eq!(
        embedded,
        Embedded {
            number: U4::new(9)
        }
    );
}

#[test]
fn test_round_trip_every_value() {
    for v in 0u8..=15 {
        let n = U4::new(v);
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(serde_json::from_str::<U4>(&json).unwrap(), n);
    }
}

#[test]
fn test_deserialize_out_of_range_fails() {
    let err = serde_json::from_str::<U4>("16").unwrap_err();
    assert!(err.to_string().contains("16"), "{err}");

    let err = serde_json::from_str::<U4>("-1").unwrap_err();
    assert!(err.to_string().contains("-1"), "{err}");

    assert!(serde_json::from_str::<Embedded>(r#"{"number":200}"#).is_err());
}

#[test]
fn test_deserialize_rejects_non_integers() {
    assert!(serde_json::from_str::<U4>("\"4\"").is_err());
    assert!(serde_json::from_str::<U4>("4.5").is_err());
    assert!(serde_json::from_str::<U4>("{}").is_err());
}

// ==================== Typed Decode Errors ====================

#[test]
fn test_typed_error_too_large() {
    let deserializer: U64Deserializer<Error> = 16u64.into_deserializer();
    assert_eq!(U4::deserialize(deserializer), Err(Error::TooLarge(16)));
}

#[test]
fn test_typed_error_negative() {
    let deserializer: I64Deserializer<Error> = (-3i64).into_deserializer();
    assert_eq!(U4::deserialize(deserializer), Err(Error::Negative(-3)));
}

#[test]
fn test_typed_error_wide_integer() {
    let deserializer: U128Deserializer<Error> = u128::MAX.into_deserializer();
    assert!(matches!(U4::deserialize(deserializer), Err(Error::Message(_))));

    let deserializer: U128Deserializer<Error> = 12u128.into_deserializer();
    assert_eq!(U4::deserialize(deserializer), Ok(U4::new(12)));
}

#[test]
fn test_typed_success() {
    let deserializer: I64Deserializer<Error> = 5i64.into_deserializer();
    assert_eq!(U4::deserialize(deserializer), Ok(U4::new(5)));
}
