/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Serde helpers for the REST gateway encoding.
//!
//! The gateway renders 64-bit integers as JSON strings (`"units": "100"`)
//! while 32-bit integers stay numeric. These helpers accept both forms.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Number(i64),
    Text(String),
}

impl StringOrNumber {
    fn into_i64<E: de::Error>(self) -> Result<i64, E> {
        match self {
            StringOrNumber::Number(v) => Ok(v),
            StringOrNumber::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|e| E::custom(format!("invalid integer '{s}': {e}"))),
        }
    }
}

/// Deserializes an `i64` encoded either as a JSON number or a JSON string
pub fn string_or_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer)?.into_i64()
}

/// Deserializes an `i32` encoded either as a JSON number or a JSON string
pub fn string_or_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = StringOrNumber::deserialize(deserializer)?.into_i64::<D::Error>()?;
    i32::try_from(value).map_err(|_| de::Error::custom(format!("{value} out of range for i32")))
}

/// Serializes an `i64` as a JSON string, the way the gateway expects int64 fields
pub fn i64_as_string<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}
