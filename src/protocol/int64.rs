//! Deserialization of 64-bit integers.
//!
//! Protocol buffer JSON encodes `int64` values as decimal strings while older
//! Avro-based servers emit plain JSON numbers. Both are accepted.

use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error as _;

/// Either encoding of a 64-bit integer.
#[derive(Deserialize)]
#[serde(untagged)]
enum Int64 {
    /// A JSON number.
    Number(i64),

    /// A decimal string.
    Text(String),
}

/// Deserializes an optional 64-bit integer.
pub(crate) fn option<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Int64>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Int64::Number(value)) => Ok(Some(value)),
        Some(Int64::Text(value)) => value
            .parse()
            .map(Some)
            .map_err(|err| D::Error::custom(format!("invalid int64 `{value}`: {err}"))),
    }
}
