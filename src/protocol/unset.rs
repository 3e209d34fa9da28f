//! Deserialization of unset values.
//!
//! A server may leave a field out, send it as `null`, or send its empty value
//! (`""` or `[]`). All three mean the field is unset.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Deserializer;
use serde_json::Value;

/// Deserializes a list, reading `null` as an empty list.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Deserializes the retained fields of a record, dropping the unset ones.
pub(crate) fn other<'de, D>(deserializer: D) -> Result<BTreeMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut fields = BTreeMap::<String, Value>::deserialize(deserializer)?;
    fields.retain(|_, value| !is_unset(value));
    Ok(fields)
}

/// Returns whether a value is `null`, `""`, or `[]`.
fn is_unset(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(values) => values.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde::Deserialize;
    use serde_json::Value;

    /// A record with a list and retained fields.
    #[derive(Debug, Deserialize, PartialEq)]
    struct Holder {
        /// A list.
        #[serde(default, deserialize_with = "super::list")]
        values: Vec<u32>,

        /// Everything else.
        #[serde(flatten, deserialize_with = "super::other")]
        other: BTreeMap<String, Value>,
    }

    #[test]
    fn a_null_list_is_empty() -> Result<(), Box<dyn std::error::Error>> {
        let holder = serde_json::from_str::<Holder>(r#"{"values": null}"#)?;
        assert!(holder.values.is_empty());

        let holder = serde_json::from_str::<Holder>(r#"{"values": [1, 2]}"#)?;
        assert_eq!(holder.values, [1, 2]);

        Ok(())
    }

    #[test]
    fn unset_fields_are_dropped() -> Result<(), Box<dyn std::error::Error>> {
        let omitted = serde_json::from_str::<Holder>("{}")?;
        let unset = serde_json::from_str::<Holder>(
            r#"{"name": "", "tags": [], "created": null, "values": []}"#,
        )?;
        assert_eq!(omitted, unset);
        assert!(unset.other.is_empty());

        let set = serde_json::from_str::<Holder>(r#"{"name": "x", "count": 0, "flag": false}"#)?;
        assert_eq!(set.other.len(), 3);
        assert_ne!(omitted, set);

        Ok(())
    }
}
