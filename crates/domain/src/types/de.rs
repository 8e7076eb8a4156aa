//! Field deserializers for loosely typed backend payloads

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing key.
///
/// Pair with `#[serde(default)]` on the container or field so absent keys
/// also fall back to `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Record {
        #[serde(deserialize_with = "null_as_default")]
        name: String,
        #[serde(deserialize_with = "null_as_default")]
        count: u64,
    }

    #[test]
    fn test_null_and_missing_fall_back_to_default() {
        let record: Record = serde_json::from_value(json!({"name": null})).unwrap();
        assert_eq!(record, Record::default());

        let record: Record = serde_json::from_value(json!({"name": "x", "count": 3})).unwrap();
        assert_eq!(record, Record { name: "x".into(), count: 3 });
    }

    #[test]
    fn test_wrong_type_still_fails() {
        assert!(serde_json::from_value::<Record>(json!({"count": "many"})).is_err());
    }
}
