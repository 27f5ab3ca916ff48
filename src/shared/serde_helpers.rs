use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Identifier field that tolerates the backend sending either a JSON string
/// or a JSON number. Everything is normalized to `String` so joins across
/// collections compare one consistent type.
pub mod lenient_id {
    use super::*;

    pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(serde::de::Error::custom(format!(
                "id must be a string or number, got {}",
                other
            ))),
        }
    }
}

/// Optional variant of [`lenient_id`] for fields the backend sometimes omits
/// or nulls (counts, foreign keys on partial records).
pub mod lenient_id_opt {
    use super::*;

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_str(v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            Value::Number(n) => Ok(Some(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "id must be a string, number or null, got {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Record {
        #[serde(with = "super::lenient_id")]
        id: String,
        #[serde(default, with = "super::lenient_id_opt")]
        parent_id: Option<String>,
    }

    #[test]
    fn numeric_and_string_ids_normalize_to_equal_strings() {
        let numeric: Record = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        let string: Record = serde_json::from_str(r#"{"id": "42"}"#).unwrap();
        assert_eq!(numeric.id, string.id);
    }

    #[test]
    fn optional_id_accepts_null_and_absence() {
        let null: Record = serde_json::from_str(r#"{"id": 1, "parent_id": null}"#).unwrap();
        assert_eq!(null.parent_id, None);

        let absent: Record = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(absent.parent_id, None);

        let numeric: Record = serde_json::from_str(r#"{"id": 1, "parent_id": 7}"#).unwrap();
        assert_eq!(numeric.parent_id.as_deref(), Some("7"));
    }

    #[test]
    fn non_scalar_id_is_rejected() {
        let result = serde_json::from_str::<Record>(r#"{"id": {"inner": 1}}"#);
        assert!(result.is_err());
    }
}
