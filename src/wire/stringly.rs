// crates.io
use serde::{Deserialize, Deserializer, Serializer, de::Error as DeError};
use serde_json::Value;
// self
use crate::wire::WireError;

/// Decodes a number-or-string `value` into its string form.
///
/// Standalone twin of the serde hooks for call sites that work on raw [`Value`] trees;
/// reports the offending `field` when the token is neither a number nor a string.
pub fn decode_stringly(field: &str, value: &Value) -> Result<String, WireError> {
	match value {
		Value::Number(number) => Ok(number.to_string()),
		Value::String(text) => Ok(text.clone()),
		_ => Err(WireError::MalformedField { field: field.to_owned() }),
	}
}

/// Deserializes a field the server emits as a JSON number or a JSON string, normalizing
/// both shapes to a string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	match Value::deserialize(deserializer)? {
		Value::Number(number) => Ok(number.to_string()),
		Value::String(text) => Ok(text),
		other => Err(DeError::custom(format!("expected a JSON number or string, found {other}"))),
	}
}

/// Serializes the field as a JSON string regardless of its numeric origin.
pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	serializer.serialize_str(value)
}
