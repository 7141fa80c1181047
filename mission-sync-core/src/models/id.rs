use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Device and hero ids are opaque: clients send them as strings or numbers.
///
/// `null`, `0` and any non-scalar value read as absent.
pub(crate) fn opaque_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(id)) => Some(id),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    })
}
