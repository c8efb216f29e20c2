//! `Optional` over dynamic JSON payloads. The wasm bridge in `web` is a thin
//! layer over these.

use serde_json::Value;

use crate::optional_type::Optional;

/// `null` is the only absent JSON value; everything else is present.
pub fn nullable_json(value: Value) -> Optional<Value> {
    Optional::some(value).filter(|v| !v.is_null())
}

/// Reads a `{ value, is_some }` record and renders it as `Some(<json>)` or `None`.
pub fn describe_json(record: Value) -> Result<String, serde_json::Error> {
    let optional: Optional<Value> = serde_json::from_value(record)?;
    Ok(optional.to_string())
}
