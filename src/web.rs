use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::json;
use crate::Optional;

/// Hands an [`Optional`] to JavaScript in its two-field shape.
pub fn to_js<T>(optional: &Optional<T>) -> Result<JsValue, JsValue>
where
    T: Serialize + Default,
{
    serde_wasm_bindgen::to_value(optional).map_err(JsValue::from)
}

/// Reads an [`Optional`] back from a JavaScript object `{ value, is_some }`.
pub fn from_js<T>(value: JsValue) -> Result<Optional<T>, JsValue>
where
    T: DeserializeOwned,
{
    serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
}

/// Renders a `{ value, is_some }` object as `Some(<json>)` or `None`.
#[wasm_bindgen]
pub fn describe_optional(value: JsValue) -> Result<String, JsValue> {
    let record: Value = serde_wasm_bindgen::from_value(value)?;
    json::describe_json(record).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Wraps `value` as present, or produces an absent record for `undefined`/`null`.
#[wasm_bindgen]
pub fn optional_from(value: JsValue) -> Result<JsValue, JsValue> {
    let value = if value.is_undefined() {
        Value::Null
    } else {
        serde_wasm_bindgen::from_value::<Value>(value)?
    };
    to_js(&json::nullable_json(value))
}

/// First element of a JavaScript array, or an absent record when it is empty.
#[wasm_bindgen]
pub fn optional_first(items: js_sys::Array) -> Result<JsValue, JsValue> {
    let optional = match crate::first_or_none(items.iter()) {
        Optional::Some(first) => Optional::some(serde_wasm_bindgen::from_value::<Value>(first)?),
        Optional::None => Optional::none(),
    };
    to_js(&optional)
}
