//! # Serialization Module
//!
//! Serde support for [`Optional`]. The externally visible shape is a struct with
//! exactly two fields, in this order:
//!
//! ```text
//! { "value": <payload or T::default()>, "is_some": <bool> }
//! ```
//!
//! `value` is always emitted, and readers must ignore it when `is_some` is false.
//! On the way back in, an absent record may omit `value` or carry anything there,
//! including a payload that does not decode as `T`. A `null` payload on a present
//! record is handed to `T`, so `Optional<Option<_>>` and `Optional<()>` round-trip.
//!
//! Keyed formats may put `value` before `is_some` (this crate writes it that way).
//! The payload is then held as a `serde_json::Value` until the flag is read, so
//! payloads borrowing from the input are not supported in that order.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::optional_type::Optional;

const NAME: &str = "Optional";
const FIELDS: &[&str] = &["value", "is_some"];

impl<T> Serialize for Optional<T>
where
    T: Serialize + Default,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct(NAME, FIELDS.len())?;
        match self {
            Optional::Some(value) => state.serialize_field("value", value)?,
            Optional::None => state.serialize_field("value", &T::default())?,
        }
        state.serialize_field("is_some", &self.is_some())?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "snake_case")]
enum Field {
    Value,
    IsSome,
}

// What was read for `value` before the flag decided whether it matters.
enum Payload<T> {
    Decoded(T),
    // `value` came before `is_some`; kept until the flag says whether to decode it.
    Buffered(serde_json::Value),
    Skipped,
}

struct OptionalVisitor<T>(PhantomData<T>);

impl<T> OptionalVisitor<T> {
    fn finish<E: de::Error>(payload: Option<Payload<T>>, is_some: Option<bool>) -> Result<Optional<T>, E> {
        match is_some {
            None => Err(de::Error::missing_field("is_some")),
            Some(false) => Ok(Optional::None),
            Some(true) => match payload {
                Some(Payload::Decoded(value)) => Ok(Optional::Some(value)),
                Some(Payload::Buffered(_)) | Some(Payload::Skipped) | None => {
                    Err(de::Error::missing_field("value"))
                }
            },
        }
    }
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for OptionalVisitor<T> {
    type Value = Optional<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("struct Optional with fields `value` and `is_some`")
    }

    // Positional formats carry no keys, so the payload is always decoded as `T`.
    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let value: T = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let is_some: bool = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        Self::finish(Some(Payload::Decoded(value)), Some(is_some))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut payload: Option<Payload<T>> = None;
        let mut is_some: Option<bool> = None;
        while let Some(key) = map.next_key()? {
            match key {
                Field::Value => {
                    if payload.is_some() {
                        return Err(de::Error::duplicate_field("value"));
                    }
                    payload = Some(match is_some {
                        Some(true) => Payload::Decoded(map.next_value()?),
                        Some(false) => {
                            map.next_value::<IgnoredAny>()?;
                            Payload::Skipped
                        }
                        None => Payload::Buffered(map.next_value()?),
                    });
                }
                Field::IsSome => {
                    if is_some.is_some() {
                        return Err(de::Error::duplicate_field("is_some"));
                    }
                    is_some = Some(map.next_value()?);
                }
            }
        }
        let payload = match payload {
            Some(Payload::Buffered(raw)) if is_some == Some(true) => {
                let value = T::deserialize(raw).map_err(<A::Error as de::Error>::custom)?;
                Some(Payload::Decoded(value))
            }
            other => other,
        };
        Self::finish(payload, is_some)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_struct(NAME, FIELDS, OptionalVisitor(PhantomData))
    }
}
