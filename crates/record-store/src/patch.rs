//! # Partial-Update Merger
//!
//! Update payloads are sparse: every field is an `Option`, and only `Some` fields are
//! written. A field that is itself nullable is modelled as `Option<Option<V>>` so that
//! "not sent" (`None`) stays distinct from "explicitly cleared" (`Some(None)`).
//!
//! Identifiers and creation timestamps never appear in update types, so no payload can
//! reach them.

use serde::{Deserialize, Deserializer};

/// Overwrites `slot` when the update carries a value; leaves it untouched otherwise.
pub fn assign<V>(slot: &mut V, value: Option<V>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Serde adapter for nullable update fields.
///
/// Use together with `#[serde(default)]`: a missing key deserializes to `None`, an
/// explicit `null` to `Some(None)`, and a value to `Some(Some(value))`.
pub fn nullable<'de, D, V>(deserializer: D) -> Result<Option<Option<V>>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    Option::<V>::deserialize(deserializer).map(Some)
}
