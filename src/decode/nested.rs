//! Nested-collection unwrapping
//!
//! Some payloads are not listings but a mapping whose array sits under a
//! named key, each element an envelope:
//!
//! ```text
//! {"trophies": [{"kind": "t6", "data": {...}}, ...]}
//! ```
//!
//! The mapping and the array are required. Individual elements are decoded
//! on their own and dropped if they do not fit.

use super::parse_body;
use crate::error::{Error, Result};
use crate::models::{Trophies, Trophy};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Field holding the trophy array inside a `TrophyList` payload
const TROPHIES_FIELD: &str = "trophies";

/// Why a single nested element was dropped
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementFault {
    #[error("element is not a mapping")]
    NotAMapping,

    #[error("element has no `data` field")]
    MissingData,

    #[error("element data does not match the record: {0}")]
    Shape(String),
}

/// Decode the record under an element's `data` field
pub fn decode_element<T: DeserializeOwned>(element: &Value) -> std::result::Result<T, ElementFault> {
    let map = element.as_object().ok_or(ElementFault::NotAMapping)?;
    let data = map.get("data").ok_or(ElementFault::MissingData)?;
    T::deserialize(data).map_err(|e| ElementFault::Shape(e.to_string()))
}

/// Decode the array under `field` of a mapping-shaped payload.
///
/// Fails only when `payload` is not a mapping, lacks `field`, or `field`
/// is not an array. Elements that fail [`decode_element`] are skipped and
/// the rest keep their source order.
pub fn unwrap_nested<T: DeserializeOwned>(payload: &Value, field: &str) -> Result<Vec<T>> {
    let map = payload
        .as_object()
        .ok_or_else(|| Error::not_a_mapping(format!("payload holding `{field}`")))?;
    let elements = map
        .get(field)
        .ok_or_else(|| Error::missing_field(field))?
        .as_array()
        .ok_or_else(|| Error::unexpected_type(field))?;

    let records = elements
        .iter()
        .enumerate()
        .filter_map(|(index, element)| match decode_element(element) {
            Ok(record) => Some(record),
            Err(fault) => {
                debug!("Skipping `{field}` element {index}: {fault}");
                None
            }
        })
        .collect();

    Ok(records)
}

/// Decode a `{"kind": "TrophyList", "data": {"trophies": [...]}}` body
pub fn decode_trophy_list(body: &[u8]) -> Result<Trophies> {
    let value = parse_body(body)?;
    let root = value
        .as_object()
        .ok_or_else(|| Error::not_a_mapping("trophy list"))?;
    let data = root.get("data").ok_or_else(|| Error::missing_field("data"))?;
    if !data.is_object() {
        return Err(Error::unexpected_type("data"));
    }
    let trophies: Vec<Trophy> = unwrap_nested(data, TROPHIES_FIELD)?;
    Ok(Trophies::from(trophies))
}
