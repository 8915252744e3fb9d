//! Listing decoder module
//!
//! Turns `{kind, data}` tagged payloads into typed collections.
//!
//! # Overview
//!
//! - [`decode_as`] and [`Thing::decode`] decode a single envelope. They never
//!   fail: unknown kinds, kind mismatches and malformed data come back as
//!   [`Decoded`] variants.
//! - [`ListingDecoder`] walks a `Listing` envelope and splits its children
//!   into ordered posts and comments.
//! - [`unwrap_nested`] handles payloads whose array lives one level deeper
//!   under a named key, such as trophy lists.
//!
//! Envelope-level shape problems are [`Error`](crate::Error)s; element-level
//! problems are skipped according to [`FaultPolicy`].

mod listing;
mod nested;
mod thing;
mod types;

pub use listing::{decode_listing, Listing, ListingDecoder, SkipCounts};
pub use nested::{decode_element, decode_trophy_list, unwrap_nested, ElementFault};
pub use thing::{decode_as, Thing};
pub use types::{Decoded, FaultPolicy, Kind, Selection, TypedRecord};

use crate::error::{Error, Result};
use serde_json::Value;

/// Parse a raw response body into a JSON tree
pub fn parse_body(body: &[u8]) -> Result<Value> {
    serde_json::from_slice(body).map_err(|e| Error::Decode {
        message: format!("Failed to parse JSON: {e}"),
    })
}

#[cfg(test)]
mod tests;
