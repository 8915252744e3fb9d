//! Single-envelope decoding
//!
//! An envelope is `{"kind": "<tag>", "data": {...}}`. The tag picks the
//! record type and `data` is decoded into it.

use super::types::{Decoded, Kind, Selection, TypedRecord};
use crate::models::{Comment, Post, Trophy};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Any record that can appear as a listing child.
#[derive(Debug, Clone, PartialEq)]
pub enum Thing {
    Post(Post),
    Comment(Comment),
    Trophy(Trophy),
}

impl Thing {
    /// Decode an envelope of any kind that has a record type
    pub fn decode(value: &Value) -> Decoded<Thing> {
        Self::decode_selected(value, Selection::Any)
    }

    /// Decode an envelope, treating kinds outside `selection` as mismatches
    /// without looking at their data.
    pub fn decode_selected(value: &Value, selection: Selection) -> Decoded<Thing> {
        let (tag, data) = match split_envelope(value) {
            Ok(parts) => parts,
            Err(reason) => return Decoded::Malformed { kind: None, reason },
        };

        let Some(kind) = Kind::from_tag(tag) else {
            return Decoded::Unrecognized {
                kind: tag.to_string(),
            };
        };

        if !selection.includes(kind) {
            return Decoded::KindMismatch { found: kind };
        }

        match kind {
            Kind::Post => decode_data::<Post>(kind, data).map(Thing::Post),
            Kind::Comment => decode_data::<Comment>(kind, data).map(Thing::Comment),
            Kind::Award => decode_data::<Trophy>(kind, data).map(Thing::Trophy),
            Kind::Account
            | Kind::Message
            | Kind::Subreddit
            | Kind::More
            | Kind::Listing
            | Kind::TrophyList => Decoded::KindMismatch { found: kind },
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Self::Post(_) => Kind::Post,
            Self::Comment(_) => Kind::Comment,
            Self::Trophy(_) => Kind::Award,
        }
    }
}

/// Decode an envelope into one specific record type.
///
/// ```
/// use geddit::decode::{decode_as, Decoded};
/// use geddit::models::Post;
///
/// let value = serde_json::json!({"kind": "t3", "data": {"id": "p1"}});
/// let Decoded::Record(post) = decode_as::<Post>(&value) else { panic!() };
/// assert_eq!(post.id, "p1");
/// ```
pub fn decode_as<T: TypedRecord>(value: &Value) -> Decoded<T> {
    let (tag, data) = match split_envelope(value) {
        Ok(parts) => parts,
        Err(reason) => return Decoded::Malformed { kind: None, reason },
    };

    match Kind::from_tag(tag) {
        None => Decoded::Unrecognized {
            kind: tag.to_string(),
        },
        Some(kind) if kind != T::KIND => Decoded::KindMismatch { found: kind },
        Some(kind) => decode_data(kind, data),
    }
}

/// Pull the tag and payload out of an envelope
fn split_envelope(value: &Value) -> Result<(&str, &Value), String> {
    let map = value
        .as_object()
        .ok_or_else(|| "element is not a mapping".to_string())?;
    let tag = match map.get("kind") {
        Some(Value::String(tag)) => tag.as_str(),
        Some(_) => return Err("`kind` is not a string".to_string()),
        None => return Err("missing `kind`".to_string()),
    };
    let data = map.get("data").ok_or_else(|| "missing `data`".to_string())?;
    Ok((tag, data))
}

fn decode_data<T: DeserializeOwned>(kind: Kind, data: &Value) -> Decoded<T> {
    match T::deserialize(data) {
        Ok(record) => Decoded::Record(record),
        Err(e) => Decoded::Malformed {
            kind: Some(kind),
            reason: e.to_string(),
        },
    }
}
