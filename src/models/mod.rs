//! Domain models
//!
//! Typed records returned by the user service. Content records (`Post`,
//! `Comment`, `Trophy`) arrive wrapped in `{kind, data}` envelopes and are
//! unwrapped by the [`decode`](crate::decode) module; account records are
//! plain JSON objects.

mod account;
mod content;
mod timestamp;
mod trophy;

pub use account::{Blocked, Friendship, User, UserShort};
pub use content::{Comment, Comments, Post, Posts};
pub use timestamp::Timestamp;
pub use trophy::{Trophies, Trophy};

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
