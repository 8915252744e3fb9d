//! Account and relationship records

use super::null_as_default;
use super::timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// A user account (`t2`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Short ID, without the `t2_` prefix
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "created_utc", default)]
    pub created: Option<Timestamp>,

    #[serde(rename = "link_karma", default, deserialize_with = "null_as_default")]
    pub post_karma: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment_karma: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_friend: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_employee: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_verified_email: bool,
    #[serde(rename = "over_18", default, deserialize_with = "null_as_default")]
    pub nsfw: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_suspended: bool,
}

impl User {
    /// Full ID of the account, e.g. `t2_abc`
    pub fn fullname(&self) -> String {
        format!("t2_{}", self.id)
    }
}

/// The reduced account view returned by bulk lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserShort {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "created_utc", default)]
    pub created: Option<Timestamp>,

    #[serde(rename = "link_karma", default, deserialize_with = "null_as_default")]
    pub post_karma: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment_karma: i64,

    #[serde(rename = "profile_over_18", default, deserialize_with = "null_as_default")]
    pub nsfw: bool,
}

/// A friend relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friendship {
    #[serde(rename = "rel_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "name", default, deserialize_with = "null_as_default")]
    pub friend: String,
    #[serde(rename = "id", default, deserialize_with = "null_as_default")]
    pub friend_id: String,
    #[serde(rename = "date", default)]
    pub created: Option<Timestamp>,
}

/// A block relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blocked {
    #[serde(rename = "name", default, deserialize_with = "null_as_default")]
    pub blocked: String,
    #[serde(rename = "id", default, deserialize_with = "null_as_default")]
    pub blocked_id: String,
    #[serde(rename = "date", default)]
    pub created: Option<Timestamp>,
}
