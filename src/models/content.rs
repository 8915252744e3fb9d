//! Posts and comments

use super::null_as_default;
use super::timestamp::{deserialize_edited, Timestamp};
use serde::{Deserialize, Serialize};

/// A submitted post (`t3`).
///
/// Only `id` is required. Missing or `null` fields fall back to their
/// defaults so that sparse or forward-incompatible payloads still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    /// Full ID, e.g. `t3_abc123`
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "created_utc", default)]
    pub created: Option<Timestamp>,
    #[serde(default, deserialize_with = "deserialize_edited")]
    pub edited: Option<Timestamp>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub permalink: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "selftext", default, deserialize_with = "null_as_default")]
    pub body: String,

    /// `Some(true)` if upvoted by the client, `Some(false)` if downvoted
    #[serde(default)]
    pub likes: Option<bool>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub score: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub upvote_ratio: f32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub num_comments: i64,

    #[serde(rename = "subreddit", default, deserialize_with = "null_as_default")]
    pub subreddit_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subreddit_name_prefixed: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subreddit_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(rename = "author_fullname", default, deserialize_with = "null_as_default")]
    pub author_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub spoiler: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub locked: bool,
    #[serde(rename = "over_18", default, deserialize_with = "null_as_default")]
    pub nsfw: bool,
    #[serde(rename = "is_self", default, deserialize_with = "null_as_default")]
    pub is_self_post: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub saved: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stickied: bool,
}

/// A comment (`t1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub permalink: String,

    #[serde(rename = "created_utc", default)]
    pub created: Option<Timestamp>,
    #[serde(default, deserialize_with = "deserialize_edited")]
    pub edited: Option<Timestamp>,

    /// Full ID of the post or comment this replies to
    #[serde(default, deserialize_with = "null_as_default")]
    pub parent_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(rename = "author_fullname", default, deserialize_with = "null_as_default")]
    pub author_id: String,
    #[serde(default)]
    pub author_flair_text: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(default)]
    pub likes: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub controversiality: i32,

    #[serde(rename = "link_id", default, deserialize_with = "null_as_default")]
    pub post_id: String,
    #[serde(rename = "link_title", default, deserialize_with = "null_as_default")]
    pub post_title: String,
    #[serde(rename = "link_permalink", default, deserialize_with = "null_as_default")]
    pub post_permalink: String,
    #[serde(rename = "link_author", default, deserialize_with = "null_as_default")]
    pub post_author: String,
    #[serde(rename = "num_comments", default)]
    pub post_num_comments: Option<i64>,

    #[serde(rename = "subreddit", default, deserialize_with = "null_as_default")]
    pub subreddit_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subreddit_name_prefixed: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subreddit_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_submitter: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score_hidden: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub saved: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stickied: bool,
}

/// Posts taken from one listing page, with the page's cursors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Posts {
    pub posts: Vec<Post>,
    pub after: Option<String>,
    pub before: Option<String>,
}

impl Posts {
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }
}

impl IntoIterator for Posts {
    type Item = Post;
    type IntoIter = std::vec::IntoIter<Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.into_iter()
    }
}

/// Comments taken from one listing page, with the page's cursors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Comments {
    pub comments: Vec<Comment>,
    pub after: Option<String>,
    pub before: Option<String>,
}

impl Comments {
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Comment> {
        self.comments.iter()
    }
}

impl IntoIterator for Comments {
    type Item = Comment;
    type IntoIter = std::vec::IntoIter<Comment>;

    fn into_iter(self) -> Self::IntoIter {
        self.comments.into_iter()
    }
}
