//! Listing aggregation
//!
//! A listing is `{"kind": "Listing", "data": {"children": [...], "after":
//! ..., "before": ...}}` where each child is an envelope. Children can mix
//! kinds; the aggregator splits them into per-kind sequences that keep
//! their source order.

use super::thing::Thing;
use super::types::{Decoded, FaultPolicy, Kind, Selection};
use super::parse_body;
use crate::error::{Error, Result};
use crate::models::{Comment, Comments, Post, Posts};
use crate::types::OptionStringExt;
use serde_json::Value;
use tracing::debug;

/// Children that did not become records, by reason
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipCounts {
    /// Unknown `kind` tags
    pub unrecognized: usize,
    /// Known kinds the caller did not select
    pub unselected: usize,
    /// Elements that are not envelopes or whose data did not decode
    pub malformed: usize,
}

impl SkipCounts {
    pub fn total(&self) -> usize {
        self.unrecognized + self.unselected + self.malformed
    }
}

/// One decoded listing page.
///
/// `posts` and `comments` are always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub skipped: SkipCounts,
}

impl Listing {
    /// Number of children the source listing had
    pub fn children_seen(&self) -> usize {
        self.posts.len() + self.comments.len() + self.skipped.total()
    }

    pub fn posts(&self) -> Posts {
        Posts {
            posts: self.posts.clone(),
            after: self.after.clone(),
            before: self.before.clone(),
        }
    }

    pub fn into_posts(self) -> Posts {
        Posts {
            posts: self.posts,
            after: self.after,
            before: self.before,
        }
    }

    pub fn into_comments(self) -> Comments {
        Comments {
            comments: self.comments,
            after: self.after,
            before: self.before,
        }
    }

    /// Split into posts and comments, each carrying the page cursors
    pub fn split(self) -> (Posts, Comments) {
        let posts = Posts {
            posts: self.posts,
            after: self.after.clone(),
            before: self.before.clone(),
        };
        let comments = Comments {
            comments: self.comments,
            after: self.after,
            before: self.before,
        };
        (posts, comments)
    }
}

/// Decodes listing envelopes into [`Listing`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingDecoder {
    selection: Selection,
    policy: FaultPolicy,
}

impl ListingDecoder {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            policy: FaultPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: FaultPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn policy(&self) -> FaultPolicy {
        self.policy
    }

    /// Decode a raw response body
    pub fn decode_slice(&self, body: &[u8]) -> Result<Listing> {
        let value = parse_body(body)?;
        self.decode_value(&value)
    }

    /// Decode an already parsed listing envelope
    pub fn decode_value(&self, value: &Value) -> Result<Listing> {
        let root = value
            .as_object()
            .ok_or_else(|| Error::not_a_mapping("listing"))?;
        let data = root
            .get("data")
            .ok_or_else(|| Error::missing_field("data"))?
            .as_object()
            .ok_or_else(|| Error::unexpected_type("data"))?;
        let children = data
            .get("children")
            .ok_or_else(|| Error::missing_field("children"))?
            .as_array()
            .ok_or_else(|| Error::unexpected_type("children"))?;

        let mut listing = Listing {
            after: cursor(data.get("after")),
            before: cursor(data.get("before")),
            ..Listing::default()
        };

        for (index, child) in children.iter().enumerate() {
            match Thing::decode_selected(child, self.selection) {
                Decoded::Record(Thing::Post(post)) => listing.posts.push(post),
                Decoded::Record(Thing::Comment(comment)) => listing.comments.push(comment),
                Decoded::Record(Thing::Trophy(_)) | Decoded::KindMismatch { .. } => {
                    listing.skipped.unselected += 1;
                }
                Decoded::Unrecognized { kind } => {
                    debug!("Skipping listing child {index} with unknown kind '{kind}'");
                    listing.skipped.unrecognized += 1;
                }
                Decoded::Malformed { kind, reason } => {
                    if self.policy == FaultPolicy::Reject {
                        return Err(Error::MalformedElement {
                            index,
                            kind: kind.map_or("unknown", Kind::as_tag).to_string(),
                            reason,
                        });
                    }
                    debug!("Skipping malformed listing child {index}: {reason}");
                    listing.skipped.malformed += 1;
                }
            }
        }

        Ok(listing)
    }
}

/// Decode a listing body, keeping both posts and comments
pub fn decode_listing(body: &[u8]) -> Result<Listing> {
    ListingDecoder::new(Selection::Both).decode_slice(body)
}

fn cursor(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .none_if_empty()
}
