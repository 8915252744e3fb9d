//! Decoder types and traits
//!
//! Defines the closed set of wire kinds and the per-element outcome type.

use crate::models::{Comment, Post, Trophy, User};
use serde::de::DeserializeOwned;
use std::fmt;

/// Discriminator values the API puts in an envelope's `kind` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `t1`
    Comment,
    /// `t2`
    Account,
    /// `t3`, a link or self post
    Post,
    /// `t4`
    Message,
    /// `t5`
    Subreddit,
    /// `t6`
    Award,
    /// `more`, a placeholder for collapsed comments
    More,
    /// `Listing`
    Listing,
    /// `TrophyList`
    TrophyList,
}

impl Kind {
    /// Map a wire tag to a known kind. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "t1" => Some(Self::Comment),
            "t2" => Some(Self::Account),
            "t3" => Some(Self::Post),
            "t4" => Some(Self::Message),
            "t5" => Some(Self::Subreddit),
            "t6" => Some(Self::Award),
            "more" => Some(Self::More),
            "Listing" => Some(Self::Listing),
            "TrophyList" => Some(Self::TrophyList),
            _ => None,
        }
    }

    /// The wire tag for this kind
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Comment => "t1",
            Self::Account => "t2",
            Self::Post => "t3",
            Self::Message => "t4",
            Self::Subreddit => "t5",
            Self::Award => "t6",
            Self::More => "more",
            Self::Listing => "Listing",
            Self::TrophyList => "TrophyList",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A record type that is carried inside an envelope of a single kind.
pub trait TypedRecord: DeserializeOwned {
    /// The envelope kind this record is decoded from
    const KIND: Kind;
}

impl TypedRecord for Post {
    const KIND: Kind = Kind::Post;
}

impl TypedRecord for Comment {
    const KIND: Kind = Kind::Comment;
}

impl TypedRecord for User {
    const KIND: Kind = Kind::Account;
}

impl TypedRecord for Trophy {
    const KIND: Kind = Kind::Award;
}

/// Outcome of decoding one envelope.
///
/// Only `Record` carries data. The other variants describe why an element
/// was not turned into a record; none of them is an error on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    /// The envelope decoded into the requested record
    Record(T),
    /// The `kind` tag is not one this crate knows about
    Unrecognized { kind: String },
    /// The `kind` tag is known but is not what the caller asked for
    KindMismatch { found: Kind },
    /// The element is not an envelope, or its `data` does not fit the record
    Malformed { kind: Option<Kind>, reason: String },
}

impl<T> Decoded<T> {
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    /// The record, dropping the reason it may be missing
    pub fn into_record(self) -> Option<T> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        match self {
            Self::Record(record) => Decoded::Record(f(record)),
            Self::Unrecognized { kind } => Decoded::Unrecognized { kind },
            Self::KindMismatch { found } => Decoded::KindMismatch { found },
            Self::Malformed { kind, reason } => Decoded::Malformed { kind, reason },
        }
    }
}

/// What to do with an element whose kind is known but whose data does not
/// decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaultPolicy {
    /// Drop the element and keep going
    #[default]
    Skip,
    /// Fail the whole decode with [`Error::MalformedElement`](crate::Error::MalformedElement)
    Reject,
}

/// Which record kinds a caller wants out of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    Posts,
    Comments,
    #[default]
    Both,
    /// Every kind that has a record type, trophies included
    Any,
}

impl Selection {
    /// Whether elements of `kind` should be decoded
    pub fn includes(self, kind: Kind) -> bool {
        match (self, kind) {
            (Self::Any, Kind::Post | Kind::Comment | Kind::Award) => true,
            (Self::Posts | Self::Both, Kind::Post) => true,
            (Self::Comments | Self::Both, Kind::Comment) => true,
            _ => false,
        }
    }
}
