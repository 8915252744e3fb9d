//! Epoch-seconds timestamps

use chrono::{DateTime, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A UTC instant carried on the wire as seconds since the Unix epoch.
///
/// The API sends these as floats (`1577836800.0`), occasionally as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Build a timestamp from whole epoch seconds
    pub fn from_secs(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }

    /// Build a timestamp from fractional epoch seconds
    pub fn from_secs_f64(secs: f64) -> Option<Self> {
        if !secs.is_finite() {
            return None;
        }
        // Floor keeps the fraction non-negative for pre-epoch instants
        let mut whole = secs.floor();
        let mut nanos = ((secs - whole) * 1e9).round();
        if nanos >= 1e9 {
            whole += 1.0;
            nanos = 0.0;
        }
        if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
            return None;
        }
        Utc.timestamp_opt(whole as i64, nanos as u32)
            .single()
            .map(Self)
    }

    /// The underlying chrono instant
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Whole seconds since the epoch
    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let secs = self.0.timestamp() as f64 + f64::from(self.0.timestamp_subsec_nanos()) / 1e9;
        serializer.serialize_f64(secs)
    }
}

struct TimestampVisitor;

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("seconds since the Unix epoch")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Timestamp, E> {
        Timestamp::from_secs(v).ok_or_else(|| E::custom(format!("timestamp out of range: {v}")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Timestamp, E> {
        let secs = i64::try_from(v).map_err(|_| E::custom(format!("timestamp out of range: {v}")))?;
        self.visit_i64(secs)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Timestamp, E> {
        Timestamp::from_secs_f64(v).ok_or_else(|| E::custom(format!("timestamp out of range: {v}")))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

/// `edited` is `false` for untouched content and a timestamp otherwise.
#[derive(Deserialize)]
#[serde(untagged)]
enum Edited {
    Flag(#[allow(dead_code)] bool),
    At(Timestamp),
}

pub(crate) fn deserialize_edited<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Edited>::deserialize(deserializer)? {
        Some(Edited::At(at)) => Some(at),
        Some(Edited::Flag(_)) | None => None,
    })
}
