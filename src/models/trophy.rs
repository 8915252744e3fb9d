//! Trophies

use super::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// An award shown on a user's profile (`t6`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trophy {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub award_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon_70: Option<String>,
    #[serde(default)]
    pub granted_at: Option<Timestamp>,
}

impl Trophy {
    /// A trophy carrying only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            award_id: None,
            description: None,
            url: None,
            icon_70: None,
            granted_at: None,
        }
    }
}

/// Trophies in the order the API listed them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trophies(Vec<Trophy>);

impl Trophies {
    pub fn into_vec(self) -> Vec<Trophy> {
        self.0
    }
}

impl From<Vec<Trophy>> for Trophies {
    fn from(trophies: Vec<Trophy>) -> Self {
        Self(trophies)
    }
}

impl Deref for Trophies {
    type Target = [Trophy];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Trophies {
    type Item = Trophy;
    type IntoIter = std::vec::IntoIter<Trophy>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trophies {
    type Item = &'a Trophy;
    type IntoIter = std::slice::Iter<'a, Trophy>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
