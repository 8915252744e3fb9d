//! Query options for listing endpoints

use crate::http::RequestConfig;
use serde::{Deserialize, Serialize};

/// Listing sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    Hot,
    New,
    Top,
    Controversial,
}

impl Sort {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::New => "new",
            Self::Top => "top",
            Self::Controversial => "controversial",
        }
    }
}

/// Time window for `top` and `controversial` sorts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Hour,
    Day,
    Week,
    Month,
    Year,
    All,
}

impl TimeRange {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::All => "all",
        }
    }
}

/// Options accepted by every listing endpoint.
///
/// `after` and `before` are cursors from a previous page (`Posts::after`,
/// `Comments::before`, ...). Nothing here advances them for you.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub after: Option<String>,
    pub before: Option<String>,
    /// Maximum number of items, the API caps this at 100
    pub limit: Option<u32>,
    /// Number of items already seen, used by the API for numbering
    pub count: Option<u32>,
    pub sort: Option<Sort>,
    pub time: Option<TimeRange>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    #[must_use]
    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    #[must_use]
    pub fn time(mut self, time: TimeRange) -> Self {
        self.time = Some(time);
        self
    }

    /// Add the set options to a request as query parameters
    pub fn apply(&self, mut config: RequestConfig) -> RequestConfig {
        if let Some(after) = &self.after {
            config = config.query("after", after.as_str());
        }
        if let Some(before) = &self.before {
            config = config.query("before", before.as_str());
        }
        if let Some(limit) = self.limit {
            config = config.query("limit", limit.to_string());
        }
        if let Some(count) = self.count {
            config = config.query("count", count.to_string());
        }
        if let Some(sort) = self.sort {
            config = config.query("sort", sort.as_str());
        }
        if let Some(time) = self.time {
            config = config.query("t", time.as_str());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_add_nothing() {
        let config = ListOptions::new().apply(RequestConfig::new());
        assert!(config.query.is_empty());
    }

    #[test]
    fn test_options_to_query() {
        let config = ListOptions::new()
            .after("t3_abc")
            .limit(50)
            .count(25)
            .sort(Sort::Top)
            .time(TimeRange::Week)
            .apply(RequestConfig::new().query("raw_json", "1"));

        assert_eq!(config.query.get("after"), Some(&"t3_abc".to_string()));
        assert_eq!(config.query.get("limit"), Some(&"50".to_string()));
        assert_eq!(config.query.get("count"), Some(&"25".to_string()));
        assert_eq!(config.query.get("sort"), Some(&"top".to_string()));
        assert_eq!(config.query.get("t"), Some(&"week".to_string()));
        assert_eq!(config.query.get("raw_json"), Some(&"1".to_string()));
        assert!(!config.query.contains_key("before"));
    }

    #[test]
    fn test_sort_serde_matches_query_value() {
        for sort in [Sort::Hot, Sort::New, Sort::Top, Sort::Controversial] {
            let json = serde_json::to_string(&sort).unwrap();
            assert_eq!(json, format!("\"{}\"", sort.as_str()));
        }
    }
}
