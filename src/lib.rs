// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # geddit
//!
//! A typed client for the user endpoints of the Reddit API.
//!
//! ## Features
//!
//! - **Tagged Listing Decoding**: Mixed `{kind, data}` listings split into
//!   ordered `Posts` and `Comments`, tolerant of unknown or broken children
//! - **Auth**: Bearer tokens, OAuth2 password and client credentials grants
//! - **Transport**: Retries with backoff, rate limit headers on every call
//! - **Config**: YAML file plus `GEDDIT_*` environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use geddit::{Client, ClientConfig, ListOptions, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::from_file("geddit.yaml")?.apply_env();
//!     let client = Client::new(config)?;
//!
//!     let (posts, comments, response) = client
//!         .user()
//!         .overview_of("spez", &ListOptions::new().limit(25))
//!         .await?;
//!
//!     println!(
//!         "{} posts, {} comments, {:?} requests left",
//!         posts.len(),
//!         comments.len(),
//!         response.rate_limit.remaining
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  UserService: get, overview, posts, trophies, friend ... │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────┬─────────────┴─────────┬───────────────────┐
//! │     Auth     │         HTTP          │      Decode       │
//! ├──────────────┼───────────────────────┼───────────────────┤
//! │ Bearer       │ Retry + backoff       │ Kind dispatch     │
//! │ Password     │ Form / JSON bodies    │ Listing split     │
//! │ Client creds │ Rate limit metadata   │ Nested trophies   │
//! └──────────────┴───────────────────────┴───────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for geddit
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication implementations
pub mod auth;

/// HTTP client with retry
pub mod http;

/// Typed records
pub mod models;

/// Tagged envelope and listing decoding
pub mod decode;

/// Listing query options
pub mod options;

/// Client configuration
pub mod config;

/// API client handle
pub mod client;

/// User account operations
pub mod user;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use client::Client;
pub use config::ClientConfig;
pub use decode::{decode_listing, decode_trophy_list, Listing, ListingDecoder};
pub use http::Response;
pub use models::{Comment, Comments, Post, Posts, Trophies, Trophy, User};
pub use options::{ListOptions, Sort, TimeRange};
pub use user::UserService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
