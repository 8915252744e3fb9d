//! Authentication module
//!
//! Supports: Bearer tokens, OAuth2 password grant, OAuth2 client credentials
//!
//! The `Authenticator` applies the configured scheme to outgoing requests
//! and caches tokens for the OAuth2 grants until they expire.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, CachedToken, DEFAULT_TOKEN_URL};
