//! HTTP client module
//!
//! Provides the transport the user service sits on.
//!
//! # Features
//!
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Backoff Strategies**: Constant, linear, and exponential backoff
//! - **Authentication**: Integration with auth module
//! - **Response Metadata**: Status and `x-ratelimit-*` headers for every call

mod client;
mod response;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use response::{RateLimit, Response};
