//! Client configuration
//!
//! `ClientConfig` is read from YAML and can be overridden from the
//! environment:
//!
//! ```yaml
//! user_agent: "linux:my-app:v0.1 (by /u/me)"
//! timeout_secs: 20
//! credentials:
//!   client_id: abc
//!   client_secret: def
//!   username: me
//!   password: hunter2
//! ```

use crate::auth::{AuthConfig, DEFAULT_TOKEN_URL};
use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::types::{BackoffType, OptionStringExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Base URL for authenticated API calls
pub const DEFAULT_BASE_URL: &str = "https://oauth.reddit.com";

/// Environment variables read by [`ClientConfig::apply_env`]
pub const ENV_CLIENT_ID: &str = "GEDDIT_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "GEDDIT_CLIENT_SECRET";
pub const ENV_USERNAME: &str = "GEDDIT_USERNAME";
pub const ENV_PASSWORD: &str = "GEDDIT_PASSWORD";
pub const ENV_ACCESS_TOKEN: &str = "GEDDIT_ACCESS_TOKEN";
pub const ENV_USER_AGENT: &str = "GEDDIT_USER_AGENT";

// ============================================================================
// Client Config
// ============================================================================

/// Everything needed to build a [`Client`](crate::Client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for API requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OAuth2 token endpoint
    #[serde(default = "default_token_url")]
    pub token_url: String,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retries for failed requests
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Backoff between retries
    #[serde(default)]
    pub backoff: BackoffType,

    /// App and account credentials for the OAuth2 grants
    #[serde(default)]
    pub credentials: Option<Credentials>,

    /// Pre-issued bearer token; takes precedence over `credentials`
    #[serde(default)]
    pub access_token: Option<String>,

    /// Account the `overview`/`posts`/... shortcuts act on when no
    /// credentials are configured
    #[serde(default)]
    pub username: Option<String>,
}

/// OAuth2 app credentials, with account login for the password grant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_token_url() -> String {
    DEFAULT_TOKEN_URL.to_string()
}

fn default_user_agent() -> String {
    format!("geddit/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_url: default_token_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            backoff: BackoffType::default(),
            credentials: None,
            access_token: None,
            username: None,
        }
    }
}

impl ClientConfig {
    /// Parse a config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse client config YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Override fields from the process environment
    #[must_use]
    pub fn apply_env(self) -> Self {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Override fields using `lookup` in place of the environment
    #[must_use]
    pub fn apply_env_with(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).none_if_empty();

        if let Some(agent) = get(ENV_USER_AGENT) {
            self.user_agent = agent;
        }
        if let Some(token) = get(ENV_ACCESS_TOKEN) {
            self.access_token = Some(token);
        }

        let client_id = get(ENV_CLIENT_ID);
        if client_id.is_some() || self.credentials.is_some() {
            let mut credentials = self.credentials.take().unwrap_or_default();
            if let Some(id) = client_id {
                credentials.client_id = id;
            }
            if let Some(secret) = get(ENV_CLIENT_SECRET) {
                credentials.client_secret = secret;
            }
            if let Some(username) = get(ENV_USERNAME) {
                credentials.username = Some(username);
            }
            if let Some(password) = get(ENV_PASSWORD) {
                credentials.password = Some(password);
            }
            self.credentials = Some(credentials);
        } else if let Some(username) = get(ENV_USERNAME) {
            self.username = Some(username);
        }

        self
    }

    /// Check the config for values that can never work
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)?;
        url::Url::parse(&self.token_url)?;

        if self.user_agent.trim().is_empty() {
            return Err(Error::missing_config_field("user_agent"));
        }

        if let Some(credentials) = &self.credentials {
            if credentials.client_id.is_empty() {
                return Err(Error::missing_config_field("credentials.client_id"));
            }
            if credentials.username.is_some() != credentials.password.is_some() {
                return Err(Error::config(
                    "credentials.username and credentials.password must be set together",
                ));
            }
        }

        Ok(())
    }

    /// The account the client acts as, if known
    pub fn username(&self) -> Option<&str> {
        self.credentials
            .as_ref()
            .and_then(|c| c.username.as_deref())
            .or(self.username.as_deref())
    }

    /// Auth scheme implied by the configured token or credentials
    pub fn auth_config(&self) -> AuthConfig {
        if let Some(token) = &self.access_token {
            return AuthConfig::Bearer {
                token: token.clone(),
            };
        }

        match &self.credentials {
            Some(Credentials {
                client_id,
                client_secret,
                username: Some(username),
                password: Some(password),
            }) => AuthConfig::Password {
                token_url: self.token_url.clone(),
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
                username: username.clone(),
                password: password.clone(),
            },
            Some(credentials) => AuthConfig::ClientCredentials {
                token_url: self.token_url.clone(),
                client_id: credentials.client_id.clone(),
                client_secret: credentials.client_secret.clone(),
            },
            None => AuthConfig::None,
        }
    }

    /// Transport settings
    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::builder()
            .base_url(self.base_url.clone())
            .timeout(Duration::from_secs(self.timeout_secs))
            .max_retries(self.max_retries)
            .backoff(
                self.backoff,
                Duration::from_millis(100),
                Duration::from_secs(60),
            )
            .user_agent(self.user_agent.clone())
            .build()
    }
}
