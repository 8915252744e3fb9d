//! API client handle
//!
//! A [`Client`] owns the authenticated transport and the configured account
//! name. Services borrow it: `client.user().overview(&opts)`.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig, Response};
use crate::models::User;
use crate::user::UserService;
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info};

/// Cheaply cloneable handle to the API.
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    http: HttpClient,
    username: Option<String>,
}

impl Client {
    /// Build a client from a validated config
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = HttpClient::with_auth(config.http_config(), config.auth_config())?;
        let username = config.username().map(ToString::to_string);

        info!(
            base_url = %config.base_url,
            username = username.as_deref().unwrap_or("-"),
            "Created API client"
        );

        Ok(Self::from_http(http, username))
    }

    /// Wrap an already configured transport
    pub fn from_http(http: HttpClient, username: Option<String>) -> Self {
        Self {
            inner: Arc::new(ClientInner { http, username }),
        }
    }

    /// The underlying transport
    pub fn http(&self) -> &HttpClient {
        &self.inner.http
    }

    /// The account the client acts as
    pub fn username(&self) -> Result<&str> {
        self.inner
            .username
            .as_deref()
            .ok_or_else(|| Error::missing_config_field("username"))
    }

    /// Operations on user accounts
    pub fn user(&self) -> UserService<'_> {
        UserService::new(self)
    }

    /// Full ID (`t2_...`) of the authenticated account
    pub async fn me_fullname(&self) -> Result<String> {
        let (me, _) = self
            .send_json::<User>(Method::GET, "api/v1/me", RequestConfig::new())
            .await?;

        if me.id.is_empty() {
            return Err(Error::missing_field("id"));
        }
        Ok(me.fullname())
    }

    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<(Vec<u8>, Response)> {
        debug!(%method, path, "Sending API request");
        self.inner.http.request_bytes(method, path, config).await
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<(T, Response)> {
        let (body, response) = self.send(method, path, config).await?;
        let value = serde_json::from_slice(&body)
            .map_err(|e| Error::decode(format!("Failed to decode {path} response: {e}")))?;
        Ok((value, response))
    }
}
