//! User account operations
//!
//! Every method returns the decoded value together with the [`Response`]
//! metadata of the call. Methods without an `_of` suffix act on the
//! client's configured account.

use crate::client::Client;
use crate::decode::{decode_as, decode_trophy_list, Decoded, Listing, ListingDecoder, Selection};
use crate::error::{Error, Result};
use crate::http::{RequestConfig, Response};
use crate::models::{Blocked, Comments, Friendship, Posts, Trophies, User, UserShort};
use crate::options::ListOptions;
use reqwest::Method;
use serde_json::json;
use std::collections::HashMap;
use tracing::debug;

/// Handle for user endpoints, borrowed from a [`Client`].
#[derive(Debug, Clone, Copy)]
pub struct UserService<'a> {
    client: &'a Client,
}

impl<'a> UserService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Profile of a user
    pub async fn get(&self, username: &str) -> Result<(User, Response)> {
        let (body, response) = self
            .client
            .send(
                Method::GET,
                &format!("user/{username}/about"),
                RequestConfig::new(),
            )
            .await?;

        let value = crate::decode::parse_body(&body)?;
        match decode_as::<User>(&value) {
            Decoded::Record(user) => Ok((user, response)),
            Decoded::Unrecognized { kind } => Err(Error::decode(format!(
                "expected an account record, got kind `{kind}`"
            ))),
            Decoded::KindMismatch { found } => Err(Error::decode(format!(
                "expected an account record, got kind `{found}`"
            ))),
            Decoded::Malformed { reason, .. } => Err(Error::decode(reason)),
        }
    }

    /// Short profiles keyed by full account ID (`t2_...`)
    pub async fn get_multiple_by_id(
        &self,
        ids: &[&str],
    ) -> Result<(HashMap<String, UserShort>, Response)> {
        let config = RequestConfig::new().query("ids", ids.join(","));
        self.client
            .send_json(Method::GET, "api/user_data_by_account_ids", config)
            .await
    }

    /// Whether a username can still be registered
    pub async fn username_available(&self, username: &str) -> Result<(bool, Response)> {
        let config = RequestConfig::new().query("user", username);
        self.client
            .send_json(Method::GET, "api/username_available", config)
            .await
    }

    /// Posts and comments of the configured account
    pub async fn overview(&self, opts: &ListOptions) -> Result<(Posts, Comments, Response)> {
        self.overview_of(self.client.username()?, opts).await
    }

    /// Posts and comments of a user, newest first unless sorted otherwise
    pub async fn overview_of(
        &self,
        username: &str,
        opts: &ListOptions,
    ) -> Result<(Posts, Comments, Response)> {
        let (listing, response) = self
            .listing(&format!("user/{username}/overview"), opts, Selection::Both)
            .await?;
        let (posts, comments) = listing.split();
        Ok((posts, comments, response))
    }

    /// Posts submitted by the configured account
    pub async fn posts(&self, opts: &ListOptions) -> Result<(Posts, Response)> {
        self.posts_of(self.client.username()?, opts).await
    }

    /// Posts submitted by a user
    pub async fn posts_of(&self, username: &str, opts: &ListOptions) -> Result<(Posts, Response)> {
        let (listing, response) = self
            .listing(&format!("user/{username}/submitted"), opts, Selection::Posts)
            .await?;
        Ok((listing.into_posts(), response))
    }

    /// Comments written by the configured account
    pub async fn comments(&self, opts: &ListOptions) -> Result<(Comments, Response)> {
        self.comments_of(self.client.username()?, opts).await
    }

    /// Comments written by a user
    pub async fn comments_of(
        &self,
        username: &str,
        opts: &ListOptions,
    ) -> Result<(Comments, Response)> {
        let (listing, response) = self
            .listing(
                &format!("user/{username}/comments"),
                opts,
                Selection::Comments,
            )
            .await?;
        Ok((listing.into_comments(), response))
    }

    /// Posts and comments saved by the configured account
    pub async fn saved(&self, opts: &ListOptions) -> Result<(Posts, Comments, Response)> {
        let username = self.client.username()?;
        let (listing, response) = self
            .listing(&format!("user/{username}/saved"), opts, Selection::Both)
            .await?;
        let (posts, comments) = listing.split();
        Ok((posts, comments, response))
    }

    /// Posts upvoted by the configured account
    pub async fn upvoted(&self, opts: &ListOptions) -> Result<(Posts, Response)> {
        self.own_posts("upvoted", opts).await
    }

    /// Posts downvoted by the configured account
    pub async fn downvoted(&self, opts: &ListOptions) -> Result<(Posts, Response)> {
        self.own_posts("downvoted", opts).await
    }

    /// Posts hidden by the configured account
    pub async fn hidden(&self, opts: &ListOptions) -> Result<(Posts, Response)> {
        self.own_posts("hidden", opts).await
    }

    /// Posts gilded by the configured account
    pub async fn gilded(&self, opts: &ListOptions) -> Result<(Posts, Response)> {
        self.own_posts("gilded", opts).await
    }

    /// Friend relationship with a user
    pub async fn get_friendship(&self, username: &str) -> Result<(Friendship, Response)> {
        self.client
            .send_json(
                Method::GET,
                &format!("api/v1/me/friends/{username}"),
                RequestConfig::new(),
            )
            .await
    }

    /// Add a user as a friend
    pub async fn friend(&self, username: &str) -> Result<(Friendship, Response)> {
        let config = RequestConfig::new().json(json!({ "name": username }));
        self.client
            .send_json(
                Method::PUT,
                &format!("api/v1/me/friends/{username}"),
                config,
            )
            .await
    }

    /// Remove a user from the friend list
    pub async fn unfriend(&self, username: &str) -> Result<Response> {
        let (_, response) = self
            .client
            .send(
                Method::DELETE,
                &format!("api/v1/me/friends/{username}"),
                RequestConfig::new(),
            )
            .await?;
        Ok(response)
    }

    /// Block a user
    pub async fn block(&self, username: &str) -> Result<(Blocked, Response)> {
        let config = RequestConfig::new().form_field("name", username);
        self.client
            .send_json(Method::POST, "api/block_user", config)
            .await
    }

    /// Unblock a user. Costs an extra request to look up the account's
    /// full ID.
    pub async fn unblock(&self, username: &str) -> Result<Response> {
        let container = self.client.me_fullname().await?;
        let config = RequestConfig::new()
            .form_field("name", username)
            .form_field("type", "enemy")
            .form_field("container", container);

        let (_, response) = self
            .client
            .send(Method::POST, "api/unfriend", config)
            .await?;
        Ok(response)
    }

    /// Trophies of the configured account
    pub async fn trophies(&self) -> Result<(Trophies, Response)> {
        self.trophies_of(self.client.username()?).await
    }

    /// Trophies of a user, in display order
    pub async fn trophies_of(&self, username: &str) -> Result<(Trophies, Response)> {
        let (body, response) = self
            .client
            .send(
                Method::GET,
                &format!("api/v1/user/{username}/trophies"),
                RequestConfig::new(),
            )
            .await?;
        Ok((decode_trophy_list(&body)?, response))
    }

    async fn own_posts(&self, what: &str, opts: &ListOptions) -> Result<(Posts, Response)> {
        let username = self.client.username()?;
        let (listing, response) = self
            .listing(&format!("user/{username}/{what}"), opts, Selection::Posts)
            .await?;
        Ok((listing.into_posts(), response))
    }

    async fn listing(
        &self,
        path: &str,
        opts: &ListOptions,
        selection: Selection,
    ) -> Result<(Listing, Response)> {
        let config = opts.apply(RequestConfig::new().query("raw_json", "1"));
        let (body, response) = self.client.send(Method::GET, path, config).await?;
        let listing = ListingDecoder::new(selection).decode_slice(&body)?;

        debug!(
            path,
            children = listing.children_seen(),
            skipped = listing.skipped.total(),
            "Decoded listing"
        );
        Ok((listing, response))
    }
}
