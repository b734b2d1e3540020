//! Slack Web API client.
//!
//! Implements [`StaffDirectory`] on top of `users.list` and
//! `chat.postMessage`. Every call is bounded by the client-wide timeout from
//! [`SlackConfig`], and a listing stops after [`MAX_USER_PAGES`] pages or on a
//! repeated cursor.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, error, instrument};

use super::directory::{
    DirectoryError, OutgoingMessage, PostedMessage, StaffDirectory, UserRecord,
};
use super::metrics::record_slack_call;
use crate::config::SlackConfig;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Upper bound on `users.list` pages fetched for one listing.
pub const MAX_USER_PAGES: usize = 100;

#[derive(Clone)]
pub struct SlackClient {
    client: Client,
    bot_token: Secret<String>,
    /// API base without trailing slash, e.g. `https://slack.com/api`.
    base_url: String,
    page_size: u32,
}

impl std::fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackClient")
            .field("bot_token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct UsersListResponse {
    ok: bool,
    #[serde(default)]
    members: Vec<UserRecord>,
    #[serde(default)]
    response_metadata: Option<ResponseMetadata>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseMetadata {
    #[serde(default)]
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    #[serde(default)]
    channel: Option<String>,
    #[serde(default)]
    ts: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl SlackClient {
    pub fn new(config: &SlackConfig) -> Result<Self, DirectoryError> {
        if config.bot_token.expose_secret().trim().is_empty() {
            return Err(DirectoryError::Configuration(
                "Slack bot token is not configured".to_string(),
            ));
        }

        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                DirectoryError::Configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            bot_token: config.bot_token.clone(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
        })
    }

    fn url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    async fn fetch_users_page(
        &self,
        cursor: Option<&str>,
    ) -> Result<UsersListResponse, DirectoryError> {
        let mut query = vec![("limit", self.page_size.to_string())];
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }

        let response = self
            .client
            .get(self.url("users.list"))
            .bearer_auth(self.bot_token.expose_secret())
            .query(&query)
            .send()
            .await
            .map_err(|e| DirectoryError::Request(format!("Failed to reach Slack: {}", e)))?;

        let page: UsersListResponse = parse_response(response).await?;

        if !page.ok {
            error!(error = ?page.error, "Slack API error listing users");
            return Err(DirectoryError::Api(
                page.error.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        Ok(page)
    }

    async fn fetch_all_users(&self) -> Result<Vec<UserRecord>, DirectoryError> {
        let mut users = Vec::new();
        let mut seen_cursors = HashSet::new();
        let mut cursor: Option<String> = None;

        for _ in 0..MAX_USER_PAGES {
            let page = self.fetch_users_page(cursor.as_deref()).await?;
            users.extend(page.members);

            cursor = page
                .response_metadata
                .and_then(|meta| meta.next_cursor)
                .filter(|next| !next.is_empty());

            let Some(next) = &cursor else {
                return Ok(users);
            };

            if !seen_cursors.insert(next.clone()) {
                error!(cursor = %next, "Slack repeated a users.list cursor");
                return Err(DirectoryError::Response(format!(
                    "Slack returned repeated pagination cursor {}",
                    next
                )));
            }
        }

        error!(pages = MAX_USER_PAGES, "Slack users.list pagination did not terminate");
        Err(DirectoryError::Response(format!(
            "Slack directory exceeded {} pages",
            MAX_USER_PAGES
        )))
    }

    async fn send_message(
        &self,
        message: &OutgoingMessage,
    ) -> Result<PostedMessage, DirectoryError> {
        let response = self
            .client
            .post(self.url("chat.postMessage"))
            .bearer_auth(self.bot_token.expose_secret())
            .json(message)
            .send()
            .await
            .map_err(|e| DirectoryError::Request(format!("Failed to reach Slack: {}", e)))?;

        let result: PostMessageResponse = parse_response(response).await?;

        if !result.ok {
            error!(error = ?result.error, "Slack API error posting message");
            return Err(DirectoryError::Api(
                result.error.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        debug!(ts = ?result.ts, channel = ?result.channel, "Message posted to Slack");

        Ok(PostedMessage {
            channel: result.channel,
            ts: result.ts,
        })
    }
}

async fn parse_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, DirectoryError> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(DirectoryError::Response(format!(
            "Slack API returned error status {}: {}",
            status, body
        )));
    }

    response
        .json()
        .await
        .map_err(|e| DirectoryError::Response(format!("Failed to parse Slack response: {}", e)))
}

#[async_trait]
impl StaffDirectory for SlackClient {
    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<UserRecord>, DirectoryError> {
        let result = self.fetch_all_users().await;
        record_slack_call("users.list", result.is_ok());

        if let Ok(users) = &result {
            debug!(count = users.len(), "Fetched Slack directory");
        }

        result
    }

    #[instrument(skip(self, message), fields(channel = %message.channel))]
    async fn post_message(
        &self,
        message: &OutgoingMessage,
    ) -> Result<PostedMessage, DirectoryError> {
        let result = self.send_message(message).await;
        record_slack_call("chat.postMessage", result.is_ok());
        result
    }
}
