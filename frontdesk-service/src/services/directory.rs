//! The staff directory and messaging capability consumed by the handlers.
//!
//! Handlers only see [`StaffDirectory`]; the Slack implementation lives in
//! [`super::slack`] and an in-memory one in [`super::mock`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Response error: {0}")]
    Response(String),

    #[error("API error: {0}")]
    Api(String),
}

/// A user account as returned by the directory listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub is_bot: bool,
    /// Platform profile, passed through untouched.
    #[serde(default)]
    pub profile: serde_json::Value,
}

/// Legacy message attachment: a colored block with a label and body text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attachment {
    pub color: String,
    pub pretext: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mrkdwn_in: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutgoingMessage {
    /// Recipient: a user id delivers to that user's direct-message channel.
    pub channel: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Post as the authenticated bot identity.
    pub as_user: bool,
}

/// Acknowledgement for a posted message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostedMessage {
    pub channel: Option<String>,
    pub ts: Option<String>,
}

#[async_trait]
pub trait StaffDirectory: Send + Sync {
    /// Fetch every user in the directory.
    async fn list_users(&self) -> Result<Vec<UserRecord>, DirectoryError>;

    async fn post_message(&self, message: &OutgoingMessage)
        -> Result<PostedMessage, DirectoryError>;
}
