use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

use super::directory::{
    DirectoryError, OutgoingMessage, PostedMessage, StaffDirectory, UserRecord,
};

/// In-memory directory used when Slack is disabled and as a test double.
///
/// Records every posted message so callers can assert on what would have
/// been sent.
pub struct MockDirectory {
    users: Vec<UserRecord>,
    fail_list: bool,
    fail_post: bool,
    list_count: AtomicU64,
    sent: Mutex<Vec<OutgoingMessage>>,
}

impl MockDirectory {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users,
            fail_list: false,
            fail_post: false,
            list_count: AtomicU64::new(0),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Make `list_users` fail.
    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// Make `post_message` fail (the attempt is still recorded).
    pub fn failing_post(mut self) -> Self {
        self.fail_post = true;
        self
    }

    pub fn list_count(&self) -> u64 {
        self.list_count.load(Ordering::SeqCst)
    }

    pub async fn sent_messages(&self) -> Vec<OutgoingMessage> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl StaffDirectory for MockDirectory {
    async fn list_users(&self) -> Result<Vec<UserRecord>, DirectoryError> {
        self.list_count.fetch_add(1, Ordering::SeqCst);

        if self.fail_list {
            return Err(DirectoryError::Api("mock directory unavailable".to_string()));
        }

        Ok(self.users.clone())
    }

    async fn post_message(
        &self,
        message: &OutgoingMessage,
    ) -> Result<PostedMessage, DirectoryError> {
        let sequence = {
            let mut sent = self.sent.lock().await;
            sent.push(message.clone());
            sent.len()
        };

        if self.fail_post {
            return Err(DirectoryError::Api("channel_not_found".to_string()));
        }

        tracing::info!(
            channel = %message.channel,
            "[MOCK] Visitor notification would be sent"
        );

        Ok(PostedMessage {
            channel: Some(message.channel.clone()),
            ts: Some(format!("mock-{}", sequence)),
        })
    }
}
