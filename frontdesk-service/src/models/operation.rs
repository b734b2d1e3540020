use serde::{Deserialize, Serialize};

pub const MESSAGE_SENT: &str = "Message successfully sent";
pub const MESSAGE_FAILED: &str = "Failed to send message";

/// Outcome reported to the kiosk for a notify request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperationResult {
    pub success: bool,
    pub message: String,
}

impl OperationResult {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: MESSAGE_SENT.to_string(),
        }
    }

    pub fn failed() -> Self {
        Self::failure(MESSAGE_FAILED)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
