use serde::{Deserialize, Serialize};

use crate::services::{Attachment, OutgoingMessage};

/// Accent color of the purpose attachment.
pub const PURPOSE_COLOR: &str = "#36a64f";
pub const PURPOSE_PRETEXT: &str = "*Purpose*";

/// Body posted by the kiosk when a visitor checks in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisitorAnnouncement {
    pub first_name: String,
    pub last_name: String,
    pub purpose: String,
    pub staff_id: String,
}

impl VisitorAnnouncement {
    /// Greets the staff member by the id the kiosk sent in the body, not by a
    /// resolved display name.
    pub fn greeting(&self) -> String {
        format!(
            "Hey {}, {} {} is here for you at the front desk.",
            self.staff_id, self.first_name, self.last_name
        )
    }

    pub fn purpose_attachment(&self) -> Attachment {
        Attachment {
            color: PURPOSE_COLOR.to_string(),
            pretext: PURPOSE_PRETEXT.to_string(),
            text: self.purpose.clone(),
            mrkdwn_in: vec!["pretext".to_string()],
        }
    }

    /// Direct message to `recipient`, posted as the bot.
    pub fn to_message(&self, recipient: &str) -> OutgoingMessage {
        OutgoingMessage {
            channel: recipient.to_string(),
            text: self.greeting(),
            attachments: vec![self.purpose_attachment()],
            as_user: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ada() -> VisitorAnnouncement {
        serde_json::from_value(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "purpose": "Interview",
            "staffId": "U123"
        }))
        .unwrap()
    }

    #[test]
    fn parses_camel_case_body() {
        let visitor = ada();
        assert_eq!(visitor.first_name, "Ada");
        assert_eq!(visitor.last_name, "Lovelace");
        assert_eq!(visitor.purpose, "Interview");
        assert_eq!(visitor.staff_id, "U123");
    }

    #[test]
    fn missing_field_is_an_error() {
        let result = serde_json::from_value::<VisitorAnnouncement>(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "purpose": "Interview"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn greeting_uses_body_staff_id() {
        assert_eq!(
            ada().greeting(),
            "Hey U123, Ada Lovelace is here for you at the front desk."
        );
    }

    #[test]
    fn message_targets_path_recipient() {
        let message = ada().to_message("U999");

        assert_eq!(message.channel, "U999");
        assert!(message.text.starts_with("Hey U123,"));
        assert!(message.as_user);
        assert_eq!(message.attachments.len(), 1);

        let attachment = &message.attachments[0];
        assert_eq!(attachment.color, PURPOSE_COLOR);
        assert_eq!(attachment.pretext, "*Purpose*");
        assert_eq!(attachment.text, "Interview");
    }
}
