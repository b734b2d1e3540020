use serde::{Deserialize, Serialize};

use crate::services::UserRecord;

/// A directory entry as exposed to the kiosk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffMember {
    pub id: String,
    pub profile: serde_json::Value,
}

impl From<UserRecord> for StaffMember {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            profile: user.profile,
        }
    }
}
