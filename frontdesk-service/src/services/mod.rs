pub mod directory;
pub mod metrics;
pub mod mock;
pub mod slack;

pub use self::directory::{
    Attachment, DirectoryError, OutgoingMessage, PostedMessage, StaffDirectory, UserRecord,
};
pub use self::metrics::{get_metrics, init_metrics, record_slack_call};
pub use self::mock::MockDirectory;
pub use self::slack::{SlackClient, MAX_USER_PAGES};
