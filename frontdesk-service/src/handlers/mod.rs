//! HTTP handlers for frontdesk-service.

pub mod error;
pub mod fallback;
pub mod health;
pub mod metrics;
pub mod notify;
pub mod response;
pub mod staff;

pub use error::RelayError;
pub use fallback::{method_not_supported, not_found};
pub use health::health_check;
pub use notify::notify_staff;
pub use response::respond_with_json;
pub use staff::list_staff;
