pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use services::StaffDirectory;
use std::sync::Arc;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn StaffDirectory>,
}

impl AppState {
    pub fn new(directory: Arc<dyn StaffDirectory>) -> Self {
        Self { directory }
    }
}
