use std::sync::Arc;

use crate::calls::CallService;
use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub calls: Arc<CallService>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            calls: Arc::new(CallService::new(config)),
        }
    }
}
