use std::sync::Arc;

use crate::config::Config;
use crate::db::EventRepository;
use crate::models::BudgetPolicy;
use crate::utils::error::ErrorMode;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventRepository>,
    pub error_mode: ErrorMode,
    pub budget_policy: BudgetPolicy,
}

impl AppState {
    pub fn new(
        events: Arc<dyn EventRepository>,
        error_mode: ErrorMode,
        budget_policy: BudgetPolicy,
    ) -> Self {
        Self {
            events,
            error_mode,
            budget_policy,
        }
    }

    pub fn from_config(events: Arc<dyn EventRepository>, config: &Config) -> Self {
        Self::new(events, config.error_mode, config.budget_policy)
    }
}
