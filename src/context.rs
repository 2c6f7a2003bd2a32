use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{ClassifierService, TicketStoreService};

/// Long-lived handles shared by every in-flight request: read-only config
/// plus the two remote collaborators, both safe for concurrent use.
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub classifier: Arc<dyn ClassifierService>,
    pub ticket_store: Arc<dyn TicketStoreService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        classifier: Arc<dyn ClassifierService>,
        ticket_store: Arc<dyn TicketStoreService>,
    ) -> Self {
        Self {
            config,
            classifier,
            ticket_store,
        }
    }
}
