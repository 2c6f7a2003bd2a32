use async_trait::async_trait;

use crate::domain::ticket::TicketAnalysis;
use crate::error::AppResult;

/// Update-by-id access to the external tickets store.
///
/// The only mutation this service is allowed: set `category`, `sentiment`
/// and `processed = true` on the row matching `ticket_id`. It reports how
/// many rows matched; deciding what an empty match means is the caller's
/// business.
#[async_trait]
pub trait TicketStoreService: Send + Sync {
    async fn apply_analysis(
        &self,
        ticket_id: &str,
        analysis: &TicketAnalysis,
    ) -> AppResult<usize>;
}
