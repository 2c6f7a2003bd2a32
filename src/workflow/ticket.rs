use crate::context::AppContext;
use crate::domain::ticket::{TicketAnalysis, TicketRequest};
use crate::error::{AppError, AppResult};

/// Runs the full pipeline for one ticket: classify the description, then
/// write the analysis back to the store. The first failure at any stage
/// aborts the whole run; no partial result escapes.
pub async fn process_ticket(
    ctx: &AppContext,
    request: &TicketRequest,
) -> AppResult<TicketAnalysis> {
    let analysis = ctx.classifier.classify_ticket(&request.description).await?;

    let affected = ctx
        .ticket_store
        .apply_analysis(&request.id, &analysis)
        .await?;

    // Zero matched rows means the id does not exist; the analysis is
    // discarded rather than retried or queued.
    if affected == 0 {
        return Err(AppError::TicketNotFound(request.id.clone()));
    }

    Ok(analysis)
}
