use axum::Json;
use axum::extract::State;
use serde::Serialize;
use tracing::{error, info};

use crate::context::AppContext;
use crate::domain::ticket::{TicketAnalysis, TicketRequest};
use crate::error::{AppError, AppResult};
use crate::workflow::ticket::process_ticket as run_pipeline;

#[derive(Serialize)]
pub struct ProcessTicketResponse {
    pub status: &'static str,
    pub analysis: TicketAnalysis,
}

/// `POST /process-ticket` — classify one ticket and mark it processed.
pub async fn process_ticket(
    State(ctx): State<AppContext>,
    Json(request): Json<TicketRequest>,
) -> Result<Json<ProcessTicketResponse>, AppError> {
    validate(&request)?;

    match run_pipeline(&ctx, &request).await {
        Ok(analysis) => {
            info!(
                ticket_id = %request.id,
                category = analysis.category.as_str(),
                sentiment = analysis.sentiment.as_str(),
                "ticket processed"
            );
            Ok(Json(ProcessTicketResponse {
                status: "success",
                analysis,
            }))
        }
        Err(err) => {
            error!(ticket_id = %request.id, error = %err, "ticket processing failed");
            Err(err)
        }
    }
}

/// Boundary validation: malformed requests never reach the pipeline.
fn validate(request: &TicketRequest) -> AppResult<()> {
    if request.id.trim().is_empty() {
        return Err(AppError::InvalidRequest("id must not be empty".to_string()));
    }
    if request.description.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "description must not be empty".to_string(),
        ));
    }
    Ok(())
}
