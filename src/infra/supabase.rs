use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::Serialize;

use crate::domain::ticket::{Category, Sentiment, TicketAnalysis};
use crate::error::{AppError, AppResult};
use crate::services::TicketStoreService;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Supabase-backed tickets store, spoken to over the PostgREST interface.
/// The client only ever issues the one mutation this service owns: an
/// update-by-primary-key on the `tickets` table.
pub struct SupabaseClient {
    http: Client,
    base_url: Option<String>,
    service_key: Option<String>,
}

impl SupabaseClient {
    pub fn new(base_url: Option<String>, service_key: Option<String>) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| AppError::Configuration(format!("failed to build HTTP client: {err}")))?;
        Ok(Self {
            http,
            base_url,
            service_key,
        })
    }

    fn api_details(&self) -> AppResult<(&str, &str)> {
        let base_url = self
            .base_url
            .as_deref()
            .ok_or_else(|| AppError::Configuration("Supabase URL not configured".to_string()))?;
        let service_key = self.service_key.as_deref().ok_or_else(|| {
            AppError::Configuration("Supabase service key not configured".to_string())
        })?;
        Ok((base_url, service_key))
    }

    fn tickets_endpoint(base_url: &str) -> String {
        format!("{}/rest/v1/tickets", base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TicketStoreService for SupabaseClient {
    async fn apply_analysis(
        &self,
        ticket_id: &str,
        analysis: &TicketAnalysis,
    ) -> AppResult<usize> {
        let (base_url, service_key) = self.api_details()?;
        let update = TicketUpdate::from_analysis(analysis);

        // `Prefer: return=representation` makes PostgREST echo the updated
        // rows, which is how we learn whether the id matched anything.
        let response = self
            .http
            .patch(Self::tickets_endpoint(base_url))
            .query(&[("id", format!("eq.{ticket_id}"))])
            .header("apikey", service_key)
            .header(AUTHORIZATION, format!("Bearer {service_key}"))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header("Prefer", "return=representation")
            .json(&update)
            .send()
            .await
            .map_err(|err| AppError::TicketStore(format!("failed to call Supabase: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::TicketStore(format!(
                "Supabase responded with {status}: {body}"
            )));
        }

        // The representation itself is discarded; its length is the affected
        // row count.
        let rows: Vec<serde_json::Value> = response.json().await.map_err(|err| {
            AppError::TicketStore(format!("failed to parse Supabase response: {err}"))
        })?;

        Ok(rows.len())
    }
}

#[derive(Serialize)]
struct TicketUpdate {
    category: Category,
    sentiment: Sentiment,
    processed: bool,
}

impl TicketUpdate {
    fn from_analysis(analysis: &TicketAnalysis) -> Self {
        Self {
            category: analysis.category,
            sentiment: analysis.sentiment,
            processed: true,
        }
    }
}
