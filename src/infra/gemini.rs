use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header::CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::ticket::{Category, Sentiment, TicketAnalysis};
use crate::error::{AppError, AppResult};
use crate::services::{ClassifierService, build_classification_prompt};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Gemini-backed classifier. Every call requests JSON output constrained to
/// the two closed enumerations, with temperature pinned to zero so repeated
/// calls on the same ticket tend to the same classification.
pub struct GeminiClient {
    http: Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: String) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| AppError::Configuration(format!("failed to build HTTP client: {err}")))?;
        Ok(Self {
            http,
            api_key,
            model,
        })
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| AppError::Configuration("Gemini API key not configured".to_string()))
    }

    fn generate_endpoint(&self) -> String {
        format!("{GEMINI_API_BASE}/{}:generateContent", self.model)
    }

    /// The output schema sent with every request: an object holding exactly
    /// one category label and one sentiment label.
    fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "category": { "type": "STRING", "enum": Category::LABELS },
                "sentiment": { "type": "STRING", "enum": Sentiment::LABELS },
            },
            "required": ["category", "sentiment"],
        })
    }

    /// Parse the model's JSON text into an analysis. Strict: a label outside
    /// the closed sets is a failure here, never a silent coercion.
    fn parse_analysis(text: &str) -> AppResult<TicketAnalysis> {
        serde_json::from_str(text).map_err(|err| {
            AppError::Classification(format!("model returned a non-conforming result: {err}"))
        })
    }
}

#[async_trait]
impl ClassifierService for GeminiClient {
    async fn classify_ticket(&self, description: &str) -> AppResult<TicketAnalysis> {
        let api_key = self.api_key()?;
        let prompt = build_classification_prompt(description);

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.0,
                response_mime_type: "application/json",
                response_schema: Self::response_schema(),
            },
        };

        let response = self
            .http
            .post(self.generate_endpoint())
            .header("x-goog-api-key", api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|err| AppError::Classification(format!("failed to call Gemini: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::Classification(format!(
                "Gemini responded with {status}: {body}"
            )));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|err| {
            AppError::Classification(format!("failed to parse Gemini response: {err}"))
        })?;

        let text = payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| {
                AppError::Classification("Gemini response contained no candidates".to_string())
            })?;

        Self::parse_analysis(&text)
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_conforming_model_result() {
        let analysis =
            GeminiClient::parse_analysis(r#"{"category":"Technical","sentiment":"Negative"}"#)
                .expect("conforming result should parse");
        assert_eq!(analysis.category, Category::Technical);
        assert_eq!(analysis.sentiment, Sentiment::Negative);
    }

    #[test]
    fn rejects_a_label_outside_the_schema() {
        let result =
            GeminiClient::parse_analysis(r#"{"category":"Spam","sentiment":"Negative"}"#);
        assert!(matches!(result, Err(AppError::Classification(_))));
    }

    #[test]
    fn rejects_free_text_that_is_not_json() {
        let result = GeminiClient::parse_analysis("The ticket looks technical and negative.");
        assert!(matches!(result, Err(AppError::Classification(_))));
    }

    #[test]
    fn schema_restricts_both_fields_to_the_closed_sets() {
        let schema = GeminiClient::response_schema();
        assert_eq!(
            schema["properties"]["category"]["enum"],
            json!(["Technical", "Billing", "Commercial"])
        );
        assert_eq!(
            schema["properties"]["sentiment"]["enum"],
            json!(["Positive", "Neutral", "Negative"])
        );
        assert_eq!(schema["required"], json!(["category", "sentiment"]));
    }

    #[test]
    fn endpoint_includes_the_configured_model() {
        let client = GeminiClient::new(Some("key".to_string()), "gemini-1.5-flash".to_string())
            .expect("client should build");
        assert!(
            client
                .generate_endpoint()
                .ends_with("/models/gemini-1.5-flash:generateContent")
        );
    }

    #[test]
    fn missing_api_key_is_a_configuration_error() {
        let client =
            GeminiClient::new(None, "gemini-1.5-flash".to_string()).expect("client should build");
        assert!(matches!(
            client.api_key(),
            Err(AppError::Configuration(_))
        ));
    }
}
