//! Gemini `generateContent` client

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;

use crate::error::{ApiError, GenerationError};
use crate::messages::{GenerateContentRequest, GenerateContentResponse, Tool};
use crate::{prompts, ItineraryResult, TextGenerator};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const MAX_SOURCES: usize = 3;

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Replace the HTTP client with one that gives up after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, reqwest::Error> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ApiError> {
        let response = self
            .client
            .post(format!("{}/models/{}:generateContent", self.base_url, self.model))
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<GenerateContentResponse>()
                .await
                .map_err(|e| ApiError::ResponseParseFailed(e.to_string())),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ApiError::Status {
                    status: status.as_u16(),
                    message: body,
                })
            }
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_marketing_description(
        &self,
        source: &str,
        destination: &str,
        price_first: Decimal,
        price_economy: Decimal,
    ) -> Result<String, GenerationError> {
        let request = GenerateContentRequest::new(prompts::marketing_description(
            source,
            destination,
            price_first,
            price_economy,
        ))
        .with_system_instruction(prompts::COPYWRITER_INSTRUCTION);

        let result = self.generate(&request).await.and_then(|response| {
            let text = response.text().trim().to_string();
            if text.is_empty() {
                Err(ApiError::EmptyResponse)
            } else {
                Ok(text)
            }
        });

        result.map_err(|e| {
            tracing::error!("Gemini API Error (Marketing Description): {}", e);
            GenerationError::MarketingDescription { cause: e.to_string() }
        })
    }

    async fn generate_itinerary(
        &self,
        destination: &str,
        date: NaiveDate,
    ) -> Result<ItineraryResult, GenerationError> {
        let request = GenerateContentRequest::new(prompts::itinerary(destination, date))
            .with_tool(Tool::GoogleSearch {});

        let result = self.generate(&request).await.and_then(|response| {
            let text = response.text();
            if text.trim().is_empty() {
                return Err(ApiError::EmptyResponse);
            }
            Ok(ItineraryResult {
                text,
                sources: response.sources(MAX_SOURCES),
            })
        });

        result.map_err(|e| {
            tracing::error!("Gemini API Error (Itinerary): {}", e);
            GenerationError::Itinerary { cause: e.to_string() }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ENDPOINT: &str = "/models/gemini-2.5-flash:generateContent";

    fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::new("test-key").with_base_url(server.uri())
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = GeminiClient::new("test-key").with_base_url("http://localhost:9000/");
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url, "http://localhost:9000");
        assert_eq!(client.model, DEFAULT_MODEL);
    }

    #[tokio::test]
    async fn test_marketing_description_trims_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "systemInstruction": { "parts": [{ "text": prompts::COPYWRITER_INSTRUCTION }] }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "  Ride in comfort.\n" }] } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server)
            .generate_marketing_description("PUNE", "GOA", Decimal::from(2800), Decimal::from(800))
            .await
            .unwrap();
        assert_eq!(text, "Ride in comfort.");
    }

    #[tokio::test]
    async fn test_itinerary_collects_three_sources() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(body_partial_json(json!({ "tools": [{ "googleSearch": {} }] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "1. **Gateway of India**" }] },
                    "groundingMetadata": { "groundingChunks": [
                        { "web": { "title": "one" } },
                        { "web": { "title": "two" } },
                        { "web": { "title": "three" } },
                        { "web": { "title": "four" } }
                    ] }
                }]
            })))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .generate_itinerary("MUMBAI", date())
            .await
            .unwrap();
        assert_eq!(result.text, "1. **Gateway of India**");
        assert_eq!(result.sources, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_empty_text_is_a_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate_itinerary("MUMBAI", date())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate itinerary.");
    }

    #[tokio::test]
    async fn test_api_error_is_reported_generically() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate_marketing_description("A", "B", Decimal::ONE, Decimal::ONE)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate marketing description.");
        match err {
            GenerationError::MarketingDescription { cause } => assert!(cause.contains("500")),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_disabled_generator() {
        let err = crate::DisabledGenerator
            .generate_itinerary("MUMBAI", date())
            .await
            .unwrap_err();
        assert_eq!(err, GenerationError::NotConfigured);
        assert_eq!(err.to_string(), "API key not configured.");
    }
}
