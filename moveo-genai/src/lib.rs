//! # Moveo text generation
//!
//! Marketing copy for new trains and short trip itineraries for booked
//! journeys, produced by the Gemini generative language API. Results are
//! display-only and never written back into ledger state.

pub mod client;
pub mod error;
pub mod messages;
pub mod prompts;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use client::GeminiClient;
pub use error::GenerationError;

/// Itinerary text plus up to three grounding sources
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItineraryResult {
    pub text: String,
    pub sources: Vec<String>,
}

/// Text generation collaborator. Calls are one-shot: no retry, no fallback.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_marketing_description(
        &self,
        source: &str,
        destination: &str,
        price_first: Decimal,
        price_economy: Decimal,
    ) -> Result<String, GenerationError>;

    async fn generate_itinerary(
        &self,
        destination: &str,
        date: NaiveDate,
    ) -> Result<ItineraryResult, GenerationError>;
}

/// Stand-in used when no API key is configured
pub struct DisabledGenerator;

#[async_trait]
impl TextGenerator for DisabledGenerator {
    async fn generate_marketing_description(
        &self,
        _source: &str,
        _destination: &str,
        _price_first: Decimal,
        _price_economy: Decimal,
    ) -> Result<String, GenerationError> {
        Err(GenerationError::NotConfigured)
    }

    async fn generate_itinerary(
        &self,
        _destination: &str,
        _date: NaiveDate,
    ) -> Result<ItineraryResult, GenerationError> {
        Err(GenerationError::NotConfigured)
    }
}
