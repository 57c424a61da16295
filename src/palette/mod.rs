//! Palette generation
//!
//! This module provides:
//! - Gemini `generateContent` client with a structured output schema
//! - Validation of the model's JSON into typed color entries
//! - The single user-facing error every failure collapses into

pub mod gemini;
pub mod models;
pub mod prompt;

use async_trait::async_trait;
use serde_json::Value;

pub use gemini::{GeminiClient, GeminiConfig};
pub use models::ColorEntry;

/// Message shown for every generation failure.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate color palette. The model may be unable to process this request. Please try a different theme.";

/// What went wrong while talking to the model. Only ever logged.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("Received an empty response from the API.")]
    EmptyResponse,

    #[error("API returned data in an unexpected format.")]
    MalformedResponse,

    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },
}

/// Error handed to the controller.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("{}", GENERATION_FAILED_MESSAGE)]
    Failed(#[source] ResponseError),
}

/// Anything that can turn a theme into a palette.
#[async_trait]
pub trait PaletteGenerator: Send + Sync {
    async fn generate(&self, theme: &str) -> Result<Vec<ColorEntry>, GenerationError>;
}

/// Validate the raw model text and convert it into color entries.
pub fn parse_palette(raw: &str) -> Result<Vec<ColorEntry>, ResponseError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ResponseError::EmptyResponse);
    }

    let value: Value = serde_json::from_str(text)?;
    let Value::Array(items) = value else {
        return Err(ResponseError::MalformedResponse);
    };

    items
        .iter()
        .map(|item| {
            Some(ColorEntry {
                hex: required_str(item, "hex")?,
                name: required_str(item, "name")?,
                description: required_str(item, "description")?,
            })
        })
        .collect::<Option<Vec<_>>>()
        .ok_or(ResponseError::MalformedResponse)
}

fn required_str(item: &Value, field: &str) -> Option<String> {
    match item.get(field)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Log the underlying cause and normalize it for the user.
pub fn normalize(err: ResponseError) -> GenerationError {
    tracing::error!(error = %err, "error generating palette");
    GenerationError::Failed(err)
}
