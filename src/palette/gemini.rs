//! Gemini `generateContent` client
//!
//! API Documentation: https://ai.google.dev/api/generate-content

use super::{ColorEntry, GenerationError, PaletteGenerator, ResponseError};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Everything the client needs; the key is handed in, never looked up.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, parts joined. Empty when the model gave nothing.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.iter().filter_map(|p| p.text.as_deref()).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug)]
struct Inner {
    http: reqwest::Client,
    model: String,
    base_url: String,
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    inner: Arc<Inner>,
}

impl GeminiClient {
    pub fn new(cfg: GeminiConfig) -> anyhow::Result<Self> {
        let mut key = HeaderValue::from_str(&cfg.api_key).context("API key is not a valid header value")?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = cfg.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("build reqwest client")?;

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                model: cfg.model,
                base_url: cfg.base_url.trim_end_matches('/').to_string(),
            }),
        })
    }

    pub fn model(&self) -> &str {
        &self.inner.model
    }

    /// Raw model text for a theme, before any validation.
    pub async fn generate_raw(&self, theme: &str) -> Result<String, ResponseError> {
        let url = format!("{}/models/{}:generateContent", self.inner.base_url, self.inner.model);
        let body = json!({
            "contents": [{
                "parts": [{ "text": super::prompt::build_prompt(theme) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": super::prompt::response_schema(),
            }
        });

        tracing::debug!(model = %self.inner.model, %theme, "requesting palette");
        let response = self.inner.http.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ResponseError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GenerateResponse = response.json().await?;
        Ok(envelope.text())
    }
}

#[async_trait]
impl PaletteGenerator for GeminiClient {
    async fn generate(&self, theme: &str) -> Result<Vec<ColorEntry>, GenerationError> {
        let raw = self.generate_raw(theme).await.map_err(super::normalize)?;
        let palette = super::parse_palette(&raw).map_err(super::normalize)?;
        tracing::info!(%theme, colors = palette.len(), "palette generated");
        Ok(palette)
    }
}
