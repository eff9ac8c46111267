//! Async image-model client for manga panels
//!
//! Sends the panel prompt to a `generateContent`-style endpoint and turns
//! the first inline image in the reply into a data URI. Any transport or
//! API failure is reported as [`ClashError::Render`]; the controller
//! decides what to do with it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::core::config::RendererSettings;
use crate::core::error::{ClashError, Result};
use crate::render::{build_panel_prompt, PanelArtifact, PanelRenderer, PanelRequest};

/// Async client for the panel image model
pub struct ImageClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl ImageClient {
    /// Create a new client with explicit configuration
    ///
    /// `timeout` bounds each whole request, connect through body.
    pub fn new(api_key: String, api_url: String, model: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClashError::Render(e.to_string()))?;
        Ok(Self {
            client,
            api_key,
            api_url,
            model,
        })
    }

    /// Create a client from environment variables
    ///
    /// Required: PANEL_API_KEY
    /// Optional: PANEL_API_URL, PANEL_MODEL (default to the renderer settings)
    pub fn from_env(settings: &RendererSettings) -> Result<Self> {
        let api_key = std::env::var("PANEL_API_KEY")
            .map_err(|_| ClashError::Render("PANEL_API_KEY not set".into()))?;
        let api_url = std::env::var("PANEL_API_URL").unwrap_or_else(|_| settings.api_url.clone());
        let model = std::env::var("PANEL_MODEL").unwrap_or_else(|_| settings.model.clone());

        Self::new(api_key, api_url, model, Duration::from_millis(settings.timeout_ms))
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.api_url.trim_end_matches('/'), self.model)
    }

    /// Send one prompt and return the first inline image, if any
    pub async fn generate(&self, prompt: &str) -> Result<Option<PanelArtifact>> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ClashError::Render(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClashError::Render(format!("API error {}: {}", status, error_text)));
        }

        let reply: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ClashError::Render(e.to_string()))?;

        Ok(extract_artifact(&reply))
    }
}

#[async_trait]
impl PanelRenderer for ImageClient {
    async fn render(&self, request: &PanelRequest<'_>) -> Result<Option<PanelArtifact>> {
        let prompt = build_panel_prompt(request);
        tracing::debug!(
            model = %self.model,
            phase = request.outcome.phase_index,
            "Requesting panel"
        );
        self.generate(&prompt).await
    }
}

/// First inline image across all candidates, as a data URI
fn extract_artifact(reply: &GenerateResponse) -> Option<PanelArtifact> {
    reply
        .candidates
        .iter()
        .filter_map(|c| c.content.as_ref())
        .flat_map(|content| content.parts.iter())
        .find_map(|part| part.inline_data.as_ref())
        .map(|data| PanelArtifact(format!("data:{};base64,{}", data.mime_type, data.data)))
}

// Request format
#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<TextPart>,
}

#[derive(Serialize)]
struct TextPart {
    text: String,
}

// Response format
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Deserialize)]
struct ReplyPart {
    #[serde(rename = "inlineData")]
    inline_data: Option<InlineData>,
}

#[derive(Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}
