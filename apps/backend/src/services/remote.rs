//! Client for the remote text-generation endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const PROBE_INPUT: &str = "Test if model is ready";
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Remote generation errors.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result of probing the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Ready,
    /// Model is still loading; retry later.
    Loading,
}

/// A remote model that turns prompts into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Check whether the model can serve requests.
    async fn probe(&self) -> Result<Availability, GeneratorError>;

    /// Generate text for a prompt.
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}

/// Sampling parameters sent with each generation call.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenerationParameters {
    pub max_length: u32,
    pub temperature: f32,
    pub do_sample: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_length: 200,
            temperature: 0.7,
            do_sample: true,
        }
    }
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<GenerationParameters>,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    #[serde(default)]
    generated_text: String,
}

/// Hugging Face inference API client.
pub struct HuggingFaceClient {
    client: Client,
    model_url: String,
    token: String,
    request_timeout: Duration,
    parameters: GenerationParameters,
}

impl HuggingFaceClient {
    pub fn new(model_url: String, token: String, request_timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            model_url,
            token,
            request_timeout,
            parameters: GenerationParameters::default(),
        }
    }

    async fn post(
        &self,
        request: &InferenceRequest<'_>,
        timeout: Duration,
    ) -> Result<reqwest::Response, GeneratorError> {
        debug!("Inference request to {}", self.model_url);
        self.client
            .post(&self.model_url)
            .bearer_auth(&self.token)
            .timeout(timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout
                } else {
                    GeneratorError::Network(e.to_string())
                }
            })
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceClient {
    async fn probe(&self) -> Result<Availability, GeneratorError> {
        let request = InferenceRequest {
            inputs: PROBE_INPUT,
            parameters: None,
        };

        let resp = match self.post(&request, PROBE_TIMEOUT).await {
            Ok(resp) => resp,
            Err(GeneratorError::Timeout) => return Ok(Availability::Loading),
            Err(e) => return Err(e),
        };

        match resp.status() {
            StatusCode::OK => Ok(Availability::Ready),
            StatusCode::SERVICE_UNAVAILABLE => Ok(Availability::Loading),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(GeneratorError::Api {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let request = InferenceRequest {
            inputs: prompt,
            parameters: Some(self.parameters),
        };

        let resp = self.post(&request, self.request_timeout).await?;

        if resp.status() != StatusCode::OK {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(GeneratorError::Api { status, body });
        }

        let generated: Vec<GeneratedText> = resp
            .json()
            .await
            .map_err(|e| GeneratorError::Parse(e.to_string()))?;

        generated
            .into_iter()
            .next()
            .map(|g| g.generated_text)
            .ok_or_else(|| GeneratorError::Parse("empty generation list".to_string()))
    }
}
