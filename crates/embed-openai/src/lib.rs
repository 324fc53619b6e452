//! OpenAI-backed [`Embedder`] implementation.
//!
//! Calls `POST /v1/embeddings` with an `{input, model}` payload and
//! extracts `data[0].embedding` from the response. Rate limits and
//! retries stay the caller's concern, matching the collaborator
//! contract; every failure maps onto [`EmbedError`] untouched.

use cairn_core::{EmbedError, Embedder};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default API endpoint.
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/embeddings";

/// Default embedding model.
pub const DEFAULT_MODEL: &str = "text-embedding-ada-002";

#[derive(Debug, Serialize)]
struct EmbeddingsRequest<'a> {
    input: &'a str,
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingData>,
}

/// Blocking OpenAI embeddings client.
///
/// # Example
///
/// ```ignore
/// let embedder = OpenAiEmbedder::from_env()?.with_model("text-embedding-3-small");
/// let vector = embedder.embed("The cat sat")?;
/// ```
pub struct OpenAiEmbedder {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAiEmbedder {
    /// Client for the default endpoint and model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: OPENAI_API_URL.to_string(),
        }
    }

    /// Read the API key from `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self, EmbedError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| EmbedError::Service("OPENAI_API_KEY is not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Override the embedding model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the endpoint (proxies, compatible services).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl Embedder for OpenAiEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f64>, EmbedError> {
        debug!(model = %self.model, chars = text.len(), "requesting embedding");
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&EmbeddingsRequest {
                input: text,
                model: &self.model,
            })
            .send()
            .map_err(|e| EmbedError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(EmbedError::Service(format!("{status}: {body}")));
        }

        let parsed: EmbeddingsResponse = response
            .json()
            .map_err(|e| EmbedError::Service(format!("undecodable response: {e}")))?;
        parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or(EmbedError::Empty)
    }
}
