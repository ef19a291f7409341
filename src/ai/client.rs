use super::sse;
use crate::config::ClientConfig;
use crate::types::{ChatMessage, Model, ModelList};
use async_trait::async_trait;
use futures::StreamExt;
use futures::stream::BoxStream;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;

// ============================================
// Error Types
// ============================================

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Content fragments of one streamed completion, in arrival order.
pub type FragmentStream = BoxStream<'static, ClientResult<String>>;

/// Ids containing any of these are image or video models.
pub const NON_CHAT_MARKERS: &[&str] = &["imagen", "veo", "image-to-video"];

pub fn filter_chat_models(models: Vec<Model>) -> Vec<Model> {
    models
        .into_iter()
        .filter(|model| {
            !NON_CHAT_MARKERS
                .iter()
                .any(|marker| model.id.contains(marker))
        })
        .collect()
}

/// The two calls the app makes against a model provider.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Never fails: an unreachable listing is reported as empty.
    async fn list_models(&self) -> Vec<Model>;

    async fn stream_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> ClientResult<FragmentStream>;
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
    temperature: f32,
}

/// Client for an OpenAI-compatible endpoint.
#[derive(Clone)]
pub struct GenifyClient {
    client: Client,
    config: ClientConfig,
}

impl GenifyClient {
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::from_config(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header("Content-Type", "application/json");
        match &self.config.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn fetch_models(&self) -> ClientResult<Vec<Model>> {
        let response = self
            .authorize(self.client.get(self.config.models_url()))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status { status, body });
        }

        let listing: ModelList = serde_json::from_str(&body)?;
        Ok(filter_chat_models(listing.data))
    }
}

#[async_trait]
impl ChatBackend for GenifyClient {
    async fn list_models(&self) -> Vec<Model> {
        match self.fetch_models().await {
            Ok(models) => {
                tracing::info!("fetched {} chat models", models.len());
                models
            }
            Err(err) => {
                tracing::error!("error fetching models: {err}");
                Vec::new()
            }
        }
    }

    async fn stream_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> ClientResult<FragmentStream> {
        let request = self
            .authorize(self.client.post(self.config.completions_url()))
            .header("accept", "text/event-stream")
            .json(&CompletionRequest {
                model,
                messages,
                stream: true,
                temperature: self.config.temperature,
            });

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        let bytes = response
            .bytes_stream()
            .map(|item| item.map_err(ClientError::from));
        Ok(sse::fragments(bytes).boxed())
    }
}
