pub(crate) mod types;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use partscout_core::config::LlmConfig;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use crate::error::CompletionError;
use crate::traits::TextCompletion;
use types::{ChatRequest, ChatResponse, WireMessage};

/// Read the bearer token from the environment variable `var`.
pub fn api_key_from_env(var: &str) -> Result<String, CompletionError> {
    match std::env::var(var) {
        Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(CompletionError::MissingCredential(var.to_string())),
    }
}

// =============================================================================
// ChatCompletionsClient
// =============================================================================

/// Where the bearer token comes from.
#[derive(Clone)]
enum Credential {
    Key(String),
    /// Read from this environment variable on every request.
    Env(String),
}

impl Credential {
    fn resolve(&self) -> Result<String, CompletionError> {
        match self {
            Credential::Key(key) => Ok(key.clone()),
            Credential::Env(var) => api_key_from_env(var),
        }
    }
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// Sends one user message per request with a fixed model and temperature.
/// The transport timeout comes from [`LlmConfig::timeout_secs`].
#[derive(Clone)]
pub struct ChatCompletionsClient {
    credential: Credential,
    http: reqwest::Client,
    base_url: String,
    model: String,
    temperature: f32,
}

impl fmt::Debug for ChatCompletionsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let credential = match &self.credential {
            Credential::Key(_) => "<redacted>".to_string(),
            Credential::Env(var) => format!("${}", var),
        };
        f.debug_struct("ChatCompletionsClient")
            .field("credential", &credential)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl ChatCompletionsClient {
    pub fn new(api_key: impl Into<String>, config: &LlmConfig) -> Result<Self, CompletionError> {
        Self::build(Credential::Key(api_key.into()), config)
    }

    /// Build a client whose key is read from `config.api_key_env` each time a
    /// request is sent. An unset variable fails that request with
    /// [`CompletionError::MissingCredential`], not client construction.
    pub fn from_env(config: &LlmConfig) -> Result<Self, CompletionError> {
        Self::build(Credential::Env(config.api_key_env.clone()), config)
    }

    fn build(credential: Credential, config: &LlmConfig) -> Result<Self, CompletionError> {
        config
            .validate()
            .map_err(|e| CompletionError::Config(e.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CompletionError::Config(e.to_string()))?;

        Ok(Self {
            credential,
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether a key is available right now.
    pub fn has_credential(&self) -> bool {
        self.credential.resolve().is_ok()
    }

    fn headers(&self) -> Result<HeaderMap, CompletionError> {
        let api_key = self.credential.resolve()?;
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| CompletionError::Config("API key is not a valid header value".into()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, CompletionError> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!(model = %request.model, "Chat completion request");

        let response = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Text of the first choice. Anything else is a malformed response.
fn first_content(response: ChatResponse) -> Result<String, CompletionError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::MalformedResponse("no choices in response".into()))?;
    choice
        .message
        .content
        .ok_or_else(|| CompletionError::MalformedResponse("first choice has no content".into()))
}

#[async_trait]
impl TextCompletion for ChatCompletionsClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![WireMessage::user(prompt)],
            temperature: self.temperature,
        };
        let response = self.chat(&request).await?;
        first_content(response)
    }
}
