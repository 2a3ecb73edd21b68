//! Completion client seam.
//!
//! [`CompletionClient`] is the only boundary between the enhancer and a
//! remote model. Production uses [`HttpCompletionClient`]; tests substitute
//! their own implementation.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::config::EnhanceConfig;
use crate::error::EnhanceError;

/// One structured-output request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Feature name, also used as the schema name.
    pub feature: &'static str,
    /// Instruction text in the language of the note.
    pub system: String,
    /// The note text.
    pub user: String,
    /// JSON schema the response must follow.
    pub schema: Value,
}

/// A remote model that answers a [`CompletionRequest`] with a JSON string.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Returns the raw JSON content of the model's answer.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, EnhanceError>;
}

/// Chat-completions client speaking the OpenAI wire format.
#[derive(Clone)]
pub struct HttpCompletionClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl HttpCompletionClient {
    /// Builds a client from configuration.
    ///
    /// Fails with [`EnhanceError::NoCredential`] when no key is configured and
    /// [`EnhanceError::InvalidCredential`] when the key is blank.
    pub fn new(config: &EnhanceConfig) -> Result<Self, EnhanceError> {
        let credential = config.credential.as_ref().ok_or(EnhanceError::NoCredential)?;
        if credential.is_blank() {
            return Err(EnhanceError::InvalidCredential);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|_| EnhanceError::ServerError { status: None })?;

        Ok(Self {
            client,
            api_key: credential.expose().to_string(),
            api_url: config.api_url.clone(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

fn transport_error(error: reqwest::Error) -> EnhanceError {
    if error.is_timeout() {
        EnhanceError::Timeout
    } else if let Some(status) = error.status() {
        EnhanceError::from_status(status.as_u16())
    } else {
        EnhanceError::ServerError { status: None }
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, EnhanceError> {
        let body = serde_json::json!({
            "model": &self.model,
            "messages": [
                {"role": "system", "content": &request.system},
                {"role": "user", "content": &request.user}
            ],
            "temperature": 0.2,
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": request.feature,
                    "strict": true,
                    "schema": &request.schema
                }
            }
        });

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(
                feature = request.feature,
                status = status.as_u16(),
                "completion request rejected"
            );
            return Err(EnhanceError::from_status(status.as_u16()));
        }

        let text = response.text().await.map_err(transport_error)?;
        let api_response: ApiResponse = serde_json::from_str(&text)
            .map_err(|e| EnhanceError::MalformedResponse(e.to_string()))?;

        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| EnhanceError::MalformedResponse("no content in response".to_string()))
    }
}
