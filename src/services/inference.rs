use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{PlannerError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_MODEL: &str = "google/flan-t5-large";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_RETRIES: usize = 3;
const INITIAL_BACKOFF: Duration = Duration::from_millis(250);

/// Anything that can turn a prompt into free-form text.
#[async_trait]
pub trait TextGenerator: Send + Sync + std::fmt::Debug {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Sampling parameters forwarded to the inference endpoint
#[derive(Clone, Debug, Serialize, PartialEq)]
struct GenerationParameters {
    max_length: u32,
    temperature: f32,
    do_sample: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_length: 1000,
            temperature: 0.7,
            do_sample: true,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParameters,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    #[serde(default)]
    generated_text: String,
}

/// Client for a hosted text-generation inference API.
#[derive(Clone, Debug)]
pub struct InferenceClient {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
    max_retries: usize,
    parameters: GenerationParameters,
}

impl InferenceClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: MAX_RETRIES,
            parameters: GenerationParameters::default(),
        }
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub fn set_max_retries(&mut self, max_retries: usize) {
        self.max_retries = max_retries;
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> String {
        build_model_url(&self.base_url, &self.model)
    }

    async fn request_generation(&self, prompt: &str) -> Result<String> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| PlannerError::Unknown(format!("Failed to build HTTP client: {err}")))?;

        let request_url = self.endpoint();
        let body = GenerationRequest {
            inputs: prompt,
            parameters: &self.parameters,
        };

        let mut attempt = 0;
        let mut backoff = INITIAL_BACKOFF;

        loop {
            debug!(url = %request_url, attempt, "requesting text generation");

            let response = client
                .post(&request_url)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await
                .map_err(|err| {
                    if err.is_timeout() {
                        PlannerError::Timeout(format!(
                            "text generation did not answer within {}s",
                            self.timeout.as_secs()
                        ))
                    } else {
                        PlannerError::Http(err)
                    }
                })?;

            let status = response.status();
            let headers = response.headers().clone();
            let response_text = response.text().await?;

            if status == StatusCode::TOO_MANY_REQUESTS {
                let retry_after_duration = headers
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|value| value.to_str().ok())
                    .and_then(|value| value.parse::<u64>().ok())
                    .map(Duration::from_secs)
                    .unwrap_or(backoff);

                if attempt < self.max_retries {
                    warn!(
                        retry_in_ms = retry_after_duration.as_millis() as u64,
                        "text generation rate limited"
                    );
                    tokio::time::sleep(retry_after_duration).await;
                    attempt += 1;
                    backoff *= 2;
                    continue;
                }

                return Err(PlannerError::RateLimit {
                    retry_after: retry_after_duration.as_secs().max(1),
                });
            }

            if status.is_server_error() && attempt < self.max_retries {
                warn!(status = status.as_u16(), "text generation server error, retrying");
                tokio::time::sleep(backoff).await;
                attempt += 1;
                backoff *= 2;
                continue;
            }

            if status == StatusCode::UNAUTHORIZED {
                return Err(PlannerError::Unauthorized);
            }

            if status == StatusCode::SERVICE_UNAVAILABLE {
                return Err(PlannerError::ModelLoading);
            }

            if !status.is_success() {
                return Err(PlannerError::Api {
                    status: status.as_u16(),
                    message: api_error_message(&response_text),
                });
            }

            return decode_generated_text(&response_text);
        }
    }
}

#[async_trait]
impl TextGenerator for InferenceClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.request_generation(prompt).await
    }
}

/// Pull the first `generated_text` out of a success body.
///
/// An empty list yields an empty string; the caller decides what counts as usable.
fn decode_generated_text(raw: &str) -> Result<String> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    let outputs: Vec<GeneratedText> =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
            let path = err.path().to_string();
            let location = if path.is_empty() || path == "." {
                "<root>".to_string()
            } else {
                path
            };
            PlannerError::Decode {
                path: location,
                message: err.into_inner().to_string(),
            }
        })?;

    Ok(outputs
        .into_iter()
        .next()
        .map(|output| output.generated_text)
        .unwrap_or_default())
}

fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error").map(|error| match error {
                Value::String(message) => message.clone(),
                other => other
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| other.to_string()),
            })
        })
        .unwrap_or_else(|| body.to_string())
}

fn build_model_url(base_url: &str, model: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with(&format!("/models/{}", model)) {
        trimmed.to_string()
    } else {
        format!("{}/models/{}", trimmed, model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_model_url() {
        assert_eq!(
            build_model_url("https://api-inference.huggingface.co/", "google/flan-t5-large"),
            "https://api-inference.huggingface.co/models/google/flan-t5-large"
        );
        assert_eq!(
            build_model_url("http://localhost:1234/models/m", "m"),
            "http://localhost:1234/models/m"
        );
    }

    #[test]
    fn test_client_configuration() {
        let mut client = InferenceClient::new("hf_key");
        assert_eq!(client.model(), DEFAULT_MODEL);

        client.set_model("mistralai/Mistral-7B-Instruct-v0.2");
        client.set_base_url("http://localhost:8080/");
        assert_eq!(client.model(), "mistralai/Mistral-7B-Instruct-v0.2");
        assert_eq!(
            client.endpoint(),
            "http://localhost:8080/models/mistralai/Mistral-7B-Instruct-v0.2"
        );
    }

    #[test]
    fn test_decode_generated_text() {
        let text = decode_generated_text(r#"[{"generated_text": "Day 1"}]"#).unwrap();
        assert_eq!(text, "Day 1");
        assert_eq!(decode_generated_text("[]").unwrap(), "");
    }

    #[test]
    fn test_decode_reports_path() {
        let err = decode_generated_text(r#"[{"generated_text": 5}]"#).unwrap_err();
        match err {
            PlannerError::Decode { path, .. } => assert_eq!(path, "[0].generated_text"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_api_error_message() {
        assert_eq!(api_error_message(r#"{"error": "bad input"}"#), "bad input");
        assert_eq!(
            api_error_message(r#"{"error": {"message": "nope"}}"#),
            "nope"
        );
        assert_eq!(api_error_message("plain text"), "plain text");
    }
}
