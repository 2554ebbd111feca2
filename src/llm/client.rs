use super::{
    prompt::{build_prompt, strip_code_fences},
    types::*,
};
use crate::{Error, Result, config::OllamaConfig};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, info, warn};

const TAGS_PATH: &str = "/api/tags";
const GENERATE_PATH: &str = "/api/generate";

/// Calls against the local inference service. Neither operation returns an
/// `Err`: every transport or status fault is folded into the returned value.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn check_availability(&self) -> Availability;

    async fn generate(&self, request: &GenerationRequest) -> GenerationResult;
}

pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(config: &OllamaConfig) -> Result<Self> {
        Self::with_base_url(config.base_url.clone())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::inference("Ollama base URL is empty"));
        }

        let http = reqwest::Client::builder().build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl InferenceClient for OllamaClient {
    async fn check_availability(&self) -> Availability {
        let url = self.endpoint(TAGS_PATH);
        debug!("Checking Ollama availability at {}", url);

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Ollama unreachable at {}: {}", self.base_url, e);
                return Availability::disconnected(format!(
                    "Cannot reach Ollama at {}: {}",
                    self.base_url, e
                ));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Ollama listing returned status {}", status);
            return Availability::disconnected(format!(
                "Ollama listing returned status {}",
                status.as_u16()
            ));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read Ollama listing body: {}", e);
                return Availability::disconnected(format!(
                    "Failed to read Ollama listing response: {}",
                    e
                ));
            }
        };

        match OllamaTagsResponse::parse_models(&body) {
            Some(models) => {
                info!("Ollama connected with {} models", models.len());
                let diagnostic = format!("Connected to Ollama: {} model(s) available", models.len());
                Availability::connected(models, diagnostic)
            }
            None => {
                info!("Ollama connected but listing carried no models array");
                Availability::connected(
                    Vec::new(),
                    "Connected to Ollama, but the listing response contained no models array",
                )
            }
        }
    }

    async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        if request.prompt.trim().is_empty() {
            debug!("Empty prompt, skipping generation call");
            return GenerationResult::success("");
        }

        let body = OllamaGenerateBody {
            model: &request.model,
            prompt: build_prompt(&request.prompt),
            stream: false,
            options: request.options,
        };

        debug!(
            "Sending generation request to model {} ({} prompt chars)",
            request.model,
            body.prompt.len()
        );

        let response = match self
            .http
            .post(self.endpoint(GENERATE_PATH))
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Generation request failed: {}", e);
                return GenerationResult::failure(format!("Request to Ollama failed: {}", e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(
                "Generation with model {} returned status {}",
                request.model, status
            );
            return GenerationResult::failure(describe_status(status, &request.model));
        }

        let parsed: OllamaGenerateResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Failed to decode generation response: {}", e);
                return GenerationResult::failure(format!(
                    "Failed to decode Ollama response: {}",
                    e
                ));
            }
        };

        let raw = parsed.response.unwrap_or_default();
        let markup = strip_code_fences(raw.trim());

        info!(
            "Generation with model {} produced {} chars",
            request.model,
            markup.len()
        );

        GenerationResult::success(markup)
    }
}

fn describe_status(status: StatusCode, model: &str) -> String {
    match status {
        StatusCode::NOT_FOUND => format!(
            "Model '{}' not found. Install it with: ollama pull {}",
            model, model
        ),
        StatusCode::INTERNAL_SERVER_ERROR => {
            "Ollama server error (500): the model may still be loading or hit an internal error"
                .to_string()
        }
        other => format!("Ollama request failed with status {}", other.as_u16()),
    }
}
