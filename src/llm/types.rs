use serde::{Deserialize, Serialize};

/// Sampling parameters sent with every generation call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingOptions {
    pub temperature: f32,
    pub top_p: f32,
    pub repeat_penalty: f32,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.9,
            repeat_penalty: 1.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub model: String,
    pub options: SamplingOptions,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            options: SamplingOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationResult {
    Success { markup: String },
    Failure { reason: String },
}

impl GenerationResult {
    pub fn success(markup: impl Into<String>) -> Self {
        Self::Success {
            markup: markup.into(),
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub name: String,
}

impl ModelDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

/// Outcome of a listing call: state, models in server order, and a
/// human-readable diagnostic for the debug trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Availability {
    pub state: ConnectionState,
    pub models: Vec<ModelDescriptor>,
    pub diagnostic: String,
}

impl Availability {
    pub fn connected(models: Vec<ModelDescriptor>, diagnostic: impl Into<String>) -> Self {
        Self {
            state: ConnectionState::Connected,
            models,
            diagnostic: diagnostic.into(),
        }
    }

    pub fn disconnected(diagnostic: impl Into<String>) -> Self {
        Self {
            state: ConnectionState::Disconnected,
            models: Vec::new(),
            diagnostic: diagnostic.into(),
        }
    }
}

// Ollama wire types

#[derive(Debug, Clone, Serialize)]
pub(crate) struct OllamaGenerateBody<'a> {
    pub model: &'a str,
    pub prompt: String,
    pub stream: bool,
    pub options: SamplingOptions,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OllamaGenerateResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    pub done: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OllamaTagsResponse {
    #[serde(default)]
    pub models: Option<Vec<OllamaTagEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OllamaTagEntry {
    #[serde(default)]
    pub name: Option<String>,
}

impl OllamaTagsResponse {
    /// Parses a listing body. `None` when the body carries no usable
    /// `models` array; entries without a name are skipped.
    pub fn parse_models(body: &str) -> Option<Vec<ModelDescriptor>> {
        let parsed: Self = serde_json::from_str(body).ok()?;
        let models = parsed
            .models?
            .into_iter()
            .filter_map(|entry| entry.name)
            .map(ModelDescriptor::new)
            .collect();
        Some(models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_sampling_defaults() {
        let options = SamplingOptions::default();
        assert_eq!(options.temperature, 0.3);
        assert_eq!(options.top_p, 0.9);
        assert_eq!(options.repeat_penalty, 1.1);
    }

    #[test]
    fn test_generate_body_serialization() {
        let body = OllamaGenerateBody {
            model: "llama3.2",
            prompt: "wrapped".to_string(),
            stream: false,
            options: SamplingOptions::default(),
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], json!("llama3.2"));
        assert_eq!(value["stream"], json!(false));
        assert!(value["options"]["top_p"].is_number());
        assert!(value["options"]["repeat_penalty"].is_number());
    }

    #[test]
    fn test_generate_response_missing_fields() {
        let parsed: OllamaGenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.response.is_none());
    }

    #[test]
    fn test_parse_models_keeps_order() {
        let body = r#"{"models":[{"name":"llama3.2","size":1},{"name":"mistral"}]}"#;
        let models = OllamaTagsResponse::parse_models(body).unwrap();
        assert_eq!(
            models,
            vec![ModelDescriptor::new("llama3.2"), ModelDescriptor::new("mistral")]
        );
    }

    #[test]
    fn test_parse_models_absent_or_malformed() {
        assert_eq!(OllamaTagsResponse::parse_models("{}"), None);
        assert_eq!(OllamaTagsResponse::parse_models(r#"{"models":"nope"}"#), None);
        assert_eq!(OllamaTagsResponse::parse_models("<html>"), None);
    }

    #[test]
    fn test_parse_models_skips_unnamed_entries() {
        let body = r#"{"models":[{"digest":"abc"},{"name":"phi3"}]}"#;
        let models = OllamaTagsResponse::parse_models(body).unwrap();
        assert_eq!(models, vec![ModelDescriptor::new("phi3")]);
    }

    #[test]
    fn test_generation_result_serialization() {
        let value = serde_json::to_value(GenerationResult::failure("boom")).unwrap();
        assert_eq!(value, json!({"status": "failure", "reason": "boom"}));
    }
}
