use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ollama: OllamaConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Offered for selection whenever the server reports no models.
    #[serde(default = "default_models")]
    pub default_models: Vec<String>,
    #[serde(default)]
    pub default_model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Base name of the downloaded document, without extension.
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_models: default_models(),
            default_model: None,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

impl OllamaConfig {
    /// Models offered when the server reports none. Never empty.
    pub fn fallback_models(&self) -> Vec<String> {
        if self.default_models.is_empty() {
            default_models()
        } else {
            self.default_models.clone()
        }
    }

    /// The model selected before the first listing call completes: the
    /// configured default when it is among the fallback models, otherwise
    /// the first fallback model.
    pub fn initial_model(&self) -> String {
        let models = self.fallback_models();
        match &self.default_model {
            Some(model) if models.contains(model) => model.clone(),
            _ => models.into_iter().next().unwrap_or_default(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_models() -> Vec<String> {
    ["llama3.2", "llama3.1", "mistral", "codellama"]
        .iter()
        .map(|m| m.to_string())
        .collect()
}

fn default_file_name() -> String {
    "document".to_string()
}
