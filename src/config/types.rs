use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub vision: VisionConfig,
    #[serde(default)]
    pub moderation: ModerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub bearer_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionConfig {
    #[serde(default = "default_vision_base_url")]
    pub base_url: String,
    pub api_key: String,
}

/// Cat vocabulary and label confidence floor. Kept as data so the term list
/// can be tuned without touching the matching logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationConfig {
    #[serde(default = "default_cat_terms")]
    pub cat_terms: Vec<String>,
    #[serde(default = "default_min_label_score")]
    pub min_label_score: f32,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            cat_terms: default_cat_terms(),
            min_label_score: default_min_label_score(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_concurrency() -> usize {
    10
}

fn default_vision_base_url() -> String {
    "https://vision.googleapis.com".to_string()
}

fn default_cat_terms() -> Vec<String> {
    [
        "cat",
        "kitten",
        "tabby",
        "domestic cat",
        "felidae",
        "small to medium-sized cats",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect()
}

fn default_min_label_score() -> f32 {
    0.1
}
