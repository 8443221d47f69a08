//! Configuration management for firmfused.
//!
//! Loads settings from /etc/firmfuse/config.toml (or an explicit path) and
//! overlays secrets from the environment. Collaborators receive their section
//! at construction and never read the environment themselves.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/firmfuse/config.toml";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "0.0.0.0:8000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Generative text service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_llm_enabled")]
    pub enabled: bool,

    /// OpenAI-compatible base URL
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_llm_model")]
    pub model: String,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u64,

    /// Token cap for gap-filling calls
    #[serde(default = "default_fill_max_tokens")]
    pub fill_max_tokens: u32,

    #[serde(default = "default_fill_temperature")]
    pub fill_temperature: f32,

    /// Token cap for industry classification
    #[serde(default = "default_industry_max_tokens")]
    pub industry_max_tokens: u32,

    #[serde(default = "default_industry_temperature")]
    pub industry_temperature: f32,
}

fn default_llm_enabled() -> bool {
    true
}

fn default_llm_endpoint() -> String {
    "https://api.openai.com".to_string()
}

fn default_llm_model() -> String {
    "gpt-4".to_string()
}

fn default_llm_timeout() -> u64 {
    60
}

fn default_fill_max_tokens() -> u32 {
    500
}

fn default_fill_temperature() -> f32 {
    1.0
}

fn default_industry_max_tokens() -> u32 {
    20
}

fn default_industry_temperature() -> f32 {
    0.2
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: default_llm_enabled(),
            endpoint: default_llm_endpoint(),
            model: default_llm_model(),
            api_key: None,
            timeout_secs: default_llm_timeout(),
            fill_max_tokens: default_fill_max_tokens(),
            fill_temperature: default_fill_temperature(),
            industry_max_tokens: default_industry_max_tokens(),
            industry_temperature: default_industry_temperature(),
        }
    }
}

/// Web search collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_search_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub api_key: Option<String>,

    /// Custom search engine id
    #[serde(default)]
    pub engine_id: Option<String>,

    #[serde(default = "default_results_per_query")]
    pub results_per_query: u32,

    #[serde(default = "default_search_timeout")]
    pub timeout_secs: u64,

    /// Timeout for fetching the company's own page
    #[serde(default = "default_page_timeout")]
    pub page_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_search_endpoint() -> String {
    "https://www.googleapis.com/customsearch/v1".to_string()
}

fn default_results_per_query() -> u32 {
    3
}

fn default_search_timeout() -> u64 {
    15
}

fn default_page_timeout() -> u64 {
    15
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_search_endpoint(),
            api_key: None,
            engine_id: None,
            results_per_query: default_results_per_query(),
            timeout_secs: default_search_timeout(),
            page_timeout_secs: default_page_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Professional-network collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_network_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub auth_token: Option<String>,

    #[serde(default)]
    pub project_id: Option<String>,

    #[serde(default = "default_network_timeout")]
    pub timeout_secs: u64,
}

fn default_network_base_url() -> String {
    "https://api.relevance.ai/v1/project".to_string()
}

fn default_network_timeout() -> u64 {
    30
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            base_url: default_network_base_url(),
            auth_token: None,
            project_id: None,
            timeout_secs: default_network_timeout(),
        }
    }
}

/// Full daemon configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

impl Config {
    /// Load config, then overlay environment secrets.
    ///
    /// An explicit path must exist and parse. Without one, the system path is
    /// tried and defaults are used if it is missing.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from_path(path)?,
            None => Self::load_from_path(Path::new(CONFIG_PATH)).unwrap_or_else(|e| {
                warn!("Config not found, using defaults: {:#}", e);
                Config::default()
            }),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load config from specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Overlay secrets and the bind address from `lookup` (normally the process env).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = lookup("OPENAI_API_KEY") {
            self.llm.api_key = Some(v);
        }
        if let Some(v) = lookup("GOOGLE_API_KEY") {
            self.search.api_key = Some(v);
        }
        if let Some(v) = lookup("GOOGLE_CSE_ID") {
            self.search.engine_id = Some(v);
        }
        if let Some(v) = lookup("RECALLRAI_AUTHORIZE_TOKEN") {
            self.network.auth_token = Some(v);
        }
        if let Some(v) = lookup("RECALLRAI_PROJECT_ID") {
            self.network.project_id = Some(v);
        }
        if let Some(v) = lookup("FIRMFUSE_BIND") {
            self.server.bind = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.bind, "0.0.0.0:8000");
        assert_eq!(config.llm.model, "gpt-4");
        assert_eq!(config.llm.fill_max_tokens, 500);
        assert_eq!(config.llm.industry_max_tokens, 20);
        assert_eq!(config.search.results_per_query, 3);
        assert!(config.network.auth_token.is_none());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[llm]
model = "gpt-4o-mini"
timeout_secs = 10

[search]
engine_id = "cse-123"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.timeout_secs, 10);
        assert_eq!(config.search.engine_id.as_deref(), Some("cse-123"));
        // Defaults for missing fields
        assert_eq!(config.llm.fill_temperature, 1.0);
        assert_eq!(config.network.base_url, "https://api.relevance.ai/v1/project");
    }

    #[test]
    fn test_env_overlay() {
        let env: HashMap<&str, &str> = [
            ("OPENAI_API_KEY", "sk-test"),
            ("GOOGLE_CSE_ID", "cse"),
            ("RECALLRAI_PROJECT_ID", ""),
            ("FIRMFUSE_BIND", "127.0.0.1:9000"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.network.project_id = Some("from-file".to_string());
        config.apply_env(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.llm.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.search.engine_id.as_deref(), Some("cse"));
        // blank env values do not clobber the file
        assert_eq!(config.network.project_id.as_deref(), Some("from-file"));
        assert_eq!(config.server.bind, "127.0.0.1:9000");
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nbind = \"127.0.0.1:8111\"").unwrap();
        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:8111");
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
    }
}
