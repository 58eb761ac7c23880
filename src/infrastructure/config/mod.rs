use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::LLMConfig;
use crate::infrastructure::security::keyring::KeyringManager;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_CONFIG_FILE: &str = "qa-buddy.toml";
pub const CONFIG_PATH_ENV: &str = "QA_BUDDY_CONFIG";
pub const ENV_PREFIX: &str = "QA_BUDDY_";

/// Checked in order after `llm.api_key`. The second name is the one a
/// Vite frontend `.env` file exposes.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "VITE_GEMINI_API_KEY"];

const KEYRING_SERVICE: &str = "QaBuddy";
const KEYRING_ACCOUNT: &str = "gemini";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LLMConfig,
    #[serde(default = "default_response_language")]
    pub response_language: String,
}

fn default_response_language() -> String {
    "English".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            llm: LLMConfig::default(),
            response_language: default_response_language(),
        }
    }
}

impl AppConfig {
    /// Defaults, then the TOML file, then `QA_BUDDY_*` variables
    /// (`QA_BUDDY_LLM__MODEL` sets `llm.model`).
    pub fn figment() -> Figment {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load() -> Result<Self> {
        Self::figment()
            .extract()
            .map_err(|e| AppError::ConfigError(format!("Failed to load configuration: {}", e)))
    }
}

pub struct ConfigService {
    keyring: KeyringManager,
    config: AppConfig,
}

impl ConfigService {
    pub fn new(config: AppConfig) -> Self {
        Self {
            keyring: KeyringManager::new(KEYRING_SERVICE),
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Resolved on every request so a key added after startup is picked up.
    pub fn resolve_api_key(&self) -> Result<String> {
        if let Some(key) = non_blank(self.config.llm.api_key.clone()) {
            return Ok(key);
        }

        for name in API_KEY_ENV_VARS {
            if let Some(key) = non_blank(std::env::var(name).ok()) {
                return Ok(key);
            }
        }

        match self.keyring.find_secret(KEYRING_ACCOUNT) {
            Ok(Some(key)) => return Ok(key),
            Ok(None) => {}
            Err(err) => warn!(error = %err, "Keyring lookup failed"),
        }

        Err(AppError::ConfigError(
            "The Gemini API key is not configured.".to_string(),
        ))
    }

    pub fn llm_config(&self) -> Result<LLMConfig> {
        let api_key = self.resolve_api_key()?;
        Ok(self.config.llm.with_api_key(api_key))
    }

    pub fn response_language(&self) -> &str {
        let language = self.config.response_language.trim();
        if language.is_empty() {
            "English"
        } else {
            language
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
