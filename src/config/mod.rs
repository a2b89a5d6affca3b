mod api;

use crate::cli::Args;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub use api::ApiConfig;

pub const DEFAULT_API_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const DEFAULT_SYSTEM_PROMPT: &str = "You are a medical assistant. Help the user identify \
disease by symptoms. Don't answer questions outside the medical field. Also help identify \
risks and other info about the disease.";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub system_prompt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub reports_dir: Option<PathBuf>,
    #[serde(default)]
    pub sessions_dir: Option<PathBuf>,
}

pub struct Config {
    pub api_key: String,
    pub session_secret: String,
    pub api_endpoint: String,
    pub model: String,
    pub system_prompt: String,
    pub request_timeout: u64,
    pub host: String,
    pub port: u16,
    pub reports_dir: PathBuf,
    pub sessions_dir: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct YamlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self, String> {
        // Load YAML configuration first
        let yaml_config = YamlConfig::load().unwrap_or_default();

        // Secrets are required from env vars; absence is a startup error
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| "GEMINI_API_KEY environment variable not set")?;
        let session_secret = env::var("SESSION_SECRET")
            .map_err(|_| "SESSION_SECRET environment variable not set")?;

        // API endpoint: CLI args > env var > YAML config > default
        let api_endpoint = args
            .api_endpoint
            .clone()
            .or_else(|| env::var("MEDIMATE_API_ENDPOINT").ok())
            .or(yaml_config.api.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());

        // Model: env var > YAML config > default
        let model = env::var("MEDIMATE_MODEL")
            .ok()
            .or(yaml_config.model.name.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        // System prompt: env var > YAML config > built-in default
        let system_prompt = env::var("MEDIMATE_SYSTEM_PROMPT")
            .ok()
            .or(yaml_config.model.system_prompt.clone())
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());

        // Per-call deadline on model requests: env var > YAML config > default
        let request_timeout = env::var("MEDIMATE_REQUEST_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .or(yaml_config.api.request_timeout)
            .unwrap_or(60);

        let host = args
            .host
            .clone()
            .or_else(|| env::var("MEDIMATE_HOST").ok())
            .or(yaml_config.server.host.clone())
            .unwrap_or_else(|| "127.0.0.1".to_string());

        let port = args
            .port
            .or_else(|| {
                env::var("MEDIMATE_PORT")
                    .ok()
                    .and_then(|s| s.parse::<u16>().ok())
            })
            .or(yaml_config.server.port)
            .unwrap_or(8000);

        let reports_dir = args
            .reports_dir
            .clone()
            .or_else(|| env::var("MEDIMATE_REPORTS_DIR").ok().map(PathBuf::from))
            .or(yaml_config.storage.reports_dir.clone())
            .unwrap_or_else(|| PathBuf::from("reports"));

        let sessions_dir = args
            .sessions_dir
            .clone()
            .or_else(|| env::var("MEDIMATE_SESSIONS_DIR").ok().map(PathBuf::from))
            .or(yaml_config.storage.sessions_dir.clone())
            .unwrap_or_else(|| PathBuf::from("sessions"));

        Ok(Config {
            api_key,
            session_secret,
            api_endpoint,
            model,
            system_prompt,
            request_timeout,
            host,
            port,
            reports_dir,
            sessions_dir,
        })
    }
}

impl YamlConfig {
    pub fn load() -> Result<Self> {
        let config_paths = Self::get_config_paths();

        for path in config_paths {
            if path.exists() {
                let contents = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

                let config: YamlConfig = serde_yaml::from_str(&contents).with_context(|| {
                    format!("Failed to parse YAML config file: {}", path.display())
                })?;

                return Ok(config);
            }
        }

        // No config file found, return default
        Ok(YamlConfig::default())
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Current directory (highest priority - local override)
        paths.push(PathBuf::from(".medimate.yaml"));
        paths.push(PathBuf::from(".medimate.yml"));

        // 2. User's config directory (global config)
        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("medimate");
            paths.push(config_dir.join("medimate.yaml"));
            paths.push(config_dir.join("medimate.yml"));
        }

        paths
    }
}
