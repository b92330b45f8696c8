// src/config.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::IpAddr;
use std::path::Path;
use tracing::info;

use crate::job_listings::job_scraper::DEFAULT_SEARCH_URL;

const CONFIG_FILE: &str = "config.yaml";
const API_KEY_VAR: &str = "GOOGLE_API_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// Per-environment settings. Every field has a default so `config.yaml`
/// may be partial or absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub port: u16,
    pub address: IpAddr,
    pub model: String,
    pub model_base_url: String,
    pub job_search_url: String,
    pub log_format: LogFormat,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            address: IpAddr::from([0, 0, 0, 0]),
            model: "gemini-2.0-flash".to_string(),
            model_base_url: "https://generativelanguage.googleapis.com".to_string(),
            job_search_url: DEFAULT_SEARCH_URL.to_string(),
            log_format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: EnvironmentConfig,
    #[serde(default)]
    production: EnvironmentConfig,
}

/// Everything the model client needs, held explicitly instead of as process
/// globals.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment_name: String,
    pub environment: EnvironmentConfig,
}

impl AppConfig {
    /// Loads `.env`, then `config.yaml` for the active environment, then
    /// applies the `PORT` override.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let environment_name = Self::get_environment();
        let mut environment = Self::load_from_file(Path::new(CONFIG_FILE), &environment_name)?;

        if let Ok(port) = std::env::var("PORT") {
            environment.port = port
                .parse::<u16>()
                .context("PORT must be a valid port number")?;
        }

        Ok(Self {
            environment_name,
            environment,
        })
    }

    fn get_environment() -> String {
        std::env::var("RESUME_INSIGHT_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(path: &Path, environment: &str) -> Result<EnvironmentConfig> {
        if !path.exists() {
            return Ok(EnvironmentConfig::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        parse_environment(&content, environment)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Model settings plus the API key, which only ever comes from the
    /// process environment.
    pub fn model_config(&self) -> Result<ModelConfig> {
        let api_key = std::env::var(API_KEY_VAR)
            .with_context(|| format!("{} environment variable not set", API_KEY_VAR))?;

        Ok(ModelConfig {
            api_key,
            model: self.environment.model.clone(),
            base_url: self.environment.model_base_url.clone(),
        })
    }
}

fn parse_environment(content: &str, environment: &str) -> Result<EnvironmentConfig> {
    let config_file: ConfigFile = serde_yaml::from_str(content)?;

    let selected = match environment {
        "production" => config_file.production,
        _ => config_file.local,
    };
    info!("Loaded configuration for environment: {}", environment);
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config =
            AppConfig::load_from_file(Path::new("does/not/exist.yaml"), "local").unwrap();
        assert_eq!(config, EnvironmentConfig::default());
        assert_eq!(config.port, 8000);
        assert_eq!(config.job_search_url, DEFAULT_SEARCH_URL);
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let yaml = r#"
local:
  port: 9000
production:
  port: 80
  model: gemini-1.5-pro
  log_format: json
"#;
        let local = parse_environment(yaml, "local").unwrap();
        assert_eq!(local.port, 9000);
        assert_eq!(local.model, "gemini-2.0-flash");
        assert_eq!(local.log_format, LogFormat::Text);

        let production = parse_environment(yaml, "production").unwrap();
        assert_eq!(production.port, 80);
        assert_eq!(production.model, "gemini-1.5-pro");
        assert_eq!(production.log_format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_environment_falls_back_to_local() {
        let yaml = "local:\n  port: 7000\n";
        assert_eq!(parse_environment(yaml, "staging").unwrap().port, 7000);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(parse_environment("local: [not, a, map", "local").is_err());
        assert!(parse_environment("local:\n  port: not-a-port\n", "local").is_err());
    }
}
