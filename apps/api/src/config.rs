use std::time::Duration;

use anyhow::{Context, Result};

use crate::generation::bullets::SelectionOptions;
use crate::generation::generator::{GenerationOptions, DEFAULT_REMOTE_TIMEOUT};
use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub enable_llm: bool,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub llm_timeout: Duration,
    pub max_bullets: usize,
    pub fallback_roles: usize,
    /// Empty means permissive CORS.
    pub cors_allowed_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = SelectionOptions::default();

        Ok(Config {
            enable_llm: get("ENABLE_LLM").as_deref() == Some("1"),
            openai_api_key: get("OPENAI_API_KEY"),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_base_url: get("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            llm_timeout: Duration::from_secs(parse_or(
                get("LLM_TIMEOUT_SECS"),
                "LLM_TIMEOUT_SECS",
                DEFAULT_REMOTE_TIMEOUT.as_secs(),
            )?),
            max_bullets: parse_or(get("MAX_BULLETS"), "MAX_BULLETS", defaults.max_items)?,
            fallback_roles: parse_or(
                get("FALLBACK_ROLES"),
                "FALLBACK_ROLES",
                defaults.fallback_roles,
            )?,
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            port: parse_or(get("PORT"), "PORT", 8000)?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Remote mode needs both the feature flag and a credential.
    pub fn use_remote(&self) -> bool {
        self.enable_llm && self.openai_api_key.is_some()
    }

    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            selection: SelectionOptions {
                max_items: self.max_bullets,
                fallback_roles: self.fallback_roles,
            },
            remote_timeout: self.llm_timeout,
        }
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(v) => v
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{v}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();
        assert!(!config.enable_llm);
        assert!(config.openai_api_key.is_none());
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.llm_timeout, Duration::from_secs(30));
        assert_eq!(config.max_bullets, 5);
        assert_eq!(config.fallback_roles, 2);
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.port, 8000);
        assert_eq!(config.rust_log, "info");
        assert!(!config.use_remote());
    }

    #[test]
    fn test_remote_requires_flag_and_key() {
        let flag_only = config_from(&[("ENABLE_LLM", "1")]).unwrap();
        assert!(!flag_only.use_remote());

        let key_only = config_from(&[("OPENAI_API_KEY", "sk-test")]).unwrap();
        assert!(!key_only.use_remote());

        let blank_key = config_from(&[("ENABLE_LLM", "1"), ("OPENAI_API_KEY", "  ")]).unwrap();
        assert!(!blank_key.use_remote());

        let both = config_from(&[("ENABLE_LLM", "1"), ("OPENAI_API_KEY", "sk-test")]).unwrap();
        assert!(both.use_remote());
    }

    #[test]
    fn test_enable_llm_only_accepts_one() {
        let config = config_from(&[("ENABLE_LLM", "true"), ("OPENAI_API_KEY", "sk-test")]).unwrap();
        assert!(!config.use_remote());
    }

    #[test]
    fn test_cors_origins_split_and_trimmed() {
        let config = config_from(&[(
            "CORS_ALLOWED_ORIGINS",
            "https://example.github.io, http://localhost:8000,,",
        )])
        .unwrap();
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://example.github.io", "http://localhost:8000"]
        );
    }

    #[test]
    fn test_malformed_number_is_an_error() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));

        assert!(config_from(&[("MAX_BULLETS", "-1")]).is_err());
    }

    #[test]
    fn test_generation_options_follow_config() {
        let config = config_from(&[
            ("MAX_BULLETS", "3"),
            ("FALLBACK_ROLES", "1"),
            ("LLM_TIMEOUT_SECS", "10"),
        ])
        .unwrap();
        let options = config.generation_options();
        assert_eq!(options.selection.max_items, 3);
        assert_eq!(options.selection.fallback_roles, 1);
        assert_eq!(options.remote_timeout, Duration::from_secs(10));
    }
}
