// src/config.rs
use std::{net::SocketAddr, path::PathBuf};

use thiserror::Error;

pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_UPSTREAM_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_FRONTEND_DIR: &str = "frontend/build";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:10000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("OPENROUTER_KEY is not set")]
    MissingApiKey,

    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
}

/// Where and how the relay reaches the completion provider.
#[derive(Clone)]
pub struct UpstreamConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl UpstreamConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("OPENROUTER_KEY").ok_or(ConfigError::MissingApiKey)?;
        let base_url =
            get("UPSTREAM_BASE_URL").unwrap_or_else(|| DEFAULT_UPSTREAM_BASE_URL.to_string());
        let model = get("UPSTREAM_MODEL").unwrap_or_else(|| DEFAULT_UPSTREAM_MODEL.to_string());

        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub frontend_dir: PathBuf,
    pub upstream: UpstreamConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let upstream = UpstreamConfig::from_lookup(&lookup)?;

        let port = match lookup("PORT").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let frontend_dir = lookup("FRONTEND_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FRONTEND_DIR));

        Ok(Self {
            port,
            frontend_dir,
            upstream,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Backend URL for the terminal client, `CHAT_BACKEND_URL` or the local default.
pub fn backend_url_from_env() -> String {
    std::env::var("CHAT_BACKEND_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = ServerConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);

        let err = UpstreamConfig::from_lookup(lookup(&[("OPENROUTER_KEY", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);
    }

    #[test]
    fn defaults_apply() {
        let cfg = ServerConfig::from_lookup(lookup(&[("OPENROUTER_KEY", "sk-test")])).unwrap();
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.frontend_dir, PathBuf::from(DEFAULT_FRONTEND_DIR));
        assert_eq!(cfg.upstream.base_url, DEFAULT_UPSTREAM_BASE_URL);
        assert_eq!(cfg.upstream.model, DEFAULT_UPSTREAM_MODEL);
        assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:10000");
    }

    #[test]
    fn overrides_apply() {
        let cfg = ServerConfig::from_lookup(lookup(&[
            ("OPENROUTER_KEY", "sk-test"),
            ("PORT", "8080"),
            ("FRONTEND_DIR", "dist"),
            ("UPSTREAM_BASE_URL", "http://localhost:1234/v1"),
            ("UPSTREAM_MODEL", "mistral-small"),
        ]))
        .unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.frontend_dir, PathBuf::from("dist"));
        assert_eq!(cfg.upstream.base_url, "http://localhost:1234/v1");
        assert_eq!(cfg.upstream.model, "mistral-small");
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("OPENROUTER_KEY", "k"), ("PORT", "http")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("http".to_string()));
    }

    #[test]
    fn debug_hides_api_key() {
        let cfg = UpstreamConfig::from_lookup(lookup(&[("OPENROUTER_KEY", "sk-secret")])).unwrap();
        assert!(!format!("{cfg:?}").contains("sk-secret"));
    }
}
