// src/config.rs
use std::{num::NonZeroU64, str::FromStr, time::Duration};

use thiserror::Error;

pub const DEFAULT_BACKEND_BASE: &str = "http://localhost:5000";
pub const DEFAULT_CHAT_PATH: &str = "/api/chatbot";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Which built-in handler answers `/chat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandlerKind {
    #[default]
    Assistant,
    Backend,
}

impl FromStr for HandlerKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "assistant" => Ok(Self::Assistant),
            "backend" => Ok(Self::Backend),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Reported as-is by `/health`.
    pub backend_base: String,
    pub handler: HandlerKind,
    pub backend_chat_path: String,
    pub backend_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            backend_base: DEFAULT_BACKEND_BASE.to_string(),
            handler: HandlerKind::Assistant,
            backend_chat_path: DEFAULT_CHAT_PATH.to_string(),
            backend_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Load from the process environment, after `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = parse_or("PORT", lookup("PORT"), defaults.port)?;
        let backend_base = lookup("BACKEND_BASE").unwrap_or(defaults.backend_base);
        let handler = parse_or("CHAT_HANDLER", lookup("CHAT_HANDLER"), defaults.handler)?;
        let backend_chat_path = lookup("BACKEND_CHAT_PATH").unwrap_or(defaults.backend_chat_path);
        // must be non-zero
        let backend_timeout = parse_opt::<NonZeroU64>("BACKEND_TIMEOUT_SECS", lookup("BACKEND_TIMEOUT_SECS"))?
            .map_or(defaults.backend_timeout, |secs| Duration::from_secs(secs.get()));

        Ok(Self {
            host,
            port,
            backend_base,
            handler,
            backend_chat_path,
            backend_timeout,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_opt<T: FromStr>(key: &'static str, raw: Option<String>) -> Result<Option<T>, ConfigError> {
    match raw {
        None => Ok(None),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(_) => Err(ConfigError::Invalid { key, value }),
        },
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    Ok(parse_opt(key, raw)?.unwrap_or(default))
}
