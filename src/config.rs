use std::env;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::constants::prompts::TUTOR_SYSTEM_MESSAGE;

pub const DEFAULT_API_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 2500;
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_JSON_BODY_LIMIT: usize = 200 * 1024;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("GROQ_API_KEY is not set; refusing to start without an upstream API key")]
    MissingApiKey,

    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: SecretString,
    pub api_base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub system_message: Option<String>,
    pub web_server_host: String,
    pub web_server_port: u16,
    /// `None` allows any origin.
    pub allowed_origin: Option<String>,
    pub json_body_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GROQ_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let system_message = match lookup("LLM_SYSTEM_MESSAGE") {
            Some(msg) if msg.trim().is_empty() => None,
            Some(msg) => Some(msg),
            None => Some(TUTOR_SYSTEM_MESSAGE.to_string()),
        };

        Ok(Self {
            api_key: SecretString::from(api_key),
            api_base_url: lookup("LLM_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model: lookup("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: parse_var(&lookup, "LLM_TEMPERATURE", DEFAULT_TEMPERATURE)?,
            max_tokens: parse_var(&lookup, "LLM_MAX_TOKENS", DEFAULT_MAX_TOKENS)?,
            system_message,
            web_server_host: lookup("WEB_SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            web_server_port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
            allowed_origin: lookup("ALLOWED_ORIGIN")
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty() && o != "*"),
            json_body_limit: parse_var(&lookup, "JSON_BODY_LIMIT", DEFAULT_JSON_BODY_LIMIT)?,
        })
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }

    /// Startup summary for logs. Never includes the API key.
    pub fn describe(&self) -> String {
        format!(
            "API key loaded; upstream {} model {}",
            self.api_base_url, self.model
        )
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base_url)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            api_key: SecretString::from("test_api_key".to_string()),
            api_base_url: "http://127.0.0.1:9".to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            system_message: Some(TUTOR_SYSTEM_MESSAGE.to_string()),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            allowed_origin: None,
            json_body_limit: DEFAULT_JSON_BODY_LIMIT,
        }
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
