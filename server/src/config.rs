//! Host server configuration parsed from environment variables.
//!
//! The two backend URLs are not called by this process; they are handed to
//! the page shell so the browser knows where to send text and voice turns.

use voxchat_client::config::{DEFAULT_TEXT_ENDPOINT, DEFAULT_VOICE_ENDPOINT, Endpoints};

pub const DEFAULT_PORT: u16 = 3000;

pub const PORT_VAR: &str = "PORT";
pub const TEXT_ENDPOINT_VAR: &str = "VOXCHAT_TEXT_ENDPOINT";
pub const VOICE_ENDPOINT_VAR: &str = "VOXCHAT_VOICE_ENDPOINT";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a port number")]
    InvalidPort { var: &'static str, value: String },
    #[error("invalid {var}: {value:?} must be an http(s) URL")]
    InvalidEndpoint { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub endpoints: Endpoints,
}

impl ServerConfig {
    /// Build typed server config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `VOXCHAT_TEXT_ENDPOINT`: text-chat backend URL
    /// - `VOXCHAT_VOICE_ENDPOINT`: voice-chat backend URL
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] but reading through `lookup`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_blank(lookup(PORT_VAR)) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { var: PORT_VAR, value: raw.clone() })?,
            None => DEFAULT_PORT,
        };
        let text_url = parse_endpoint(TEXT_ENDPOINT_VAR, lookup(TEXT_ENDPOINT_VAR), DEFAULT_TEXT_ENDPOINT)?;
        let voice_url = parse_endpoint(VOICE_ENDPOINT_VAR, lookup(VOICE_ENDPOINT_VAR), DEFAULT_VOICE_ENDPOINT)?;

        Ok(Self { port, endpoints: Endpoints { text_url, voice_url } })
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_endpoint(var: &'static str, raw: Option<String>, default: &str) -> Result<String, ConfigError> {
    let Some(value) = non_blank(raw) else {
        return Ok(default.to_owned());
    };
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value)
    } else {
        Err(ConfigError::InvalidEndpoint { var, value })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
