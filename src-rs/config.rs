use std::env;

use tracing::info;

use crate::error::ConfigError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub name: String,
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "lab-console".to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenvy::dotenv().is_err() {
            info!("no .env file found, using process environment");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = non_empty(lookup("APP_NAME")).ok_or(ConfigError::Missing("APP_NAME"))?;
        let host = non_empty(lookup("HTTP_HOST")).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match non_empty(lookup("HTTP_PORT")) {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };
        Ok(Self { name, host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// Accepts both "8080" and ":8080".
fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim_start_matches(':')
        .parse::<u16>()
        .map_err(|_| ConfigError::Invalid {
            key: "HTTP_PORT",
            value: raw.to_string(),
        })
}
