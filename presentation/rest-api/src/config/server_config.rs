use std::env;

use anyhow::Context;

/// HTTP listener settings.
///
/// `SERVICE_IP` (default `0.0.0.0`) and `SERVICE_PORT` (default `3001`) pick
/// the bind address; `PUBLIC_URL` overrides the base URL advertised in the
/// OpenAPI document.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
    pub public_url: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("SERVICE_PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => 3001,
        };
        let public_url = env::var("PUBLIC_URL")
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        Ok(Self {
            ip,
            port,
            public_url,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }

    pub fn public_url(&self) -> String {
        self.public_url
            .clone()
            .unwrap_or_else(|| format!("http://{}", self.bind_address()))
    }
}

fn parse_port(raw: &str) -> anyhow::Result<u16> {
    raw.trim()
        .parse::<u16>()
        .with_context(|| format!("SERVICE_PORT must be a port number, got {raw:?}"))
}
