//! Configuration loading from environment.

use std::env;

/// Format of the diagnostic log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Pretty-print the JSON transaction log instead of one line per entry
    pub transaction_log_pretty: bool,
    pub log_format: LogFormat,
    /// OTLP collector; span export is off when unset
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns the raw value of a variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid PORT {raw:?}: {e}"))?,
            None => 8000,
        };

        let transaction_log_pretty = match lookup("TRANSACTION_LOG_PRETTY") {
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| anyhow::anyhow!("invalid TRANSACTION_LOG_PRETTY {raw:?}"))?,
            None => false,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") => LogFormat::Text,
            Some(raw) if raw.eq_ignore_ascii_case("text") => LogFormat::Text,
            Some(raw) if raw.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(raw) => anyhow::bail!("invalid LOG_FORMAT {raw:?}, expected text or json"),
        };

        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.trim().is_empty());

        Ok(Self {
            host,
            port,
            transaction_log_pretty,
            log_format,
            otlp_endpoint,
        })
    }

    /// Address the HTTP server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
