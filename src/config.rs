use std::net::IpAddr;
use std::time::Duration;

/// 90 days.
pub const DEFAULT_RETENTION_SECS: u64 = 60 * 60 * 24 * 90;

/// 100 years.
pub const MAX_RETENTION_SECS: u64 = 60 * 60 * 24 * 365 * 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub allowed_origin: String,
    pub retention_secs: u64,
    pub service_name: String,
    pub store: StoreBackend,
    pub database_url: Option<String>,
    pub max_body_size: usize,
    pub sweep_interval_secs: u64,
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreBackend {
    Postgres,
    Memory,
    None,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("INTAKE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_HOST: {e}"))?;

        let port: u16 = env_or("INTAKE_PORT", "8787")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_PORT: {e}"))?;

        let allowed_origin = env_or("INTAKE_ALLOWED_ORIGIN", "https://story.markets");

        let retention_secs =
            parse_retention(&env_or("INTAKE_RETENTION_SECS", &DEFAULT_RETENTION_SECS.to_string()))?;

        let service_name = env_or("INTAKE_SERVICE_NAME", "story.markets intake");

        let database_url = std::env::var("DATABASE_URL").ok().filter(|s| !s.is_empty());

        let default_store = if database_url.is_some() { "postgres" } else { "none" };
        let store = match env_or("INTAKE_STORE", default_store).as_str() {
            "postgres" => StoreBackend::Postgres,
            "memory" => StoreBackend::Memory,
            "none" => StoreBackend::None,
            other => return Err(format!("Invalid INTAKE_STORE: {other}")),
        };

        if store == StoreBackend::Postgres && database_url.is_none() {
            return Err("Missing required environment variable: DATABASE_URL".to_string());
        }

        let max_body_size: usize = env_or("INTAKE_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_MAX_BODY_SIZE: {e}"))?;

        let sweep_interval_secs: u64 = env_or("INTAKE_SWEEP_INTERVAL_SECS", "300")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_SWEEP_INTERVAL_SECS: {e}"))?;

        let log_level = env_or("INTAKE_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            allowed_origin,
            retention_secs,
            service_name,
            store,
            database_url,
            max_body_size,
            sweep_interval_secs,
            log_level,
        })
    }

    pub fn retention(&self) -> Duration {
        Duration::from_secs(self.retention_secs)
    }
}

/// Parse a retention period in seconds, rejecting values past `MAX_RETENTION_SECS`.
pub fn parse_retention(value: &str) -> Result<u64, String> {
    let secs: u64 = value
        .parse()
        .map_err(|e| format!("Invalid INTAKE_RETENTION_SECS: {e}"))?;

    if secs > MAX_RETENTION_SECS {
        return Err(format!(
            "Invalid INTAKE_RETENTION_SECS: {secs} exceeds {MAX_RETENTION_SECS}"
        ));
    }

    Ok(secs)
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
