// src/config.rs
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub session_ttl: Duration,
    pub purge_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            session_ttl: Duration::from_secs(1800),
            purge_interval: Duration::from_secs(60),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment variables from {}", path.display()),
            Err(e) => debug!("No .env file loaded: {}", e),
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads every setting through `lookup`, falling back to defaults for
    /// unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let host = lookup("SHOWROOM_HOST").unwrap_or(defaults.host);
        let port = parse_or(&lookup, "SHOWROOM_PORT", defaults.port)?;
        let ttl_secs = parse_or(&lookup, "SESSION_TTL_SECS", defaults.session_ttl.as_secs())?;
        let purge_secs = parse_or(
            &lookup,
            "SESSION_PURGE_INTERVAL_SECS",
            defaults.purge_interval.as_secs(),
        )?;
        if purge_secs == 0 {
            anyhow::bail!("SESSION_PURGE_INTERVAL_SECS must be greater than zero");
        }

        Ok(Self {
            host,
            port,
            session_ttl: Duration::from_secs(ttl_secs),
            purge_interval: Duration::from_secs(purge_secs),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.session_ttl, Duration::from_secs(1800));
        assert_eq!(cfg.socket_addr().unwrap().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("SHOWROOM_HOST", "127.0.0.1"),
            ("SHOWROOM_PORT", "8080"),
            ("SESSION_TTL_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(cfg.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.session_ttl, Duration::from_secs(5));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_lookup(lookup(&[("SHOWROOM_PORT", "http")])).is_err());
        assert!(Config::from_lookup(lookup(&[("SESSION_PURGE_INTERVAL_SECS", "0")])).is_err());
    }
}
