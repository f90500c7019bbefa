//! Server configuration from environment.

use airspace_core::generator::{DEFAULT_FLIGHT_COUNT, DEFAULT_ID_PREFIX, DEFAULT_SEED};
use airspace_core::GeneratorConfig;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    /// Seed for every generated batch
    pub seed: u64,
    pub flight_count: usize,
    pub id_prefix: String,
    /// Rendered batches kept for click-to-detail lookups
    pub session_max_entries: usize,
    pub session_ttl_s: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: parse_env("AIRSPACE_PORT").unwrap_or(3000),
            seed: parse_env("AIRSPACE_SEED").unwrap_or(DEFAULT_SEED),
            flight_count: parse_env("AIRSPACE_FLIGHT_COUNT").unwrap_or(DEFAULT_FLIGHT_COUNT),
            id_prefix: env::var("AIRSPACE_ID_PREFIX")
                .unwrap_or_else(|_| DEFAULT_ID_PREFIX.to_string()),
            session_max_entries: parse_env("AIRSPACE_SESSION_MAX_ENTRIES").unwrap_or(256),
            session_ttl_s: parse_env("AIRSPACE_SESSION_TTL_S").unwrap_or(900),
        }
    }

    pub fn generator(&self) -> GeneratorConfig {
        GeneratorConfig {
            id_prefix: self.id_prefix.clone(),
            ..GeneratorConfig::new(self.flight_count, self.seed)
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
