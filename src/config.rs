//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Unset or unparseable values fall back
//! to the defaults in [`AppConfig::default`], except `LISTEN_ADDR`, which
//! must parse when present.

use std::net::{Ipv4Addr, SocketAddr};

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output.
    Text,
    /// One JSON object per event.
    Json,
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`AppConfig::from_env`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8000`).
    pub listen_addr: SocketAddr,

    /// PostgreSQL connection string.
    pub database_url: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Minimum idle connections in the pool.
    pub database_min_connections: u32,

    /// Timeout in seconds for acquiring a database connection.
    pub database_connect_timeout_secs: u64,

    /// `false` keeps transactions in process memory instead of PostgreSQL.
    pub persistence_enabled: bool,

    /// Browser origins allowed by CORS (credentials included).
    pub cors_allowed_origins: Vec<String>,

    /// Alpha Vantage API key; the chart relay fails with 502 without it.
    pub alpha_vantage_api_key: Option<String>,

    /// Alpha Vantage base URL.
    pub alpha_vantage_base_url: String,

    /// Base currency of the relayed pair.
    pub market_data_from_symbol: String,

    /// Quote currency of the relayed pair.
    pub market_data_to_symbol: String,

    /// Upstream request timeout in seconds.
    pub market_data_timeout_secs: u64,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000)),
            database_url: "postgres://fx:fx@localhost:5432/fx_simulator".to_string(),
            database_max_connections: 10,
            database_min_connections: 1,
            database_connect_timeout_secs: 5,
            persistence_enabled: true,
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
            alpha_vantage_api_key: None,
            alpha_vantage_base_url: "https://www.alphavantage.co".to_string(),
            market_data_from_symbol: "USD".to_string(),
            market_data_to_symbol: "JPY".to_string(),
            market_data_timeout_secs: 10,
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is present but not a valid
    /// socket address.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, std::net::AddrParseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let listen_addr = match lookup("LISTEN_ADDR") {
            Some(raw) => raw.parse()?,
            None => defaults.listen_addr,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or(defaults.cors_allowed_origins);

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(f) if f.eq_ignore_ascii_case("text") => LogFormat::Text,
            _ => defaults.log_format,
        };

        Ok(Self {
            listen_addr,
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            database_max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                defaults.database_max_connections,
            ),
            database_min_connections: parse_or(
                &lookup,
                "DATABASE_MIN_CONNECTIONS",
                defaults.database_min_connections,
            ),
            database_connect_timeout_secs: parse_or(
                &lookup,
                "DATABASE_CONNECT_TIMEOUT_SECS",
                defaults.database_connect_timeout_secs,
            ),
            persistence_enabled: parse_bool_or(
                &lookup,
                "PERSISTENCE_ENABLED",
                defaults.persistence_enabled,
            ),
            cors_allowed_origins,
            alpha_vantage_api_key: lookup("ALPHA_VANTAGE_API_KEY")
                .filter(|key| !key.trim().is_empty()),
            alpha_vantage_base_url: lookup("ALPHA_VANTAGE_BASE_URL")
                .unwrap_or(defaults.alpha_vantage_base_url),
            market_data_from_symbol: lookup("MARKET_DATA_FROM_SYMBOL")
                .unwrap_or(defaults.market_data_from_symbol),
            market_data_to_symbol: lookup("MARKET_DATA_TO_SYMBOL")
                .unwrap_or(defaults.market_data_to_symbol),
            market_data_timeout_secs: parse_or(
                &lookup,
                "MARKET_DATA_TIMEOUT_SECS",
                defaults.market_data_timeout_secs,
            ),
            log_format,
        })
    }
}

/// Parses a variable as `T`, returning `default` on missing or invalid
/// values.
fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Parses a variable as a boolean. Accepts `"true"`, `"1"`, `"false"`,
/// `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_bool_or<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("true" | "1") => true,
        Some("false" | "0") => false,
        _ => default,
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, std::net::AddrParseError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let Ok(config) = load(&[]) else {
            panic!("defaults should load");
        };
        assert_eq!(config.listen_addr.port(), 8000);
        assert!(config.persistence_enabled);
        assert_eq!(config.cors_allowed_origins, ["http://localhost:3000"]);
        assert!(config.alpha_vantage_api_key.is_none());
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn overrides_are_applied() {
        let Ok(config) = load(&[
            ("LISTEN_ADDR", "127.0.0.1:9000"),
            ("DATABASE_MAX_CONNECTIONS", "25"),
            ("PERSISTENCE_ENABLED", "FALSE"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
            ("ALPHA_VANTAGE_API_KEY", "demo"),
            ("MARKET_DATA_TO_SYMBOL", "EUR"),
            ("LOG_FORMAT", "json"),
        ]) else {
            panic!("config should load");
        };
        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(config.database_max_connections, 25);
        assert!(!config.persistence_enabled);
        assert_eq!(config.cors_allowed_origins, ["http://a.test", "http://b.test"]);
        assert_eq!(config.alpha_vantage_api_key.as_deref(), Some("demo"));
        assert_eq!(config.market_data_to_symbol, "EUR");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn malformed_numbers_fall_back() {
        let Ok(config) = load(&[
            ("DATABASE_CONNECT_TIMEOUT_SECS", "soon"),
            ("PERSISTENCE_ENABLED", "maybe"),
        ]) else {
            panic!("config should load");
        };
        assert_eq!(config.database_connect_timeout_secs, 5);
        assert!(config.persistence_enabled);
    }

    #[test]
    fn blank_api_key_counts_as_unset() {
        let Ok(config) = load(&[("ALPHA_VANTAGE_API_KEY", "  ")]) else {
            panic!("config should load");
        };
        assert!(config.alpha_vantage_api_key.is_none());
    }

    #[test]
    fn bad_listen_addr_is_an_error() {
        assert!(load(&[("LISTEN_ADDR", "not-an-address")]).is_err());
    }
}
