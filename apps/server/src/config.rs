use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{anyhow, Context};
use chrono_tz::Tz;

/// Settings for the optional upstream quote generator.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// `None` disables the model; theme quotes then come from local tables.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: citation_ai::mistral::DEFAULT_BASE_URL.to_string(),
            model: citation_ai::mistral::DEFAULT_MODEL.to_string(),
            timeout: citation_ai::mistral::DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Zone whose calendar day keys the daily quote.
    pub timezone: Tz,
    /// Insert the default quotes when the store is empty at startup.
    pub seed_quotes: bool,
    pub ai: AiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            db_path: "./db/citation.db".into(),
            cors_allow: vec!["*".into()],
            request_timeout: Duration::from_millis(30_000),
            timezone: Tz::UTC,
            seed_quotes: true,
            ai: AiConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let listen_addr = parse_or(&var, "CITATION_LISTEN_ADDR", defaults.listen_addr)?;
        let db_path = var("CITATION_DB_PATH").unwrap_or(defaults.db_path);
        let cors_allow = match var("CITATION_CORS_ALLOW_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => defaults.cors_allow,
        };
        let timeout_ms: u64 = parse_or(&var, "CITATION_REQUEST_TIMEOUT_MS", 30_000)?;
        let timezone = match var("CITATION_TIMEZONE") {
            Some(raw) => raw
                .trim()
                .parse::<Tz>()
                .map_err(|e| anyhow!("Invalid CITATION_TIMEZONE '{}': {}", raw, e))?,
            None => defaults.timezone,
        };
        let seed_quotes = match var("CITATION_SEED_QUOTES") {
            Some(raw) => parse_flag(&raw)
                .with_context(|| format!("Invalid CITATION_SEED_QUOTES '{}'", raw))?,
            None => defaults.seed_quotes,
        };

        let ai_timeout_ms: u64 = parse_or(
            &var,
            "CITATION_AI_TIMEOUT_MS",
            defaults.ai.timeout.as_millis() as u64,
        )?;
        let ai = AiConfig {
            api_key: var("MISTRAL_API_KEY").map(|k| k.trim().to_string()),
            base_url: var("CITATION_AI_BASE_URL").unwrap_or(defaults.ai.base_url),
            model: var("CITATION_AI_MODEL").unwrap_or(defaults.ai.model),
            timeout: Duration::from_millis(ai_timeout_ms),
        };

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            timezone,
            seed_quotes,
            ai,
        })
    }
}

fn parse_or<T, F>(var: &F, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("Invalid {} '{}': {}", key, raw, e)),
        None => Ok(default),
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("expected a boolean, got '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.db_path, "./db/citation.db");
        assert_eq!(config.cors_allow, vec!["*"]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.timezone, Tz::UTC);
        assert!(config.seed_quotes);
        assert!(config.ai.api_key.is_none());
        assert_eq!(config.ai.model, "mistral-large-latest");
        assert_eq!(config.ai.timeout, Duration::from_secs(15));
    }

    #[test]
    fn values_are_parsed() {
        let config = config_from(&[
            ("CITATION_LISTEN_ADDR", "127.0.0.1:9000"),
            ("CITATION_CORS_ALLOW_ORIGINS", "https://a.test, https://b.test,"),
            ("CITATION_REQUEST_TIMEOUT_MS", "500"),
            ("CITATION_TIMEZONE", "Europe/Paris"),
            ("CITATION_SEED_QUOTES", "off"),
            ("MISTRAL_API_KEY", " secret "),
            ("CITATION_AI_TIMEOUT_MS", "2000"),
        ])
        .unwrap();

        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(config.cors_allow, vec!["https://a.test", "https://b.test"]);
        assert_eq!(config.request_timeout, Duration::from_millis(500));
        assert_eq!(config.timezone, chrono_tz::Europe::Paris);
        assert!(!config.seed_quotes);
        assert_eq!(config.ai.api_key.as_deref(), Some("secret"));
        assert_eq!(config.ai.timeout, Duration::from_secs(2));
    }

    #[test]
    fn blank_api_key_counts_as_unset() {
        let config = config_from(&[("MISTRAL_API_KEY", "   ")]).unwrap();
        assert!(config.ai.api_key.is_none());
    }

    #[test]
    fn invalid_values_name_the_variable() {
        for (key, value) in [
            ("CITATION_LISTEN_ADDR", "nowhere"),
            ("CITATION_REQUEST_TIMEOUT_MS", "soon"),
            ("CITATION_TIMEZONE", "Mars/Olympus"),
            ("CITATION_SEED_QUOTES", "maybe"),
        ] {
            let err = config_from(&[(key, value)]).unwrap_err();
            assert!(
                format!("{:#}", err).contains(key),
                "{} error should name the variable: {:#}",
                key,
                err
            );
        }
    }
}
