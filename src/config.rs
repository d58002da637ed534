use std::{fmt, time::Duration};

use anyhow::{anyhow, Result};

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TEMPERATURE: f32 = 0.0;
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Process-wide settings, read once before anything is served.
#[derive(Clone)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub base_url: String,
    pub timeout: Duration,
    pub bind_addr: String,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    MissingApiKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => {
                write!(f, "Please set the {API_KEY_VAR} environment variable.")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Settings {
    /// Loads `.env` (if any) and reads settings from the environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;

        let model = get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let temperature = match get("GEMINI_TEMPERATURE") {
            Some(raw) => {
                let t: f32 = raw
                    .parse()
                    .map_err(|_| anyhow!("GEMINI_TEMPERATURE must be a number, got {raw:?}"))?;
                if !(0.0..=2.0).contains(&t) {
                    return Err(anyhow!("GEMINI_TEMPERATURE must be within 0..=2, got {t}"));
                }
                t
            }
            None => DEFAULT_TEMPERATURE,
        };

        let base_url = get("GEMINI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = match get("GEMINI_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    anyhow!("GEMINI_TIMEOUT_SECS must be a positive integer, got {raw:?}")
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            api_key,
            model,
            temperature,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            bind_addr,
        })
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("bind_addr", &self.bind_addr)
            .finish()
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_api_key_is_rejected() {
        let err = Settings::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::MissingApiKey)
        );
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let err = Settings::from_lookup(lookup(&[(API_KEY_VAR, "   ")])).unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
        assert_eq!(
            err.to_string(),
            "Please set the GOOGLE_API_KEY environment variable."
        );
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let settings = Settings::from_lookup(lookup(&[(API_KEY_VAR, "abc")])).unwrap();
        assert_eq!(settings.api_key, "abc");
        assert_eq!(settings.model, "gemini-2.5-flash");
        assert_eq!(settings.temperature, 0.0);
        assert_eq!(settings.timeout, Duration::from_secs(60));
        assert_eq!(settings.bind_addr, "0.0.0.0:3000");
    }

    #[test]
    fn overrides_are_parsed() {
        let settings = Settings::from_lookup(lookup(&[
            (API_KEY_VAR, "abc"),
            ("GEMINI_MODEL", "gemini-2.0-pro"),
            ("GEMINI_TEMPERATURE", "0.7"),
            ("GEMINI_BASE_URL", "http://localhost:9000/v1/"),
            ("GEMINI_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(settings.model, "gemini-2.0-pro");
        assert!((settings.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(settings.base_url, "http://localhost:9000/v1");
        assert_eq!(settings.timeout, Duration::from_secs(5));
    }

    #[test]
    fn bad_temperature_is_an_error() {
        assert!(Settings::from_lookup(lookup(&[
            (API_KEY_VAR, "abc"),
            ("GEMINI_TEMPERATURE", "hot")
        ]))
        .is_err());
        assert!(Settings::from_lookup(lookup(&[
            (API_KEY_VAR, "abc"),
            ("GEMINI_TEMPERATURE", "3.5")
        ]))
        .is_err());
    }

    #[test]
    fn debug_output_hides_the_key() {
        let settings = Settings::from_lookup(lookup(&[(API_KEY_VAR, "super-secret")])).unwrap();
        let printed = format!("{settings:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
