use std::env;
use std::time::Duration;

use crate::theme::Theme;

pub const DEFAULT_PLAYER_API_URL: &str = "http://localhost:8000/analyze-player/";
pub const DEFAULT_IMAGE_LOOKUP_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub player_api_url: String,
    pub image_lookup_url: Option<String>,
    pub request_timeout: Duration,
    pub forced_theme: Option<Theme>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            player_api_url: DEFAULT_PLAYER_API_URL.to_string(),
            image_lookup_url: Some(DEFAULT_IMAGE_LOOKUP_URL.to_string()),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            forced_theme: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so it can be tested
    /// without touching the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let player_api_url = lookup("PLAYER_API_URL")
            .and_then(non_empty)
            .unwrap_or(defaults.player_api_url);

        let lookup_enabled = lookup("IMAGE_LOOKUP")
            .map(|raw| !matches!(raw.trim().to_ascii_lowercase().as_str(), "0" | "off" | "false" | "no"))
            .unwrap_or(true);
        let image_lookup_url = if lookup_enabled {
            lookup("IMAGE_LOOKUP_URL")
                .and_then(non_empty)
                .or(defaults.image_lookup_url)
        } else {
            None
        };

        let timeout_secs = lookup("REQUEST_TIMEOUT_SECS")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .max(MIN_REQUEST_TIMEOUT_SECS);

        let forced_theme = lookup("CRICKET_THEME").and_then(|raw| Theme::parse(&raw));

        Self {
            player_api_url,
            image_lookup_url,
            request_timeout: Duration::from_secs(timeout_secs),
            forced_theme,
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_with(pairs: &[(&str, &str)]) -> ClientConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_with(&[]), ClientConfig::default());
    }

    #[test]
    fn reads_overrides_and_clamps_timeout() {
        let cfg = config_with(&[
            ("PLAYER_API_URL", " https://stats.example/analyze-player/ "),
            ("REQUEST_TIMEOUT_SECS", "1"),
            ("CRICKET_THEME", "light"),
        ]);
        assert_eq!(cfg.player_api_url, "https://stats.example/analyze-player/");
        assert_eq!(cfg.request_timeout, Duration::from_secs(5));
        assert_eq!(cfg.forced_theme, Some(Theme::Light));
    }

    #[test]
    fn image_lookup_can_be_disabled() {
        let cfg = config_with(&[("IMAGE_LOOKUP", "off"), ("IMAGE_LOOKUP_URL", "https://x")]);
        assert!(cfg.image_lookup_url.is_none());
    }
}
