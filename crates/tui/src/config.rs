use precedent_auth::Provider;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const AUTH_URL_ENV: &str = "PRECEDENT_AUTH_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub auth: AuthConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub base_url: String,
    pub callback_url: String,
    pub provider: Provider,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub home_url: String,
    pub show_sign_in_on_start: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            callback_url: "http://localhost:3000".to_string(),
            provider: Provider::Google,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            home_url: "https://precedent.dev".to_string(),
            show_sign_in_on_start: false,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_or_default(path: &Path) -> Self {
        let mut config = match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default config ({}): {}", path.display(), e);
                Config::default()
            }
        };
        config.apply_env(std::env::var(AUTH_URL_ENV).ok());
        config
    }

    fn apply_env(&mut self, auth_url: Option<String>) {
        if let Some(url) = auth_url.filter(|u| !u.trim().is_empty()) {
            self.auth.base_url = url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [ui]
            show_sign_in_on_start = true
            "#,
        )
        .expect("parse config");

        assert!(config.ui.show_sign_in_on_start);
        assert_eq!(config.ui.home_url, "https://precedent.dev");
        assert_eq!(config.auth.base_url, "http://localhost:3000");
        assert_eq!(config.auth.provider, Provider::Google);
    }

    #[test]
    fn parses_provider_and_urls() {
        let config: Config = toml::from_str(
            r#"
            [auth]
            base_url = "https://auth.example.com"
            callback_url = "https://example.com/welcome"
            provider = "google"
            "#,
        )
        .expect("parse config");

        assert_eq!(config.auth.base_url, "https://auth.example.com");
        assert_eq!(config.auth.callback_url, "https://example.com/welcome");
    }

    #[test]
    fn unknown_provider_is_a_parse_error() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [auth]
            provider = "myspace"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn env_override_replaces_base_url() {
        let mut config = Config::default();
        config.apply_env(Some("https://staging.precedent.dev".to_string()));
        assert_eq!(config.auth.base_url, "https://staging.precedent.dev");

        config.apply_env(Some("   ".to_string()));
        assert_eq!(config.auth.base_url, "https://staging.precedent.dev");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_or_default(Path::new("/nonexistent/precedent/config.toml"));
        assert_eq!(config.ui.home_url, "https://precedent.dev");
    }
}
