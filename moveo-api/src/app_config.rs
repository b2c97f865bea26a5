use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub genai: GenaiConfig,
    #[serde(default)]
    pub ledger: LedgerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration_seconds: u64,
    pub admin_email: String,
    pub admin_password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenaiConfig {
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String { moveo_genai::client::DEFAULT_BASE_URL.to_string() }
fn default_model() -> String { moveo_genai::client::DEFAULT_MODEL.to_string() }
fn default_timeout() -> u64 { 30 }

impl Default for GenaiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            timeout_seconds: default_timeout(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LedgerConfig {
    /// Start with the demo fleet instead of an empty ledger
    #[serde(default = "default_seed_fleet")]
    pub seed_fleet: bool,
}

fn default_seed_fleet() -> bool { true }

impl Default for LedgerConfig {
    fn default() -> Self {
        Self { seed_fleet: default_seed_fleet() }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, never checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `MOVEO__GENAI__API_KEY=...`
            .add_source(config::Environment::with_prefix("MOVEO").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Gemini API key, treating a blank value as unset
    pub fn genai_api_key(&self) -> Option<&str> {
        self.genai.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_optional_sections() {
        let s = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [server]
                port = 8080

                [auth]
                jwt_secret = "secret"
                jwt_expiration_seconds = 3600
                admin_email = "admin@moveo.com"
                admin_password = "admin123"

                [genai]
                api_key = "  "
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let config: Config = s.try_deserialize().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.genai.model, "gemini-2.5-flash");
        assert_eq!(config.genai_api_key(), None);
        assert!(config.ledger.seed_fleet);
    }
}
