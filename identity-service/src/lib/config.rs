use std::env;
use std::fmt;

use auth::Algorithm;
use auth::TokenConfig;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    /// Comma-separated list of CORS origins
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    /// Signing secret. Required; never logged.
    pub secret: String,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(default = "default_access_token_expire_minutes")]
    pub access_token_expire_minutes: i64,
    #[serde(default = "default_refresh_token_expire_days")]
    pub refresh_token_expire_days: i64,
}

fn default_allowed_origins() -> String {
    "http://localhost:3000".to_string()
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

fn default_access_token_expire_minutes() -> i64 {
    15
}

fn default_refresh_token_expire_days() -> i64 {
    30
}

impl JwtConfig {
    /// Build the codec configuration, parsing the algorithm name.
    pub fn token_config(&self) -> Result<TokenConfig, ConfigError> {
        let algorithm: Algorithm = self.algorithm.parse().map_err(|_| {
            ConfigError::Message(format!("unknown jwt algorithm: {}", self.algorithm))
        })?;

        Ok(TokenConfig::new(self.secret.clone())
            .with_algorithm(algorithm)
            .with_access_ttl_minutes(self.access_token_expire_minutes)
            .with_refresh_ttl_days(self.refresh_token_expire_days))
    }
}

// Manual impl so the signing secret never leaks through debug logging.
impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field(
                "access_token_expire_minutes",
                &self.access_token_expire_minutes,
            )
            .field("refresh_token_expire_days", &self.refresh_token_expire_days)
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_defaults() {
        let jwt: JwtConfig = serde_json::from_str(r#"{ "secret": "s" }"#).unwrap();

        assert_eq!(jwt.algorithm, "HS256");
        assert_eq!(jwt.access_token_expire_minutes, 15);
        assert_eq!(jwt.refresh_token_expire_days, 30);
    }

    #[test]
    fn test_token_config_rejects_unknown_algorithm() {
        let jwt: JwtConfig =
            serde_json::from_str(r#"{ "secret": "s", "algorithm": "HS9000" }"#).unwrap();

        assert!(jwt.token_config().is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let jwt: JwtConfig = serde_json::from_str(r#"{ "secret": "super-secret" }"#).unwrap();

        let rendered = format!("{:?}", jwt);
        assert!(!rendered.contains("super-secret"));
    }
}
