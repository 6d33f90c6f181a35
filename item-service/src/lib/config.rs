use std::env;
use std::fmt;

use auth::JwtError;
use auth::JwtSettings;
use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub backend: DatabaseBackend,
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    #[serde(default = "default_expiration_hours")]
    pub expiration_hours: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

fn default_max_connections() -> u32 {
    5
}

fn default_expiration_hours() -> i64 {
    JwtSettings::DEFAULT_LIFETIME_HOURS
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: auth::PasswordHasher::new().cost(),
        }
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

impl JwtConfig {
    /// Build the signing settings shared by the token issuer and validator.
    ///
    /// # Errors
    /// * `Configuration` - Blank secret or issuer, or a lifetime that is not
    ///   positive or out of range
    pub fn settings(&self) -> Result<JwtSettings, JwtError> {
        let lifetime = Duration::try_hours(self.expiration_hours).ok_or_else(|| {
            JwtError::Configuration(format!(
                "expiration_hours out of range: {}",
                self.expiration_hours
            ))
        })?;

        JwtSettings::new(self.secret.clone(), self.issuer.clone())?.with_lifetime(lifetime)
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, DATABASE__URL, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// The result is validated before it is returned.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Check cross-field constraints the deserializer cannot express.
    ///
    /// # Errors
    /// * `Message` - Describes the first offending setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.jwt
            .settings()
            .map_err(|e| ConfigError::Message(format!("jwt: {}", e)))?;

        auth::PasswordHasher::with_cost(self.password.bcrypt_cost)
            .map_err(|e| ConfigError::Message(format!("password: {}", e)))?;

        if self.database.backend == DatabaseBackend::Postgres && self.database.url.trim().is_empty()
        {
            return Err(ConfigError::Message(
                "database: url is required for the postgres backend".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Message(
                "database: max_connections must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
