use std::fmt;

use chrono::Duration;
use chrono::Utc;

use super::errors::JwtError;

/// Signing configuration shared by the token issuer and validator.
///
/// Constructed once at startup; an instance always holds a non-empty
/// secret, a non-empty issuer and a positive lifetime.
#[derive(Clone)]
pub struct JwtSettings {
    secret: String,
    issuer: String,
    lifetime: Duration,
}

impl JwtSettings {
    /// Default validity window of an access token.
    pub const DEFAULT_LIFETIME_HOURS: i64 = 6;

    /// Create settings from the signing secret and the issuer string.
    ///
    /// The issuer is also used as the audience claim.
    ///
    /// # Errors
    /// * `Configuration` - Secret or issuer is missing
    pub fn new(secret: impl Into<String>, issuer: impl Into<String>) -> Result<Self, JwtError> {
        let secret = secret.into();
        let issuer = issuer.into();

        if secret.trim().is_empty() {
            return Err(JwtError::Configuration(
                "signing key is missing".to_string(),
            ));
        }
        if issuer.trim().is_empty() {
            return Err(JwtError::Configuration("issuer is missing".to_string()));
        }

        Ok(Self {
            secret,
            issuer,
            lifetime: Duration::hours(Self::DEFAULT_LIFETIME_HOURS),
        })
    }

    /// Override the token validity window.
    ///
    /// # Errors
    /// * `Configuration` - Lifetime is zero or negative, or too large for a
    ///   token issued now to carry a representable expiration
    pub fn with_lifetime(mut self, lifetime: Duration) -> Result<Self, JwtError> {
        if lifetime <= Duration::zero() {
            return Err(JwtError::Configuration(format!(
                "token lifetime must be positive, got {} seconds",
                lifetime.num_seconds()
            )));
        }
        if Utc::now().checked_add_signed(lifetime).is_none() {
            return Err(JwtError::Configuration(format!(
                "token lifetime of {} seconds is out of range",
                lifetime.num_seconds()
            )));
        }
        self.lifetime = lifetime;
        Ok(self)
    }

    /// Key material as UTF-8 bytes.
    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Audience expected in tokens; identical to the issuer.
    pub fn audience(&self) -> &str {
        &self.issuer
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }
}

impl fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("lifetime", &self.lifetime)
            .finish()
    }
}
