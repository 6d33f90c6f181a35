use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::claims::TokenSubject;
use super::errors::JwtError;
use super::settings::JwtSettings;

/// Issues signed, time-bounded access tokens.
///
/// Tokens are compact HS256 JWS strings. Issuance is stateless: no record
/// of issued tokens is kept.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
    issuer: String,
    lifetime: Duration,
}

impl TokenIssuer {
    pub fn new(settings: &JwtSettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(settings.secret_bytes()),
            algorithm: Algorithm::HS256,
            issuer: settings.issuer().to_string(),
            lifetime: settings.lifetime(),
        }
    }

    /// Issue a token for the subject, valid from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &TokenSubject) -> Result<String, JwtError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token for the subject as if issued at `issued_at`.
    ///
    /// Identical inputs always produce byte-identical tokens.
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiration is out of range or encoding failed
    pub fn issue_at(
        &self,
        subject: &TokenSubject,
        issued_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let claims = Claims::for_subject(subject, &self.issuer, issued_at, self.lifetime)
            .ok_or_else(|| {
                JwtError::EncodingFailed("token expiration is out of range".to_string())
            })?;
        self.encode(&claims)
    }

    /// Sign arbitrary claims with the configured key.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }
}
