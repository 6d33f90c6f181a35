use auth::ClaimsError;
use auth::JwtError;
use thiserror::Error;

use crate::user::errors::UserError;

/// Errors produced by login and request authorization.
///
/// The variants are distinguished for logging only; the HTTP boundary
/// collapses every credential and token failure into the same response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password; the two are never told apart.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Unsupported token algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Invalid token claims: {0}")]
    InvalidClaims(ClaimsError),

    // Infrastructure errors
    #[error("Credential store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error("Password verification failed: {0}")]
    PasswordVerification(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AuthError {
    pub fn is_expired(&self) -> bool {
        matches!(self, AuthError::InvalidClaims(ClaimsError::Expired))
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::MalformedToken => "malformed_token",
            AuthError::UnsupportedAlgorithm(_) => "unsupported_algorithm",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::InvalidClaims(ClaimsError::Expired) => "expired",
            AuthError::InvalidClaims(_) => "invalid_claims",
            AuthError::StoreUnavailable(_) => "store_unavailable",
            AuthError::TokenIssuance(_) => "token_issuance",
            AuthError::PasswordVerification(_) => "password_verification",
            AuthError::Unknown(_) => "unknown",
        }
    }
}

impl From<JwtError> for AuthError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::MalformedToken => AuthError::MalformedToken,
            JwtError::UnsupportedAlgorithm(alg) => AuthError::UnsupportedAlgorithm(alg),
            JwtError::InvalidSignature => AuthError::InvalidSignature,
            JwtError::InvalidClaims(claims) => AuthError::InvalidClaims(claims),
            JwtError::Configuration(msg) | JwtError::EncodingFailed(msg) => {
                AuthError::TokenIssuance(msg)
            }
        }
    }
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::DatabaseError(msg) => AuthError::StoreUnavailable(msg),
            other => AuthError::Unknown(other.to_string()),
        }
    }
}
