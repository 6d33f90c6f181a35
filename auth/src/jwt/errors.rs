use thiserror::Error;

/// Claim-level validation failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClaimsError {
    #[error("Token is expired")]
    Expired,

    #[error("Token is not valid yet")]
    NotYetValid,

    #[error("Token issuer does not match")]
    IssuerMismatch,

    #[error("Token audience does not match")]
    AudienceMismatch,

    #[error("Token claims could not be read: {0}")]
    Unreadable(String),
}

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Invalid token configuration: {0}")]
    Configuration(String),

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed")]
    MalformedToken,

    #[error("Unsupported token algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token claims are invalid: {0}")]
    InvalidClaims(#[from] ClaimsError),
}

impl JwtError {
    /// Whether the token was rejected only because its lifetime ran out.
    pub fn is_expired(&self) -> bool {
        matches!(self, JwtError::InvalidClaims(ClaimsError::Expired))
    }
}
