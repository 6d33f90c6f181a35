use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),

    #[error("Unsupported password hash scheme")]
    UnsupportedScheme,

    #[error("Invalid bcrypt cost {0}: expected a value between 4 and 31")]
    InvalidCost(u32),
}
