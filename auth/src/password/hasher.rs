use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordVerifier;
use argon2::Argon2;

use super::errors::PasswordError;

/// Hash formats recognised in stored credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HashScheme {
    Bcrypt,
    Argon2,
}

impl HashScheme {
    const BCRYPT_PREFIXES: [&'static str; 4] = ["$2a$", "$2b$", "$2x$", "$2y$"];

    fn detect(hash: &str) -> Option<Self> {
        if Self::BCRYPT_PREFIXES
            .iter()
            .any(|prefix| hash.starts_with(prefix))
        {
            Some(HashScheme::Bcrypt)
        } else if hash.starts_with("$argon2") {
            Some(HashScheme::Argon2)
        } else {
            None
        }
    }
}

/// Password hashing and verification.
///
/// New hashes are produced with bcrypt; the random salt and the cost are
/// embedded in the resulting `$2b$` string. Verification also accepts
/// Argon2 PHC strings so that records written by Argon2-based writers keep
/// working.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 31;

    /// Create a hasher with the bcrypt default cost.
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit bcrypt cost.
    ///
    /// # Errors
    /// * `InvalidCost` - Cost is outside 4..=31
    pub fn with_cost(cost: u32) -> Result<Self, PasswordError> {
        if (Self::MIN_COST..=Self::MAX_COST).contains(&cost) {
            Ok(Self { cost })
        } else {
            Err(PasswordError::InvalidCost(cost))
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Modular crypt string (`$2b$<cost>$<salt><hash>`)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(password, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// The comparison itself is performed by the underlying algorithm crate
    /// in constant time.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored bcrypt or Argon2 hash
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `UnsupportedScheme` - Stored hash is neither bcrypt nor Argon2
    /// * `VerificationFailed` - Stored hash could not be parsed
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        match HashScheme::detect(hash) {
            Some(HashScheme::Bcrypt) => bcrypt::verify(password, hash).map_err(|e| {
                PasswordError::VerificationFailed(format!("Invalid bcrypt hash: {}", e))
            }),
            Some(HashScheme::Argon2) => {
                let parsed_hash = PasswordHash::new(hash).map_err(|e| {
                    PasswordError::VerificationFailed(format!("Invalid argon2 hash: {}", e))
                })?;

                Ok(Argon2::default()
                    .verify_password(password.as_bytes(), &parsed_hash)
                    .is_ok())
            }
            None => Err(PasswordError::UnsupportedScheme),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
