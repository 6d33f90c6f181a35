//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the service:
//! - Password hashing (bcrypt) and verification (bcrypt, Argon2)
//! - Signed access token issuance and validation (HS256 JWT)
//! - Authentication coordination
//!
//! Everything here is synchronous and free of I/O. Signing settings are
//! validated once and then shared read-only.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_cost(4).unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{JwtSettings, TokenIssuer, TokenSubject, TokenValidator};
//!
//! let settings = JwtSettings::new("secret_key_at_least_32_bytes_long!", "rastro").unwrap();
//! let token = TokenIssuer::new(&settings)
//!     .issue(&TokenSubject::new("user123", "alice@example.com"))
//!     .unwrap();
//! let claims = TokenValidator::new(&settings).validate(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, JwtSettings, PasswordHasher, TokenSubject};
//!
//! let settings = JwtSettings::new("secret_key_at_least_32_bytes_long!", "rastro").unwrap();
//! let auth = Authenticator::new(&settings)
//!     .with_password_hasher(PasswordHasher::with_cost(4).unwrap());
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let subject = TokenSubject::new("user123", "alice@example.com");
//! let result = auth.authenticate("password123", &hash, &subject).unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.email, "alice@example.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::ClaimsError;
pub use jwt::JwtError;
pub use jwt::JwtSettings;
pub use jwt::TokenIssuer;
pub use jwt::TokenSubject;
pub use jwt::TokenValidator;
pub use password::PasswordError;
pub use password::PasswordHasher;
