use async_trait::async_trait;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::AccessToken;
use crate::domain::authentication::models::AuthenticatedUser;
use crate::domain::authentication::models::Credentials;

/// Port for login and request authorization.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange credentials for a signed access token.
    ///
    /// # Arguments
    /// * `credentials` - Email and presented password
    ///
    /// # Returns
    /// Access token asserting the user's identity
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `StoreUnavailable` - Credential store lookup failed
    /// * `PasswordVerification` - Stored hash could not be used
    /// * `TokenIssuance` - Token signing failed
    async fn login(&self, credentials: Credentials) -> Result<AccessToken, AuthError>;

    /// Validate a bearer token and resolve the request identity.
    ///
    /// # Arguments
    /// * `token` - Raw token taken from the Authorization header
    ///
    /// # Errors
    /// * `MalformedToken`, `UnsupportedAlgorithm`, `InvalidSignature`,
    ///   `InvalidClaims` - Token rejected
    fn authorize(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
