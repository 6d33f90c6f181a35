use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::ClaimsError;
use auth::TokenSubject;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::AccessToken;
use crate::domain::authentication::models::AuthenticatedUser;
use crate::domain::authentication::models::Credentials;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;
use crate::user::ports::UserRepository;

/// Login orchestration and request authorization.
///
/// Composes the credential store lookup, password verification and token
/// issuance. Holds no per-request state.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password verifier and token issuer/validator
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    /// Run one password hash at the configured cost and discard it, so a
    /// login for an unknown address costs as much as a wrong password.
    async fn spend_verification_work(&self, password: String) {
        let authenticator = Arc::clone(&self.authenticator);

        let outcome =
            tokio::task::spawn_blocking(move || authenticator.hash_password(&password)).await;
        if let Err(e) = outcome {
            tracing::warn!(error = %e, "Timing equalization task failed");
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, credentials: Credentials) -> Result<AccessToken, AuthError> {
        let Credentials { email, password } = credentials;

        // An address that cannot exist is handled like an unknown one.
        let Ok(email) = EmailAddress::new(email) else {
            tracing::info!(reason = "invalid_email", "Login rejected");
            self.spend_verification_work(password).await;
            return Err(AuthError::InvalidCredentials);
        };

        let lookup = self.repository.find_by_email(&email).await.map_err(|e| {
            tracing::error!(error = %e, "Credential store lookup failed");
            AuthError::from(e)
        })?;

        let Some(user) = lookup else {
            tracing::info!(reason = "unknown_email", "Login rejected");
            self.spend_verification_work(password).await;
            return Err(AuthError::InvalidCredentials);
        };

        let user_id = user.id;
        let subject = TokenSubject::new(user.id, user.email.as_str());
        let stored_hash = user.password_hash;
        let authenticator = Arc::clone(&self.authenticator);

        // Hash verification blocks.
        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &subject)
        })
        .await
        .map_err(|e| AuthError::Unknown(format!("Password verification task failed: {}", e)))?;

        match result {
            Ok(result) => {
                tracing::info!(user_id = %user_id, "User logged in");
                Ok(AccessToken::new(result.access_token))
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::info!(user_id = %user_id, reason = "password_mismatch", "Login rejected");
                Err(AuthError::InvalidCredentials)
            }
            Err(AuthenticationError::PasswordError(e)) => {
                tracing::error!(user_id = %user_id, error = %e, "Stored password hash is unusable");
                Err(AuthError::PasswordVerification(e.to_string()))
            }
            Err(AuthenticationError::JwtError(e)) => {
                tracing::error!(user_id = %user_id, error = %e, "Token issuance failed");
                Err(AuthError::TokenIssuance(e.to_string()))
            }
        }
    }

    fn authorize(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.authenticator.validate_token(token)?;

        let user_id = UserId::from_string(&claims.sub)
            .map_err(|e| AuthError::InvalidClaims(ClaimsError::Unreadable(e.to_string())))?;

        Ok(AuthenticatedUser {
            user_id,
            email: claims.email,
        })
    }
}
