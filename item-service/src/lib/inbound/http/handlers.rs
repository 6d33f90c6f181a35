use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::authentication::errors::AuthError;
use crate::domain::item::errors::ItemError;
use crate::user::errors::UserError;

pub mod items;
pub mod login;
pub mod me;
pub mod register;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
const UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable";
const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
pub(crate) const UNAUTHORIZED_MESSAGE: &str = "Invalid or missing access token";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    ServiceUnavailable(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl ApiError {
    /// Log the underlying cause and hide it from the client.
    fn internal(cause: impl std::fmt::Display) -> Self {
        tracing::error!(error = %cause, "Request failed");
        ApiError::InternalServerError(INTERNAL_ERROR_MESSAGE.to_string())
    }

    fn unavailable(cause: impl std::fmt::Display) -> Self {
        tracing::error!(error = %cause, "Backing store unavailable");
        ApiError::ServiceUnavailable(UNAVAILABLE_MESSAGE.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::internal(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_)
            | UserError::InvalidUserId(_) => ApiError::UnprocessableEntity(err.to_string()),
            UserError::DatabaseError(_) => ApiError::unavailable(err),
            UserError::Password(_) | UserError::Unknown(_) => ApiError::internal(err),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized(INVALID_CREDENTIALS_MESSAGE.to_string())
            }
            AuthError::MalformedToken
            | AuthError::UnsupportedAlgorithm(_)
            | AuthError::InvalidSignature
            | AuthError::InvalidClaims(_) => {
                ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string())
            }
            AuthError::StoreUnavailable(_) => ApiError::unavailable(err),
            AuthError::TokenIssuance(_)
            | AuthError::PasswordVerification(_)
            | AuthError::Unknown(_) => ApiError::internal(err),
        }
    }
}

impl From<ItemError> for ApiError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::InvalidItemId(_) => ApiError::BadRequest(err.to_string()),
            ItemError::InvalidName(_) => ApiError::UnprocessableEntity(err.to_string()),
            ItemError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ItemError::DatabaseError(_) => ApiError::unavailable(err),
            ItemError::Unknown(_) => ApiError::internal(err),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use auth::ClaimsError;

    use super::*;
    use crate::domain::item::models::ItemId;

    #[test]
    fn test_credential_failures_share_one_response() {
        assert_eq!(
            ApiError::from(AuthError::InvalidCredentials),
            ApiError::Unauthorized(INVALID_CREDENTIALS_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_token_failures_are_unauthorized() {
        let errors = [
            AuthError::MalformedToken,
            AuthError::UnsupportedAlgorithm("none".to_string()),
            AuthError::InvalidSignature,
            AuthError::InvalidClaims(ClaimsError::Expired),
            AuthError::InvalidClaims(ClaimsError::IssuerMismatch),
        ];

        for err in errors {
            assert_eq!(
                ApiError::from(err),
                ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string())
            );
        }
    }

    #[test]
    fn test_store_failure_is_not_unauthorized() {
        assert_eq!(
            ApiError::from(AuthError::StoreUnavailable("timeout".to_string())),
            ApiError::ServiceUnavailable(UNAVAILABLE_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = ApiError::from(AuthError::PasswordVerification(
            "invalid bcrypt hash".to_string(),
        ));
        assert_eq!(
            err,
            ApiError::InternalServerError(INTERNAL_ERROR_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_item_error_mapping() {
        assert!(matches!(
            ApiError::from(ItemError::NotFound(ItemId::new())),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(ItemError::DatabaseError("down".to_string())),
            ApiError::ServiceUnavailable(_)
        ));
    }
}
