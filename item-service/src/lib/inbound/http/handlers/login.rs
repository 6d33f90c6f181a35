use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use crate::domain::authentication::models::Credentials;
use crate::domain::authentication::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// Exchange email and password for an access token.
///
/// A successful response body is the bare token string (`text/plain`);
/// failures use the regular error envelope.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<(StatusCode, String), ApiError> {
    state
        .auth_service
        .login(Credentials::new(body.email, body.password))
        .await
        .map_err(ApiError::from)
        .map(|token| (StatusCode::OK, token.into_inner()))
}

#[derive(Clone, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}
