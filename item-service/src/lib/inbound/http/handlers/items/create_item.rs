use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ItemRequestBody;
use super::ItemResponseData;
use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::ports::ItemServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_item(
    State(state): State<AppState>,
    Json(body): Json<ItemRequestBody>,
) -> Result<ApiSuccess<ItemResponseData>, ApiError> {
    let command = CreateItemCommand::new(body.try_into_fields()?);

    state
        .item_service
        .create_item(command)
        .await
        .map_err(ApiError::from)
        .map(|ref item| ApiSuccess::new(StatusCode::CREATED, item.into()))
}
