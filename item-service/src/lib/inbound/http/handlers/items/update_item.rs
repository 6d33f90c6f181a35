use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ItemRequestBody;
use crate::domain::item::errors::ItemError;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::ReplaceItemCommand;
use crate::domain::item::ports::ItemServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Replace every mutable field of an item. Responds with no content.
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Json(body): Json<ItemRequestBody>,
) -> Result<ApiSuccess<()>, ApiError> {
    let item_id = ItemId::from_string(&item_id).map_err(ItemError::from)?;
    let command = ReplaceItemCommand::new(item_id, body.try_into_fields()?);

    state
        .item_service
        .update_item(command)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
