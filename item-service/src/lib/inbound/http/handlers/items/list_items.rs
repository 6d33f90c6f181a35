use axum::extract::State;
use axum::http::StatusCode;

use super::ItemResponseData;
use crate::domain::item::ports::ItemServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_items(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ItemResponseData>>, ApiError> {
    state
        .item_service
        .list_items()
        .await
        .map_err(ApiError::from)
        .map(|items| {
            let item_data: Vec<ItemResponseData> = items.iter().map(|i| i.into()).collect();
            ApiSuccess::new(StatusCode::OK, item_data)
        })
}
