use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use validator::Validate;

use crate::{
    dto::{MessageResponse, sellers::SellerInviteRequest},
    error::AppResult,
    extract::AppJson,
    services::seller_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/sellers/invite/", post(send_invite))
}

#[utoipa::path(
    post,
    path = "/sellers/invite/",
    request_body = SellerInviteRequest,
    responses(
        (status = 201, description = "Invitation sent", body = MessageResponse),
        (status = 400, description = "Validation failure, per-field messages"),
        (status = 500, description = "Mail dispatch failed"),
    ),
    tag = "Sellers"
)]
pub async fn send_invite(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SellerInviteRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    payload.validate()?;
    seller_service::send_invite(&state, &payload.email).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Invitation sent successfully!")),
    ))
}
