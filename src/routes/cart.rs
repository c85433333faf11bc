use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};

use crate::{
    dto::{
        MessageResponse,
        cart::{CartItemRow, CartRequest},
    },
    error::AppResult,
    extract::AppJson,
    services::cart_service::{self, CartAdd},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cart/add/", post(add_to_cart))
        .route("/cart/remove/", delete(remove_from_cart))
        .route("/cart/{firebase_user_id}/", get(list_cart_items))
}

#[utoipa::path(
    post,
    path = "/cart/add/",
    request_body = CartRequest,
    responses(
        (status = 201, description = "Product added to cart", body = MessageResponse),
        (status = 200, description = "Product already in cart", body = MessageResponse),
        (status = 404, description = "Product not found"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CartRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let outcome = cart_service::add_to_cart(&state.pool, &payload).await?;
    Ok(match outcome {
        CartAdd::Added => (
            StatusCode::CREATED,
            Json(MessageResponse::new("Product added to cart")),
        ),
        CartAdd::AlreadyInCart => (
            StatusCode::OK,
            Json(MessageResponse::new("Product already in cart")),
        ),
    })
}

#[utoipa::path(
    delete,
    path = "/cart/remove/",
    request_body = CartRequest,
    responses(
        (status = 200, description = "Product removed from cart", body = MessageResponse),
        (status = 404, description = "Cart entry not found"),
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CartRequest>,
) -> AppResult<Json<MessageResponse>> {
    cart_service::remove_from_cart(&state.pool, &payload).await?;
    Ok(Json(MessageResponse::new("Product removed from cart")))
}

#[utoipa::path(
    get,
    path = "/cart/{firebase_user_id}/",
    params(
        ("firebase_user_id" = String, Path, description = "External user identifier")
    ),
    responses(
        (status = 200, description = "Cart entries joined with their products", body = Vec<CartItemRow>)
    ),
    tag = "Cart"
)]
pub async fn list_cart_items(
    State(state): State<AppState>,
    Path(firebase_user_id): Path<String>,
) -> AppResult<Json<Vec<CartItemRow>>> {
    let rows = cart_service::list_cart_items(&state.pool, &firebase_user_id).await?;
    Ok(Json(rows))
}
