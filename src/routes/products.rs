use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use validator::Validate;

use crate::{
    dto::products::{CreateProductRequest, ProductCreated},
    error::AppResult,
    extract::AppJson,
    models::Product,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products/", get(list_products))
        .route("/products/add/", post(add_product))
}

#[utoipa::path(
    get,
    path = "/products/",
    responses(
        (status = 200, description = "All products in insertion order", body = Vec<Product>)
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = product_service::list_products(&state.pool).await?;
    Ok(Json(products))
}

#[utoipa::path(
    post,
    path = "/products/add/",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductCreated),
        (status = 400, description = "Validation failure, per-field messages"),
    ),
    tag = "Products"
)]
pub async fn add_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<ProductCreated>)> {
    payload.validate()?;
    let product = product_service::create_product(&state.pool, payload).await?;

    let body = ProductCreated {
        message: "Product added".to_string(),
        product_id: product.id,
    };
    Ok((StatusCode::CREATED, Json(body)))
}
