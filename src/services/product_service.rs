use uuid::Uuid;

use crate::{
    db::DbPool, dto::products::CreateProductRequest, error::AppResult, models::Product,
};

pub async fn list_products(pool: &DbPool) -> AppResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY created_at")
        .fetch_all(pool)
        .await?;
    Ok(products)
}

pub async fn create_product(pool: &DbPool, payload: CreateProductRequest) -> AppResult<Product> {
    let id = Uuid::new_v4();
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (id, name, description, price) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(id)
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .fetch_one(pool)
    .await?;
    Ok(product)
}
