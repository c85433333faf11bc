use uuid::Uuid;

use crate::{
    db::DbPool,
    dto::cart::{CartItemRow, CartRequest},
    error::{AppError, AppResult},
};

#[derive(Debug, PartialEq, Eq)]
pub enum CartAdd {
    Added,
    AlreadyInCart,
}

pub async fn add_to_cart(pool: &DbPool, payload: &CartRequest) -> AppResult<CartAdd> {
    let product: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM products WHERE id = $1")
        .bind(payload.product_id)
        .fetch_optional(pool)
        .await?;
    if product.is_none() {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    // Concurrent duplicate adds race at the unique constraint; the loser
    // sees no returned row and reports the entry as already present.
    let inserted: Option<(i64,)> = sqlx::query_as(
        r#"
        INSERT INTO cart_items (firebase_user_id, product_id)
        VALUES ($1, $2)
        ON CONFLICT (firebase_user_id, product_id) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(&payload.firebase_user_id)
    .bind(payload.product_id)
    .fetch_optional(pool)
    .await?;

    Ok(if inserted.is_some() {
        CartAdd::Added
    } else {
        CartAdd::AlreadyInCart
    })
}

pub async fn remove_from_cart(pool: &DbPool, payload: &CartRequest) -> AppResult<()> {
    let result =
        sqlx::query("DELETE FROM cart_items WHERE firebase_user_id = $1 AND product_id = $2")
            .bind(&payload.firebase_user_id)
            .bind(payload.product_id)
            .execute(pool)
            .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Product not found in cart".to_string()));
    }
    Ok(())
}

pub async fn list_cart_items(pool: &DbPool, firebase_user_id: &str) -> AppResult<Vec<CartItemRow>> {
    let rows = sqlx::query_as::<_, CartItemRow>(
        r#"
        SELECT ci.id, ci.firebase_user_id, ci.added_at,
               p.id AS product_id, p.name AS product_name, p.price AS product_price
        FROM cart_items ci
        JOIN products p ON p.id = ci.product_id
        WHERE ci.firebase_user_id = $1
        ORDER BY ci.added_at
        "#,
    )
    .bind(firebase_user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
