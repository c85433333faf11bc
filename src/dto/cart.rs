use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Body shared by add-to-cart and remove-from-cart.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CartRequest {
    pub firebase_user_id: String,
    pub product_id: Uuid,
}

/// Cart entry joined with its product for the cart listing.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct CartItemRow {
    pub id: i64,
    pub firebase_user_id: String,
    pub added_at: DateTime<Utc>,
    pub product_id: Uuid,
    pub product_name: String,
    #[schema(value_type = String, example = "9.99")]
    pub product_price: Decimal,
}
