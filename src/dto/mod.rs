use serde::Serialize;
use utoipa::ToSchema;

pub mod cart;
pub mod products;
pub mod sellers;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
