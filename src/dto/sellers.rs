use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SellerInviteRequest {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
}
