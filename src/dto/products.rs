use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Ensure this field is not blank and has no more than 255 characters."
    ))]
    pub name: String,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub description: String,
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = String, example = "9.99")]
    pub price: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductCreated {
    pub message: String,
    pub product_id: Uuid,
}

/// Mirror the NUMERIC(10, 2) column: non-negative, 2 fractional digits,
/// 10 significant digits in total.
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        return Err(validation_error(
            "min_value",
            "Ensure this value is greater than or equal to 0.",
        ));
    }
    if price.scale() > 2 {
        return Err(validation_error(
            "max_decimal_places",
            "Ensure that there are no more than 2 decimal places.",
        ));
    }
    if price.trunc() >= Decimal::from(100_000_000_u64) {
        return Err(validation_error(
            "max_digits",
            "Ensure that there are no more than 10 digits in total.",
        ));
    }
    Ok(())
}

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}
