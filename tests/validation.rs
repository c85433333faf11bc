use std::str::FromStr;

use rust_decimal::Decimal;
use storefront_api::dto::{products::CreateProductRequest, sellers::SellerInviteRequest};
use validator::Validate;

fn product(name: &str, description: &str, price: &str) -> CreateProductRequest {
    CreateProductRequest {
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::from_str(price).expect("test price"),
    }
}

#[test]
fn valid_product_passes() {
    assert!(product("Widget", "A widget", "9.99").validate().is_ok());
    assert!(product("Widget", "A widget", "0").validate().is_ok());
    assert!(product("Widget", "A widget", "99999999.99").validate().is_ok());
}

#[test]
fn negative_price_is_rejected() {
    let errors = product("Widget", "A widget", "-1.00")
        .validate()
        .unwrap_err();
    let fields = errors.field_errors();
    let messages = fields.get("price").expect("price errors");
    assert!(
        messages[0]
            .message
            .as_ref()
            .unwrap()
            .contains("greater than or equal to 0")
    );
}

#[test]
fn too_many_decimal_places_is_rejected() {
    let errors = product("Widget", "A widget", "9.999").validate().unwrap_err();
    let fields = errors.field_errors();
    let messages = fields.get("price").expect("price errors");
    assert!(
        messages[0]
            .message
            .as_ref()
            .unwrap()
            .contains("2 decimal places")
    );
}

#[test]
fn too_many_digits_is_rejected() {
    let errors = product("Widget", "A widget", "123456789.99")
        .validate()
        .unwrap_err();
    let fields = errors.field_errors();
    let messages = fields.get("price").expect("price errors");
    assert!(messages[0].message.as_ref().unwrap().contains("10 digits"));
}

#[test]
fn blank_name_and_description_are_rejected() {
    let errors = product("", "", "9.99").validate().unwrap_err();
    let fields = errors.field_errors();
    assert!(fields.contains_key("name"));
    assert!(fields.contains_key("description"));
}

#[test]
fn invite_email_is_validated() {
    let valid = SellerInviteRequest {
        email: "seller@example.com".to_string(),
    };
    assert!(valid.validate().is_ok());

    let invalid = SellerInviteRequest {
        email: "not-an-email".to_string(),
    };
    let errors = invalid.validate().unwrap_err();
    let fields = errors.field_errors();
    let messages = fields.get("email").expect("email errors");
    assert!(
        messages[0]
            .message
            .as_ref()
            .unwrap()
            .contains("valid email address")
    );
}
