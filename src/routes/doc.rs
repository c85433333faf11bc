use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        MessageResponse,
        cart::{CartItemRow, CartRequest},
        products::{CreateProductRequest, ProductCreated},
        sellers::SellerInviteRequest,
    },
    error::ErrorBody,
    models::{CartItem, Product, SellerInvite},
    routes::{cart, health, products, sellers},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::add_product,
        cart::add_to_cart,
        cart::remove_from_cart,
        cart::list_cart_items,
        sellers::send_invite,
    ),
    components(
        schemas(
            Product,
            CartItem,
            SellerInvite,
            CartRequest,
            CartItemRow,
            CreateProductRequest,
            ProductCreated,
            SellerInviteRequest,
            MessageResponse,
            ErrorBody,
            health::HealthData,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Sellers", description = "Seller invitation endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
