use std::str::FromStr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal::Decimal;
use storefront_api::{
    db::{DbPool, create_pool},
    dto::{cart::CartRequest, products::CreateProductRequest},
    error::AppError,
    mailer::Mailer,
    services::{
        cart_service::{self, CartAdd},
        product_service, seller_service,
    },
    state::AppState,
};
use uuid::Uuid;

#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<(String, String, String)>>,
    fail: bool,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("smtp unavailable");
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string(), body.to_string()));
        Ok(())
    }
}

// Integration flow: product creation -> idempotent cart add -> listing ->
// removal -> cascade delete -> invite token reuse -> loud mail failure.
#[tokio::test]
async fn product_cart_and_invite_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url =
        match std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL")) {
            Ok(url) => url,
            Err(_) => {
                eprintln!(
                    "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
                );
                return Ok(());
            }
        };

    let pool = setup_pool(&database_url).await?;
    let mailer = Arc::new(RecordingMailer::default());
    let state = AppState {
        pool: pool.clone(),
        mailer: mailer.clone(),
        frontend_url: "http://localhost:5173".to_string(),
    };

    // Product creation round-trips the submitted price exactly.
    let product = product_service::create_product(
        &pool,
        CreateProductRequest {
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: Decimal::from_str("9.99")?,
        },
    )
    .await?;
    assert_eq!(product.price, Decimal::from_str("9.99")?);

    let listed = product_service::list_products(&pool).await?;
    assert!(listed.iter().any(|p| p.id == product.id));

    // First add creates the entry, the second is a no-op.
    let request = CartRequest {
        firebase_user_id: "u1".to_string(),
        product_id: product.id,
    };
    assert_eq!(cart_service::add_to_cart(&pool, &request).await?, CartAdd::Added);
    assert_eq!(
        cart_service::add_to_cart(&pool, &request).await?,
        CartAdd::AlreadyInCart
    );
    assert_eq!(cart_count(&pool, "u1").await?, 1);

    // Adding a nonexistent product is a 404 with no mutation.
    let missing = CartRequest {
        firebase_user_id: "u1".to_string(),
        product_id: Uuid::new_v4(),
    };
    match cart_service::add_to_cart(&pool, &missing).await {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Product not found"),
        other => panic!("expected not-found, got {other:?}"),
    }
    assert_eq!(cart_count(&pool, "u1").await?, 1);

    // Listing joins the product columns in.
    let rows = cart_service::list_cart_items(&pool, "u1").await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].product_id, product.id);
    assert_eq!(rows[0].product_name, "Widget");
    assert_eq!(rows[0].product_price, Decimal::from_str("9.99")?);

    // Removal succeeds once, then reports the entry as gone.
    cart_service::remove_from_cart(&pool, &request).await?;
    match cart_service::remove_from_cart(&pool, &request).await {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Product not found in cart"),
        other => panic!("expected not-found, got {other:?}"),
    }
    assert_eq!(cart_count(&pool, "u1").await?, 0);

    // Deleting the product cascades to its cart entries.
    assert_eq!(cart_service::add_to_cart(&pool, &request).await?, CartAdd::Added);
    sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(product.id)
        .execute(&pool)
        .await?;
    assert_eq!(cart_count(&pool, "u1").await?, 0);

    // Re-inviting the same email reuses the stored token.
    seller_service::send_invite(&state, "seller@example.com").await?;
    let first_token = invite_token(&pool, "seller@example.com").await?;
    seller_service::send_invite(&state, "seller@example.com").await?;
    let second_token = invite_token(&pool, "seller@example.com").await?;
    assert_eq!(first_token, second_token);

    let sent = mailer.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 2);
    let link = format!("http://localhost:5173/register-seller/{first_token}");
    for (to, subject, body) in &sent {
        assert_eq!(to, "seller@example.com");
        assert_eq!(subject, "Seller Registration Invitation");
        assert!(body.contains(&link));
    }

    // Mail failure propagates, but the invite row is still persisted.
    let failing_state = AppState {
        pool: pool.clone(),
        mailer: Arc::new(RecordingMailer {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }),
        frontend_url: "http://localhost:5173".to_string(),
    };
    match seller_service::send_invite(&failing_state, "other@example.com").await {
        Err(AppError::Mail(_)) => {}
        other => panic!("expected mail failure, got {other:?}"),
    }
    invite_token(&pool, "other@example.com").await?;

    Ok(())
}

async fn setup_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let pool = create_pool(database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Clean tables between runs
    sqlx::query("TRUNCATE TABLE cart_items, seller_invites, products RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await?;

    Ok(pool)
}

async fn cart_count(pool: &DbPool, firebase_user_id: &str) -> anyhow::Result<i64> {
    let count: (i64,) =
        sqlx::query_as("SELECT count(*) FROM cart_items WHERE firebase_user_id = $1")
            .bind(firebase_user_id)
            .fetch_one(pool)
            .await?;
    Ok(count.0)
}

async fn invite_token(pool: &DbPool, email: &str) -> anyhow::Result<Uuid> {
    let token: (Uuid,) = sqlx::query_as("SELECT token FROM seller_invites WHERE email = $1")
        .bind(email)
        .fetch_one(pool)
        .await?;
    Ok(token.0)
}
