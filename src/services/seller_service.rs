use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    state::AppState,
};

/// Get-or-create the invite row and dispatch the invitation email.
///
/// The no-op `DO UPDATE` keeps the stored token for an email that was
/// already invited, so re-requesting an invite never rotates the link.
/// The row is persisted before the mail is sent; a transport failure
/// surfaces to the caller instead of being swallowed.
pub async fn send_invite(state: &AppState, email: &str) -> AppResult<()> {
    let (token,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO seller_invites (email, token)
        VALUES ($1, $2)
        ON CONFLICT (email) DO UPDATE SET email = EXCLUDED.email
        RETURNING token
        "#,
    )
    .bind(email)
    .bind(Uuid::new_v4())
    .fetch_one(&state.pool)
    .await?;

    let invite_link = format!("{}/register-seller/{}", state.frontend_url, token);
    let body = format!("You're invited to register as a seller. Click the link: {invite_link}");

    state
        .mailer
        .send(email, "Seller Registration Invitation", &body)
        .await
        .map_err(AppError::Mail)?;

    tracing::info!(email = %email, "seller invite sent");
    Ok(())
}
