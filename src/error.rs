use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("validation failed")]
    Validation(#[from] validator::ValidationErrors),

    #[error("database error")]
    DbError(#[from] sqlx::Error),

    #[error("failed to send email")]
    Mail(anyhow::Error),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => error_response(StatusCode::NOT_FOUND, message),
            AppError::BadRequest(message) => error_response(StatusCode::BAD_REQUEST, message),
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, axum::Json(field_errors(&errors))).into_response()
            }
            AppError::DbError(err) => {
                tracing::error!(error = %err, "database error");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::Mail(err) => {
                tracing::error!(error = %err, "email dispatch failed");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, axum::Json(ErrorBody { error })).into_response()
}

/// Flatten `ValidationErrors` into a `{field: [messages]}` object.
fn field_errors(errors: &validator::ValidationErrors) -> serde_json::Value {
    let mut body = serde_json::Map::new();
    for (field, errs) in errors.field_errors() {
        let messages: Vec<serde_json::Value> = errs
            .iter()
            .map(|err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                serde_json::Value::String(message)
            })
            .collect();
        body.insert(field.to_string(), serde_json::Value::Array(messages));
    }
    serde_json::Value::Object(body)
}

pub type AppResult<T> = Result<T, AppError>;
