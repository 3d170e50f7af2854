use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use catalog::CatalogError;
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing or invalid fields: {}", invalid_fields(.0))]
    Validation(#[from] ValidationErrors),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Something went wrong: {0}")]
    Database(#[from] CatalogError),
}

#[derive(Serialize)]
struct ErrorBody {
    ok: bool,
    error: String,
    status: u16,
    #[serde(rename = "statusText")]
    status_text: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let code = self.error_code();

        if code.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(ErrorBody {
            ok: false,
            error: self.to_string(),
            status: code.as_u16(),
            status_text: code.canonical_reason().unwrap_or_default().to_string(),
        });

        (code, body).into_response()
    }
}

impl AppError {
    fn error_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(CatalogError::from(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedPayload(rejection.body_text())
    }
}

fn invalid_fields(errors: &ValidationErrors) -> String {
    let mut fields = errors
        .field_errors()
        .into_keys()
        .map(|field| field.to_string())
        .collect::<Vec<_>>();

    fields.sort();
    fields.join(", ")
}
