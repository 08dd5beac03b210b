use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use periph_auth_types::token::TokenError;

/// Store service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum StoreServiceError {
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("missing data")]
    MissingData,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    Token(#[from] TokenError),
    #[error("admin access required")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl StoreServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::MissingData => "MISSING_DATA",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Token(TokenError::Missing) => "TOKEN_MISSING",
            Self::Token(TokenError::Malformed) => "TOKEN_MALFORMED",
            Self::Token(TokenError::SignatureInvalid) => "TOKEN_SIGNATURE_INVALID",
            Self::Token(TokenError::Expired) => "TOKEN_EXPIRED",
            Self::Token(TokenError::SubjectNotFound) => "USER_NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for StoreServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserAlreadyExists | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Token(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only; TraceLayer already records method, uri and status for every request.
        // The anyhow chain goes to the log; the body stays generic.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
