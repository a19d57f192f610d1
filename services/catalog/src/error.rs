use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Catalog service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("movie not found")]
    MovieNotFound,
    #[error("actor not found")]
    ActorNotFound,
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error("invalid query")]
    InvalidQuery,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CatalogServiceError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::MovieNotFound => "MOVIE_NOT_FOUND",
            Self::ActorNotFound => "ACTOR_NOT_FOUND",
            Self::InvalidField { .. } => "INVALID_FIELD",
            Self::MalformedBody(_) => "MALFORMED_BODY",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<JsonRejection> for CatalogServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for CatalogServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MovieNotFound | Self::ActorNotFound => StatusCode::NOT_FOUND,
            Self::InvalidField { .. } | Self::MalformedBody(_) | Self::InvalidQuery => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let mut body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let Self::InvalidField { field, .. } = &self {
            body["field"] = serde_json::Value::from(*field);
        }
        (status, axum::Json(body)).into_response()
    }
}
