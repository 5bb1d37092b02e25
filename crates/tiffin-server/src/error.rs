use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tiffin_auth::AuthError;
use tiffin_media::MediaError;
use tiffin_portal::PortalError;
use tiffin_store::StoreError;

/// Errors surfaced on the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Portal(#[from] PortalError),

    #[error("invalid id: {0}")]
    InvalidId(#[from] tiffin_types::TypeError),

    #[error("malformed multipart payload: {0}")]
    Multipart(String),

    #[error("missing form field: {0}")]
    MissingField(&'static str),

    #[error("invalid form field {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Portal(PortalError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Portal(PortalError::Auth(auth)) => match auth {
                AuthError::EmailAlreadyRegistered(_) => StatusCode::CONFLICT,
                AuthError::WeakPassword { .. } => StatusCode::BAD_REQUEST,
                AuthError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            },
            Self::Portal(PortalError::Store(store)) => match store {
                StoreError::OrderNotFound(_) | StoreError::HotelNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                StoreError::StatusConflict { .. } | StoreError::IllegalTransition { .. } => {
                    StatusCode::CONFLICT
                }
                StoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            },
            Self::Portal(PortalError::Media(media)) => match media {
                MediaError::UnsupportedContentType(_) | MediaError::EmptyPayload => {
                    StatusCode::BAD_REQUEST
                }
                MediaError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            },
            Self::InvalidId(_) | Self::Multipart(_) | Self::MissingField(_)
            | Self::InvalidField { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
