use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// No `Authorization` header on a guarded route
    #[error("unauthorized access")]
    Unauthorized,

    /// Bad or expired token, or a token for somebody else
    #[error("forbidden access")]
    Forbidden,

    #[error("invalid id")]
    InvalidId,

    #[error("store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("could not sign token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct Message<'a> {
    message: &'a str,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::Store(_) | ApiError::Token(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            ApiError::Unauthorized => HttpResponse::build(status).body("unauthorized access"),
            ApiError::Forbidden | ApiError::InvalidId => {
                HttpResponse::build(status).json(Message {
                    message: &self.to_string(),
                })
            }
            _ => {
                tracing::error!("{}", self);
                HttpResponse::build(status).json(Message {
                    message: "internal server error",
                })
            }
        }
    }
}
