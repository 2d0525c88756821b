use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shortcut_core::StoreError;
use thiserror::Error;
use tracing::error;

use crate::lifecycle::Phase;

pub type Result<T> = std::result::Result<T, AppError>;

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to render response: {0}")]
    Render(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        match self {
            AppError::Render(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}

/// Errors that end the process before or while serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to load url mapping: {0}")]
    Load(#[source] StoreError),
    #[error("failed to bind listener on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped unexpectedly: {0}")]
    Serve(#[source] std::io::Error),
    #[error("invalid lifecycle transition from {from} to {to}")]
    InvalidTransition { from: Phase, to: Phase },
}
