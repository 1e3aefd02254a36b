//! Unified error types for Billed
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `StoreError`: Remote bills store errors
//! - `AppError`: Application layer errors (rendered as HTML error pages)

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::views::{render_error_page, Layout};

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Erreur de validation : {0}")]
    Validation(String),
}

/// Bills store errors
///
/// Display strings are user-facing: the error page shows them verbatim.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Erreur de connexion : {0}")]
    Request(#[from] reqwest::Error),

    #[error("Erreur {status} : {message}")]
    Api { status: u16, message: String },

    #[error("Erreur 404 : {0}")]
    NotFound(String),

    #[error("Erreur de lecture : {0}")]
    Deserialization(String),
}

impl StoreError {
    /// HTTP status the backend answered with, if it answered
    pub fn status(&self) -> Option<u16> {
        match self {
            StoreError::Api { status, .. } => Some(*status),
            StoreError::NotFound(_) => Some(404),
            _ => None,
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("Requête invalide : {0}")]
    BadRequest(String),

    #[error("Erreur 401 : connexion requise")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Domain(DomainError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Store(e) => {
                tracing::error!(error = %e, "Bills store error");
                match e.status() {
                    Some(404) => StatusCode::NOT_FOUND,
                    Some(401) => StatusCode::UNAUTHORIZED,
                    Some(403) => StatusCode::FORBIDDEN,
                    _ => StatusCode::BAD_GATEWAY,
                }
            }
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
        };

        let page = render_error_page(&Layout::bare(), &self.to_string());

        (status, Html(page)).into_response()
    }
}
