//! Shipment Error Types
//!
//! This module provides shipment-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Shipment-specific result type alias
pub type ShipmentResult<T> = Result<T, ShipmentError>;

/// Shipment-specific error variants
#[derive(Debug, Error)]
pub enum ShipmentError {
    /// Create validation failed (all violations reported at once)
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Status code is not one of the recognized values
    #[error("Unrecognized status: {0} (expected pending, in_transit, delivered or cancelled)")]
    UnknownStatus(String),

    /// Shipment not found
    #[error("Shipment not found")]
    NotFound,

    /// Caller is not the owner of the requested shipments
    #[error("You may only view your own shipments")]
    OwnerOnly,

    /// Admin role required
    #[error("Forbidden: Admin privileges required")]
    AdminRequired,

    /// No bearer token on a privileged call
    #[error("Authentication required")]
    MissingToken,

    /// Bearer token present but failed verification
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShipmentError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShipmentError::Validation(_) | ShipmentError::UnknownStatus(_) => {
                StatusCode::BAD_REQUEST
            }
            ShipmentError::NotFound => StatusCode::NOT_FOUND,
            ShipmentError::OwnerOnly | ShipmentError::AdminRequired => StatusCode::FORBIDDEN,
            ShipmentError::MissingToken => StatusCode::UNAUTHORIZED,
            // A token that is present but fails verification is 403, not 401
            ShipmentError::InvalidToken => StatusCode::FORBIDDEN,
            ShipmentError::Database(_) | ShipmentError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShipmentError::Validation(_) | ShipmentError::UnknownStatus(_) => ErrorKind::BadRequest,
            ShipmentError::NotFound => ErrorKind::NotFound,
            ShipmentError::OwnerOnly
            | ShipmentError::AdminRequired
            | ShipmentError::InvalidToken => ErrorKind::Forbidden,
            ShipmentError::MissingToken => ErrorKind::Unauthorized,
            ShipmentError::Database(_) | ShipmentError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side variants get a generic outward message; the detail stays
    /// in the log.
    pub fn to_app_error(&self) -> AppError {
        match self {
            ShipmentError::Database(_) | ShipmentError::Internal(_) => {
                AppError::new(self.kind(), "Server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ShipmentError::Database(e) => {
                tracing::error!(error = %e, "Shipment database error");
            }
            ShipmentError::Internal(msg) => {
                tracing::error!(message = %msg, "Shipment internal error");
            }
            ShipmentError::AdminRequired | ShipmentError::OwnerOnly => {
                tracing::warn!(error = %self, "Rejected unprivileged shipment operation");
            }
            ShipmentError::InvalidToken => {
                tracing::warn!("Rejected invalid bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Shipment error");
            }
        }
    }
}

impl IntoResponse for ShipmentError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for ShipmentError {
    fn from(err: AppError) -> Self {
        ShipmentError::Internal(err.to_string())
    }
}
