//! Error surface of the list endpoint.
//!
//! Two kinds of failure leave this crate: input rejections, which carry a
//! stable code and are correctable by the caller, and storage failures, which
//! are logged in full via `tracing` while the client only sees a generic
//! message. Internal database details are never sent to users.

use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;

use crate::validate::ListRejection;

#[derive(Debug)]
pub enum ApiError {
    /// 422 Unprocessable Entity - the query parameters violate a business
    /// rule that clamping could not fix.
    Rejected(ListRejection),

    /// 500 Internal Server Error - storage failure (details logged, not
    /// exposed).
    Database {
        /// User-facing generic message.
        message: String,
        /// Internal error (logged, not sent to user).
        internal: DbErr,
    },
}

impl ApiError {
    /// Wrap a database error; the real error is logged, never exposed.
    #[must_use]
    pub fn database(err: DbErr) -> Self {
        Self::Database {
            message: "A database error occurred".to_string(),
            internal: err,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::Rejected(rejection) => rejection.to_string(),
            Self::Database { message, .. } => message.clone(),
        }
    }

    fn log_internal(&self) {
        match self {
            Self::Database { internal, .. } => {
                tracing::error!(error = ?internal, "Database error occurred");
            }
            Self::Rejected(rejection) => {
                tracing::debug!(code = rejection.code(), error = %rejection, "List query rejected");
            }
        }
    }
}

impl From<ListRejection> for ApiError {
    fn from(rejection: ListRejection) -> Self {
        Self::Rejected(rejection)
    }
}

/// Error response sent to users (sanitized).
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    /// Machine-readable rejection code, absent for server-side failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log_internal();

        let status = self.status_code();
        let response = ErrorResponse {
            error: self.user_message(),
            code: match &self {
                Self::Rejected(rejection) => Some(rejection.code()),
                Self::Database { .. } => None,
            },
        };

        (status, Json(response)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for ApiError {}
