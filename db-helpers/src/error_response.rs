//! Uniform JSON error responses for HTTP handlers.
//!
//! The underlying error is logged for operators and never reaches the client;
//! the body only carries the caller-supplied message and description.

use crate::logger::Logger;
use crate::metrics_sender::MetricsSender;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    InternalServerError,
    BadRequest,
    Forbidden,
    Unauthorized,
    Conflict,
}

impl Severity {
    pub fn status(self) -> StatusCode {
        match self {
            Severity::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            Severity::BadRequest => StatusCode::BAD_REQUEST,
            Severity::Forbidden => StatusCode::FORBIDDEN,
            Severity::Unauthorized => StatusCode::UNAUTHORIZED,
            Severity::Conflict => StatusCode::CONFLICT,
        }
    }

    /// Only server-side failures are counted; client errors are not.
    pub fn increments_counter(self) -> bool {
        matches!(self, Severity::InternalServerError)
    }
}

/// Client-visible error body: `{"error": "<message>: <description>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Clone)]
pub struct ErrorResponse {
    logger: Arc<dyn Logger>,
    metrics_sender: Arc<dyn MetricsSender>,
}

impl ErrorResponse {
    pub fn new(logger: Arc<dyn Logger>, metrics_sender: Arc<dyn MetricsSender>) -> Self {
        Self {
            logger,
            metrics_sender,
        }
    }

    pub fn internal_server_error<E: fmt::Display>(
        &self,
        err: E,
        message: &str,
        description: &str,
    ) -> Response {
        self.respond(Severity::InternalServerError, err, message, description)
    }

    pub fn bad_request<E: fmt::Display>(
        &self,
        err: E,
        message: &str,
        description: &str,
    ) -> Response {
        self.respond(Severity::BadRequest, err, message, description)
    }

    pub fn forbidden<E: fmt::Display>(
        &self,
        err: E,
        message: &str,
        description: &str,
    ) -> Response {
        self.respond(Severity::Forbidden, err, message, description)
    }

    pub fn unauthorized<E: fmt::Display>(
        &self,
        err: E,
        message: &str,
        description: &str,
    ) -> Response {
        self.respond(Severity::Unauthorized, err, message, description)
    }

    pub fn conflict<E: fmt::Display>(
        &self,
        err: E,
        message: &str,
        description: &str,
    ) -> Response {
        self.respond(Severity::Conflict, err, message, description)
    }

    /// Log `err`, count it when `severity` calls for it, and build the response.
    pub fn respond<E: fmt::Display>(
        &self,
        severity: Severity,
        err: E,
        message: &str,
        description: &str,
    ) -> Response {
        let line = format!("{}: {}", message, description);
        self.logger.error(&line, &err);

        if severity.increments_counter() {
            self.metrics_sender.increment_counter(message);
        }

        (severity.status(), Json(ErrorBody { error: line })).into_response()
    }
}

impl fmt::Debug for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorResponse").finish_non_exhaustive()
    }
}
