//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers
//! turn domain failures into `{"detail": ...}` bodies with consistent status
//! codes. Extractor failures (bad JSON, bad query strings) are routed through
//! the same mapping so every client-facing error has one shape.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message sent in place of internal error details.
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

/// Error body returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDetail {
    /// Human-readable failure description.
    #[schema(example = "User not found")]
    pub detail: String,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> ErrorDetail {
    if matches!(error.code(), ErrorCode::InternalError) {
        error!(
            message = error.message(),
            trace_id = error.trace_id(),
            "internal error redacted from response"
        );
        ErrorDetail {
            detail: INTERNAL_ERROR_DETAIL.to_owned(),
        }
    } else {
        ErrorDetail {
            detail: error.message().to_owned(),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

/// Convert JSON body extraction failures into `422` responses.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid request body: {err}")).into()
}

/// Convert query string extraction failures into `422` responses.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid query parameters: {err}")).into()
}
