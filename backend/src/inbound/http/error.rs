//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde_json::json;
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if error.code() == ErrorCode::InternalError {
        Error::internal("Internal server error")
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::InternalError {
            error!(error = %self, "request failed with internal error");
        }
        HttpResponse::build(self.status_code()).json(redact_if_internal(self))
    }
}

/// JSON extractor configuration reporting malformed bodies as [`Error`].
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        debug!(error = %err, "rejected request body");
        Error::invalid_request("request body is not valid JSON")
            .with_details(json!({ "reason": err.to_string() }))
            .into()
    })
}

/// Query-string extractor configuration reporting bad parameters as [`Error`].
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        debug!(error = %err, "rejected query string");
        Error::invalid_request("query parameters are invalid")
            .with_details(json!({ "reason": err.to_string() }))
            .into()
    })
}

#[cfg(test)]
mod tests;
