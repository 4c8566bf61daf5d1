//! HTTP mapping for domain errors.
//!
//! Every failure leaves the service as the same JSON envelope:
//! `{ code, message, details?, status, traceId? }`. Internal errors are
//! redacted before rendering.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Wire shape of an error response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorEnvelope<'a> {
    code: ErrorCode,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a Value>,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<&'a str>,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

/// Minimal envelope used when the regular one cannot be serialised.
fn fallback_body(status: StatusCode) -> String {
    format!(
        r#"{{"code":"internal_error","message":"Internal server error","status":{}}}"#,
        status.as_u16()
    )
}

fn render(error: &Error, status: StatusCode) -> String {
    let envelope = ErrorEnvelope {
        code: error.code(),
        message: error.message(),
        details: error.details(),
        status: status.as_u16(),
        trace_id: error.trace_id(),
    };
    serde_json::to_string(&envelope).unwrap_or_else(|err| {
        error!(error = %err, "failed to serialise error envelope");
        fallback_body(status)
    })
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(code = ?self.code(), message = %self.message(), "request failed");
        }
        let mut builder = HttpResponse::build(status);
        builder.content_type(ContentType::json());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.body(render(&redact_if_internal(self), status))
    }
}

/// Render malformed JSON bodies as `invalid_request` envelopes.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "rejected JSON payload");
    Error::invalid_request(format!("invalid JSON body: {err}")).into()
}

/// Render malformed query strings as `invalid_request` envelopes.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid query string: {err}")).into()
}

/// Render malformed path segments as `invalid_request` envelopes.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid path: {err}")).into()
}
