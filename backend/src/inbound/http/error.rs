//! HTTP rendering of domain errors.
//!
//! Every handler returns [`ApiResult`], so domain, membership and port
//! failures all leave through [`ResponseError for Error`](Error). The status
//! follows the error code, the `trace-id` header echoes the payload, and
//! internal failures reach clients only as a generic message.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{debug, error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const INTERNAL_MESSAGE: &str = "Internal server error";

impl From<ErrorCode> for StatusCode {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::InvalidRequest => Self::BAD_REQUEST,
            ErrorCode::NotFound => Self::NOT_FOUND,
            ErrorCode::Conflict => Self::CONFLICT,
            ErrorCode::ServiceUnavailable => Self::SERVICE_UNAVAILABLE,
            ErrorCode::InternalError => Self::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Payload sent to the client. Internal errors keep only their trace id.
fn client_view(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    match error.trace_id() {
        Some(id) => Error::internal(INTERNAL_MESSAGE).with_trace_id(id),
        None => Error::internal(INTERNAL_MESSAGE),
    }
}

fn log_failure(error: &Error) {
    let trace_id = error.trace_id().unwrap_or_default();
    match error.code() {
        ErrorCode::InternalError => {
            error!(trace_id, detail = error.message(), "request failed internally");
        }
        ErrorCode::ServiceUnavailable => {
            warn!(trace_id, detail = error.message(), "storage unavailable");
        }
        code => debug!(trace_id, ?code, detail = error.message(), "request rejected"),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        self.code().into()
    }

    fn error_response(&self) -> HttpResponse {
        log_failure(self);
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(client_view(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Self::internal(INTERNAL_MESSAGE)
    }
}
