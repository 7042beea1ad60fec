//! Actix response mapping for [`Error`].
//!
//! Handlers return [`ApiResult`]; failures render as the JSON error body with
//! a status chosen from the error code. Internal failures are logged against
//! the request's trace id and reach the client only as [`Error::client_view`].

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

use crate::domain::{Error, ErrorCode};
use crate::middleware::TraceId;

pub use crate::domain::ApiResult;

impl From<ErrorCode> for StatusCode {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::InvalidRequest => Self::BAD_REQUEST,
            ErrorCode::NotFound => Self::NOT_FOUND,
            ErrorCode::Conflict => Self::CONFLICT,
            ErrorCode::InternalError => Self::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        self.code().into()
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::InternalError {
            let trace_id = TraceId::current().map(|id| id.to_string());
            error!(trace_id = ?trace_id, error = %self, "request failed");
        }
        HttpResponse::build(self.status_code()).json(self.client_view())
    }
}
