//! Turns domain errors into HTTP responses.
//!
//! Storage detail never crosses this boundary: internal errors are always
//! redacted, and in strict mode any message not marked safe is replaced by a
//! fixed phrase for its class.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domain::{translate, DbFailure, DomainError, ErrorClass, FieldError};
use serde::Serialize;
use tracing::{debug, error};

use crate::config::ApiConfig;

/// JSON body of an error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status: u16,
    pub error_code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldError>,
}

/// A domain error ready to be written as a response
#[derive(Debug, Clone)]
pub struct ApiError {
    error: DomainError,
    strict: bool,
}

pub fn status_for(class: ErrorClass) -> StatusCode {
    match class {
        ErrorClass::BadRequest => StatusCode::BAD_REQUEST,
        ErrorClass::NotFound => StatusCode::NOT_FOUND,
        ErrorClass::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ApiError {
    pub fn new(error: DomainError, config: &ApiConfig) -> Self {
        ApiError {
            error,
            strict: config.is_strict(),
        }
    }

    /// Log the original failure, then translate it
    pub fn from_failure(failure: impl Into<DbFailure>, config: &ApiConfig) -> Self {
        let failure = failure.into();
        let detail = failure.to_string();
        let translated = translate(failure);

        if translated.class() == ErrorClass::Internal {
            error!(error = %detail, "unhandled storage failure");
        } else {
            debug!(
                error = %detail,
                code = translated.code(),
                "storage failure translated"
            );
        }

        Self::new(translated, config)
    }

    pub fn domain_error(&self) -> &DomainError {
        &self.error
    }

    pub fn status(&self) -> StatusCode {
        status_for(self.error.class())
    }

    /// Body as it will be sent, after redaction
    pub fn body(&self) -> ErrorBody {
        let class = self.error.class();
        let redact =
            class == ErrorClass::Internal || (self.strict && !self.error.is_safe());

        let (message, field_errors) = if redact {
            (class.generic_message().to_string(), Vec::new())
        } else {
            (
                self.error.message().to_string(),
                self.error.field_errors().to_vec(),
            )
        };

        ErrorBody {
            status: self.status().as_u16(),
            error_code: self.error.code().to_string(),
            message,
            field_errors,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
