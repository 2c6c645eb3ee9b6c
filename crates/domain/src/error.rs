use serde::Serialize;
use thiserror::Error;

/// Broad response class of a domain error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    BadRequest,
    NotFound,
    Internal,
}

impl ErrorClass {
    /// Code used when no more specific error code applies
    pub fn default_code(&self) -> &'static str {
        match self {
            ErrorClass::BadRequest => "BAD_REQUEST",
            ErrorClass::NotFound => "NOT_FOUND",
            ErrorClass::Internal => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Fixed phrase shown in place of a message that is not safe to expose
    pub fn generic_message(&self) -> &'static str {
        match self {
            ErrorClass::BadRequest => "Bad request",
            ErrorClass::NotFound => "Not found",
            ErrorClass::Internal => INTERNAL_MESSAGE,
        }
    }
}

pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Validation detail for a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub error: String,
}

/// Application-level error with a stable code and a user-facing message.
///
/// Values are immutable once built. `safe` tells the response boundary
/// whether `message` may be shown to an end user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DomainError {
    class: ErrorClass,
    code: String,
    message: String,
    safe: bool,
    field_errors: Vec<FieldError>,
}

impl DomainError {
    /// Client-fixable failure
    pub fn bad_request(
        message: impl Into<String>,
        safe: bool,
        code: Option<String>,
        field_errors: Vec<FieldError>,
    ) -> Self {
        Self::build(ErrorClass::BadRequest, message, safe, code, field_errors)
    }

    /// No matching resource
    pub fn not_found(message: impl Into<String>, safe: bool, code: Option<String>) -> Self {
        Self::build(ErrorClass::NotFound, message, safe, code, Vec::new())
    }

    /// Unclassified failure; carries no detail about its cause
    pub fn internal() -> Self {
        Self::build(ErrorClass::Internal, INTERNAL_MESSAGE, false, None, Vec::new())
    }

    fn build(
        class: ErrorClass,
        message: impl Into<String>,
        safe: bool,
        code: Option<String>,
        field_errors: Vec<FieldError>,
    ) -> Self {
        DomainError {
            class,
            code: code.unwrap_or_else(|| class.default_code().to_string()),
            message: message.into(),
            safe,
            field_errors,
        }
    }

    pub fn class(&self) -> ErrorClass {
        self.class
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_safe(&self) -> bool {
        self.safe
    }

    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }
}
