use crate::error::{DomainError, FieldError};
use crate::naming::{entity_name, extract_field, generate_error_code, humanize, strip_id_suffix};
use crate::storage::{classify, Classified, DbFailure, StorageError, StorageErrorCode};

/// Message used for storage failures outside the constraint taxonomy
pub const GENERIC_MESSAGE: &str = "An error occurred while processing your request";

/// User-facing rendering of a storage error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    pub text: String,
    pub safe: bool,
    pub field_errors: Vec<FieldError>,
}

/// Describe a storage error in user-facing prose
pub fn format_message(err: &StorageError) -> UserMessage {
    let entity = entity_name(&err.table_name, &err.column_name);

    let (text, safe) = match err.code {
        StorageErrorCode::ForeignKeyViolation => {
            (format!("The referenced {entity} does not exist"), false)
        }
        StorageErrorCode::UniqueViolation => {
            let mut text = format!("A {entity} with this identifier already exists");
            let field = extract_field(&err.constraint_name);
            if !field.is_empty() {
                text = text.replace("identifier", &humanize(&field));
            }
            (text, true)
        }
        StorageErrorCode::NotNullViolation => {
            let field = match strip_id_suffix(&err.column_name) {
                Some(entity) => humanize(&entity),
                None => humanize(&err.column_name),
            };
            let field = if field.is_empty() { "field".to_string() } else { field };
            (format!("The {field} is required"), true)
        }
        StorageErrorCode::CheckViolation => {
            let field = humanize(&err.column_name);
            if field.is_empty() {
                (
                    "One or more values do not meet required conditions".to_string(),
                    true,
                )
            } else {
                (
                    format!("The {field} value does not meet required conditions"),
                    true,
                )
            }
        }
        StorageErrorCode::Other => (GENERIC_MESSAGE.to_string(), false),
    };

    let field_errors = if err.code == StorageErrorCode::NotNullViolation {
        vec![FieldError {
            field: err.column_name.to_lowercase(),
            error: "is required".to_string(),
        }]
    } else {
        Vec::new()
    };

    UserMessage {
        text,
        safe,
        field_errors,
    }
}

/// Convert any storage-layer failure into a [`DomainError`].
///
/// Already-translated errors pass through untouched. Never fails and has no
/// side effects; callers log the original failure themselves.
pub fn translate(err: impl Into<DbFailure>) -> DomainError {
    let failure = err.into();

    match classify(&failure) {
        Classified::Translated(domain) => domain.clone(),
        Classified::Driver(storage) if storage.code.is_constraint() => {
            let code = generate_error_code(&storage.table_name, storage.code);
            let message = format_message(&storage);
            DomainError::bad_request(message.text, message.safe, Some(code), message.field_errors)
        }
        Classified::NoRows { table: Some(table) } if !table.is_empty() => {
            DomainError::not_found(format!("{} not found", entity_name(table, "")), true, None)
        }
        Classified::NoRows { .. } => DomainError::not_found("Resource not found", true, None),
        Classified::Driver(_) | Classified::Unclassified => DomainError::internal(),
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        translate(err)
    }
}

impl From<DbFailure> for DomainError {
    fn from(failure: DbFailure) -> Self {
        translate(failure)
    }
}
