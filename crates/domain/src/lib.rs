pub mod error;
pub mod naming;
pub mod storage;
pub mod translate;

pub use error::{DomainError, ErrorClass, FieldError};
pub use naming::{entity_name, extract_field, generate_error_code, humanize};
pub use storage::{classify, Classified, DbFailure, StorageError, StorageErrorCode, StorageResultExt};
pub use translate::{format_message, translate, UserMessage};
