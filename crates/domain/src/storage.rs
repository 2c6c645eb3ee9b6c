use sqlx::error::DatabaseError;
use sqlx::postgres::{PgDatabaseError, PgSeverity};
use thiserror::Error;

use crate::DomainError;

/// Semantic class of a storage constraint failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageErrorCode {
    ForeignKeyViolation,
    UniqueViolation,
    NotNullViolation,
    CheckViolation,
    Other,
}

impl StorageErrorCode {
    /// Map a Postgres SQLSTATE onto a constraint class. Unknown codes are `Other`.
    pub fn from_sqlstate(raw: &str) -> Self {
        match raw {
            "23503" => StorageErrorCode::ForeignKeyViolation,
            "23505" => StorageErrorCode::UniqueViolation,
            "23502" => StorageErrorCode::NotNullViolation,
            "23514" => StorageErrorCode::CheckViolation,
            _ => StorageErrorCode::Other,
        }
    }

    pub fn is_constraint(&self) -> bool {
        !matches!(self, StorageErrorCode::Other)
    }
}

/// Fields reported by the driver for a failed statement.
///
/// String fields the driver did not report are left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageError {
    pub code: StorageErrorCode,
    pub severity: String,
    pub raw_code: String,
    pub message: String,
    pub schema_name: String,
    pub table_name: String,
    pub column_name: String,
    pub data_type_name: String,
    pub constraint_name: String,
}

impl StorageError {
    /// Build from a raw driver code; all other fields start empty
    pub fn new(raw_code: impl Into<String>) -> Self {
        let raw_code = raw_code.into();
        StorageError {
            code: StorageErrorCode::from_sqlstate(&raw_code),
            severity: String::new(),
            raw_code,
            message: String::new(),
            schema_name: String::new(),
            table_name: String::new(),
            column_name: String::new(),
            data_type_name: String::new(),
            constraint_name: String::new(),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table_name = table.into();
        self
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column_name = column.into();
        self
    }

    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint_name = constraint.into();
        self
    }

    /// Extract everything the driver reported, without transformation
    pub fn from_database_error(err: &dyn DatabaseError) -> Self {
        if let Some(pg) = err.try_downcast_ref::<PgDatabaseError>() {
            return StorageError {
                code: StorageErrorCode::from_sqlstate(pg.code()),
                severity: severity_label(pg.severity()).to_string(),
                raw_code: pg.code().to_string(),
                message: pg.message().to_string(),
                schema_name: pg.schema().unwrap_or_default().to_string(),
                table_name: pg.table().unwrap_or_default().to_string(),
                column_name: pg.column().unwrap_or_default().to_string(),
                data_type_name: pg.data_type().unwrap_or_default().to_string(),
                constraint_name: pg.constraint().unwrap_or_default().to_string(),
            };
        }

        // Other drivers only expose the portable subset
        let mut extracted = StorageError::new(err.code().unwrap_or_default());
        extracted.message = err.message().to_string();
        extracted.table_name = err.table().unwrap_or_default().to_string();
        extracted.constraint_name = err.constraint().unwrap_or_default().to_string();
        extracted
    }
}

fn severity_label(severity: PgSeverity) -> &'static str {
    match severity {
        PgSeverity::Panic => "PANIC",
        PgSeverity::Fatal => "FATAL",
        PgSeverity::Error => "ERROR",
        PgSeverity::Warning => "WARNING",
        PgSeverity::Notice => "NOTICE",
        PgSeverity::Debug => "DEBUG",
        PgSeverity::Info => "INFO",
        PgSeverity::Log => "LOG",
    }
}

/// Any failure that may reach the translator
#[derive(Error, Debug)]
pub enum DbFailure {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("no rows in result set (table:{table})")]
    NoRows { table: String },
}

/// What the classifier recognised in a failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified<'a> {
    /// Already a domain error
    Translated(&'a DomainError),
    /// Structured driver error, constraint or not
    Driver(StorageError),
    /// Lookup matched nothing; table is set when the caller attached one
    NoRows { table: Option<&'a str> },
    Unclassified,
}

/// Inspect a failure without consuming it
pub fn classify(failure: &DbFailure) -> Classified<'_> {
    match failure {
        DbFailure::Domain(err) => Classified::Translated(err),
        DbFailure::NoRows { table } => Classified::NoRows {
            table: Some(table.as_str()),
        },
        DbFailure::Sqlx(sqlx::Error::Database(db_err)) => {
            Classified::Driver(StorageError::from_database_error(&**db_err))
        }
        DbFailure::Sqlx(sqlx::Error::RowNotFound) => Classified::NoRows { table: None },
        DbFailure::Sqlx(_) => Classified::Unclassified,
    }
}

/// Attach table context to "no rows" results
pub trait StorageResultExt<T> {
    fn for_table(self, table: &str) -> Result<T, DbFailure>;
}

impl<T> StorageResultExt<T> for Result<T, sqlx::Error> {
    fn for_table(self, table: &str) -> Result<T, DbFailure> {
        self.map_err(|err| match err {
            sqlx::Error::RowNotFound => DbFailure::NoRows {
                table: table.to_string(),
            },
            other => DbFailure::Sqlx(other),
        })
    }
}
