//! Crate-wide error type
//!
//! Every variant carries a human-readable detail. `code()` is stable and
//! shows up in CLI output and logs; HTTP mapping lives in `http_status()`.

use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum AppError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    FileOperation(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
}

/// Snake-case constructors accepting anything string-like
macro_rules! constructors {
    ($($name:ident => $variant:ident),+ $(,)?) => {
        impl AppError {
            $(
                pub fn $name<T: Into<String>>(msg: T) -> Self {
                    AppError::$variant(msg.into())
                }
            )+
        }
    };
}

constructors! {
    database_config => DatabaseConfig,
    database_connection => DatabaseConnection,
    database_operation => DatabaseOperation,
    file_operation => FileOperation,
    validation => Validation,
    not_found => NotFound,
    serialization => Serialization,
}

impl AppError {
    /// (code, type name, HTTP status)
    fn meta(&self) -> (&'static str, &'static str, StatusCode) {
        use AppError::*;
        match self {
            DatabaseConfig(_) => (
                "E001",
                "Database Configuration Error",
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            DatabaseConnection(_) => (
                "E002",
                "Database Connection Error",
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            DatabaseOperation(_) => (
                "E003",
                "Database Operation Error",
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            FileOperation(_) => (
                "E004",
                "File Operation Error",
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            Validation(_) => ("E005", "Validation Error", StatusCode::BAD_REQUEST),
            NotFound(_) => ("E006", "Resource Not Found", StatusCode::NOT_FOUND),
            Serialization(_) => (
                "E007",
                "Serialization Error",
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        }
    }

    pub fn code(&self) -> &'static str {
        self.meta().0
    }

    pub fn error_type(&self) -> &'static str {
        self.meta().1
    }

    pub fn http_status(&self) -> StatusCode {
        self.meta().2
    }

    pub fn message(&self) -> &str {
        use AppError::*;
        match self {
            DatabaseConfig(msg)
            | DatabaseConnection(msg)
            | DatabaseOperation(msg)
            | FileOperation(msg)
            | Validation(msg)
            | NotFound(msg)
            | Serialization(msg) => msg,
        }
    }

    /// Terminal output with code and type highlighted
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message()
        )
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_simple())
    }
}

impl std::error::Error for AppError {}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::database_operation(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::file_operation(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
