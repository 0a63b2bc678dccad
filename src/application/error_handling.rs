// src/application/error_handling.rs
//
// Maps internal errors to what the user sees and to a process exit code.
// Fetch failures are shown verbatim; storage failures get a short
// message with the underlying error as details.

use log::error;
use serde::Serialize;
use std::fmt;

use crate::error::AppError;

/// Error categories shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// The films listing could not be fetched
    Fetch,

    /// Favorites store failure
    Database,

    /// Data directory / file system failure
    FileSystem,

    /// Anything else
    Internal,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

impl ErrorReport {
    pub fn from_app_error(error: &AppError) -> Self {
        match error {
            AppError::Fetch(fetch_error) => Self {
                error_type: ErrorType::Fetch,
                message: fetch_error.message.clone(),
                details: None,
            },

            AppError::Database(db_error) => {
                error!("Database error: {:?}", db_error);
                Self {
                    error_type: ErrorType::Database,
                    message: "Favorites store operation failed".to_string(),
                    details: Some(db_error.to_string()),
                }
            }

            AppError::Pool(pool_error) => {
                error!("Connection pool error: {}", pool_error);
                Self {
                    error_type: ErrorType::Database,
                    message: "Favorites store unavailable".to_string(),
                    details: Some(pool_error.clone()),
                }
            }

            AppError::Io(io_error) => {
                error!("IO error: {:?}", io_error);
                Self {
                    error_type: ErrorType::FileSystem,
                    message: "File system operation failed".to_string(),
                    details: Some(io_error.to_string()),
                }
            }

            AppError::Serialization(serde_error) => {
                error!("Serialization error: {:?}", serde_error);
                Self {
                    error_type: ErrorType::Internal,
                    message: "Data serialization failed".to_string(),
                    details: None,
                }
            }

            AppError::Other(message) => Self {
                error_type: ErrorType::Internal,
                message: message.clone(),
                details: None,
            },
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self.error_type {
            ErrorType::Internal => 1,
            ErrorType::Fetch => 2,
            ErrorType::Database => 3,
            ErrorType::FileSystem => 4,
        }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}
