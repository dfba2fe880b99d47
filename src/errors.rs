//! Unified error type for the billing system.

use thiserror::Error;

/// Every failure the core and the register can report.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or is invalid
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Terminal or file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// User input that cannot be accepted (empty name, bad price, ...)
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Message shown to the clerk
        message: String,
    },

    /// A catalog item with this name already exists
    #[error("'{name}' already exists")]
    DuplicateItem {
        /// The rejected name
        name: String,
    },

    /// One or more purchase lines could not be written
    #[error("Failed to record purchase for {}: {message}", .failed_items.join(", "))]
    PersistenceFailure {
        /// Items whose record was not written
        failed_items: Vec<String>,
        /// First underlying error
        message: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand for an [`Error::InvalidInput`].
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
