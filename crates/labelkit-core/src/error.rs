//! Error handling for LabelKit
//!
//! Editing operations on a template never fail; errors only surface at the
//! edges of the system:
//! - Template library policy (built-in templates, unknown ids)
//! - Barcode and QR symbol encoding
//! - Template persistence
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Template library error type
///
/// Raised when a library operation violates the template lifecycle rules.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    /// No template with the given id exists
    #[error("Template not found: {id}")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Built-in templates may only be cloned
    #[error("Template '{name}' is built in and cannot be {action}")]
    BuiltIn {
        /// The name of the protected template.
        name: String,
        /// The refused action ("deleted", "renamed").
        action: &'static str,
    },

    /// Physical dimensions must be positive and finite
    #[error("Invalid label size {width_mm}mm x {height_mm}mm")]
    InvalidSize {
        /// Requested width in millimeters.
        width_mm: f64,
        /// Requested height in millimeters.
        height_mm: f64,
    },
}

/// Symbol encoding error type
///
/// The renderer converts these into a placeholder visual; callers of the
/// encoder API see them directly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SymbolError {
    /// Nothing to encode
    #[error("No data to encode")]
    Empty,

    /// The payload contains characters the symbology cannot carry
    #[error("Cannot encode '{value}' as {symbology}: {reason}")]
    Unencodable {
        /// The symbology name ("Code 128", "QR").
        symbology: &'static str,
        /// The rejected payload.
        value: String,
        /// Encoder-specific reason.
        reason: String,
    },
}

/// Template store error type
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File involved.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The stored document is not valid JSON for the expected type
    #[error("Malformed template data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Unsupported file format version
    #[error("Unsupported file version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the file.
        found: String,
        /// Version this build writes.
        expected: String,
    },
}

/// Main error type for LabelKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Template library error
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Symbol encoding error
    #[error(transparent)]
    Symbol(#[from] SymbolError),

    /// Persistence error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error came from a protected built-in template
    pub fn is_built_in_violation(&self) -> bool {
        matches!(self, Error::Template(TemplateError::BuiltIn { .. }))
    }

    /// Check if this is a persistence error
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::Store(_) | Error::Io(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
