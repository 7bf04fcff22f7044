// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum FastqcSummaryError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<FastqcSummaryError>,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error(transparent)]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, FastqcSummaryError>;

/// Errors raised while parsing the report text or reducing its sections.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required row is structurally absent from an otherwise parsed section.
    #[error("{metric} not found in '{section}' module: no '{key}' row")]
    MissingRow {
        metric: String,
        key: String,
        section: String,
    },

    /// A row expected to carry a numeric value could not be converted.
    #[error("Malformed row in '{section}' module: {row:?}: {reason}")]
    MalformedRow {
        section: String,
        row: String,
        reason: String,
    },

    #[error("Count overflowed while summing the '{section}' module")]
    CountOverflow { section: String },

    /// The report stream could not be read as UTF-8 text.
    #[error("Failed to decode report text at line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// The underlying stream failed, e.g. a truncated or corrupt archive entry.
    #[error("Failed to read report text at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Use case errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("'{section}' module not found in report")]
    SectionMissing { section: String },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("FastQC archive file '{}' could not be found.", path.display())]
    ArchiveNotFound { path: PathBuf },

    #[error("FastQC archive file '{}' is not a valid ZIP file.", path.display())]
    InvalidArchive { path: PathBuf, details: String },

    #[error("{file_name} not found in archive '{}'", archive.display())]
    ReportNotFound { archive: PathBuf, file_name: String },

    #[error("Multiple {file_name} files found in archive '{}': {candidates:?}", archive.display())]
    AmbiguousReport {
        archive: PathBuf,
        file_name: String,
        candidates: Vec<String>,
    },

    #[error("Failed to open '{entry}' in archive '{}': {details}", archive.display())]
    ArchiveEntry {
        archive: PathBuf,
        entry: String,
        details: String,
    },

    #[error("Failed to read file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for FastqcSummaryError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FastqcSummaryError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<FastqcSummaryError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| FastqcSummaryError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| FastqcSummaryError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
