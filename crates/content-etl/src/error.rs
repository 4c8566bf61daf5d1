//! Error type for the content-etl crate.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading inputs, classifying records or writing a
/// fixture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EtlError {
    /// An input or vocabulary file could not be read.
    #[error("failed to read '{path}': {message}")]
    Read {
        /// Offending path.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The scraped input is not a JSON array of records.
    #[error("invalid input JSON in '{path}': {message}")]
    Parse {
        /// Offending path.
        path: Utf8PathBuf,
        /// Parser message, including line and column.
        message: String,
    },

    /// A vocabulary table is malformed or incomplete.
    #[error("invalid vocabulary: {message}")]
    Vocabulary {
        /// What is wrong with the table.
        message: String,
    },

    /// The output path does not name a file.
    #[error("output path '{path}' must name a file")]
    OutputPath {
        /// Offending path.
        path: Utf8PathBuf,
    },

    /// Every input record was skipped, so nothing would be written.
    #[error("no usable records in '{path}'")]
    NoRecords {
        /// Input path.
        path: Utf8PathBuf,
    },

    /// Formatted records could not be serialised.
    #[error("failed to serialise records: {message}")]
    Serialize {
        /// Serializer message.
        message: String,
    },

    /// The fixture could not be written.
    #[error("failed to write '{path}': {message}")]
    Write {
        /// Offending path.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}

impl EtlError {
    pub(crate) fn vocabulary(message: impl Into<String>) -> Self {
        Self::Vocabulary {
            message: message.into(),
        }
    }
}
