//! Errors surfaced at the library boundary
//!
//! Only whole-document failures are errors. Questions that fail validation
//! or name answers with no matching option are absorbed by the parser.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("cannot read {}: {reason}", path.display())]
    DocumentUnavailable { path: PathBuf, reason: String },

    #[error("invalid question records: {0}")]
    InvalidRecords(#[from] serde_json::Error),

    #[error("question {id} has an invalid base64 image: {source}")]
    InvalidImage {
        id: u32,
        #[source]
        source: base64::DecodeError,
    },
}

impl BankError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        BankError::DocumentUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
