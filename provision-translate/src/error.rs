// SPDX-License-Identifier: GPL-3.0-only

use thiserror::Error;

/// Errors raised while reading or writing provisioning documents
///
/// Translation itself cannot fail; these cover the document layer around it.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document root is not a JSON object")]
    NotAnObject,

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Unsupported version: {0}")]
    UnsupportedVersion(String),
}

/// Result type alias for document operations
pub type Result<T> = std::result::Result<T, TranslateError>;
