//! Error types.

use thiserror::Error;
use ygg_api::YggError;

/// Crate result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The signature service refused or failed to sign a value.
    #[error("unable to sign property {name}: {source}")]
    Signing {
        /// Property whose value was being signed.
        name: String,
        /// Underlying failure.
        source: YggError,
    },

    /// A signed property did not verify, or carried no signature.
    #[error("property {name} failed verification: {reason}")]
    Verification {
        /// Property name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A signing or verification key could not be created, parsed, or encoded.
    #[error("key error: {0}")]
    Key(String),

    /// An identifier was not a UUID in dashed or unsigned form.
    #[error("invalid identifier: {0:?}")]
    InvalidId(String),

    /// A texture property value was not base64 of UTF-8 JSON.
    #[error("invalid texture payload: {0}")]
    InvalidPayload(String),

    /// Base64 decoding error.
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),

    /// JSON error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Error reported by a collaborator.
    #[error(transparent)]
    Service(#[from] YggError),
}

impl From<Error> for YggError {
    fn from(err: Error) -> Self {
        match err {
            Error::Signing { source, .. } | Error::Service(source) => source,
            Error::Verification { .. } => YggError::Verification(err.to_string()),
            Error::Key(msg) => YggError::Key(msg),
            Error::InvalidId(_) => YggError::Validation(err.to_string()),
            Error::InvalidPayload(_) | Error::Base64(_) | Error::Json(_) => {
                YggError::Encoding(err.to_string())
            }
        }
    }
}
