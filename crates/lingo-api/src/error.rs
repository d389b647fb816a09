use thiserror::Error;

use crate::jsonapi::ApiErrorObject;

/// Top-level error type for the `lingo-api` crate.
///
/// Every variant belongs to exactly one [`ErrorKind`]: parameter validation
/// (raised before any I/O), transport, or response decoding. The client
/// never retries; the caller decides what to do with a failed call.
#[derive(Debug, Error)]
pub enum Error {
    // ── Validation ──────────────────────────────────────────────────
    /// A mandatory filter or path identifier was left empty.
    #[error("Missing mandatory parameter '{field}'")]
    MissingParameter { field: &'static str },

    /// A value is not in the allow-list for its field.
    #[error("Invalid value for '{field}': {value:?}")]
    InvalidEnumValue { field: &'static str, value: String },

    /// A numeric value is not an integer inside the accepted range.
    #[error("Value of '{field}' must be an integer in [{min}..{max}], got {value:?}")]
    InvalidRange {
        field: &'static str,
        value: String,
        min: u32,
        max: u32,
    },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The bearer token cannot be sent as an HTTP header value.
    #[error("Invalid API token: {message}")]
    InvalidToken { message: String },

    /// TLS setup or HTTP client construction failed.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// The service answered with a JSON:API error document.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        status: u16,
        message: String,
        errors: Vec<ApiErrorObject>,
    },
}

/// Coarse classification of [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Parameter object rejected before any request was issued.
    Validation,
    /// Request construction or network execution failed.
    Transport,
    /// The response body did not match the expected envelope.
    Decode,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingParameter { .. } | Self::InvalidEnumValue { .. } | Self::InvalidRange { .. } => {
                ErrorKind::Validation
            }
            Self::Transport(_) | Self::InvalidUrl(_) | Self::InvalidToken { .. } | Self::Tls(_) => {
                ErrorKind::Transport
            }
            Self::Deserialization { .. } | Self::Api { .. } => ErrorKind::Decode,
        }
    }

    /// Returns `true` if the parameter object was rejected locally.
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Returns `true` if the service reported the entity as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Returns `true` if the service rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401 | 403, .. })
    }

    /// Extract the first API error code, if available.
    pub fn api_error_code(&self) -> Option<&str> {
        match self {
            Self::Api { errors, .. } => errors.iter().find_map(|e| e.code.as_deref()),
            _ => None,
        }
    }
}
