//! CLI error types with miette diagnostics.
//!
//! Maps `lingo_api::Error` variants into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the API at {url}")]
    #[diagnostic(
        code(lingo::connection_failed),
        help(
            "Check your network connection and the API URL.\n\
             Override it with --api-url or the profile's api_url."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: lingo_api::Error,
    },

    #[error("TLS setup failed: {message}")]
    #[diagnostic(
        code(lingo::tls_error),
        help("Check the profile's ca_cert path, or use --insecure (-k) against a local proxy.")
    )]
    Tls { message: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(lingo::timeout),
        help("Increase the timeout with --timeout or LINGO_TIMEOUT.")
    )]
    Timeout {
        #[source]
        source: lingo_api::Error,
    },

    // ── Authentication ───────────────────────────────────────────────
    #[error("No API token configured for profile '{profile}'")]
    #[diagnostic(
        code(lingo::no_credentials),
        help(
            "Pass --token, set LINGO_TOKEN, or configure a profile:\n\
             lingo config init --token-env TX_TOKEN"
        )
    )]
    NoCredentials { profile: String },

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(lingo::auth_failed),
        help("The token was rejected. Generate a new one in your Transifex user settings.")
    )]
    AuthFailed { message: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("Not found: {message}")]
    #[diagnostic(code(lingo::not_found), help("Check the id; list commands print valid ids."))]
    NotFound { message: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error (HTTP {status}): {message}")]
    #[diagnostic(code(lingo::api_error))]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Unexpected response from the API: {message}")]
    #[diagnostic(
        code(lingo::decode),
        help("Re-run with -vv to log the request URL.")
    )]
    Decode { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(lingo::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(lingo::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: lingo config init --name {name}"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(lingo::config))]
    Config(Box<figment::Error>),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render output: {message}")]
    #[diagnostic(code(lingo::output))]
    Output { message: String },
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl From<lingo_api::Error> for CliError {
    fn from(err: lingo_api::Error) -> Self {
        use lingo_api::Error as ApiError;

        if err.is_validation() {
            let field = match &err {
                ApiError::MissingParameter { field }
                | ApiError::InvalidEnumValue { field, .. }
                | ApiError::InvalidRange { field, .. } => (*field).to_owned(),
                _ => "input".to_owned(),
            };
            return Self::Validation {
                field,
                reason: err.to_string(),
            };
        }
        if err.is_unauthorized() {
            return Self::AuthFailed {
                message: api_message(&err),
            };
        }
        if err.is_not_found() {
            return Self::NotFound {
                message: api_message(&err),
            };
        }

        match err {
            ApiError::Transport(e) => {
                if e.is_timeout() {
                    return Self::Timeout {
                        source: ApiError::Transport(e),
                    };
                }
                let url = e.url().map(ToString::to_string).unwrap_or_default();
                Self::ConnectionFailed {
                    url,
                    source: ApiError::Transport(e),
                }
            }
            ApiError::InvalidUrl(e) => Self::Validation {
                field: "api_url".into(),
                reason: format!("invalid URL: {e}"),
            },
            ApiError::InvalidToken { message } => Self::Validation {
                field: "token".into(),
                reason: message,
            },
            ApiError::Tls(message) => Self::Tls { message },
            ApiError::Api {
                status,
                message,
                errors,
            } => Self::Api {
                status,
                code: errors.iter().find_map(|e| e.code.clone()),
                message,
            },
            other => Self::Decode {
                message: other.to_string(),
            },
        }
    }
}

fn api_message(err: &lingo_api::Error) -> String {
    match err {
        lingo_api::Error::Api { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::Tls { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NoCredentials { .. } | Self::AuthFailed { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::ProfileNotFound { .. } => exit_code::USAGE,
            Self::Api { .. }
            | Self::Decode { .. }
            | Self::Config(_)
            | Self::Io(_)
            | Self::Output { .. } => exit_code::GENERAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_usage() {
        let err: CliError = lingo_api::Error::InvalidRange {
            field: "limit",
            value: "149".into(),
            min: 150,
            max: 1000,
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::USAGE);
        assert!(matches!(err, CliError::Validation { ref field, .. } if field == "limit"));
    }

    #[test]
    fn api_statuses_map_to_exit_codes() {
        let api = |status| lingo_api::Error::Api {
            status,
            message: "nope".into(),
            errors: Vec::new(),
        };
        assert_eq!(CliError::from(api(401)).exit_code(), exit_code::AUTH);
        assert_eq!(CliError::from(api(404)).exit_code(), exit_code::NOT_FOUND);
        assert_eq!(CliError::from(api(500)).exit_code(), exit_code::GENERAL);
    }

    #[test]
    fn decode_errors_are_general() {
        let err: CliError = lingo_api::Error::Deserialization {
            message: "expected value".into(),
            body: String::new(),
        }
        .into();
        assert!(matches!(err, CliError::Decode { .. }));
        assert_eq!(err.exit_code(), exit_code::GENERAL);
    }
}
