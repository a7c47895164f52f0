//! Error types for the linkdeck domain.
//!
//! Uses `thiserror` for ergonomic error definitions. Each bounded context has
//! its own error type. Note that a *rejected link definition* is not an
//! error: definitions a viewer may not see are silently dropped by the
//! pipeline. Errors here are for misbehaving collaborators and broken
//! configuration, which must stay visible to the caller.

use thiserror::Error;

/// The top-level error type for all linkdeck operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Source / alterer errors ---
    #[error("Link source error: {0}")]
    Source(#[from] SourceError),

    // --- Routing errors ---
    #[error("Route error: {0}")]
    Route(#[from] RouteError),

    // --- URL errors ---
    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Failures raised by link sources and alterers.
///
/// These propagate uncaught through the pipeline: a misbehaving contributor
/// must be visible to the surrounding system, which decides how to handle it.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    #[error("Source '{name}' failed: {reason}")]
    Failed { name: String, reason: String },

    #[error("Alterer '{alterer}' failed: {reason}")]
    AlterFailed { alterer: String, reason: String },
}

/// Failures resolving a named route to a path.
#[derive(Debug, Clone, Error)]
pub enum RouteError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Route '{route}' is missing parameter '{parameter}'")]
    MissingParameter { route: String, parameter: String },

    #[error("Route '{route}' has an invalid pattern: {reason}")]
    InvalidPattern { route: String, reason: String },
}

/// Failures parsing a URI reference.
#[derive(Debug, Clone, Error)]
pub enum UrlError {
    #[error("Invalid URI reference '{uri}': {reason}")]
    Invalid { uri: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_displays_correctly() {
        let err = Error::Source(SourceError::Failed {
            name: "billing".into(),
            reason: "ledger unavailable".into(),
        });
        assert!(err.to_string().contains("billing"));
        assert!(err.to_string().contains("ledger unavailable"));
    }

    #[test]
    fn route_error_displays_correctly() {
        let err = Error::Route(RouteError::MissingParameter {
            route: "entity.member.edit_form".into(),
            parameter: "member".into(),
        });
        assert!(err.to_string().contains("entity.member.edit_form"));
        assert!(err.to_string().contains("member"));
    }
}
