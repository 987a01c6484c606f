//! Error types for the request authorizer.
//!
//! # Security Note
//! Request errors never escape [`crate::Authorizer`]: they are folded into a
//! Deny decision whose message is the error's `Display` text. Keep those
//! messages free of token material. Configuration errors only surface at
//! process start.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building requests or loading configuration.
#[derive(Debug, Error)]
pub enum AuthzError {
    /// The inbound event did not have the expected structure.
    ///
    /// For example `headers` was not an object, or a header value was not a string.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// A configuration file could not be read.
    #[error("Failed to read configuration file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file was not valid YAML for [`crate::config::AuthorizerConfig`].
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// The configuration parsed but cannot produce valid decisions.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A specialized Result type for authorizer operations.
pub type Result<T> = std::result::Result<T, AuthzError>;
