//! Common error types used across the workspace.
//!
//! Every failure the mock can produce is local to a single request. The
//! `Display` text of [`InimockError`] is what ends up in the `error` field of
//! the HTTP response body.

use std::num::ParseIntError;

/// Top-level error returned by request parsing and dispatch.
#[derive(Debug, thiserror::Error)]
pub enum InimockError {
    /// The `req` document could not be parsed into a method + params envelope.
    #[error("Invalid JSON request")]
    MalformedRequest(#[source] serde_json::Error),

    /// The method name is not one the mock implements.
    #[error("Unknown method")]
    UnknownMethod(String),

    /// The method is known but its parameters are missing or mistyped.
    #[error("Invalid parameters: {0}")]
    InvalidParams(#[from] ParamError),
}

/// Failure to extract a typed value from the `Params` map.
#[derive(Debug, thiserror::Error)]
pub enum ParamError {
    /// The key is absent.
    #[error("missing parameter `{name}`")]
    Missing {
        /// Wire name of the parameter.
        name: &'static str,
    },

    /// The key is present but its value is not a JSON string.
    #[error("parameter `{name}` must be a string")]
    NotAString {
        /// Wire name of the parameter.
        name: &'static str,
    },

    /// The string does not hold a base-10 integer.
    #[error("parameter `{name}` is not an integer: {value:?}")]
    NotAnInteger {
        /// Wire name of the parameter.
        name: &'static str,
        /// The offending raw value.
        value: String,
        #[source]
        source: ParseIntError,
    },
}
