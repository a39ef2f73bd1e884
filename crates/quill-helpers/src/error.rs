//! Error types and handling for quill-helpers operations.
//!
//! The helper library's failure policy is "degrade to a safe default"
//! wherever the host would otherwise crash mid-request: registry lookup
//! failures skip the offending taxonomy, an unreachable spam service
//! classifies content as clean. The variants below cover the cases that
//! still need to surface to the caller, primarily malformed inputs and
//! configuration problems.

use thiserror::Error;

/// The main error type for quill-helpers operations.
///
/// All fallible public functions in this crate return `Result<T, Error>`.
/// Errors maintain their source chain through `source()` where an underlying
/// error exists (network, deserialization).
#[derive(Error, Debug)]
pub enum Error {
    /// Network operation failed.
    ///
    /// Covers the HTTP round trip to the spam-detection service. The
    /// underlying `reqwest::Error` is preserved for detailed connection
    /// information. Note that the spam checker itself converts transport
    /// failures into a clean verdict; this variant surfaces only from
    /// client construction.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A host registry lookup failed.
    ///
    /// Raised by [`ContentRegistry`](crate::registry::ContentRegistry)
    /// implementations when a taxonomy or term query cannot be answered.
    /// The enumerators treat this as "no terms" and continue.
    #[error("Registry error: {0}")]
    Registry(String),

    /// A color string could not be parsed.
    ///
    /// Covers hex strings with a length other than 3 or 6 digits (after
    /// stripping any leading `#`) and strings containing non-hex characters.
    #[error("Invalid color: {0}")]
    Color(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl Error {
    /// Check if the error might be recoverable through retry logic.
    ///
    /// Network timeouts and connection failures are worth retrying; parse
    /// and configuration errors are permanent.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Get the error category as a string identifier.
    ///
    /// Useful for grouping errors in the host's logging or metrics.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Registry(_) => "registry",
            Self::Color(_) => "color",
            Self::Config(_) => "config",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
