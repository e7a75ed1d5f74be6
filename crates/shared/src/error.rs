//! Error types shared by every date operation.

use thiserror::Error;

/// Result type alias using `DateUtilError`.
pub type DateUtilResult<T> = Result<T, DateUtilError>;

/// Errors raised by the date operations.
///
/// Every error is raised before any computation starts, so a failed call
/// never leaves partial results behind.
#[derive(Debug, Error)]
pub enum DateUtilError {
    /// One or more required arguments were absent, null, empty or `false`.
    #[error("A required argument is missing: {}.", .params.join(", "))]
    MissingArgument {
        /// Names of the missing parameters, in declaration order.
        params: Vec<String>,
        /// Hint for the host environment not to notify anyone about this error.
        notify_off: bool,
    },

    /// An options record could not be read into the operation's options.
    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    /// A timestamp could not be parsed into an instant.
    #[error("Invalid instant: {0}")]
    InvalidInstant(#[from] chrono::ParseError),

    /// The result falls outside the representable range of instants.
    #[error("Out of range: {0}")]
    OutOfRange(String),
}

impl DateUtilError {
    /// Builds a `MissingArgument` error for the given parameter names.
    #[must_use]
    pub fn missing<I, S>(params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingArgument {
            params: params.into_iter().map(Into::into).collect(),
            notify_off: true,
        }
    }

    /// Returns the error code reported to the host environment.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingArgument { .. } => "MISSING_REQD_ARGUMENT",
            Self::InvalidOptions(_) => "INVALID_OPTIONS",
            Self::InvalidInstant(_) => "INVALID_INSTANT",
            Self::OutOfRange(_) => "OUT_OF_RANGE",
        }
    }

    /// Returns true if the host environment should not send a notification.
    #[must_use]
    pub const fn notify_off(&self) -> bool {
        match self {
            Self::MissingArgument { notify_off, .. } => *notify_off,
            Self::InvalidOptions(_) | Self::InvalidInstant(_) | Self::OutOfRange(_) => false,
        }
    }

    /// Returns the missing parameter names, or an empty slice for other errors.
    #[must_use]
    pub fn missing_params(&self) -> &[String] {
        match self {
            Self::MissingArgument { params, .. } => params,
            Self::InvalidOptions(_) | Self::InvalidInstant(_) | Self::OutOfRange(_) => &[],
        }
    }
}
