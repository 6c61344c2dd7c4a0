//! Error classification codes.
//!
//! Every [`Error`](crate::Error) maps onto one [`ErrorKind`] so callers can
//! branch on the class of failure without matching on messages.
//!
//! | Code  | Kind              | Meaning                                        |
//! |-------|-------------------|------------------------------------------------|
//! | E1001 | `InputValidation` | Missing or malformed identifier, no I/O done   |
//! | E1002 | `Unauthorized`    | Upstream rejected the API key (HTTP 401)       |
//! | E2001 | `RateLimited`     | HTTP 429 after the retry budget was spent      |
//! | E3003 | `Timeout`         | Live-attempt time budget exceeded              |
//! | E4002 | `Cancelled`       | Caller cancelled the call                      |
//! | E9999 | `Fail`            | Everything else (transport, status, decoding)  |
//!
//! ```rust
//! use opensea_client::error_code::ErrorKind;
//!
//! let kind = ErrorKind::from_http_status(429);
//! assert_eq!(kind.code(), "E2001");
//! assert!(kind.retryable());
//! ```

use std::fmt;

/// Classification of a client error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required identifier was missing or invalid.
    InputValidation,
    /// Invalid or expired API key.
    Unauthorized,
    /// Upstream kept answering 429.
    RateLimited,
    /// The live-attempt budget ran out.
    Timeout,
    /// The call was cancelled by the caller.
    Cancelled,
    /// Catch-all failure.
    Fail,
}

impl ErrorKind {
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InputValidation => "E1001",
            Self::Unauthorized => "E1002",
            Self::RateLimited => "E2001",
            Self::Timeout => "E3003",
            Self::Cancelled => "E4002",
            Self::Fail => "E9999",
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InputValidation => "input_validation",
            Self::Unauthorized => "unauthorized",
            Self::RateLimited => "rate_limited",
            Self::Timeout => "timeout",
            Self::Cancelled => "cancelled",
            Self::Fail => "fail",
        }
    }

    /// Whether the same call may succeed if issued again later.
    pub fn retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Timeout)
    }

    /// Classify a non-success HTTP status.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            408 => Self::Timeout,
            429 => Self::RateLimited,
            _ => Self::Fail,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}
