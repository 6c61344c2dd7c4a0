use crate::error_code::ErrorKind;
use crate::transport::TransportError;
use std::time::Duration;
use thiserror::Error;

/// Longest body excerpt carried inside an error message.
const MAX_BODY_SNIPPET: usize = 512;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Argument or configuration key that caused the error (e.g., "asset_contract_address")
    pub field_path: Option<String>,
    /// Additional context about the error
    pub details: Option<String>,
    /// Source of the error (e.g., "retrieve_asset", "execute")
    pub source: Option<String>,
    /// Upstream endpoint the request was addressed to
    pub endpoint: Option<String>,
    /// HTTP status observed, when there was one
    pub status_code: Option<u16>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
            endpoint: None,
            status_code: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_status_code(mut self, status: u16) -> Self {
        self.status_code = Some(status);
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the marketplace client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("opensea: request timeout after {elapsed:?}{}", format_context(.context))]
    Timeout {
        elapsed: Duration,
        context: ErrorContext,
    },

    #[error("opensea: rate-limited by service after {retries} retries{}", format_context(.context))]
    RateLimited {
        retries: u32,
        context: ErrorContext,
    },

    #[error("opensea: unauthorized, invalid or expired API key{}", format_context(.context))]
    Unauthorized { context: ErrorContext },

    #[error("opensea: fail, status code {status}: {message}{}", format_context(.context))]
    Remote {
        status: u16,
        message: String,
        context: ErrorContext,
    },

    #[error("opensea: aborted because the call was cancelled{}", format_context(.context))]
    Cancelled { context: ErrorContext },

    #[error("opensea: failed to decode response body (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref endpoint) = ctx.endpoint {
        parts.push(format!("endpoint: {}", endpoint));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

/// Lossy, length-bounded rendering of a response body for error messages.
pub(crate) fn body_snippet(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.len() <= MAX_BODY_SNIPPET {
        return text.into_owned();
    }
    let mut end = MAX_BODY_SNIPPET;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Failure carrying an upstream status and a snippet of its body.
    pub(crate) fn remote(status: u16, body: &[u8], context: ErrorContext) -> Self {
        Error::Remote {
            status,
            message: body_snippet(body),
            context: context.with_status_code(status),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation { .. } | Error::Configuration { .. } => ErrorKind::InputValidation,
            Error::Timeout { .. } => ErrorKind::Timeout,
            Error::RateLimited { .. } => ErrorKind::RateLimited,
            Error::Unauthorized { .. } => ErrorKind::Unauthorized,
            Error::Cancelled { .. } => ErrorKind::Cancelled,
            Error::Remote { .. }
            | Error::Decode { .. }
            | Error::Transport(_)
            | Error::Serialization(_) => ErrorKind::Fail,
        }
    }

    /// HTTP status associated with this error, if any.
    ///
    /// Timeouts report 408 even though no such response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Timeout { .. } => Some(408),
            Error::RateLimited { .. } => Some(429),
            Error::Unauthorized { .. } => Some(401),
            Error::Remote { status, .. } | Error::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when upstream reported (or the cache remembers) that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Remote { status: 404, .. })
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. }
            | Error::Validation { context, .. }
            | Error::Timeout { context, .. }
            | Error::RateLimited { context, .. }
            | Error::Unauthorized { context }
            | Error::Remote { context, .. }
            | Error::Cancelled { context } => Some(context),
            _ => None,
        }
    }
}
