//! Error types for parley.
//!
//! Every failure a chat turn can hit is one of three kinds: the credential was
//! missing or rejected ([`Error::is_authentication`]), the provider or the
//! network failed ([`Error::is_upstream`]), or the submission itself was
//! unusable ([`Error::is_validation`]).  A handful of local variants cover I/O
//! and URL handling.

use std::error;
use std::fmt;
use std::io;
use std::sync::Arc;

/// The main error type for parley.
#[derive(Clone, Debug)]
pub enum Error {
    /// A generic API error occurred.
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Error type string from the API.
        error_type: Option<String>,
        /// Human-readable error message.
        message: String,
        /// Request ID for debugging and support.
        request_id: Option<String>,
    },

    /// The credential is missing or was rejected by the provider.
    Authentication {
        /// Human-readable error message.
        message: String,
    },

    /// Authorization/Permission error.
    Permission {
        /// Human-readable error message.
        message: String,
    },

    /// Resource not found (usually a wrong endpoint or model name).
    NotFound {
        /// Human-readable error message.
        message: String,
    },

    /// Rate limit exceeded.
    RateLimit {
        /// Human-readable error message.
        message: String,
        /// Time to wait before retrying, in seconds.
        retry_after: Option<u64>,
    },

    /// Bad request due to invalid parameters.
    BadRequest {
        /// Human-readable error message.
        message: String,
        /// Parameter that caused the error.
        param: Option<String>,
    },

    /// The request did not finish within the configured timeout.
    Timeout {
        /// Human-readable error message.
        message: String,
        /// Duration of the timeout in seconds.
        duration: Option<f64>,
    },

    /// Request was cancelled by the user.
    Abort {
        /// Human-readable error message.
        message: String,
    },

    /// Connection error.
    Connection {
        /// Human-readable error message.
        message: String,
        /// Underlying cause.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// Server returned a 500 internal error.
    InternalServer {
        /// Human-readable error message.
        message: String,
        /// Request ID for debugging and support.
        request_id: Option<String>,
    },

    /// Server is overloaded or unavailable.
    ServiceUnavailable {
        /// Human-readable error message.
        message: String,
        /// Time to wait before retrying, in seconds.
        retry_after: Option<u64>,
    },

    /// The provider answered successfully but without any completion text.
    EmptyResponse {
        /// Human-readable error message.
        message: String,
        /// Request ID for debugging and support.
        request_id: Option<String>,
    },

    /// Error during JSON serialization or deserialization.
    Serialization {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// I/O error.
    Io {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Arc<io::Error>,
    },

    /// HTTP client error.
    HttpClient {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// The submission or a session operation was invalid.
    Validation {
        /// Human-readable error message.
        message: String,
        /// Parameter that failed validation.
        param: Option<String>,
    },

    /// A URL parsing or manipulation error.
    Url {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<url::ParseError>,
    },
}

impl Error {
    /// Creates a new API error.
    pub fn api(
        status_code: u16,
        error_type: Option<String>,
        message: String,
        request_id: Option<String>,
    ) -> Self {
        Error::Api {
            status_code,
            error_type,
            message,
            request_id,
        }
    }

    /// Creates a new authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Error::Authentication {
            message: message.into(),
        }
    }

    /// Creates a new permission error.
    pub fn permission(message: impl Into<String>) -> Self {
        Error::Permission {
            message: message.into(),
        }
    }

    /// Creates a new not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Error::NotFound {
            message: message.into(),
        }
    }

    /// Creates a new rate limit error.
    pub fn rate_limit(message: impl Into<String>, retry_after: Option<u64>) -> Self {
        Error::RateLimit {
            message: message.into(),
            retry_after,
        }
    }

    /// Creates a new bad request error.
    pub fn bad_request(message: impl Into<String>, param: Option<String>) -> Self {
        Error::BadRequest {
            message: message.into(),
            param,
        }
    }

    /// Creates a new timeout error.
    pub fn timeout(message: impl Into<String>, duration: Option<f64>) -> Self {
        Error::Timeout {
            message: message.into(),
            duration,
        }
    }

    /// Creates a new abort error.
    pub fn abort(message: impl Into<String>) -> Self {
        Error::Abort {
            message: message.into(),
        }
    }

    /// Creates a new connection error.
    pub fn connection(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Connection {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new internal server error.
    pub fn internal_server(message: impl Into<String>, request_id: Option<String>) -> Self {
        Error::InternalServer {
            message: message.into(),
            request_id,
        }
    }

    /// Creates a new service unavailable error.
    pub fn service_unavailable(message: impl Into<String>, retry_after: Option<u64>) -> Self {
        Error::ServiceUnavailable {
            message: message.into(),
            retry_after,
        }
    }

    /// Creates a new empty response error.
    pub fn empty_response(message: impl Into<String>, request_id: Option<String>) -> Self {
        Error::EmptyResponse {
            message: message.into(),
            request_id,
        }
    }

    /// Creates a new serialization error.
    pub fn serialization(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Serialization {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new I/O error.
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Error::Io {
            message: message.into(),
            source: Arc::new(source),
        }
    }

    /// Creates a new HTTP client error.
    pub fn http_client(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::HttpClient {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new validation error.
    pub fn validation(message: impl Into<String>, param: Option<String>) -> Self {
        Error::Validation {
            message: message.into(),
            param,
        }
    }

    /// Creates a new URL error.
    pub fn url(message: impl Into<String>, source: Option<url::ParseError>) -> Self {
        Error::Url {
            message: message.into(),
            source,
        }
    }

    /// Returns true if the credential is missing or was refused.
    ///
    /// The caller should ask for a new credential; the turn must not be
    /// recorded.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Error::Authentication { .. } | Error::Permission { .. })
    }

    /// Returns true if the provider or the transport failed.
    ///
    /// The user turn that triggered the failure stays in the transcript so it
    /// can be retried.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Error::Api { .. }
                | Error::NotFound { .. }
                | Error::RateLimit { .. }
                | Error::BadRequest { .. }
                | Error::Timeout { .. }
                | Error::Abort { .. }
                | Error::Connection { .. }
                | Error::InternalServer { .. }
                | Error::ServiceUnavailable { .. }
                | Error::EmptyResponse { .. }
                | Error::Serialization { .. }
                | Error::HttpClient { .. }
        )
    }

    /// Returns true if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Returns true if this error is related to rate limiting.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Error::RateLimit { .. })
    }

    /// Returns true if this error is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Returns true if this error is an abort.
    pub fn is_abort(&self) -> bool {
        matches!(self, Error::Abort { .. })
    }

    /// Returns true if this error is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            Error::InternalServer { .. } | Error::ServiceUnavailable { .. }
        )
    }

    /// Returns the request ID associated with this error, if any.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Error::Api { request_id, .. } => request_id.as_deref(),
            Error::InternalServer { request_id, .. } => request_id.as_deref(),
            Error::EmptyResponse { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    /// Returns the status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Api {
                message,
                error_type,
                request_id,
                ..
            } => {
                if let Some(error_type) = error_type {
                    if let Some(request_id) = request_id {
                        write!(f, "{error_type}: {message} (Request ID: {request_id})")
                    } else {
                        write!(f, "{error_type}: {message}")
                    }
                } else if let Some(request_id) = request_id {
                    write!(f, "API error: {message} (Request ID: {request_id})")
                } else {
                    write!(f, "API error: {message}")
                }
            }
            Error::Authentication { message } => {
                write!(f, "Authentication error: {message}")
            }
            Error::Permission { message } => {
                write!(f, "Permission error: {message}")
            }
            Error::NotFound { message } => {
                write!(f, "Resource not found: {message}")
            }
            Error::RateLimit {
                message,
                retry_after,
            } => {
                if let Some(retry_after) = retry_after {
                    write!(
                        f,
                        "Rate limit exceeded: {message} (retry after {retry_after} seconds)"
                    )
                } else {
                    write!(f, "Rate limit exceeded: {message}")
                }
            }
            Error::BadRequest { message, param } => {
                if let Some(param) = param {
                    write!(f, "Bad request: {message} (parameter: {param})")
                } else {
                    write!(f, "Bad request: {message}")
                }
            }
            Error::Timeout { message, duration } => {
                if let Some(duration) = duration {
                    write!(f, "Timeout error: {message} ({duration} seconds)")
                } else {
                    write!(f, "Timeout error: {message}")
                }
            }
            Error::Abort { message } => {
                write!(f, "Request aborted: {message}")
            }
            Error::Connection { message, .. } => {
                write!(f, "Connection error: {message}")
            }
            Error::InternalServer {
                message,
                request_id,
            } => {
                if let Some(request_id) = request_id {
                    write!(
                        f,
                        "Internal server error: {message} (Request ID: {request_id})"
                    )
                } else {
                    write!(f, "Internal server error: {message}")
                }
            }
            Error::ServiceUnavailable {
                message,
                retry_after,
            } => {
                if let Some(retry_after) = retry_after {
                    write!(
                        f,
                        "Service unavailable: {message} (retry after {retry_after} seconds)"
                    )
                } else {
                    write!(f, "Service unavailable: {message}")
                }
            }
            Error::EmptyResponse { message, .. } => {
                write!(f, "Empty response: {message}")
            }
            Error::Serialization { message, .. } => {
                write!(f, "Serialization error: {message}")
            }
            Error::Io { message, .. } => {
                write!(f, "I/O error: {message}")
            }
            Error::HttpClient { message, .. } => {
                write!(f, "HTTP client error: {message}")
            }
            Error::Validation { message, param } => {
                if let Some(param) = param {
                    write!(f, "Validation error: {message} (parameter: {param})")
                } else {
                    write!(f, "Validation error: {message}")
                }
            }
            Error::Url { message, .. } => {
                write!(f, "URL error: {message}")
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Connection { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::Serialization { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::Io { source, .. } => Some(source),
            Error::HttpClient { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::Url { source, .. } => {
                source.as_ref().map(|e| e as &(dyn error::Error + 'static))
            }
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::io(err.to_string(), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::serialization(format!("JSON error: {err}"), Some(Box::new(err)))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::url(format!("URL parse error: {err}"), Some(err))
    }
}

/// A specialized Result type for parley operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_are_disjoint() {
        let auth = Error::authentication("no key");
        assert!(auth.is_authentication());
        assert!(!auth.is_upstream());
        assert!(!auth.is_validation());

        let denied = Error::permission("forbidden");
        assert!(denied.is_authentication());
        assert!(!denied.is_upstream());

        let upstream = Error::service_unavailable("overloaded", Some(3));
        assert!(upstream.is_upstream());
        assert!(upstream.is_server_error());
        assert!(!upstream.is_authentication());

        let empty = Error::validation("empty submission", None);
        assert!(empty.is_validation());
        assert!(!empty.is_upstream());

        let io = Error::from(io::Error::other("disk"));
        assert!(!io.is_upstream());
        assert!(!io.is_authentication());
        assert!(!io.is_validation());
    }

    #[test]
    fn abort_and_timeout_are_upstream() {
        assert!(Error::abort("cancelled").is_upstream());
        assert!(Error::abort("cancelled").is_abort());
        assert!(Error::timeout("slow", Some(60.0)).is_upstream());
        assert!(Error::timeout("slow", Some(60.0)).is_timeout());
    }

    #[test]
    fn display_includes_details() {
        let err = Error::rate_limit("slow down", Some(30));
        assert_eq!(
            err.to_string(),
            "Rate limit exceeded: slow down (retry after 30 seconds)"
        );

        let err = Error::api(
            418,
            Some("teapot".to_string()),
            "short and stout".to_string(),
            Some("req_1".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "teapot: short and stout (Request ID: req_1)"
        );
        assert_eq!(err.status_code(), Some(418));
        assert_eq!(err.request_id(), Some("req_1"));

        let err = Error::validation("empty submission", Some("content".to_string()));
        assert_eq!(
            err.to_string(),
            "Validation error: empty submission (parameter: content)"
        );
    }

    #[test]
    fn source_is_preserved() {
        use std::error::Error as _;

        let err = Error::from(url::Url::parse("not a url").unwrap_err());
        assert!(err.source().is_some());

        let err = Error::authentication("no key");
        assert!(err.source().is_none());
    }
}
