//! Client-level error types shared by the builder, dispatcher, and typed helpers.

// self
use crate::{_prelude::*, auth::CredentialsError};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration or request construction problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, I/O).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Response body is not valid JSON.
	#[error("Response body is not valid JSON (HTTP {status}).")]
	Parse {
		/// Underlying JSON parsing failure.
		#[source]
		source: serde_json::Error,
		/// HTTP status code of the response.
		status: u16,
		/// Truncated preview of the raw body.
		body_preview: String,
	},
	/// JSON payload does not match the requested model.
	#[error("Response payload does not match the expected model.")]
	Decode(#[from] serde_path_to_error::Error<serde_json::Error>),
	/// Request body could not be serialized to JSON.
	#[error("Request body could not be serialized to JSON.")]
	Serialize {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// Remote service answered with a non-success status.
	///
	/// Only produced when the caller opts into status checking (see
	/// [`ApiResponse::into_result`](crate::response::ApiResponse::into_result)).
	#[error("Remote service returned HTTP {status}.")]
	Application {
		/// HTTP status code returned by the service.
		status: u16,
		/// Parsed error payload.
		body: Value,
	},
}
impl Error {
	/// Returns the HTTP status attached to the error, when one was received.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Parse { status, .. } | Self::Application { status, .. } => Some(*status),
			_ => None,
		}
	}
}

/// Configuration and request construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Application credentials failed validation.
	#[error(transparent)]
	InvalidCredentials(#[from] CredentialsError),
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] ::http::Error),
	/// Header value contains characters HTTP does not allow.
	#[error("The {header} header value is invalid.")]
	InvalidHeader {
		/// Header name.
		header: &'static str,
		/// Underlying validation failure.
		#[source]
		source: ::http::header::InvalidHeaderValue,
	},
	/// Base URL cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL cannot carry API paths.
	#[error("Base URL must be an absolute http(s) URL without query or fragment: {url}.")]
	UnsupportedBaseUrl {
		/// Offending URL.
		url: String,
	},
	/// Path parameter would collapse into a different path once rendered.
	#[error("Endpoint `{endpoint}` cannot take `{value}` as a path parameter.")]
	InvalidPathParameter {
		/// Endpoint name.
		endpoint: &'static str,
		/// Rejected value.
		value: String,
	},
	/// Path parameters do not match the endpoint template.
	#[error("Endpoint `{endpoint}` expects {expected} path parameter(s) but received {given}.")]
	PathParameterMismatch {
		/// Endpoint name.
		endpoint: &'static str,
		/// Placeholder count in the path template.
		expected: usize,
		/// Supplied parameter count.
		given: usize,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn status_is_exposed_for_response_errors() {
		let err = Error::Application { status: 503, body: serde_json::json!({ "error": "down" }) };

		assert_eq!(err.status(), Some(503));
		assert_eq!(err.to_string(), "Remote service returned HTTP 503.");

		let err: Error = ConfigError::PathParameterMismatch {
			endpoint: "get_user",
			expected: 1,
			given: 0,
		}
		.into();

		assert_eq!(err.status(), None);
		assert_eq!(
			err.to_string(),
			"Endpoint `get_user` expects 1 path parameter(s) but received 0."
		);
	}

	#[test]
	fn transport_errors_keep_their_source() {
		let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
		let err: Error = TransportError::network(io).into();

		assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
		assert!(err.source().is_some());
	}

	#[test]
	fn client_build_failures_are_configuration_errors() {
		let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing TLS roots");
		let err: Error = ConfigError::http_client_build(io).into();

		assert!(matches!(err, Error::Config(ConfigError::HttpClientBuild { .. })));
		assert_eq!(err.to_string(), "HTTP client could not be constructed.");
		assert_eq!(
			err.source().map(ToString::to_string).as_deref(),
			Some("missing TLS roots")
		);
	}
}
