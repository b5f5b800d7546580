//! SDK-level error types shared across resolvers, providers, and the execution context.

// self
use crate::_prelude::*;

/// SDK-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Boxed error type accepted from external callbacks and transports.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical SDK error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Precondition failure raised by the validation guard.
	#[error(transparent)]
	Guard(#[from] crate::guard::GuardError),
	/// Token resolution failure.
	#[error(transparent)]
	Auth(#[from] crate::auth::AuthError),
	/// Wire payload violated an adapter or response contract.
	#[error(transparent)]
	Wire(#[from] crate::wire::WireError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] crate::transport::TransportError),

	/// Request path cannot be combined with the configured base address.
	#[error("Request path `{path}` does not form a valid URL.")]
	InvalidPath {
		/// Offending path segment.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Server rejected the request and reported structured errors.
	#[error("Server returned {status}: {}.", errors.join("; "))]
	Api {
		/// HTTP status code returned by the server.
		status: u16,
		/// Error strings reported in the response payload.
		errors: Vec<String>,
	},
}
