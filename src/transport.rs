//! Transport primitives for authenticated SDK requests.
//!
//! The module exposes [`HttpTransport`] alongside the plain [`WireRequest`] /
//! [`WireResponse`] data types so downstream crates can integrate custom HTTP clients
//! without the SDK ever implementing HTTP semantics itself. [`ReqwestTransport`] is
//! the bundled default; [`StubTransport`] is an in-process scripted double for unit
//! tests and demos.

// std
use std::collections::VecDeque;
// self
use crate::{_prelude::*, error::BoxError};

/// Boxed future returned by [`HttpTransport::execute`].
pub type TransportFuture<'a, T> =
	Pin<Box<dyn Future<Output = Result<T, TransportError>> + 'a + Send>>;

/// HTTP methods used by backend operations.
///
/// `List` is the server's custom collection verb; transports translate it into the
/// literal `LIST` method token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestMethod {
	/// Read a resource.
	Get,
	/// Create or update a resource.
	Post,
	/// Replace a resource.
	Put,
	/// Remove a resource.
	Delete,
	/// Enumerate child keys (custom verb).
	List,
}
impl RequestMethod {
	/// Returns the wire-level method token.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestMethod::Get => "GET",
			RequestMethod::Post => "POST",
			RequestMethod::Put => "PUT",
			RequestMethod::Delete => "DELETE",
			RequestMethod::List => "LIST",
		}
	}
}
impl Display for RequestMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Fully-assembled request handed to the transport.
#[derive(Clone, Debug)]
pub struct WireRequest {
	/// Method token for the request.
	pub method: RequestMethod,
	/// Absolute request URL.
	pub url: Url,
	/// Header name/value pairs, including the resolved token header.
	pub headers: Vec<(&'static str, String)>,
	/// Optional JSON body.
	pub body: Option<serde_json::Value>,
}
impl WireRequest {
	/// Returns the value of the named header, if present.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
	}
}

/// Raw response returned by the transport.
#[derive(Clone, Debug)]
pub struct WireResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body bytes.
	pub body: Vec<u8>,
}
impl WireResponse {
	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the server.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the server.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Abstraction over HTTP stacks capable of executing authenticated SDK requests.
///
/// The trait is the SDK's only dependency on an HTTP stack: the execution context
/// resolves a token, assembles a [`WireRequest`], and hands it over. Implementations
/// must be `Send + Sync` so one transport instance can back every provider built from
/// the same context.
pub trait HttpTransport
where
	Self: Send + Sync,
{
	/// Executes the request and returns the raw response.
	fn execute(&self, request: WireRequest) -> TransportFuture<'_, WireResponse>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestTransport {
	fn execute(&self, request: WireRequest) -> TransportFuture<'_, WireResponse> {
		let client = self.0.clone();

		Box::pin(async move {
			let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
				.map_err(TransportError::network)?;
			let mut builder = client.request(method, request.url.clone());

			for (name, value) in &request.headers {
				builder = builder.header(*name, value.as_str());
			}
			if let Some(body) = request.body.as_ref() {
				let payload = serde_json::to_vec(body).map_err(TransportError::network)?;

				builder = builder.header("content-type", "application/json").body(payload);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(WireResponse { status, body })
		})
	}
}

/// Scripted transport that records requests and replays queued responses.
///
/// In-process double used by unit tests and demos; responses are consumed in FIFO
/// order and an exhausted script surfaces as a network failure.
#[derive(Debug, Default)]
pub struct StubTransport {
	script: Mutex<VecDeque<WireResponse>>,
	seen: Mutex<Vec<WireRequest>>,
}
impl StubTransport {
	/// Queues a raw response.
	pub fn enqueue(&self, response: WireResponse) {
		self.script.lock().push_back(response);
	}

	/// Queues a JSON response with the provided status.
	pub fn enqueue_json(&self, status: u16, body: serde_json::Value) {
		self.enqueue(WireResponse { status, body: body.to_string().into_bytes() });
	}

	/// Returns a snapshot of every request seen so far.
	pub fn requests(&self) -> Vec<WireRequest> {
		self.seen.lock().clone()
	}
}
impl HttpTransport for StubTransport {
	fn execute(&self, request: WireRequest) -> TransportFuture<'_, WireResponse> {
		self.seen.lock().push(request);

		let next = self.script.lock().pop_front();

		Box::pin(async move {
			next.ok_or_else(|| TransportError::Network {
				source: "StubTransport script is exhausted.".into(),
			})
		})
	}
}
