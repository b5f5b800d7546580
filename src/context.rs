//! Shared execution context threaded through every backend provider.
//!
//! The context is built once per client configuration, never mutates afterwards, and is
//! passed by [`Arc`] to every provider constructed from it, so providers share it without
//! locking. It owns the only authenticated request cycle in the SDK: resolve a token,
//! attach it, execute via the transport, decode the response.

// crates.io
use serde::de::DeserializeOwned;
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	auth::TokenResolver,
	guard::{self, GuardError},
	obs::{self, RequestOutcome, RequestSpan},
	transport::{HttpTransport, RequestMethod, WireRequest, WireResponse},
	wire::WireError,
};
#[cfg(feature = "reqwest")] use crate::transport::ReqwestTransport;

const TOKEN_HEADER: &str = "X-Vault-Token";
const NAMESPACE_HEADER: &str = "X-Vault-Namespace";
const DEFAULT_API_PREFIX: &str = "v1";

/// Immutable transport settings carried by the execution context.
#[derive(Clone, Debug)]
pub struct ClientSettings {
	/// Base server address, e.g. `https://secrets.example.com:8200`.
	pub base_url: Url,
	/// API prefix prepended to every backend path (defaults to `v1`).
	pub api_prefix: String,
	/// Optional namespace header value attached to every request.
	pub namespace: Option<String>,
}

/// Shared, read-only execution handle performing authenticated calls for providers.
///
/// Every provider holds a non-owning [`Arc`] reference to exactly one instance; the
/// instance outlives all providers built from it. The transport layer resolves the
/// token in-order before using it for a request, and resolution failures surface once
/// per attempt with no silent retry.
pub struct ClientContext {
	settings: ClientSettings,
	resolver: Arc<dyn TokenResolver>,
	transport: Arc<dyn HttpTransport>,
}
impl ClientContext {
	/// Creates a new builder for assembling a validated context.
	pub fn builder() -> ClientContextBuilder {
		ClientContextBuilder::default()
	}

	/// Returns the immutable transport settings.
	pub fn settings(&self) -> &ClientSettings {
		&self.settings
	}

	/// Resolves a token and performs one authenticated request cycle.
	///
	/// Successful 2xx responses decode to a JSON payload (`None` for empty bodies);
	/// non-2xx responses surface as [`Error::Api`] carrying the server's error strings.
	pub async fn issue_authenticated_request(
		&self,
		path: &str,
		method: RequestMethod,
		body: Option<Value>,
	) -> Result<Option<Value>> {
		let span = RequestSpan::new(method, path);

		obs::record_request_outcome(method, RequestOutcome::Attempt);

		let result = span.instrument(self.dispatch(path, method, body)).await;

		match &result {
			Ok(_) => obs::record_request_outcome(method, RequestOutcome::Success),
			Err(_) => obs::record_request_outcome(method, RequestOutcome::Failure),
		}

		result
	}

	/// Reads and decodes a typed payload from the backend.
	pub async fn read<T>(&self, path: &str) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let value = self
			.issue_authenticated_request(path, RequestMethod::Get, None)
			.await?
			.ok_or_else(|| WireError::EmptyResponse { path: path.to_owned() })?;

		decode_payload(value)
	}

	/// Writes a typed body, discarding any response payload.
	pub async fn write<B>(&self, path: &str, body: &B) -> Result<()>
	where
		B: Serialize + ?Sized,
	{
		self.issue_authenticated_request(path, RequestMethod::Post, Some(encode_body(body)?))
			.await?;

		Ok(())
	}

	/// Writes a typed body and decodes the typed response payload.
	pub async fn write_typed<B, T>(&self, path: &str, body: &B) -> Result<T>
	where
		B: Serialize + ?Sized,
		T: DeserializeOwned,
	{
		let value = self
			.issue_authenticated_request(path, RequestMethod::Post, Some(encode_body(body)?))
			.await?
			.ok_or_else(|| WireError::EmptyResponse { path: path.to_owned() })?;

		decode_payload(value)
	}

	/// Deletes the resource at `path`.
	pub async fn delete(&self, path: &str) -> Result<()> {
		self.issue_authenticated_request(path, RequestMethod::Delete, None).await?;

		Ok(())
	}

	/// Enumerates child keys under `path` and decodes the typed payload.
	pub async fn list<T>(&self, path: &str) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let value = self
			.issue_authenticated_request(path, RequestMethod::List, None)
			.await?
			.ok_or_else(|| WireError::EmptyResponse { path: path.to_owned() })?;

		decode_payload(value)
	}

	async fn dispatch(
		&self,
		path: &str,
		method: RequestMethod,
		body: Option<Value>,
	) -> Result<Option<Value>> {
		let path = guard::filled(path, "path")?;
		let token = self.resolver.resolve_token().await?;
		let url = self.endpoint(&path)?;
		let mut headers = vec![(TOKEN_HEADER, token.expose().to_owned())];

		if let Some(namespace) = self.settings.namespace.as_ref() {
			headers.push((NAMESPACE_HEADER, namespace.clone()));
		}

		let response = self.transport.execute(WireRequest { method, url, headers, body }).await?;

		decode_response(response)
	}

	fn endpoint(&self, path: &str) -> Result<Url> {
		let full = format!(
			"{}/{}/{}",
			self.settings.base_url.as_str().trim_end_matches('/'),
			self.settings.api_prefix,
			path.trim_matches('/'),
		);

		Url::parse(&full).map_err(|source| Error::InvalidPath { path: path.to_owned(), source })
	}
}
impl Debug for ClientContext {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ClientContext").field("settings", &self.settings).finish_non_exhaustive()
	}
}

/// Builder assembling a validated [`ClientContext`].
///
/// Validation runs once in [`build`](ClientContextBuilder::build); a failed guard means
/// no context exists at all.
pub struct ClientContextBuilder {
	base_url: Option<Url>,
	api_prefix: String,
	namespace: Option<String>,
	resolver: Option<Arc<dyn TokenResolver>>,
	transport: Option<Arc<dyn HttpTransport>>,
}
impl ClientContextBuilder {
	/// Sets the base server address.
	pub fn base_url(mut self, url: Url) -> Self {
		self.base_url = Some(url);

		self
	}

	/// Overrides the API prefix (defaults to `v1`).
	pub fn api_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.api_prefix = prefix.into();

		self
	}

	/// Sets the namespace header value attached to every request.
	pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = Some(namespace.into());

		self
	}

	/// Sets the token resolver used for every authenticated request.
	pub fn token_resolver(mut self, resolver: Arc<dyn TokenResolver>) -> Self {
		self.resolver = Some(resolver);

		self
	}

	/// Sets the HTTP transport implementation.
	pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
		self.transport = Some(transport);

		self
	}

	/// Uses the bundled reqwest transport.
	#[cfg(feature = "reqwest")]
	pub fn reqwest_transport(self) -> Self {
		self.transport(Arc::new(ReqwestTransport::default()))
	}

	/// Consumes the builder and validates the resulting context.
	pub fn build(self) -> Result<ClientContext, GuardError> {
		let base_url = guard::required(self.base_url, "base_url")?;
		let resolver = guard::required(self.resolver, "token_resolver")?;
		let transport = guard::required(self.transport, "transport")?;
		let api_prefix = guard::filled(self.api_prefix, "api_prefix")?;
		let namespace = match self.namespace {
			Some(namespace) => Some(guard::filled(namespace, "namespace")?),
			None => None,
		};

		Ok(ClientContext {
			settings: ClientSettings { base_url, api_prefix, namespace },
			resolver,
			transport,
		})
	}
}
impl Default for ClientContextBuilder {
	fn default() -> Self {
		Self {
			base_url: None,
			api_prefix: DEFAULT_API_PREFIX.to_owned(),
			namespace: None,
			resolver: None,
			transport: None,
		}
	}
}

fn encode_body<B>(body: &B) -> Result<Value>
where
	B: Serialize + ?Sized,
{
	serde_json::to_value(body).map_err(|source| WireError::BodyEncode { source }.into())
}

fn decode_payload<T>(value: Value) -> Result<T>
where
	T: DeserializeOwned,
{
	serde_path_to_error::deserialize(value)
		.map_err(|source| WireError::ResponseParse { source, status: None }.into())
}

fn decode_response(response: WireResponse) -> Result<Option<Value>> {
	if response.is_success() {
		if response.body.is_empty() {
			return Ok(None);
		}

		let mut deserializer = serde_json::Deserializer::from_slice(&response.body);
		let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|source| {
			WireError::ResponseParse { source, status: Some(response.status) }
		})?;

		Ok(Some(value))
	} else {
		Err(Error::Api { status: response.status, errors: decode_api_errors(&response.body) })
	}
}

fn decode_api_errors(body: &[u8]) -> Vec<String> {
	#[derive(Deserialize)]
	struct ApiErrors {
		#[serde(default)]
		errors: Vec<String>,
	}

	if let Ok(payload) = serde_json::from_slice::<ApiErrors>(body)
		&& !payload.errors.is_empty()
	{
		return payload.errors;
	}

	let fallback = String::from_utf8_lossy(body).trim().to_owned();

	if fallback.is_empty() { Vec::new() } else { vec![fallback] }
}
