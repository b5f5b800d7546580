//! Multi-factor-auth provider family (`duo`, `totp`).
//!
//! Every MFA method lives under `sys/mfa/method/{type}/{name}`; the shared
//! [`MfaMethod`] operations differ only in the configuration shape bound by each
//! concrete provider.

// self
use crate::{_prelude::*, backend::TypedBackend, context::ClientContext, guard, wire::Envelope};

fn method_path(wire_type: &str, name: &str) -> String {
	format!("sys/mfa/method/{wire_type}/{name}")
}

/// Boxed future returned by [`MfaMethod`] operations.
pub type MfaFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;

/// Operations shared by every `sys/mfa/method` provider.
pub trait MfaMethod
where
	Self: TypedBackend,
{
	/// Creates or updates the named method configuration.
	fn configure<'a>(&'a self, name: &'a str, config: &'a Self::Config) -> MfaFuture<'a, ()> {
		Box::pin(async move {
			let name = guard::filled(name, "name")?;

			self.context().write(&method_path(Self::WIRE_TYPE, &name), config).await
		})
	}

	/// Reads the named method configuration.
	fn read_configuration<'a>(&'a self, name: &'a str) -> MfaFuture<'a, Self::Config> {
		Box::pin(async move {
			let name = guard::filled(name, "name")?;
			let envelope: Envelope<Self::Config> =
				self.context().read(&method_path(Self::WIRE_TYPE, &name)).await?;

			Ok(envelope.data)
		})
	}

	/// Deletes the named method configuration.
	fn delete_configuration<'a>(&'a self, name: &'a str) -> MfaFuture<'a, ()> {
		Box::pin(async move {
			let name = guard::filled(name, "name")?;

			self.context().delete(&method_path(Self::WIRE_TYPE, &name)).await
		})
	}
}

/// Duo MFA provider bound to the `duo` wire type.
#[derive(Clone, Debug)]
pub struct DuoMfa {
	context: Arc<ClientContext>,
}
impl DuoMfa {
	/// Creates a provider sharing the given execution context.
	pub fn new(context: Arc<ClientContext>) -> Self {
		Self { context }
	}
}
impl TypedBackend for DuoMfa {
	type Config = DuoConfig;

	const WIRE_TYPE: &'static str = "duo";

	fn context(&self) -> &Arc<ClientContext> {
		&self.context
	}
}
impl MfaMethod for DuoMfa {}

/// Duo method configuration payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuoConfig {
	/// Duo integration key.
	pub integration_key: String,
	/// Duo secret key.
	pub secret_key: String,
	/// Duo API hostname.
	pub api_hostname: String,
	/// Optional push information appended to Duo pushes.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub push_info: Option<String>,
	/// Format string mapping identities to Duo usernames.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub username_format: Option<String>,
}

/// TOTP MFA provider bound to the `totp` wire type.
#[derive(Clone, Debug)]
pub struct TotpMfa {
	context: Arc<ClientContext>,
}
impl TotpMfa {
	/// Creates a provider sharing the given execution context.
	pub fn new(context: Arc<ClientContext>) -> Self {
		Self { context }
	}
}
impl TypedBackend for TotpMfa {
	type Config = TotpConfig;

	const WIRE_TYPE: &'static str = "totp";

	fn context(&self) -> &Arc<ClientContext> {
		&self.context
	}
}
impl MfaMethod for TotpMfa {}

/// TOTP method configuration payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotpConfig {
	/// Issuer name embedded in generated keys.
	pub issuer: String,
	/// Generation period in seconds; older servers report it as a JSON string.
	#[serde(default, with = "crate::wire::stringly")]
	pub period: String,
	/// Hashing algorithm wire name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub algorithm: Option<String>,
	/// Number of digits in generated codes.
	#[serde(default)]
	pub digits: u32,
	/// Key size in bytes.
	#[serde(default)]
	pub key_size: u32,
}
