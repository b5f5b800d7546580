//! AppRole auth method (`approle`): machine login exchanging role credentials for a token.
//!
//! Pairs naturally with the delegate resolver: point the delegate at
//! [`AppRoleAuth::login`] against a bootstrap context and every subsequent request
//! authenticates with the exchanged token.

// self
use crate::{
	_prelude::*,
	auth::BearerToken,
	backend::TypedBackend,
	context::ClientContext,
	guard::{self, GuardError},
};

/// AppRole provider bound to the `approle` wire type.
#[derive(Clone, Debug)]
pub struct AppRoleAuth {
	context: Arc<ClientContext>,
	mount: String,
}
impl AppRoleAuth {
	/// Creates a provider on the default `approle` mount.
	pub fn new(context: Arc<ClientContext>) -> Self {
		Self { context, mount: Self::WIRE_TYPE.to_owned() }
	}

	/// Overrides the mount path.
	pub fn with_mount(mut self, mount: impl Into<String>) -> Result<Self, GuardError> {
		self.mount = guard::filled(mount, "mount")?;

		Ok(self)
	}

	/// Exchanges role credentials for a client token.
	pub async fn login(&self, role_id: &str, secret_id: &str) -> Result<AuthInfo> {
		let credentials = AppRoleCredentials {
			role_id: guard::filled(role_id, "role_id")?,
			secret_id: guard::filled(secret_id, "secret_id")?,
		};
		let response: LoginResponse = self
			.context
			.write_typed(&format!("auth/{}/login", self.mount), &credentials)
			.await?;

		Ok(response.auth)
	}
}
impl TypedBackend for AppRoleAuth {
	type Config = AppRoleCredentials;

	const WIRE_TYPE: &'static str = "approle";

	fn context(&self) -> &Arc<ClientContext> {
		&self.context
	}
}

/// Role credentials submitted to the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRoleCredentials {
	/// Role identifier.
	pub role_id: String,
	/// Secret identifier issued for the role.
	pub secret_id: String,
}

/// Authentication payload returned by login endpoints.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthInfo {
	/// Client token issued by the server.
	pub client_token: BearerToken,
	/// Token accessor.
	#[serde(default)]
	pub accessor: String,
	/// Policies attached to the token.
	#[serde(default)]
	pub policies: Vec<String>,
	/// Lease duration in seconds.
	#[serde(default)]
	pub lease_duration: u64,
	/// Whether the token is renewable.
	#[serde(default)]
	pub renewable: bool,
}

#[derive(Deserialize)]
struct LoginResponse {
	auth: AuthInfo,
}
