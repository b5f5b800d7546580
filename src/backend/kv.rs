//! Key-value secrets engine facade composing both engine versions behind one type.

// self
use crate::{
	_prelude::*,
	backend::TypedBackend,
	context::ClientContext,
	guard::{self, GuardError},
	wire::Envelope,
};

/// Secret key/value payload exchanged with both engine versions.
pub type SecretData = BTreeMap<String, serde_json::Value>;

#[derive(Deserialize)]
struct KeyList {
	keys: Vec<String>,
}

/// Composite provider exposing one eagerly-built sub-provider per KV major version.
///
/// Construction is all-or-nothing: a guard failure in either sub-provider fails the
/// composite and no partial facade exists. Both versions share the same execution
/// context and mount path for the lifetime of the parent.
#[derive(Clone, Debug)]
pub struct KvEngine {
	v1: KvV1,
	v2: KvV2,
}
impl KvEngine {
	/// Builds the facade on a shared context and mount path.
	pub fn new(context: Arc<ClientContext>, mount: impl Into<String>) -> Result<Self, GuardError> {
		let mount = guard::filled(mount, "mount")?;

		Ok(Self { v1: KvV1::new(context.clone(), mount.clone())?, v2: KvV2::new(context, mount)? })
	}

	/// Version 1 sub-provider (unversioned secrets).
	pub fn v1(&self) -> &KvV1 {
		&self.v1
	}

	/// Version 2 sub-provider (versioned secrets).
	pub fn v2(&self) -> &KvV2 {
		&self.v2
	}
}

/// KV version 1 provider: plain reads and writes at `{mount}/{path}`.
#[derive(Clone, Debug)]
pub struct KvV1 {
	context: Arc<ClientContext>,
	mount: String,
}
impl KvV1 {
	/// Creates a provider on the given mount path.
	pub fn new(context: Arc<ClientContext>, mount: impl Into<String>) -> Result<Self, GuardError> {
		Ok(Self { context, mount: guard::filled(mount, "mount")? })
	}

	/// Reads the secret at `path`.
	pub async fn read(&self, path: &str) -> Result<SecretData> {
		let path = guard::filled(path, "path")?;
		let envelope: Envelope<SecretData> =
			self.context.read(&format!("{}/{}", self.mount, path)).await?;

		Ok(envelope.data)
	}

	/// Writes the secret at `path`, replacing any existing payload.
	pub async fn write(&self, path: &str, data: &SecretData) -> Result<()> {
		let path = guard::filled(path, "path")?;

		self.context.write(&format!("{}/{}", self.mount, path), data).await
	}

	/// Deletes the secret at `path`.
	pub async fn delete(&self, path: &str) -> Result<()> {
		let path = guard::filled(path, "path")?;

		self.context.delete(&format!("{}/{}", self.mount, path)).await
	}

	/// Enumerates child keys under `path`.
	pub async fn list(&self, path: &str) -> Result<Vec<String>> {
		let path = guard::filled(path, "path")?;
		let envelope: Envelope<KeyList> =
			self.context.list(&format!("{}/{}", self.mount, path)).await?;

		Ok(envelope.data.keys)
	}
}
impl TypedBackend for KvV1 {
	type Config = SecretData;

	const WIRE_TYPE: &'static str = "kv";

	fn context(&self) -> &Arc<ClientContext> {
		&self.context
	}
}

/// KV version 2 provider: versioned secrets under `{mount}/data` and `{mount}/metadata`.
#[derive(Clone, Debug)]
pub struct KvV2 {
	context: Arc<ClientContext>,
	mount: String,
}
impl KvV2 {
	/// Creates a provider on the given mount path.
	pub fn new(context: Arc<ClientContext>, mount: impl Into<String>) -> Result<Self, GuardError> {
		Ok(Self { context, mount: guard::filled(mount, "mount")? })
	}

	/// Reads the latest version of the secret at `path`.
	pub async fn read(&self, path: &str) -> Result<VersionedSecret> {
		let path = guard::filled(path, "path")?;
		let envelope: Envelope<VersionedSecret> =
			self.context.read(&format!("{}/data/{}", self.mount, path)).await?;

		Ok(envelope.data)
	}

	/// Reads a specific version of the secret at `path`.
	pub async fn read_version(&self, path: &str, version: u64) -> Result<VersionedSecret> {
		let path = guard::filled(path, "path")?;
		let envelope: Envelope<VersionedSecret> = self
			.context
			.read(&format!("{}/data/{}?version={}", self.mount, path, version))
			.await?;

		Ok(envelope.data)
	}

	/// Writes a new version of the secret at `path`, returning its version metadata.
	pub async fn write(&self, path: &str, data: &SecretData) -> Result<SecretVersionMetadata> {
		#[derive(Serialize)]
		struct WriteRequest<'a> {
			data: &'a SecretData,
		}

		let path = guard::filled(path, "path")?;
		let envelope: Envelope<SecretVersionMetadata> = self
			.context
			.write_typed(&format!("{}/data/{}", self.mount, path), &WriteRequest { data })
			.await?;

		Ok(envelope.data)
	}

	/// Soft-deletes the latest version of the secret at `path`.
	pub async fn delete(&self, path: &str) -> Result<()> {
		let path = guard::filled(path, "path")?;

		self.context.delete(&format!("{}/data/{}", self.mount, path)).await
	}

	/// Permanently removes the secret and all version history at `path`.
	pub async fn delete_metadata(&self, path: &str) -> Result<()> {
		let path = guard::filled(path, "path")?;

		self.context.delete(&format!("{}/metadata/{}", self.mount, path)).await
	}

	/// Enumerates child keys under `path`.
	pub async fn list(&self, path: &str) -> Result<Vec<String>> {
		let path = guard::filled(path, "path")?;
		let envelope: Envelope<KeyList> =
			self.context.list(&format!("{}/metadata/{}", self.mount, path)).await?;

		Ok(envelope.data.keys)
	}
}
impl TypedBackend for KvV2 {
	type Config = SecretData;

	const WIRE_TYPE: &'static str = "kv";

	fn context(&self) -> &Arc<ClientContext> {
		&self.context
	}
}

/// Data plus version metadata returned by KV v2 reads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VersionedSecret {
	/// Secret key/value payload.
	pub data: SecretData,
	/// Version metadata for the returned payload.
	pub metadata: SecretVersionMetadata,
}

/// Version metadata attached to KV v2 payloads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SecretVersionMetadata {
	/// Monotonic version number.
	pub version: u64,
	/// Creation instant reported by the server.
	#[serde(with = "time::serde::rfc3339")]
	pub created_time: OffsetDateTime,
	/// Deletion instant; the server reports an empty string while the version is live.
	#[serde(default)]
	pub deletion_time: String,
	/// Whether the version has been destroyed.
	#[serde(default)]
	pub destroyed: bool,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::_preludet::build_stub_context;

	#[test]
	fn composite_exposes_one_sub_provider_per_version() {
		let (context, _transport) = build_stub_context("s.kv");
		let engine = KvEngine::new(context.clone(), "secret")
			.expect("Mount fixture should pass the guard.");

		assert!(Arc::ptr_eq(engine.v1().context(), engine.v2().context()));
		assert!(Arc::ptr_eq(engine.v1().context(), &context));
		assert_eq!(engine.v1().wire_type(), "kv");
		assert_eq!(engine.v2().wire_type(), "kv");
	}

	#[test]
	fn composite_construction_is_all_or_nothing() {
		let (context, _transport) = build_stub_context("s.kv");
		let err = KvEngine::new(context, "  ").expect_err("Blank mount must be rejected.");

		assert_eq!(err, GuardError::Blank { name: "mount" });
	}

	#[tokio::test]
	async fn v1_reads_unwrap_the_envelope() {
		let (context, transport) = build_stub_context("s.kv");
		let engine =
			KvEngine::new(context, "secret").expect("Mount fixture should pass the guard.");

		transport.enqueue_json(
			200,
			serde_json::json!({
				"request_id": "r-1",
				"lease_duration": 2764800,
				"data": { "password": "hunter2" }
			}),
		);

		let data = engine.v1().read("app/db").await.expect("Scripted read should succeed.");

		assert_eq!(data.get("password"), Some(&serde_json::json!("hunter2")));
		assert_eq!(transport.requests()[0].url.path(), "/v1/secret/app/db");
	}

	#[tokio::test]
	async fn v2_writes_nest_data_and_return_version_metadata() {
		let (context, transport) = build_stub_context("s.kv");
		let engine =
			KvEngine::new(context, "secret").expect("Mount fixture should pass the guard.");

		transport.enqueue_json(
			200,
			serde_json::json!({
				"data": {
					"version": 2,
					"created_time": "2026-08-23T10:15:00Z",
					"deletion_time": "",
					"destroyed": false
				}
			}),
		);

		let data = SecretData::from_iter([("api_key".to_owned(), serde_json::json!("k-1"))]);
		let metadata =
			engine.v2().write("app/api", &data).await.expect("Scripted write should succeed.");

		assert_eq!(metadata.version, 2);
		assert_eq!(metadata.created_time.year(), 2026);

		let requests = transport.requests();

		assert_eq!(requests[0].url.path(), "/v1/secret/data/app/api");
		assert_eq!(
			requests[0].body,
			Some(serde_json::json!({ "data": { "api_key": "k-1" } }))
		);
	}

	#[tokio::test]
	async fn v2_version_reads_carry_the_query() {
		let (context, transport) = build_stub_context("s.kv");
		let engine =
			KvEngine::new(context, "secret").expect("Mount fixture should pass the guard.");

		transport.enqueue_json(
			200,
			serde_json::json!({
				"data": {
					"data": { "password": "old" },
					"metadata": {
						"version": 1,
						"created_time": "2026-08-20T08:00:00Z",
						"deletion_time": "",
						"destroyed": false
					}
				}
			}),
		);

		let secret = engine
			.v2()
			.read_version("app/db", 1)
			.await
			.expect("Scripted versioned read should succeed.");

		assert_eq!(secret.metadata.version, 1);
		assert_eq!(secret.data.get("password"), Some(&serde_json::json!("old")));
		assert_eq!(transport.requests()[0].url.query(), Some("version=1"));
	}
}
