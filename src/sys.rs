//! System administration surface (`sys/mounts`).

// self
use crate::{
	_prelude::*, backend::BackendDescriptor, context::ClientContext, guard, wire::Envelope,
};

/// System operations performed against the `sys` mount.
#[derive(Clone, Debug)]
pub struct SysOperations {
	context: Arc<ClientContext>,
}
impl SysOperations {
	/// Creates the system surface on a shared context.
	pub fn new(context: Arc<ClientContext>) -> Self {
		Self { context }
	}

	/// Mounts a backend at the descriptor's effective path.
	pub async fn mount(&self, descriptor: &BackendDescriptor) -> Result<()> {
		#[derive(Serialize)]
		struct MountRequest<'a> {
			r#type: &'a str,
			description: &'a str,
		}

		self.context
			.write(&format!("sys/mounts/{}", descriptor.mount_path()), &MountRequest {
				r#type: descriptor.wire_type(),
				description: &descriptor.description,
			})
			.await
	}

	/// Unmounts the backend at `path`.
	pub async fn unmount(&self, path: &str) -> Result<()> {
		let path = guard::filled(path, "path")?;

		self.context.delete(&format!("sys/mounts/{path}")).await
	}

	/// Lists mounted backends keyed by mount path.
	pub async fn list_mounts(&self) -> Result<BTreeMap<String, BackendDescriptor>> {
		let envelope: Envelope<BTreeMap<String, BackendDescriptor>> =
			self.context.read("sys/mounts").await?;

		Ok(envelope.data)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::_preludet::build_stub_context;

	#[tokio::test]
	async fn mount_posts_the_type_tag_at_the_effective_path() {
		let (context, transport) = build_stub_context("s.sys");
		let sys = SysOperations::new(context);
		let descriptor = BackendDescriptor::new("kv")
			.expect("Wire type fixture should pass the guard.")
			.with_path("team-secrets")
			.expect("Path fixture should pass the guard.")
			.with_description("Team KV store");

		transport.enqueue_json(204, serde_json::json!(null));

		sys.mount(&descriptor).await.expect("Scripted mount should succeed.");

		let requests = transport.requests();

		assert_eq!(requests[0].url.path(), "/v1/sys/mounts/team-secrets");
		assert_eq!(
			requests[0].body,
			Some(serde_json::json!({ "type": "kv", "description": "Team KV store" }))
		);
	}

	#[tokio::test]
	async fn list_mounts_decodes_descriptors() {
		let (context, transport) = build_stub_context("s.sys");
		let sys = SysOperations::new(context);

		transport.enqueue_json(
			200,
			serde_json::json!({
				"data": {
					"secret/": { "type": "kv", "description": "key/value secret storage" },
					"pki/": { "type": "pki", "description": "" }
				}
			}),
		);

		let mounts = sys.list_mounts().await.expect("Scripted listing should succeed.");

		assert_eq!(mounts.len(), 2);
		assert_eq!(mounts["secret/"].wire_type(), "kv");
		assert_eq!(mounts["pki/"].wire_type(), "pki");
	}
}
