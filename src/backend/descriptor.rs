//! Public-facing backend descriptors used for mounting and discovery.

// self
use crate::{
	_prelude::*,
	guard::{self, GuardError},
};

/// Immutable record describing a mountable backend.
///
/// The wire type drives the server-side `type` tag and never changes after
/// construction; the mount path falls back to the wire type when unset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendDescriptor {
	/// Optional mount path; defaults to the wire type.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub path: Option<String>,
	/// Wire-level type discriminator.
	#[serde(rename = "type")]
	wire_type: String,
	/// Human-readable description.
	#[serde(default)]
	pub description: String,
}
impl BackendDescriptor {
	/// Validates and builds a descriptor for the provided wire type.
	pub fn new(wire_type: impl Into<String>) -> Result<Self, GuardError> {
		Ok(Self {
			path: None,
			wire_type: guard::filled(wire_type, "wire_type")?,
			description: String::new(),
		})
	}

	/// Overrides the mount path.
	pub fn with_path(mut self, path: impl Into<String>) -> Result<Self, GuardError> {
		self.path = Some(guard::filled(path, "path")?);

		Ok(self)
	}

	/// Sets the human-readable description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();

		self
	}

	/// Returns the immutable wire discriminator.
	pub fn wire_type(&self) -> &str {
		&self.wire_type
	}

	/// Effective mount path, falling back to the wire type.
	pub fn mount_path(&self) -> &str {
		self.path.as_deref().unwrap_or(&self.wire_type)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn mount_path_falls_back_to_the_wire_type() {
		let descriptor =
			BackendDescriptor::new("kv").expect("Wire type fixture should pass the guard.");

		assert_eq!(descriptor.mount_path(), "kv");

		let descriptor =
			descriptor.with_path("team-secrets").expect("Path fixture should pass the guard.");

		assert_eq!(descriptor.mount_path(), "team-secrets");
		assert_eq!(descriptor.wire_type(), "kv");
	}

	#[test]
	fn construction_applies_the_guard() {
		let err =
			BackendDescriptor::new(" ").expect_err("Blank wire type must be rejected.");

		assert_eq!(err, GuardError::Blank { name: "wire_type" });

		let err = BackendDescriptor::new("pki")
			.expect("Wire type fixture should pass the guard.")
			.with_path("")
			.expect_err("Blank path must be rejected.");

		assert_eq!(err, GuardError::Blank { name: "path" });
	}

	#[test]
	fn serde_uses_the_type_tag() {
		let descriptor = BackendDescriptor::new("duo")
			.expect("Wire type fixture should pass the guard.")
			.with_description("Duo MFA");
		let encoded =
			serde_json::to_string(&descriptor).expect("Descriptor should serialize to JSON.");

		assert_eq!(encoded, "{\"type\":\"duo\",\"description\":\"Duo MFA\"}");

		let decoded: BackendDescriptor =
			serde_json::from_str("{\"type\":\"totp\"}").expect("Descriptor should deserialize.");

		assert_eq!(decoded.wire_type(), "totp");
		assert_eq!(decoded.mount_path(), "totp");
	}
}
