//! Typed backend-provider base: discriminators, descriptors, and concrete families.
//!
//! Dozens of backend families (multi-factor authenticators, auth methods, secrets
//! engines) need the same two things: a stable wire-level `type` tag for server-side
//! routing and shared access to the execution context. [`TypedBackend`] captures
//! exactly that and nothing more; capability-specific operations live on the concrete
//! providers in the family submodules.

pub mod approle;
pub mod descriptor;
pub mod kv;
pub mod mfa;
pub mod pki;

pub use approle::*;
pub use descriptor::*;
pub use kv::*;
pub use mfa::*;
pub use pki::*;

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{_prelude::*, context::ClientContext};

/// Contract shared by every typed backend provider.
///
/// A provider binds a compile-time-fixed wire discriminator to a configuration shape
/// and one shared execution context. The discriminator is a pure function of the
/// concrete type, never derived from instance data, so encoders can statically map a
/// `type` tag to its handler.
pub trait TypedBackend
where
	Self: Send + Sync,
{
	/// Configuration shape accepted by the backend.
	type Config: Serialize + DeserializeOwned + Send + Sync + 'static;

	/// Wire-level type discriminator identifying the backend family.
	const WIRE_TYPE: &'static str;

	/// Shared execution context the provider performs calls through.
	fn context(&self) -> &Arc<ClientContext>;

	/// Returns the wire discriminator for this provider.
	fn wire_type(&self) -> &'static str {
		Self::WIRE_TYPE
	}

	/// Default mount path, falling back to the wire type.
	fn default_mount(&self) -> &'static str {
		Self::WIRE_TYPE
	}
}
