//! Resolver capability contract shared by every authentication method.

// self
use crate::{_prelude::*, auth::BearerToken, error::BoxError};

/// Boxed future returned by [`TokenResolver::resolve_token`].
pub type ResolveFuture<'a> =
	Pin<Box<dyn Future<Output = Result<BearerToken, AuthError>> + 'a + Send>>;

/// Credential-resolution contract implemented by every authentication method.
///
/// The execution context calls [`resolve_token`](TokenResolver::resolve_token) once per
/// authenticated request cycle and never branches on the auth-method kind. Implementations
/// must tolerate repeated independent invocations without mutating shared state; callers
/// that need timeout or cancellation wrap the returned future externally.
pub trait TokenResolver
where
	Self: Send + Sync,
{
	/// Produces a bearer token for the next authenticated request.
	fn resolve_token(&self) -> ResolveFuture<'_>;
}

/// Party responsible for a failed token resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthFault {
	/// The SDK itself produced or propagated the unusable token.
	Sdk,
	/// A user-supplied delegate produced the unusable token.
	Delegate,
}
impl AuthFault {
	/// Returns a stable label suitable for error messages and span fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			AuthFault::Sdk => "sdk",
			AuthFault::Delegate => "delegate",
		}
	}
}
impl Display for AuthFault {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Error raised when a credential source cannot produce a usable token.
#[derive(Debug, ThisError)]
pub enum AuthError {
	/// The source completed but the resulting token is unusable.
	#[error("Token resolution failed ({fault}): {reason}.")]
	Resolution {
		/// Party at fault, distinguishing SDK bugs from broken external callbacks.
		fault: AuthFault,
		/// Human-readable failure summary.
		reason: String,
	},
	/// The external delegate returned an error instead of a token.
	#[error("Token delegate failed.")]
	DelegateFailed {
		/// Failure raised inside the user-supplied callback.
		#[source]
		source: BoxError,
	},
}
impl AuthError {
	/// Builds a resolution failure attributed to the SDK.
	pub fn sdk(reason: impl Into<String>) -> Self {
		Self::Resolution { fault: AuthFault::Sdk, reason: reason.into() }
	}

	/// Builds a resolution failure attributed to a user-supplied delegate.
	pub fn delegate(reason: impl Into<String>) -> Self {
		Self::Resolution { fault: AuthFault::Delegate, reason: reason.into() }
	}

	/// Returns the party responsible for the failure.
	pub fn fault(&self) -> AuthFault {
		match self {
			AuthError::Resolution { fault, .. } => *fault,
			AuthError::DelegateFailed { .. } => AuthFault::Delegate,
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn fault_attribution_is_preserved_in_messages() {
		let sdk = AuthError::sdk("resolver produced no token");
		let delegate = AuthError::delegate("callback returned an empty token");

		assert_eq!(sdk.fault(), AuthFault::Sdk);
		assert_eq!(delegate.fault(), AuthFault::Delegate);
		assert!(sdk.to_string().contains("(sdk)"));
		assert!(delegate.to_string().contains("(delegate)"));
	}

	#[test]
	fn delegate_errors_are_attributed_to_the_delegate() {
		let err = AuthError::DelegateFailed { source: "broken credential helper".into() };

		assert_eq!(err.fault(), AuthFault::Delegate);
	}
}
