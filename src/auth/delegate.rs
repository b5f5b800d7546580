//! Delegate-based resolver invoking a user-supplied asynchronous credential callback.

// self
use crate::{
	_prelude::*,
	auth::{AuthError, BearerToken, ResolveFuture, TokenResolver},
	error::BoxError,
};

/// Boxed future returned by user-supplied token delegates.
pub type DelegateFuture = Pin<Box<dyn Future<Output = Result<String, BoxError>> + Send>>;
/// Zero-argument asynchronous callback expected to return a bearer token.
pub type TokenDelegate = dyn Fn() -> DelegateFuture + Send + Sync;

/// Resolver that defers token acquisition to an external asynchronous callback.
///
/// This is the extensibility seam for custom credential flows (environment-specific,
/// interactive, federated): callers implement the callback, the resolver contract
/// stays untouched. Failures raised by or blank results returned from the callback
/// are attributed to the delegate, so a misbehaving external flow is distinguishable
/// from an SDK defect.
pub struct DelegateTokenResolver {
	delegate: Arc<TokenDelegate>,
}
impl DelegateTokenResolver {
	/// Wraps the provided asynchronous callback.
	pub fn new<F, Fut>(delegate: F) -> Self
	where
		F: Fn() -> Fut + Send + Sync + 'static,
		Fut: Future<Output = Result<String, BoxError>> + Send + 'static,
	{
		Self { delegate: Arc::new(move || -> DelegateFuture { Box::pin(delegate()) }) }
	}
}
impl TokenResolver for DelegateTokenResolver {
	fn resolve_token(&self) -> ResolveFuture<'_> {
		let delegate = self.delegate.clone();

		Box::pin(async move {
			let token =
				(delegate)().await.map_err(|source| AuthError::DelegateFailed { source })?;

			if token.trim().is_empty() {
				return Err(AuthError::delegate("the token delegate returned an empty token"));
			}

			Ok(BearerToken::new(token))
		})
	}
}
impl Debug for DelegateTokenResolver {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("DelegateTokenResolver").finish_non_exhaustive()
	}
}
