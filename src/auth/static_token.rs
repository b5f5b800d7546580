//! Static-token resolver that echoes a pre-validated credential.

// self
use crate::{
	_prelude::*,
	auth::{BearerToken, ResolveFuture, TokenResolver},
	guard::{self, GuardError},
};

/// Resolver wrapping a fixed token validated at construction.
///
/// The guard runs once in [`new`](StaticTokenResolver::new); after that, resolution is
/// a pure echo with no I/O and cannot fail.
#[derive(Clone, Debug)]
pub struct StaticTokenResolver {
	token: BearerToken,
}
impl StaticTokenResolver {
	/// Validates and wraps the provided token.
	pub fn new(token: impl Into<String>) -> Result<Self, GuardError> {
		let token = guard::filled(token, "token")?;

		Ok(Self { token: BearerToken::new(token) })
	}
}
impl TokenResolver for StaticTokenResolver {
	fn resolve_token(&self) -> ResolveFuture<'_> {
		let token = self.token.clone();

		Box::pin(async move { Ok(token) })
	}
}
