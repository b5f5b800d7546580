//! Strongly-typed async client SDK for secrets-management servers: pluggable token resolution,
//! type-discriminated backend providers, and transport-aware observability in one crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod backend;
pub mod context;
pub mod error;
pub mod guard;
pub mod obs;
pub mod sys;
pub mod transport;
pub mod wire;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::{StaticTokenResolver, TokenResolver},
		context::ClientContext,
		transport::StubTransport,
	};
	#[cfg(feature = "reqwest")] use crate::transport::ReqwestTransport;

	/// Builds a context wired to the bundled reqwest transport for mock-server tests.
	#[cfg(feature = "reqwest")]
	pub fn build_reqwest_test_context(base_url: &str, token: &str) -> Arc<ClientContext> {
		let resolver: Arc<dyn TokenResolver> =
			Arc::new(StaticTokenResolver::new(token).expect("Test token should pass the guard."));
		let context = ClientContext::builder()
			.base_url(Url::parse(base_url).expect("Test base URL should parse successfully."))
			.token_resolver(resolver)
			.transport(Arc::new(ReqwestTransport::default()))
			.build()
			.expect("Test context should build successfully.");

		Arc::new(context)
	}

	/// Builds a context backed by a scripted [`StubTransport`], returning both halves.
	pub fn build_stub_context(token: &str) -> (Arc<ClientContext>, Arc<StubTransport>) {
		let transport = Arc::new(StubTransport::default());
		let resolver: Arc<dyn TokenResolver> =
			Arc::new(StaticTokenResolver::new(token).expect("Test token should pass the guard."));
		let context = ClientContext::builder()
			.base_url(
				Url::parse("https://secrets.test:8200")
					.expect("Stub base URL should parse successfully."),
			)
			.token_resolver(resolver)
			.transport(transport.clone())
			.build()
			.expect("Stub context should build successfully.");

		(Arc::new(context), transport)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use httpmock as _;
