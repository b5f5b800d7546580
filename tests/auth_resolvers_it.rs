// crates.io
use httpmock::prelude::*;
// self
use vault_sdk::{
	auth::{AuthFault, DelegateTokenResolver, StaticTokenResolver, TokenResolver},
	context::ClientContext,
	error::Error,
	transport::RequestMethod,
	url::Url,
};

fn build_context(server: &MockServer, resolver: std::sync::Arc<dyn TokenResolver>) -> ClientContext {
	ClientContext::builder()
		.base_url(Url::parse(&server.base_url()).expect("Mock base URL should parse."))
		.token_resolver(resolver)
		.reqwest_transport()
		.build()
		.expect("Test context should build successfully.")
}

#[tokio::test]
async fn static_resolver_echoes_for_every_request() {
	let resolver =
		StaticTokenResolver::new("s.static-it").expect("Token should pass the guard.");

	for _ in 0..2 {
		let token = resolver.resolve_token().await.expect("Static resolution cannot fail.");

		assert_eq!(token.expose(), "s.static-it");
	}
}

#[tokio::test]
async fn delegate_token_reaches_the_wire_unchanged() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/secret/app")
				.header("X-Vault-Token", "s.delegated-it");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"data\":{\"key\":\"value\"}}");
		})
		.await;
	let resolver = DelegateTokenResolver::new(|| async { Ok("s.delegated-it".to_owned()) });
	let context = build_context(&server, std::sync::Arc::new(resolver));
	let response = context
		.issue_authenticated_request("secret/app", RequestMethod::Get, None)
		.await
		.expect("Authenticated request should succeed.");

	assert!(response.is_some());

	mock.assert_async().await;
}

#[tokio::test]
async fn broken_delegate_fails_before_any_request() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/secret/app");
			then.status(200).body("{}");
		})
		.await;
	let resolver = DelegateTokenResolver::new(|| async { Ok(String::new()) });
	let context = build_context(&server, std::sync::Arc::new(resolver));
	let err = context
		.issue_authenticated_request("secret/app", RequestMethod::Get, None)
		.await
		.expect_err("Blank delegate token must fail resolution.");

	match err {
		Error::Auth(auth) => assert_eq!(auth.fault(), AuthFault::Delegate),
		other => panic!("Expected an auth error, got {other:?}."),
	}

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn resolution_happens_once_per_request_cycle() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/sys/health");
			then.status(200).body("{\"initialized\":true}");
		})
		.await;

	let calls = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
	let counter = calls.clone();
	let resolver = DelegateTokenResolver::new(move || {
		let counter = counter.clone();

		async move {
			counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);

			Ok("s.counted".to_owned())
		}
	});
	let context = build_context(&server, std::sync::Arc::new(resolver));

	for _ in 0..3 {
		context
			.issue_authenticated_request("sys/health", RequestMethod::Get, None)
			.await
			.expect("Health request should succeed.");
	}

	assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 3);
}
