//! PKI secrets engine (`pki`): certificate issuance from a mounted CA.

// self
use crate::{
	_prelude::*,
	backend::TypedBackend,
	context::ClientContext,
	guard::{self, GuardError},
	wire::{CertificateFormat, Envelope},
};

/// PKI provider bound to the `pki` wire type.
#[derive(Clone, Debug)]
pub struct PkiEngine {
	context: Arc<ClientContext>,
	mount: String,
}
impl PkiEngine {
	/// Creates a provider on the default `pki` mount.
	pub fn new(context: Arc<ClientContext>) -> Self {
		Self { context, mount: Self::WIRE_TYPE.to_owned() }
	}

	/// Overrides the mount path.
	pub fn with_mount(mut self, mount: impl Into<String>) -> Result<Self, GuardError> {
		self.mount = guard::filled(mount, "mount")?;

		Ok(self)
	}

	/// Issues a certificate from the named role.
	pub async fn issue_certificate(
		&self,
		role: &str,
		request: &IssueCertificateRequest,
	) -> Result<IssuedCertificate> {
		let role = guard::filled(role, "role")?;
		let envelope: Envelope<IssuedCertificate> = self
			.context
			.write_typed(&format!("{}/issue/{}", self.mount, role), request)
			.await?;

		Ok(envelope.data)
	}
}
impl TypedBackend for PkiEngine {
	type Config = IssueCertificateRequest;

	const WIRE_TYPE: &'static str = "pki";

	fn context(&self) -> &Arc<ClientContext> {
		&self.context
	}
}

/// Certificate issuance request payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCertificateRequest {
	/// Requested common name.
	pub common_name: String,
	/// Requested TTL, e.g. `"72h"`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ttl: Option<String>,
	/// Output format; the unspecified sentinel is omitted so the server applies its default.
	#[serde(default, skip_serializing_if = "CertificateFormat::is_unspecified")]
	pub format: CertificateFormat,
}

/// Certificate material returned by the issue endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedCertificate {
	/// Issued certificate payload.
	pub certificate: String,
	/// Issuing CA certificate.
	#[serde(default)]
	pub issuing_ca: String,
	/// Private key material.
	#[serde(default)]
	pub private_key: String,
	/// Certificate serial number.
	#[serde(default)]
	pub serial_number: String,
	/// Expiration as a UNIX timestamp; some server versions emit it as a JSON string.
	#[serde(default, with = "crate::wire::stringly")]
	pub expiration: String,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::_preludet::build_stub_context;

	#[tokio::test]
	async fn issue_sends_the_lowercase_format_and_decodes_loose_expiration() {
		let (context, transport) = build_stub_context("s.pki");
		let pki = PkiEngine::new(context);

		transport.enqueue_json(
			200,
			serde_json::json!({
				"data": {
					"certificate": "-----BEGIN CERTIFICATE-----",
					"serial_number": "39:dd:2e",
					"expiration": 1_853_345_100_u64
				}
			}),
		);

		let request = IssueCertificateRequest {
			common_name: "svc.example.com".to_owned(),
			ttl: Some("72h".to_owned()),
			format: CertificateFormat::Pem,
		};
		let issued = pki
			.issue_certificate("web", &request)
			.await
			.expect("Scripted issuance should succeed.");

		assert_eq!(issued.expiration, "1853345100");

		let requests = transport.requests();

		assert_eq!(requests[0].url.path(), "/v1/pki/issue/web");

		let body = requests[0].body.as_ref().expect("Issue should send a body.");

		assert_eq!(body["format"], serde_json::json!("pem"));
	}

	#[tokio::test]
	async fn unspecified_format_is_omitted_from_the_body() {
		let (context, transport) = build_stub_context("s.pki");
		let pki = PkiEngine::new(context);

		transport.enqueue_json(
			200,
			serde_json::json!({ "data": { "certificate": "pem", "expiration": "0" } }),
		);

		let request =
			IssueCertificateRequest { common_name: "svc".to_owned(), ..Default::default() };

		pki.issue_certificate("web", &request).await.expect("Scripted issuance should succeed.");

		let body = transport.requests()[0].body.clone().expect("Issue should send a body.");

		assert!(body.get("format").is_none());
	}
}
