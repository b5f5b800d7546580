//! String-backed enums exchanged with the server as lowercase wire names.

// self
use crate::_prelude::*;

/// Certificate output formats accepted and returned by certificate-issuing backends.
///
/// Encoded on the wire as lowercase names rather than ordinals, so values stay stable
/// across server schema changes. The zero value is an explicit unspecified sentinel;
/// it encodes as the empty string and never aliases a real format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateFormat {
	/// No format requested; the server applies its default.
	#[default]
	#[serde(rename = "")]
	Unspecified,
	/// DER-encoded binary output.
	Der,
	/// PEM-encoded text output.
	Pem,
	/// PEM bundle including the issuing chain.
	PemBundle,
}
impl CertificateFormat {
	/// Returns the lowercase wire name.
	pub const fn as_str(self) -> &'static str {
		match self {
			CertificateFormat::Unspecified => "",
			CertificateFormat::Der => "der",
			CertificateFormat::Pem => "pem",
			CertificateFormat::PemBundle => "pem_bundle",
		}
	}

	/// Returns `true` for the unspecified sentinel; used to omit the field on encode.
	pub const fn is_unspecified(&self) -> bool {
		matches!(self, CertificateFormat::Unspecified)
	}
}
impl Display for CertificateFormat {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
