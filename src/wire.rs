//! Wire-format adapters reconciling the server's loose JSON typing with strict client types.
//!
//! `stringly` tolerates fields the server represents as either a JSON number or a JSON
//! string across versions; `format` carries string-backed enums encoded as lowercase
//! names. Both adapters are pure, stateless, and invoked only at the serialization
//! boundary; business logic never coerces types itself.

pub mod format;
/// Serde hooks for number-or-string fields; used via `#[serde(with = "wire::stringly")]`.
pub mod stringly;

pub use format::*;
pub use stringly::decode_stringly;

// self
use crate::_prelude::*;

/// Error raised when a wire payload violates an adapter or response contract.
#[derive(Debug, ThisError)]
pub enum WireError {
	/// Field is neither a JSON number nor a JSON string.
	#[error("Field `{field}` must be a JSON number or a JSON string.")]
	MalformedField {
		/// Offending field name.
		field: String,
	},
	/// Response body was valid JSON but did not match the expected shape.
	#[error("Response payload is malformed.")]
	ResponseParse {
		/// Structured parsing failure with the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
	/// Request body could not be encoded as JSON.
	#[error("Request body could not be encoded as JSON.")]
	BodyEncode {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// Server returned an empty body where a payload was required.
	#[error("Server returned an empty response for `{path}`.")]
	EmptyResponse {
		/// Request path that produced the empty response.
		path: String,
	},
}

/// Generic response envelope wrapping backend payloads.
///
/// The server attaches lease bookkeeping to most responses; providers unwrap
/// [`data`](Envelope::data) and surface only the typed payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
	/// Server-assigned request identifier.
	#[serde(default)]
	pub request_id: Option<String>,
	/// Lease identifier, when the payload is leased.
	#[serde(default)]
	pub lease_id: Option<String>,
	/// Lease duration in seconds.
	#[serde(default)]
	pub lease_duration: u64,
	/// Whether the lease is renewable.
	#[serde(default)]
	pub renewable: bool,
	/// Typed backend payload.
	pub data: T,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn envelope_tolerates_missing_bookkeeping() {
		let envelope: Envelope<BTreeMap<String, String>> =
			serde_json::from_str("{\"data\":{\"key\":\"value\"}}")
				.expect("Envelope should deserialize without lease fields.");

		assert_eq!(envelope.request_id, None);
		assert_eq!(envelope.lease_duration, 0);
		assert_eq!(envelope.data.get("key").map(String::as_str), Some("value"));
	}

	#[test]
	fn envelope_reads_lease_bookkeeping() {
		let payload = "{\"request_id\":\"r-1\",\"lease_id\":\"l-1\",\"lease_duration\":2764800,\
		               \"renewable\":true,\"data\":{}}";
		let envelope: Envelope<BTreeMap<String, String>> =
			serde_json::from_str(payload).expect("Envelope should deserialize with lease fields.");

		assert_eq!(envelope.request_id.as_deref(), Some("r-1"));
		assert_eq!(envelope.lease_duration, 2_764_800);
		assert!(envelope.renewable);
	}
}
