//! Precondition checks shared by every SDK component.
//!
//! The guard is the single reused validation gate: constructors route required
//! references through [`required`] and required strings through [`filled`] instead
//! of duplicating the checks inline. Both checks are pure and report the parameter
//! name as structured error context.

// self
use crate::_prelude::*;

/// Error raised when a guarded precondition fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum GuardError {
	/// A required reference is absent.
	#[error("Required argument `{name}` is missing.")]
	Missing {
		/// Parameter name reported to the caller.
		name: &'static str,
	},
	/// A required string is empty or all-whitespace.
	#[error("Argument `{name}` must not be empty or whitespace.")]
	Blank {
		/// Parameter name reported to the caller.
		name: &'static str,
	},
}
impl GuardError {
	/// Returns the parameter name the failure was reported against.
	pub const fn name(&self) -> &'static str {
		match self {
			GuardError::Missing { name } | GuardError::Blank { name } => name,
		}
	}
}

/// Unwraps a required optional value, reporting `name` when it is absent.
pub fn required<T>(value: Option<T>, name: &'static str) -> Result<T, GuardError> {
	value.ok_or(GuardError::Missing { name })
}

/// Validates that a required string is neither empty nor all-whitespace.
pub fn filled(value: impl Into<String>, name: &'static str) -> Result<String, GuardError> {
	let value = value.into();

	if value.trim().is_empty() {
		return Err(GuardError::Blank { name });
	}

	Ok(value)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn required_reports_the_parameter_name() {
		let err = required(None::<u8>, "resolver").expect_err("Absent value must be rejected.");

		assert_eq!(err, GuardError::Missing { name: "resolver" });
		assert_eq!(err.name(), "resolver");
		assert_eq!(required(Some(7_u8), "resolver"), Ok(7));
	}

	#[test]
	fn filled_rejects_blank_strings() {
		for blank in ["", " ", "\t", " \n "] {
			let err = filled(blank, "token").expect_err("Blank string must be rejected.");

			assert_eq!(err, GuardError::Blank { name: "token" });
			assert_eq!(err.name(), "token");
		}

		assert_eq!(filled("s.kvLq", "token").as_deref(), Ok("s.kvLq"));
	}

	#[test]
	fn guard_errors_render_the_name() {
		assert!(GuardError::Missing { name: "base_url" }.to_string().contains("`base_url`"));
		assert!(GuardError::Blank { name: "mount" }.to_string().contains("`mount`"));
	}
}
