// self
use crate::{obs::RequestOutcome, transport::RequestMethod};

/// Records a request outcome via the global metrics recorder (when enabled).
pub fn record_request_outcome(method: RequestMethod, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"vault_sdk_request_total",
			"method" => method.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (method, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_request_outcome_noop_without_metrics() {
		record_request_outcome(RequestMethod::Get, RequestOutcome::Failure);
	}
}
