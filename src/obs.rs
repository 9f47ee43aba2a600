//! Optional observability helpers for API calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `wealthsimple_api.call` with the `endpoint`
//!   (operation name) and `method` (HTTP verb actually sent) fields.
//! - Enable `metrics` to increment the `wealthsimple_api_call_total` counter for every
//!   attempt/success/application error/failure, labeled by `endpoint` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to the dispatcher.
	Attempt,
	/// JSON response with a `2xx` status.
	Success,
	/// JSON response with a non-`2xx` status.
	ApplicationError,
	/// Construction, transport, or parse failure propagated to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::ApplicationError => "application_error",
			CallOutcome::Failure => "failure",
		}
	}

	/// Classifies a dispatcher result.
	pub fn of<T>(result: &Result<T>, status: impl FnOnce(&T) -> u16) -> Self {
		match result {
			Ok(value) if (200..300).contains(&status(value)) => CallOutcome::Success,
			Ok(_) => CallOutcome::ApplicationError,
			Err(_) => CallOutcome::Failure,
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn outcomes_follow_status_classes() {
		let status = |code: &u16| *code;

		assert_eq!(CallOutcome::of(&Ok(201), status), CallOutcome::Success);
		assert_eq!(CallOutcome::of(&Ok(404), status), CallOutcome::ApplicationError);
		assert_eq!(
			CallOutcome::of(&Err(Error::Application { status: 500, body: Value::Null }), status),
			CallOutcome::Failure
		);
		assert_eq!(CallOutcome::ApplicationError.to_string(), "application_error");
	}
}
