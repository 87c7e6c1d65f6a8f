//! Optional observability helpers for cache refreshes.
//!
//! # Feature Flags
//!
//! - Enable `metrics` to increment the `bearer_cache_refresh_total` counter for every
//!   attempt/success/failure, labeled by `outcome`.
//!
//! The two structured log entries mandated for refreshes (info on start, error on failure) are
//! always emitted via `tracing` and are not feature-gated.

// self
use crate::_prelude::*;

/// Outcome labels recorded for each refresh attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RefreshOutcome {
	/// Entry to the refresh path.
	Attempt,
	/// A new token was committed to the cache.
	Success,
	/// The fetch failed and the cache kept its previous token.
	Failure,
}
impl RefreshOutcome {
	/// Returns a stable label suitable for metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RefreshOutcome::Attempt => "attempt",
			RefreshOutcome::Success => "success",
			RefreshOutcome::Failure => "failure",
		}
	}
}
impl Display for RefreshOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Records a refresh outcome via the global metrics recorder (when enabled).
pub fn record_refresh_outcome(outcome: RefreshOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("bearer_cache_refresh_total", "outcome" => outcome.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}
