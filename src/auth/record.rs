//! Cached token record with expiry-skewed freshness helpers.

// self
use crate::{_prelude::*, auth::secret::BearerSecret};

/// Safety margin subtracted from a token's reported expiry so renewal never races
/// provider-side expiry. Fixed by policy, not configurable.
pub const EXPIRY_SKEW: Duration = Duration::minutes(15);

/// Bearer token record pairing the secret with its absolute expiry instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
	/// Bearer secret; callers must avoid logging it.
	pub secret: BearerSecret,
	/// Expiry instant as reported by the credential source.
	pub expires_at: OffsetDateTime,
}
impl TokenRecord {
	/// Creates a record from a secret and its provider-reported expiry.
	pub fn new(secret: impl Into<BearerSecret>, expires_at: OffsetDateTime) -> Self {
		Self { secret: secret.into(), expires_at }
	}

	/// Returns `true` if the record is still usable at the provided instant, applying
	/// [`EXPIRY_SKEW`] so the token is renewed well before the provider rejects it.
	pub fn is_fresh_at(&self, instant: OffsetDateTime) -> bool {
		instant <= self.expires_at - EXPIRY_SKEW
	}

	/// Convenience helper that checks freshness against the current UTC instant.
	pub fn is_fresh(&self) -> bool {
		self.is_fresh_at(OffsetDateTime::now_utc())
	}
}
impl Default for TokenRecord {
	// Empty secret at the epoch: the very first cache lookup always refreshes.
	fn default() -> Self {
		Self { secret: BearerSecret::empty(), expires_at: OffsetDateTime::UNIX_EPOCH }
	}
}
