//! Copy-on-decorate contracts that let downstream workflows attach cached tokens to their
//! request details without mutating them.

// self
use crate::auth::BearerSecret;

/// Contract for request detail types that carry a bearer token field.
///
/// [`TokenCache::decorate_with_auth`](crate::cache::TokenCache::decorate_with_auth) clones the
/// caller's details and replaces only the token field through this trait, so the original value
/// is never mutated; decoration always produces a new object.
pub trait BearerCarrier
where
	Self: Clone,
{
	/// Returns `self` with its bearer token field replaced.
	fn with_bearer_token(self, secret: BearerSecret) -> Self;
}
