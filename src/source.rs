//! The consumed credential-source capability and the implementations bundled with the crate.
//!
//! [`CredentialSource`] is the cache's only dependency on the outside world: "fetch a token for
//! this scope, possibly failing." Transport concerns (HTTP, IPC, SDK chains) live entirely
//! behind the trait. Implementations receive the fetch timeout as a hint, but the cache enforces
//! the same bound itself, so a hung source cannot stall callers.

pub mod chain;
pub mod fixed;

pub use chain::*;
pub use fixed::*;

// self
use crate::{_prelude::*, auth::TokenRecord};

/// Boxed future returned by [`CredentialSource::fetch_token`].
pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;

/// Capability that yields a bearer token and its expiry for a scope identifier.
///
/// Implementations must be `Send + Sync` so one source can serve every concurrent caller of a
/// shared cache. The `timeout` parameter is advisory: pass it through to provider SDKs that
/// accept a deadline, but do not rely on it being honored; the cache wraps the returned future
/// in its own hard bound.
pub trait CredentialSource
where
	Self: Send + Sync,
{
	/// Fetches a fresh token for `scope`, completing within `timeout` on a best-effort basis.
	fn fetch_token(&self, scope: &str, timeout: Duration) -> SourceFuture<'_, TokenRecord>;
}
impl<S> CredentialSource for Arc<S>
where
	S: ?Sized + CredentialSource,
{
	fn fetch_token(&self, scope: &str, timeout: Duration) -> SourceFuture<'_, TokenRecord> {
		(**self).fetch_token(scope, timeout)
	}
}
