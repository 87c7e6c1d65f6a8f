//! Expiry-aware token cache with singleflight refresh coalescing.
//!
//! [`TokenCache::token`] serves the cached bearer secret while it is fresh, and otherwise funnels
//! every concurrent caller into a single upstream fetch. Each request that finds the token stale
//! records the current refresh generation, queues on a refresh guard, and skips its own fetch
//! when the generation advanced while it waited, so all callers that observed "refresh in
//! flight" return the committed outcome of that one fetch. A failed fetch is logged
//! and absorbed: the cache keeps its previous (possibly empty or expired) secret and the next
//! fresh caller simply tries again.

mod metrics;

pub use metrics::RefreshMetrics;

// self
use crate::{
	_prelude::*,
	auth::{BearerSecret, TokenRecord},
	ext::BearerCarrier,
	obs::{self, RefreshOutcome},
	source::CredentialSource,
};

/// Hard bound on a single upstream fetch. The same duration is handed to the credential source
/// as a hint, but enforcement happens here so a hung provider cannot stall callers.
pub const FETCH_TIMEOUT: Duration = Duration::seconds(10);

#[derive(Debug, Default)]
struct CacheState {
	record: TokenRecord,
	// Bumped once per completed refresh, success or failure. Callers compare against the value
	// they read before queueing to tell "someone refreshed while I waited" from "my turn".
	generation: u64,
}

/// Lazily refreshing bearer token cache over a caller-supplied credential source.
///
/// The cache owns the current [`TokenRecord`] and the refresh state; both are mutated only under
/// its own locks. The cache is not `Clone`; share one instance behind an [`Arc`].
pub struct TokenCache<S>
where
	S: ?Sized + CredentialSource,
{
	scope: String,
	state: Mutex<CacheState>,
	refresh_guard: AsyncMutex<()>,
	refresh_metrics: RefreshMetrics,
	source: Arc<S>,
}
impl<S> TokenCache<S>
where
	S: ?Sized + CredentialSource,
{
	/// Creates a cold cache for the provided source and scope identifier.
	///
	/// The scope is fixed for the cache's lifetime and passed verbatim to every fetch. A cold
	/// cache holds an empty secret that expired at the epoch, so the first call to
	/// [`TokenCache::token`] always triggers a fetch.
	pub fn new(source: impl Into<Arc<S>>, scope: impl Into<String>) -> Self {
		Self {
			scope: scope.into(),
			state: Mutex::new(CacheState::default()),
			refresh_guard: AsyncMutex::new(()),
			refresh_metrics: RefreshMetrics::default(),
			source: source.into(),
		}
	}

	/// Primes the cache with an existing record (warm starts, tests).
	pub fn with_token(self, record: TokenRecord) -> Self {
		self.state.lock().record = record;

		self
	}

	/// Returns the scope identifier this cache fetches tokens for.
	pub fn scope(&self) -> &str {
		&self.scope
	}

	/// Returns the refresh counters for this cache instance.
	pub fn metrics(&self) -> &RefreshMetrics {
		&self.refresh_metrics
	}

	/// Returns a currently valid bearer secret, refreshing only when necessary.
	///
	/// Never fails: when the upstream fetch errors out (or times out), the previously cached
	/// secret is returned instead, stale or even empty on a cold cache. Concurrent callers
	/// during a refresh share one upstream fetch and observe its committed outcome.
	pub async fn token(&self) -> BearerSecret {
		let generation = {
			let state = self.state.lock();

			if state.record.is_fresh() {
				return state.record.secret.clone();
			}

			state.generation
		};
		let _refresh = self.refresh_guard.lock().await;

		{
			let state = self.state.lock();

			// A refresh completed while this caller waited on the guard; its outcome,
			// fresh token or preserved stale one, stands for the whole cohort.
			if state.generation != generation {
				return state.record.secret.clone();
			}
		}

		self.refresh().await
	}

	/// Returns a copy of `details` with its bearer token field set to [`TokenCache::token`].
	///
	/// The input is never mutated; decoration always produces a new value.
	pub async fn decorate_with_auth<T>(&self, details: &T) -> T
	where
		T: BearerCarrier,
	{
		details.clone().with_bearer_token(self.token().await)
	}

	// Owns the in-flight refresh: the caller must hold `refresh_guard`.
	async fn refresh(&self) -> BearerSecret {
		self.refresh_metrics.record_attempt();
		obs::record_refresh_outcome(RefreshOutcome::Attempt);
		tracing::info!(scope = %self.scope, "Fetching a new bearer token.");

		let fetch = self.source.fetch_token(&self.scope, FETCH_TIMEOUT);
		let result = match tokio::time::timeout(FETCH_TIMEOUT.unsigned_abs(), fetch).await {
			Ok(result) => result,
			Err(_) => Err(SourceError::Timeout { timeout: FETCH_TIMEOUT }),
		}
		.and_then(|record| {
			if record.secret.is_empty() { Err(SourceError::Empty) } else { Ok(record) }
		});
		let mut state = self.state.lock();

		match result {
			Ok(record) => {
				self.refresh_metrics.record_success();
				obs::record_refresh_outcome(RefreshOutcome::Success);

				state.record = record;
			},
			Err(err) => {
				self.refresh_metrics.record_failure();
				obs::record_refresh_outcome(RefreshOutcome::Failure);
				tracing::error!(
					scope = %self.scope,
					error = %err,
					"Unable to fetch a bearer token; the cached one will be reused.",
				);
			},
		}

		state.generation += 1;

		state.record.secret.clone()
	}
}
impl<S> Debug for TokenCache<S>
where
	S: ?Sized + CredentialSource,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenCache")
			.field("scope", &self.scope)
			.field("refresh_metrics", &self.refresh_metrics)
			.finish_non_exhaustive()
	}
}
