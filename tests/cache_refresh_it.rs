// std
use std::{
	collections::VecDeque,
	future,
	sync::{
		Mutex,
		atomic::{AtomicUsize, Ordering},
	},
};
// self
use bearer_cache::{
	auth::TokenRecord,
	cache::TokenCache,
	error::{Result, SourceError},
	source::{CredentialSource, SourceFuture},
	time::{Duration, OffsetDateTime},
};

/// Source that replays a fixed script of results and counts its invocations.
struct ScriptedSource {
	calls: AtomicUsize,
	script: Mutex<VecDeque<Result<TokenRecord>>>,
}
impl ScriptedSource {
	fn new(script: impl IntoIterator<Item = Result<TokenRecord>>) -> Self {
		Self { calls: AtomicUsize::new(0), script: Mutex::new(script.into_iter().collect()) }
	}

	fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}
impl CredentialSource for ScriptedSource {
	fn fetch_token(&self, _scope: &str, _timeout: Duration) -> SourceFuture<'_, TokenRecord> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		let next = self
			.script
			.lock()
			.expect("Script mutex should never be poisoned.")
			.pop_front()
			.expect("Scripted source was invoked more often than the script allows.");

		Box::pin(async move { next })
	}
}

/// Source that never completes; only the cache's enforced timeout can unblock callers.
struct HangingSource;
impl CredentialSource for HangingSource {
	fn fetch_token(&self, _scope: &str, _timeout: Duration) -> SourceFuture<'_, TokenRecord> {
		Box::pin(future::pending())
	}
}

fn record(secret: &str, expires_in: Duration) -> TokenRecord {
	TokenRecord::new(secret, OffsetDateTime::now_utc() + expires_in)
}

fn offline() -> SourceError {
	SourceError::fetch(std::io::Error::other("identity provider offline"))
}

#[tokio::test]
async fn cold_start_fetches_exactly_once() {
	let cache =
		TokenCache::new(ScriptedSource::new([Ok(record("abc", Duration::hours(1)))]), "api/.default");

	assert_eq!(cache.token().await.expose(), "abc");
	assert_eq!(cache.token().await.expose(), "abc");
	assert_eq!(cache.metrics().attempts(), 1);
}

#[tokio::test]
async fn fresh_token_never_touches_the_source() {
	let source = ScriptedSource::new([]);
	let cache = TokenCache::new(source, "api/.default")
		.with_token(record("cached", Duration::hours(1)));

	assert_eq!(cache.token().await.expose(), "cached");
	assert_eq!(cache.metrics().attempts(), 0);
}

#[tokio::test]
async fn expiry_skew_boundary_triggers_refresh() {
	// One second inside the 15-minute skew: stale, must refresh.
	let cache = TokenCache::new(
		ScriptedSource::new([Ok(record("renewed", Duration::hours(1)))]),
		"api/.default",
	)
	.with_token(record("expiring", Duration::minutes(15) - Duration::SECOND));

	assert_eq!(cache.token().await.expose(), "renewed");
	assert_eq!(cache.metrics().attempts(), 1);

	// One second outside the skew: still fresh, no fetch.
	let cache = TokenCache::new(ScriptedSource::new([]), "api/.default")
		.with_token(record("surviving", Duration::minutes(15) + Duration::SECOND));

	assert_eq!(cache.token().await.expose(), "surviving");
	assert_eq!(cache.metrics().attempts(), 0);
}

#[tokio::test]
async fn failure_preserves_the_stale_token_and_retries_later() {
	let cache = TokenCache::new(
		ScriptedSource::new([Err(offline()), Ok(record("t-new", Duration::hours(1)))]),
		"api/.default",
	)
	.with_token(record("t-old", -Duration::hours(1)));

	// The failed refresh is absorbed; the stale value keeps serving.
	assert_eq!(cache.token().await.expose(), "t-old");
	assert_eq!(cache.metrics().failures(), 1);

	// The next call re-evaluates validity and attempts another fetch.
	assert_eq!(cache.token().await.expose(), "t-new");
	assert_eq!(cache.metrics().attempts(), 2);
	assert_eq!(cache.metrics().successes(), 1);
}

#[tokio::test]
async fn sequential_refreshes_serve_each_minted_token() {
	// The first token arrives already inside the skew window, so the second call must refresh.
	let source = ScriptedSource::new([
		Ok(record("abc", Duration::minutes(10))),
		Ok(record("xyz", Duration::hours(1))),
	]);
	let cache = TokenCache::new(source, "api/.default");

	assert_eq!(cache.token().await.expose(), "abc");
	assert_eq!(cache.token().await.expose(), "xyz");
	assert_eq!(cache.metrics().attempts(), 2);
}

#[tokio::test(start_paused = true)]
async fn hung_source_is_cut_off_by_the_enforced_timeout() {
	let started = tokio::time::Instant::now();
	let cache = TokenCache::new(HangingSource, "api/.default")
		.with_token(record("stale-but-available", -Duration::hours(1)));

	assert_eq!(cache.token().await.expose(), "stale-but-available");
	assert_eq!(cache.metrics().failures(), 1);
	assert!(started.elapsed() >= std::time::Duration::from_secs(10));
}
