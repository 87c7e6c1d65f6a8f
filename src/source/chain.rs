//! Ordered fallback over multiple credential sources, first success wins.

// self
use crate::{
	_prelude::*,
	auth::TokenRecord,
	source::{CredentialSource, SourceFuture},
};

/// Credential source that tries a list of sources in order and serves the first success.
///
/// This mirrors how platform credential provider chains resolve: each configured provider is
/// probed in turn until one yields a token. A link's failure is logged at debug level and the
/// chain moves on; only when every link fails does the chain itself fail with
/// [`SourceError::Exhausted`].
#[derive(Clone, Default)]
pub struct CredentialChain(Vec<Arc<dyn CredentialSource>>);
impl CredentialChain {
	/// Creates an empty chain; an empty chain always fails with zero attempts.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a source to the end of the chain.
	pub fn with_source<S>(mut self, source: S) -> Self
	where
		S: 'static + CredentialSource,
	{
		self.0.push(Arc::new(source));

		self
	}

	/// Returns the number of links in the chain.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if the chain has no links.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl CredentialSource for CredentialChain {
	fn fetch_token(&self, scope: &str, timeout: Duration) -> SourceFuture<'_, TokenRecord> {
		let scope = scope.to_owned();

		Box::pin(async move {
			for (position, source) in self.0.iter().enumerate() {
				match source.fetch_token(&scope, timeout).await {
					Ok(record) => return Ok(record),
					Err(err) => {
						tracing::debug!(
							scope = %scope,
							position,
							error = %err,
							"Chained credential source failed; trying the next link.",
						);
					},
				}
			}

			Err(SourceError::Exhausted { attempts: self.0.len() })
		})
	}
}
impl Debug for CredentialChain {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("CredentialChain").field(&self.0.len()).finish()
	}
}
