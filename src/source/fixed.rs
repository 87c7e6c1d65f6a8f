//! Credential source that serves a preconfigured record, for local development and tests.

// self
use crate::{
	_prelude::*,
	auth::TokenRecord,
	source::{CredentialSource, SourceFuture},
};

/// Source that hands out clones of one fixed [`TokenRecord`].
///
/// Useful as the tail of a [`CredentialChain`](crate::source::CredentialChain) fallback or as a
/// stand-in source in tests and demos; it never fails and ignores the scope.
#[derive(Clone, Debug)]
pub struct FixedTokenSource(TokenRecord);
impl FixedTokenSource {
	/// Wraps the record this source will keep serving.
	pub fn new(record: TokenRecord) -> Self {
		Self(record)
	}
}
impl CredentialSource for FixedTokenSource {
	fn fetch_token(&self, _scope: &str, _timeout: Duration) -> SourceFuture<'_, TokenRecord> {
		let record = self.0.clone();

		Box::pin(async move { Ok(record) })
	}
}
