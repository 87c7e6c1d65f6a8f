//! Source-side error taxonomy. The cache absorbs every variant; these types exist so
//! credential source implementations can report failures with structure.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`SourceError`] by default.
pub type Result<T, E = SourceError> = std::result::Result<T, E>;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Failure reported by a credential source (or imposed on one by the cache's timeout).
///
/// None of these variants ever reach [`TokenCache::token`](crate::cache::TokenCache::token)
/// callers; the cache logs them and keeps serving the previously cached secret.
#[derive(Debug, ThisError)]
pub enum SourceError {
	/// The enforced fetch bound elapsed before the source produced a credential.
	#[error("Credential source timed out after {timeout}.")]
	Timeout {
		/// Enforced bound that elapsed.
		timeout: Duration,
	},
	/// The source call itself failed.
	#[error("Credential source failed.")]
	Fetch {
		/// Source-specific failure.
		#[source]
		source: BoxError,
	},
	/// The source completed but returned no usable credential.
	#[error("Credential source returned no usable credential.")]
	Empty,
	/// Every source in a chain failed.
	#[error("All {attempts} chained credential sources failed.")]
	Exhausted {
		/// Number of sources that were tried.
		attempts: usize,
	},
}
impl SourceError {
	/// Wraps a source-specific failure inside [`SourceError::Fetch`].
	pub fn fetch(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Fetch { source: Box::new(src) }
	}
}
