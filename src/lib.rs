//! Single-flight bearer token cache—expiry-skewed freshness checks, coalesced refreshes, and
//! stale-token fallback in one crate built for availability.
//!
//! The crate centers on [`cache::TokenCache`], which lazily pulls a short-lived bearer token from
//! a caller-supplied [`source::CredentialSource`], caches it until a fixed safety margin before
//! its expiry, and funnels every concurrent refresh into one upstream fetch. Refresh failures are
//! absorbed: callers keep receiving the last known token instead of an error, because a stale
//! credential beats an unavailable one on a background auth-decoration path.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod cache;
pub mod error;
pub mod ext;
pub mod obs;
pub mod source;

pub use time;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::Mutex;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};

	pub use crate::error::{Result, SourceError};
}
