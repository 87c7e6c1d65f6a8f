//! Secure bearer secret wrapper that redacts sensitive material.

// self
use crate::_prelude::*;

/// Redacted bearer secret wrapper keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BearerSecret(String);
impl BearerSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns an empty secret, the state of a cache before any successful fetch.
	pub fn empty() -> Self {
		Self(String::new())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns `true` if no token material has been stored yet.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl AsRef<str> for BearerSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Default for BearerSecret {
	fn default() -> Self {
		Self::empty()
	}
}
impl From<String> for BearerSecret {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}
impl From<&str> for BearerSecret {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}
impl Debug for BearerSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("BearerSecret").field(&"<redacted>").finish()
	}
}
impl Display for BearerSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
