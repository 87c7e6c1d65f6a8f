//! Auth-domain token models: redacted secrets and expiry-aware records.

pub mod record;
pub mod secret;

pub use record::*;
pub use secret::*;
