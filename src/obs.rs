//! Optional observability helpers for user-info resolution.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to run every delegating resolution inside an `oauth2_userinfo.resolve` span
//!   carrying the `delegates` count, with per-delegate debug events.
//! - Enable `metrics` to increment the `oauth2_userinfo_resolve_total` counter for every
//!   attempt/outcome, labeled by `outcome`.

mod metrics;
mod tracing;

pub use self::{metrics::*, tracing::*};

// self
use crate::_prelude::*;

/// Outcome labels recorded for each resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolveOutcome {
	/// Entry to a resolver.
	Attempt,
	/// A delegate produced an identity.
	Resolved,
	/// Every delegate declined.
	Unresolved,
	/// A delegate failed and the error was propagated.
	Failure,
}
impl ResolveOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResolveOutcome::Attempt => "attempt",
			ResolveOutcome::Resolved => "resolved",
			ResolveOutcome::Unresolved => "unresolved",
			ResolveOutcome::Failure => "failure",
		}
	}
}
impl Display for ResolveOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
