//! First-match delegation across an ordered list of resolvers.

// self
use crate::{
	_prelude::*,
	error::ConfigError,
	obs::{self, ResolveOutcome, ResolveSpan},
	resolver::{ResolveFuture, SharedResolver, UserInfoResolver},
};

/// Resolver that consults its delegates in order and returns the first identity produced.
///
/// - Delegates run sequentially, in construction order, on every call.
/// - The first `Ok(Some(_))` wins; later delegates are not invoked.
/// - The first `Err(_)` is returned as-is; later delegates are not invoked.
/// - When every delegate declines, the call declines with `Ok(None)`.
///
/// The delegate list is copied into an owned slice at construction and never changes
/// afterwards. The resolver is itself a [`UserInfoResolver`], so it can be nested inside
/// another delegating resolver.
pub struct DelegatingResolver<C, U> {
	delegates: Box<[SharedResolver<C, U>]>,
}
impl<C, U> DelegatingResolver<C, U> {
	/// Captures the delegates in iteration order.
	///
	/// Fails with [`ConfigError::NoDelegates`] when the iterator is empty.
	pub fn new<I>(delegates: I) -> Result<Self>
	where
		I: IntoIterator<Item = SharedResolver<C, U>>,
	{
		let delegates = delegates.into_iter().collect::<Box<[_]>>();

		if delegates.is_empty() {
			return Err(ConfigError::NoDelegates.into());
		}

		Ok(Self { delegates })
	}

	/// Number of delegates consulted per call.
	pub fn delegate_count(&self) -> usize {
		self.delegates.len()
	}
}
impl<C, U> Debug for DelegatingResolver<C, U> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("DelegatingResolver").field("delegates", &self.delegates.len()).finish()
	}
}
impl<C, U> UserInfoResolver<C, U> for DelegatingResolver<C, U>
where
	C: Sync,
	U: 'static + Send,
{
	fn resolve<'a>(&'a self, context: &'a C) -> ResolveFuture<'a, U> {
		let span = ResolveSpan::new(self.delegates.len());

		Box::pin(span.instrument(async move {
			obs::record_resolve_outcome(ResolveOutcome::Attempt);

			for (index, delegate) in self.delegates.iter().enumerate() {
				match delegate.resolve(context).await {
					Ok(Some(user)) => {
						obs::trace_delegate(index, ResolveOutcome::Resolved);
						obs::record_resolve_outcome(ResolveOutcome::Resolved);

						return Ok(Some(user));
					},
					Ok(None) => obs::trace_delegate(index, ResolveOutcome::Unresolved),
					Err(e) => {
						obs::trace_delegate(index, ResolveOutcome::Failure);
						obs::record_resolve_outcome(ResolveOutcome::Failure);

						return Err(e);
					},
				}
			}

			obs::record_resolve_outcome(ResolveOutcome::Unresolved);

			Ok(None)
		}))
	}
}
