//! Closure adapter for synchronous resolvers.

// std
use std::future;
// self
use crate::{
	_prelude::*,
	resolver::{ResolveFuture, ResolveResult, UserInfoResolver},
};

/// Resolver backed by a synchronous function; see [`resolver_fn`].
#[derive(Clone)]
pub struct FnResolver<F>(F);
impl<F> Debug for FnResolver<F> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("FnResolver(..)")
	}
}
impl<C, U, F> UserInfoResolver<C, U> for FnResolver<F>
where
	U: 'static + Send,
	F: Fn(&C) -> ResolveResult<U> + Send + Sync,
{
	fn resolve<'a>(&'a self, context: &'a C) -> ResolveFuture<'a, U> {
		Box::pin(future::ready((self.0)(context)))
	}
}

/// Wraps `f` so it can act as a [`UserInfoResolver`].
///
/// Handy for lookups that never leave the process, such as static user tables or claims already
/// carried by the context.
pub fn resolver_fn<C, U, F>(f: F) -> FnResolver<F>
where
	F: Fn(&C) -> ResolveResult<U> + Send + Sync,
{
	FnResolver(f)
}
