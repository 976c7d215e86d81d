//! User-info resolver contracts and built-in combinators.
//!
//! [`UserInfoResolver`] is the single capability every identity loader implements: given an
//! authorized client context `C`, produce an identity `U`, decline with `Ok(None)`, or fail with
//! an [`AuthenticationError`]. The trait stays free of any HTTP client so downstream crates can
//! back it with whatever transport they already use.
//!
//! - [`DelegatingResolver`] tries an ordered list of resolvers and returns the first identity.
//! - [`FnResolver`] adapts a synchronous closure.
//! - [`RegistrationScopedResolver`] restricts a resolver to specific client registrations.

pub mod delegating;
pub mod func;
pub mod scoped;

pub use delegating::*;
pub use func::*;
pub use scoped::*;

// self
use crate::_prelude::*;

/// Outcome of a single resolution: an identity, a decline, or an authentication failure.
pub type ResolveResult<U> = Result<Option<U>, AuthenticationError>;

/// Boxed future returned by [`UserInfoResolver::resolve`].
pub type ResolveFuture<'a, U> = Pin<Box<dyn Future<Output = ResolveResult<U>> + 'a + Send>>;

/// Loads the end-user identity behind an authorized client.
///
/// Returning `Ok(None)` means "not mine" and lets composite resolvers move on; it is not a
/// failure. Implementations shared across tasks must tolerate concurrent calls.
pub trait UserInfoResolver<C, U>
where
	Self: Send + Sync,
{
	/// Resolves the identity for `context`.
	fn resolve<'a>(&'a self, context: &'a C) -> ResolveFuture<'a, U>;
}
impl<C, U, R> UserInfoResolver<C, U> for Arc<R>
where
	R: ?Sized + UserInfoResolver<C, U>,
{
	fn resolve<'a>(&'a self, context: &'a C) -> ResolveFuture<'a, U> {
		(**self).resolve(context)
	}
}
impl<C, U, R> UserInfoResolver<C, U> for Box<R>
where
	R: ?Sized + UserInfoResolver<C, U>,
{
	fn resolve<'a>(&'a self, context: &'a C) -> ResolveFuture<'a, U> {
		(**self).resolve(context)
	}
}

/// Shared, type-erased resolver handle as stored by composite resolvers.
pub type SharedResolver<C, U> = Arc<dyn UserInfoResolver<C, U>>;
