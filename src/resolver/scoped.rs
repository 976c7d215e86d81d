//! Resolvers restricted to a subset of client registrations.

// std
use std::future;
// self
use crate::{
	_prelude::*,
	auth::{AuthorizedClient, RegistrationId},
	error::ConfigError,
	resolver::{ResolveFuture, SharedResolver, UserInfoResolver},
};

/// Routes only clients of the configured registrations to the inner resolver.
///
/// Clients of any other registration get `Ok(None)` without touching the inner resolver, which
/// lets a [`DelegatingResolver`](crate::resolver::DelegatingResolver) fall through to the next
/// candidate. Typical use is a provider-specific profile mapping (e.g. GitHub's `login`) placed
/// ahead of a generic OIDC resolver.
pub struct RegistrationScopedResolver<U> {
	registrations: BTreeSet<RegistrationId>,
	inner: SharedResolver<AuthorizedClient, U>,
}
impl<U> RegistrationScopedResolver<U> {
	/// Scopes `inner` to the given registrations.
	///
	/// Fails with [`ConfigError::NoRegistrations`] when no registration is supplied.
	pub fn new<I>(registrations: I, inner: SharedResolver<AuthorizedClient, U>) -> Result<Self>
	where
		I: IntoIterator<Item = RegistrationId>,
	{
		let registrations = registrations.into_iter().collect::<BTreeSet<_>>();

		if registrations.is_empty() {
			return Err(ConfigError::NoRegistrations.into());
		}

		Ok(Self { registrations, inner })
	}

	/// Returns true if clients of `registration` reach the inner resolver.
	pub fn applies_to(&self, registration: &RegistrationId) -> bool {
		self.registrations.contains(registration)
	}
}
impl<U> Debug for RegistrationScopedResolver<U> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RegistrationScopedResolver")
			.field("registrations", &self.registrations)
			.finish_non_exhaustive()
	}
}
impl<U> UserInfoResolver<AuthorizedClient, U> for RegistrationScopedResolver<U>
where
	U: 'static + Send,
{
	fn resolve<'a>(&'a self, client: &'a AuthorizedClient) -> ResolveFuture<'a, U> {
		if self.applies_to(client.registration_id()) {
			self.inner.resolve(client)
		} else {
			Box::pin(future::ready(Ok(None)))
		}
	}
}
