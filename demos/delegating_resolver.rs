//! Demonstrates chaining a provider-specific resolver ahead of a generic one and resolving an
//! authorized client through the delegating resolver.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use time::OffsetDateTime;
// self
use oauth2_userinfo::{
	auth::{
		AccessToken, AuthorizedClient, ClientRegistration, PrincipalName, RegistrationId,
		ScopeSet, UserInfoEndpoint,
	},
	resolver::{
		DelegatingResolver, RegistrationScopedResolver, SharedResolver, UserInfoResolver,
		resolver_fn,
	},
	url::Url,
	user::UserProfile,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let github: SharedResolver<AuthorizedClient, UserProfile> =
		Arc::new(resolver_fn(|_: &AuthorizedClient| {
			let body = br#"{"login":"octocat","id":1}"#;

			Ok(Some(UserProfile::from_json_slice(body, "login")?))
		}));
	let github: SharedResolver<AuthorizedClient, UserProfile> =
		Arc::new(RegistrationScopedResolver::new([RegistrationId::new("github")?], github)?);
	let fallback: SharedResolver<AuthorizedClient, UserProfile> =
		Arc::new(resolver_fn(|client: &AuthorizedClient| {
			let name_attribute = client.user_info_endpoint()?.user_name_attribute()?;
			let body = br#"{"sub":"demo-user"}"#;

			Ok(Some(UserProfile::from_json_slice(body, name_attribute)?))
		}));
	let resolver = DelegatingResolver::new([github, fallback])?;
	let endpoint = UserInfoEndpoint::new(Url::parse("https://api.github.com/user")?)?;
	let registration = ClientRegistration::new(RegistrationId::new("github")?, "demo-client")
		.with_user_info(endpoint);
	let token = AccessToken::new("demo-access", OffsetDateTime::now_utc())
		.with_scopes(ScopeSet::new(["read:user"])?);
	let client = AuthorizedClient::new(registration, PrincipalName::new("demo")?, token);

	match resolver.resolve(&client).await? {
		Some(profile) => println!("Resolved user: {profile}."),
		None => println!("No resolver recognized the client."),
	}

	Ok(())
}
