// std
use std::sync::Arc;
// crates.io
use parking_lot::Mutex;
use time::macros;
// self
use oauth2_userinfo::{
	auth::{
		AccessToken, AuthorizedClient, ClientRegistration, PrincipalName, RegistrationId,
		ScopeSet, UserInfoEndpoint,
	},
	error::AuthenticationError,
	resolver::{
		DelegatingResolver, RegistrationScopedResolver, ResolveResult, SharedResolver,
		UserInfoResolver, resolver_fn,
	},
	url::Url,
	user::UserProfile,
};

const GITHUB_BODY: &[u8] = br#"{"login":"octocat","id":1,"name":"The Octocat"}"#;
const OIDC_BODY: &[u8] = br#"{"sub":"248289761001","email":"jane@example.com"}"#;

fn endpoint(uri: &str, name_attribute: Option<&str>) -> UserInfoEndpoint {
	let endpoint = UserInfoEndpoint::new(Url::parse(uri).expect("Endpoint fixture should parse."))
		.expect("Endpoint fixture should be secure.");

	match name_attribute {
		Some(attribute) => endpoint.with_name_attribute(attribute),
		None => endpoint,
	}
}

fn client(registration: &str, user_info: Option<UserInfoEndpoint>) -> AuthorizedClient {
	let mut registration = ClientRegistration::new(
		RegistrationId::new(registration).expect("Registration fixture should be valid."),
		format!("{registration}-client"),
	);

	registration.user_info = user_info;

	let token = AccessToken::new("access", macros::datetime!(2025-11-10 12:00 UTC))
		.with_scopes(ScopeSet::new(["openid", "profile"]).expect("Scopes should be valid."))
		.expires_in(time::Duration::hours(1));

	AuthorizedClient::new(
		registration,
		PrincipalName::new("jane").expect("Principal fixture should be valid."),
		token,
	)
}

/// Stands in for an HTTP user-info call by serving canned bodies keyed by endpoint host.
fn fetch_body(client: &AuthorizedClient) -> Result<&'static [u8], AuthenticationError> {
	let endpoint = client.user_info_endpoint()?;

	match endpoint.uri.host_str() {
		Some("api.github.com") => Ok(GITHUB_BODY),
		Some("idp.example.com") => Ok(OIDC_BODY),
		_ => Err(AuthenticationError::new(AuthenticationError::INVALID_USER_INFO_RESPONSE)),
	}
}

fn load_profile(client: &AuthorizedClient) -> ResolveResult<UserProfile> {
	let body = fetch_body(client)?;
	let name_attribute = client.user_info_endpoint()?.user_name_attribute()?;
	let profile = UserProfile::from_json_slice(body, name_attribute)?
		.with_scope_authorities(&client.access_token.scopes);

	Ok(Some(profile))
}

fn build_resolver(
	log: &Arc<Mutex<Vec<&'static str>>>,
) -> DelegatingResolver<AuthorizedClient, UserProfile> {
	let github_log = log.clone();
	let github: SharedResolver<AuthorizedClient, UserProfile> =
		Arc::new(resolver_fn(move |client: &AuthorizedClient| {
			github_log.lock().push("github");

			let profile = UserProfile::from_json_slice(fetch_body(client)?, "login")?
				.with_authorities(["ROLE_DEVELOPER"]);

			Ok(Some(profile))
		}));
	let github = Arc::new(
		RegistrationScopedResolver::new(
			[RegistrationId::new("github").expect("Registration fixture should be valid.")],
			github,
		)
		.expect("Scoped resolver should build."),
	);
	let generic_log = log.clone();
	let generic: SharedResolver<AuthorizedClient, UserProfile> =
		Arc::new(resolver_fn(move |client: &AuthorizedClient| {
			generic_log.lock().push("generic");

			load_profile(client)
		}));

	DelegatingResolver::new([github as SharedResolver<_, _>, generic])
		.expect("Delegates should be accepted.")
}

#[tokio::test]
async fn provider_specific_resolver_handles_its_registration() {
	let log = Arc::new(Mutex::new(Vec::new()));
	let resolver = build_resolver(&log);
	let client = client("github", Some(endpoint("https://api.github.com/user", None)));
	let profile = resolver
		.resolve(&client)
		.await
		.expect("GitHub resolution should succeed.")
		.expect("GitHub resolver should produce a profile.");

	assert_eq!(profile.name(), "octocat");
	assert!(profile.has_authority("ROLE_DEVELOPER"));
	assert_eq!(*log.lock(), ["github"]);
}

#[tokio::test]
async fn other_registrations_fall_through_to_generic_resolver() {
	let log = Arc::new(Mutex::new(Vec::new()));
	let resolver = build_resolver(&log);
	let client = client("corp", Some(endpoint("https://idp.example.com/userinfo", Some("sub"))));
	let profile = resolver
		.resolve(&client)
		.await
		.expect("Generic resolution should succeed.")
		.expect("Generic resolver should produce a profile.");

	assert_eq!(profile.name(), "248289761001");
	assert_eq!(
		profile.authorities().iter().map(String::as_str).collect::<Vec<_>>(),
		["ROLE_USER", "SCOPE_openid", "SCOPE_profile"]
	);
	assert_eq!(*log.lock(), ["generic"]);
}

#[tokio::test]
async fn configuration_gaps_surface_as_authentication_errors() {
	let log = Arc::new(Mutex::new(Vec::new()));
	let resolver = build_resolver(&log);
	let err = resolver
		.resolve(&client("corp", None))
		.await
		.expect_err("Missing user-info URI must fail.");

	assert_eq!(err.code, AuthenticationError::MISSING_USER_INFO_URI);

	let err = resolver
		.resolve(&client("corp", Some(endpoint("https://idp.example.com/userinfo", None))))
		.await
		.expect_err("Missing name attribute must fail.");

	assert_eq!(err.code, AuthenticationError::MISSING_USER_NAME_ATTRIBUTE);
}

#[tokio::test]
async fn provider_errors_stop_the_chain() {
	let log = Arc::new(Mutex::new(Vec::new()));
	let resolver = build_resolver(&log);
	let client = client("github", Some(endpoint("https://github.example.org/user", Some("id"))));
	let err = resolver.resolve(&client).await.expect_err("Unknown hosts must fail.");

	assert_eq!(err.code, AuthenticationError::INVALID_USER_INFO_RESPONSE);
	assert_eq!(*log.lock(), ["github"], "The generic resolver must not run after an error.");
}
