//! Authorized client context handed to user-info resolvers.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, PrincipalName, RegistrationId, TokenSecret},
	error::ConfigError,
};

/// Provider user-info endpoint declared by a client registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfoEndpoint {
	/// Endpoint URL. HTTPS is required unless the host is a loopback address.
	pub uri: Url,
	/// Attribute in the user-info response that names the end user (e.g. `sub`, `login`).
	pub name_attribute: Option<String>,
}
impl UserInfoEndpoint {
	/// Validates and wraps a user-info endpoint URL.
	pub fn new(uri: Url) -> Result<Self, ConfigError> {
		if uri.scheme() != "https" && !is_loopback(&uri) {
			return Err(ConfigError::InsecureEndpoint { url: uri.to_string() });
		}

		Ok(Self { uri, name_attribute: None })
	}

	/// Sets the attribute that names the end user.
	pub fn with_name_attribute(mut self, attribute: impl Into<String>) -> Self {
		self.name_attribute = Some(attribute.into());

		self
	}

	/// Returns the configured name attribute, or a `missing_user_name_attribute` failure.
	pub fn user_name_attribute(&self) -> Result<&str, AuthenticationError> {
		self.name_attribute.as_deref().filter(|attribute| !attribute.is_empty()).ok_or_else(|| {
			AuthenticationError::new(AuthenticationError::MISSING_USER_NAME_ATTRIBUTE)
				.with_description(format!(
					"Missing required user name attribute for user-info endpoint {}.",
					self.uri
				))
		})
	}
}

/// Client registration metadata relevant to user-info resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRegistration {
	/// Registration identifier.
	pub id: RegistrationId,
	/// OAuth client identifier issued by the provider.
	pub client_id: String,
	/// User-info endpoint, when the provider exposes one.
	pub user_info: Option<UserInfoEndpoint>,
}
impl ClientRegistration {
	/// Creates a registration without a user-info endpoint.
	pub fn new(id: RegistrationId, client_id: impl Into<String>) -> Self {
		Self { id, client_id: client_id.into(), user_info: None }
	}

	/// Declares the provider's user-info endpoint.
	pub fn with_user_info(mut self, endpoint: UserInfoEndpoint) -> Self {
		self.user_info = Some(endpoint);

		self
	}
}

/// A client that an end user has authorized, together with the tokens it holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedClient {
	/// Registration the authorization was granted for.
	pub registration: ClientRegistration,
	/// Principal that granted the authorization.
	pub principal: PrincipalName,
	/// Access token issued to the client.
	pub access_token: AccessToken,
	/// Refresh token, if the provider issued one.
	pub refresh_token: Option<TokenSecret>,
}
impl AuthorizedClient {
	/// Creates an authorized client without a refresh token.
	pub fn new(
		registration: ClientRegistration,
		principal: PrincipalName,
		access_token: AccessToken,
	) -> Self {
		Self { registration, principal, access_token, refresh_token: None }
	}

	/// Attaches a refresh token.
	pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
		self.refresh_token = Some(TokenSecret::new(token));

		self
	}

	/// Shortcut for the registration identifier.
	pub fn registration_id(&self) -> &RegistrationId {
		&self.registration.id
	}

	/// Returns the user-info endpoint, or a `missing_user_info_uri` failure.
	pub fn user_info_endpoint(&self) -> Result<&UserInfoEndpoint, AuthenticationError> {
		self.registration.user_info.as_ref().ok_or_else(|| {
			AuthenticationError::new(AuthenticationError::MISSING_USER_INFO_URI).with_description(
				format!(
					"Missing required user-info URI for client registration `{}`.",
					self.registration.id
				),
			)
		})
	}
}

fn is_loopback(uri: &Url) -> bool {
	match uri.host() {
		Some(url::Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
		Some(url::Host::Ipv4(ip)) => ip.is_loopback(),
		Some(url::Host::Ipv6(ip)) => ip.is_loopback(),
		None => false,
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	fn url(value: &str) -> Url {
		Url::parse(value).expect("URL fixture should parse.")
	}

	fn client(user_info: Option<UserInfoEndpoint>) -> AuthorizedClient {
		let id = RegistrationId::new("github").expect("Registration fixture should be valid.");
		let mut registration = ClientRegistration::new(id, "client-123");

		registration.user_info = user_info;

		AuthorizedClient::new(
			registration,
			PrincipalName::new("octocat").expect("Principal fixture should be valid."),
			AccessToken::new("access", macros::datetime!(2025-01-01 00:00 UTC)),
		)
	}

	#[test]
	fn endpoints_require_https_outside_loopback() {
		assert!(UserInfoEndpoint::new(url("https://api.github.com/user")).is_ok());
		assert!(UserInfoEndpoint::new(url("http://localhost:8080/user")).is_ok());
		assert!(UserInfoEndpoint::new(url("http://127.0.0.1/user")).is_ok());
		assert_eq!(
			UserInfoEndpoint::new(url("http://example.com/user")),
			Err(ConfigError::InsecureEndpoint { url: "http://example.com/user".into() })
		);
	}

	#[test]
	fn missing_user_info_uri_is_reported() {
		let err = client(None).user_info_endpoint().expect_err("Endpoint should be missing.");

		assert_eq!(err.code, AuthenticationError::MISSING_USER_INFO_URI);
		assert!(err.description.is_some_and(|description| description.contains("github")));
	}

	#[test]
	fn missing_name_attribute_is_reported() {
		let endpoint = UserInfoEndpoint::new(url("https://api.github.com/user"))
			.expect("Endpoint fixture should be valid.");
		let client = client(Some(endpoint.clone()));
		let err = client
			.user_info_endpoint()
			.expect("Endpoint should be configured.")
			.user_name_attribute()
			.expect_err("Name attribute should be missing.");

		assert_eq!(err.code, AuthenticationError::MISSING_USER_NAME_ATTRIBUTE);
		assert_eq!(endpoint.with_name_attribute("login").user_name_attribute(), Ok("login"));
	}

	#[test]
	fn debug_output_redacts_tokens() {
		let rendered = format!("{:?}", client(None).with_refresh_token("refresh-secret"));

		assert!(!rendered.contains("refresh-secret"));
		assert!(!rendered.contains("\"access\""));
	}
}
