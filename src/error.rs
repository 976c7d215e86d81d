//! Error types shared across resolvers, identities, and client models.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical construction-time error exposed by public APIs.
///
/// Resolution itself never yields this type; it fails with [`AuthenticationError`] instead.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// User profile could not be assembled.
	#[error(transparent)]
	Profile(#[from] crate::user::ProfileError),
	/// Identifier validation failed.
	#[error(transparent)]
	Identifier(#[from] crate::auth::IdentifierError),
	/// Scope validation failed.
	#[error(transparent)]
	Scope(#[from] crate::auth::ScopeValidationError),
}

/// Configuration failures raised synchronously while wiring resolvers.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ConfigError {
	/// A delegating resolver needs at least one delegate.
	#[error("Delegating resolver requires at least one delegate.")]
	NoDelegates,
	/// A scoped resolver needs at least one registration to match.
	#[error("Scoped resolver requires at least one registration id.")]
	NoRegistrations,
	/// User-info endpoints must use HTTPS outside of loopback hosts.
	#[error("The user-info endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Endpoint URL that failed validation.
		url: String,
	},
}

/// OAuth 2.0 authentication failure raised while resolving a user.
///
/// Carries the RFC 6749 error triple. Delegating resolvers hand it back to callers untouched, so
/// equality checks against the value a delegate produced are meaningful.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("{}", render(.code, .description))]
pub struct AuthenticationError {
	/// Machine-readable error code (e.g. `invalid_token`).
	pub code: String,
	/// Optional human-readable description.
	pub description: Option<String>,
	/// Optional link to documentation about the error.
	pub uri: Option<Url>,
}
impl AuthenticationError {
	/// Upstream reported the access token as invalid.
	pub const INVALID_TOKEN: &'static str = "invalid_token";
	/// The user-info response could not be interpreted.
	pub const INVALID_USER_INFO_RESPONSE: &'static str = "invalid_user_info_response";
	/// The registration does not declare a user-info endpoint.
	pub const MISSING_USER_INFO_URI: &'static str = "missing_user_info_uri";
	/// The registration does not declare which attribute names the user.
	pub const MISSING_USER_NAME_ATTRIBUTE: &'static str = "missing_user_name_attribute";

	/// Creates an error with the provided code.
	pub fn new(code: impl Into<String>) -> Self {
		Self { code: code.into(), description: None, uri: None }
	}

	/// Adds a human-readable description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());

		self
	}

	/// Adds a documentation URI.
	pub fn with_uri(mut self, uri: Url) -> Self {
		self.uri = Some(uri);

		self
	}
}

fn render(code: &str, description: &Option<String>) -> String {
	match description {
		Some(description) => format!("[{code}] {description}"),
		None => format!("[{code}]"),
	}
}
