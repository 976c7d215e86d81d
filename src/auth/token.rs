//! Access token and secret models attached to authorized clients.

// self
use crate::{_prelude::*, auth::ScopeSet};

/// Redacted token secret wrapper keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Access token presentation scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
	/// RFC 6750 bearer token.
	#[default]
	Bearer,
}
impl TokenType {
	/// Returns the scheme label used in `Authorization` headers.
	pub const fn as_str(self) -> &'static str {
		match self {
			TokenType::Bearer => "Bearer",
		}
	}
}

/// Access token issued to an authorized client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
	/// Token secret; callers must avoid logging it.
	pub secret: TokenSecret,
	/// Presentation scheme.
	pub token_type: TokenType,
	/// Scopes granted with the token.
	pub scopes: ScopeSet,
	/// Issued-at instant.
	pub issued_at: OffsetDateTime,
	/// Expiry instant, when the provider supplied one.
	pub expires_at: Option<OffsetDateTime>,
}
impl AccessToken {
	/// Creates a bearer token issued at `issued_at` with no scopes and no expiry.
	pub fn new(secret: impl Into<String>, issued_at: OffsetDateTime) -> Self {
		Self {
			secret: TokenSecret::new(secret),
			token_type: TokenType::Bearer,
			scopes: ScopeSet::default(),
			issued_at,
			expires_at: None,
		}
	}

	/// Sets the granted scopes.
	pub fn with_scopes(mut self, scopes: ScopeSet) -> Self {
		self.scopes = scopes;

		self
	}

	/// Sets an absolute expiry instant.
	pub fn expires_at(mut self, instant: OffsetDateTime) -> Self {
		self.expires_at = Some(instant);

		self
	}

	/// Sets the expiry relative to `issued_at`.
	pub fn expires_in(self, duration: Duration) -> Self {
		let instant = self.issued_at + duration;

		self.expires_at(instant)
	}

	/// Returns `true` once the provided instant reaches the expiry.
	///
	/// Tokens without an expiry never expire.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		self.expires_at.is_some_and(|expires_at| instant >= expires_at)
	}

	/// Checks expiry against the current UTC clock.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}
}
