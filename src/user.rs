//! Resolved end-user identities.

// crates.io
use serde_json::{Map, Value};
// self
use crate::{_prelude::*, auth::ScopeSet};

/// Authority granted to every resolved profile unless overridden.
pub const DEFAULT_AUTHORITY: &str = "ROLE_USER";
/// Prefix applied to scope-derived authorities.
pub const SCOPE_AUTHORITY_PREFIX: &str = "SCOPE_";

/// Errors raised while assembling a [`UserProfile`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ProfileError {
	/// Profiles must carry at least one attribute.
	#[error("User attributes cannot be empty.")]
	EmptyAttributes,
	/// The name attribute key is absent from the attribute map.
	#[error("Missing attribute `{attribute}` in user attributes.")]
	MissingNameAttribute {
		/// Requested name attribute key.
		attribute: String,
	},
}

/// End-user profile built from provider user-info attributes.
///
/// Deserialization runs the same checks as [`UserProfile::new`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UserProfileRaw")]
pub struct UserProfile {
	attributes: BTreeMap<String, Value>,
	name_attribute: String,
	authorities: BTreeSet<String>,
}
impl UserProfile {
	/// Creates a profile whose name is read from `name_attribute`.
	///
	/// The profile starts with the [`DEFAULT_AUTHORITY`].
	pub fn new<I, K>(
		attributes: I,
		name_attribute: impl Into<String>,
	) -> Result<Self, ProfileError>
	where
		I: IntoIterator<Item = (K, Value)>,
		K: Into<String>,
	{
		let attributes =
			attributes.into_iter().map(|(k, v)| (k.into(), v)).collect::<BTreeMap<_, _>>();
		let name_attribute = name_attribute.into();

		if attributes.is_empty() {
			return Err(ProfileError::EmptyAttributes);
		}
		if !attributes.contains_key(&name_attribute) {
			return Err(ProfileError::MissingNameAttribute { attribute: name_attribute });
		}

		Ok(Self {
			attributes,
			name_attribute,
			authorities: BTreeSet::from([DEFAULT_AUTHORITY.to_owned()]),
		})
	}

	/// Parses a user-info JSON object into a profile.
	///
	/// Malformed payloads fail with `invalid_user_info_response`; a payload lacking the name
	/// attribute fails with `missing_user_name_attribute`.
	pub fn from_json_slice(body: &[u8], name_attribute: &str) -> Result<Self, AuthenticationError> {
		let mut de = serde_json::Deserializer::from_slice(body);
		let attributes: Map<String, Value> =
			serde_path_to_error::deserialize(&mut de).map_err(|e| {
				invalid_response(format!(
					"User-info response could not be parsed at `{}`: {}.",
					e.path(),
					e.inner()
				))
			})?;

		de.end().map_err(|e| {
			invalid_response(format!("User-info response has trailing content: {e}."))
		})?;

		Self::new(attributes, name_attribute).map_err(|e| {
			let code = match e {
				ProfileError::EmptyAttributes => AuthenticationError::INVALID_USER_INFO_RESPONSE,
				ProfileError::MissingNameAttribute { .. } =>
					AuthenticationError::MISSING_USER_NAME_ATTRIBUTE,
			};

			AuthenticationError::new(code).with_description(e.to_string())
		})
	}

	/// Replaces the granted authorities.
	pub fn with_authorities<I, S>(mut self, authorities: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.authorities = authorities.into_iter().map(Into::into).collect();

		self
	}

	/// Adds a `SCOPE_<scope>` authority for every granted scope.
	pub fn with_scope_authorities(mut self, scopes: &ScopeSet) -> Self {
		self.authorities
			.extend(scopes.iter().map(|scope| format!("{SCOPE_AUTHORITY_PREFIX}{scope}")));

		self
	}

	/// Returns the user's name, rendered from the name attribute.
	///
	/// String values are returned verbatim; other JSON values use their compact JSON form.
	pub fn name(&self) -> String {
		match self.attributes.get(&self.name_attribute) {
			Some(Value::String(value)) => value.clone(),
			Some(value) => value.to_string(),
			// Unreachable: `new` and deserialization both require the key.
			None => String::new(),
		}
	}

	/// Key of the attribute holding the user's name.
	pub fn name_attribute(&self) -> &str {
		&self.name_attribute
	}

	/// Looks up a single attribute.
	pub fn attribute(&self, key: &str) -> Option<&Value> {
		self.attributes.get(key)
	}

	/// All user-info attributes.
	pub fn attributes(&self) -> &BTreeMap<String, Value> {
		&self.attributes
	}

	/// Granted authorities in sorted order.
	pub fn authorities(&self) -> &BTreeSet<String> {
		&self.authorities
	}

	/// Returns true if the profile carries the authority.
	pub fn has_authority(&self, authority: &str) -> bool {
		self.authorities.contains(authority)
	}
}
impl TryFrom<UserProfileRaw> for UserProfile {
	type Error = ProfileError;

	fn try_from(raw: UserProfileRaw) -> Result<Self, Self::Error> {
		let profile = Self::new(raw.attributes, raw.name_attribute)?;

		Ok(match raw.authorities {
			Some(authorities) => profile.with_authorities(authorities),
			None => profile,
		})
	}
}
impl Display for UserProfile {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.name())
	}
}

#[derive(Deserialize)]
struct UserProfileRaw {
	attributes: BTreeMap<String, Value>,
	name_attribute: String,
	authorities: Option<BTreeSet<String>>,
}

fn invalid_response(description: String) -> AuthenticationError {
	AuthenticationError::new(AuthenticationError::INVALID_USER_INFO_RESPONSE)
		.with_description(description)
}
