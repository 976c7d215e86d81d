//! Validated identifiers for client registrations and authorizing principals.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal, allow_inner_whitespace = $allow_ws:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
				let value = value.into();

				validate($kind, &value, $allow_ws)?;

				Ok(Self(value))
			}

			/// Returns the identifier as a string slice.
			pub fn as_str(&self) -> &str {
				&self.0
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				Self::new(value)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
	};
}

const IDENTIFIER_MAX_LEN: usize = 256;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} cannot be empty.")]
	Empty {
		/// Kind of identifier (registration, principal).
		kind: &'static str,
	},
	/// The identifier contains characters it must not carry.
	#[error("{kind} contains an invalid character: {found:?}.")]
	InvalidCharacter {
		/// Kind of identifier (registration, principal).
		kind: &'static str,
		/// Offending character.
		found: char,
	},
	/// The identifier exceeded the allowed character count.
	#[error("{kind} exceeds {max} characters.")]
	TooLong {
		/// Kind of identifier (registration, principal).
		kind: &'static str,
		/// Maximum permitted character count.
		max: usize,
	},
}

def_id! {
	RegistrationId,
	"Identifier of a client registration (e.g. `github`, `google`).",
	"Registration",
	allow_inner_whitespace = false
}
def_id! {
	PrincipalName,
	"Name of the end-user principal that authorized a client.",
	"Principal",
	allow_inner_whitespace = true
}

fn validate(
	kind: &'static str,
	value: &str,
	allow_inner_whitespace: bool,
) -> Result<(), IdentifierError> {
	if value.trim().is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if value.chars().count() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { kind, max: IDENTIFIER_MAX_LEN });
	}

	let padded = value.starts_with(char::is_whitespace) || value.ends_with(char::is_whitespace);

	if let Some(found) = value.chars().find(|ch| {
		ch.is_control() || (ch.is_whitespace() && (!allow_inner_whitespace || padded))
	}) {
		return Err(IdentifierError::InvalidCharacter { kind, found });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn registration_ids_reject_whitespace() {
		assert!(RegistrationId::new("github").is_ok());
		assert!(matches!(
			RegistrationId::new("git hub"),
			Err(IdentifierError::InvalidCharacter { kind: "Registration", found: ' ' })
		));
		assert!(matches!(RegistrationId::new(""), Err(IdentifierError::Empty { .. })));
	}

	#[test]
	fn principal_names_allow_inner_spaces_only() {
		let name = PrincipalName::new("Ada Lovelace").expect("Inner spaces should be accepted.");

		assert_eq!(name.as_str(), "Ada Lovelace");
		assert!(PrincipalName::new(" ada").is_err(), "Leading whitespace must be rejected.");
		assert!(PrincipalName::new("ada\n").is_err(), "Control characters must be rejected.");
		assert!(PrincipalName::new("   ").is_err());
	}

	#[test]
	fn length_limit_counts_characters() {
		let exact = "é".repeat(IDENTIFIER_MAX_LEN);

		RegistrationId::new(exact).expect("Exact length should succeed.");

		let too_long = "a".repeat(IDENTIFIER_MAX_LEN + 1);

		assert!(matches!(RegistrationId::new(too_long), Err(IdentifierError::TooLong { .. })));
	}

	#[test]
	fn serde_enforces_validation() {
		let id: RegistrationId =
			serde_json::from_str("\"google\"").expect("Registration id should deserialize.");

		assert_eq!(id.as_ref(), "google");
		assert!(serde_json::from_str::<RegistrationId>("\"with space\"").is_err());
		assert_eq!(
			serde_json::to_string(&id).expect("Registration id should serialize."),
			"\"google\""
		);
	}

	#[test]
	fn borrow_supports_set_lookup() {
		let set = BTreeSet::from([RegistrationId::new("okta").expect("Fixture should be valid.")]);

		assert!(set.contains("okta"));
	}
}
