//! Application credentials validated once at client construction.

// self
use crate::{_prelude::*, auth::TokenSecret};

const FIELDS: [&str; 3] = ["client_id", "client_secret", "redirect_uri"];

/// Error returned when application credentials fail validation.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum CredentialsError {
	/// Credentials were supplied as something other than a JSON object.
	#[error("Application credentials must be an object.")]
	NotAnObject,
	/// A required field is absent.
	#[error("Application credentials are missing `{field}`.")]
	Missing {
		/// Name of the missing field.
		field: &'static str,
	},
	/// A required field is present but is not a string.
	#[error("Application credential `{field}` must be a string.")]
	NotAString {
		/// Name of the mistyped field.
		field: &'static str,
	},
	/// A required field is empty or whitespace.
	#[error("Application credential `{field}` cannot be empty.")]
	Empty {
		/// Name of the empty field.
		field: &'static str,
	},
	/// The redirect URI is not an absolute URL.
	#[error("Application redirect_uri is not an absolute URL.")]
	InvalidRedirectUri {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// OAuth application credentials issued by the API provider.
///
/// The client keeps one immutable copy for its whole lifetime and merges it into the query
/// string of the token endpoints.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct AppCredentials {
	client_id: String,
	client_secret: TokenSecret,
	redirect_uri: String,
}
impl AppCredentials {
	/// Creates credentials without validating them; validation happens in
	/// [`AppCredentials::validate`] and in every client constructor.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		redirect_uri: impl Into<String>,
	) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: TokenSecret::new(client_secret),
			redirect_uri: redirect_uri.into(),
		}
	}

	/// Builds credentials from an untyped JSON object, requiring every field to be a string.
	pub fn from_json(value: &Value) -> Result<Self, CredentialsError> {
		let object = value.as_object().ok_or(CredentialsError::NotAnObject)?;
		let field = |name: &'static str| match object.get(name) {
			None | Some(Value::Null) => Err(CredentialsError::Missing { field: name }),
			Some(Value::String(text)) => Ok(text.clone()),
			Some(_) => Err(CredentialsError::NotAString { field: name }),
		};
		let credentials = Self::new(field(FIELDS[0])?, field(FIELDS[1])?, field(FIELDS[2])?);

		credentials.validate()?;

		Ok(credentials)
	}

	/// Validates every field.
	pub fn validate(&self) -> Result<(), CredentialsError> {
		for (field, value) in self.fields() {
			if value.trim().is_empty() {
				return Err(CredentialsError::Empty { field });
			}
		}

		Url::parse(&self.redirect_uri)
			.map_err(|source| CredentialsError::InvalidRedirectUri { source })?;

		Ok(())
	}

	/// OAuth client identifier.
	pub fn client_id(&self) -> &str {
		&self.client_id
	}

	/// OAuth client secret.
	pub fn client_secret(&self) -> &TokenSecret {
		&self.client_secret
	}

	/// Redirect URI registered with the provider.
	pub fn redirect_uri(&self) -> &str {
		&self.redirect_uri
	}

	/// Returns the credentials as `(name, value)` pairs in wire order.
	pub fn fields(&self) -> [(&'static str, &str); 3] {
		[
			(FIELDS[0], self.client_id.as_str()),
			(FIELDS[1], self.client_secret.expose()),
			(FIELDS[2], self.redirect_uri.as_str()),
		]
	}
}
impl TryFrom<Value> for AppCredentials {
	type Error = CredentialsError;

	fn try_from(value: Value) -> Result<Self, Self::Error> {
		Self::from_json(&value)
	}
}
impl Debug for AppCredentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AppCredentials")
			.field("client_id", &self.client_id)
			.field("client_secret", &self.client_secret)
			.field("redirect_uri", &self.redirect_uri)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	fn valid() -> Value {
		json!({
			"client_id": "id-123",
			"client_secret": "secret-456",
			"redirect_uri": "https://app.example.com/callback",
		})
	}

	#[test]
	fn accepts_complete_string_fields() {
		let credentials =
			AppCredentials::from_json(&valid()).expect("Complete credentials should validate.");

		assert_eq!(credentials.client_id(), "id-123");
		assert_eq!(credentials.client_secret().expose(), "secret-456");
		assert_eq!(credentials.redirect_uri(), "https://app.example.com/callback");
	}

	#[test]
	fn rejects_missing_and_mistyped_fields() {
		for field in FIELDS {
			let mut missing = valid();

			missing.as_object_mut().expect("Fixture should be an object.").remove(field);

			assert_eq!(
				AppCredentials::from_json(&missing),
				Err(CredentialsError::Missing { field })
			);

			let mut mistyped = valid();

			mistyped[field] = json!(42);

			assert_eq!(
				AppCredentials::from_json(&mistyped),
				Err(CredentialsError::NotAString { field })
			);
		}

		assert_eq!(AppCredentials::from_json(&json!("nope")), Err(CredentialsError::NotAnObject));
	}

	#[test]
	fn rejects_empty_fields_and_relative_redirects() {
		let empty = AppCredentials::new("id", " ", "https://app.example.com/callback");

		assert_eq!(empty.validate(), Err(CredentialsError::Empty { field: "client_secret" }));

		let relative = AppCredentials::new("id", "secret", "/callback");

		assert!(matches!(relative.validate(), Err(CredentialsError::InvalidRedirectUri { .. })));
	}

	#[test]
	fn deserializes_through_validation() {
		let credentials: AppCredentials = serde_json::from_value(valid())
			.expect("Credentials should deserialize from a valid object.");

		assert_eq!(credentials.client_id(), "id-123");
		assert!(serde_json::from_value::<AppCredentials>(json!({ "client_id": "x" })).is_err());
	}

	#[test]
	fn debug_redacts_the_secret() {
		let credentials = AppCredentials::new("id", "very-secret", "https://app.example.com/cb");
		let rendered = format!("{credentials:?}");

		assert!(rendered.contains("<redacted>"));
		assert!(!rendered.contains("very-secret"));
	}
}
