//! OAuth grant bodies and the typed `/oauth/token` payload.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// OAuth 2.0 grant types accepted by the token endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Exchange of an authorization code obtained from the redirect.
	AuthorizationCode,
	/// Rotation of a previously issued refresh token.
	RefreshToken,
}
impl GrantType {
	/// Returns the RFC 6749 identifier for the grant type.
	pub fn as_str(self) -> &'static str {
		match self {
			GrantType::AuthorizationCode => "authorization_code",
			GrantType::RefreshToken => "refresh_token",
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// JSON body posted to the token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenGrant<'a> {
	/// Grant being exercised.
	pub grant_type: GrantType,
	/// Authorization code, for [`GrantType::AuthorizationCode`].
	#[serde(skip_serializing_if = "Option::is_none")]
	pub code: Option<&'a str>,
	/// Refresh token, for [`GrantType::RefreshToken`].
	#[serde(skip_serializing_if = "Option::is_none")]
	pub refresh_token: Option<&'a str>,
}
impl<'a> TokenGrant<'a> {
	/// Body for an authorization code exchange.
	pub fn authorization_code(code: &'a str) -> Self {
		Self { grant_type: GrantType::AuthorizationCode, code: Some(code), refresh_token: None }
	}

	/// Body for a refresh token rotation.
	pub fn refresh_token(refresh_token: &'a str) -> Self {
		Self {
			grant_type: GrantType::RefreshToken,
			code: None,
			refresh_token: Some(refresh_token),
		}
	}
}

/// Successful payload returned by `/oauth/token`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
	/// Bearer token for subsequent calls.
	pub access_token: TokenSecret,
	/// Token type, normally `bearer`.
	#[serde(default)]
	pub token_type: Option<String>,
	/// Lifetime in seconds.
	#[serde(default)]
	pub expires_in: Option<i64>,
	/// Refresh token, when the grant issues one.
	#[serde(default)]
	pub refresh_token: Option<TokenSecret>,
	/// Space-delimited scopes granted.
	#[serde(default)]
	pub scope: Option<String>,
	/// Identifier of the user or client the token acts for.
	#[serde(default)]
	pub resource_owner_id: Option<String>,
	/// Issue time as a Unix timestamp.
	#[serde(default, with = "time::serde::timestamp::option")]
	pub created_at: Option<OffsetDateTime>,
}
impl TokenResponse {
	/// Computes the expiry instant, anchored on `created_at` or on `fallback_issued_at`.
	pub fn expires_at(&self, fallback_issued_at: OffsetDateTime) -> Option<OffsetDateTime> {
		let lifetime = Duration::seconds(self.expires_in?);

		self.created_at.unwrap_or(fallback_issued_at).checked_add(lifetime)
	}

	/// Returns the granted scopes.
	pub fn scopes(&self) -> impl Iterator<Item = &str> {
		self.scope.as_deref().unwrap_or_default().split_whitespace()
	}
}
