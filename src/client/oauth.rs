//! Health probe and `/oauth/token` operations.

// self
use crate::{
	_prelude::*,
	auth::{TokenGrant, TokenResponse},
	client::Client,
	endpoint::Endpoint,
	http::ApiHttpClient,
	request::ApiCall,
	response::ApiResponse,
};

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Probes service liveness. Sends neither credentials nor a bearer token.
	pub async fn health_check(&self) -> Result<ApiResponse> {
		self.call(Endpoint::HealthCheck, ApiCall::new()).await
	}

	/// Exchanges an authorization code for tokens.
	///
	/// The application credentials travel in the query string; the bearer token is empty.
	pub async fn token_exchange(&self, code: &str) -> Result<ApiResponse> {
		let call = ApiCall::new().json(&TokenGrant::authorization_code(code))?;

		self.call(Endpoint::TokenExchange, call).await
	}

	/// Rotates a refresh token.
	pub async fn token_refresh(&self, refresh_token: &str) -> Result<ApiResponse> {
		let call = ApiCall::new().json(&TokenGrant::refresh_token(refresh_token))?;

		self.call(Endpoint::TokenRefresh, call).await
	}

	/// Runs [`Client::token_exchange`], requires a `2xx` status, and decodes the token payload.
	pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse> {
		self.token_exchange(code).await?.into_result()?.json()
	}

	/// Runs [`Client::token_refresh`], requires a `2xx` status, and decodes the token payload.
	pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenResponse> {
		self.token_refresh(refresh_token).await?.into_result()?.json()
	}
}
