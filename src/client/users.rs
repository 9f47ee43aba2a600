//! User operations.

// self
use crate::{
	_prelude::*,
	client::Client,
	endpoint::Endpoint,
	http::ApiHttpClient,
	request::{ApiCall, QueryParams},
	response::ApiResponse,
};

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Signs up a new user. Runs before any token exists, so the bearer token is empty.
	pub async fn create_user<B>(&self, body: &B) -> Result<ApiResponse>
	where
		B: ?Sized + Serialize,
	{
		self.call(Endpoint::CreateUser, ApiCall::new().json(body)?).await
	}

	/// Lists users visible to `token`.
	pub async fn list_users(&self, token: &str, params: QueryParams) -> Result<ApiResponse> {
		self.call(Endpoint::ListUsers, ApiCall::authorized(token).query(params)).await
	}

	/// Fetches one user.
	pub async fn get_user(&self, token: &str, user_id: &str) -> Result<ApiResponse> {
		self.call(Endpoint::GetUser, ApiCall::authorized(token).path_param(user_id)).await
	}
}
