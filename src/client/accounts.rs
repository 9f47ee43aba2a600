//! Account operations.

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
	/// Opens an account.
	pub async fn create_account<B>(&self, token: &str, body: &B) -> Result<ApiResponse>
	where
		B: ?Sized + Serialize,
	{
		self.call(Endpoint::CreateAccount, ApiCall::authorized(token).json(body)?).await
	}

	/// Lists accounts visible to `token`.
	pub async fn list_accounts(&self, token: &str, params: QueryParams) -> Result<ApiResponse> {
		self.call(Endpoint::ListAccounts, ApiCall::authorized(token).query(params)).await
	}

	/// Fetches one account.
	pub async fn get_account(&self, token: &str, account_id: &str) -> Result<ApiResponse> {
		self.call(Endpoint::GetAccount, ApiCall::authorized(token).path_param(account_id)).await
	}

	/// Lists the account types the caller may open.
	pub async fn get_account_types(
		&self,
		token: &str,
		params: QueryParams,
	) -> Result<ApiResponse> {
		self.call(Endpoint::GetAccountTypes, ApiCall::authorized(token).query(params)).await
	}
}
