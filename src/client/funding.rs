//! Funding operations: linked bank accounts and deposits.

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
	/// Lists bank accounts linked to the caller.
	pub async fn list_bank_accounts(
		&self,
		token: &str,
		params: QueryParams,
	) -> Result<ApiResponse> {
		self.call(Endpoint::ListBankAccounts, ApiCall::authorized(token).query(params)).await
	}

	/// Creates a deposit.
	pub async fn create_deposit<B>(&self, token: &str, body: &B) -> Result<ApiResponse>
	where
		B: ?Sized + Serialize,
	{
		self.call(Endpoint::CreateDeposit, ApiCall::authorized(token).json(body)?).await
	}

	/// Lists deposits visible to `token`.
	pub async fn list_deposits(&self, token: &str, params: QueryParams) -> Result<ApiResponse> {
		self.call(Endpoint::ListDeposits, ApiCall::authorized(token).query(params)).await
	}

	/// Fetches one deposit.
	pub async fn get_deposit(&self, token: &str, deposit_id: &str) -> Result<ApiResponse> {
		self.call(Endpoint::GetDeposit, ApiCall::authorized(token).path_param(deposit_id)).await
	}
}
