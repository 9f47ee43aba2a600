//! Portfolio insight operations: daily values and projections.

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
	/// Fetches daily account values (filters such as `account_id`, `start_date` go in `params`).
	pub async fn get_daily_values(&self, token: &str, params: QueryParams) -> Result<ApiResponse> {
		self.call(Endpoint::GetDailyValues, ApiCall::authorized(token).query(params)).await
	}

	/// Fetches a portfolio projection.
	pub async fn get_projection(&self, token: &str, params: QueryParams) -> Result<ApiResponse> {
		self.call(Endpoint::GetProjection, ApiCall::authorized(token).query(params)).await
	}
}
