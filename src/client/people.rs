//! People operations.

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
	/// Creates a person record.
	pub async fn create_person<B>(&self, token: &str, body: &B) -> Result<ApiResponse>
	where
		B: ?Sized + Serialize,
	{
		self.call(Endpoint::CreatePerson, ApiCall::authorized(token).json(body)?).await
	}

	/// Lists people visible to `token`.
	pub async fn list_people(&self, token: &str, params: QueryParams) -> Result<ApiResponse> {
		self.call(Endpoint::ListPeople, ApiCall::authorized(token).query(params)).await
	}

	/// Fetches one person.
	///
	/// Sent as `GET`, or as `POST` under [`WireFormat::Legacy`](crate::config::WireFormat).
	pub async fn get_person(&self, token: &str, person_id: &str) -> Result<ApiResponse> {
		self.call(Endpoint::GetPerson, ApiCall::authorized(token).path_param(person_id)).await
	}

	/// Applies a partial update to one person.
	pub async fn update_person<B>(
		&self,
		token: &str,
		person_id: &str,
		body: &B,
	) -> Result<ApiResponse>
	where
		B: ?Sized + Serialize,
	{
		let call = ApiCall::authorized(token).path_param(person_id).json(body)?;

		self.call(Endpoint::UpdatePerson, call).await
	}
}
