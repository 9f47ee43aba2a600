//! Demonstrates exchanging an authorization code and listing accounts with the default reqwest
//! transport against a local mock of the API.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
use time::OffsetDateTime;
// self
use wealthsimple_api::{
	auth::AppCredentials,
	client::Client,
	config::{ClientConfig, WireFormat},
	http::ReqwestHttpClient,
	request::QueryParams,
	reqwest::Client as ReqwestClient,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/oauth/token").query_param("client_id", "demo-client");
			then.status(200).json_body(json!({
				"access_token": "demo-access",
				"token_type": "bearer",
				"expires_in": 7200,
				"refresh_token": "demo-refresh",
				"resource_owner_id": "user-demo",
			}));
		})
		.await;
	let accounts_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/accounts").header("authorization", "Bearer demo-access");
			then.status(200).json_body(json!({
				"object": "account",
				"results": [{ "id": "rrsp-demo", "type": "ca_rrsp" }],
			}));
		})
		.await;
	let config = ClientConfig::builder()
		.base_url_str(&format!("{}/v1", server.base_url()))?
		.wire_format(WireFormat::Standard)
		.build()?;
	let http_client = ReqwestHttpClient::with_client(
		ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()?,
	);
	let client = Client::<ReqwestHttpClient>::with_http_client(
		AppCredentials::new("demo-client", "demo-secret", "https://app.example.com/oauth/callback"),
		config,
		http_client,
	)?;
	let token = client.exchange_code("demo-code").await?;

	println!(
		"Access token for {} expires at {:?}.",
		token.resource_owner_id.as_deref().unwrap_or("unknown owner"),
		token.expires_at(OffsetDateTime::now_utc())
	);

	let accounts = client
		.list_accounts(token.access_token.expose(), QueryParams::new().with("limit", 25))
		.await?;

	println!("Accounts (HTTP {}): {}.", accounts.status, accounts.body);

	token_mock.assert_async().await;
	accounts_mock.assert_async().await;

	Ok(())
}
