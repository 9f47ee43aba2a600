//! Demonstrates plugging a custom transport into the client.
//!
//! 1. Implement [`ApiHttpClient`] for any type that can turn an [`HttpRequest`] into an
//!    [`HttpResponse`].
//! 2. Pass it to [`Client::with_http_client`]; every binding now flows through it.
//! 3. Transport-specific failures surface as [`Error::Transport`].

// std
use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
};
// crates.io
use color_eyre::Result;
// self
use wealthsimple_api::{
	auth::AppCredentials,
	client::Client,
	config::{ClientConfig, Environment},
	error::Error,
	http::{ApiHttpClient, HttpRequest, HttpResponse, TransportFuture},
	http_types::StatusCode,
	request::QueryParams,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let credentials =
		AppCredentials::new("demo-client", "demo-secret", "https://app.example.com/oauth/callback");
	let config = ClientConfig::for_environment(Environment::Sandbox)?;
	let client = Client::<CannedHttpClient>::with_http_client(
		credentials.clone(),
		config.clone(),
		CannedHttpClient,
	)?;
	let health = client.health_check().await?;

	println!("Health check answered HTTP {} with {}.", health.status, health.body);

	let deposits = client.list_deposits("demo-token", QueryParams::new().with("limit", 2)).await?;

	println!("Deposits answered HTTP {} with {}.", deposits.status, deposits.body);

	let offline = Client::<OfflineHttpClient>::with_http_client(
		credentials,
		config,
		OfflineHttpClient { host: "api.sandbox.wealthsimple.com" },
	)?;

	match offline.health_check().await {
		Ok(response) => println!("Offline transport unexpectedly answered {}.", response.status),
		Err(e @ Error::Transport(_)) => println!("Transport failure surfaced unchanged: {e}."),
		Err(e) => println!("Unexpected failure: {e}."),
	}

	Ok(())
}

/// Answers every request locally, echoing the request line in the JSON body.
struct CannedHttpClient;
impl ApiHttpClient for CannedHttpClient {
	type TransportError = OfflineError;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		Box::pin(async move {
			let authorized = request
				.headers()
				.get("authorization")
				.and_then(|value| value.to_str().ok())
				.is_some_and(|value| value != "Bearer ");
			let body = format!(
				"{{\"method\":\"{}\",\"url\":\"{}\",\"authorized\":{authorized}}}",
				request.method(),
				request.uri()
			);
			let mut response = HttpResponse::new(body.into_bytes());

			*response.status_mut() = StatusCode::OK;

			Ok::<_, OfflineError>(response)
		})
	}
}

/// Fails every request as if DNS resolution were broken.
struct OfflineHttpClient {
	host: &'static str,
}
impl ApiHttpClient for OfflineHttpClient {
	type TransportError = OfflineError;

	fn execute(&self, _request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		let host = self.host;

		Box::pin(async move { Err::<HttpResponse, _>(OfflineError { host }) })
	}
}

#[derive(Debug)]
struct OfflineError {
	host: &'static str,
}
impl Display for OfflineError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "DNS lookup failed for {}", self.host)
	}
}
impl StdError for OfflineError {}
