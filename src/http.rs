//! Transport seam for API calls.
//!
//! The client only depends on [`ApiHttpClient`]: implementations receive a fully built
//! [`HttpRequest`] and hand back the raw [`HttpResponse`]. [`ReqwestHttpClient`] is the
//! default implementation; tests and embedders plug in their own (see the recording transport
//! behind the `test` feature).

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// `User-Agent` sent by [`ReqwestHttpClient::new`].
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Request handed to the transport: method, absolute URI, headers, and raw payload.
pub type HttpRequest = ::http::Request<Vec<u8>>;
/// Response returned by the transport: status, headers, and raw payload.
pub type HttpResponse = ::http::Response<Vec<u8>>;
/// Boxed future resolved by [`ApiHttpClient::execute`].
pub type TransportFuture<'a, E> = Pin<Box<dyn Future<Output = Result<HttpResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP stacks able to execute one API call.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can be shared
/// (behind `Arc`) by every clone of the client. Any HTTP status is a successful transport
/// outcome; only failures to obtain a response (DNS, TCP, TLS, I/O) should be reported as
/// [`ApiHttpClient::TransportError`].
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and collects the full response body.
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// The API never answers with redirects worth following for these calls; configure a
/// custom [`ReqwestClient`] with whatever timeouts, proxies, or TLS roots the deployment
/// needs and wrap it with [`ReqwestHttpClient::with_client`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds a reqwest client that identifies itself with [`USER_AGENT`].
	pub fn new() -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().user_agent(USER_AGENT).build()?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		Box::pin(async move {
			let response = self.0.execute(request.try_into()?).await?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new = HttpResponse::new(response.bytes().await?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok::<_, ReqwestError>(response_new)
		})
	}
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// crates.io
	use httpmock::prelude::*;
	// self
	use super::*;

	#[tokio::test]
	async fn reqwest_transport_returns_non_success_responses() {
		let server = MockServer::start_async().await;
		let mock = server
			.mock_async(|when, then| {
				when.method(GET).path("/v1/healthcheck").header("accept", "application/json");
				then.status(503).header("x-trace", "t-1").body("{\"error\":\"down\"}");
			})
			.await;
		let request = ::http::Request::builder()
			.method(::http::Method::GET)
			.uri(server.url("/v1/healthcheck"))
			.header("accept", "application/json")
			.body(Vec::new())
			.expect("Fixture request should build.");
		let response = ReqwestHttpClient::default()
			.execute(request)
			.await
			.expect("Any HTTP status should resolve at the transport layer.");

		mock.assert_async().await;

		assert_eq!(response.status(), ::http::StatusCode::SERVICE_UNAVAILABLE);
		assert_eq!(response.headers()["x-trace"], "t-1");
		assert_eq!(response.body().as_slice(), b"{\"error\":\"down\"}");
	}

	#[tokio::test]
	async fn built_transport_sends_the_crate_user_agent() {
		let server = MockServer::start_async().await;
		let mock = server
			.mock_async(|when, then| {
				when.method(GET).path("/v1/healthcheck").header("user-agent", USER_AGENT);
				then.status(200).body("{}");
			})
			.await;
		let request = ::http::Request::builder()
			.uri(server.url("/v1/healthcheck"))
			.body(Vec::new())
			.expect("Fixture request should build.");
		let response = ReqwestHttpClient::new()
			.expect("Default reqwest client should build.")
			.execute(request)
			.await
			.expect("Mock server should answer.");

		mock.assert_async().await;

		assert_eq!(response.status(), ::http::StatusCode::OK);
		assert!(USER_AGENT.starts_with("wealthsimple-api/"));
	}
}
