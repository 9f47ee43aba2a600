//! Async client for the Wealthsimple REST API: OAuth token exchange, users, people, accounts,
//! deposits, and projections behind one typed, transport-agnostic client.
//!
//! Every operation is a single stateless request/response round trip: the [`client::Client`]
//! stores validated [`auth::AppCredentials`], renders the URL for an entry of the
//! [`endpoint::Endpoint`] registry, attaches the caller's bearer token, and resolves to the
//! parsed JSON body whatever the HTTP status.
//!
//! ```no_run
//! use wealthsimple_api::{auth::AppCredentials, client::Client, request::QueryParams};
//!
//! # async fn example() -> wealthsimple_api::error::Result<()> {
//! let credentials = AppCredentials::new("client-id", "client-secret", "https://app.example/cb");
//! let client = Client::new(credentials)?;
//! let token = client.exchange_code("authorization-code").await?;
//! let accounts = client
//! 	.list_accounts(token.access_token.expose(), QueryParams::new().with("limit", 25))
//! 	.await?;
//!
//! println!("{}", accounts.body);
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all, missing_docs)]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod obs;
pub mod request;
pub mod response;
#[cfg(feature = "test")]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via the `test` crate
	//! feature.

	pub use crate::_prelude::*;

	// std
	use std::collections::VecDeque;
	// crates.io
	use ::http::HeaderMap;
	use parking_lot::Mutex;
	// self
	use crate::{
		auth::AppCredentials,
		client::Client,
		config::{ClientConfig, WireFormat},
		http::{ApiHttpClient, HttpRequest, HttpResponse, TransportFuture},
	};

	/// Client ID used by test fixtures.
	pub const TEST_CLIENT_ID: &str = "test-client-id";
	/// Client secret used by test fixtures.
	pub const TEST_CLIENT_SECRET: &str = "test-client-secret";
	/// Redirect URI used by test fixtures.
	pub const TEST_REDIRECT_URI: &str = "https://app.example.com/oauth/callback";
	/// Base URL used by [`build_recording_client`].
	pub const RECORDING_BASE_URL: &str = "https://api.test.example/v1";

	/// Valid credentials shared by test fixtures.
	pub fn test_credentials() -> AppCredentials {
		AppCredentials::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET, TEST_REDIRECT_URI)
	}

	/// Error surfaced by [`RecordingHttpClient`] once its scripted responses run out.
	#[derive(Debug, ThisError)]
	#[error("Recording transport has no scripted response left.")]
	pub struct ScriptExhausted;

	/// Owned snapshot of a request captured by [`RecordingHttpClient`].
	#[derive(Clone, Debug)]
	pub struct RecordedRequest {
		/// HTTP method.
		pub method: Method,
		/// Full request URL as sent.
		pub url: String,
		/// Request headers.
		pub headers: HeaderMap,
		/// Raw request payload.
		pub body: Vec<u8>,
	}
	impl RecordedRequest {
		fn capture(request: &HttpRequest) -> Self {
			Self {
				method: request.method().clone(),
				url: request.uri().to_string(),
				headers: request.headers().clone(),
				body: request.body().clone(),
			}
		}

		/// Returns a header value as text.
		pub fn header(&self, name: &str) -> Option<&str> {
			self.headers.get(name).and_then(|value| value.to_str().ok())
		}

		/// Returns the URL path component.
		pub fn path(&self) -> String {
			Url::parse(&self.url).expect("Recorded URL should parse.").path().to_owned()
		}

		/// Returns the decoded query pairs in wire order.
		pub fn query_pairs(&self) -> Vec<(String, String)> {
			Url::parse(&self.url)
				.expect("Recorded URL should parse.")
				.query_pairs()
				.map(|(key, value)| (key.into_owned(), value.into_owned()))
				.collect()
		}

		/// Parses the payload as JSON.
		pub fn json_body(&self) -> Value {
			serde_json::from_slice(&self.body).expect("Recorded body should be valid JSON.")
		}
	}

	/// In-memory transport that records every request and replays scripted responses.
	#[derive(Debug, Default)]
	pub struct RecordingHttpClient {
		requests: Mutex<Vec<RecordedRequest>>,
		responses: Mutex<VecDeque<(u16, Vec<u8>)>>,
	}
	impl RecordingHttpClient {
		/// Queues a response with the provided status and raw body.
		pub fn respond(self, status: u16, body: impl Into<Vec<u8>>) -> Self {
			self.responses.lock().push_back((status, body.into()));

			self
		}

		/// Queues a JSON response with the provided status.
		pub fn respond_json(self, status: u16, body: &Value) -> Self {
			let bytes = serde_json::to_vec(body).expect("Scripted JSON body should serialize.");

			self.respond(status, bytes)
		}

		/// Returns a snapshot of every request dispatched so far.
		pub fn requests(&self) -> Vec<RecordedRequest> {
			self.requests.lock().clone()
		}

		/// Returns the most recent request, panicking when none was dispatched.
		pub fn last_request(&self) -> RecordedRequest {
			self.requests
				.lock()
				.last()
				.cloned()
				.expect("Recording transport should have captured a request.")
		}
	}
	impl ApiHttpClient for RecordingHttpClient {
		type TransportError = ScriptExhausted;

		fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
			Box::pin(async move {
				self.requests.lock().push(RecordedRequest::capture(&request));

				let (status, body) = self.responses.lock().pop_front().ok_or(ScriptExhausted)?;
				let mut response = HttpResponse::new(body);

				*response.status_mut() =
					StatusCode::from_u16(status).expect("Scripted status code should be valid.");

				Ok::<_, ScriptExhausted>(response)
			})
		}
	}

	/// Builds a client backed by a [`RecordingHttpClient`], returning both handles.
	pub fn build_recording_client(
		transport: RecordingHttpClient,
		wire_format: WireFormat,
	) -> (Client<RecordingHttpClient>, Arc<RecordingHttpClient>) {
		let transport = Arc::new(transport);
		let config = ClientConfig::builder()
			.base_url(Url::parse(RECORDING_BASE_URL).expect("Failed to parse recording base URL."))
			.wire_format(wire_format)
			.build()
			.expect("Failed to build recording client config.");
		let client = Client::with_http_client(test_credentials(), config, transport.clone())
			.expect("Failed to build recording client.");

		(client, transport)
	}

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	#[cfg(feature = "reqwest")]
	pub fn test_reqwest_http_client() -> crate::http::ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		crate::http::ReqwestHttpClient::with_client(client)
	}

	/// Constructs a reqwest-backed [`Client`] pointed at `base_url` (typically an `httpmock`
	/// server).
	#[cfg(feature = "reqwest")]
	pub fn build_reqwest_test_client(
		base_url: &str,
		wire_format: WireFormat,
	) -> crate::client::ReqwestApiClient {
		let config = ClientConfig::builder()
			.base_url(Url::parse(base_url).expect("Failed to parse mock server base URL."))
			.wire_format(wire_format)
			.build()
			.expect("Failed to build mock server client config.");

		Client::with_http_client(test_credentials(), config, test_reqwest_http_client())
			.expect("Failed to build reqwest test client.")
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use ::http::{Method, StatusCode};
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use ::http as http_types;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use serde_json;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
