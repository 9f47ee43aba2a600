//! The API client: validated credentials, configuration, and a shared transport.
//!
//! [`Client`] exposes one async method per registry entry (see the `oauth`, `users`,
//! `people`, `accounts`, `portfolio`, and `funding` impl blocks) plus the generic
//! [`Client::call`] dispatcher they all funnel through. Every method performs exactly one
//! transport call; nothing is retried, cached, or stored between calls.

mod accounts;
mod funding;
mod oauth;
mod people;
mod portfolio;
mod users;

// self
use crate::{
	_prelude::*,
	auth::AppCredentials,
	config::ClientConfig,
	endpoint::Endpoint,
	error::{ConfigError, TransportError},
	http::ApiHttpClient,
	obs::{self, CallOutcome, CallSpan},
	request::{self, ApiCall},
	response::ApiResponse,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestApiClient = Client<ReqwestHttpClient>;

/// Wealthsimple API client bound to one set of application credentials.
///
/// All state is immutable and shared behind `Arc`, so clones are cheap and concurrent calls
/// never contend. Bearer tokens are passed per call and never retained.
pub struct Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// HTTP transport used for every outbound call.
	pub http_client: Arc<C>,
	credentials: Arc<AppCredentials>,
	config: Arc<ClientConfig>,
}
impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	///
	/// Credentials are validated before anything else happens; invalid credentials fail
	/// with [`ConfigError::InvalidCredentials`]. The configuration is re-validated as well,
	/// since its fields are public and may not have gone through the builder.
	pub fn with_http_client(
		credentials: AppCredentials,
		config: ClientConfig,
		http_client: impl Into<Arc<C>>,
	) -> Result<Self> {
		credentials.validate().map_err(ConfigError::from)?;
		config.validate()?;

		Ok(Self {
			http_client: http_client.into(),
			credentials: Arc::new(credentials),
			config: Arc::new(config),
		})
	}

	/// Application credentials the client was built with.
	pub fn credentials(&self) -> &AppCredentials {
		&self.credentials
	}

	/// Active configuration.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Dispatches `call` against `endpoint` and parses the JSON response.
	///
	/// Resolves on any HTTP status; fails only on construction errors, transport failures, or
	/// a body that is not JSON.
	pub async fn call(&self, endpoint: Endpoint, call: ApiCall) -> Result<ApiResponse> {
		let descriptor = endpoint.descriptor();
		let span = CallSpan::new(endpoint, descriptor.method_for(self.config.wire_format).as_str());

		obs::record_call_outcome(endpoint, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let request = request::build_http_request(
					&self.config,
					&self.credentials,
					descriptor,
					call,
				)?;
				let response =
					self.http_client.execute(request).await.map_err(TransportError::network)?;

				ApiResponse::from_http(response)
			})
			.await;

		if let Ok(response) = &result {
			span.record_status(response.status);
		}

		obs::record_call_outcome(endpoint, CallOutcome::of(&result, |response| response.status));

		result
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestHttpClient> {
	/// Creates a client for the default (sandbox) configuration.
	///
	/// The client provisions its own reqwest-backed transport so callers do not need to pass
	/// HTTP handles explicitly.
	pub fn new(credentials: AppCredentials) -> Result<Self> {
		Self::with_config(credentials, ClientConfig::builder().build()?)
	}

	/// Creates a client for an explicit configuration.
	///
	/// Fails with [`ConfigError::HttpClientBuild`] when reqwest cannot set up its TLS backend.
	pub fn with_config(credentials: AppCredentials, config: ClientConfig) -> Result<Self> {
		Self::with_http_client(credentials, config, ReqwestHttpClient::new()?)
	}
}
impl<C> Clone for Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			credentials: self.credentials.clone(),
			config: self.config.clone(),
		}
	}
}
impl<C> Debug for Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("credentials", &self.credentials)
			.field("config", &self.config)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		auth::CredentialsError,
		config::WireFormat,
		http::{HttpRequest, HttpResponse, TransportFuture},
	};

	#[derive(Debug, ThisError)]
	#[error("Offline.")]
	struct Offline;

	struct OfflineHttpClient;
	impl ApiHttpClient for OfflineHttpClient {
		type TransportError = Offline;

		fn execute(&self, _: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
			Box::pin(async { Err::<HttpResponse, _>(Offline) })
		}
	}

	fn sandbox() -> ClientConfig {
		ClientConfig::builder().build().expect("Sandbox config should build.")
	}

	fn offline_client() -> Client<OfflineHttpClient> {
		let credentials = AppCredentials::new("cid", "csecret", "https://app.example.com/cb");

		Client::with_http_client(credentials, sandbox(), OfflineHttpClient)
			.expect("Valid credentials should build a client.")
	}

	fn assert_send_sync<T: Send + Sync>() {}

	#[test]
	fn client_is_shareable() {
		assert_send_sync::<Client<OfflineHttpClient>>();

		let client = offline_client();
		let clone = client.clone();

		assert!(Arc::ptr_eq(&client.http_client, &clone.http_client));
		assert_eq!(clone.credentials().client_id(), "cid");
	}

	#[test]
	fn invalid_credentials_fail_at_construction() {
		let credentials = AppCredentials::new("cid", "", "https://app.example.com/cb");
		let err = Client::<OfflineHttpClient>::with_http_client(
			credentials,
			sandbox(),
			OfflineHttpClient,
		)
		.expect_err("Empty client secret should be rejected.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::InvalidCredentials(CredentialsError::Empty {
				field: "client_secret"
			}))
		));
	}

	#[test]
	fn hand_built_configs_are_validated_at_construction() {
		let credentials = AppCredentials::new("cid", "csecret", "https://app.example.com/cb");
		let config = ClientConfig {
			base_url: Url::parse("https://api.test.example/v1?tenant=a")
				.expect("Fixture URL should parse."),
			wire_format: WireFormat::Standard,
		};
		let err = Client::<OfflineHttpClient>::with_http_client(
			credentials,
			config,
			OfflineHttpClient,
		)
		.expect_err("Base URL with a query should be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::UnsupportedBaseUrl { .. })));
	}

	#[tokio::test]
	async fn transport_failures_surface_as_transport_errors() {
		let err = offline_client()
			.call(Endpoint::HealthCheck, ApiCall::new())
			.await
			.expect_err("Offline transport should fail the call.");

		assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
	}

	#[tokio::test]
	async fn construction_errors_precede_the_transport() {
		let err = offline_client()
			.call(Endpoint::GetUser, ApiCall::authorized("tok"))
			.await
			.expect_err("Missing path parameter should fail.");

		assert!(matches!(err, Error::Config(ConfigError::PathParameterMismatch { .. })));
	}

	#[test]
	fn debug_output_redacts_the_secret() {
		let rendered = format!("{:?}", offline_client());

		assert!(rendered.contains("cid"));
		assert!(!rendered.contains("csecret"));
	}
}
