//! Request builder: turns an endpoint descriptor plus call arguments into an HTTP request.
//!
//! The URL is `base_url + rendered path + query string`. Under [`WireFormat::Standard`] path
//! parameters are pushed as percent-encoded segments and the query is form-urlencoded;
//! under [`WireFormat::Legacy`] every piece is concatenated verbatim, exactly like the legacy
//! client, so reserved characters in caller input reach the wire unescaped (and may make
//! the URI unparsable, which surfaces as [`ConfigError::HttpRequest`]). Standard rendering
//! rejects empty, `.` and `..` path parameters with [`ConfigError::InvalidPathParameter`].

pub mod query;

pub use query::*;

// crates.io
use ::http::{
	HeaderValue,
	header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
// self
use crate::{
	_prelude::*,
	auth::{AppCredentials, TokenSecret},
	config::{ClientConfig, WireFormat},
	endpoint::{EndpointDescriptor, PathSegment},
	error::ConfigError,
	http::HttpRequest,
};

const JSON_MIME: &str = "application/json";
const LEGACY_EMPTY_BODY: &[u8] = b"null";

/// Call-specific arguments forwarded to the dispatcher.
///
/// Every field is optional: the token defaults to the empty string (sent as `Bearer `), and
/// the body defaults to none.
#[derive(Clone, Debug, Default)]
pub struct ApiCall {
	/// Bearer token for the `Authorization` header.
	pub token: TokenSecret,
	/// Values for the `{..}` placeholders of the path template, in order.
	pub path_params: Vec<String>,
	/// Call-specific query parameters.
	pub query: QueryParams,
	/// Serialized JSON body.
	pub body: Option<Vec<u8>>,
}
impl ApiCall {
	/// Creates an unauthenticated call (empty bearer token).
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a call authorized by `token`.
	pub fn authorized(token: impl Into<String>) -> Self {
		Self { token: TokenSecret::new(token), ..Self::default() }
	}

	/// Appends a path parameter.
	pub fn path_param(mut self, value: impl Display) -> Self {
		self.path_params.push(value.to_string());

		self
	}

	/// Merges query parameters into the call.
	pub fn query(mut self, params: QueryParams) -> Self {
		self.query.merge(params);

		self
	}

	/// Serializes `body` as the JSON payload.
	pub fn json<B>(mut self, body: &B) -> Result<Self>
	where
		B: ?Sized + Serialize,
	{
		let bytes = serde_json::to_vec(body).map_err(|source| Error::Serialize { source })?;

		self.body = Some(bytes);

		Ok(self)
	}
}

/// Renders the full URL for `descriptor`.
pub fn build_url(
	base_url: &Url,
	descriptor: &EndpointDescriptor,
	path_params: &[String],
	query: &QueryParams,
	wire_format: WireFormat,
) -> Result<String> {
	let expected = descriptor.path_param_count();

	if expected != path_params.len() {
		return Err(ConfigError::PathParameterMismatch {
			endpoint: descriptor.name,
			expected,
			given: path_params.len(),
		}
		.into());
	}

	let mut params = path_params.iter().map(String::as_str);
	let mut rendered = match wire_format {
		WireFormat::Standard => {
			// Dot segments are dropped by the URL writer and normalized away again by every
			// WHATWG parser even when percent-encoded; an empty one turns `/users/{id}` into
			// `/users/`. All three would reach a different endpoint.
			if let Some(value) =
				path_params.iter().find(|value| matches!(value.as_str(), "" | "." | ".."))
			{
				return Err(ConfigError::InvalidPathParameter {
					endpoint: descriptor.name,
					value: value.to_owned(),
				}
				.into());
			}

			let mut url = base_url.clone();

			{
				let mut segments = url.path_segments_mut().map_err(|_| {
					ConfigError::UnsupportedBaseUrl { url: base_url.to_string() }
				})?;

				segments.pop_if_empty();

				for segment in descriptor.segments() {
					match segment {
						PathSegment::Literal(text) => segments.push(text),
						PathSegment::Param(_) => segments.push(params.next().unwrap_or_default()),
					};
				}
			}

			String::from(url)
		},
		WireFormat::Legacy => {
			let mut raw = base_url.as_str().trim_end_matches('/').to_owned();

			for segment in descriptor.segments() {
				raw.push('/');
				raw.push_str(match segment {
					PathSegment::Literal(text) => text,
					PathSegment::Param(_) => params.next().unwrap_or_default(),
				});
			}

			raw
		},
	};

	rendered.push_str(&query.to_query_string(wire_format));

	Ok(rendered)
}

/// Builds the complete HTTP request for one call.
pub fn build_http_request(
	config: &ClientConfig,
	credentials: &AppCredentials,
	descriptor: &EndpointDescriptor,
	call: ApiCall,
) -> Result<HttpRequest> {
	let wire_format = config.wire_format;
	let ApiCall { token, path_params, query: call_query, body } = call;
	let query = if descriptor.sends_credentials {
		let mut merged = QueryParams::from_credentials(credentials);

		merged.merge(call_query);

		merged
	} else {
		call_query
	};
	let url = build_url(&config.base_url, descriptor, &path_params, &query, wire_format)?;
	let body = match (body, wire_format) {
		(Some(bytes), _) => bytes,
		(None, WireFormat::Standard) => Vec::new(),
		(None, WireFormat::Legacy) => LEGACY_EMPTY_BODY.to_vec(),
	};
	let request = ::http::Request::builder()
		.method(descriptor.method_for(wire_format).to_method())
		.uri(url)
		.header(ACCEPT, HeaderValue::from_static(JSON_MIME))
		.header(CONTENT_TYPE, HeaderValue::from_static(JSON_MIME))
		.header(AUTHORIZATION, bearer_header(&token)?)
		.body(body)
		.map_err(ConfigError::from)?;

	Ok(request)
}

fn bearer_header(token: &TokenSecret) -> Result<HeaderValue> {
	let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose()))
		.map_err(|source| ConfigError::InvalidHeader { header: "authorization", source })?;

	value.set_sensitive(true);

	Ok(value)
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;
	use crate::endpoint::Endpoint;

	fn config(wire_format: WireFormat) -> ClientConfig {
		ClientConfig::builder()
			.base_url_str("https://api.test.example/v1")
			.expect("Fixture base URL should parse.")
			.wire_format(wire_format)
			.build()
			.expect("Fixture config should build.")
	}

	fn credentials() -> AppCredentials {
		AppCredentials::new("cid", "csecret", "https://app.example.com/cb")
	}

	#[test]
	fn standard_urls_encode_path_params() {
		let base = Url::parse("https://api.test.example/v1/").expect("Base URL should parse.");
		let url = build_url(
			&base,
			Endpoint::GetUser.descriptor(),
			&["user 1/2".into()],
			&QueryParams::new(),
			WireFormat::Standard,
		)
		.expect("URL should render.");

		assert_eq!(url, "https://api.test.example/v1/users/user%201%2F2");
	}

	#[test]
	fn legacy_urls_concatenate_verbatim() {
		let base = Url::parse("https://api.test.example/v1").expect("Base URL should parse.");
		let url = build_url(
			&base,
			Endpoint::GetDailyValues.descriptor(),
			&[],
			&QueryParams::from([("account_id", "a-1")]),
			WireFormat::Legacy,
		)
		.expect("URL should render.");

		assert_eq!(url, "https://api.test.example/v1/daily_values/?account_id=a-1&");

		let url = build_url(
			&base,
			Endpoint::HealthCheck.descriptor(),
			&[],
			&QueryParams::new(),
			WireFormat::Legacy,
		)
		.expect("URL should render.");

		assert_eq!(url, "https://api.test.example/v1/healthcheck?");
	}

	#[test]
	fn trailing_slash_survives_standard_rendering() {
		let base = Url::parse("https://api.test.example/v1").expect("Base URL should parse.");
		let url = build_url(
			&base,
			Endpoint::GetDailyValues.descriptor(),
			&[],
			&QueryParams::new(),
			WireFormat::Standard,
		)
		.expect("URL should render.");

		assert_eq!(url, "https://api.test.example/v1/daily_values/");
	}

	#[test]
	fn path_param_count_is_enforced() {
		let base = Url::parse("https://api.test.example/v1").expect("Base URL should parse.");
		let err = build_url(
			&base,
			Endpoint::GetDeposit.descriptor(),
			&[],
			&QueryParams::new(),
			WireFormat::Standard,
		)
		.expect_err("Missing path parameter should be rejected.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::PathParameterMismatch { expected: 1, given: 0, .. })
		));
	}

	#[test]
	fn dot_and_empty_path_params_are_rejected() {
		let base = Url::parse("https://api.test.example/v1").expect("Base URL should parse.");

		for value in ["..", ".", ""] {
			let err = build_url(
				&base,
				Endpoint::GetAccount.descriptor(),
				&[value.into()],
				&QueryParams::new(),
				WireFormat::Standard,
			)
			.expect_err("Collapsing path parameter should be rejected.");

			let Error::Config(ConfigError::InvalidPathParameter { endpoint, value: rejected }) = err
			else {
				panic!("Expected an invalid path parameter error, got {err:?}.");
			};

			assert_eq!(endpoint, "get_account");
			assert_eq!(rejected, value);
		}

		let url = build_url(
			&base,
			Endpoint::GetAccount.descriptor(),
			&["...".into()],
			&QueryParams::new(),
			WireFormat::Standard,
		)
		.expect("Three dots are an ordinary segment.");

		assert_eq!(url, "https://api.test.example/v1/accounts/...");
	}

	#[test]
	fn token_endpoints_carry_credentials_before_call_params() {
		let call = ApiCall::new()
			.query(QueryParams::from([("redirect_uri", "https://override.example/cb")]))
			.json(&json!({ "grant_type": "authorization_code", "code": "abc" }))
			.expect("Body should serialize.");
		let request = build_http_request(
			&config(WireFormat::Standard),
			&credentials(),
			Endpoint::TokenExchange.descriptor(),
			call,
		)
		.expect("Request should build.");
		let url = Url::parse(&request.uri().to_string()).expect("Request URI should parse.");
		let pairs = url.query_pairs().into_owned().collect::<Vec<_>>();

		assert_eq!(request.method(), Method::POST);
		assert_eq!(
			pairs,
			[
				("client_id".to_owned(), "cid".to_owned()),
				("client_secret".to_owned(), "csecret".to_owned()),
				("redirect_uri".to_owned(), "https://override.example/cb".to_owned()),
			]
		);
		assert_eq!(request.headers()[AUTHORIZATION], "Bearer ");
		assert!(request.headers()[AUTHORIZATION].is_sensitive());
	}

	#[test]
	fn bodies_follow_the_wire_format() {
		let standard = build_http_request(
			&config(WireFormat::Standard),
			&credentials(),
			Endpoint::GetPerson.descriptor(),
			ApiCall::authorized("tok").path_param("p-1"),
		)
		.expect("Request should build.");

		assert_eq!(standard.method(), Method::GET);
		assert!(standard.body().is_empty());
		assert_eq!(standard.headers()[ACCEPT], JSON_MIME);
		assert_eq!(standard.headers()[CONTENT_TYPE], JSON_MIME);
		assert_eq!(standard.headers()[AUTHORIZATION], "Bearer tok");

		let legacy = build_http_request(
			&config(WireFormat::Legacy),
			&credentials(),
			Endpoint::GetPerson.descriptor(),
			ApiCall::authorized("tok").path_param("p-1"),
		)
		.expect("Request should build.");

		assert_eq!(legacy.method(), Method::POST);
		assert_eq!(legacy.body().as_slice(), b"null");
		assert_eq!(legacy.uri().to_string(), "https://api.test.example/v1/people/p-1?");
	}

	#[test]
	fn unrepresentable_tokens_are_rejected() {
		let err = build_http_request(
			&config(WireFormat::Standard),
			&credentials(),
			Endpoint::ListUsers.descriptor(),
			ApiCall::authorized("line\nbreak"),
		)
		.expect_err("Control characters cannot be sent in a header.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::InvalidHeader { header: "authorization", .. })
		));
	}
}
