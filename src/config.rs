//! Client configuration: target environment, base URL, and wire format.
//!
//! Everything is configured in code. [`ClientConfig::builder`] starts from the sandbox with
//! the standard (encoded) wire format; [`ClientConfig::validate`] applies the same base URL
//! rules regardless of where a configuration comes from.

// self
use crate::{_prelude::*, error::ConfigError};

/// Deployment the client talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
	/// Sandbox API for development and testing.
	#[default]
	Sandbox,
	/// Production API.
	Production,
}
impl Environment {
	/// Returns the versioned API root for the environment.
	pub const fn api_base_url(self) -> &'static str {
		match self {
			Environment::Sandbox => "https://api.sandbox.wealthsimple.com/v1",
			Environment::Production => "https://api.wealthsimple.com/v1",
		}
	}
}
impl Display for Environment {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(match self {
			Environment::Sandbox => "sandbox",
			Environment::Production => "production",
		})
	}
}

/// How URLs and bodies are put on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireFormat {
	/// Percent-encoded query and path parameters, no body for body-less calls, and
	/// `get_person` sent as `GET`.
	#[default]
	Standard,
	/// Byte-for-byte reproduction of the legacy client: unencoded `?k=v&` query strings with
	/// a trailing `&`, a JSON `null` payload for body-less calls, and `get_person` sent as
	/// `POST`.
	Legacy,
}

/// Immutable configuration consumed by [`Client`](crate::client::Client).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
	/// Versioned API root every endpoint path is appended to.
	pub base_url: Url,
	/// Wire format used by the request builder.
	pub wire_format: WireFormat,
}
impl ClientConfig {
	/// Creates a new builder seeded with the sandbox environment.
	pub fn builder() -> ClientConfigBuilder {
		ClientConfigBuilder::default()
	}

	/// Configuration targeting a known environment with the standard wire format.
	pub fn for_environment(environment: Environment) -> Result<Self, ConfigError> {
		Self::builder().environment(environment).build()
	}

	/// Checks that the base URL is an absolute http(s) URL without query or fragment.
	pub fn validate(&self) -> Result<(), ConfigError> {
		let url = &self.base_url;
		let supported = matches!(url.scheme(), "http" | "https")
			&& url.has_host()
			&& url.query().is_none()
			&& url.fragment().is_none();

		if supported {
			Ok(())
		} else {
			Err(ConfigError::UnsupportedBaseUrl { url: url.to_string() })
		}
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
	/// Environment used when no explicit base URL is set.
	pub environment: Environment,
	/// Explicit base URL overriding the environment.
	pub base_url: Option<Url>,
	/// Wire format for the request builder.
	pub wire_format: WireFormat,
}
impl ClientConfigBuilder {
	/// Targets a known environment.
	pub fn environment(mut self, environment: Environment) -> Self {
		self.environment = environment;

		self
	}

	/// Overrides the base URL (proxies, mock servers, other regions).
	pub fn base_url(mut self, url: Url) -> Self {
		self.base_url = Some(url);

		self
	}

	/// Parses and sets the base URL.
	pub fn base_url_str(self, url: &str) -> Result<Self, ConfigError> {
		let url = Url::parse(url).map_err(|source| ConfigError::InvalidBaseUrl { source })?;

		Ok(self.base_url(url))
	}

	/// Selects the wire format.
	pub fn wire_format(mut self, wire_format: WireFormat) -> Self {
		self.wire_format = wire_format;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		let base_url = match self.base_url {
			Some(url) => url,
			None => Url::parse(self.environment.api_base_url())
				.map_err(|source| ConfigError::InvalidBaseUrl { source })?,
		};
		let config = ClientConfig { base_url, wire_format: self.wire_format };

		config.validate()?;

		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn defaults_target_the_sandbox() {
		let config = ClientConfig::builder().build().expect("Sandbox config should build.");

		assert_eq!(config.base_url.as_str(), "https://api.sandbox.wealthsimple.com/v1");
		assert_eq!(config.wire_format, WireFormat::Standard);
	}

	#[test]
	fn builder_prefers_explicit_base_url() {
		let config = ClientConfig::builder()
			.environment(Environment::Production)
			.base_url_str("http://127.0.0.1:8080/api")
			.expect("Loopback URL should parse.")
			.wire_format(WireFormat::Legacy)
			.build()
			.expect("Loopback URL should be accepted.");

		assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/api");
		assert_eq!(config.wire_format, WireFormat::Legacy);

		let production = ClientConfig::builder()
			.environment(Environment::Production)
			.build()
			.expect("Production config should build.");

		assert_eq!(
			production,
			ClientConfig::for_environment(Environment::Production)
				.expect("Production config should build.")
		);
	}

	#[test]
	fn builder_rejects_unusable_base_urls() {
		for raw in ["ftp://api.example.com/v1", "https://api.example.com/v1?x=1", "mailto:a@b.c"] {
			let err = ClientConfig::builder()
				.base_url_str(raw)
				.expect("Fixture URL should parse.")
				.build()
				.expect_err("Unusable base URL should be rejected.");

			assert!(matches!(err, ConfigError::UnsupportedBaseUrl { .. }), "{raw}");
		}

		let hand_built = ClientConfig {
			base_url: Url::parse("https://api.example.com/v1#frag").expect("Fixture URL should parse."),
			wire_format: WireFormat::Standard,
		};

		assert!(matches!(hand_built.validate(), Err(ConfigError::UnsupportedBaseUrl { .. })));

		assert!(matches!(
			ClientConfig::builder().base_url_str("not a url"),
			Err(ConfigError::InvalidBaseUrl { .. })
		));
	}
}
