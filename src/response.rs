//! Parsed API responses.
//!
//! The dispatcher resolves every HTTP status to an [`ApiResponse`]; only a body that is not
//! JSON fails the call. Status checking and typed decoding are opt-in helpers.

// self
use crate::{_prelude::*, http::HttpResponse};

const BODY_PREVIEW_LIMIT: usize = 256;

/// Status code plus parsed JSON body of one API call.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
	/// HTTP status code returned by the service.
	pub status: u16,
	/// Parsed JSON body.
	pub body: Value,
}
impl ApiResponse {
	/// Parses a raw transport response.
	///
	/// Fails with [`Error::Parse`] when the body is empty or not valid JSON.
	pub fn from_http(response: HttpResponse) -> Result<Self> {
		let status = response.status().as_u16();

		Self::parse(status, response.body())
	}

	/// Parses `bytes` as the JSON body of a response with `status`.
	pub fn parse(status: u16, bytes: &[u8]) -> Result<Self> {
		match serde_json::from_slice(bytes) {
			Ok(body) => Ok(Self { status, body }),
			Err(source) => Err(Error::Parse {
				source,
				status,
				body_preview: truncate_preview(&String::from_utf8_lossy(bytes)),
			}),
		}
	}

	/// Returns true for `2xx` statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Consumes the response, returning only the body.
	pub fn into_body(self) -> Value {
		self.body
	}

	/// Converts non-`2xx` responses into [`Error::Application`].
	pub fn into_result(self) -> Result<Self> {
		if self.is_success() {
			Ok(self)
		} else {
			Err(Error::Application { status: self.status, body: self.body })
		}
	}

	/// Decodes the body into `T`, reporting the failing JSON path on mismatch.
	pub fn json<T>(&self) -> Result<T>
	where
		T: DeserializeOwned,
	{
		Ok(serde_path_to_error::deserialize(&self.body)?)
	}
}

fn truncate_preview(body: &str) -> String {
	if body.chars().count() <= BODY_PREVIEW_LIMIT {
		return body.to_owned();
	}

	let mut buf = body.chars().take(BODY_PREVIEW_LIMIT).collect::<String>();

	buf.push('…');

	buf
}
