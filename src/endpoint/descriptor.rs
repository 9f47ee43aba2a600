//! Endpoint descriptor data structures and path-template helpers.

// self
use crate::{_prelude::*, config::WireFormat};

/// HTTP verbs used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
	/// `GET`
	Get,
	/// `POST`
	Post,
	/// `PATCH`
	Patch,
}
impl HttpMethod {
	/// Returns the method token as sent on the wire.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
			HttpMethod::Patch => "PATCH",
		}
	}

	/// Converts into the [`http`](::http) crate's method type.
	pub fn to_method(self) -> Method {
		match self {
			HttpMethod::Get => Method::GET,
			HttpMethod::Post => Method::POST,
			HttpMethod::Patch => Method::PATCH,
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// One piece of a path template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathSegment<'a> {
	/// Fixed text.
	Literal(&'a str),
	/// `{name}` placeholder filled by a caller-supplied path parameter.
	Param(&'a str),
}

/// Immutable descriptor consumed by the request builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EndpointDescriptor {
	/// Operation name (`get_user`, `token_exchange`, ...).
	pub name: &'static str,
	/// HTTP method.
	pub method: HttpMethod,
	/// Path template relative to the base URL; `{name}` marks a path parameter.
	pub path: &'static str,
	/// Method the legacy client used when it differs from [`EndpointDescriptor::method`].
	pub legacy_method: Option<HttpMethod>,
	/// Whether the application credentials are merged into the query string.
	pub sends_credentials: bool,
}
impl EndpointDescriptor {
	/// Returns the method to send for the given wire format.
	pub fn method_for(&self, wire_format: WireFormat) -> HttpMethod {
		match (wire_format, self.legacy_method) {
			(WireFormat::Legacy, Some(legacy)) => legacy,
			_ => self.method,
		}
	}

	/// Iterates the `/`-separated segments of the path template.
	///
	/// A trailing slash yields a final empty literal so it survives rendering.
	pub fn segments(&self) -> impl Iterator<Item = PathSegment<'static>> {
		self.path.strip_prefix('/').unwrap_or(self.path).split('/').map(|segment| {
			match segment.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')) {
				Some(name) => PathSegment::Param(name),
				None => PathSegment::Literal(segment),
			}
		})
	}

	/// Number of path parameters the template expects.
	pub fn path_param_count(&self) -> usize {
		self.segments().filter(|segment| matches!(segment, PathSegment::Param(_))).count()
	}
}
