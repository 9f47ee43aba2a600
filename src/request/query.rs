//! Ordered query parameters and their two wire encodings.

// crates.io
use url::form_urlencoded;
// self
use crate::{_prelude::*, auth::AppCredentials, config::WireFormat};

/// Ordered key/value query parameters.
///
/// Entries keep insertion order; inserting an existing key replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);
impl QueryParams {
	/// Creates an empty parameter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Seeds the parameters with the application credentials, in wire order.
	pub fn from_credentials(credentials: &AppCredentials) -> Self {
		credentials.fields().into_iter().collect()
	}

	/// Adds (or replaces) a parameter and returns the set.
	pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
		self.insert(key, value);

		self
	}

	/// Adds (or replaces) a parameter.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
		let key = key.into();
		let value = value.to_string();

		match self.0.iter_mut().find(|(existing, _)| *existing == key) {
			Some(entry) => entry.1 = value,
			None => self.0.push((key, value)),
		}
	}

	/// Merges `other` into `self`; keys from `other` win.
	pub fn merge(&mut self, other: QueryParams) {
		for (key, value) in other.0 {
			self.insert(key, value);
		}
	}

	/// Looks up a parameter value.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.iter().find(|(existing, _)| existing == key).map(|(_, value)| value.as_str())
	}

	/// Iterates entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when no entry is set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Renders the query suffix appended to the endpoint path.
	///
	/// - [`WireFormat::Standard`]: form-urlencoded pairs behind `?`, or `""` when empty.
	/// - [`WireFormat::Legacy`]: `?` followed by `key=value&` for every entry, unencoded, so an
	///   empty set renders as `?` and a non-empty one always ends with `&`.
	pub fn to_query_string(&self, wire_format: WireFormat) -> String {
		match wire_format {
			WireFormat::Standard => {
				if self.is_empty() {
					return String::new();
				}

				let encoded =
					form_urlencoded::Serializer::new(String::new()).extend_pairs(self.iter()).finish();

				format!("?{encoded}")
			},
			WireFormat::Legacy => self.iter().fold(String::from("?"), |mut acc, (key, value)| {
				acc.push_str(key);
				acc.push('=');
				acc.push_str(value);
				acc.push('&');

				acc
			}),
		}
	}
}
impl<K, V> FromIterator<(K, V)> for QueryParams
where
	K: Into<String>,
	V: Display,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		let mut params = Self::new();

		for (key, value) in iter {
			params.insert(key, value);
		}

		params
	}
}
impl<K, V, const N: usize> From<[(K, V); N]> for QueryParams
where
	K: Into<String>,
	V: Display,
{
	fn from(entries: [(K, V); N]) -> Self {
		entries.into_iter().collect()
	}
}
