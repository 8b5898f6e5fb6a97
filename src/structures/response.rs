use serde::Serialize;

use crate::{errors::Result, structures::Headers};

/// A canned HTTP response, filled in by a test and served by a fake server.
///
/// Every setter mutates the response in place and hands it back, so calls can be chained:
///
/// ```
/// use httpfake::structures::Response;
///
/// let mut response = Response::new();
/// response
/// 	.with_status(201)
/// 	.set_header("Content-Type", "application/json")
/// 	.with_body_string(r#"[{"username": "dreamer"}]"#);
///
/// assert_eq!(response.status, 201);
/// ```
#[derive(Default, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct Response {
	/// The status code of the response.
	/// "0" means no status was set. Nothing here is range checked.
	pub status: i32,
	/// The headers of the response.
	pub headers: Headers,
	/// The body of the response.
	pub body: Vec<u8>,
}

impl Response {
	/// Creates an empty response: no status, no headers and no body.
	#[must_use]
	pub fn new() -> Response {
		Response::default()
	}

	/// Sets the status code.
	pub fn with_status(&mut self, status: i32) -> &mut Self {
		self.status = status;
		self
	}

	/// Sets a header, dropping any values already stored under that name.
	pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.headers.set(name, value);
		self
	}

	/// Adds a header value, keeping any values already stored under that name.
	pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.headers.add(name, value);
		self
	}

	/// Sets the body from raw bytes.
	pub fn with_body(&mut self, body: impl Into<Vec<u8>>) -> &mut Self {
		self.body = body.into();
		self
	}

	/// Sets the body from a string.
	pub fn with_body_string(&mut self, body: &str) -> &mut Self {
		self.with_body(body.as_bytes())
	}

	/// Sets the body to the JSON encoding of `body`.
	///
	/// A value that can't be encoded is logged at error level and the body is left as it was.
	/// Use [`Response::try_body_struct`] to handle that case yourself.
	pub fn with_body_struct<T: Serialize + ?Sized>(&mut self, body: &T) -> &mut Self {
		if let Err(e) = self.try_body_struct(body) {
			tracing::error!(
				value = std::any::type_name::<T>(),
				"marshalling body failed with {}",
				e
			);
		}
		self
	}

	/// Sets the body to the JSON encoding of `body`.
	/// # Errors
	/// Returns [`crate::errors::Error::Serialize`] if the value can't be encoded; the body is untouched in that case.
	pub fn try_body_struct<T: Serialize + ?Sized>(&mut self, body: &T) -> Result<&mut Self> {
		let encoded = serde_json::to_vec(body)?;
		Ok(self.with_body(encoded))
	}

	/// The body as text, if it is valid UTF-8.
	#[must_use]
	pub fn body_str(&self) -> Option<&str> {
		std::str::from_utf8(&self.body).ok()
	}

	/// Returns whether the response is OK. An unset status counts as OK.
	#[must_use]
	pub fn is_ok(&self) -> bool {
		self.status == 0 || (200..300).contains(&self.status)
	}
}
