//! Errors produced by httpfake.

/// Everything that can go wrong while filling in or handing off a fake response.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The value given as a structured body could not be encoded as JSON.
	#[error("Serializing body failed: {0}")]
	Serialize(#[from] serde_json::Error),

	/// The status code can't be written on the wire.
	#[error("Invalid status code: {0}")]
	InvalidStatus(i32),

	/// A header name or value that the HTTP writer refuses.
	#[error("Invalid header {name:?}: {value:?}")]
	InvalidHeader {
		/// The offending header name.
		name: String,
		/// The offending header value.
		value: String,
	},

	/// The HTTP library failed to assemble the response.
	#[cfg(feature = "http")]
	#[error("HTTP error: {0}")]
	Http(#[from] hyper::http::Error),
}

/// Shorthand for results carrying an httpfake [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
