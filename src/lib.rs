#![warn(missing_docs)]
#![warn(clippy::pedantic)]
//! httpfake builds the canned responses a fake HTTP server replies with in tests.

pub mod errors;

/// Data structures used in httpfake.
pub mod structures {
	mod headers;
	pub use headers::*;
	mod response;
	pub use response::*;
}

#[cfg(feature = "http")]
pub mod http;
