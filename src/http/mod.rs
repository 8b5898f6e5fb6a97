//! Hands a finished [`Response`] to hyper, so a fake server can write it out.

use hyper::{
	header::{HeaderName, HeaderValue},
	Body, StatusCode,
};
use serde::Deserialize;

use crate::{
	errors::{Error, Result},
	structures::Response,
};

/// How responses are turned into hyper responses.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
	/// The status sent when the response never had one set.
	pub unset_status: u16,
}

impl Default for HttpConfig {
	fn default() -> Self {
		Self { unset_status: 200 }
	}
}

impl Response {
	/// Builds the hyper response a fake server should reply with.
	/// The response itself is only read, so one canned response can answer any number of requests.
	/// # Errors
	/// Fails if the status is outside 100..=999, or if hyper refuses a header name or value.
	pub fn to_hyper(&self, config: &HttpConfig) -> Result<hyper::Response<Body>> {
		let status = match self.status {
			0 => config.unset_status,
			n => u16::try_from(n).map_err(|_| Error::InvalidStatus(n))?,
		};
		let status =
			StatusCode::from_u16(status).map_err(|_| Error::InvalidStatus(i32::from(status)))?;

		let mut hyper_res = hyper::Response::builder().status(status);
		for (k, v) in self.headers.iter() {
			let invalid = || Error::InvalidHeader {
				name: k.to_string(),
				value: v.to_string(),
			};
			let name = HeaderName::from_bytes(k.as_bytes()).map_err(|_| invalid())?;
			let value = HeaderValue::from_str(v).map_err(|_| invalid())?;
			hyper_res = hyper_res.header(name, value);
		}

		tracing::debug!(
			status = status.as_u16(),
			headers = self.headers.len(),
			body = self.body.len(),
			"serving fake response"
		);
		Ok(hyper_res.body(Body::from(self.body.clone()))?)
	}
}

impl TryFrom<&Response> for hyper::Response<Body> {
	type Error = Error;

	fn try_from(response: &Response) -> Result<Self> {
		response.to_hyper(&HttpConfig::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hyper::header::CONTENT_TYPE;

	async fn body_of(res: hyper::Response<Body>) -> Vec<u8> {
		hyper::body::to_bytes(res.into_body()).await.unwrap().to_vec()
	}

	#[tokio::test]
	async fn unset_status_uses_config() {
		let response = Response::new();
		let res = hyper::Response::<Body>::try_from(&response).unwrap();
		assert_eq!(res.status(), StatusCode::OK);

		let config = HttpConfig { unset_status: 204 };
		let res = response.to_hyper(&config).unwrap();
		assert_eq!(res.status(), StatusCode::NO_CONTENT);
	}

	#[tokio::test]
	async fn copies_everything() {
		let mut response = Response::new();
		response
			.with_status(418)
			.set_header("Content-Type", "text/plain")
			.add_header("X-Id", "1")
			.add_header("x-id", "2")
			.with_body_string("short and stout");

		let res = response.to_hyper(&HttpConfig::default()).unwrap();
		assert_eq!(res.status().as_u16(), 418);
		assert_eq!(res.headers()[CONTENT_TYPE], "text/plain");
		let ids: Vec<_> = res.headers().get_all("x-id").iter().collect();
		assert_eq!(ids, ["1", "2"]);
		assert_eq!(body_of(res).await, b"short and stout");

		// Conversion doesn't consume or change the canned response.
		assert_eq!(response.body_str(), Some("short and stout"));
	}

	#[test]
	fn rejects_unwritable_status() {
		for code in [-1, 99, 1000, 70000] {
			let mut response = Response::new();
			response.with_status(code);
			let err = response.to_hyper(&HttpConfig::default()).unwrap_err();
			assert!(matches!(err, Error::InvalidStatus(_)), "{code}: {err}");
		}
	}

	#[test]
	fn rejects_unwritable_headers() {
		let mut response = Response::new();
		response.set_header("X-Bad", "line\nbreak");
		let err = response.to_hyper(&HttpConfig::default()).unwrap_err();
		assert!(matches!(err, Error::InvalidHeader { ref name, .. } if name == "X-Bad"));

		let mut response = Response::new();
		response.set_header("", "empty name");
		assert!(matches!(
			response.to_hyper(&HttpConfig::default()),
			Err(Error::InvalidHeader { .. })
		));
	}

	#[test]
	fn config_defaults_when_fields_missing() {
		let config: HttpConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config.unset_status, 200);
		let config: HttpConfig = serde_json::from_str(r#"{"unset_status": 404}"#).unwrap();
		assert_eq!(config.unset_status, 404);
	}
}
