//! HTTP transport layer wrapping reqwest.
//!
//! # Design
//! Both transports share one URL-assembly function, so a blocking call and an
//! async call with the same endpoint and pairs hit byte-identical URLs. Each
//! transport owns a pooled reqwest client: the pool is acquired when the
//! transport is built and released when it is dropped, on every exit path.
//! A single attempt per call, no retries; reqwest-level failures are mapped
//! to `Error::Timeout` or `Error::Connection`, non-2xx statuses to
//! `Error::Api` with the raw body.

use std::time::Duration;

use reqwest::{StatusCode, Url};
use tracing::debug;

use crate::error::Error;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.openf1.org/v1";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the full request URL for `endpoint` with `pairs` appended as
/// percent-encoded query parameters.
fn build_url(base_url: &str, endpoint: &str, pairs: &[(String, String)]) -> Result<Url, Error> {
    let mut url = Url::parse(&format!("{base_url}{endpoint}"))
        .map_err(|e| Error::Validation(format!("invalid request URL: {e}")))?;
    if !pairs.is_empty() {
        let mut query = url.query_pairs_mut();
        for (key, value) in pairs {
            query.append_pair(key, value);
        }
    }
    Ok(url)
}

/// Map a reqwest failure to the transport side of the error taxonomy.
fn request_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout(err.to_string())
    } else {
        Error::Connection(err.to_string())
    }
}

/// Accept 2xx bodies, turn everything else into `Error::Api`.
fn check_status(status: StatusCode, body: String) -> Result<String, Error> {
    if status.is_success() {
        Ok(body)
    } else {
        Err(Error::Api {
            status: status.as_u16(),
            body,
        })
    }
}

fn init_error(err: reqwest::Error) -> Error {
    Error::Connection(format!("failed to initialize HTTP client: {err}"))
}

/// Blocking transport backed by `reqwest::blocking::Client`.
#[derive(Debug, Clone)]
pub(crate) struct BlockingTransport {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl BlockingTransport {
    pub(crate) fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(init_error)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET `endpoint` with `pairs` and return the raw response body.
    pub(crate) fn get(&self, endpoint: &str, pairs: &[(String, String)]) -> Result<String, Error> {
        let url = build_url(&self.base_url, endpoint, pairs)?;
        debug!(%url, "GET");
        let response = self.client.get(url).send().map_err(request_error)?;
        let status = response.status();
        let body = response.text().map_err(request_error)?;
        debug!(%status, bytes = body.len(), "response");
        check_status(status, body)
    }
}

/// Async transport backed by `reqwest::Client`.
///
/// Suspends the issuing task at the network await point; scheduling is the
/// caller's executor's concern. Error semantics match `BlockingTransport`.
#[derive(Debug, Clone)]
pub(crate) struct AsyncTransport {
    client: reqwest::Client,
    base_url: String,
}

impl AsyncTransport {
    pub(crate) fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(init_error)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET `endpoint` with `pairs` and return the raw response body.
    pub(crate) async fn get(
        &self,
        endpoint: &str,
        pairs: &[(String, String)],
    ) -> Result<String, Error> {
        let url = build_url(&self.base_url, endpoint, pairs)?;
        debug!(%url, "GET");
        let response = self.client.get(url).send().await.map_err(request_error)?;
        let status = response.status();
        let body = response.text().await.map_err(request_error)?;
        debug!(%status, bytes = body.len(), "response");
        check_status(status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn build_url_without_pairs_has_no_query() {
        let url = build_url(DEFAULT_BASE_URL, "/drivers", &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.openf1.org/v1/drivers");
    }

    #[test]
    fn build_url_appends_pairs_in_order() {
        let url = build_url(
            DEFAULT_BASE_URL,
            "/laps",
            &[pair("session_key", "9161"), pair("driver_number", "1")],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.openf1.org/v1/laps?session_key=9161&driver_number=1"
        );
    }

    #[test]
    fn build_url_percent_encodes_operator_suffixes() {
        let url = build_url(
            DEFAULT_BASE_URL,
            "/laps",
            &[pair("lap_number>=", "5"), pair("lap_number<=", "10")],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.openf1.org/v1/laps?lap_number%3E%3D=5&lap_number%3C%3D=10"
        );
    }

    #[test]
    fn build_url_rejects_garbage_base() {
        let err = build_url("not a url", "/laps", &[]).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn trailing_slash_is_stripped_from_base() {
        let transport = BlockingTransport::new("http://localhost:3000/v1/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(transport.base_url, "http://localhost:3000/v1");
    }

    #[test]
    fn success_status_passes_body_through() {
        let body = check_status(StatusCode::OK, "[]".to_string()).unwrap();
        assert_eq!(body, "[]");
    }

    #[test]
    fn not_found_maps_to_api_error() {
        let err = check_status(StatusCode::NOT_FOUND, "Not Found".to_string()).unwrap_err();
        match err {
            Error::Api { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "Not Found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn server_error_maps_to_api_error() {
        let err =
            check_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()).unwrap_err();
        assert!(matches!(err, Error::Api { status: 500, .. }));
    }
}
