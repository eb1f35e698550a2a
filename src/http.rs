//! Purpose: One-shot JSON-over-HTTP POST helper.
//! Exports: `JsonClient`, `DEFAULT_TIMEOUT`.
//! Role: Thin client wrapper for fire-and-decode POST exchanges.
//! Invariants: Exactly one outbound request per call; no retries, no caching.
//! Invariants: Encode and url failures return before any network I/O happens.
//! Invariants: The response stream is drained or dropped on every exit path.

use std::io::{self, Read};
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{Error, ErrorKind};

/// Timeout applied per request when the caller does not configure one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

// Cap on how much of a non-2xx body is quoted in the error message.
// The remainder is drained so the connection can be reused.
const ERROR_BODY_LIMIT: u64 = 4096;

/// Client for single JSON POST exchanges.
///
/// Each call owns its request and response exclusively; the client holds only
/// the transport agent and the timeout, so it is cheap to clone and safe to
/// share across threads.
#[derive(Clone)]
pub struct JsonClient {
    agent: ureq::Agent,
    timeout: Duration,
}

impl JsonClient {
    /// Create a client with the default agent and [`DEFAULT_TIMEOUT`].
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the per-request timeout. It covers the whole exchange:
    /// connect, send, and read.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Swap in a custom agent (custom TLS or proxy configuration).
    pub fn with_agent(mut self, agent: ureq::Agent) -> Self {
        self.agent = agent;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// POST `body` as JSON to `url` and decode the JSON response.
    ///
    /// `body: None` sends an empty request body and omits the Content-Type
    /// header. Returns `Ok(None)` when the server answers 204 No Content.
    pub fn post_json<B, R>(&self, url: &str, body: Option<&B>) -> Result<Option<R>, Error>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let response = self.execute(url, body)?;
        if response.status() == 204 {
            drain(response);
            return Ok(None);
        }

        // Read the whole body before decoding so the stream is always
        // consumed, even when trailing bytes follow the JSON value.
        let mut raw = Vec::new();
        response.into_reader().read_to_end(&mut raw).map_err(|err| {
            Error::new(ErrorKind::Transport)
                .with_message("failed to read response body")
                .with_source(err)
        })?;
        let value = serde_json::from_slice(&raw).map_err(|err| {
            Error::new(ErrorKind::Decode)
                .with_message("invalid response json")
                .with_source(err)
        })?;
        Ok(Some(value))
    }

    /// POST `body` as JSON to `url`, ignoring the response body.
    ///
    /// The status is still classified; the body is drained without being
    /// decoded, so malformed response JSON is not an error here.
    pub fn post_json_discard<B>(&self, url: &str, body: Option<&B>) -> Result<(), Error>
    where
        B: Serialize,
    {
        let response = self.execute(url, body)?;
        drain(response);
        Ok(())
    }

    fn execute<B>(&self, url: &str, body: Option<&B>) -> Result<ureq::Response, Error>
    where
        B: Serialize,
    {
        let payload = match body {
            Some(body) => Some(serde_json::to_vec(body).map_err(|err| {
                Error::new(ErrorKind::Encode)
                    .with_message("failed to encode request json")
                    .with_source(err)
            })?),
            None => None,
        };

        let parsed = Url::parse(url).map_err(|err| {
            Error::new(ErrorKind::Usage)
                .with_message("invalid request url")
                .with_source(err)
        })?;
        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(Error::new(ErrorKind::Usage)
                .with_message("request url must use http or https scheme"));
        }

        let mut request = self
            .agent
            .request("POST", parsed.as_str())
            .timeout(self.timeout)
            .set("Accept", "application/json");
        if payload.is_some() {
            request = request.set("Content-Type", "application/json");
        }

        debug!(url = parsed.as_str(), has_body = payload.is_some(), "json post");

        let result = match &payload {
            Some(bytes) => request.send_bytes(bytes),
            None => request.call(),
        };

        match result {
            Ok(response) => {
                let status = response.status();
                debug!(status, "json post response");
                // ureq only errors on 4xx/5xx; unfollowed redirects land here.
                if !(200..=299).contains(&status) {
                    return Err(status_error(status, response));
                }
                Ok(response)
            }
            Err(ureq::Error::Status(code, response)) => Err(status_error(code, response)),
            Err(ureq::Error::Transport(err)) => Err(Error::new(ErrorKind::Transport)
                .with_message("request failed")
                .with_source(err)),
        }
    }
}

impl Default for JsonClient {
    fn default() -> Self {
        Self::new()
    }
}

fn status_error(code: u16, response: ureq::Response) -> Error {
    let mut reader = response.into_reader();
    let mut snippet = Vec::new();
    let _ = reader
        .by_ref()
        .take(ERROR_BODY_LIMIT)
        .read_to_end(&mut snippet);
    let _ = io::copy(&mut reader, &mut io::sink());
    let snippet = String::from_utf8_lossy(&snippet);
    Error::new(ErrorKind::Status)
        .with_status(code)
        .with_message(snippet.trim().to_string())
}

fn drain(response: ureq::Response) {
    let _ = io::copy(&mut response.into_reader(), &mut io::sink());
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_TIMEOUT, JsonClient};
    use crate::error::ErrorKind;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::time::Duration;

    #[test]
    fn default_timeout_is_five_seconds() {
        assert_eq!(JsonClient::new().timeout(), DEFAULT_TIMEOUT);
        assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(5));
    }

    #[test]
    fn with_timeout_overrides_default() {
        let client = JsonClient::new().with_timeout(Duration::from_millis(250));
        assert_eq!(client.timeout(), Duration::from_millis(250));
    }

    #[test]
    fn unencodable_body_fails_before_network() {
        // Non-string map keys cannot be represented in JSON. The url does
        // not resolve, so reaching the network would fail differently.
        let mut body = HashMap::new();
        body.insert((1u8, 2u8), 3u8);

        let err = JsonClient::new()
            .post_json::<_, Value>("http://unused.invalid", Some(&body))
            .expect_err("encode error");
        assert_eq!(err.kind(), ErrorKind::Encode);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn malformed_url_fails_before_network() {
        let err = JsonClient::new()
            .post_json::<Value, Value>("http://[broken", None)
            .expect_err("usage error");
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let err = JsonClient::new()
            .post_json::<Value, Value>("ftp://example.com/upload", None)
            .expect_err("usage error");
        assert_eq!(err.kind(), ErrorKind::Usage);
        assert!(err.to_string().contains("http or https"));
    }
}
