//! `ureq` implementation of [`HawkGateway`].

use std::time::Duration;

use hawks_core::{ErrorBody, GatewayError, Hawk, HawkGateway, HawkId, HawkList, QueryParams};
use ureq::http::{Response, StatusCode};
use ureq::Body;

/// Catalog base URL used when nothing else is configured.
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:8080/hawks";

/// Blocking HTTP client for the catalog REST service.
///
/// Non-success statuses are read as data rather than errors so the
/// service's `{ "error": ... }` body can reach the user.
pub struct HttpGateway {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpGateway {
    /// Create a client rooted at `base_url` (trailing slashes ignored).
    ///
    /// `timeout` bounds each whole request; `None` waits indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Self {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent: config.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn record_url(&self, id: HawkId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

impl HawkGateway for HttpGateway {
    fn list(&self, params: &QueryParams) -> Result<Vec<Hawk>, GatewayError> {
        let url = format!("{}/list", self.base_url);
        let mut request = self.agent.get(&url);
        for (key, value) in params.query_pairs() {
            request = request.query(key, value);
        }
        tracing::debug!(%url, filter = %params.filter, "GET list");

        let response = request.call().map_err(transport_error)?;
        let response = expect_status(response, StatusCode::OK)?;
        let list: HawkList = response
            .into_body()
            .read_json()
            .map_err(|e| GatewayError::Decode(format!("could not parse hawk list: {}", e)))?;
        Ok(list.hawks)
    }

    fn create(&self, hawk: &Hawk) -> Result<(), GatewayError> {
        let body = Hawk {
            id: None,
            ..hawk.clone()
        };
        tracing::debug!(url = %self.base_url, name = %body.name, "POST hawk");
        let response = self
            .agent
            .post(&self.base_url)
            .send_json(&body)
            .map_err(transport_error)?;
        expect_status(response, StatusCode::OK).map(drop)
    }

    fn update(&self, id: HawkId, hawk: &Hawk) -> Result<(), GatewayError> {
        let url = self.record_url(id);
        tracing::debug!(%url, name = %hawk.name, "PUT hawk");
        let response = self
            .agent
            .put(&url)
            .send_json(hawk)
            .map_err(transport_error)?;
        expect_status(response, StatusCode::OK).map(drop)
    }

    fn delete(&self, id: HawkId) -> Result<(), GatewayError> {
        let url = self.record_url(id);
        tracing::debug!(%url, "DELETE hawk");
        let response = self.agent.delete(&url).call().map_err(transport_error)?;
        expect_status(response, StatusCode::NO_CONTENT).map(drop)
    }
}

fn transport_error(err: ureq::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

/// Pass `response` through if it has `expected` status, otherwise turn it
/// into [`GatewayError::Rejected`] carrying the service's message.
fn expect_status(
    response: Response<Body>,
    expected: StatusCode,
) -> Result<Response<Body>, GatewayError> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }
    let text = response.into_body().read_to_string().unwrap_or_default();
    Err(GatewayError::Rejected {
        status: status.as_u16(),
        message: rejection_message(status, &text),
    })
}

/// The `error` field of a JSON error body, else the raw body text, else the
/// status's reason phrase.
fn rejection_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("status {}", status.as_u16()))
}
