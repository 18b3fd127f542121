use std::time::Duration;

use avgcalc_common::{parse_numbers, FetchError, InvalidResponse, NumberKind};
use tokio_util::sync::CancellationToken;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(500);

/// Fetches number sequences from the evaluation service, usually through the gateway.
#[derive(Debug, Clone)]
pub struct NumberClient {
    base_url: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl NumberClient {
    /// Builds a client for `base_url`. Environment proxy settings are ignored.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().no_proxy().build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            http,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn endpoint(&self, kind: NumberKind) -> String {
        format!("{}{}", self.base_url, kind.path())
    }

    /// Issues one GET for `kind`.
    ///
    /// The request is abandoned when `cancel` fires or the client timeout
    /// elapses; both surface as [`FetchError::Timeout`].
    pub async fn fetch_numbers(
        &self,
        kind: NumberKind,
        cancel: &CancellationToken,
    ) -> Result<Vec<f64>, FetchError> {
        let url = self.endpoint(kind);
        tracing::debug!(%kind, %url, "fetching numbers");

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(FetchError::Timeout),
            _ = tokio::time::sleep(self.timeout) => Err(FetchError::Timeout),
            r = self.get(&url) => r,
        };

        match &result {
            Ok(numbers) => tracing::debug!(%kind, count = numbers.len(), "numbers received"),
            Err(e) => tracing::warn!(%kind, error = %e, "fetch failed"),
        }
        result
    }

    /// Like [`fetch_numbers`](Self::fetch_numbers) but takes the kind by name.
    pub async fn fetch_named(
        &self,
        name: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<f64>, FetchError> {
        let kind: NumberKind = name.parse()?;
        self.fetch_numbers(kind, cancel).await
    }

    async fn get(&self, url: &str) -> Result<Vec<f64>, FetchError> {
        let resp = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| classify(&e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(InvalidResponse::Status(status.as_u16()).into());
        }

        let body = resp.bytes().await.map_err(|e| classify(&e))?;
        Ok(parse_numbers(&body)?)
    }
}

fn classify(e: &reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if e.is_body() || e.is_decode() {
        InvalidResponse::Format.into()
    } else {
        FetchError::NetworkUnreachable
    }
}
