use std::time::Duration;

use lexa_config::network::NetworkConfig;
use reqwest::header::ACCEPT;
use reqwest::{IntoUrl, RequestBuilder, Url};
use serde::Serialize;

use crate::error::ProviderError;

/// One-shot JSON calls against external providers.
///
/// Every call is bounded by the attempt timeout and classified into a
/// [`ProviderError`]; there are no retries at this level.
#[derive(Clone)]
pub struct ProviderClient {
    client: reqwest::Client,
    attempt_timeout: Duration,
}

impl ProviderClient {
    pub fn new(config: &NetworkConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            attempt_timeout: config.attempt_timeout(),
        })
    }

    pub fn with_timeout(attempt_timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            attempt_timeout,
        }
    }

    pub async fn get_json<U: IntoUrl>(
        &self,
        url: U,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, ProviderError> {
        let request = self.client.get(url).query(query);
        self.execute(request).await
    }

    pub async fn post_json<U: IntoUrl, B: Serialize + ?Sized>(
        &self,
        url: U,
        body: &B,
    ) -> Result<serde_json::Value, ProviderError> {
        let request = self.client.post(url).json(body);
        self.execute(request).await
    }

    async fn execute(&self, request: RequestBuilder) -> Result<serde_json::Value, ProviderError> {
        let attempt = async {
            let response = request.header(ACCEPT, "application/json").send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(ProviderError::Status(status.as_u16()));
            }

            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| ProviderError::Malformed(e.to_string()))
        };

        tokio::time::timeout(self.attempt_timeout, attempt)
            .await
            .map_err(|_| ProviderError::Timeout(self.attempt_timeout))?
    }
}

/// Append `segment` to `base` as a single, percent-encoded path segment
pub fn url_with_segment(base: &str, segment: &str) -> Result<Url, ProviderError> {
    let mut url =
        Url::parse(base).map_err(|e| ProviderError::Malformed(format!("bad base URL: {e}")))?;

    url.path_segments_mut()
        .map_err(|_| ProviderError::Malformed(format!("URL cannot be a base: {base}")))?
        .pop_if_empty()
        .push(segment);

    Ok(url)
}

/// Host part of `url`, if it has one
pub fn host_of(url: &str) -> Option<String> {
    Url::parse(url).ok()?.host_str().map(str::to_string)
}
