use crate::cache::ResponseCache;
use crate::config::TransportConfig;
use crate::error::TransportError;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::de::DeserializeOwned;

/// Shared HTTP client for both outbound services.
///
/// Requests pass through the response cache first; cache misses go to the
/// network with transient failures retried under exponential backoff.
#[derive(Clone)]
pub struct HttpTransport {
    client: ClientWithMiddleware,
}

impl HttpTransport {
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let inner = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;

        let (min_interval, max_interval) = config.backoff_bounds();
        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(min_interval, max_interval)
            .build_with_max_retries(config.max_retries);

        let client = ClientBuilder::new(inner)
            .with(ResponseCache::new(config.cache_ttl()))
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        tracing::debug!(
            ttl_secs = config.cache_ttl_secs,
            max_retries = config.max_retries,
            backoff = config.backoff_factor_secs,
            "http transport ready"
        );
        Ok(Self { client })
    }

    /// GET `url` with `query` and decode the JSON body.
    #[tracing::instrument(level = "debug", skip(self, query))]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, TransportError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}
