//! `reqwest`-backed [`RemoteStore`].

use super::{Method, RemoteStore, StoreError, StoreReply, StoreRequest};
use crate::config::AdminConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Network store talking JSON to the catalog API.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    base_url: String,
}

impl HttpStore {
    /// Builds a store for `base_url`. No request timeout is applied when `timeout` is `None`.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, StoreError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &AdminConfig) -> Result<Self, StoreError> {
        Self::new(&config.base_url, config.timeout.map(Duration::from_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl RemoteStore for HttpStore {
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: StoreRequest) -> Result<StoreReply, StoreError> {
        let url = self.url(&request.path);
        let mut req = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice::<Value>(&bytes).unwrap_or_else(|e| {
            warn!(status, error = %e, "Response body is not JSON");
            Value::Null
        });
        debug!(status, "Reply received");
        Ok(StoreReply::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let store = HttpStore::new("http://localhost:9000/", None).unwrap();
        assert_eq!(store.base_url(), "http://localhost:9000");
        assert_eq!(store.url("/api/categorias"), "http://localhost:9000/api/categorias");
        assert_eq!(store.url("api/productos/3"), "http://localhost:9000/api/productos/3");
    }
}
