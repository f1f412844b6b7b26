//! HTTP transport for the Proxy6 API
//!
//! Every vendor call is a GET request of the form
//! `{base_url}/{api_key}/{method}?{params}`. Responses are JSON objects
//! carrying a `status` field; anything other than `"yes"` is a rejection
//! described by `error_id` and `error`.

use std::time::Duration;

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    config::Proxy6ClientConfig,
    error::{Proxy6Error, Result},
};

/// Low-level HTTP client handling the vendor's request layout and
/// response envelope
pub struct Proxy6HttpClient {
    client: Client,
    config: Proxy6ClientConfig,
}

impl Proxy6HttpClient {
    /// Create a new HTTP client
    pub fn new(config: Proxy6ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Build the full URL for a vendor method
    fn build_url(&self, method: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.api_key,
            method
        )
    }

    /// Make a request without parameters
    pub async fn get<T: DeserializeOwned>(&self, method: &str) -> Result<T> {
        // Log the method only; the URL embeds the API key.
        debug!("requesting {}", method);

        let response = self.client.get(self.build_url(method)).send().await?;
        self.handle_response(method, response).await
    }

    /// Make a request with query parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        method: &str,
        query: &Q,
    ) -> Result<T> {
        debug!("requesting {}", method);

        let response = self
            .client
            .get(self.build_url(method))
            .query(query)
            .send()
            .await?;
        self.handle_response(method, response).await
    }

    /// Check the transport status and the vendor envelope, then parse the
    /// payload
    async fn handle_response<T: DeserializeOwned>(
        &self,
        method: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{} failed with status {}", method, status);
            return Err(Proxy6Error::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let payload: serde_json::Value = response.json().await?;
        match payload.get("status").and_then(|v| v.as_str()) {
            Some("yes") => Ok(serde_json::from_value(payload)?),
            _ => {
                let code = payload
                    .get("error_id")
                    .and_then(|v| v.as_i64())
                    .unwrap_or(-1);
                let description = payload
                    .get("error")
                    .and_then(|v| v.as_str())
                    .unwrap_or("unknown error")
                    .to_string();
                warn!("{} rejected: {} (code {})", method, description, code);
                Err(Proxy6Error::select(code, description))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let config = Proxy6ClientConfig::new("1e339044");
        let client = Proxy6HttpClient::new(config).unwrap();

        assert_eq!(
            client.build_url("getprice"),
            "https://proxy6.net/api/1e339044/getprice"
        );
    }

    #[test]
    fn test_build_url_trims_trailing_slash() {
        let config =
            Proxy6ClientConfig::new("key").with_base_url("http://localhost:8080/api/");
        let client = Proxy6HttpClient::new(config).unwrap();

        assert_eq!(
            client.build_url("getcount"),
            "http://localhost:8080/api/key/getcount"
        );
    }
}
