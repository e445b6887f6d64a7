use std::time::Duration;

use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::errors::DigestError;

pub const AIRTABLE_API_BASE: &str = "https://api.airtable.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_ATTEMPTS: usize = 3;

/// Thin client for the Airtable REST API. One GET per call, no queueing;
/// a timed-out request is retried up to two more times with no backoff.
pub struct AirtableApi {
    client: Client,
    base_url: String,
    max_attempts: usize,
}

impl AirtableApi {
    pub fn new(token: &str) -> Self {
        Self::new_with_endpoint(AIRTABLE_API_BASE.to_string(), token, DEFAULT_TIMEOUT)
    }

    pub fn new_with_endpoint(base_url: String, token: &str, timeout: Duration) -> Self {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .expect("token is not a valid header value");
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Fetches `endpoint` and decodes the body as JSON. The status code is
    /// not inspected; a non-2xx body simply fails JSON decoding. Only
    /// timeouts are retried, every other transport error surfaces as-is.
    pub async fn fetch<T>(&self, endpoint: &str) -> Result<T, DigestError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut attempt = 0;

        loop {
            attempt += 1;
            match self.request_text(&url).await {
                Ok(body) => {
                    return serde_json::from_str(&body).map_err(|e| DigestError::Json {
                        url,
                        source: e,
                    });
                }
                Err(e) if e.is_timeout() => {
                    if attempt >= self.max_attempts {
                        error!(url = %url, attempt, "Request timed out {} times. Quitting.", attempt);
                        return Err(DigestError::FetchExhausted {
                            url,
                            attempts: attempt,
                        });
                    }
                    warn!(url = %url, attempt, "Request timed out. Trying again...");
                }
                Err(e) => {
                    return Err(DigestError::Http { url, source: e });
                }
            }
        }
    }

    async fn request_text(&self, url: &str) -> Result<String, reqwest::Error> {
        self.client.get(url).send().await?.text().await
    }
}
