use chrono::Weekday;
use thiserror::Error;

/// Everything that can end a run early. Each variant is logged once by the
/// top-level handler in `main`, which then exits with status 1.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("{0} is not a valid run day")]
    InvalidDay(Weekday),

    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingConfig(Vec<&'static str>),

    #[error("TOKEN is not usable as an Authorization header value")]
    InvalidToken,

    #[error("request to {url} timed out {attempts} times")]
    FetchExhausted { url: String, attempts: usize },

    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode response from {url}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("pagination did not terminate after {0} pages")]
    Pagination(u32),

    #[error("record {record_id} has no {field:?} field")]
    MissingField {
        record_id: String,
        field: &'static str,
    },

    #[error("webhook delivery failed: {0}")]
    Webhook(String),
}
