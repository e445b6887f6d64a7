use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::{info, warn};

use crate::digest::{EnrichedComment, format_created};
use crate::errors::DigestError;

const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Outbound Slack incoming-webhook client. One POST per logical message,
/// no batching.
pub struct SlackWebhook {
    client: Client,
    url: String,
}

#[derive(Debug, Serialize)]
pub struct Payload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Serialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub block_type: &'static str,
    pub text: BlockText,
}

#[derive(Debug, Serialize)]
pub struct BlockText {
    #[serde(rename = "type")]
    pub text_type: &'static str,
    pub text: String,
}

impl Block {
    fn section(text: String) -> Self {
        Self {
            block_type: "section",
            text: BlockText {
                text_type: "mrkdwn",
                text,
            },
        }
    }
}

impl Payload {
    pub fn header(window_hours: i64) -> Self {
        Self {
            text: Some("Airtable comments summary".to_string()),
            blocks: vec![Block::section(format!(
                "_Airtable comments from the last {window_hours} hours:_"
            ))],
        }
    }

    pub fn comment(comment: &EnrichedComment) -> Self {
        let body = format!(
            "On *{}* (Phase: {})\nBy {} at {} (UTC)\n```{}```",
            comment.record_name,
            comment.phase,
            comment.author,
            format_created(comment.created_time),
            comment.text
        );

        Self {
            text: None,
            blocks: vec![Block::section(body)],
        }
    }
}

impl SlackWebhook {
    pub fn new(url: String) -> Self {
        let client = Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, url }
    }

    /// Sends the digest: a header message announcing the window, then one
    /// message per comment. An empty digest sends nothing and is a normal
    /// exit, not an error.
    pub async fn send_digest(
        &self,
        comments: &[EnrichedComment],
        window_hours: i64,
    ) -> Result<(), DigestError> {
        if comments.is_empty() {
            warn!("No recent comments to send. Quitting.");
            return Ok(());
        }

        self.post(&Payload::header(window_hours)).await?;

        for comment in comments {
            self.post(&Payload::comment(comment)).await?;
        }

        info!("Sent digest with {} comments", comments.len());

        Ok(())
    }

    async fn post(&self, payload: &Payload) -> Result<(), DigestError> {
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| DigestError::Webhook(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DigestError::Webhook(format!("webhook returned HTTP {status}")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    #[test]
    fn header_payload_announces_the_window() {
        let payload = Payload::header(48);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["text"], "Airtable comments summary");
        assert_eq!(json["blocks"][0]["type"], "section");
        assert_eq!(json["blocks"][0]["text"]["type"], "mrkdwn");
        assert_eq!(
            json["blocks"][0]["text"]["text"],
            "_Airtable comments from the last 48 hours:_"
        );
    }

    #[test]
    fn comment_payload_formats_one_section() {
        let comment = EnrichedComment {
            id: "c1".to_string(),
            record_id: "r1".to_string(),
            record_name: "Acme".to_string(),
            phase: "Build".to_string(),
            author: "Dana".to_string(),
            created_time: Utc.with_ymd_and_hms(2026, 8, 26, 14, 30, 5).unwrap(),
            text: "shipping today".to_string(),
        };

        let payload = Payload::comment(&comment);
        let json = serde_json::to_value(&payload).unwrap();

        assert!(json.get("text").is_none());
        assert_eq!(
            json["blocks"][0]["text"]["text"],
            "On *Acme* (Phase: Build)\nBy Dana at Aug 26 2026 14:30:05 (UTC)\n```shipping today```"
        );
    }
}
