use chrono::{DateTime, Utc};
use tracing::info;

use crate::PAGE_SIZE;
use crate::airtable_api::AirtableApi;
use crate::config::Config;
use crate::errors::DigestError;
use crate::models::comments::CommentsPage;
use crate::models::records::Record;

/// The newest comment of one record, reduced to the fields the digest needs.
#[derive(Debug, Clone, PartialEq)]
pub struct LatestComment {
    pub record_id: String,
    pub id: String,
    pub author: String,
    pub created_time: DateTime<Utc>,
    pub text: String,
}

/// Walks the records in paginator order and pulls each one's newest comment.
/// Records without comments are skipped silently; that is the common case,
/// not a failure. The newest comment is picked by `createdTime` rather than
/// by array position, since the API does not document a sort order.
pub async fn fetch_latest_comments(
    api: &AirtableApi,
    config: &Config,
    records: &[Record],
) -> Result<Vec<LatestComment>, DigestError> {
    let mut latest = Vec::new();

    for record in records {
        let endpoint = format!(
            "/v0/{}/{}/{}/comments?pageSize={}",
            config.base_id, config.table_id, record.id, PAGE_SIZE
        );

        let page: CommentsPage = api.fetch(&endpoint).await?;

        let Some(newest) = page
            .comments
            .into_iter()
            .max_by_key(|comment| comment.created_time)
        else {
            continue;
        };

        info!("Retrieved comment for record {}", record.id);

        latest.push(LatestComment {
            record_id: record.id.clone(),
            id: newest.id,
            author: newest.author.name,
            created_time: newest.created_time,
            text: newest.text,
        });
    }

    info!("Retrieved {} comments", latest.len());

    Ok(latest)
}
