use tracing::info;

use crate::airtable_api::AirtableApi;
use crate::config::Config;
use crate::errors::DigestError;
use crate::models::records::{Record, RecordsPage};
use crate::{MAX_PAGES_PER_RUN, PAGE_SIZE};

/// Fetches the complete record set for the configured table, following the
/// opaque `offset` cursor until a page arrives without one. Records are
/// accumulated in arrival order.
pub async fn fetch_all_records(
    api: &AirtableApi,
    config: &Config,
) -> Result<Vec<Record>, DigestError> {
    fetch_all_records_capped(api, config, MAX_PAGES_PER_RUN).await
}

/// Same loop with an explicit page cap. A cursor that never disappears means
/// the API is misbehaving; the run aborts instead of looping forever.
pub async fn fetch_all_records_capped(
    api: &AirtableApi,
    config: &Config,
    max_pages: u32,
) -> Result<Vec<Record>, DigestError> {
    let mut all_records = Vec::new();
    let mut offset: Option<String> = None;
    let mut pages = 0u32;

    loop {
        let endpoint = match &offset {
            None => format!("/v0/{}/{}", config.base_id, config.table_id),
            Some(cursor) => format!(
                "/v0/{}/{}?pageSize={}&offset={}",
                config.base_id, config.table_id, PAGE_SIZE, cursor
            ),
        };

        let page: RecordsPage = api.fetch(&endpoint).await?;
        all_records.extend(page.records);
        pages += 1;

        match page.offset {
            Some(cursor) => {
                if pages >= max_pages {
                    return Err(DigestError::Pagination(pages));
                }
                offset = Some(cursor);
            }
            None => break,
        }
    }

    info!(
        "Retrieved {} records over {} pages",
        all_records.len(),
        pages
    );

    Ok(all_records)
}
