use airtable_digest::airtable_api::AirtableApi;
use airtable_digest::config::Config;
use airtable_digest::digest;
use airtable_digest::errors::DigestError;
use airtable_digest::fetchers::comments::fetch_latest_comments;
use airtable_digest::fetchers::records::fetch_all_records;
use airtable_digest::slack::SlackWebhook;
use airtable_digest::telemetry::setup_tracing;
use chrono::{DateTime, Datelike, Utc};
use dotenv::dotenv;
use tracing::error;

#[tokio::main]
async fn main() {
    dotenv().ok();
    setup_tracing();

    if let Err(e) = run(Utc::now()).await {
        error!(error = %e, "Run aborted");
        std::process::exit(1);
    }
}

async fn run(now: DateTime<Utc>) -> Result<(), DigestError> {
    // The scheduling gate comes before any network call; an invalid run day
    // must not burn API quota.
    let window_hours = digest::window_hours(now.weekday())?;
    let config = Config::from_env()?;

    let api = AirtableApi::new(&config.token);
    let records = fetch_all_records(&api, &config).await?;
    let comments = fetch_latest_comments(&api, &config, &records).await?;

    let enriched = digest::enrich(comments, &records)?;
    let recent = digest::select_recent(enriched, now, window_hours);

    let webhook = SlackWebhook::new(config.webhook_url.clone());
    webhook.send_digest(&recent, window_hours).await
}
