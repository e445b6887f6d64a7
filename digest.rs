use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc, Weekday};
use tracing::{debug, info};

use crate::errors::DigestError;
use crate::fetchers::comments::LatestComment;
use crate::models::records::Record;

/// A comment joined with its parent record's display attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedComment {
    pub id: String,
    pub record_id: String,
    pub record_name: String,
    pub phase: String,
    pub author: String,
    pub created_time: DateTime<Utc>,
    pub text: String,
}

/// Lookback window for the given run day. Runs on Saturday or Sunday are a
/// scheduling mistake and abort before anything else happens; Monday looks
/// back over the weekend.
pub fn window_hours(weekday: Weekday) -> Result<i64, DigestError> {
    match weekday {
        Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri => Ok(24),
        Weekday::Mon => Ok(48),
        Weekday::Sat | Weekday::Sun => Err(DigestError::InvalidDay(weekday)),
    }
}

/// Joins each comment with its parent record. Comments whose record id is not
/// in the fetched set are dropped, not errors. A matching record without a
/// "Record Name" or "Phase" field fails the run.
pub fn enrich(
    comments: Vec<LatestComment>,
    records: &[Record],
) -> Result<Vec<EnrichedComment>, DigestError> {
    let by_id: HashMap<&str, &Record> = records
        .iter()
        .map(|record| (record.id.as_str(), record))
        .collect();

    let mut enriched = Vec::with_capacity(comments.len());

    for comment in comments {
        let Some(record) = by_id.get(comment.record_id.as_str()) else {
            debug!(
                "Dropping comment {} for unknown record {}",
                comment.id, comment.record_id
            );
            continue;
        };

        let record_name = record.fields.record_name.clone().ok_or_else(|| {
            DigestError::MissingField {
                record_id: record.id.clone(),
                field: "Record Name",
            }
        })?;
        let phase =
            record
                .fields
                .phase
                .clone()
                .ok_or_else(|| DigestError::MissingField {
                    record_id: record.id.clone(),
                    field: "Phase",
                })?;

        enriched.push(EnrichedComment {
            id: comment.id,
            record_id: comment.record_id,
            record_name,
            phase,
            author: comment.author,
            created_time: comment.created_time,
            text: comment.text,
        });
    }

    info!("Successfully added record info to comments");

    Ok(enriched)
}

/// Keeps comments created strictly after `now - window_hours`. A comment
/// timestamped exactly at the cutoff is excluded.
pub fn select_recent(
    comments: Vec<EnrichedComment>,
    now: DateTime<Utc>,
    window_hours: i64,
) -> Vec<EnrichedComment> {
    let cutoff = now - Duration::hours(window_hours);

    comments
        .into_iter()
        .filter(|comment| comment.created_time > cutoff)
        .collect()
}

/// `Aug 26 2026 14:30:05`, always UTC.
pub fn format_created(created_time: DateTime<Utc>) -> String {
    created_time.format("%b %d %Y %H:%M:%S").to_string()
}
