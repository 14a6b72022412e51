//! Startup Migration
//!
//! Backfills `createdAt` and `createdBy` on records written before those
//! fields existed. Runs once when a session opens.

use chrono::{DateTime, SecondsFormat, Utc};
use log::info;

use super::item_store::ItemStore;
use super::traits::KeyValueStore;
use crate::domain::{DomainResult, Item};

/// Outcome of a startup migration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MigrationReport {
    /// Records that received at least one backfilled field
    pub migrated: usize,
    /// Whether the normalized collection was written back
    pub written: bool,
}

/// ISO-8601 timestamp with millisecond precision and a `Z` suffix
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Fill missing creation metadata. Records that already have both fields are unchanged.
pub fn migrate_items(items: &[Item], now: DateTime<Utc>, unknown_author: &str) -> Vec<Item> {
    let created_at = timestamp(now);
    items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            if item.created_at.is_none() {
                item.created_at = Some(created_at.clone());
            }
            if item.created_by.is_none() {
                item.created_by = Some(unknown_author.to_string());
            }
            item
        })
        .collect()
}

/// Migrate a loaded collection and write it back only if anything changed.
///
/// Returns the collection to use as in-memory state.
pub fn run_startup_migration<S: KeyValueStore>(
    store: &ItemStore<S>,
    items: Vec<Item>,
    now: DateTime<Utc>,
    unknown_author: &str,
) -> DomainResult<(Vec<Item>, MigrationReport)> {
    let migrated = migrate_items(&items, now, unknown_author);
    if migrated == items {
        return Ok((items, MigrationReport::default()));
    }

    let count = items
        .iter()
        .zip(&migrated)
        .filter(|(before, after)| before != after)
        .count();
    store.save(&migrated)?;
    info!("backfilled creation metadata on {} items", count);

    Ok((
        migrated,
        MigrationReport {
            migrated: count,
            written: true,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap()
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(timestamp(now()), "2024-05-06T07:08:09.000Z");
    }

    #[test]
    fn test_backfills_missing_fields_only() {
        let mut kept = Item::new(1, "Kept", "2024-01-01");
        kept.created_at = Some("2023-01-01T00:00:00.000Z".to_string());
        kept.created_by = Some("ana".to_string());
        let mut partial = Item::new(2, "Partial", "2024-01-01");
        partial.created_by = Some("bo".to_string());
        let bare = Item::new(3, "Bare", "2024-01-01");

        let out = migrate_items(&[kept.clone(), partial, bare], now(), "Unknown");

        assert_eq!(out[0], kept);
        assert_eq!(out[1].created_at.as_deref(), Some("2024-05-06T07:08:09.000Z"));
        assert_eq!(out[1].created_by.as_deref(), Some("bo"));
        assert_eq!(out[2].created_by.as_deref(), Some("Unknown"));
    }

    #[test]
    fn test_migration_is_idempotent() {
        let items = vec![Item::new(1, "A", "2024-01-01"), Item::new(2, "B", "2024-01-02")];
        let once = migrate_items(&items, now(), "Unknown");
        let later = now() + chrono::Duration::hours(3);
        let twice = migrate_items(&once, later, "Unknown");
        assert_eq!(once, twice);
    }
}
