//! Record identifier minting
//!
//! Ids are millisecond timestamps, bumped past the largest existing id when
//! the clock has not advanced. Two creates in the same millisecond therefore
//! get distinct ids.

use crate::models::RecordId;

/// Mint an id greater than every id in `existing`
pub fn mint_id(existing: impl IntoIterator<Item = RecordId>, now_ms: i64) -> RecordId {
    match existing.into_iter().max() {
        Some(max) if max >= now_ms => max.saturating_add(1),
        _ => now_ms,
    }
}
