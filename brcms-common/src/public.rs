//! Public landing-page views
//!
//! Read-only projections over the same documents the editors write. No
//! session is needed.

use crate::models::{Performance, Track};
use crate::storage::{CollectionKey, Store};
use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;

/// Number of performances on the landing page
pub const LATEST_PERFORMANCES_LIMIT: usize = 3;

pub const NO_PERFORMANCES_TEXT: &str = "Keine aktuellen Gigs.";
pub const NO_TRACKS_TEXT: &str = "Keine Musik verfügbar.";

/// de-DE short month names
const MONTHS_DE: [&str; 12] = [
    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.", "Dez.",
];

/// How a date is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// Landing page, two-digit day: `01. Mai 2024`
    Public,
    /// Management lists, numeric day: `1. Mai 2024`
    Manage,
}

/// Newest performances first, at most [`LATEST_PERFORMANCES_LIMIT`]
///
/// Unparseable dates sort after every valid date, in stored order.
pub fn latest_performances(store: &Store) -> Vec<Performance> {
    let mut gigs: Vec<Performance> = store.load_collection(CollectionKey::Performances);
    gigs.sort_by(|a, b| newest_first(a.parsed_date(), b.parsed_date()));
    gigs.truncate(LATEST_PERFORMANCES_LIMIT);
    gigs
}

fn newest_first(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// All tracks in stored order
pub fn tracks(store: &Store) -> Vec<Track> {
    store.load_collection(CollectionKey::Tracks)
}

pub fn format_date(date: NaiveDate, style: DateStyle) -> String {
    let month = MONTHS_DE[date.month0() as usize];
    match style {
        DateStyle::Public => format!("{:02}. {} {}", date.day(), month, date.year()),
        DateStyle::Manage => format!("{}. {} {}", date.day(), month, date.year()),
    }
}

/// Format a performance date; unparseable input is returned verbatim
pub fn format_performance_date(gig: &Performance, style: DateStyle) -> String {
    match gig.parsed_date() {
        Some(date) => format_date(date, style),
        None => gig.date.clone(),
    }
}
