//! Day-bucketed running-total aggregation over an ordered card sequence.
//!
//! This is the burndown core: one linear pass that folds each card's
//! parenthesized estimate into a cumulative series with one point per
//! contributing calendar day.

use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::estimate::parse_estimate;
use crate::models::{Card, SortField, Timeline, TimelinePoint};

/// Build the burndown [`Timeline`] from `cards`.
///
/// The caller supplies the cards already sorted ascending by `sort_field`;
/// this function does not re-sort. Calendar days are taken in `tz`, so a
/// card stamped late in the UTC evening can land on the previous local day.
///
/// Per card, in input order:
///
/// * A zero or missing estimate contributes nothing and creates no bucket.
/// * A card missing the selected timestamp is skipped with a warning.
/// * A strictly later day than the last bucket appends a new point carrying
///   the updated running total.
/// * The same day, or an out-of-order earlier day, folds into the last
///   bucket instead of inserting a point, so the returned dates stay
///   strictly increasing and the totals non-decreasing.
///
/// Pure with respect to its inputs: the same sequence always yields the
/// same timeline.
pub fn build_timeline<'a, I>(cards: I, sort_field: SortField, tz: Tz) -> Timeline
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut points: Vec<TimelinePoint> = Vec::new();
    let mut running_total: u64 = 0;

    let mut cards_seen = 0u64;
    let mut skipped_zero = 0u64;
    let mut skipped_no_timestamp = 0u64;

    for card in cards {
        cards_seen += 1;

        let estimate = parse_estimate(&card.title);
        if estimate == 0 {
            skipped_zero += 1;
            continue;
        }

        let Some(ts) = sort_field.timestamp_of(card) else {
            warn!(
                "Card \"{}\" has no {:?} timestamp; skipping",
                card.title, sort_field
            );
            skipped_no_timestamp += 1;
            continue;
        };
        let day = ts.with_timezone(&tz).date_naive();

        running_total += estimate;
        match points.last_mut() {
            Some(last) if day > last.date => points.push(TimelinePoint {
                date: day,
                total: running_total,
            }),
            Some(last) => last.total = running_total,
            None => points.push(TimelinePoint {
                date: day,
                total: running_total,
            }),
        }
    }

    debug!(
        "Timeline: {} cards seen, {} without estimate, {} without timestamp, {} day buckets",
        cards_seen,
        skipped_zero,
        skipped_no_timestamp,
        points.len()
    );

    Timeline { points }
}
