//! Leitner five-box scheduling
//!
//! Items live in boxes 1-5. A correct review promotes an item one box
//! (capped at 5) and schedules it after the new box's interval; an
//! incorrect review sends it back to box 1 with a fixed one-day
//! penalty. All functions here are pure: the current time is always an
//! explicit parameter, never read from the system clock.

use chrono::{DateTime, Duration, Utc};

/// Lowest box, where every item starts and failed items return to.
pub const MIN_BOX: i32 = 1;

/// Highest box; correct reviews stop promoting here.
pub const MAX_BOX: i32 = 5;

/// Review intervals in days for boxes 1 through 5.
const BOX_INTERVALS_DAYS: [i64; 5] = [1, 3, 7, 14, 30];

/// Days until the next attempt after an incorrect answer.
///
/// Currently equal to the box-1 interval, but a separate policy: kept
/// as its own constant so either can change without the other.
const INCORRECT_PENALTY_DAYS: i64 = 1;

/// Fallback interval for a box value outside 1-5.
const DEFAULT_INTERVAL_DAYS: i64 = 1;

/// New box and due time produced by a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewOutcome {
    pub leitner_box: i32,
    pub next_review: DateTime<Utc>,
}

/// Review interval in days for a box.
pub fn interval_days(leitner_box: i32) -> i64 {
    match leitner_box {
        MIN_BOX..=MAX_BOX => BOX_INTERVALS_DAYS[(leitner_box - 1) as usize],
        _ => DEFAULT_INTERVAL_DAYS,
    }
}

/// Calculate the new box and next due time for a review outcome.
///
/// On a correct answer the interval of the item's *new* box applies.
/// Every input maps to a defined output; out-of-range boxes fall back
/// to the one-day default interval.
pub fn review(leitner_box: i32, correct: bool, now: DateTime<Utc>) -> ReviewOutcome {
    if correct {
        let new_box = (leitner_box + 1).min(MAX_BOX);
        ReviewOutcome {
            leitner_box: new_box,
            next_review: now + Duration::days(interval_days(new_box)),
        }
    } else {
        ReviewOutcome {
            leitner_box: MIN_BOX,
            next_review: now + Duration::days(INCORRECT_PENALTY_DAYS),
        }
    }
}

/// Whether an item scheduled for `next_review` is due at `now`.
///
/// The boundary is inclusive: an item due exactly now is due.
pub fn is_due(next_review: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    next_review <= now
}
