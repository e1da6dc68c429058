//! Data models for flashcard items

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::leitner::{self, MIN_BOX};

/// A question/answer flashcard scheduled by the Leitner system
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    /// Opaque owner key; the item is only visible to this device
    pub device_id: String,
    /// Owning goal. Not enforced: the goal may have been deleted.
    pub goal_id: Uuid,
    pub question: String,
    pub answer: String,
    /// Current Leitner box (1-5)
    #[serde(rename = "box")]
    pub leitner_box: i32,
    /// When the item is next due for review; never unset
    pub next_review: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Create a new item in box 1, due immediately
    pub fn new(
        device_id: String,
        goal_id: Uuid,
        question: String,
        answer: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            device_id,
            goal_id,
            question,
            answer,
            leitner_box: MIN_BOX,
            next_review: now,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the item is due for review at the given time
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        leitner::is_due(self.next_review, now)
    }
}

/// Review statistics for one device
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total_items: usize,
    pub due_items: usize,
    /// Item counts for boxes 1 through 5
    pub box_counts: [usize; 5],
}

impl Default for ReviewStats {
    fn default() -> Self {
        Self {
            total_items: 0,
            due_items: 0,
            box_counts: [0; 5],
        }
    }
}
