//! Storage operations for flashcard items
//!
//! Layout under the data directory:
//! ```text
//! items/
//! └── {item-id}.json   # One file per item
//! ```
//!
//! Every read, update and delete filters by device id; an item owned by
//! a different device reads as not found.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::storage::{Result, StorageError};

use super::leitner;
use super::models::{Item, ReviewStats};

/// Storage manager for item operations
pub struct ItemStorage {
    items_dir: PathBuf,
}

impl ItemStorage {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        let items_dir = data_dir.join("items");
        fs::create_dir_all(&items_dir)?;
        Ok(Self { items_dir })
    }

    /// Get the path for a specific item
    fn item_path(&self, item_id: Uuid) -> PathBuf {
        self.items_dir.join(format!("{}.json", item_id))
    }

    // ==================== Item Operations ====================

    /// List a device's items, optionally restricted to one goal
    pub fn list_items(&self, device_id: &str, goal_id: Option<Uuid>) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        for entry in fs::read_dir(&self.items_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                let content = fs::read_to_string(&path)?;
                let item: Item = serde_json::from_str(&content)?;
                if item.device_id == device_id && goal_id.map_or(true, |g| item.goal_id == g) {
                    items.push(item);
                }
            }
        }

        items.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(items)
    }

    /// Get a specific item owned by the device
    pub fn get_item(&self, item_id: Uuid, device_id: &str) -> Result<Item> {
        let path = self.item_path(item_id);
        if !path.exists() {
            return Err(StorageError::ItemNotFound(item_id));
        }

        let content = fs::read_to_string(&path)?;
        let item: Item = serde_json::from_str(&content)?;
        if item.device_id != device_id {
            return Err(StorageError::ItemNotFound(item_id));
        }
        Ok(item)
    }

    /// Persist an item, creating or replacing its file
    pub fn save_item(&self, item: &Item) -> Result<()> {
        let path = self.item_path(item.id);
        fs::write(&path, serde_json::to_string_pretty(item)?)?;
        Ok(())
    }

    /// Create a new item in box 1, due immediately
    pub fn create_item(
        &self,
        device_id: &str,
        goal_id: Uuid,
        question: String,
        answer: String,
        now: DateTime<Utc>,
    ) -> Result<Item> {
        let item = Item::new(device_id.to_string(), goal_id, question, answer, now);
        self.save_item(&item)?;
        Ok(item)
    }

    /// Update an item's question and answer. The box and schedule only
    /// change through [`ItemStorage::review_item`].
    pub fn update_item(
        &self,
        item_id: Uuid,
        device_id: &str,
        question: String,
        answer: String,
        now: DateTime<Utc>,
    ) -> Result<Item> {
        let mut item = self.get_item(item_id, device_id)?;
        item.question = question;
        item.answer = answer;
        item.updated_at = now;
        self.save_item(&item)?;
        Ok(item)
    }

    /// Delete an item owned by the device
    pub fn delete_item(&self, item_id: Uuid, device_id: &str) -> Result<()> {
        let item = self.get_item(item_id, device_id)?;
        fs::remove_file(self.item_path(item.id))?;
        Ok(())
    }

    // ==================== Review Operations ====================

    /// Items due for review at `now`, earliest due first
    pub fn due_items(&self, device_id: &str, now: DateTime<Utc>) -> Result<Vec<Item>> {
        let mut due: Vec<Item> = self
            .list_items(device_id, None)?
            .into_iter()
            .filter(|item| item.is_due(now))
            .collect();

        due.sort_by(|a, b| a.next_review.cmp(&b.next_review));
        Ok(due)
    }

    /// Apply a review outcome to an item and persist the new schedule
    pub fn review_item(
        &self,
        item_id: Uuid,
        device_id: &str,
        correct: bool,
        now: DateTime<Utc>,
    ) -> Result<Item> {
        let mut item = self.get_item(item_id, device_id)?;

        let outcome = leitner::review(item.leitner_box, correct, now);
        item.leitner_box = outcome.leitner_box;
        item.next_review = outcome.next_review;
        item.updated_at = now;

        self.save_item(&item)?;
        Ok(item)
    }

    /// Review statistics for a device
    pub fn review_stats(&self, device_id: &str, now: DateTime<Utc>) -> Result<ReviewStats> {
        let items = self.list_items(device_id, None)?;

        let mut stats = ReviewStats {
            total_items: items.len(),
            ..Default::default()
        };

        for item in &items {
            if item.is_due(now) {
                stats.due_items += 1;
            }
            if (leitner::MIN_BOX..=leitner::MAX_BOX).contains(&item.leitner_box) {
                stats.box_counts[(item.leitner_box - 1) as usize] += 1;
            }
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn create_test_storage() -> (ItemStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = ItemStorage::new(temp_dir.path().to_path_buf()).unwrap();
        (storage, temp_dir)
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_create_starts_in_box_one_and_due() {
        let (storage, _temp) = create_test_storage();
        let now = fixed_now();

        let item = storage
            .create_item("dev-1", Uuid::new_v4(), "Q".into(), "A".into(), now)
            .unwrap();

        assert_eq!(item.leitner_box, 1);
        assert_eq!(item.next_review, now);
        assert!(item.is_due(now));
    }

    #[test]
    fn test_update_leaves_schedule_untouched() {
        let (storage, _temp) = create_test_storage();
        let now = fixed_now();

        let item = storage
            .create_item("dev-1", Uuid::new_v4(), "Q".into(), "A".into(), now)
            .unwrap();
        let reviewed = storage.review_item(item.id, "dev-1", true, now).unwrap();

        let later = now + Duration::hours(2);
        let updated = storage
            .update_item(item.id, "dev-1", "Q2".into(), "A2".into(), later)
            .unwrap();

        assert_eq!(updated.question, "Q2");
        assert_eq!(updated.answer, "A2");
        assert_eq!(updated.leitner_box, reviewed.leitner_box);
        assert_eq!(updated.next_review, reviewed.next_review);
    }

    #[test]
    fn test_review_sequence_promotes_then_resets() {
        let (storage, _temp) = create_test_storage();
        let t0 = fixed_now();

        let item = storage
            .create_item("dev-1", Uuid::new_v4(), "Q".into(), "A".into(), t0)
            .unwrap();

        // Correct review from box 1: lands in box 2, due after the
        // box-2 interval of 3 days.
        let promoted = storage.review_item(item.id, "dev-1", true, t0).unwrap();
        assert_eq!(promoted.leitner_box, 2);
        assert_eq!(promoted.next_review, t0 + Duration::days(3));

        // Incorrect review later: back to box 1, due one day after the
        // review time.
        let t1 = t0 + Duration::days(3);
        let reset = storage.review_item(item.id, "dev-1", false, t1).unwrap();
        assert_eq!(reset.leitner_box, 1);
        assert_eq!(reset.next_review, t1 + Duration::days(1));
    }

    #[test]
    fn test_review_persists_new_state() {
        let (storage, _temp) = create_test_storage();
        let now = fixed_now();

        let item = storage
            .create_item("dev-1", Uuid::new_v4(), "Q".into(), "A".into(), now)
            .unwrap();
        storage.review_item(item.id, "dev-1", true, now).unwrap();

        let reloaded = storage.get_item(item.id, "dev-1").unwrap();
        assert_eq!(reloaded.leitner_box, 2);
        assert_eq!(reloaded.next_review, now + Duration::days(3));
    }

    #[test]
    fn test_due_boundary_is_inclusive() {
        let (storage, _temp) = create_test_storage();
        let now = fixed_now();

        let on_time = storage
            .create_item("dev-1", Uuid::new_v4(), "Q1".into(), "A1".into(), now)
            .unwrap();
        let mut just_after = storage
            .create_item("dev-1", Uuid::new_v4(), "Q2".into(), "A2".into(), now)
            .unwrap();
        just_after.next_review = now + Duration::seconds(1);
        storage.save_item(&just_after).unwrap();

        let due = storage.due_items("dev-1", now).unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, on_time.id);
    }

    #[test]
    fn test_due_items_ordered_earliest_first() {
        let (storage, _temp) = create_test_storage();
        let now = fixed_now();

        let mut hour_ago = storage
            .create_item("dev-1", Uuid::new_v4(), "Q1".into(), "A1".into(), now)
            .unwrap();
        hour_ago.next_review = now - Duration::hours(1);
        storage.save_item(&hour_ago).unwrap();

        let mut day_ago = storage
            .create_item("dev-1", Uuid::new_v4(), "Q2".into(), "A2".into(), now)
            .unwrap();
        day_ago.next_review = now - Duration::days(1);
        storage.save_item(&day_ago).unwrap();

        let due = storage.due_items("dev-1", now).unwrap();
        assert_eq!(due.len(), 2);
        assert_eq!(due[0].id, day_ago.id);
        assert_eq!(due[1].id, hour_ago.id);
        assert!(due[0].next_review <= due[1].next_review);
    }

    #[test]
    fn test_due_query_excludes_future_item() {
        let (storage, _temp) = create_test_storage();
        let now = fixed_now();

        let mut past = storage
            .create_item("dev-1", Uuid::new_v4(), "Q1".into(), "A1".into(), now)
            .unwrap();
        past.next_review = now - Duration::hours(1);
        storage.save_item(&past).unwrap();

        let mut future = storage
            .create_item("dev-1", Uuid::new_v4(), "Q2".into(), "A2".into(), now)
            .unwrap();
        future.next_review = now + Duration::hours(1);
        storage.save_item(&future).unwrap();

        let due = storage.due_items("dev-1", now).unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, past.id);
    }

    #[test]
    fn test_device_isolation() {
        let (storage, _temp) = create_test_storage();
        let now = fixed_now();

        let item = storage
            .create_item("dev-1", Uuid::new_v4(), "Q".into(), "A".into(), now)
            .unwrap();

        // Another device cannot see or touch the item.
        assert!(matches!(
            storage.get_item(item.id, "dev-2"),
            Err(StorageError::ItemNotFound(_))
        ));
        assert!(matches!(
            storage.update_item(item.id, "dev-2", "X".into(), "Y".into(), now),
            Err(StorageError::ItemNotFound(_))
        ));
        assert!(matches!(
            storage.review_item(item.id, "dev-2", true, now),
            Err(StorageError::ItemNotFound(_))
        ));
        assert!(matches!(
            storage.delete_item(item.id, "dev-2"),
            Err(StorageError::ItemNotFound(_))
        ));
        assert!(storage.due_items("dev-2", now).unwrap().is_empty());
        assert!(storage.list_items("dev-2", None).unwrap().is_empty());

        // The failed delete left the owner's item in place.
        assert_eq!(storage.get_item(item.id, "dev-1").unwrap().id, item.id);
    }

    #[test]
    fn test_list_items_goal_filter() {
        let (storage, _temp) = create_test_storage();
        let now = fixed_now();
        let goal_a = Uuid::new_v4();
        let goal_b = Uuid::new_v4();

        storage
            .create_item("dev-1", goal_a, "Q1".into(), "A1".into(), now)
            .unwrap();
        storage
            .create_item("dev-1", goal_a, "Q2".into(), "A2".into(), now)
            .unwrap();
        storage
            .create_item("dev-1", goal_b, "Q3".into(), "A3".into(), now)
            .unwrap();

        assert_eq!(storage.list_items("dev-1", None).unwrap().len(), 3);
        assert_eq!(storage.list_items("dev-1", Some(goal_a)).unwrap().len(), 2);
        assert_eq!(storage.list_items("dev-1", Some(goal_b)).unwrap().len(), 1);
    }

    #[test]
    fn test_delete_removes_item() {
        let (storage, _temp) = create_test_storage();
        let now = fixed_now();

        let item = storage
            .create_item("dev-1", Uuid::new_v4(), "Q".into(), "A".into(), now)
            .unwrap();
        storage.delete_item(item.id, "dev-1").unwrap();

        assert!(matches!(
            storage.get_item(item.id, "dev-1"),
            Err(StorageError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_review_stats_counts() {
        let (storage, _temp) = create_test_storage();
        let now = fixed_now();
        let goal = Uuid::new_v4();

        // Two fresh items (box 1, due now), one promoted to box 2 and
        // scheduled in the future.
        storage
            .create_item("dev-1", goal, "Q1".into(), "A1".into(), now)
            .unwrap();
        storage
            .create_item("dev-1", goal, "Q2".into(), "A2".into(), now)
            .unwrap();
        let promoted = storage
            .create_item("dev-1", goal, "Q3".into(), "A3".into(), now)
            .unwrap();
        storage.review_item(promoted.id, "dev-1", true, now).unwrap();

        let stats = storage.review_stats("dev-1", now).unwrap();
        assert_eq!(stats.total_items, 3);
        assert_eq!(stats.due_items, 2);
        assert_eq!(stats.box_counts, [2, 1, 0, 0, 0]);

        // Stats are device-scoped too.
        let empty = storage.review_stats("dev-2", now).unwrap();
        assert_eq!(empty.total_items, 0);
    }
}
