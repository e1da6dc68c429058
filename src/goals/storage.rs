//! Storage operations for study goals
//!
//! All goals live in a single `goals.json` array under the data
//! directory. Reads and writes filter by device id; a goal owned by a
//! different device reads as not found.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::storage::{Result, StorageError};

use super::models::Goal;

/// Storage manager for goal operations
pub struct GoalStorage {
    goals_dir: PathBuf,
}

impl GoalStorage {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        let goals_dir = data_dir.join("goals");
        fs::create_dir_all(&goals_dir)?;
        Ok(Self { goals_dir })
    }

    /// Get the path to the goals list file
    fn goals_file(&self) -> PathBuf {
        self.goals_dir.join("goals.json")
    }

    /// Read every stored goal, across all devices
    fn read_all(&self) -> Result<Vec<Goal>> {
        let path = self.goals_file();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)?;
        let goals: Vec<Goal> = serde_json::from_str(&content)?;
        Ok(goals)
    }

    fn save_all(&self, goals: &[Goal]) -> Result<()> {
        fs::write(self.goals_file(), serde_json::to_string_pretty(goals)?)?;
        Ok(())
    }

    /// List the goals owned by a device
    pub fn list_goals(&self, device_id: &str) -> Result<Vec<Goal>> {
        let goals = self.read_all()?;
        Ok(goals
            .into_iter()
            .filter(|g| g.device_id == device_id)
            .collect())
    }

    /// Get a specific goal owned by the device
    pub fn get_goal(&self, goal_id: Uuid, device_id: &str) -> Result<Goal> {
        self.read_all()?
            .into_iter()
            .find(|g| g.id == goal_id && g.device_id == device_id)
            .ok_or(StorageError::GoalNotFound(goal_id))
    }

    /// Create a new goal
    pub fn create_goal(
        &self,
        device_id: &str,
        title: String,
        description: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Goal> {
        let goal = Goal::new(device_id.to_string(), title, description, now);

        let mut goals = self.read_all()?;
        goals.push(goal.clone());
        self.save_all(&goals)?;

        Ok(goal)
    }

    /// Update a goal's title and description
    pub fn update_goal(
        &self,
        goal_id: Uuid,
        device_id: &str,
        title: String,
        description: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Goal> {
        let mut goals = self.read_all()?;
        let goal = goals
            .iter_mut()
            .find(|g| g.id == goal_id && g.device_id == device_id)
            .ok_or(StorageError::GoalNotFound(goal_id))?;

        goal.title = title;
        goal.description = description;
        goal.updated_at = now;
        let updated = goal.clone();

        self.save_all(&goals)?;
        Ok(updated)
    }

    /// Delete a goal owned by the device
    pub fn delete_goal(&self, goal_id: Uuid, device_id: &str) -> Result<()> {
        let mut goals = self.read_all()?;
        let before = goals.len();
        goals.retain(|g| !(g.id == goal_id && g.device_id == device_id));

        if goals.len() == before {
            return Err(StorageError::GoalNotFound(goal_id));
        }

        self.save_all(&goals)
    }
}
