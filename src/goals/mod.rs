//! Study goals module

pub mod models;
pub mod storage;

pub use models::*;
pub use storage::GoalStorage;
