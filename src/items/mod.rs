//! Flashcard items and Leitner scheduling
//!
//! This module provides:
//! - Item CRUD scoped to a device id
//! - The five-box Leitner scheduling algorithm
//! - The due-item query used to build a study session

pub mod leitner;
pub mod models;
pub mod storage;

pub use models::*;
pub use storage::ItemStorage;
