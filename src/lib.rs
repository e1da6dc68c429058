//! Spaced-repetition flashcard backend.
//!
//! Clients identified by an opaque device id create goals (study
//! topics) holding question/answer items, review items, and fetch the
//! items due for today's session. Scheduling follows a fixed five-box
//! Leitner system; see [`items::leitner`].

pub mod config;
pub mod goals;
pub mod items;
pub mod server;
pub mod storage;
