// lib.rs

//! Back/forward style navigation history for an editing surface made of
//! cells. See [`History`].

pub mod error;
pub mod history;

pub use error::HistoryError;
pub use history::{Entry, History, DEFAULT_CAPACITY};
