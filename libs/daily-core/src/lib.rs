//! Core daily note library shared by the backend and its tooling.
//!
//! Provides:
//! - The compiled-in message catalog
//! - Calendar helpers (date keys, special date, day counter)
//! - No-repeat message selection with an injectable random source
//! - The persisted app state, its stores, and the daily state engine

pub mod calendar;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod selection;
pub mod state;
pub mod store;
pub mod types;

pub use calendar::{Clock, SystemClock};
pub use engine::{DailyEngine, Today};
pub use error::{Result, StoreError};
pub use selection::{MessagePicker, RandomPicker, NO_REPEAT_WINDOW};
pub use store::{MemoryStore, StateStore, STORAGE_KEY};
pub use types::{AppState, Category, MessageId, MessageRecord, Resolution};
