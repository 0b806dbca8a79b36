// TodoStore - Local to-do list with key-value persistence

pub mod config;
pub mod confirm;
pub mod error;
pub mod filter;
pub mod kv;
pub mod models;
pub mod notify;
pub mod record;
pub mod store;
pub mod view;

// Re-export main types for convenience
pub use config::{Backend, Config, ConfigError};
pub use confirm::{Assume, Confirm, PromptConfirm};
pub use error::ValidationError;
pub use filter::Filter;
pub use kv::{FileKv, KeyValueStore, MemoryKv, SqliteKv};
pub use models::{Task, TaskStats, now_ms};
pub use notify::{Notification, Severity};
pub use record::Record;
pub use store::{ClearOutcome, DeleteOutcome, TaskStore};
pub use view::{TaskRow, TaskView};
