// src/lib.rs

pub mod config;
pub mod error;
pub mod export;
pub mod state;
pub mod structs;
pub mod table;

#[cfg(feature = "gui")]
pub mod api;
#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod components;

// Re-export commonly used items for convenience
pub use config::ApiConfig;
pub use error::{ExportError, FetchError, SearchError};
pub use state::{QuerySlots, RequestSequencer, ScoreAction, ScoreResults, SlotAction};
pub use structs::*;
