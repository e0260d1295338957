#![forbid(unsafe_code)]

//! Core domain model and business logic for the MamaStrength postpartum
//! exercise application.
//!
//! This crate provides:
//! - Domain types (exercises, tag vocabularies, filters, quick picks)
//! - The static exercise catalog
//! - The selection engine (filtering, search, time-budget packing)
//! - Local persistence for favorites and completion history on SQLite

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod db;
pub mod selection;
pub mod preferences;
pub mod completions;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use db::Database;
pub use selection::{
    all_categories, all_duration_ranges, all_requirements, filter_exercises,
    find_exercises_for_quick_pick, find_exercises_for_time_limit, quick_pick_option,
    quick_pick_options, total_duration,
};
pub use preferences::PreferenceStore;
pub use completions::CompletionStore;
