//! # Fyyur Common Library
//!
//! Shared code for the Fyyur booking site:
//! - Database initialization, models and repository queries
//! - Area grouping of venues
//! - Upcoming/past show classification
//! - Configuration loading
//! - Utility functions

pub mod areas;
pub mod config;
pub mod db;
pub mod error;
pub mod schedule;
pub mod search;
pub mod time;

pub use areas::{group_by_area, Area};
pub use error::{Error, Result};
pub use schedule::{ClassifiedShows, Scheduled};
pub use search::SearchResults;
