//! Core domain types and configuration for Placedex.
//!
//! Holds the `Place` input record, the scored `IndexEntry` output record,
//! the `PlaceIndex` aggregate with its on-disk JSON shape, and the
//! env-driven `AppConfig`.

pub mod app_config;
pub mod config;
pub mod entry;
pub mod index;
pub mod place;

pub use app_config::AppConfig;
pub use config::{load_app_config, ConfigError};
pub use entry::{IndexEntry, OpenHours, TimeSlot};
pub use index::PlaceIndex;
pub use place::Place;
