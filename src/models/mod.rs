//! Display models for CLI output
//!
//! Converts API response types into CLI-friendly display rows.

pub mod display;

pub use display::{LogDisplay, PipelineDisplay, PropertyDisplay, RunDisplay, TriggerDisplay};
