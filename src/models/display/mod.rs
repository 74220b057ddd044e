//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod pipeline;
mod property;
mod run;
mod trigger;

pub use pipeline::PipelineDisplay;
pub use property::PropertyDisplay;
pub use run::{LogDisplay, RunDisplay};
pub use trigger::TriggerDisplay;
