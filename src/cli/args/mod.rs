//! Shared CLI argument types
//!
//! This module contains reusable argument structs that can be flattened
//! into commands using `#[command(flatten)]`.

mod common;
mod filters;
mod global;
mod pagination;
mod run_create;

pub use common::OutputFormat;
pub use filters::{
    PropertyFilterArgs, PropertyTypeArg, RunFilterArgs, RunStatusArg, TriggerFilterArgs,
};
pub use global::GlobalOptions;
pub use pagination::PagerArgs;
pub use run_create::RunCreateArgs;
