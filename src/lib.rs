//! tektonop - client and CLI for the Continuous Delivery Tekton pipeline service
//!
//! The [`client`] module holds the API client and the cursor [`Pager`] used to
//! walk paginated collections such as the runs of a pipeline.
//!
//! [`Pager`]: client::Pager

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod output;

pub use error::{ApiError, ConfigError, Error, Result};
