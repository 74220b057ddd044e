//! Functional test harness for tektonop
//!
//! Resolves the service from external properties and skips cleanly when
//! none are configured, so the suite is safe to enable anywhere.

use std::env;
use std::path::PathBuf;
use std::process::Command;

use assert_cmd::prelude::*;
use tektonop::client::TektonPipelineClient;
use tektonop::config::ServiceProperties;

pub mod error_tests;
pub mod read_tests;

/// Pipeline used when `TEKTONOP_TEST_PIPELINE_ID` is not set
pub const DEFAULT_TEST_PIPELINE_ID: &str = "94619026-912b-4d92-8f51-6c74f0692d90";

/// Context for functional tests providing command execution and a library client.
pub struct FunctionalTestContext {
    /// Service properties resolved from the credentials file and environment
    pub props: ServiceProperties,
    /// Pipeline the tests read from
    pub pipeline_id: String,
    /// Path to the tektonop binary
    pub binary_path: PathBuf,
}

impl FunctionalTestContext {
    /// Load the external configuration, or `None` (with a notice) when the
    /// service URL is not available.
    pub fn load() -> Option<Self> {
        let props = match ServiceProperties::load() {
            Ok(props) => props,
            Err(err) => {
                eprintln!("SKIPPED: error loading service properties: {}", err);
                return None;
            }
        };

        if props.url.is_none() {
            eprintln!("SKIPPED: external configuration is not available");
            return None;
        }

        let pipeline_id = env::var("TEKTONOP_TEST_PIPELINE_ID")
            .unwrap_or_else(|_| DEFAULT_TEST_PIPELINE_ID.to_string());

        Some(Self {
            props,
            pipeline_id,
            binary_path: assert_cmd::cargo::cargo_bin!("tektonop").to_path_buf(),
        })
    }

    /// Build a library client from the resolved properties.
    pub fn client(&self) -> TektonPipelineClient {
        let url = self.props.url.as_deref().unwrap_or_default();
        TektonPipelineClient::new(url, self.props.bearer_token.clone())
            .expect("service URL should be valid")
    }

    /// Build a Command for the binary. The binary resolves the same
    /// external properties from the inherited environment.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args);
        cmd
    }

    /// Execute command and return an assertion object for chaining.
    pub fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command(args).assert()
    }

    /// Execute command and expect success, returning stdout as String.
    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self
            .command(args)
            .output()
            .expect("Failed to execute command");

        if !output.status.success() {
            panic!(
                "Command failed: tektonop {}\nstderr: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr)
            );
        }

        String::from_utf8_lossy(&output.stdout).to_string()
    }
}
