//! Status command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::cli::context::resolve_config;
use crate::client::DEFAULT_PAGE_LIMIT;
use crate::config::{CREDENTIALS_FILE_ENV, Config};
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "tektonop Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not found)".dimmed()
        );
    }

    if let Some(path) = std::env::var_os(CREDENTIALS_FILE_ENV) {
        println!("Credentials file: {}", path.to_string_lossy().cyan());
    }

    println!();

    match resolve_config(opts) {
        Ok(config) => {
            match config.service_url {
                Some(ref url) => println!("{} Service URL: {}", "✓".green(), url.cyan()),
                None => {
                    println!("{} Service URL not configured", "✗".red());
                    println!("  → Set service_url in the config file or CD_TEKTON_PIPELINE_URL");
                }
            }

            if config.bearer_token.is_some() {
                println!("{} Bearer token configured", "✓".green());
            } else {
                println!("{} No bearer token (requests are unauthenticated)", "○".dimmed());
            }

            match config.default_pipeline_id {
                Some(ref id) => println!("{} Default pipeline: {}", "✓".green(), id),
                None => {
                    println!("{} No default pipeline set", "○".dimmed());
                    println!("  → Pass --pipeline or run: tektonop config set default-pipeline <ID>");
                }
            }

            match config.preferences.page_size {
                Some(size) => println!("{} Page size: {}", "○".dimmed(), size),
                None => println!(
                    "{} Page size: service default ({})",
                    "○".dimmed(),
                    DEFAULT_PAGE_LIMIT
                ),
            }
            if let Some(format) = config.preferences.format {
                println!("{} Output format: {}", "○".dimmed(), format.as_str());
            }
            println!();
        }
        Err(err) => {
            println!("{} {}", "✗".red(), err);
            println!();
        }
    }

    Ok(())
}
