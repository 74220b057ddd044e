//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

/// Format a single record: a one-row table, or a JSON object.
pub fn format_single<T: Tabled + Serialize>(item: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(table::format_table(std::slice::from_ref(item))),
        OutputFormat::Json => Ok(json::format_json(item)?),
    }
}

/// Format and print a single record to stdout
pub fn print_single<T: Tabled + Serialize>(item: &T, format: OutputFormat) -> Result<()> {
    println!("{}", format_single(item, format)?);
    Ok(())
}
