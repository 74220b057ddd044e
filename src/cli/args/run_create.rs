//! Argument types for starting a pipeline run

use clap::Args;

use crate::client::CreatePipelineRunOptions;

/// Arguments for the run create command.
#[derive(Args, Debug, Default, Clone)]
pub struct RunCreateArgs {
    /// Trigger to start the run from
    #[arg(long, short = 't')]
    pub trigger: String,

    /// Override a trigger property (NAME=VALUE, repeatable)
    #[arg(long = "property", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub properties: Vec<(String, String)>,

    /// Override a secure trigger property (NAME=VALUE, repeatable)
    #[arg(long = "secure-property", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub secure_properties: Vec<(String, String)>,

    /// Trigger header passed to the run (NAME=VALUE, repeatable)
    #[arg(long = "header", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub headers: Vec<(String, String)>,

    /// Trigger body passed to the run, as JSON
    #[arg(long, value_name = "JSON", value_parser = parse_json)]
    pub body: Option<serde_json::Value>,
}

impl RunCreateArgs {
    /// Build create options for `pipeline_id`.
    pub fn to_options(&self, pipeline_id: &str) -> CreatePipelineRunOptions {
        let mut options = CreatePipelineRunOptions::new(pipeline_id).trigger_name(&self.trigger);

        for (name, value) in &self.properties {
            options = options.property(name, value);
        }
        for (name, value) in &self.secure_properties {
            options = options.secure_property(name, value);
        }
        for (name, value) in &self.headers {
            options = options.header(name, value);
        }
        if let Some(ref body) = self.body {
            options = options.body(body.clone());
        }

        options
    }
}

/// Parse `NAME=VALUE`; the value may itself contain `=`.
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in '{}'", s));
    }
    Ok((name.to_string(), value.to_string()))
}

fn parse_json(s: &str) -> Result<serde_json::Value, String> {
    serde_json::from_str(s).map_err(|e| format!("invalid JSON: {}", e))
}
