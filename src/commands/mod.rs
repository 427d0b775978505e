mod browse;
mod catalog;
mod config;
mod create;
mod ls;
mod scan;

pub use browse::cmd_browse;
pub use catalog::{cmd_channels, cmd_stores};
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use create::{CreateOptions, cmd_create};
pub use ls::{LsOptions, cmd_ls};
pub use scan::cmd_scan;

use serde_json::Value;

use crate::cli::OutputOptions;
use crate::error::Result;

/// Print a JSON value, pretty-formatted
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Output that can render as JSON or as human-readable text
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn print(self, output: OutputOptions) -> Result<()> {
        match self.text {
            Some(text) if !output.json => {
                println!("{text}");
                Ok(())
            }
            _ => print_json(&self.json),
        }
    }
}
