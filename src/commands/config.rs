//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one value
//! - `config set`: Set a value and save

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::config::{API_URL_ENV, Config};
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let effective_url = config.base_url();
    let env_override = effective_url != config.api.base_url;

    let json_output = json!({
        "api": {
            "base_url": config.api.base_url,
            "effective_base_url": effective_url,
            "timeout_secs": config.api.timeout_secs,
            "connect_timeout_secs": config.api.connect_timeout_secs,
        },
        "list": {
            "page_limit": config.list.page_limit,
            "search_debounce_ms": config.list.search_debounce_ms,
        },
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));

    text_output.push_str(&format!("{}:\n", "api".cyan()));
    text_output.push_str(&format!("  base_url: {}\n", config.api.base_url));
    if env_override {
        text_output.push_str(&format!(
            "  {}\n",
            format!("(overridden by {API_URL_ENV}={effective_url})").yellow()
        ));
    }
    text_output.push_str(&format!("  timeout_secs: {}\n", config.api.timeout_secs));
    text_output.push_str(&format!(
        "  connect_timeout_secs: {}\n\n",
        config.api.connect_timeout_secs
    ));

    text_output.push_str(&format!("{}:\n", "list".cyan()));
    text_output.push_str(&format!("  page_limit: {}\n", config.list.page_limit));
    text_output.push_str(&format!(
        "  search_debounce_ms: {}\n\n",
        config.list.search_debounce_ms
    ));

    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", Config::config_path().display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}

/// Print a single configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.get(key)?);
    Ok(())
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    println!("Set {} = {}", key.cyan(), config.get(key)?);
    Ok(())
}
