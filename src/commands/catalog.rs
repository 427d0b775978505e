//! Store and channel listing commands.

use serde::Serialize;
use serde_json::json;

use super::CommandOutput;
use crate::api::{CatalogSource, Channel, ReturnsClient, Store};
use crate::cli::OutputOptions;
use crate::config::Config;
use crate::display::catalog_table;
use crate::error::Result;
use crate::list::{RemoteSelector, SelectableItem};

pub async fn cmd_stores(filter: Option<&str>, output: OutputOptions) -> Result<()> {
    list_catalog::<Store>("store", filter, output).await
}

pub async fn cmd_channels(filter: Option<&str>, output: OutputOptions) -> Result<()> {
    list_catalog::<Channel>("channel", filter, output).await
}

async fn list_catalog<T>(label: &str, filter: Option<&str>, output: OutputOptions) -> Result<()>
where
    T: SelectableItem + Serialize,
    ReturnsClient: CatalogSource<T>,
{
    let config = Config::load()?;
    let client = ReturnsClient::from_config(&config)?;

    let mut selector: RemoteSelector<T> = RemoteSelector::new(label);
    selector.reload(&client).await?;

    let matches = selector.filter(filter.unwrap_or("").trim());

    let json_output = json!(matches);
    let text_output = if matches.is_empty() {
        match filter {
            Some(f) if !f.trim().is_empty() => format!("No {label} matches '{}'.", f.trim()),
            _ => format!("No {label}s available."),
        }
    } else {
        format!("{}\n{} {label}(s)", catalog_table(&matches), matches.len())
    };

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}
