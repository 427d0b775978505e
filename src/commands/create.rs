use serde_json::json;

use super::CommandOutput;
use crate::api::{Channel, ReturnsClient, Store};
use crate::cli::OutputOptions;
use crate::config::Config;
use crate::error::{FieldErrors, Result, ReturnsError};
use crate::form::{ReturnDraft, check_required};
use crate::list::{RemoteSelector, SelectableItem};

pub struct CreateOptions {
    pub tracking: Option<String>,
    pub channel: Option<String>,
    pub store: Option<String>,
}

/// Create a return record from a tracking number, channel and store
pub async fn cmd_create(options: CreateOptions, output: OutputOptions) -> Result<()> {
    let tracking = options.tracking.unwrap_or_default();

    // Missing fields are reported before anything goes over the wire
    let errors = check_required(
        &tracking,
        options.channel.is_some(),
        options.store.is_some(),
    );
    if !errors.is_empty() {
        return Err(ReturnsError::Validation(errors));
    }

    let config = Config::load()?;
    let client = ReturnsClient::from_config(&config)?;

    let mut channels: RemoteSelector<Channel> = RemoteSelector::new("channel");
    let mut stores: RemoteSelector<Store> = RemoteSelector::new("store");
    let (channel_result, store_result) =
        tokio::join!(channels.reload(&client), stores.reload(&client));
    channel_result?;
    store_result?;

    let mut errors = FieldErrors::new();
    let channel = pick(&mut channels, "channel", options.channel.as_deref(), &mut errors);
    let store = pick(&mut stores, "store", options.store.as_deref(), &mut errors);
    let (channel, store) = match (channel, store) {
        (Some(channel), Some(store)) if errors.is_empty() => (channel, store),
        _ => return Err(ReturnsError::Validation(errors)),
    };

    let mut draft = ReturnDraft::new();
    draft.set_tracking(tracking.trim());
    draft.set_channel(Some(channel.clone()));
    draft.set_store(Some(store.clone()));

    let tracking = draft.tracking.clone();
    let record = draft.submit(&client).await?;

    let text = match &record {
        Some(record) => format!(
            "Created return #{} ({tracking}) for {} / {}",
            record.id, channel.name, store.name
        ),
        None => format!("Created return ({tracking}) for {} / {}", channel.name, store.name),
    };
    let json_output = json!({
        "id": record.as_ref().map(|r| r.id),
        "tracking": tracking,
        "channel": channel,
        "store": store,
        "record": record,
    });

    CommandOutput::new(json_output)
        .with_text(text)
        .print(output)
}

/// Resolve an id or code against a loaded selector and select the match.
fn pick<T: SelectableItem>(
    selector: &mut RemoteSelector<T>,
    field: &'static str,
    key: Option<&str>,
    errors: &mut FieldErrors,
) -> Option<T> {
    let key = key?.trim();
    match selector.find(key).cloned() {
        Some(item) => {
            selector.select(item.clone());
            Some(item)
        }
        None => {
            errors.insert(field, format!("no {} matches '{key}'", selector.label()));
            None
        }
    }
}
