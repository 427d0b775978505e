use std::sync::Arc;

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::api::{ReturnRecord, ReturnsClient};
use crate::cli::OutputOptions;
use crate::config::Config;
use crate::display::{returns_table, status_line};
use crate::error::{Result, ReturnsError};
use crate::list::{ListSession, ListStatus};

pub struct LsOptions {
    pub search: Option<String>,
    pub limit: Option<u32>,
    pub pages: u32,
    pub all: bool,
}

/// List return records, loading as many pages as requested
pub async fn cmd_ls(options: LsOptions, output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let client = Arc::new(ReturnsClient::from_config(&config)?);
    let limit = options.limit.unwrap_or(config.list.page_limit).max(1);
    let search = options.search.unwrap_or_default();

    let mut session: ListSession<_, ReturnRecord> = ListSession::new(client, limit);
    session.reset(search.trim());
    session.settle().await;

    if session.state().status == ListStatus::Failed {
        let message = session
            .state()
            .last_error
            .as_ref()
            .map(|e| e.message.clone())
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(ReturnsError::Other(format!("failed to load returns: {message}")));
    }

    while (options.all || session.state().page < options.pages) && session.load_more() {
        session.settle().await;
        if session.state().last_error.is_some() {
            // Keep what loaded; a failed page is not fatal
            break;
        }
    }

    let state = session.state();
    let json_output = json!({
        "search": session.committed_text(),
        "page": state.page,
        "limit": session.controller().limit(),
        "total": state.total,
        "has_more": state.has_more,
        "items": state.items,
        "error": state.last_error.as_ref().map(|e| e.message.clone()),
    });

    let text_output = if state.items.is_empty() {
        if search.trim().is_empty() {
            "No returns found.".to_string()
        } else {
            format!("No returns match '{}'.", search.trim())
        }
    } else {
        format!("{}\n{}", returns_table(&state.items), status_line(state).dimmed())
    };

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}
