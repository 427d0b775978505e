//! Table and status-line formatting for terminal output.

use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::api::ReturnRecord;
use crate::list::{ListState, ListStatus, SelectableItem};

/// A row in the returns table
#[derive(Tabled)]
struct ReturnRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Tracking")]
    tracking: String,
    #[tabled(rename = "Channel")]
    channel: String,
    #[tabled(rename = "Store")]
    store: String,
    #[tabled(rename = "Created")]
    created: String,
}

/// A row in the store/channel table
#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
}

pub fn returns_table(records: &[ReturnRecord]) -> String {
    let rows: Vec<ReturnRow> = records
        .iter()
        .map(|r| ReturnRow {
            id: r.id,
            tracking: r.tracking.clone(),
            channel: r.channel.name.clone(),
            store: r.store.name.clone(),
            created: short_date(&r.created_at).to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

pub fn catalog_table<T: SelectableItem>(items: &[&T]) -> String {
    let rows: Vec<CatalogRow> = items
        .iter()
        .map(|item| CatalogRow {
            id: item.id(),
            code: item.code().to_string(),
            name: item.name().to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Date portion of an ISO 8601 timestamp
fn short_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// One-line summary of a list's state
pub fn status_line<T>(state: &ListState<T>) -> String {
    match state.status {
        ListStatus::Idle => "idle".dimmed().to_string(),
        ListStatus::LoadingInitial => "loading...".dimmed().to_string(),
        ListStatus::Refreshing => "refreshing...".dimmed().to_string(),
        ListStatus::LoadingMore => format!("loading page {}...", state.page + 1)
            .dimmed()
            .to_string(),
        ListStatus::Failed => {
            let message = state
                .last_error
                .as_ref()
                .map(|e| e.message.as_str())
                .unwrap_or("unknown error");
            format!("failed: {message}").red().to_string()
        }
        ListStatus::Ready => {
            let mut line = format!("{} of {} loaded", state.items.len(), state.total);
            if state.has_more {
                line.push_str(" (more available)");
            }
            if let Some(err) = &state.last_error {
                return format!("{line} - {}", format!("could not load more: {err}").yellow());
            }
            line
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorInfo, ErrorKind};

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2025-03-01T10:22:00Z"), "2025-03-01");
        assert_eq!(short_date("2025-03-01"), "2025-03-01");
    }

    #[test]
    fn test_status_line_ready() {
        let state = ListState {
            items: vec![1, 2, 3],
            page: 1,
            has_more: true,
            status: ListStatus::Ready,
            last_error: None,
            query_seq: 1,
            total: 9,
        };
        let line = status_line(&state);
        assert!(line.contains("3 of 9 loaded"));
        assert!(line.contains("more available"));
    }

    #[test]
    fn test_status_line_transient_error() {
        let state = ListState {
            items: vec![1],
            page: 1,
            has_more: true,
            status: ListStatus::Ready,
            last_error: Some(ErrorInfo::new(ErrorKind::Http, "HTTP error 500")),
            query_seq: 1,
            total: 2,
        };
        assert!(status_line(&state).contains("could not load more"));
    }
}
