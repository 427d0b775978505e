//! Interactive search-as-you-type over the returns list.
//!
//! Stdin lines are search text; `:more`, `:refresh` and `:quit` drive the
//! list directly. Search text only commits after the configured quiet period.

use std::sync::Arc;

use owo_colors::OwoColorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::api::{ReturnRecord, ReturnsClient};
use crate::config::Config;
use crate::display::{returns_table, status_line};
use crate::error::Result;
use crate::list::{Applied, ListSession, ListState, ListStatus, SearchDebouncer};

pub async fn cmd_browse(limit: Option<u32>) -> Result<()> {
    let config = Config::load()?;
    let client = Arc::new(ReturnsClient::from_config(&config)?);
    let limit = limit.unwrap_or(config.list.page_limit).max(1);

    let mut session: ListSession<_, ReturnRecord> = ListSession::new(client, limit);
    let mut debouncer = SearchDebouncer::new(config.search_debounce());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut shown = 0usize;

    eprintln!(
        "{}",
        "Type to search. :more loads the next page, :refresh reloads, :quit exits.".dimmed()
    );
    debouncer.seed("");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    ":quit" | ":q" => break,
                    ":refresh" | ":r" => {
                        shown = 0;
                        session.refresh();
                    }
                    ":more" | ":m" => {
                        if !session.load_more() {
                            eprintln!("{}", status_line(session.state()));
                        }
                    }
                    text => debouncer.on_text_changed(text),
                }
            }
            text = debouncer.committed() => {
                if session.commit_search(text) {
                    shown = 0;
                }
            }
            Some(applied) = session.next_result() => {
                if applied == Applied::Applied {
                    render(session.state(), &mut shown);
                }
            }
        }
    }

    debouncer.cancel();
    session.teardown();
    Ok(())
}

/// Print what changed since the last render.
fn render(state: &ListState<ReturnRecord>, shown: &mut usize) {
    if state.status == ListStatus::Failed {
        eprintln!("{}", status_line(state));
        *shown = 0;
        return;
    }

    if state.last_error.is_some() {
        // Failed load-more: rows on screen are still valid
        eprintln!("{}", status_line(state));
        return;
    }

    if state.items.is_empty() {
        println!("No returns found.");
    } else if state.page > 1 && state.items.len() > *shown {
        println!("{}", returns_table(&state.items[*shown..]));
    } else {
        println!("{}", returns_table(&state.items));
    }
    *shown = state.items.len();
    eprintln!("{}", status_line(state));
}
