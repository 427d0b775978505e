//! Async driver that executes a controller's fetch tickets.
//!
//! Each ticket runs as its own tokio task in a [`JoinSet`]; finished fetches
//! are folded back into the controller one at a time from
//! [`ListSession::next_result`], so all state mutation stays on the caller's
//! task. Superseded fetches are aborted when a new query commits, and the
//! controller's generation check drops anything that finishes anyway.

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::api::PageSource;
use crate::error::Result;

use super::controller::{Applied, FetchTicket, PaginatedListController};
use super::query::Page;
use super::state::{ListState, ListStatus};

type FetchOutcome<T> = (FetchTicket, Result<Page<T>>);

pub struct ListSession<S, T> {
    controller: PaginatedListController<T>,
    source: Arc<S>,
    tasks: JoinSet<FetchOutcome<T>>,
}

impl<S, T> ListSession<S, T>
where
    S: PageSource<T> + 'static,
    T: Send + 'static,
{
    pub fn new(source: Arc<S>, limit: u32) -> Self {
        Self {
            controller: PaginatedListController::new(limit),
            source,
            tasks: JoinSet::new(),
        }
    }

    pub fn state(&self) -> &ListState<T> {
        self.controller.state()
    }

    pub fn controller(&self) -> &PaginatedListController<T> {
        &self.controller
    }

    pub fn committed_text(&self) -> &str {
        self.controller.committed_text()
    }

    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Commit new search text and fetch its first page.
    pub fn reset(&mut self, text: impl Into<String>) {
        self.tasks.abort_all();
        let ticket = self.controller.reset(text);
        self.dispatch(ticket);
    }

    /// Apply a debounced search commit.
    ///
    /// Resets only when the text differs from the committed query, or when
    /// nothing has been fetched yet. Returns whether a fetch was issued.
    pub fn commit_search(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.committed_text() && self.state().status != ListStatus::Idle {
            tracing::trace!(%text, "search unchanged");
            return false;
        }
        self.reset(text);
        true
    }

    /// Re-fetch the first page of the committed query.
    pub fn refresh(&mut self) {
        self.tasks.abort_all();
        let ticket = self.controller.refresh();
        self.dispatch(ticket);
    }

    /// Fetch the next page; returns false when the controller declined.
    pub fn load_more(&mut self) -> bool {
        match self.controller.load_more() {
            Some(ticket) => {
                self.dispatch(ticket);
                true
            }
            None => false,
        }
    }

    fn dispatch(&mut self, ticket: FetchTicket) {
        let source = Arc::clone(&self.source);
        self.tasks.spawn(async move {
            let result = source.fetch_page(&ticket.query).await;
            (ticket, result)
        });
    }

    /// Wait for the next fetch to finish and apply it.
    ///
    /// Returns `None` once nothing is in flight. Cancel-safe.
    pub async fn next_result(&mut self) -> Option<Applied> {
        loop {
            match self.tasks.join_next().await? {
                Ok((ticket, result)) => return Some(self.controller.apply(&ticket, result)),
                Err(e) if e.is_cancelled() => continue,
                Err(e) => {
                    tracing::warn!("fetch task failed: {e}");
                    continue;
                }
            }
        }
    }

    /// Apply every outstanding fetch.
    pub async fn settle(&mut self) {
        while self.next_result().await.is_some() {}
    }

    /// Abort outstanding fetches and stop accepting results.
    pub fn teardown(&mut self) {
        self.tasks.abort_all();
        self.controller.teardown();
    }
}
