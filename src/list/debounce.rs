//! Search input debouncing.
//!
//! Raw text changes reschedule a single deadline; [`SearchDebouncer::committed`]
//! resolves once the input has been quiet for the configured period. The
//! future only touches state after its sleep completes, so it can sit in a
//! `tokio::select!` arm and be dropped on every loop iteration without losing
//! or duplicating a commit.

use std::time::Duration;

use tokio::time::Instant;

/// Default quiet period before a search commits
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct SearchDebouncer {
    quiet: Duration,
    /// Latest text and the instant it becomes due
    pending: Option<(String, Instant)>,
    /// Commit that bypasses the quiet period (mount seed)
    ready: Option<String>,
    active: bool,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

impl SearchDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            ready: None,
            active: true,
        }
    }

    /// Record a keystroke; replaces whatever was scheduled.
    pub fn on_text_changed(&mut self, text: impl Into<String>) {
        if !self.active {
            return;
        }
        self.ready = None;
        self.pending = Some((text.into(), Instant::now() + self.quiet));
    }

    /// Commit `text` immediately, e.g. the empty query on mount.
    pub fn seed(&mut self, text: impl Into<String>) {
        if !self.active {
            return;
        }
        self.pending = None;
        self.ready = Some(text.into());
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some() || self.ready.is_some()
    }

    /// Take the commit if it is due at `now`.
    pub fn take_ready(&mut self, now: Instant) -> Option<String> {
        if let Some(text) = self.ready.take() {
            return Some(text);
        }
        match &self.pending {
            Some((_, due)) if *due <= now => self.pending.take().map(|(text, _)| text),
            _ => None,
        }
    }

    /// Wait for the next commit. Never resolves while nothing is scheduled.
    pub async fn committed(&mut self) -> String {
        loop {
            if let Some(text) = self.ready.take() {
                return text;
            }
            match self.pending.as_ref().map(|(_, due)| *due) {
                Some(due) => {
                    tokio::time::sleep_until(due).await;
                    if let Some(text) = self.take_ready(Instant::now()) {
                        return text;
                    }
                }
                None => std::future::pending::<()>().await,
            }
        }
    }

    /// Cancel anything scheduled and stop accepting input.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.ready = None;
        self.active = false;
    }
}
