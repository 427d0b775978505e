//! Paginated list controller.
//!
//! The controller is a plain state machine. Commands (`reset`, `load_more`,
//! `refresh`) mutate [`ListState`] and hand back a [`FetchTicket`] describing
//! the fetch to run; whoever executes the fetch reports back through
//! [`PaginatedListController::apply`]. Every ticket carries the query
//! generation it was issued under, and results from any other generation are
//! dropped on arrival. This makes completion order irrelevant: the last
//! committed query always wins.

use crate::error::{ErrorInfo, Result};

use super::query::{Page, Query, has_more};
use super::state::{FetchKind, ListState, ListStatus};

/// A fetch the controller wants executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: Query,
    pub kind: FetchKind,
}

/// What happened to a fetch result handed to [`PaginatedListController::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The result changed the list state
    Applied,
    /// The result belonged to a superseded query and was dropped
    Stale,
    /// The controller was torn down before the result arrived
    Unmounted,
}

#[derive(Debug)]
pub struct PaginatedListController<T> {
    state: ListState<T>,
    limit: u32,
    /// Committed query, always pointing at page 1
    query: Query,
    /// Re-entrancy guard for `load_more`
    more_pending: bool,
    mounted: bool,
}

impl<T> PaginatedListController<T> {
    /// Create a controller with a fixed page size.
    pub fn new(limit: u32) -> Self {
        let limit = limit.max(1);
        Self {
            state: ListState::default(),
            limit,
            query: Query::new("", limit),
            more_pending: false,
            mounted: true,
        }
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Currently committed search text
    pub fn committed_text(&self) -> &str {
        &self.query.text
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Start over with newly committed search text.
    ///
    /// Supersedes any fetch in flight and asks for page 1.
    pub fn reset(&mut self, text: impl Into<String>) -> FetchTicket {
        self.query = Query::new(text, self.limit);
        // A new query makes the old rows meaningless; drop them now.
        self.state.items.clear();
        self.state.total = 0;
        self.begin_reset(FetchKind::Initial)
    }

    /// Re-fetch page 1 of the committed query, replacing the list.
    pub fn refresh(&mut self) -> FetchTicket {
        self.begin_reset(FetchKind::Refresh)
    }

    /// Ask for the next page, if one can be requested right now.
    ///
    /// Returns `None` unless the list is `Ready`, has more pages, and no
    /// other load-more is outstanding.
    pub fn load_more(&mut self) -> Option<FetchTicket> {
        if !self.mounted
            || self.state.status != ListStatus::Ready
            || !self.state.has_more
            || self.more_pending
        {
            return None;
        }

        self.more_pending = true;
        self.state.status = ListStatus::LoadingMore;
        let ticket = FetchTicket {
            seq: self.state.query_seq,
            query: self.query.with_page(self.state.page + 1),
            kind: FetchKind::More,
        };
        tracing::debug!(
            seq = ticket.seq,
            page = ticket.query.page,
            "requesting next page"
        );
        Some(ticket)
    }

    fn begin_reset(&mut self, kind: FetchKind) -> FetchTicket {
        self.state.query_seq += 1;
        self.more_pending = false;
        self.state.page = 1;
        self.state.has_more = false;
        self.state.status = match (kind, self.state.status) {
            (FetchKind::Refresh, ListStatus::Idle) | (FetchKind::Initial, _) => {
                ListStatus::LoadingInitial
            }
            _ => ListStatus::Refreshing,
        };

        let ticket = FetchTicket {
            seq: self.state.query_seq,
            query: self.query.clone(),
            kind,
        };
        tracing::debug!(
            seq = ticket.seq,
            search = %ticket.query.text,
            ?kind,
            "query committed"
        );
        ticket
    }

    /// Fold a fetch result back into the list.
    pub fn apply(&mut self, ticket: &FetchTicket, result: Result<Page<T>>) -> Applied {
        if !self.mounted {
            return Applied::Unmounted;
        }
        if ticket.seq != self.state.query_seq {
            tracing::trace!(
                seq = ticket.seq,
                current = self.state.query_seq,
                "dropping stale response"
            );
            return Applied::Stale;
        }

        match ticket.kind {
            FetchKind::Initial | FetchKind::Refresh => {
                if !self.state.status.is_resetting() {
                    return Applied::Stale;
                }
                self.apply_first_page(result);
            }
            FetchKind::More => {
                if !self.more_pending || ticket.query.page != self.state.page + 1 {
                    return Applied::Stale;
                }
                self.more_pending = false;
                self.apply_next_page(ticket.query.page, result);
            }
        }
        Applied::Applied
    }

    fn apply_first_page(&mut self, result: Result<Page<T>>) {
        match result {
            Ok(page) => {
                self.state.items = page.items;
                self.state.page = 1;
                self.state.total = page.total;
                self.state.has_more = has_more(1, self.limit, page.total);
                self.state.status = ListStatus::Ready;
                self.state.last_error = None;
                tracing::debug!(
                    loaded = self.state.items.len(),
                    total = page.total,
                    "first page loaded"
                );
            }
            Err(e) => {
                tracing::warn!("failed to load list: {e}");
                self.state.items.clear();
                self.state.total = 0;
                self.state.has_more = false;
                self.state.status = ListStatus::Failed;
                self.state.last_error = Some(ErrorInfo::from(&e));
            }
        }
    }

    fn apply_next_page(&mut self, page_number: u32, result: Result<Page<T>>) {
        match result {
            Ok(page) => {
                self.state.items.extend(page.items);
                self.state.page = page_number;
                self.state.total = page.total;
                self.state.has_more = has_more(page_number, self.limit, page.total);
                self.state.last_error = None;
                tracing::debug!(
                    page = page_number,
                    loaded = self.state.items.len(),
                    total = page.total,
                    "page appended"
                );
            }
            Err(e) => {
                tracing::warn!("failed to load page {page_number}: {e}");
                self.state.last_error = Some(ErrorInfo::from(&e));
            }
        }
        self.state.status = ListStatus::Ready;
    }

    /// Detach from the owning screen; results arriving later are ignored.
    pub fn teardown(&mut self) {
        self.mounted = false;
        self.more_pending = false;
        self.state.query_seq += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ReturnsError};

    fn page_of(start: u32, count: u32, total: u64) -> Page<u32> {
        Page::new((start..start + count).collect(), total)
    }

    fn domain_error(msg: &str) -> ReturnsError {
        ReturnsError::Domain(msg.to_string())
    }

    #[test]
    fn test_new_controller_is_idle() {
        let c: PaginatedListController<u32> = PaginatedListController::new(10);
        assert_eq!(c.state().status, ListStatus::Idle);
        assert!(c.state().is_empty());
        assert_eq!(c.state().query_seq, 0);
        assert_eq!(c.limit(), 10);
    }

    #[test]
    fn test_zero_limit_is_clamped() {
        let mut c: PaginatedListController<u32> = PaginatedListController::new(0);
        assert_eq!(c.limit(), 1);
        assert_eq!(c.reset("").query.limit, 1);
    }

    #[test]
    fn test_reset_requests_first_page() {
        let mut c: PaginatedListController<u32> = PaginatedListController::new(10);
        let ticket = c.reset("ab");
        assert_eq!(ticket.seq, 1);
        assert_eq!(ticket.kind, FetchKind::Initial);
        assert_eq!(ticket.query, Query::new("ab", 10));
        assert_eq!(c.state().status, ListStatus::LoadingInitial);
        assert_eq!(c.state().page, 1);
    }

    #[test]
    fn test_reset_yields_min_of_total_and_limit() {
        let mut c = PaginatedListController::new(10);
        let ticket = c.reset("");
        assert_eq!(c.apply(&ticket, Ok(page_of(0, 10, 25))), Applied::Applied);
        assert_eq!(c.state().len(), 10);
        assert!(c.state().has_more);
        assert_eq!(c.state().status, ListStatus::Ready);

        let mut small = PaginatedListController::new(10);
        let ticket = small.reset("");
        small.apply(&ticket, Ok(page_of(0, 4, 4)));
        assert_eq!(small.state().len(), 4);
        assert!(!small.state().has_more);
    }

    #[test]
    fn test_three_pages_exhaust_the_list() {
        let mut c = PaginatedListController::new(10);
        let t = c.reset("");
        c.apply(&t, Ok(page_of(0, 10, 25)));

        let t = c.load_more().expect("second page");
        assert_eq!(t.query.page, 2);
        c.apply(&t, Ok(page_of(10, 10, 25)));
        assert_eq!(c.state().len(), 20);

        let t = c.load_more().expect("third page");
        assert_eq!(t.query.page, 3);
        c.apply(&t, Ok(page_of(20, 5, 25)));

        assert_eq!(c.state().len(), 25);
        assert_eq!(c.state().page, 3);
        assert!(!c.state().has_more);
        assert!(c.load_more().is_none());
        assert_eq!(c.state().items, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_has_more_trusts_total_over_page_length() {
        let mut c = PaginatedListController::new(10);
        let t = c.reset("");
        // Short page, but the server says more exist
        c.apply(&t, Ok(page_of(0, 3, 30)));
        assert_eq!(c.state().len(), 3);
        assert!(c.state().has_more);
    }

    #[test]
    fn test_load_more_is_not_reentrant() {
        let mut c = PaginatedListController::new(10);
        let t = c.reset("");
        c.apply(&t, Ok(page_of(0, 10, 50)));

        let first = c.load_more();
        assert!(first.is_some());
        assert_eq!(c.state().status, ListStatus::LoadingMore);
        assert!(c.load_more().is_none());
    }

    #[test]
    fn test_load_more_ignored_while_loading_initial() {
        let mut c: PaginatedListController<u32> = PaginatedListController::new(10);
        c.reset("");
        assert!(c.load_more().is_none());
    }

    #[test]
    fn test_load_more_failure_keeps_items() {
        let mut c = PaginatedListController::new(10);
        let t = c.reset("");
        c.apply(&t, Ok(page_of(0, 10, 25)));

        let t = c.load_more().unwrap();
        let applied = c.apply(&t, Err(domain_error("boom")));
        assert_eq!(applied, Applied::Applied);
        assert_eq!(c.state().len(), 10);
        assert_eq!(c.state().page, 1);
        assert_eq!(c.state().status, ListStatus::Ready);
        let err = c.state().last_error.as_ref().unwrap();
        assert_eq!(err.kind, ErrorKind::Domain);

        // Manual retry asks for the same page again
        let retry = c.load_more().unwrap();
        assert_eq!(retry.query.page, 2);
        c.apply(&retry, Ok(page_of(10, 10, 25)));
        assert_eq!(c.state().len(), 20);
        assert!(c.state().last_error.is_none());
    }

    #[test]
    fn test_reset_failure_clears_items() {
        let mut c = PaginatedListController::new(10);
        let t = c.reset("");
        c.apply(&t, Ok(page_of(0, 10, 25)));

        let t = c.refresh();
        assert_eq!(c.state().status, ListStatus::Refreshing);
        c.apply(&t, Err(domain_error("down")));
        assert_eq!(c.state().status, ListStatus::Failed);
        assert!(c.state().is_empty());
        assert!(!c.state().has_more);
        assert!(c.state().last_error.is_some());
        assert!(c.load_more().is_none());
    }

    #[test]
    fn test_refresh_from_failed_recovers() {
        let mut c = PaginatedListController::new(10);
        let t = c.reset("x");
        c.apply(&t, Err(domain_error("down")));
        assert_eq!(c.state().status, ListStatus::Failed);

        let t = c.refresh();
        assert_eq!(t.query.text, "x");
        assert_eq!(c.state().status, ListStatus::Refreshing);
        c.apply(&t, Ok(page_of(0, 2, 2)));
        assert_eq!(c.state().status, ListStatus::Ready);
        assert_eq!(c.state().len(), 2);
        assert!(c.state().last_error.is_none());
    }

    #[test]
    fn test_refresh_replaces_even_when_unchanged() {
        let mut c = PaginatedListController::new(10);
        let t = c.reset("");
        c.apply(&t, Ok(page_of(0, 10, 25)));
        let t = c.load_more().unwrap();
        c.apply(&t, Ok(page_of(10, 10, 25)));
        assert_eq!(c.state().len(), 20);

        let t = c.refresh();
        assert_eq!(t.query.page, 1);
        c.apply(&t, Ok(page_of(0, 10, 25)));
        assert_eq!(c.state().len(), 10);
        assert_eq!(c.state().page, 1);
    }

    #[test]
    fn test_latest_query_wins_regardless_of_arrival_order() {
        let mut c = PaginatedListController::new(10);
        let abc = c.reset("ABC");
        let abcd = c.reset("ABCD");
        assert!(abcd.seq > abc.seq);

        // Newer response lands first, older one straggles in afterwards
        assert_eq!(
            c.apply(&abcd, Ok(Page::new(vec![4], 1))),
            Applied::Applied
        );
        assert_eq!(
            c.apply(&abc, Ok(Page::new(vec![3, 3, 3], 3))),
            Applied::Stale
        );
        assert_eq!(c.state().items, vec![4]);
        assert_eq!(c.committed_text(), "ABCD");
    }

    #[test]
    fn test_stale_failure_is_silent() {
        let mut c = PaginatedListController::new(10);
        let old = c.reset("A");
        let new = c.reset("AB");
        assert_eq!(c.apply(&old, Err(domain_error("late"))), Applied::Stale);
        assert_eq!(c.state().status, ListStatus::LoadingInitial);
        assert!(c.state().last_error.is_none());
        c.apply(&new, Ok(page_of(0, 1, 1)));
        assert_eq!(c.state().status, ListStatus::Ready);
    }

    #[test]
    fn test_load_more_superseded_by_reset() {
        let mut c = PaginatedListController::new(10);
        let t = c.reset("");
        c.apply(&t, Ok(page_of(0, 10, 25)));
        let more = c.load_more().unwrap();

        let fresh = c.reset("new");
        assert_eq!(c.apply(&more, Ok(page_of(10, 10, 25))), Applied::Stale);
        c.apply(&fresh, Ok(page_of(100, 2, 2)));
        assert_eq!(c.state().items, vec![100, 101]);
    }

    #[test]
    fn test_duplicate_result_is_not_applied_twice() {
        let mut c = PaginatedListController::new(10);
        let t = c.reset("");
        c.apply(&t, Ok(page_of(0, 10, 25)));
        let more = c.load_more().unwrap();
        c.apply(&more, Ok(page_of(10, 10, 25)));
        assert_eq!(c.apply(&more, Ok(page_of(10, 10, 25))), Applied::Stale);
        assert_eq!(c.state().len(), 20);
    }

    #[test]
    fn test_teardown_drops_late_results() {
        let mut c = PaginatedListController::new(10);
        let t = c.reset("");
        c.teardown();
        assert_eq!(c.apply(&t, Ok(page_of(0, 10, 25))), Applied::Unmounted);
        assert!(c.state().is_empty());
        assert!(c.load_more().is_none());
    }
}
