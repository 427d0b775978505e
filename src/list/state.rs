//! State types for a paginated list

use crate::error::ErrorInfo;

/// Lifecycle of a paginated list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStatus {
    #[default]
    Idle,
    LoadingInitial,
    Ready,
    LoadingMore,
    Refreshing,
    Failed,
}

impl ListStatus {
    /// Whether a page-1 fetch is outstanding
    pub fn is_resetting(self) -> bool {
        matches!(self, ListStatus::LoadingInitial | ListStatus::Refreshing)
    }
}

/// Why a fetch was issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Page 1 for a newly committed query
    Initial,
    /// Page 1 for the current query (pull-to-refresh)
    Refresh,
    /// The page after the last loaded one
    More,
}

/// Snapshot of everything the rendering layer needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState<T> {
    /// Loaded items in server order; never deduplicated
    pub items: Vec<T>,
    /// Last page successfully applied (0 before the first load)
    pub page: u32,
    pub has_more: bool,
    pub status: ListStatus,
    /// Most recent failure; cleared by the next successful fetch
    pub last_error: Option<ErrorInfo>,
    /// Generation of the committed query
    pub query_seq: u64,
    /// Server-reported total for the committed query
    pub total: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            has_more: false,
            status: ListStatus::Idle,
            last_error: None,
            query_seq: 0,
            total: 0,
        }
    }
}

impl<T> ListState<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
