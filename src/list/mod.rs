//! Paginated, searchable lists and the selector pattern.
//!
//! The pipeline is explicit: keystrokes go into a [`SearchDebouncer`], its
//! commits reset a [`PaginatedListController`], the controller emits fetch
//! tickets, and a [`ListSession`] executes them and applies the results.

pub mod controller;
pub mod debounce;
pub mod query;
pub mod selector;
pub mod session;
pub mod state;

pub use controller::{Applied, FetchTicket, PaginatedListController};
pub use debounce::{SEARCH_DEBOUNCE, SearchDebouncer};
pub use query::{Page, Query, has_more};
pub use selector::{RemoteSelector, SelectableItem, SelectorStatus};
pub use session::ListSession;
pub use state::{FetchKind, ListState, ListStatus};
