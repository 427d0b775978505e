pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod list;
pub mod scan;

pub use api::{CatalogSource, Channel, PageSource, ReturnRecord, ReturnsClient, Store};
pub use config::Config;
pub use error::{ErrorInfo, ErrorKind, FieldErrors, Result, ReturnsError};
pub use form::ReturnDraft;
pub use list::{
    Applied, FetchKind, FetchTicket, ListSession, ListState, ListStatus, Page,
    PaginatedListController, Query, RemoteSelector, SearchDebouncer, SelectableItem,
};
pub use scan::ScanGate;
