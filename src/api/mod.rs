//! Returns API access.
//!
//! This module provides the wire types for the mobile returns REST API, the
//! `reqwest`-backed [`ReturnsClient`], and the fetch traits the list
//! controllers depend on.

pub mod client;
pub mod types;

use std::future::Future;

use crate::error::Result;
use crate::list::{Page, Query};

pub use client::ReturnsClient;
pub use types::{
    Channel, CreateReturnRequest, Envelope, Pagination, ReturnRecord, ReturnsPage, Store,
};

/// Paged, searchable fetches for the main list
pub trait PageSource<T>: Send + Sync {
    /// Fetch one page of results for `query`
    fn fetch_page(&self, query: &Query) -> impl Future<Output = Result<Page<T>>> + Send;
}

/// Unfiltered fetch of a small reference set
pub trait CatalogSource<T>: Send + Sync {
    /// Fetch every candidate in one request
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<T>>> + Send;
}
