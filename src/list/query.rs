//! Query and page values shared by the list controller and fetch sources.

use serde::{Deserialize, Serialize};

/// A committed search plus the page it asks for.
///
/// Queries are never mutated in place; moving to another page produces a
/// new value via [`Query::with_page`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub text: String,
    pub page: u32,
    pub limit: u32,
}

impl Query {
    /// First page of `text` with the given page size.
    ///
    /// `limit` is clamped to at least 1.
    pub fn new(text: impl Into<String>, limit: u32) -> Self {
        Self {
            text: text.into(),
            page: 1,
            limit: limit.max(1),
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            text: self.text.clone(),
            page: page.max(1),
            limit: self.limit,
        }
    }

    /// Search text to send, or `None` for an unfiltered fetch.
    pub fn search(&self) -> Option<&str> {
        if self.text.is_empty() {
            None
        } else {
            Some(&self.text)
        }
    }
}

/// One fetch result: the items on the page plus the server's total count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }
}

/// Whether pages remain after `page` pages of `limit` items each.
///
/// Trusts `total`, not the number of items actually returned.
pub fn has_more(page: u32, limit: u32, total: u64) -> bool {
    u64::from(page) * u64::from(limit) < total
}
