//! Fetch-once, client-filtered picker for small reference data.
//!
//! Stores and channels are bounded sets, so the selector loads the whole set
//! in one unfiltered request and filters locally. There is no paging and no
//! second async state machine.

use crate::api::CatalogSource;
use crate::error::{ErrorInfo, Result};

/// An item a selector can list, search, and pick.
///
/// Identity is [`SelectableItem::id`]; only `code` and `name` are searched.
pub trait SelectableItem: Clone {
    fn id(&self) -> i64;
    fn code(&self) -> &str;
    fn name(&self) -> &str;

    /// Case-insensitive substring match on code or name
    fn matches(&self, needle_lower: &str) -> bool {
        self.code().to_lowercase().contains(needle_lower)
            || self.name().to_lowercase().contains(needle_lower)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorStatus {
    #[default]
    Empty,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct RemoteSelector<T> {
    label: String,
    all_items: Vec<T>,
    status: SelectorStatus,
    last_error: Option<ErrorInfo>,
    selection: Option<T>,
    filter_text: String,
    open: bool,
}

impl<T: SelectableItem> RemoteSelector<T> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            all_items: Vec::new(),
            status: SelectorStatus::Empty,
            last_error: None,
            selection: None,
            filter_text: String::new(),
            open: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn status(&self) -> SelectorStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&ErrorInfo> {
        self.last_error.as_ref()
    }

    pub fn all_items(&self) -> &[T] {
        &self.all_items
    }

    pub fn selection(&self) -> Option<&T> {
        self.selection.as_ref()
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Load the full candidate set with one unfiltered fetch.
    ///
    /// On failure the selector is left empty; calling `reload` again is the
    /// only retry.
    pub async fn reload<S>(&mut self, source: &S) -> Result<usize>
    where
        S: CatalogSource<T>,
    {
        self.status = SelectorStatus::Loading;
        tracing::debug!(label = %self.label, "loading selector items");

        match source.fetch_all().await {
            Ok(items) => {
                tracing::debug!(label = %self.label, count = items.len(), "selector loaded");
                self.all_items = items;
                self.status = SelectorStatus::Loaded;
                self.last_error = None;
                Ok(self.all_items.len())
            }
            Err(e) => {
                tracing::warn!("failed to load {}: {e}", self.label);
                self.all_items.clear();
                self.status = SelectorStatus::Failed;
                self.last_error = Some(ErrorInfo::from(&e));
                Err(e)
            }
        }
    }

    /// Items whose code or name contains `substring`, ignoring case.
    pub fn filter(&self, substring: &str) -> Vec<&T> {
        let needle = substring.to_lowercase();
        if needle.is_empty() {
            return self.all_items.iter().collect();
        }
        self.all_items
            .iter()
            .filter(|item| item.matches(&needle))
            .collect()
    }

    /// Items matching the transient filter text
    pub fn visible(&self) -> Vec<&T> {
        self.filter(&self.filter_text)
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close without selecting; the filter text is discarded.
    pub fn close(&mut self) {
        self.open = false;
        self.filter_text.clear();
    }

    /// Commit `item` as the selection and close the picker.
    pub fn select(&mut self, item: T) {
        tracing::debug!(label = %self.label, id = item.id(), "selected");
        self.selection = Some(item);
        self.close();
    }

    pub fn clear(&mut self) {
        self.selection = None;
    }

    /// Exact lookup by numeric id or case-insensitive code
    pub fn find(&self, key: &str) -> Option<&T> {
        let key = key.trim();
        if let Ok(id) = key.parse::<i64>()
            && let Some(item) = self.all_items.iter().find(|i| i.id() == id)
        {
            return Some(item);
        }
        self.all_items
            .iter()
            .find(|i| i.code().eq_ignore_ascii_case(key))
    }
}
