use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReturnsError {
    // Remote errors
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("server rejected request: {0}")]
    Domain(String),

    #[error("unexpected response shape: {0}")]
    UnexpectedResponse(String),

    #[error("invalid URL '{0}': {1}")]
    InvalidUrl(String, url::ParseError),

    // Local errors
    #[error("{0}")]
    Validation(FieldErrors),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ReturnsError>;

/// Coarse classification of a failed fetch, kept on list state for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Http,
    Domain,
}

/// Cloneable snapshot of a fetch failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<&ReturnsError> for ErrorInfo {
    fn from(err: &ReturnsError) -> Self {
        let kind = match err {
            ReturnsError::Transport(_) | ReturnsError::Io(_) => ErrorKind::Transport,
            ReturnsError::HttpStatus { .. } => ErrorKind::Http,
            _ => ErrorKind::Domain,
        };
        ErrorInfo::new(kind, err.to_string())
    }
}

/// Per-field validation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drop the pending message for a field once the user edits it.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        write!(f, "validation failed ({})", parts.join("; "))
    }
}
