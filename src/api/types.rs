//! Wire types for the returns API.
//!
//! Every response is wrapped in `{ success, message, data }`. The `data`
//! payload is decoded against exactly one shape per endpoint; anything else
//! is reported as [`ReturnsError::UnexpectedResponse`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ReturnsError};
use crate::list::SelectableItem;

/// Sales channel a return came through
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Store that received a return
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl SelectableItem for Channel {
    fn id(&self) -> i64 {
        self.id
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl SelectableItem for Store {
    fn id(&self) -> i64 {
        self.id
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A return record as listed and created by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnRecord {
    pub id: i64,
    pub tracking: String,
    pub channel_id: i64,
    pub store_id: i64,
    pub created_at: String,
    pub updated_at: String,
    pub channel: Channel,
    pub store: Store,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    /// Authoritative match count for the query
    pub total: u64,
}

/// `data` payload of `GET /returns`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnsPage {
    pub return_mobiles: Vec<ReturnRecord>,
    pub pagination: Pagination,
}

/// `data` payload of `GET /stores`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StoreList {
    pub stores: Vec<Store>,
}

/// `data` payload of `GET /channels`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChannelList {
    pub channels: Vec<Channel>,
}

/// Body of `POST /returns`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReturnRequest {
    pub channel_id: i64,
    pub store_id: i64,
    pub tracking: String,
}

/// Response envelope shared by every endpoint.
///
/// Decoded first with the payload left as raw JSON, so a failed request can
/// carry any `data` (usually `null`).
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: T,
}

/// Open an envelope and hand back its raw `data`.
///
/// `success=false` becomes [`ReturnsError::Domain`]; a body that is not an
/// envelope becomes [`ReturnsError::UnexpectedResponse`].
fn open_envelope(body: &str) -> Result<serde_json::Value> {
    let raw: Envelope = serde_json::from_str(body)
        .map_err(|e| ReturnsError::UnexpectedResponse(format!("envelope: {e}")))?;

    if !raw.success {
        let message = if raw.message.is_empty() {
            "request failed".to_string()
        } else {
            raw.message
        };
        return Err(ReturnsError::Domain(message));
    }
    Ok(raw.data)
}

/// Decode a response body into its `data` payload.
///
/// A payload of any shape other than `T` is
/// [`ReturnsError::UnexpectedResponse`].
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_value(open_envelope(body)?)
        .map_err(|e| ReturnsError::UnexpectedResponse(format!("data: {e}")))
}

/// Decode the response to `POST /returns`.
///
/// The envelope's `success` flag decides whether the record exists. An
/// accepted create whose payload does not match [`ReturnRecord`] yields
/// `None`, so callers never report a stored record as a failure.
pub fn decode_created(body: &str) -> Result<Option<ReturnRecord>> {
    let data = open_envelope(body)?;
    match serde_json::from_value(data) {
        Ok(record) => Ok(Some(record)),
        Err(e) => {
            tracing::warn!("return created, but the response record has an unexpected shape: {e}");
            Ok(None)
        }
    }
}
