//! Create-return form state and validation.

use crate::api::{Channel, CreateReturnRequest, ReturnRecord, ReturnsClient, Store};
use crate::error::{FieldErrors, Result, ReturnsError};

pub const TRACKING_REQUIRED: &str = "Tracking number is required";
pub const CHANNEL_REQUIRED: &str = "Channel is required";
pub const STORE_REQUIRED: &str = "Store is required";

/// Check the required fields without touching the network.
pub fn check_required(tracking: &str, has_channel: bool, has_store: bool) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if tracking.trim().is_empty() {
        errors.insert("tracking", TRACKING_REQUIRED);
    }
    if !has_channel {
        errors.insert("channel", CHANNEL_REQUIRED);
    }
    if !has_store {
        errors.insert("store", STORE_REQUIRED);
    }
    errors
}

/// In-progress return being entered by the user
#[derive(Debug, Clone, Default)]
pub struct ReturnDraft {
    pub tracking: String,
    pub channel: Option<Channel>,
    pub store: Option<Store>,
    errors: FieldErrors,
}

impl ReturnDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field errors from the last validation, minus fields edited since
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_tracking(&mut self, tracking: impl Into<String>) {
        self.tracking = tracking.into();
        self.errors.clear("tracking");
    }

    pub fn set_channel(&mut self, channel: Option<Channel>) {
        self.channel = channel;
        self.errors.clear("channel");
    }

    pub fn set_store(&mut self, store: Option<Store>) {
        self.store = store;
        self.errors.clear("store");
    }

    /// Build the request body, or record per-field errors.
    pub fn validate(&mut self) -> Result<CreateReturnRequest> {
        self.errors = check_required(&self.tracking, self.channel.is_some(), self.store.is_some());
        match (&self.channel, &self.store) {
            (Some(channel), Some(store)) if self.errors.is_empty() => Ok(CreateReturnRequest {
                channel_id: channel.id,
                store_id: store.id,
                tracking: self.tracking.trim().to_string(),
            }),
            _ => Err(ReturnsError::Validation(self.errors.clone())),
        }
    }

    /// Validate, then create the record. Clears the draft on success.
    ///
    /// `Ok(None)` means the server stored the record but its echo could not
    /// be read back; the draft is still cleared so it is not resubmitted.
    pub async fn submit(&mut self, client: &ReturnsClient) -> Result<Option<ReturnRecord>> {
        let request = self.validate()?;
        let record = client.create_return(&request).await?;
        tracing::debug!(
            id = record.as_ref().map(|r| r.id),
            tracking = %request.tracking,
            "return created"
        );
        *self = ReturnDraft::default();
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel() -> Channel {
        Channel {
            id: 3,
            code: "SHP".to_string(),
            name: "Shopee".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    fn store() -> Store {
        Store {
            id: 7,
            code: "S7".to_string(),
            name: "North".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let mut draft = ReturnDraft::new();
        let err = draft.validate().unwrap_err();
        let ReturnsError::Validation(fields) = err else {
            panic!("expected validation error");
        };
        assert_eq!(fields.get("tracking"), Some(TRACKING_REQUIRED));
        assert_eq!(fields.get("channel"), Some(CHANNEL_REQUIRED));
        assert_eq!(fields.get("store"), Some(STORE_REQUIRED));
        assert_eq!(draft.errors().len(), 3);
    }

    #[test]
    fn test_whitespace_tracking_is_missing() {
        let mut draft = ReturnDraft::new();
        draft.set_tracking("   ");
        draft.set_channel(Some(channel()));
        draft.set_store(Some(store()));
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains(TRACKING_REQUIRED));
    }

    #[test]
    fn test_valid_draft_trims_tracking() {
        let mut draft = ReturnDraft::new();
        draft.set_tracking("  RT-100 ");
        draft.set_channel(Some(channel()));
        draft.set_store(Some(store()));
        let request = draft.validate().unwrap();
        assert_eq!(
            request,
            CreateReturnRequest {
                channel_id: 3,
                store_id: 7,
                tracking: "RT-100".to_string(),
            }
        );
        assert!(draft.errors().is_empty());
    }

    #[test]
    fn test_editing_field_clears_its_error() {
        let mut draft = ReturnDraft::new();
        let _ = draft.validate();
        draft.set_tracking("RT-1");
        assert!(draft.errors().get("tracking").is_none());
        assert!(draft.errors().get("store").is_some());
        draft.set_store(Some(store()));
        assert!(draft.errors().get("store").is_none());
    }

    #[tokio::test]
    async fn test_submit_validates_before_network() {
        // Nothing listens here; a network attempt would surface as Transport.
        let client = ReturnsClient::new("http://127.0.0.1:9/api/mobile").unwrap();
        let mut draft = ReturnDraft::new();
        draft.set_channel(Some(channel()));
        let err = draft.submit(&client).await.unwrap_err();
        assert!(matches!(err, ReturnsError::Validation(_)));
        assert_eq!(draft.channel.as_ref().map(|c| c.id), Some(3));
    }
}
