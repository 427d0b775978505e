//! Barcode scan input.
//!
//! Decoding happens elsewhere (camera, hardware wedge, stdin). The gate only
//! decides which decoded payloads become tracking numbers: a scanner keeps
//! reporting the same code while it stays in frame, so after an accepted scan
//! further payloads are ignored until the cooldown passes.

use std::time::{Duration, Instant};

/// How long the scanner stays disarmed after an accepted scan
pub const SCAN_COOLDOWN: Duration = Duration::from_secs(2);

#[derive(Debug)]
pub struct ScanGate {
    cooldown: Duration,
    last_accepted: Option<Instant>,
}

impl Default for ScanGate {
    fn default() -> Self {
        Self::new(SCAN_COOLDOWN)
    }
}

impl ScanGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_accepted: None,
        }
    }

    /// Offer a decoded payload; returns the tracking number if accepted.
    pub fn accept(&mut self, payload: &str) -> Option<String> {
        self.accept_at(payload, Instant::now())
    }

    pub fn accept_at(&mut self, payload: &str, now: Instant) -> Option<String> {
        let tracking = payload.trim();
        if tracking.is_empty() || !self.is_armed_at(now) {
            return None;
        }
        self.last_accepted = Some(now);
        tracing::debug!(tracking, "scan accepted");
        Some(tracking.to_string())
    }

    pub fn is_armed_at(&self, now: Instant) -> bool {
        match self.last_accepted {
            Some(at) => now.saturating_duration_since(at) >= self.cooldown,
            None => true,
        }
    }

    /// Re-arm immediately, e.g. when the scanner is reopened.
    pub fn rearm(&mut self) {
        self.last_accepted = None;
    }
}
