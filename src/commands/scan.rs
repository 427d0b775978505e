use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::Result;
use crate::scan::ScanGate;

/// Read decoded barcode payloads line by line and print the ones accepted.
///
/// Payloads arriving within the cooldown of an accepted scan are dropped.
pub async fn cmd_scan(cooldown_secs: u64) -> Result<()> {
    let mut gate = ScanGate::new(Duration::from_secs(cooldown_secs));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match gate.accept(&line) {
            Some(tracking) => println!("{tracking}"),
            None => tracing::debug!(payload = %line.trim(), "scan ignored"),
        }
    }
    Ok(())
}
