mod common;

use common::ReturnsTest;
use serial_test::serial;

// ============================================================================
// create
// ============================================================================

#[test]
#[serial]
fn test_create_without_fields_reports_every_field() {
    let returns = ReturnsTest::new();

    let stderr = returns.run_failure(&["create"]);
    assert!(stderr.contains("tracking: Tracking number is required"));
    assert!(stderr.contains("channel: Channel is required"));
    assert!(stderr.contains("store: Store is required"));
    // Validation happens before any request is made
    assert!(!stderr.contains("network error"));
}

#[test]
#[serial]
fn test_create_blank_tracking_is_rejected() {
    let returns = ReturnsTest::new();

    let stderr = returns.run_failure(&[
        "create",
        "--tracking",
        "   ",
        "--channel",
        "WEB",
        "--store",
        "S1",
    ]);
    assert!(stderr.contains("Tracking number is required"));
    assert!(!stderr.contains("Channel is required"));
}

#[test]
#[serial]
fn test_create_with_all_fields_hits_the_network() {
    let returns = ReturnsTest::new();

    let stderr = returns.run_failure(&[
        "create",
        "--tracking",
        "RT-1",
        "--channel",
        "WEB",
        "--store",
        "S1",
    ]);
    assert!(stderr.contains("network error"));
}

// ============================================================================
// list / catalogs
// ============================================================================

#[test]
#[serial]
fn test_ls_unreachable_server_fails() {
    let returns = ReturnsTest::new();

    let stderr = returns.run_failure(&["ls", "--search", "RT"]);
    assert!(stderr.contains("failed to load returns"));
    assert!(stderr.contains("network error"));
}

#[test]
#[serial]
fn test_ls_pages_conflicts_with_all() {
    let returns = ReturnsTest::new();

    let stderr = returns.run_failure(&["ls", "--pages", "2", "--all"]);
    assert!(stderr.contains("cannot be used with"));
}

#[test]
#[serial]
fn test_stores_unreachable_server_fails() {
    let returns = ReturnsTest::new();

    let stderr = returns.run_failure(&["stores", "nor"]);
    assert!(stderr.contains("network error"));
}

#[test]
#[serial]
fn test_env_url_overrides_config_file() {
    let returns = ReturnsTest::new();
    returns.write_config("api:\n  base_url: \"::not-a-url\"\n");

    let stderr = returns.run_failure(&["channels"]);
    assert!(stderr.contains("network error"));
    assert!(!stderr.contains("invalid URL"));
}

// ============================================================================
// scan / browse
// ============================================================================

#[test]
#[serial]
fn test_scan_cooldown_drops_rapid_repeats() {
    let returns = ReturnsTest::new();

    let output = returns.run_with_stdin(&["scan"], "RT-1\nRT-1\nRT-2\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["RT-1"]);
}

#[test]
#[serial]
fn test_scan_without_cooldown_accepts_every_payload() {
    let returns = ReturnsTest::new();

    let output = returns.run_with_stdin(&["scan", "--cooldown", "0"], "  RT-1 \n\nRT-2\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["RT-1", "RT-2"]);
}

#[test]
#[serial]
fn test_browse_quits_on_command() {
    let returns = ReturnsTest::new();

    let output = returns.run_with_stdin(&["browse"], ":quit\n");
    assert!(output.status.success());
}
