#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Nothing listens on the discard port, so requests fail fast
pub const DEAD_API_URL: &str = "http://127.0.0.1:9/api/mobile";

/// Helper struct to run the `returns` binary in an isolated temp directory
pub struct ReturnsTest {
    pub temp_dir: TempDir,
    binary_path: String,
}

impl ReturnsTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        ReturnsTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_returns").to_string(),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .env("RETURNS_API_URL", DEAD_API_URL)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute returns command")
    }

    /// Run with `input` piped to stdin
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn returns command");
        child
            .stdin
            .take()
            .expect("stdin was piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");
        child
            .wait_with_output()
            .expect("Failed to wait for returns command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn write_config(&self, content: &str) {
        let dir = self.temp_dir.path().join(".returns");
        fs::create_dir_all(&dir).expect("Failed to create config dir");
        fs::write(dir.join("config.yaml"), content).expect("Failed to write config");
    }

    pub fn read_config(&self) -> String {
        let path = self.temp_dir.path().join(".returns").join("config.yaml");
        fs::read_to_string(path).expect("Failed to read config file")
    }
}

impl Default for ReturnsTest {
    fn default() -> Self {
        Self::new()
    }
}
