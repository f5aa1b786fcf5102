//! Proxy Report - Working Proxy Report Generator
//!
//! This is the reporting stage of the proxy harvesting pipeline.
//! It reads the flat list of working proxies written by the checker run
//! and renders a markdown summary document for publication.

pub mod report;

pub use report::*;

/// Application result type
pub type Result<T> = anyhow::Result<T>;

/// Default input artifact written by the checker stage
pub const DEFAULT_INPUT_PATH: &str = "all_working_proxies.txt";

/// Default output document consumed by the publication stage
pub const DEFAULT_OUTPUT_PATH: &str = "WORKING_PROXIES.md";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Proxy list file, one proxy per line
    pub input_path: std::path::PathBuf,
    /// Destination for the rendered markdown report
    pub output_path: std::path::PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.into(),
            output_path: DEFAULT_OUTPUT_PATH.into(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}
