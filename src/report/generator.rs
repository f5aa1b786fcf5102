//! Report generator producing the working proxy summary document

use crate::report::models::{ProxySet, Report};
use crate::report::reader::{read_input, InputArtifact};
use crate::{Config, Result};
use anyhow::anyhow;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

/// Report generator for one run of the reporting stage
pub struct ReportGenerator {
    config: Config,
}

impl ReportGenerator {
    /// Create a new report generator with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create a new report generator with custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Run the generator against the configured paths
    pub fn run(&self, now: DateTime<Utc>) -> Result<Report> {
        Self::generate(&self.config.input_path, &self.config.output_path, now)
    }

    /// Generate the report from `input` and write it to `output`
    ///
    /// A missing input file is treated as an empty proxy list, not an
    /// error. Any other read failure aborts the run before anything is
    /// written; a write failure aborts it afterwards. `now` is passed
    /// in so repeated runs over the same input render identical
    /// documents.
    pub fn generate<P, Q>(input: P, output: Q, now: DateTime<Utc>) -> Result<Report>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let proxies = match read_input(&input)? {
            InputArtifact::Found(content) => ProxySet::from_content(&content),
            InputArtifact::Absent => ProxySet::empty(),
        };

        let report = Report::new(proxies, now);

        fs::write(output.as_ref(), report.to_markdown())
            .map_err(|err| anyhow!("Failed to write report {:?}: {}", output.as_ref(), err))?;

        Ok(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
