//! Input artifact reader for the checker's proxy list

use crate::Result;
use anyhow::anyhow;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Outcome of reading the proxy list artifact
///
/// A missing file is an expected state: the checker writes no output
/// when a run finds nothing. It is kept distinct from real read
/// failures, which abort the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputArtifact {
    /// No artifact exists at the input path
    Absent,
    /// The artifact exists, with its full contents
    Found(String),
}

impl InputArtifact {
    /// Check whether the artifact was missing
    pub fn is_absent(&self) -> bool {
        matches!(self, InputArtifact::Absent)
    }
}

/// Read the proxy list artifact, classifying a missing file as `Absent`
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<InputArtifact> {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(content) => Ok(InputArtifact::Found(content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(InputArtifact::Absent),
        Err(err) => Err(anyhow!("Failed to read proxy list {:?}: {}", path, err)),
    }
}
