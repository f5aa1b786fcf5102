//! Report module for summarizing harvested proxies
//!
//! This module provides functionality for:
//! - Reading the newline-delimited proxy list written by the checker run
//! - Normalizing it into a sorted, deduplicated proxy set
//! - Rendering a markdown report with a table and a copy-paste section
//! - Writing the report document for the publication stage

pub mod generator;
pub mod models;
pub mod reader;

pub use generator::ReportGenerator;
pub use models::{ProxySet, Report};
pub use reader::{read_input, InputArtifact};
