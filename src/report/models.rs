//! Report data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Timestamp format matching the published document history
const TIMESTAMP_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Deduplicated set of proxy entries in ascending lexicographic order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxySet {
    entries: Vec<String>,
}

impl ProxySet {
    /// Create an empty proxy set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a proxy set from the raw contents of a proxy list file
    ///
    /// Splits on `\n` or `\r\n`, drops blank and whitespace-only lines,
    /// and collapses exact duplicates. Entries are otherwise kept
    /// verbatim: no case folding, no trimming, no scheme normalization.
    pub fn from_content(content: &str) -> Self {
        let unique: BTreeSet<&str> = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();

        Self {
            entries: unique.into_iter().map(str::to_string).collect(),
        }
    }

    /// Entries in ascending lexicographic order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of unique entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the set holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Report model representing one rendered summary document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Proxies included in the report
    pub proxies: ProxySet,
    /// Timestamp stamped into the document
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Create a new report for the given proxy set
    pub fn new(proxies: ProxySet, generated_at: DateTime<Utc>) -> Self {
        Self {
            proxies,
            generated_at,
        }
    }

    /// Number of proxies listed in the report
    pub fn count(&self) -> usize {
        self.proxies.len()
    }

    /// Render the report as a markdown document
    ///
    /// The table rows and the copy-paste block list the same entries in
    /// the same order. An empty set renders a single notice sentence in
    /// place of both sections.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str("# ✅ Working Proxies\n\n");
        md.push_str(&format!(
            "*Last updated on: {}*\n",
            self.generated_at.format(TIMESTAMP_FORMAT)
        ));
        md.push_str(&format!(
            "*Total working proxies found: {}*\n\n",
            self.count()
        ));

        if self.proxies.is_empty() {
            md.push_str("No working proxies were found in this run.\n");
            return md;
        }

        md.push_str("| Proxy IP             |\n");
        md.push_str("|----------------------|\n");
        for proxy in self.proxies.entries() {
            md.push_str(&format!("| `{}` |\n", proxy));
        }

        md.push_str("\n### Copy-Paste List\n");
        md.push_str("```\n");
        md.push_str(&self.proxies.entries().join("\n"));
        md.push_str("\n```\n");

        md
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_markdown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 4, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_proxy_set_dedup_and_sort() {
        let set = ProxySet::from_content("b\n\na\nb\n");
        assert_eq!(set.len(), 2);
        assert_eq!(set.entries(), ["a", "b"]);
    }

    #[test]
    fn test_proxy_set_crlf_and_whitespace_lines() {
        let set = ProxySet::from_content("10.0.0.2:3128\r\n   \r\n10.0.0.1:8080\r\n");
        assert_eq!(set.entries(), ["10.0.0.1:8080", "10.0.0.2:3128"]);
    }

    #[test]
    fn test_proxy_set_keeps_entries_verbatim() {
        // Equality is exact: scheme prefixes and surrounding spaces are
        // not normalized away.
        let set = ProxySet::from_content("http://1.2.3.4:80\n1.2.3.4:80\n1.2.3.4:80 \n");
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_proxy_set_empty_content() {
        assert!(ProxySet::from_content("").is_empty());
        assert!(ProxySet::from_content("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_report_count_matches_set() {
        let report = Report::new(ProxySet::from_content("c\na\nb\na\n"), fixed_now());
        assert_eq!(report.count(), 3);
    }

    #[test]
    fn test_markdown_structure_with_entries() {
        let report = Report::new(ProxySet::from_content("b\n\na\nb\n"), fixed_now());
        let md = report.to_markdown();

        assert!(md.starts_with("# ✅ Working Proxies\n\n"));
        assert!(md.contains("*Last updated on: Sat, 04 May 2024 12:30:00 GMT*\n"));
        assert!(md.contains("*Total working proxies found: 2*\n"));

        let table_start = md.find("| Proxy IP             |").unwrap();
        let a_row = md.find("| `a` |").unwrap();
        let b_row = md.find("| `b` |").unwrap();
        assert!(table_start < a_row && a_row < b_row);

        assert!(md.contains("### Copy-Paste List\n```\na\nb\n```\n"));
    }

    #[test]
    fn test_markdown_empty_state() {
        let report = Report::new(ProxySet::empty(), fixed_now());
        let md = report.to_markdown();

        assert!(md.contains("*Total working proxies found: 0*\n"));
        assert!(md.ends_with("No working proxies were found in this run.\n"));
        assert!(!md.contains("| Proxy IP"));
        assert!(!md.contains("Copy-Paste List"));
    }

    #[test]
    fn test_markdown_idempotent_for_fixed_timestamp() {
        let set = ProxySet::from_content("2.2.2.2:80\n1.1.1.1:8080\n");
        let first = Report::new(set.clone(), fixed_now()).to_markdown();
        let second = Report::new(set, fixed_now()).to_markdown();
        assert_eq!(first, second);
    }

    #[test]
    fn test_table_rows_match_copy_block() {
        let report = Report::new(
            ProxySet::from_content("3.3.3.3:80\n1.1.1.1:80\n2.2.2.2:80\n"),
            fixed_now(),
        );
        let md = report.to_markdown();

        let rows: Vec<&str> = md
            .lines()
            .filter(|line| line.starts_with("| `"))
            .map(|line| line.trim_start_matches("| `").trim_end_matches("` |"))
            .collect();

        let block_start = md.find("```\n").unwrap() + 4;
        let block_end = md.rfind("\n```").unwrap();
        let block: Vec<&str> = md[block_start..block_end].lines().collect();

        assert_eq!(rows, block);
        assert_eq!(rows, ["1.1.1.1:80", "2.2.2.2:80", "3.3.3.3:80"]);
    }
}
