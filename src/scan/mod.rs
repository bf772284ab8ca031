//! Region scanning module.
//!
//! Two heuristics exist for the same ill-defined concept of an "empty
//! page": a minimum-length run of consecutive empty paragraphs, and a
//! break-delimited page with no visible text. They are modeled as two
//! strategies behind one [`RegionScanner`] interface, selected by
//! [`ScanPolicy`], rather than reconciled into a single algorithm.

mod paged;
mod threshold;

pub use paged::PagedScanner;
pub use threshold::ThresholdScanner;

use crate::model::{EmptyRegion, XmlElement};
use serde::{Deserialize, Serialize};

/// Default minimum run length for the threshold policy.
///
/// A typical page holds roughly 25-30 single-spaced lines, so 15
/// consecutive empty paragraphs is a conservative "at least most of a
/// page" floor.
pub const DEFAULT_THRESHOLD: usize = 15;

/// A detection policy: walk the body elements once, in order, and report
/// empty regions.
///
/// Implementations must be a single forward pass, O(n) in element count,
/// with no backtracking, and must evaluate a trailing run or page exactly
/// like an interior one.
pub trait RegionScanner {
    /// Human-readable policy name for logs and summaries.
    fn name(&self) -> &'static str;

    /// Scan the ordered body element sequence.
    fn scan(&self, elements: &[&XmlElement]) -> Vec<EmptyRegion>;
}

/// Which detection policy to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPolicy {
    /// Threshold-run detection (consecutive empty paragraphs)
    #[default]
    Threshold,

    /// Break-delimited page detection
    Paged,
}

/// Options for a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Detection policy
    pub policy: ScanPolicy,

    /// Minimum run length (threshold policy only)
    pub threshold: usize,
}

impl ScanOptions {
    /// Create scan options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the detection policy.
    pub fn with_policy(mut self, policy: ScanPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the minimum run length for the threshold policy.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Construct the scanner for the selected policy.
    pub fn scanner(&self) -> Box<dyn RegionScanner> {
        match self.policy {
            ScanPolicy::Threshold => Box::new(ThresholdScanner::new(self.threshold)),
            ScanPolicy::Paged => Box::new(PagedScanner::new()),
        }
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            policy: ScanPolicy::Threshold,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Scan a body element sequence with the given options.
pub fn scan_elements(elements: &[&XmlElement], options: &ScanOptions) -> Vec<EmptyRegion> {
    let scanner = options.scanner();
    let regions = scanner.scan(elements);
    log::debug!(
        "{} scan over {} element(s): {} region(s)",
        scanner.name(),
        elements.len(),
        regions.len()
    );
    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = ScanOptions::new()
            .with_policy(ScanPolicy::Paged)
            .with_threshold(20);
        assert_eq!(options.policy, ScanPolicy::Paged);
        assert_eq!(options.threshold, 20);
    }

    #[test]
    fn test_default_options() {
        let options = ScanOptions::default();
        assert_eq!(options.policy, ScanPolicy::Threshold);
        assert_eq!(options.threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_scanner_dispatch() {
        assert_eq!(ScanOptions::new().scanner().name(), "threshold");
        assert_eq!(
            ScanOptions::new()
                .with_policy(ScanPolicy::Paged)
                .scanner()
                .name(),
            "paged"
        );
    }

    #[test]
    fn test_empty_document_yields_no_regions() {
        for policy in [ScanPolicy::Threshold, ScanPolicy::Paged] {
            let options = ScanOptions::new().with_policy(policy).with_threshold(1);
            assert!(scan_elements(&[], &options).is_empty());
        }
    }
}
