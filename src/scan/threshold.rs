//! Threshold-run detection policy.

use super::RegionScanner;
use crate::classify::ElementTraits;
use crate::model::{EmptyRegion, RegionKind, XmlElement};

/// Detects maximal runs of consecutive empty paragraphs of at least a
/// configurable minimum length.
///
/// A run accumulates elements that are paragraphs, empty, and carry no
/// page-forcing break. Anything else terminates the run: a non-paragraph
/// element, a paragraph with text, or a paragraph carrying a page break or
/// page-forcing section break. The breaking paragraph itself is excluded
/// from the run. Runs shorter than the minimum are dropped silently.
#[derive(Debug, Clone)]
pub struct ThresholdScanner {
    min_run: usize,
}

impl ThresholdScanner {
    /// Create a scanner with the given minimum run length.
    pub fn new(min_run: usize) -> Self {
        Self { min_run }
    }

    /// The configured minimum run length.
    pub fn min_run(&self) -> usize {
        self.min_run
    }

    fn flush(&self, run: &mut Vec<usize>, regions: &mut Vec<EmptyRegion>) {
        if run.len() >= self.min_run.max(1) {
            regions.push(EmptyRegion::new(
                regions.len() + 1,
                std::mem::take(run),
                RegionKind::EmptyRun,
            ));
        } else {
            run.clear();
        }
    }
}

impl Default for ThresholdScanner {
    fn default() -> Self {
        Self::new(super::DEFAULT_THRESHOLD)
    }
}

impl RegionScanner for ThresholdScanner {
    fn name(&self) -> &'static str {
        "threshold"
    }

    fn scan(&self, elements: &[&XmlElement]) -> Vec<EmptyRegion> {
        let mut regions = Vec::new();
        let mut run: Vec<usize> = Vec::new();

        for (index, element) in elements.iter().enumerate() {
            let traits = ElementTraits::of(element);
            if traits.is_paragraph && traits.is_empty() && !traits.forces_new_page() {
                run.push(index);
            } else {
                self.flush(&mut run, &mut regions);
            }
        }
        // a trailing run at document end counts like an interior one
        self.flush(&mut run, &mut regions);

        regions
    }
}
