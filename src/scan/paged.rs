//! Break-delimited page detection policy.

use super::RegionScanner;
use crate::classify::ElementTraits;
use crate::model::{EmptyRegion, RegionKind, XmlElement};

/// Treats the body as a sequence of pages delimited by page-forcing breaks
/// and reports pages with no visible text.
///
/// An element carrying a page-forcing break ends the current page and is
/// included in it. The first page has no preceding break; the final page
/// is closed at document end even without a trailing break. A page is
/// empty when it gathered at least one element and none of them holds
/// visible text. Text in any element counts, not just paragraphs, so a
/// page containing a table with cell text is not empty.
#[derive(Debug, Clone, Default)]
pub struct PagedScanner;

impl PagedScanner {
    /// Create a paged scanner.
    pub fn new() -> Self {
        Self
    }

    fn flush(page: &mut Vec<usize>, has_text: &mut bool, regions: &mut Vec<EmptyRegion>) {
        if !page.is_empty() && !*has_text {
            regions.push(EmptyRegion::new(
                regions.len() + 1,
                std::mem::take(page),
                RegionKind::EmptyPage,
            ));
        } else {
            page.clear();
        }
        *has_text = false;
    }
}

impl RegionScanner for PagedScanner {
    fn name(&self) -> &'static str {
        "paged"
    }

    fn scan(&self, elements: &[&XmlElement]) -> Vec<EmptyRegion> {
        let mut regions = Vec::new();
        let mut page: Vec<usize> = Vec::new();
        let mut has_text = false;

        for (index, element) in elements.iter().enumerate() {
            let traits = ElementTraits::of(element);
            page.push(index);
            if !traits.is_empty() {
                has_text = true;
            }
            if traits.forces_new_page() {
                Self::flush(&mut page, &mut has_text, &mut regions);
            }
        }
        // the final page closes at document end
        Self::flush(&mut page, &mut has_text, &mut regions);

        regions
    }
}
