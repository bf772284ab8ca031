//! Empty region types.

use serde::{Deserialize, Serialize};

/// A maximal contiguous run of body elements judged to contain no visible
/// content.
///
/// Regions are computed fresh on each scan and never mutated. They hold
/// only indices into the body element sequence, never copies of elements,
/// so removal by index stays valid until it is actually applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyRegion {
    /// 1-based position of this region in the scan output
    pub ordinal: usize,

    /// Body element indices in the region, ascending and contiguous
    pub indices: Vec<usize>,

    /// Which detection policy produced the region
    pub kind: RegionKind,
}

impl EmptyRegion {
    /// Create a region from its member indices.
    pub fn new(ordinal: usize, indices: Vec<usize>, kind: RegionKind) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[1] == w[0] + 1));
        Self {
            ordinal,
            indices,
            kind,
        }
    }

    /// Number of body elements in the region.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the region has no members.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// First body element index.
    pub fn start_index(&self) -> usize {
        self.indices.first().copied().unwrap_or(0)
    }

    /// Last body element index.
    pub fn end_index(&self) -> usize {
        self.indices.last().copied().unwrap_or(0)
    }
}

/// The detection policy a region came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    /// A run of consecutive empty paragraphs (threshold policy)
    EmptyRun,

    /// A break-delimited page with no visible text (paged policy)
    EmptyPage,
}

impl std::fmt::Display for RegionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionKind::EmptyRun => write!(f, "empty run"),
            RegionKind::EmptyPage => write!(f, "empty page"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_bounds() {
        let region = EmptyRegion::new(1, vec![3, 4, 5], RegionKind::EmptyRun);
        assert_eq!(region.len(), 3);
        assert_eq!(region.start_index(), 3);
        assert_eq!(region.end_index(), 5);
        assert!(!region.is_empty());
    }

    #[test]
    fn test_region_serializes() {
        let region = EmptyRegion::new(2, vec![0, 1], RegionKind::EmptyPage);
        let json = serde_json::to_string(&region).unwrap();
        assert!(json.contains("\"empty_page\""));
        assert!(json.contains("\"ordinal\":2"));
    }
}
