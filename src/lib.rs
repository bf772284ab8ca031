//! # unblank
//!
//! Find and remove blank pages from DOCX documents.
//!
//! unblank scans the content document of a DOCX package for pages that
//! consist solely of empty paragraphs (accumulated blank lines, or blank
//! pages produced by section breaks) and deletes the ones you accept,
//! repacking the file in place after writing a backup copy.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unblank::{scan_file, ScanOptions};
//!
//! fn main() -> unblank::Result<()> {
//!     // Read-only scan with the default threshold policy
//!     let report = scan_file("document.docx", &ScanOptions::default())?;
//!     for region in &report.regions {
//!         println!(
//!             "region {}: {} empty elements ({}-{})",
//!             region.ordinal,
//!             region.len(),
//!             region.start_index(),
//!             region.end_index()
//!         );
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Detection policies
//!
//! "Empty page" is a heuristic, not a layout computation: the scanner
//! never renders the document, it walks body elements once and groups
//! them by text emptiness and break markers. Two policies are available
//! behind one interface:
//!
//! - **Threshold** (default): maximal runs of consecutive empty
//!   paragraphs of at least a minimum length (default 15).
//! - **Paged**: break-delimited pages with no visible text.
//!
//! A paragraph whose only content is a drawing or a field without literal
//! text counts as empty under both policies; see
//! [`classify`](crate::classify) for the exact rules.

pub mod classify;
pub mod detect;
pub mod edit;
pub mod error;
pub mod model;
pub mod package;
pub mod parser;
pub mod scan;
pub mod session;
pub mod writer;

// Re-export commonly used types
pub use detect::{detect_format_from_path, is_docx, DocxFormat};
pub use error::{Error, Result};
pub use model::{DocumentXml, EmptyRegion, RegionKind, XmlDeclaration, XmlElement, XmlNode};
pub use scan::{
    PagedScanner, RegionScanner, ScanOptions, ScanPolicy, ThresholdScanner, DEFAULT_THRESHOLD,
};
pub use session::{
    clean_file, scan_file, select_with, CleanOptions, CleanReport, Outcome, ScanReport, Selection,
};

use std::path::Path;

/// Builder for scanning and cleaning DOCX documents.
///
/// # Example
///
/// ```no_run
/// use unblank::{Selection, Unblank};
///
/// let report = Unblank::new()
///     .with_threshold(20)
///     .keep_backup(false)
///     .clean("document.docx", Selection::All)?;
/// # Ok::<(), unblank::Error>(())
/// ```
pub struct Unblank {
    options: CleanOptions,
}

impl Unblank {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: CleanOptions::new(),
        }
    }

    /// Select the detection policy.
    pub fn with_policy(mut self, policy: ScanPolicy) -> Self {
        self.options.scan = self.options.scan.with_policy(policy);
        self
    }

    /// Set the minimum run length for the threshold policy.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.options.scan = self.options.scan.with_threshold(threshold);
        self
    }

    /// Enable or disable the backup copy written before cleaning.
    pub fn keep_backup(mut self, backup: bool) -> Self {
        self.options = self.options.with_backup(backup);
        self
    }

    /// Scan without modifying the file.
    pub fn scan<P: AsRef<Path>>(&self, path: P) -> Result<ScanReport> {
        scan_file(path, &self.options.scan)
    }

    /// Clean with a fixed selection.
    pub fn clean<P: AsRef<Path>>(&self, path: P, selection: Selection) -> Result<CleanReport> {
        clean_file(path, &self.options, selection)
    }

    /// Clean, deciding over the detected regions with a callback.
    pub fn clean_with<P, F>(&self, path: P, select: F) -> Result<CleanReport>
    where
        P: AsRef<Path>,
        F: FnOnce(&[EmptyRegion]) -> Selection,
    {
        select_with(path, &self.options, select)
    }
}

impl Default for Unblank {
    fn default() -> Self {
        Self::new()
    }
}
