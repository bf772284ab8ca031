//! Processing sessions over a single DOCX file.
//!
//! A session extracts the package into a scoped temporary directory,
//! parses the content document, scans it, and, for cleaning runs, applies
//! the accepted deletions and repacks over the original. The temporary
//! directory is removed on every path out, success or error. The final
//! overwrite of the input is the only externally visible mutation and
//! happens after the backup copy and a successful rewrite; a crash during
//! that overwrite can leave a corrupt output recoverable only from the
//! backup.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{DocumentXml, EmptyRegion};
use crate::package::{self, DOCUMENT_XML};
use crate::scan::ScanOptions;
use crate::{detect, edit, parser, writer};

/// Options for a cleaning session.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Region detection options
    pub scan: ScanOptions,

    /// Whether to write a backup copy before overwriting (default true)
    pub backup: bool,
}

impl CleanOptions {
    /// Create clean options with defaults.
    pub fn new() -> Self {
        Self {
            scan: ScanOptions::default(),
            backup: true,
        }
    }

    /// Set the scan options.
    pub fn with_scan_options(mut self, scan: ScanOptions) -> Self {
        self.scan = scan;
        self
    }

    /// Enable or disable the backup copy.
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Decision over the detected regions.
///
/// This is the programmatic replacement for the interactive boundary:
/// whichever way the decision is produced, downstream behavior is the
/// same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Accept every detected region
    All,

    /// Accept nothing; the document is left untouched
    None,

    /// Accept regions by their 1-based ordinal
    Ordinals(HashSet<usize>),
}

impl Selection {
    fn accepted<'a>(&self, regions: &'a [EmptyRegion]) -> Vec<&'a EmptyRegion> {
        match self {
            Selection::All => regions.iter().collect(),
            Selection::None => Vec::new(),
            Selection::Ordinals(ordinals) => regions
                .iter()
                .filter(|region| ordinals.contains(&region.ordinal))
                .collect(),
        }
    }
}

/// Result of a read-only scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// The scanned file
    pub path: PathBuf,

    /// Number of direct body elements
    pub body_elements: usize,

    /// Detected empty regions, in document order
    pub regions: Vec<EmptyRegion>,
}

impl ScanReport {
    /// Whether the scan found nothing to delete.
    pub fn is_clean(&self) -> bool {
        self.regions.is_empty()
    }
}

/// How a cleaning session ended.
///
/// "Nothing found" and "operator declined" are distinct outcomes; both
/// are normal, non-error results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// No empty regions were detected; the file was not touched
    Clean,

    /// Regions were detected but none were accepted; the file was not
    /// touched
    Declined,

    /// Accepted regions were removed and the file was rewritten
    Removed {
        /// Number of regions removed
        regions: usize,

        /// Number of body elements removed
        elements: usize,
    },
}

/// Result of a cleaning session.
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    /// The processed file
    pub path: PathBuf,

    /// Every region the scan detected, accepted or not
    pub regions: Vec<EmptyRegion>,

    /// How the session ended
    pub outcome: Outcome,

    /// Path of the backup copy, when one was written
    pub backup: Option<PathBuf>,
}

/// Scan a DOCX file for empty regions without modifying it.
pub fn scan_file<P: AsRef<Path>>(path: P, options: &ScanOptions) -> Result<ScanReport> {
    let path = path.as_ref();
    let (_work, doc) = load(path)?;
    let elements = doc.body_elements();
    let regions = crate::scan::scan_elements(&elements, options);

    Ok(ScanReport {
        path: path.to_path_buf(),
        body_elements: elements.len(),
        regions,
    })
}

/// Clean a DOCX file, deciding over regions with a fixed [`Selection`].
pub fn clean_file<P: AsRef<Path>>(
    path: P,
    options: &CleanOptions,
    selection: Selection,
) -> Result<CleanReport> {
    select_with(path, options, move |_| selection)
}

/// Clean a DOCX file, deciding over regions with a callback.
///
/// The callback sees the detected regions and returns the selection; it
/// is only invoked when at least one region was found. This is the hook
/// the interactive CLI uses.
pub fn select_with<P, F>(path: P, options: &CleanOptions, select: F) -> Result<CleanReport>
where
    P: AsRef<Path>,
    F: FnOnce(&[EmptyRegion]) -> Selection,
{
    let path = path.as_ref();
    let (work, mut doc) = load(path)?;

    let regions = {
        let elements = doc.body_elements();
        crate::scan::scan_elements(&elements, &options.scan)
    };

    if regions.is_empty() {
        return Ok(CleanReport {
            path: path.to_path_buf(),
            regions,
            outcome: Outcome::Clean,
            backup: None,
        });
    }

    let selection = select(&regions);
    let accepted = selection.accepted(&regions);
    if accepted.is_empty() {
        return Ok(CleanReport {
            path: path.to_path_buf(),
            regions,
            outcome: Outcome::Declined,
            backup: None,
        });
    }

    let region_count = accepted.len();
    let removed = edit::remove_regions(&mut doc, &accepted);

    let bytes = writer::serialize(&doc)?;
    fs::write(work.path().join(DOCUMENT_XML), bytes)?;

    let backup = if options.backup {
        Some(package::create_backup(path)?)
    } else {
        None
    };
    package::repack(work.path(), path)?;

    log::info!(
        "{}: removed {} element(s) in {} region(s)",
        path.display(),
        removed,
        region_count
    );

    Ok(CleanReport {
        path: path.to_path_buf(),
        regions,
        outcome: Outcome::Removed {
            regions: region_count,
            elements: removed,
        },
        backup,
    })
}

/// Validate, extract, and parse. The returned [`tempfile::TempDir`] owns
/// the working directory; dropping it removes the extraction.
fn load(path: &Path) -> Result<(tempfile::TempDir, DocumentXml)> {
    detect::detect_format_from_path(path)?;

    let work = tempfile::tempdir()?;
    package::extract(path, work.path())?;

    let document_path = work.path().join(DOCUMENT_XML);
    let bytes = fs::read(&document_path).map_err(|_| Error::MissingDocument)?;
    let doc = parser::parse_document(&bytes)?;

    Ok((work, doc))
}
