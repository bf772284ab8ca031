//! DOCX package handling: extract, repack, and backup.
//!
//! A DOCX file is an OPC container, a ZIP archive with a fixed internal
//! layout. Extraction and repacking are byte-faithful for every entry this
//! tool does not rewrite; entries are re-stored with deflate compression
//! on repack, so untouched files represent the same bytes without being
//! bit-identical archive members.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::{Error, Result};

/// Conventional internal path of the main content document.
pub const DOCUMENT_XML: &str = "word/document.xml";

/// Suffix inserted before the extension of backup files.
pub const BACKUP_EXTENSION: &str = "backup.docx";

/// Unpack every archive entry under `dest`, preserving relative paths.
pub fn extract(docx: &Path, dest: &Path) -> Result<()> {
    let file = File::open(docx)?;
    let mut archive = ZipArchive::new(file)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let Some(relative) = entry.enclosed_name() else {
            return Err(Error::InvalidFormat(format!(
                "archive entry escapes the package root: {}",
                entry.name()
            )));
        };
        let target = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&target)?;
        io::copy(&mut entry, &mut out)?;
    }

    log::debug!("extracted {} entries to {}", archive.len(), dest.display());
    Ok(())
}

/// Repack every file under `dir` into a DOCX at `output`.
///
/// Paths are stored relative to `dir` with forward slashes, deflate
/// compressed. Entries are written in sorted order so repacking is
/// deterministic.
pub fn repack(dir: &Path, output: &Path) -> Result<()> {
    let file = File::create(output).map_err(|e| Error::Write(e.to_string()))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut count = 0usize;
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Write(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(dir)
            .map_err(|e| Error::Write(e.to_string()))?;
        let name = relative.to_string_lossy().replace('\\', "/");

        zip.start_file(name, options)?;
        let mut source = File::open(entry.path())?;
        io::copy(&mut source, &mut zip)?;
        count += 1;
    }
    zip.finish()?;

    log::debug!("repacked {} files into {}", count, output.display());
    Ok(())
}

/// Sibling path the backup copy is written to: `report.docx` becomes
/// `report.backup.docx`.
pub fn backup_path(input: &Path) -> PathBuf {
    input.with_extension(BACKUP_EXTENSION)
}

/// Write a byte-identical backup copy of `input` next to it.
///
/// The backup is never cleaned up by this tool.
pub fn create_backup(input: &Path) -> Result<PathBuf> {
    let backup = backup_path(input);
    fs::copy(input, &backup).map_err(|e| Error::Write(format!("backup failed: {e}")))?;
    log::info!("backup written to {}", backup.display());
    Ok(backup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_path() {
        assert_eq!(
            backup_path(Path::new("/tmp/report.docx")),
            PathBuf::from("/tmp/report.backup.docx")
        );
        assert_eq!(
            backup_path(Path::new("thesis.final.docx")),
            PathBuf::from("thesis.final.backup.docx")
        );
    }

    #[test]
    fn test_extract_repack_cycle() {
        let work = tempfile::tempdir().unwrap();
        let docx = work.path().join("sample.docx");

        // fabricate a minimal package
        {
            let file = File::create(&docx).unwrap();
            let mut zip = ZipWriter::new(file);
            let options = SimpleFileOptions::default();
            zip.start_file("[Content_Types].xml", options).unwrap();
            io::Write::write_all(&mut zip, b"<Types/>").unwrap();
            zip.start_file(DOCUMENT_XML, options).unwrap();
            io::Write::write_all(&mut zip, b"<w:document/>").unwrap();
            zip.finish().unwrap();
        }

        let extracted = work.path().join("extracted");
        extract(&docx, &extracted).unwrap();
        assert!(extracted.join(DOCUMENT_XML).is_file());
        assert_eq!(
            fs::read(extracted.join(DOCUMENT_XML)).unwrap(),
            b"<w:document/>"
        );

        let repacked = work.path().join("repacked.docx");
        repack(&extracted, &repacked).unwrap();

        let mut archive = ZipArchive::new(File::open(&repacked).unwrap()).unwrap();
        let mut names: Vec<String> = archive.file_names().map(String::from).collect();
        names.sort();
        assert_eq!(names, vec!["[Content_Types].xml", DOCUMENT_XML]);

        let mut content = String::new();
        io::Read::read_to_string(
            &mut archive.by_name(DOCUMENT_XML).unwrap(),
            &mut content,
        )
        .unwrap();
        assert_eq!(content, "<w:document/>");
    }

    #[test]
    fn test_create_backup_is_byte_identical() {
        let work = tempfile::tempdir().unwrap();
        let input = work.path().join("doc.docx");
        fs::write(&input, b"not really a zip, bytes only").unwrap();

        let backup = create_backup(&input).unwrap();
        assert_eq!(backup, work.path().join("doc.backup.docx"));
        assert_eq!(fs::read(&input).unwrap(), fs::read(&backup).unwrap());
    }
}
