//! Package and rewrite round-trip properties.

use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use unblank::package::{extract, repack, DOCUMENT_XML};
use unblank::parser::parse_document;
use unblank::writer::serialize;
use unblank::{edit, DocumentXml};

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

/// Declarations beyond `w:` are never referenced by the bodies below;
/// they must still round-trip.
fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:mc="http://schemas.openxmlformats.org/markup-compatibility/2006" xmlns:w14="http://schemas.microsoft.com/office/word/2010/wordml"><w:body>{body}</w:body></w:document>"#
    )
}

fn write_docx(path: &Path, document: &str, media: Option<&[u8]>) {
    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(CONTENT_TYPES.as_bytes()).unwrap();
    zip.start_file("_rels/.rels", options).unwrap();
    zip.write_all(RELS.as_bytes()).unwrap();
    zip.start_file(DOCUMENT_XML, options).unwrap();
    zip.write_all(document.as_bytes()).unwrap();
    if let Some(bytes) = media {
        zip.start_file("word/media/image1.bin", options).unwrap();
        zip.write_all(bytes).unwrap();
    }

    zip.finish().unwrap();
}

fn read_entry(path: &Path, name: &str) -> Vec<u8> {
    let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes).unwrap();
    bytes
}

fn parse_docx_document(path: &Path) -> DocumentXml {
    parse_document(&read_entry(path, DOCUMENT_XML)).unwrap()
}

#[test]
fn repack_after_extract_preserves_the_package() {
    let work = tempfile::tempdir().unwrap();
    let source = work.path().join("source.docx");
    let media: Vec<u8> = (0u16..600).map(|i| (i % 251) as u8).collect();
    write_docx(
        &source,
        &document_xml("<w:p><w:r><w:t>kept</w:t></w:r></w:p>"),
        Some(&media),
    );

    let extracted = work.path().join("extracted");
    extract(&source, &extracted).unwrap();
    let repacked = work.path().join("repacked.docx");
    repack(&extracted, &repacked).unwrap();

    // same manifest
    let names = |p: &Path| -> Vec<String> {
        let archive = ZipArchive::new(File::open(p).unwrap()).unwrap();
        let mut names: Vec<String> = archive.file_names().map(String::from).collect();
        names.sort();
        names
    };
    assert_eq!(names(&source), names(&repacked));

    // untouched entries represent the same bytes once decompressed
    assert_eq!(read_entry(&repacked, "word/media/image1.bin"), media);

    // the content document parses element-for-element equal
    assert_eq!(parse_docx_document(&source), parse_docx_document(&repacked));
}

#[test]
fn noop_rewrite_preserves_inherited_namespaces() {
    let xml = document_xml("<w:p><w:r><w:t>text</w:t></w:r></w:p>");
    let doc = parse_document(xml.as_bytes()).unwrap();
    let rewritten = String::from_utf8(serialize(&doc).unwrap()).unwrap();

    for binding in [
        r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships""#,
        r#"xmlns:mc="http://schemas.openxmlformats.org/markup-compatibility/2006""#,
        r#"xmlns:w14="http://schemas.microsoft.com/office/word/2010/wordml""#,
    ] {
        assert!(rewritten.contains(binding), "lost {binding}");
    }
    assert!(rewritten.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));

    // rewriting is side-effect free and repeatable
    let again = serialize(&parse_document(rewritten.as_bytes()).unwrap()).unwrap();
    assert_eq!(rewritten.as_bytes(), &again[..]);
}

#[test]
fn deletion_then_rewrite_leaves_no_trace() {
    let body = "<w:p><w:r><w:t>one</w:t></w:r></w:p>\
                <w:p/><w:p/><w:p/>\
                <w:p><w:r><w:t>two</w:t></w:r></w:p>\
                <w:p><w:r><w:t>three</w:t></w:r></w:p>";
    let mut doc = parse_document(document_xml(body).as_bytes()).unwrap();

    let removed = edit::remove_body_elements(&mut doc, &HashSet::from([1, 2, 3]));
    assert_eq!(removed, 3);

    let reparsed = parse_document(&serialize(&doc).unwrap()).unwrap();
    assert_eq!(reparsed.body_element_count(), 3);
    assert_eq!(reparsed.plain_text(), "one\ntwo\nthree");
}
