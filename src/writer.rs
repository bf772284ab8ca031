//! Content document serialization.
//!
//! Turns the owned tree back into `word/document.xml` bytes. Every
//! attribute is written back verbatim, which is what preserves namespace
//! declarations the body no longer references. Serialization is a pure
//! function of the tree; there is no process-global prefix registry.

use crate::error::{Error, Result};
use crate::model::{DocumentXml, XmlElement, XmlNode};
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Serialize a [`DocumentXml`] to bytes, declaration header included.
pub fn serialize(doc: &DocumentXml) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());

    let decl = BytesDecl::new(
        &doc.decl.version,
        doc.decl.encoding.as_deref(),
        doc.decl.standalone.as_deref(),
    );
    writer
        .write_event(Event::Decl(decl))
        .map_err(|e| Error::Write(e.to_string()))?;

    write_element(&mut writer, &doc.root)?;

    Ok(writer.into_inner())
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &XmlElement) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.self_closing && element.children.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(|e| Error::Write(e.to_string()));
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| Error::Write(e.to_string()))?;

    for child in &element.children {
        match child {
            XmlNode::Element(el) => write_element(writer, el)?,
            XmlNode::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(|e| Error::Write(e.to_string()))?,
            XmlNode::CData(data) => writer
                .write_event(Event::CData(BytesCData::new(data.as_str())))
                .map_err(|e| Error::Write(e.to_string()))?,
            XmlNode::Comment(comment) => writer
                .write_event(Event::Comment(BytesText::from_escaped(comment.as_str())))
                .map_err(|e| Error::Write(e.to_string()))?,
            XmlNode::ProcessingInstruction(pi) => writer
                .write_event(Event::PI(BytesPI::new(pi.as_str())))
                .map_err(|e| Error::Write(e.to_string()))?,
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(|e| Error::Write(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:w14="http://schemas.microsoft.com/office/word/2010/wordml"><w:body><w:p><w:r><w:t>A &amp; B</w:t></w:r></w:p><w:p/></w:body></w:document>"#;

    #[test]
    fn test_declaration_header() {
        let doc = parse_document(SAMPLE.as_bytes()).unwrap();
        let bytes = serialize(&doc).unwrap();
        let out = String::from_utf8(bytes).unwrap();
        assert!(out.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));
    }

    #[test]
    fn test_roundtrip_is_stable() {
        let doc = parse_document(SAMPLE.as_bytes()).unwrap();
        let bytes = serialize(&doc).unwrap();
        let reparsed = parse_document(&bytes).unwrap();
        assert_eq!(doc, reparsed);
    }

    #[test]
    fn test_unused_namespace_survives() {
        // w14 is declared but never used in the body
        let doc = parse_document(SAMPLE.as_bytes()).unwrap();
        let out = String::from_utf8(serialize(&doc).unwrap()).unwrap();
        assert!(out.contains(r#"xmlns:w14="http://schemas.microsoft.com/office/word/2010/wordml""#));
    }

    #[test]
    fn test_text_is_reescaped() {
        let doc = parse_document(SAMPLE.as_bytes()).unwrap();
        let out = String::from_utf8(serialize(&doc).unwrap()).unwrap();
        assert!(out.contains("A &amp; B"));
    }

    #[test]
    fn test_self_closing_shape_kept() {
        let doc = parse_document(SAMPLE.as_bytes()).unwrap();
        let out = String::from_utf8(serialize(&doc).unwrap()).unwrap();
        assert!(out.contains("<w:p/>"));
    }
}
