//! Content document parsing.
//!
//! Builds the owned [`model`](crate::model) tree from `word/document.xml`
//! bytes using quick-xml events. Attribute values and character data are
//! stored unescaped; escaping is re-applied on write.

use crate::error::{Error, Result};
use crate::model::{DocumentXml, XmlDeclaration, XmlElement, XmlNode};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Parse `word/document.xml` bytes into a [`DocumentXml`].
///
/// Nodes outside the root element (other than the XML declaration) are
/// dropped; `word/document.xml` has no meaningful prolog content.
pub fn parse_document(bytes: &[u8]) -> Result<DocumentXml> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();

    let mut decl = XmlDeclaration::default();
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| Error::XmlParse(e.to_string()))?;

        match event {
            Event::Decl(d) => {
                decl = read_declaration(&d)?;
            }
            Event::Start(start) => {
                let element = read_element(&start, false)?;
                stack.push(element);
            }
            Event::Empty(start) => {
                let element = read_element(&start, true)?;
                attach(&mut stack, &mut root, XmlNode::Element(element))?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| Error::XmlParse("unbalanced end tag".to_string()))?;
                attach(&mut stack, &mut root, XmlNode::Element(element))?;
            }
            Event::Text(text) => {
                let content = text
                    .unescape()
                    .map_err(|e| Error::XmlParse(e.to_string()))?
                    .into_owned();
                if let Some(parent) = stack.last_mut() {
                    parent.push_child(XmlNode::Text(content));
                }
            }
            Event::CData(data) => {
                let content = String::from_utf8_lossy(&data.into_inner()).into_owned();
                if let Some(parent) = stack.last_mut() {
                    parent.push_child(XmlNode::CData(content));
                }
            }
            Event::Comment(comment) => {
                let content = String::from_utf8_lossy(&comment).into_owned();
                if let Some(parent) = stack.last_mut() {
                    parent.push_child(XmlNode::Comment(content));
                }
            }
            Event::PI(pi) => {
                let content = String::from_utf8_lossy(&pi).into_owned();
                if let Some(parent) = stack.last_mut() {
                    parent.push_child(XmlNode::ProcessingInstruction(content));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(Error::XmlParse("unclosed element at end of input".to_string()));
    }

    let root = root.ok_or_else(|| Error::XmlParse("document has no root element".to_string()))?;
    log::debug!(
        "parsed document.xml: root <{}>, {} attribute(s)",
        root.name,
        root.attributes.len()
    );
    Ok(DocumentXml { decl, root })
}

fn read_declaration(decl: &quick_xml::events::BytesDecl<'_>) -> Result<XmlDeclaration> {
    let version = decl
        .version()
        .map_err(|e| Error::XmlParse(e.to_string()))?;
    let version = String::from_utf8_lossy(&version).into_owned();

    let encoding = match decl.encoding() {
        Some(enc) => {
            let enc = enc.map_err(|e| Error::XmlParse(e.to_string()))?;
            Some(String::from_utf8_lossy(&enc).into_owned())
        }
        None => None,
    };

    let standalone = match decl.standalone() {
        Some(sa) => {
            let sa = sa.map_err(|e| Error::XmlParse(e.to_string()))?;
            Some(String::from_utf8_lossy(&sa).into_owned())
        }
        None => None,
    };

    Ok(XmlDeclaration {
        version,
        encoding,
        standalone,
    })
}

fn read_element(start: &quick_xml::events::BytesStart<'_>, self_closing: bool) -> Result<XmlElement> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = XmlElement::new(name);
    element.self_closing = self_closing;

    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::XmlParse(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::XmlParse(e.to_string()))?
            .into_owned();
        element.push_attribute(key, value);
    }

    Ok(element)
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    node: XmlNode,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(node);
        return Ok(());
    }
    match node {
        XmlNode::Element(el) => {
            if root.is_some() {
                return Err(Error::XmlParse("multiple root elements".to_string()));
            }
            *root = Some(el);
            Ok(())
        }
        // prolog/epilog whitespace and comments
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><w:body><w:p><w:r><w:t>Hello &amp; welcome</w:t></w:r></w:p><w:p/></w:body></w:document>"#;

    #[test]
    fn test_parse_structure() {
        let doc = parse_document(SAMPLE.as_bytes()).unwrap();
        assert_eq!(doc.root.name, "w:document");
        assert_eq!(doc.root.attributes.len(), 2);
        assert_eq!(doc.body_element_count(), 2);
    }

    #[test]
    fn test_parse_declaration() {
        let doc = parse_document(SAMPLE.as_bytes()).unwrap();
        assert_eq!(doc.decl.version, "1.0");
        assert_eq!(doc.decl.encoding.as_deref(), Some("UTF-8"));
        assert_eq!(doc.decl.standalone.as_deref(), Some("yes"));
    }

    #[test]
    fn test_text_is_unescaped() {
        let doc = parse_document(SAMPLE.as_bytes()).unwrap();
        let para = doc.body_elements()[0];
        let run = para.find_child("r").unwrap();
        let text = run.find_child("t").unwrap();
        assert_eq!(text.text(), "Hello & welcome");
    }

    #[test]
    fn test_self_closing_is_recorded() {
        let doc = parse_document(SAMPLE.as_bytes()).unwrap();
        assert!(doc.body_elements()[1].self_closing);
        assert!(!doc.body_elements()[0].self_closing);
    }

    #[test]
    fn test_malformed_input() {
        assert!(parse_document(b"<w:document><w:body>").is_err());
        assert!(parse_document(b"no markup here").is_err());
    }

    #[test]
    fn test_missing_declaration_defaults_utf8() {
        let doc = parse_document(b"<doc><body/></doc>").unwrap();
        assert_eq!(doc.decl.encoding.as_deref(), Some("UTF-8"));
    }
}
