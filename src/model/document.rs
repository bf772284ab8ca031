//! Document-level types.

use super::{XmlDeclaration, XmlElement, XmlNode};
use serde::{Deserialize, Serialize};

/// A parsed `word/document.xml`.
///
/// Child order inside the tree is document reading order and is preserved
/// except for explicit deletions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentXml {
    /// The XML declaration from the source (UTF-8 expected)
    pub decl: XmlDeclaration,

    /// The `w:document` root element
    pub root: XmlElement,
}

impl DocumentXml {
    /// Create a document from a root element with a default declaration.
    pub fn new(root: XmlElement) -> Self {
        Self {
            decl: XmlDeclaration::default(),
            root,
        }
    }

    /// The `w:body` element, if present.
    pub fn body(&self) -> Option<&XmlElement> {
        self.root.find_child("body")
    }

    /// Mutable access to the `w:body` element.
    pub fn body_mut(&mut self) -> Option<&mut XmlElement> {
        self.root.children.iter_mut().find_map(|node| match node {
            XmlNode::Element(el) if el.local_name() == "body" => Some(el),
            _ => None,
        })
    }

    /// Direct child elements of the body, in reading order.
    ///
    /// These are the body elements the region scanners walk; region indices
    /// refer to positions in this sequence.
    pub fn body_elements(&self) -> Vec<&XmlElement> {
        self.body()
            .map(|body| body.child_elements().collect())
            .unwrap_or_default()
    }

    /// Number of direct body elements.
    pub fn body_element_count(&self) -> usize {
        self.body()
            .map(|body| body.child_elements().count())
            .unwrap_or(0)
    }

    /// Plain text of the body paragraphs, one line per paragraph.
    ///
    /// Used by tests and the CLI summary; not part of the scan path.
    pub fn plain_text(&self) -> String {
        let mut lines = Vec::new();
        for el in self.body_elements() {
            if el.local_name() == "p" {
                lines.push(crate::classify::ElementTraits::of(el).text);
            }
        }
        lines.join("\n")
    }
}
