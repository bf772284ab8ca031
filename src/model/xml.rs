//! Owned XML tree types for the content document.
//!
//! The tree keeps qualified names and every attribute verbatim, including
//! `xmlns:*` declarations, so namespace bindings survive a rewrite even
//! when nothing in the remaining body references them.

use serde::{Deserialize, Serialize};

/// A node in the content document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum XmlNode {
    /// A child element
    Element(XmlElement),

    /// Character data (unescaped)
    Text(String),

    /// A CDATA section
    CData(String),

    /// A comment
    Comment(String),

    /// A processing instruction (target and content, verbatim)
    ProcessingInstruction(String),
}

/// An element with its qualified name, attributes, and children.
///
/// Attribute values are stored unescaped, in source order. `self_closing`
/// records whether the source used the `<tag/>` form so a no-op rewrite
/// keeps the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlElement {
    /// Qualified name as written in the source, e.g. `w:p`
    pub name: String,

    /// Attributes as (qualified name, unescaped value) pairs
    pub attributes: Vec<(String, String)>,

    /// Child nodes in document order
    pub children: Vec<XmlNode>,

    /// Whether the source element was self-closing
    pub self_closing: bool,
}

impl XmlElement {
    /// Create a new element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            self_closing: false,
        }
    }

    /// Local part of the qualified name (`p` for `w:p`).
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    /// Add an attribute, keeping source order.
    pub fn push_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((name.into(), value.into()));
    }

    /// Add a child node.
    pub fn push_child(&mut self, node: XmlNode) {
        self.children.push(node);
    }

    /// Look up an attribute by its local name, ignoring the prefix.
    ///
    /// DOCX attributes are usually `w:`-prefixed but the prefix is the
    /// producer's choice, so matching is on the local part only.
    pub fn attr_local(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| local_part(name) == local)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over direct child elements, skipping text and other nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(el) => Some(el),
            _ => None,
        })
    }

    /// First direct child element with the given local name.
    pub fn find_child(&self, local: &str) -> Option<&XmlElement> {
        self.child_elements().find(|el| el.local_name() == local)
    }

    /// First element with the given local name anywhere in the subtree.
    pub fn find_descendant(&self, local: &str) -> Option<&XmlElement> {
        for child in self.child_elements() {
            if child.local_name() == local {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(local) {
                return Some(found);
            }
        }
        None
    }

    /// Concatenated character data of this element's direct children.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                XmlNode::Text(t) | XmlNode::CData(t) => out.push_str(t),
                _ => {}
            }
        }
        out
    }
}

/// The XML declaration captured from the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlDeclaration {
    /// XML version, normally `1.0`
    pub version: String,

    /// Declared encoding, normally `UTF-8`
    pub encoding: Option<String>,

    /// The `standalone` pseudo-attribute, if declared
    pub standalone: Option<String>,
}

impl Default for XmlDeclaration {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            encoding: Some("UTF-8".to_string()),
            standalone: Some("yes".to_string()),
        }
    }
}

/// Local part of a qualified name.
pub(crate) fn local_part(qualified: &str) -> &str {
    match qualified.rsplit_once(':') {
        Some((_, local)) => local,
        None => qualified,
    }
}
