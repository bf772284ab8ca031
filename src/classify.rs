//! Emptiness classification for body elements.
//!
//! One pass over an element subtree answers everything the scanners ask:
//! is it a paragraph, what visible text does it hold, and does it carry a
//! page-forcing break.
//!
//! "Visible text" is the concatenation of `w:t` runs only. Drawings,
//! fields rendered without literal text, and revision-deleted text
//! (`w:delText`) do not count, so a paragraph containing only a picture is
//! still classified empty. That is a known approximation of what a reader
//! sees on the page, kept deliberately: changing it would change which
//! regions are reported.

use crate::model::XmlElement;

/// Derived per-element attributes used by the region scanners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementTraits {
    /// Whether the element is a `w:p`
    pub is_paragraph: bool,

    /// Concatenated visible text, trimmed of surrounding whitespace
    pub text: String,

    /// Whether the element contains `<w:br w:type="page"/>`
    pub has_page_break: bool,

    /// Whether the element contains a page-forcing section break
    pub has_page_section_break: bool,
}

impl ElementTraits {
    /// Classify one body element.
    pub fn of(element: &XmlElement) -> Self {
        let mut traits = Self {
            is_paragraph: element.local_name() == "p",
            text: String::new(),
            has_page_break: false,
            has_page_section_break: false,
        };
        walk(element, &mut traits);
        traits.text = traits.text.trim().to_string();
        traits
    }

    /// Whether the element has zero visible text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the element forces content after it onto a new page.
    ///
    /// True for an explicit page break and for `nextPage`/`oddPage`/
    /// `evenPage` section breaks. A `continuous` section break never
    /// forces a page and never makes its paragraph non-deletable.
    pub fn forces_new_page(&self) -> bool {
        self.has_page_break || self.has_page_section_break
    }
}

fn walk(element: &XmlElement, traits: &mut ElementTraits) {
    for child in element.child_elements() {
        match child.local_name() {
            "t" => traits.text.push_str(&child.text()),
            "br" => {
                if child.attr_local("type") == Some("page") {
                    traits.has_page_break = true;
                }
            }
            "sectPr" => {
                if section_forces_page(child) {
                    traits.has_page_section_break = true;
                }
            }
            _ => walk(child, traits),
        }
    }
}

/// Whether a `w:sectPr` carries a page-forcing break type.
///
/// A section with no explicit `w:type` is not treated as page-forcing.
fn section_forces_page(sect: &XmlElement) -> bool {
    sect.find_descendant("type")
        .and_then(|ty| ty.attr_local("val"))
        .map(|val| matches!(val, "nextPage" | "oddPage" | "evenPage"))
        .unwrap_or(false)
}
