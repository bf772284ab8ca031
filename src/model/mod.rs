//! Document model types for DOCX content representation.
//!
//! This module defines the in-memory representation of `word/document.xml`:
//! a generic owned XML tree plus the region type produced by the scanners.
//! The tree is deliberately format-preserving rather than semantic, so a
//! rewrite round-trips namespace declarations and unknown content.

mod document;
mod region;
mod xml;

pub use document::DocumentXml;
pub use region::{EmptyRegion, RegionKind};
pub use xml::{XmlDeclaration, XmlElement, XmlNode};
