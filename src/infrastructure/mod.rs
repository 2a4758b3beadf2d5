//! Infrastructure layer: the XML writing capability used by the generator.
//!
//! # Modules
//!
//! - [`xml`] - Ordered XML element tree serialized with `quick-xml`

pub mod xml;

pub use xml::{XmlDocument, XmlElement};
