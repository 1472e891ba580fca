//! vd2svg - Android VectorDrawable to SVG converter
//!
//! # Quick Start
//!
//! ```
//! use vd2svg::{transform, TransformOptions};
//! # fn main() -> Result<(), vd2svg::Error> {
//! let drawable = r##"<vector android:width="24dp" android:height="24dp"
//!     android:viewportWidth="24" android:viewportHeight="24">
//!     <path android:pathData="M0 0L24 24" android:fillColor="#FF000000"/>
//! </vector>"##;
//!
//! let svg = transform(drawable, &TransformOptions::default())?;
//! assert!(svg.starts_with(r#"<svg id="vector""#));
//! assert!(svg.contains(r##"<path id="path_0" fill="#000000" d="M0 0L24 24"/>"##));
//! # Ok(())
//! # }
//! ```
//!
//! Colour references such as `@color/colorPrimary` can be substituted before
//! conversion, typically with values read from the app's resource files:
//!
//! ```
//! use vd2svg::{parse_android_resource, transform, TransformOptions};
//! # fn main() -> Result<(), vd2svg::Error> {
//! let colors = parse_android_resource(
//!     r##"<resources><color name="colorPrimary">#ed288a</color></resources>"##,
//! )
//! .unwrap_or_default();
//!
//! let drawable = r#"<vector android:viewportWidth="24" android:viewportHeight="24">
//!     <path android:fillColor="@color/colorPrimary" android:pathData="M0 0"/>
//! </vector>"#;
//!
//! let svg = transform(drawable, &TransformOptions::new().with_overrides(colors))?;
//! assert!(svg.contains(r##"fill="#ed288a""##));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod xml;
pub use xml::{Content as XmlContent, Document as XmlDocument, Element as XmlElement};

pub mod color;
pub use color::{convert_color, ColorValue, Opacity};

pub mod resources;
pub use resources::{parse_android_resource, ResourceMap};

pub mod tables;

pub mod transform;
pub use transform::{transform_node, ClipState, Definitions, NodeKind, Transformed};

pub mod document;
pub use document::{transform, OverrideMap, TransformOptions, SVG_NAMESPACE};

pub mod formatter;
pub use formatter::{pretty_print, FormatConfig};

/// Parse XML from string
pub fn from_xml_str(s: &str) -> Result<XmlDocument> {
    xml::Parser::new(s.as_bytes()).parse()
}

/// Parse XML from bytes
pub fn from_xml_bytes(bytes: &[u8]) -> Result<XmlDocument> {
    xml::Parser::new(bytes).parse()
}
