//! Whole-document conversion: `<vector>` in, `<svg>` out

use indexmap::IndexMap;
use tracing::{debug, info, instrument};

use crate::error::{Error, ErrorKind, Result};
use crate::formatter::{pretty_print, FormatConfig};
use crate::transform::{transform_children, Definitions};
use crate::xml::{writer, Document, Element, Parser};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Literal attribute value → replacement, applied before conversion
pub type OverrideMap = IndexMap<String, String>;

/// Options for [`transform`]
#[derive(Clone, Debug, Default)]
pub struct TransformOptions {
    /// Re-indent the output
    pub pretty: bool,
    pub overrides: Option<OverrideMap>,
    /// Indentation used when `pretty` is set
    pub format: FormatConfig,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_overrides(mut self, overrides: OverrideMap) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }
}

/// Convert a VectorDrawable document into SVG text
#[instrument(skip_all, fields(len = content.len()))]
pub fn transform(content: &str, options: &TransformOptions) -> Result<String> {
    let mut document = Parser::new(content.as_bytes()).parse()?;

    if let Some(overrides) = &options.overrides {
        apply_overrides(&mut document, overrides);
    }

    let svg = assemble(&document)?;
    let output = writer::to_string(&svg);
    info!("converted vector drawable ({} bytes of svg)", output.len());

    if options.pretty {
        pretty_print(&output, &options.format)
    } else {
        Ok(output)
    }
}

/// Replace every attribute value that exactly matches an override key
pub fn apply_overrides(document: &mut Document, overrides: &OverrideMap) {
    let mut replaced = 0usize;
    document.for_each_element_mut(&mut |element: &mut Element| {
        for value in element.attributes.values_mut() {
            if let Some(replacement) = overrides.get(value.as_str()) {
                value.clone_from(replacement);
                replaced += 1;
            }
        }
    });
    debug!("applied {replaced} attribute overrides");
}

/// Build the `<svg>` tree for a parsed document
pub fn assemble(document: &Document) -> Result<Element> {
    let vectors: Vec<&Element> = document.roots_named("vector").collect();
    let [vector] = vectors.as_slice() else {
        return Err(Error::unlocated(ErrorKind::InvalidDocument {
            found: vectors.len(),
        }));
    };

    let width = vector.attr("android:width").and_then(remove_dimen_suffix);
    let height = vector.attr("android:height").and_then(remove_dimen_suffix);
    let viewport_width = vector.attr("android:viewportWidth");
    let viewport_height = vector.attr("android:viewportHeight");

    let mut svg = Element::new("svg")
        .with_attr("id", "vector")
        .with_attr("xmlns", SVG_NAMESPACE)
        .with_attr("width", width.as_deref().or(viewport_width).unwrap_or("0"))
        .with_attr("height", height.as_deref().or(viewport_height).unwrap_or("0"))
        .with_attr(
            "viewBox",
            format!(
                "0 0 {} {}",
                viewport_width.or(width.as_deref()).unwrap_or("0"),
                viewport_height.or(height.as_deref()).unwrap_or("0"),
            ),
        );

    let mut defs = Definitions::new();
    let nodes = transform_children(vector.elements(), &mut defs)?;

    if let Some(defs) = defs.into_element() {
        svg.push(defs);
    }

    let mut ids = IdCounters::default();
    for mut node in nodes {
        if !node.attributes.contains_key("id") {
            if let Some(id) = ids.next(&node.name) {
                node.attributes.shift_insert(0, "id".to_string(), id);
            }
        }
        svg.push(node);
    }

    Ok(svg)
}

/// Strip a two-character unit (`dp`, `px`, ...) unless the value is a bare
/// number. Empty values count as absent.
fn remove_dimen_suffix(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if value.parse::<f64>().is_ok() {
        return Some(value.to_string());
    }

    let mut chars = value.chars();
    chars.next_back();
    chars.next_back();
    Some(chars.as_str().to_string()).filter(|v| !v.is_empty())
}

/// Per-tag counters for generated top-level ids
#[derive(Debug, Default)]
struct IdCounters {
    g: usize,
    path: usize,
}

impl IdCounters {
    fn next(&mut self, tag: &str) -> Option<String> {
        let counter = match tag {
            "g" => &mut self.g,
            "path" => &mut self.path,
            _ => return None,
        };
        let id = format!("{tag}_{counter}");
        *counter += 1;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(xml: &str) -> Result<String> {
        transform(xml, &TransformOptions::default())
    }

    #[test]
    fn test_remove_dimen_suffix() {
        assert_eq!(remove_dimen_suffix("24dp"), Some("24".to_string()));
        assert_eq!(remove_dimen_suffix(" 48px "), Some("48".to_string()));
        assert_eq!(remove_dimen_suffix("24"), Some("24".to_string()));
        assert_eq!(remove_dimen_suffix("12.5"), Some("12.5".to_string()));
        assert_eq!(remove_dimen_suffix(""), None);
        assert_eq!(remove_dimen_suffix("dp"), None);
    }

    #[test]
    fn test_id_counters() {
        let mut ids = IdCounters::default();
        assert_eq!(ids.next("path"), Some("path_0".to_string()));
        assert_eq!(ids.next("g"), Some("g_0".to_string()));
        assert_eq!(ids.next("path"), Some("path_1".to_string()));
        assert_eq!(ids.next("linearGradient"), None);
    }

    #[test]
    fn test_minimal_vector() -> Result<()> {
        let output = convert(
            r##"<vector android:width="24dp" android:height="24dp" android:viewportWidth="24" android:viewportHeight="24"><path android:pathData="M0 0L24 24" android:fillColor="#FF000000"/></vector>"##,
        )?;
        assert_eq!(
            output,
            r##"<svg id="vector" xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path id="path_0" fill="#000000" d="M0 0L24 24"/></svg>"##
        );
        Ok(())
    }

    #[test]
    fn test_dimensions_fall_back_to_viewport() -> Result<()> {
        let output = convert(r#"<vector android:viewportWidth="48" android:viewportHeight="32"/>"#)?;
        assert_eq!(
            output,
            r#"<svg id="vector" xmlns="http://www.w3.org/2000/svg" width="48" height="32" viewBox="0 0 48 32"/>"#
        );
        Ok(())
    }

    #[test]
    fn test_viewport_falls_back_to_dimensions() -> Result<()> {
        let output = convert(r#"<vector android:width="16dp" android:height="8dp"/>"#)?;
        assert!(output.contains(r#"width="16" height="8" viewBox="0 0 16 8""#));
        Ok(())
    }

    #[test]
    fn test_explicit_ids_kept_and_counters_not_consumed() -> Result<()> {
        let output = convert(
            r#"<vector android:viewportWidth="1" android:viewportHeight="1">
                <group android:name="named"/>
                <group/>
                <path/>
                <path/>
            </vector>"#,
        )?;
        assert!(output.contains(
            r#"<g id="named"/><g id="g_0"/><path id="path_0" fill="none"/><path id="path_1" fill="none"/>"#
        ));
        Ok(())
    }

    #[test]
    fn test_top_level_clip_path() -> Result<()> {
        let output = convert(
            r#"<vector android:viewportWidth="1" android:viewportHeight="1"><clip-path android:pathData="M0 0"/><path android:pathData="M1 1"/></vector>"#,
        )?;
        assert!(output.contains(
            r#"<defs><clipPath id="clip_path_0"><path d="M0 0"/></clipPath></defs><path id="path_0" fill="none" d="M1 1" clip-path="url(#clip_path_0)"/>"#
        ));
        Ok(())
    }

    #[test]
    fn test_invalid_document() {
        for input in ["<vector/><vector/>", "<svg/>", ""] {
            let err = convert(input).err();
            assert!(matches!(
                err.map(|e| e.kind().clone()),
                Some(ErrorKind::InvalidDocument { .. })
            ));
        }
    }

    #[test]
    fn test_overrides_replace_exact_values() -> Result<()> {
        let overrides: OverrideMap = [
            ("@color/colorPrimary", "#ed288a"),
            ("@dimen/size_24dp", "24dp"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let input = r#"<vector android:width="@dimen/size_24dp" android:height="@dimen/size_24dp" android:viewportWidth="24" android:viewportHeight="24"><group><path android:fillColor="@color/colorPrimary" android:strokeColor="@color/colorPrimaryDark"/></group></vector>"#;
        let output = transform(input, &TransformOptions::new().with_overrides(overrides))?;

        assert!(output.contains(r#"width="24" height="24""#));
        assert!(output.contains(r##"fill="#ed288a""##));
        assert!(output.contains(r#"stroke="@color/colorPrimaryDark""#));
        Ok(())
    }

    #[test]
    fn test_pretty_output() -> Result<()> {
        let output = transform(
            r#"<vector android:viewportWidth="2" android:viewportHeight="2"><group><path/></group></vector>"#,
            &TransformOptions::new().pretty(true),
        )?;
        let expected = [
            r#"<svg id="vector" xmlns="http://www.w3.org/2000/svg" width="2" height="2" viewBox="0 0 2 2">"#,
            r#"    <g id="g_0">"#,
            r#"        <path fill="none"/>"#,
            "    </g>",
            "</svg>",
        ]
        .join("\n");
        assert_eq!(output, expected);
        Ok(())
    }
}
