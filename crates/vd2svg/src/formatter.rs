//! Indenting XML formatter used for `pretty` output

use crate::error::Result;
use crate::xml::model::{Content, Element};
use crate::xml::writer::{escape_text, write_end_tag, write_start_tag};
use crate::xml::Parser;

/// Configuration options for formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Number of spaces for indentation
    pub indent_spaces: usize,
    /// Separator placed between lines
    pub line_separator: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_spaces: 4,
            line_separator: "\n".to_string(),
        }
    }
}

/// Re-indent an XML text, one element per line
pub fn pretty_print(xml: &str, config: &FormatConfig) -> Result<String> {
    let document = Parser::new(xml.as_bytes()).parse()?;
    let formatter = XmlFormatter { config };

    let mut lines = Vec::new();
    for element in &document.elements {
        formatter.format_element(element, 0, &mut lines);
    }
    Ok(lines.join(&config.line_separator))
}

struct XmlFormatter<'a> {
    config: &'a FormatConfig,
}

impl XmlFormatter<'_> {
    fn indentation(&self, depth: usize) -> String {
        " ".repeat(depth * self.config.indent_spaces)
    }

    fn format_element(&self, element: &Element, depth: usize, lines: &mut Vec<String>) {
        let indent = self.indentation(depth);
        let mut line = indent.clone();
        write_start_tag(element, &mut line);

        if element.children.is_empty() {
            line.push_str("/>");
            lines.push(line);
            return;
        }

        line.push('>');

        if element
            .children
            .iter()
            .all(|child| matches!(child, Content::Text(_)))
        {
            for child in &element.children {
                if let Content::Text(text) = child {
                    line.push_str(&escape_text(text.trim()));
                }
            }
            write_end_tag(element, &mut line);
            lines.push(line);
            return;
        }

        lines.push(line);
        for child in &element.children {
            match child {
                Content::Element(child) => self.format_element(child, depth + 1, lines),
                Content::Text(text) => {
                    lines.push(format!(
                        "{}{}",
                        self.indentation(depth + 1),
                        escape_text(text.trim())
                    ));
                }
            }
        }

        let mut closing = indent;
        write_end_tag(element, &mut closing);
        lines.push(closing);
    }
}
