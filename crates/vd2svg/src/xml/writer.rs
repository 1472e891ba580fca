//! Compact XML serializer

use crate::xml::model::{Content, Element};

/// Serialize an element tree without any whitespace between nodes
pub fn to_string(element: &Element) -> String {
    let mut output = String::new();
    serialize_element(element, &mut output);
    output
}

fn serialize_element(element: &Element, output: &mut String) {
    write_start_tag(element, output);

    if element.children.is_empty() {
        output.push_str("/>");
        return;
    }

    output.push('>');
    for child in &element.children {
        match child {
            Content::Element(child) => serialize_element(child, output),
            Content::Text(text) => output.push_str(&escape_text(text)),
        }
    }
    write_end_tag(element, output);
}

/// `<name attr="value" ...` without the closing bracket
pub(crate) fn write_start_tag(element: &Element, output: &mut String) {
    output.push('<');
    output.push_str(&element.name);

    for (key, value) in &element.attributes {
        output.push(' ');
        output.push_str(key);
        output.push_str("=\"");
        output.push_str(&escape_attribute(value));
        output.push('"');
    }
}

pub(crate) fn write_end_tag(element: &Element, output: &mut String) {
    output.push_str("</");
    output.push_str(&element.name);
    output.push('>');
}

pub(crate) fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(input: &str) -> String {
    escape_text(input).replace('"', "&quot;")
}
