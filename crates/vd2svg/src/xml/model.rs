//! XML data model shared by source documents and generated SVG

use indexmap::IndexMap;

/// Attribute map keyed by qualified name, in document order
pub type Attributes = IndexMap<String, String>;

/// Parsed XML document: every top-level element in order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub elements: Vec<Element>,
}

/// XML element
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Attributes,
    pub children: Vec<Content>,
}

/// XML content node
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Element(Element),
    Text(String),
}

impl Document {
    /// Top-level elements with the given tag name
    pub fn roots_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements.iter().filter(move |el| el.name == name)
    }

    /// Visit every element of the document in pre-order
    pub fn for_each_element_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        for element in &mut self.elements {
            element.for_each_mut(f);
        }
    }
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute, keeping its position when it already exists
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn push(&mut self, child: Self) {
        self.children.push(Content::Element(child));
    }

    /// Child elements, skipping text
    pub fn elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|child| match child {
            Content::Element(el) => Some(el),
            Content::Text(_) => None,
        })
    }

    pub fn first_child_named(&self, name: &str) -> Option<&Self> {
        self.elements().find(|el| el.name == name)
    }

    fn for_each_mut(&mut self, f: &mut impl FnMut(&mut Self)) {
        f(self);
        for child in &mut self.children {
            if let Content::Element(el) = child {
                el.for_each_mut(f);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attr_keeps_position() {
        let mut el = Element::new("path")
            .with_attr("fill", "none")
            .with_attr("d", "M0 0");
        el.set_attr("fill", "#fff");

        let keys: Vec<&str> = el.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["fill", "d"]);
        assert_eq!(el.attr("fill"), Some("#fff"));
    }

    #[test]
    fn test_elements_skip_text() {
        let mut el = Element::new("group");
        el.children.push(Content::Text("note".to_string()));
        el.push(Element::new("path"));

        let names: Vec<&str> = el.elements().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["path"]);
        assert!(el.first_child_named("path").is_some());
        assert!(el.first_child_named("clip-path").is_none());
    }

    #[test]
    fn test_for_each_element_mut_is_pre_order() {
        let mut inner = Element::new("group");
        inner.push(Element::new("path"));
        let mut root = Element::new("vector");
        root.push(inner);
        let mut doc = Document {
            elements: vec![root],
        };

        let mut seen = Vec::new();
        doc.for_each_element_mut(&mut |el: &mut Element| seen.push(el.name.clone()));
        assert_eq!(seen, vec!["vector", "group", "path"]);
    }
}
