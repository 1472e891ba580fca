//! VectorDrawable node → SVG node transformation

use tracing::{debug, trace};

use crate::error::{Error, ErrorKind, Result};
use crate::tables::{self, GRADIENT_ITEM_RULES, GRADIENT_RULES, GROUP_RULES, PATH_RULES};
use crate::xml::Element;

/// Source element kinds the transformer knows about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Path,
    Group,
    ClipPath,
    Gradient,
    Unknown,
}

impl NodeKind {
    pub fn of(element: &Element) -> Self {
        match element.name.as_str() {
            "path" => Self::Path,
            "group" => Self::Group,
            "clip-path" => Self::ClipPath,
            "gradient" => Self::Gradient,
            _ => Self::Unknown,
        }
    }
}

/// Outcome of transforming one source element
#[derive(Clone, Debug, PartialEq)]
pub enum Transformed {
    /// Regular node, appended where the source element was
    Node(Element),
    /// `clipPath` destined for `defs`, applied to the next sibling
    ClipPath(Element),
    Skip,
}

/// Shared `defs` members, in insertion order
#[derive(Clone, Debug, Default)]
pub struct Definitions {
    members: Vec<Element>,
}

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Add a gradient, returning its generated id
    pub fn add_gradient(&mut self, gradient: Element) -> String {
        self.add("gradient", gradient)
    }

    /// Add a clip path, returning its generated id
    pub fn add_clip_path(&mut self, clip_path: Element) -> String {
        self.add("clip_path", clip_path)
    }

    fn add(&mut self, prefix: &str, mut element: Element) -> String {
        let id = format!("{prefix}_{}", self.members.len());
        element.set_attr("id", id.as_str());
        self.members.push(element);
        id
    }

    /// The `defs` element, or `None` when nothing was defined
    pub fn into_element(self) -> Option<Element> {
        if self.members.is_empty() {
            return None;
        }
        let mut defs = Element::new("defs");
        for member in self.members {
            defs.push(member);
        }
        Some(defs)
    }
}

/// Clip path waiting for the next sibling in a child list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ClipState {
    #[default]
    Idle,
    Pending(String),
}

impl ClipState {
    /// Route one transformed child, returning the node to append, if any
    pub fn route(&mut self, transformed: Transformed, defs: &mut Definitions) -> Option<Element> {
        match transformed {
            Transformed::Node(mut node) => {
                if let Self::Pending(id) = std::mem::take(self) {
                    node.set_attr("clip-path", format!("url(#{id})"));
                }
                Some(node)
            }
            Transformed::ClipPath(clip_path) => {
                *self = Self::Pending(defs.add_clip_path(clip_path));
                None
            }
            Transformed::Skip => None,
        }
    }
}

/// Transform a list of sibling elements, routing clip paths through `defs`
pub fn transform_children<'a>(
    children: impl IntoIterator<Item = &'a Element>,
    defs: &mut Definitions,
) -> Result<Vec<Element>> {
    let mut state = ClipState::default();
    let mut nodes = Vec::new();
    for child in children {
        let transformed = transform_node(child, defs)?;
        if let Some(node) = state.route(transformed, defs) {
            nodes.push(node);
        }
    }

    if let ClipState::Pending(id) = state {
        debug!("{id} has no following sibling to clip");
    }
    Ok(nodes)
}

/// Transform one source element
pub fn transform_node(element: &Element, defs: &mut Definitions) -> Result<Transformed> {
    let kind = NodeKind::of(element);
    trace!(tag = %element.name, ?kind, "transforming node");

    match kind {
        NodeKind::Path => transform_path(element, defs).map(Transformed::Node),
        NodeKind::Group => transform_group(element, defs).map(Transformed::Node),
        NodeKind::ClipPath => Ok(Transformed::ClipPath(transform_clip_path(element))),
        NodeKind::Gradient => transform_gradient(element).map(Transformed::Node),
        NodeKind::Unknown => {
            debug!("skipping unsupported element <{}>", element.name);
            Ok(Transformed::Skip)
        }
    }
}

fn transform_path(element: &Element, defs: &mut Definitions) -> Result<Element> {
    let mut path = Element::new("path").with_attr("fill", "none");
    tables::apply(PATH_RULES, &element.attributes, &mut path);

    for wrapper in element.elements().filter(|el| el.name == "aapt:attr") {
        let target = match wrapper.attr("name") {
            Some("android:fillColor") => "fill",
            Some("android:strokeColor") => "stroke",
            _ => continue,
        };

        if let Some(gradient) = wrapper.first_child_named("gradient") {
            let id = defs.add_gradient(transform_gradient(gradient)?);
            path.set_attr(target, format!("url(#{id})"));
        }
    }

    Ok(path)
}

fn transform_group(element: &Element, defs: &mut Definitions) -> Result<Element> {
    let mut group = Element::new("g");
    tables::apply(GROUP_RULES, &element.attributes, &mut group);

    for node in transform_children(element.elements(), defs)? {
        group.push(node);
    }
    Ok(group)
}

fn transform_clip_path(element: &Element) -> Element {
    let mut path = Element::new("path");
    if let Some(data) = element.attr("android:pathData") {
        path.set_attr("d", data);
    }

    let mut clip_path = Element::new("clipPath");
    clip_path.push(path);
    clip_path
}

fn transform_gradient(element: &Element) -> Result<Element> {
    let name = match element.attr("android:type") {
        Some("linear") => "linearGradient",
        Some("radial") => "radialGradient",
        Some("sweep") => return Err(Error::unlocated(ErrorKind::UnsupportedGradientType)),
        other => {
            return Err(Error::unlocated(ErrorKind::InvalidGradientType {
                found: other.unwrap_or_default().to_string(),
            }));
        }
    };

    let mut gradient = Element::new(name).with_attr("gradientUnits", "userSpaceOnUse");
    tables::apply(GRADIENT_RULES, &element.attributes, &mut gradient);

    for item in element.elements().filter(|el| el.name == "item") {
        let mut stop = Element::new("stop");
        tables::apply(GRADIENT_ITEM_RULES, &item.attributes, &mut stop);
        gradient.push(stop);
    }

    Ok(gradient)
}
