//! Android `values/*.xml` resource parsing

use indexmap::IndexMap;
use tracing::{debug, instrument, warn};

use crate::xml::{Content, Parser};

/// Resolved resources keyed by reference (`@color/name`)
pub type ResourceMap = IndexMap<String, String>;

/// Parse a `<resources>` document into a reference → value map.
///
/// Values that are themselves references to another entry are resolved one
/// hop; a reference to a reference stays a reference.
#[instrument(skip_all)]
pub fn parse_android_resource(content: &str) -> Option<ResourceMap> {
    let document = match Parser::new(content.as_bytes()).parse() {
        Ok(document) => document,
        Err(err) => {
            warn!("resource document is not valid xml: {err}");
            return None;
        }
    };

    let resources = document.roots_named("resources").next()?;

    let mut literal = ResourceMap::new();
    for entry in resources.elements() {
        let Some(name) = entry.attr("name") else {
            debug!("skipping <{}> without a name", entry.name);
            continue;
        };
        let Some(Content::Text(text)) = entry.children.first() else {
            debug!("skipping {name}: no text value");
            continue;
        };
        literal.insert(format!("@{}/{}", entry.name, name), text.trim().to_string());
    }

    let resolved = literal
        .iter()
        .map(|(key, value)| {
            let value = if is_reference(value) {
                literal.get(value).unwrap_or(value)
            } else {
                value
            };
            (key.clone(), value.clone())
        })
        .collect::<ResourceMap>();

    debug!("parsed {} resources", resolved.len());
    Some(resolved)
}

/// `@type/name` where both parts are word characters
fn is_reference(value: &str) -> bool {
    let is_word = |part: &str| {
        !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    };

    value
        .strip_prefix('@')
        .and_then(|rest| rest.split_once('/'))
        .is_some_and(|(kind, name)| is_word(kind) && is_word(name))
}
