//! Attribute mapping tables
//!
//! Each table is an ordered list of rules. A rule looks at the whole source
//! attribute map and proposes output attributes; `None` values are dropped
//! and later rules overwrite earlier ones.

use crate::color::convert_color;
use crate::xml::{Attributes, Element};

/// Proposed output attributes, in order
pub type Partial = Vec<(&'static str, Option<String>)>;

/// A single mapping rule
pub type Rule = fn(&Attributes) -> Partial;

pub const PATH_RULES: &[Rule] = &[
    path_data,
    fill,
    stroke_line_join,
    stroke_line_cap,
    stroke_miter_limit,
    stroke_width,
    stroke,
    fill_rule,
];

pub const GROUP_RULES: &[Rule] = &[group_id, group_transform];

pub const GRADIENT_RULES: &[Rule] = &[gradient_axis, gradient_center, gradient_radius];

pub const GRADIENT_ITEM_RULES: &[Rule] = &[stop_color, stop_offset];

/// Run `rules` over `source` and write the results into `target`
pub fn apply(rules: &[Rule], source: &Attributes, target: &mut Element) {
    for rule in rules {
        for (key, value) in rule(source) {
            if let Some(value) = value {
                target.set_attr(key, value);
            }
        }
    }
}

fn copy(attrs: &Attributes, from: &str, to: &'static str) -> Partial {
    vec![(to, attrs.get(from).cloned())]
}

/// Colour plus opacity pair, e.g. `fill` / `fill-opacity`
fn paint(
    attrs: &Attributes,
    color_key: &str,
    alpha_key: Option<&str>,
    paint_attr: &'static str,
    opacity_attr: &'static str,
) -> Partial {
    let color = attrs.get(color_key).map(String::as_str);
    let alpha = alpha_key.and_then(|key| attrs.get(key)).map(String::as_str);
    if color.is_none() && alpha.is_none() {
        return Vec::new();
    }

    let value = convert_color(color, alpha);
    let opacity = value.opacity_attr();
    vec![(paint_attr, value.rgb), (opacity_attr, opacity)]
}

fn path_data(attrs: &Attributes) -> Partial {
    copy(attrs, "android:pathData", "d")
}

fn fill(attrs: &Attributes) -> Partial {
    paint(
        attrs,
        "android:fillColor",
        Some("android:fillAlpha"),
        "fill",
        "fill-opacity",
    )
}

fn stroke(attrs: &Attributes) -> Partial {
    paint(
        attrs,
        "android:strokeColor",
        Some("android:strokeAlpha"),
        "stroke",
        "stroke-opacity",
    )
}

fn stroke_line_join(attrs: &Attributes) -> Partial {
    copy(attrs, "android:strokeLineJoin", "stroke-linejoin")
}

fn stroke_line_cap(attrs: &Attributes) -> Partial {
    copy(attrs, "android:strokeLineCap", "stroke-linecap")
}

fn stroke_miter_limit(attrs: &Attributes) -> Partial {
    copy(attrs, "android:strokeMiterLimit", "stroke-miterlimit")
}

fn stroke_width(attrs: &Attributes) -> Partial {
    copy(attrs, "android:strokeWidth", "stroke-width")
}

fn fill_rule(attrs: &Attributes) -> Partial {
    vec![(
        "fill-rule",
        attrs.get("android:fillType").map(|v| v.to_lowercase()),
    )]
}

fn group_id(attrs: &Attributes) -> Partial {
    copy(attrs, "android:name", "id")
}

/// Numeric attribute with its source text; unparseable values fall back to
/// `default`
fn number<'a>(attrs: &'a Attributes, key: &str, default: &'a str) -> (f64, &'a str) {
    attrs
        .get(key)
        .map(|v| v.trim())
        .and_then(|v| v.parse::<f64>().ok().filter(|n| n.is_finite()).map(|n| (n, v)))
        .unwrap_or_else(|| (default.parse().unwrap_or_default(), default))
}

/// Compose translate, rotate and scale, skipping neutral parts. Included
/// parts keep the source text of their numbers.
///
/// `android:pivotX` / `android:pivotY` are not applied.
fn group_transform(attrs: &Attributes) -> Partial {
    let (translate_x, translate_x_text) = number(attrs, "android:translateX", "0");
    let (translate_y, translate_y_text) = number(attrs, "android:translateY", "0");
    let (rotation, rotation_text) = number(attrs, "android:rotation", "0");
    let (scale_x, scale_x_text) = number(attrs, "android:scaleX", "1");
    let (scale_y, scale_y_text) = number(attrs, "android:scaleY", "1");

    let mut parts = Vec::new();
    if translate_x != 0.0 || translate_y != 0.0 {
        parts.push(format!("translate({translate_x_text}, {translate_y_text})"));
    }
    if rotation != 0.0 {
        parts.push(format!("rotate({rotation_text})"));
    }
    if scale_x != 1.0 || scale_y != 1.0 {
        parts.push(format!("scale({scale_x_text}, {scale_y_text})"));
    }

    let transform = (!parts.is_empty()).then(|| parts.join(" "));
    vec![("transform", transform)]
}

fn gradient_axis(attrs: &Attributes) -> Partial {
    [
        ("android:startX", "x1"),
        ("android:startY", "y1"),
        ("android:endX", "x2"),
        ("android:endY", "y2"),
    ]
    .into_iter()
    .flat_map(|(from, to)| copy(attrs, from, to))
    .collect()
}

fn gradient_center(attrs: &Attributes) -> Partial {
    let mut partial = copy(attrs, "android:centerX", "cx");
    partial.extend(copy(attrs, "android:centerY", "cy"));
    partial
}

fn gradient_radius(attrs: &Attributes) -> Partial {
    copy(attrs, "android:gradientRadius", "r")
}

fn stop_color(attrs: &Attributes) -> Partial {
    paint(attrs, "android:color", None, "stop-color", "stop-opacity")
}

fn stop_offset(attrs: &Attributes) -> Partial {
    copy(attrs, "android:offset", "offset")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(entries: &[(&str, &str)]) -> Attributes {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn applied(rules: &[Rule], entries: &[(&str, &str)]) -> Vec<(String, String)> {
        let mut target = Element::new("out");
        apply(rules, &attrs(entries), &mut target);
        target.attributes.into_iter().collect()
    }

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_path_full_mapping() {
        let out = applied(
            PATH_RULES,
            &[
                ("android:fillType", "evenOdd"),
                ("android:strokeColor", "#80FF0000"),
                ("android:strokeWidth", "2"),
                ("android:strokeLineCap", "round"),
                ("android:strokeLineJoin", "bevel"),
                ("android:strokeMiterLimit", "4"),
                ("android:fillColor", "#FF00FF00"),
                ("android:pathData", "M0 0h24"),
            ],
        );
        let half = (128.0_f64 / 255.0).to_string();
        assert_eq!(
            out,
            pairs(&[
                ("d", "M0 0h24"),
                ("fill", "#00FF00"),
                ("stroke-linejoin", "bevel"),
                ("stroke-linecap", "round"),
                ("stroke-miterlimit", "4"),
                ("stroke-width", "2"),
                ("stroke", "#FF0000"),
                ("stroke-opacity", half.as_str()),
                ("fill-rule", "evenodd"),
            ])
        );
    }

    #[test]
    fn test_fill_alpha_multiplies() {
        let out = applied(
            PATH_RULES,
            &[("android:fillColor", "#ccabcd01"), ("android:fillAlpha", "0.5")],
        );
        assert_eq!(out, pairs(&[("fill", "#abcd01"), ("fill-opacity", "0.4")]));
    }

    #[test]
    fn test_fill_alpha_without_color() {
        let out = applied(PATH_RULES, &[("android:fillAlpha", "0.5")]);
        assert_eq!(out, pairs(&[("fill-opacity", "0.5")]));
    }

    #[test]
    fn test_unmapped_attributes_dropped() {
        let out = applied(PATH_RULES, &[("android:name", "p"), ("android:trimPathEnd", "1")]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_group_transform_order() {
        let out = applied(
            GROUP_RULES,
            &[
                ("android:scaleX", "2"),
                ("android:rotation", "45"),
                ("android:translateY", "3.5"),
                ("android:name", "layer"),
            ],
        );
        assert_eq!(
            out,
            pairs(&[("id", "layer"), ("transform", "translate(0, 3.5) rotate(45) scale(2, 1)")])
        );
    }

    #[test]
    fn test_group_transform_keeps_source_numbers() {
        let out = applied(
            GROUP_RULES,
            &[
                ("android:translateX", " 0.50 "),
                ("android:rotation", "1e2"),
                ("android:scaleY", "2.0"),
                ("android:scaleX", "oops"),
            ],
        );
        assert_eq!(
            out,
            pairs(&[("transform", "translate(0.50, 0) rotate(1e2) scale(1, 2.0)")])
        );
    }

    #[test]
    fn test_group_neutral_transform_omitted() {
        let out = applied(
            GROUP_RULES,
            &[
                ("android:scaleX", "1"),
                ("android:scaleY", "1.0"),
                ("android:translateX", "0"),
                ("android:rotation", "0"),
                ("android:pivotX", "12"),
                ("android:pivotY", "12"),
            ],
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_gradient_coordinates_verbatim() {
        let out = applied(
            GRADIENT_RULES,
            &[
                ("android:type", "linear"),
                ("android:startX", "0"),
                ("android:startY", "12dp"),
                ("android:endX", "24"),
                ("android:endY", "12"),
            ],
        );
        assert_eq!(
            out,
            pairs(&[("x1", "0"), ("y1", "12dp"), ("x2", "24"), ("y2", "12")])
        );

        let radial = applied(
            GRADIENT_RULES,
            &[
                ("android:centerX", "12"),
                ("android:centerY", "6"),
                ("android:gradientRadius", "10"),
            ],
        );
        assert_eq!(radial, pairs(&[("cx", "12"), ("cy", "6"), ("r", "10")]));
    }

    #[test]
    fn test_gradient_item() {
        let out = applied(
            GRADIENT_ITEM_RULES,
            &[("android:offset", "0.5"), ("android:color", "#99FFFFFF")],
        );
        assert_eq!(
            out,
            pairs(&[("stop-color", "#FFFFFF"), ("stop-opacity", "0.6"), ("offset", "0.5")])
        );
    }
}
