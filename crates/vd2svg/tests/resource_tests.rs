use vd2svg::{parse_android_resource, ResourceMap};

fn map(entries: &[(&str, &str)]) -> ResourceMap {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_transform_xml_to_map() {
    let input = r##"
        <?xml version="1.0" encoding="utf-8"?>
        <resources>
            <color name="colorPrimary">#CE3168</color>
            <color name="colorPrimaryDark">#b9275a</color>
            <color name="colorAccent">#CE3168</color>
            <color name="ucrop_color_toolbar">@color/colorPrimary</color>
            <color name="ucrop_color_statusbar">@color/colorPrimaryDark</color>
            <color name="ucrop_color_widget_active">@color/colorPrimary</color>
        </resources>
    "##;

    let result = parse_android_resource(input);
    assert_eq!(
        result,
        Some(map(&[
            ("@color/colorPrimary", "#CE3168"),
            ("@color/colorPrimaryDark", "#b9275a"),
            ("@color/colorAccent", "#CE3168"),
            ("@color/ucrop_color_toolbar", "#CE3168"),
            ("@color/ucrop_color_statusbar", "#b9275a"),
            ("@color/ucrop_color_widget_active", "#CE3168"),
        ]))
    );
}

#[test]
fn test_alias_scenario() {
    let result = parse_android_resource(
        r##"<resources><color name="a">@color/b</color><color name="b">#FFF</color></resources>"##,
    );
    assert_eq!(
        result,
        Some(map(&[("@color/a", "#FFF"), ("@color/b", "#FFF")]))
    );
}

#[test]
fn test_mixed_resource_types() {
    let result = parse_android_resource(
        r#"<resources>
            <dimen name="icon">24dp</dimen>
            <string name="title">Badge</string>
            <dimen name="icon_alias">@dimen/icon</dimen>
        </resources>"#,
    );
    assert_eq!(
        result,
        Some(map(&[
            ("@dimen/icon", "24dp"),
            ("@string/title", "Badge"),
            ("@dimen/icon_alias", "24dp"),
        ]))
    );
}

#[test]
fn test_not_a_resource_document() {
    assert_eq!(parse_android_resource("<vector/>"), None);
    assert_eq!(parse_android_resource("not xml at all"), None);
}
