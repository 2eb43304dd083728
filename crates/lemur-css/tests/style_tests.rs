//! Integration tests for style value types and property lookup.

use lemur_css::{ColorValue, PropertyMap, Unit, Value};

#[test]
fn test_color_from_hex_6() {
    let color = ColorValue::from_hex("#ff0000").unwrap();
    assert_eq!(color, ColorValue::new(255, 0, 0, 1.0));
}

#[test]
fn test_color_from_hex_3() {
    let color = ColorValue::from_hex("#f00").unwrap();
    assert_eq!(color, ColorValue::new(255, 0, 0, 1.0));
}

#[test]
fn test_color_from_hex_8_carries_alpha() {
    let color = ColorValue::from_hex("#00ff0080").unwrap();
    assert_eq!(color.g, 255);
    assert!((color.a - 128.0 / 255.0).abs() < 1e-6);
}

#[test]
fn test_color_from_hex_4() {
    let color = ColorValue::from_hex("#fff0").unwrap();
    assert_eq!((color.r, color.g, color.b), (255, 255, 255));
    assert!(color.a.abs() < 1e-6);
}

#[test]
fn test_color_from_hex_without_hash() {
    let color = ColorValue::from_hex("00ff00").unwrap();
    assert_eq!(color, ColorValue::new(0, 255, 0, 1.0));
}

#[test]
fn test_color_from_hex_rejects_bad_input() {
    assert_eq!(ColorValue::from_hex("#12345"), None);
    assert_eq!(ColorValue::from_hex("#gggggg"), None);
    assert_eq!(ColorValue::from_hex(""), None);
}

#[test]
fn test_color_from_named() {
    assert_eq!(ColorValue::from_named("black"), Some(ColorValue::BLACK));
    assert_eq!(ColorValue::from_named("WHITE"), Some(ColorValue::WHITE));
    assert_eq!(ColorValue::from_named("mauve-ish"), None);
}

#[test]
fn test_color_to_rgba8_scales_alpha() {
    let color = ColorValue::new(111, 111, 111, 0.2);
    assert_eq!(color.to_rgba8(), [111, 111, 111, 51]);
    assert_eq!(ColorValue::BLACK.to_rgba8(), [0, 0, 0, 255]);
}

#[test]
fn test_value_as_color() {
    let color = Value::Color(ColorValue::BLACK);
    assert_eq!(color.as_color(), Some(&ColorValue::BLACK));
    assert_eq!(Value::Length(4.0, Unit::Px).as_color(), None);
    assert_eq!(Value::Keyword("block".to_string()).as_color(), None);
}

// ========== PropertyMap fallback lookup ==========

#[test]
fn test_property_lookup_first_present_wins() {
    let mut props = PropertyMap::new();
    props.insert("background-color", Value::Color(ColorValue::WHITE));
    props.insert("background", Value::Color(ColorValue::BLACK));

    let value = props.value(&["background-color", "background"]).unwrap();
    assert_eq!(value, Value::Color(ColorValue::WHITE));
}

#[test]
fn test_property_lookup_falls_back_when_absent() {
    let mut props = PropertyMap::new();
    props.insert("background", Value::Color(ColorValue::BLACK));

    let value = props.value(&["background-color", "background"]).unwrap();
    assert_eq!(value, Value::Color(ColorValue::BLACK));
}

#[test]
fn test_property_lookup_none_when_chain_exhausted() {
    let props = PropertyMap::new();
    assert_eq!(props.value(&["border-color", "background-color"]), None);
}

#[test]
fn test_property_lookup_presence_shadows_later_candidates() {
    // A present but non-color value wins the chain; later candidates are
    // not consulted.
    let mut props = PropertyMap::new();
    props.insert("background-color", Value::Keyword("inherit".to_string()));
    props.insert("background", Value::Color(ColorValue::BLACK));

    let value = props.value(&["background-color", "background"]).unwrap();
    assert_eq!(value, Value::Keyword("inherit".to_string()));
}

#[test]
fn test_property_insert_overwrites() {
    // Unlike attribute maps, the cascade has already decided the winner;
    // later writes replace earlier ones.
    let mut props = PropertyMap::new();
    props.insert("color", Value::Color(ColorValue::WHITE));
    props.insert("color", Value::Color(ColorValue::BLACK));
    assert_eq!(props.get("color"), Some(&Value::Color(ColorValue::BLACK)));
}
