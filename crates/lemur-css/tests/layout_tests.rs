//! Integration tests for box model types and the layout-box tree.

use lemur_css::{
    BoxDimensions, ColorValue, EdgeSizes, LayoutBox, PropertyMap, Rect, Value,
};

fn dims(content: Rect, padding: EdgeSizes, border: EdgeSizes, margin: EdgeSizes) -> BoxDimensions {
    BoxDimensions {
        content,
        padding,
        border,
        margin,
    }
}

#[test]
fn test_content_box_passthrough() {
    let d = BoxDimensions::from_content(Rect::new(10.0, 20.0, 100.0, 50.0));
    assert_eq!(d.content_box(), Rect::new(10.0, 20.0, 100.0, 50.0));
    // No padding/border/margin: every area is the content area.
    assert_eq!(d.padding_box(), d.content_box());
    assert_eq!(d.border_box(), d.content_box());
    assert_eq!(d.margin_box(), d.content_box());
}

#[test]
fn test_padding_box_expands_by_padding() {
    let d = dims(
        Rect::new(10.0, 10.0, 100.0, 40.0),
        EdgeSizes::new(1.0, 2.0, 3.0, 4.0),
        EdgeSizes::default(),
        EdgeSizes::default(),
    );
    assert_eq!(d.padding_box(), Rect::new(6.0, 9.0, 106.0, 44.0));
}

#[test]
fn test_border_box_expands_by_padding_and_border() {
    let d = dims(
        Rect::new(10.0, 10.0, 100.0, 40.0),
        EdgeSizes::uniform(5.0),
        EdgeSizes::new(1.0, 1.0, 1.0, 1.0),
        EdgeSizes::default(),
    );
    assert_eq!(d.border_box(), Rect::new(4.0, 4.0, 112.0, 52.0));
}

#[test]
fn test_margin_box_is_outermost() {
    let d = dims(
        Rect::new(0.0, 0.0, 10.0, 10.0),
        EdgeSizes::uniform(1.0),
        EdgeSizes::uniform(1.0),
        EdgeSizes::uniform(2.0),
    );
    assert_eq!(d.margin_box(), Rect::new(-4.0, -4.0, 18.0, 18.0));
}

#[test]
fn test_negative_content_dimensions_pass_through() {
    // A 1x1 viewport with 1px padding leaves -1 of content; the padding
    // box still comes out right and nothing rejects the geometry.
    let d = dims(
        Rect::new(1.0, 1.0, -1.0, -1.0),
        EdgeSizes::uniform(1.0),
        EdgeSizes::default(),
        EdgeSizes::default(),
    );
    assert_eq!(d.padding_box(), Rect::new(0.0, 0.0, 1.0, 1.0));
}

#[test]
fn test_styled_box_resolves_through_chain() {
    let mut props = PropertyMap::new();
    props.insert("background", Value::Color(ColorValue::BLACK));
    let layout_box = LayoutBox::styled(BoxDimensions::default(), props);

    assert_eq!(
        layout_box.style_value(&["background-color", "background"]),
        Some(Value::Color(ColorValue::BLACK))
    );
    assert_eq!(layout_box.style_value(&["border-color"]), None);
}

#[test]
fn test_anonymous_box_resolves_nothing() {
    let layout_box = LayoutBox::anonymous(BoxDimensions::default());
    assert_eq!(layout_box.style_value(&["background-color", "background"]), None);
}

#[test]
fn test_push_child_preserves_order() {
    let mut parent = LayoutBox::anonymous(BoxDimensions::default());
    parent.push_child(LayoutBox::anonymous(BoxDimensions::from_content(Rect::new(
        0.0, 0.0, 1.0, 1.0,
    ))));
    parent.push_child(LayoutBox::anonymous(BoxDimensions::from_content(Rect::new(
        0.0, 1.0, 1.0, 1.0,
    ))));

    assert_eq!(parent.children.len(), 2);
    assert_eq!(parent.children[0].dimensions.content.y, 0.0);
    assert_eq!(parent.children[1].dimensions.content.y, 1.0);
}
