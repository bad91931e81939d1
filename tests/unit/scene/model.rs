use super::*;

const LOGIN_JSON: &str = r##"
{
  "canvas": { "width": 670, "height": 850 },
  "title": "Login",
  "elements": [
    { "type": "text", "position": [100, 200], "content": "User:" },
    { "type": "input", "position": [100, 230], "width": 300, "placeholder": "..." },
    { "type": "hologram", "position": [5, 5], "intensity": 9 },
    { "type": "menu", "position": [0, 300], "items": ["A", "B"] }
  ]
}
"##;

#[test]
fn parses_tagged_elements_in_order() {
    let scene = Scene::from_json_str(LOGIN_JSON).unwrap();
    assert_eq!(scene.title, "Login");
    let kinds: Vec<_> = scene.elements.iter().map(Element::kind).collect();
    assert_eq!(kinds, ["text", "input", "unknown", "menu"]);
    assert_eq!(scene.canvas.theme, Theme::Light);
    assert_eq!(scene.canvas.background(), Theme::Light.default_background());
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let scene = Scene::from_json_str(
        r#"{ "canvas": { "width": 10, "height": 10 }, "title": "t",
             "elements": [ { "type": "text" }, { "type": "button" } ] }"#,
    )
    .unwrap();
    let Element::Text(t) = &scene.elements[0] else {
        panic!("expected text");
    };
    assert_eq!(t.content, "");
    assert_eq!(t.position, Position::new(0, 0));

    let Element::Button(b) = &scene.elements[1] else {
        panic!("expected button");
    };
    assert_eq!(b.label(), "Button");
    assert_eq!(b.bounds().width, 120);
    assert_eq!(b.bounds().height, 40);
}

#[test]
fn invalid_color_fails_at_load_time() {
    let err = Scene::from_json_str(
        r#"{ "canvas": { "width": 10, "height": 10 }, "title": "t",
             "elements": [ { "type": "text", "color": "plaid" } ] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, DiagmockError::Serde(_)));
}

#[test]
fn canvas_validation_rejects_zero_and_oversized_edges() {
    assert!(CanvasSpec::new(670, 850).validate().is_ok());
    assert!(matches!(
        CanvasSpec::new(0, 850).validate(),
        Err(DiagmockError::InvalidCanvas { width: 0, .. })
    ));
    assert!(CanvasSpec::new(670, 0).validate().is_err());
    assert!(CanvasSpec::new(70_000, 10).validate().is_err());
}

#[test]
fn menu_rows_stack_by_item_height() {
    let menu = MenuElement {
        position: Position::new(10, 100),
        items: vec!["a".into(), "b".into(), "c".into()],
        ..MenuElement::default()
    };
    assert_eq!(menu.row(0).y, 100);
    assert_eq!(menu.row(2).y, 180);
    assert_eq!(menu.row(2).width, 200);
}

#[test]
fn json_roundtrip_keeps_explicit_fields() {
    let scene = Scene::from_json_str(LOGIN_JSON).unwrap();
    let s = scene.to_json_pretty().unwrap();
    let de = Scene::from_json_str(&s).unwrap();
    assert_eq!(de.elements.len(), scene.elements.len());
    assert_eq!(de.elements[1], scene.elements[1]);
}
