use super::*;
use crate::scene::theme::Theme;

#[test]
fn builder_preserves_insertion_order() {
    let scene = SceneBuilder::new("Order")
        .rect(0, 0, 10, 10)
        .text(1, 1, "a", Color::BLACK)
        .button(2, 2, 50, "Go")
        .menu(3, 3, ["x", "y"])
        .build()
        .unwrap();
    let kinds: Vec<_> = scene.elements.iter().map(Element::kind).collect();
    assert_eq!(kinds, ["rectangle", "text", "button", "menu"]);
    assert_eq!(scene.canvas, CanvasSpec::catalog_default());
}

#[test]
fn builder_rejects_invalid_canvas() {
    let res = SceneBuilder::new("bad")
        .canvas(CanvasSpec::new(0, 0).with_theme(Theme::Dark))
        .build();
    assert!(res.is_err());
}

#[test]
fn input_helper_leaves_height_default() {
    let scene = SceneBuilder::new("i")
        .input(100, 230, 300, "...")
        .build()
        .unwrap();
    let Element::Input(input) = &scene.elements[0] else {
        panic!("expected input");
    };
    let b = input.bounds();
    assert_eq!((b.x, b.y, b.width, b.height), (100, 230, 300, 40));
}
