use super::*;

#[test]
fn position_serializes_as_pair() {
    let p = Position::new(100, 230);
    let s = serde_json::to_string(&p).unwrap();
    assert_eq!(s, "[100,230]");
    let de: Position = serde_json::from_str("[7,9]").unwrap();
    assert_eq!(de, Position::new(7, 9));
}

#[test]
fn negative_position_is_rejected() {
    assert!(serde_json::from_str::<Position>("[-1,0]").is_err());
}

#[test]
fn centered_floors_odd_remainders() {
    let b = PixelBox::at(Position::new(10, 20), 120, 40);
    assert_eq!(b.centered(31, 11), PixelPoint::new(10 + 44, 20 + 14));
}

#[test]
fn centered_handles_content_wider_than_box() {
    let b = PixelBox::at(Position::new(0, 0), 10, 10);
    // (10 - 15) div 2 floors to -3.
    assert_eq!(b.centered(15, 10), PixelPoint::new(-3, 0));
}

#[test]
fn outline_strips_stay_inside_box() {
    let b = PixelBox::at(Position::new(5, 5), 4, 3);
    for strip in b.outline_strips() {
        for y in strip.y..strip.bottom() {
            for x in strip.x..strip.right() {
                assert!(b.contains(x, y), "({x},{y}) escapes {b:?}");
            }
        }
    }
    let [top, bottom, left, right] = b.outline_strips();
    assert_eq!(top.y, 5);
    assert_eq!(bottom.y, 7);
    assert_eq!(left.x, 5);
    assert_eq!(right.x, 8);
    assert_eq!(left.height, 1);
}

#[test]
fn rect_conversion_is_half_open() {
    let r = PixelBox::at(Position::new(100, 230), 300, 40).to_rect();
    assert_eq!(r, Rect::new(100.0, 230.0, 400.0, 270.0));
}
