use super::*;

#[test]
fn measures_cells_per_char_and_line() {
    assert_eq!(
        measure("OK", 1),
        TextExtent {
            width: 16,
            height: 8
        }
    );
    assert_eq!(
        measure("abc\nd", 2),
        TextExtent {
            width: 48,
            height: 36
        }
    );
    assert_eq!(measure("", 1), TextExtent::default());
}

#[test]
fn covers_portuguese_accents_and_bullets() {
    for c in ['ã', 'ç', 'é', 'ú', '•', 'A', '0'] {
        assert!(glyph(c).is_some(), "missing glyph for {c:?}");
    }
    assert!(glyph(' ').is_some());
}
