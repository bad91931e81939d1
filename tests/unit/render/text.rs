use super::*;

#[test]
fn bitmap_painter_measures_with_scale_per_role() {
    let mut painter = TextPainter::new(&FontSet::bitmap());
    assert_eq!(
        painter.measure("Entrar", TextSize::Normal),
        TextExtent {
            width: 48,
            height: 8
        }
    );
    assert_eq!(
        painter.measure("Entrar", TextSize::Title),
        TextExtent {
            width: 96,
            height: 16
        }
    );
    assert_eq!(
        painter.measure("a\nbb", TextSize::Small),
        TextExtent {
            width: 16,
            height: 18
        }
    );
}

#[test]
fn empty_text_measures_zero() {
    let mut painter = TextPainter::new(&FontSet::bitmap());
    assert_eq!(painter.measure("", TextSize::Title), TextExtent::default());
}

#[test]
fn brush_keeps_all_channels() {
    let b = TextBrush::from(Color::rgba(1, 2, 3, 4));
    assert_eq!((b.r, b.g, b.b, b.a), (1, 2, 3, 4));
}

fn system_font() -> Option<ScalableFont> {
    FontSet::resolve(&crate::render::font::FontConfig::system())
        .scalable_font()
        .cloned()
}

#[test]
fn scalable_engine_shares_font_bytes() {
    let Some(font) = system_font() else {
        return;
    };
    let engine = ScalableEngine::new(&font);
    assert_eq!(engine.family, font.family());
    // `font`, `shared` and the glyph-run blob all point at one buffer.
    let shared = font.shared_bytes();
    assert!(std::sync::Arc::strong_count(&shared) >= 3);
    assert_eq!(engine.font.data.data().as_ptr(), font.bytes().as_ptr());
}

#[test]
fn scalable_painter_measures_nonzero_extent() {
    let Some(font) = system_font() else {
        return;
    };
    let mut painter = TextPainter::new(&FontSet::scalable(font));
    let normal = painter.measure("Entrar", TextSize::Normal);
    let title = painter.measure("Entrar", TextSize::Title);
    assert!(normal.width > 0 && normal.height > 0);
    assert!(title.width > normal.width);
}
