use super::*;

#[test]
fn title_is_largest_role() {
    assert!(TextSize::Title.px() > TextSize::Normal.px());
    assert!(TextSize::Normal.px() > TextSize::Small.px());
    assert_eq!(TextSize::Title.bitmap_scale(), 2);
}

#[test]
fn candidates_put_preferred_first() {
    let cfg = FontConfig::system().with_preferred("/opt/fonts/custom.ttf");
    let c = cfg.candidates();
    assert_eq!(c[0], PathBuf::from("/opt/fonts/custom.ttf"));
    assert_eq!(c.len(), SYSTEM_FONT_CANDIDATES.len() + 1);

    let only = FontConfig::default().with_preferred("x.ttf");
    assert_eq!(only.candidates(), vec![PathBuf::from("x.ttf")]);
}

#[test]
fn garbage_bytes_are_rejected() {
    assert!(matches!(
        ScalableFont::from_bytes(Vec::new()),
        Err(DiagmockError::Font(_))
    ));
    assert!(ScalableFont::from_bytes(b"definitely not a font".to_vec()).is_err());
}

#[test]
fn resolve_falls_back_without_failing() {
    let cfg = FontConfig::default().with_preferred("/nonexistent/diagmock/font.ttf");
    let fonts = FontSet::resolve(&cfg);
    assert!(fonts.is_fallback());
    assert_eq!(fonts.family_name(), BUILTIN_FAMILY);
    assert!(fonts.sha256_hex().is_none());
}

#[test]
fn sha256_hex_is_lowercase_hex() {
    let h = sha256_hex(b"abc");
    assert_eq!(
        h,
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn system_font_reports_family_and_digest() {
    let fonts = FontSet::resolve(&FontConfig::system());
    let Some(font) = fonts.scalable_font() else {
        return;
    };
    assert!(!font.family().is_empty());
    assert_eq!(fonts.family_name(), font.family());
    assert!(font.source().is_some());
    let digest = fonts.sha256_hex().unwrap();
    assert_eq!(digest.len(), 64);
    assert_eq!(ScalableFont::from_bytes(font.bytes().to_vec()).unwrap().family(), font.family());
}
