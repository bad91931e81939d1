use super::*;

#[test]
fn light_palette_matches_catalog_colors() {
    let p = Theme::Light.palette();
    assert_eq!(p.accent, Color::parse("#2c7be5").unwrap());
    assert_eq!(p.accent_dark, Color::parse("#1a5cb0").unwrap());
    assert_eq!(p.secondary_bg, Color::parse("#e9ecef").unwrap());
    assert_eq!(p.text, Color::parse("#333333").unwrap());
}

#[test]
fn dark_palette_inverts_text() {
    let p = Theme::Dark.palette();
    assert_eq!(p.text, Color::WHITE);
    assert_eq!(p.secondary_bg, Color::parse("#2c3e50").unwrap());
    assert_ne!(Theme::Dark.default_background(), Theme::Light.default_background());
}

#[test]
fn parses_from_str_and_serde() {
    assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
    assert!("sepia".parse::<Theme>().is_err());
    let t: Theme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(t, Theme::Light);
}
