use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_without_environment() {
    let cfg = StudioConfig::from_lookup(lookup(&[]));
    assert_eq!(cfg, StudioConfig::default());
    assert_eq!(cfg.out_dir, PathBuf::from("mockups"));
    assert!(cfg.font_config().preferred.is_none());
}

#[test]
fn environment_overrides_defaults() {
    let cfg = StudioConfig::from_lookup(lookup(&[
        (ENV_OUT_DIR, "/tmp/out"),
        (ENV_FONT, "/fonts/a.ttf"),
        (ENV_THEME, "Dark"),
    ]));
    assert_eq!(cfg.out_dir, PathBuf::from("/tmp/out"));
    assert_eq!(cfg.font_path, Some(PathBuf::from("/fonts/a.ttf")));
    assert_eq!(cfg.theme, Theme::Dark);
    assert_eq!(
        cfg.font_config().candidates()[0],
        PathBuf::from("/fonts/a.ttf")
    );
}

#[test]
fn bad_or_empty_values_are_ignored() {
    let cfg = StudioConfig::from_lookup(lookup(&[
        (ENV_OUT_DIR, "  "),
        (ENV_THEME, "sepia"),
    ]));
    assert_eq!(cfg, StudioConfig::default());
}

#[test]
fn explicit_flags_win_over_environment() {
    let cfg = StudioConfig::from_lookup(lookup(&[(ENV_OUT_DIR, "env_dir")]))
        .with_out_dir(Some(PathBuf::from("flag_dir")))
        .with_font(None)
        .with_theme(Some(Theme::Dark));
    assert_eq!(cfg.out_dir, PathBuf::from("flag_dir"));
    assert_eq!(cfg.font_path, None);
    assert_eq!(cfg.theme, Theme::Dark);
}
