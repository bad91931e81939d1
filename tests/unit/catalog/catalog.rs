use super::*;
use crate::scene::model::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, Element};

#[test]
fn builtin_has_nine_entries_in_file_order() {
    let catalog = Catalog::builtin().unwrap();
    let names: Vec<&str> = catalog.entries().iter().map(|e| e.name).collect();
    assert_eq!(names, MOCKUP_NAMES);
}

#[test]
fn file_names_follow_language_prefix() {
    let catalog = Catalog::builtin().unwrap();
    let login = catalog.get("login").unwrap();
    assert_eq!(login.file_name(Language::Portuguese), "login.png");
    assert_eq!(login.file_name(Language::English), "en_login.png");

    let en: Vec<&str> = catalog
        .mockups(Language::English)
        .iter()
        .map(|m| m.file_name)
        .collect();
    assert_eq!(en[0], "en_login.png");
    assert_eq!(en[8], "en_knowledge.png");
    assert_eq!(catalog.all_mockups().len(), 18);
}

#[test]
fn every_scene_uses_the_catalog_canvas() {
    let catalog = Catalog::builtin().unwrap();
    for m in catalog.all_mockups() {
        assert_eq!(m.scene.canvas.width, DEFAULT_CANVAS_WIDTH, "{}", m.file_name);
        assert_eq!(m.scene.canvas.height, DEFAULT_CANVAS_HEIGHT, "{}", m.file_name);
        assert!(!m.scene.title.is_empty());
    }
}

#[test]
fn tabs_group_four_three_two() {
    let catalog = Catalog::builtin().unwrap();
    let counts: Vec<usize> = Tab::ALL.iter().map(|t| catalog.in_tab(*t).count()).collect();
    assert_eq!(counts, [4, 3, 2]);
}

#[test]
fn login_places_user_label_and_input() {
    let catalog = Catalog::builtin().unwrap();
    let scene = catalog.get("login").unwrap().scene(Language::Portuguese);
    let Element::Text(label) = &scene.elements[2] else {
        panic!("expected text");
    };
    assert_eq!(label.content, "Usuário:");
    assert_eq!((label.position.x, label.position.y), (185, 200));

    let Element::Input(input) = &scene.elements[3] else {
        panic!("expected input");
    };
    assert_eq!((input.position.x, input.position.y), (185, 230));
    assert_eq!(input.width, Some(300));
}

#[test]
fn english_preview_has_subtitle_frame_and_caption() {
    let catalog = Catalog::builtin().unwrap();
    let scene = catalog.get("dashboard").unwrap().scene(Language::English);
    assert_eq!(scene.title, "Main Dashboard");
    assert_eq!(scene.elements.len(), 3);
    let Element::Rectangle(frame) = &scene.elements[1] else {
        panic!("expected rectangle");
    };
    assert_eq!((frame.width, frame.height), (Some(630), Some(620)));
    let Element::Text(caption) = &scene.elements[2] else {
        panic!("expected text");
    };
    assert_eq!(caption.content, "English preview mockup");
}

#[test]
fn with_theme_retargets_all_canvases() {
    let catalog = Catalog::builtin().unwrap().with_theme(Theme::Dark);
    assert!(
        catalog
            .all_mockups()
            .iter()
            .all(|m| m.scene.canvas.theme == Theme::Dark)
    );
}

#[test]
fn language_parses_codes_and_names() {
    assert_eq!("pt".parse::<Language>().unwrap(), Language::Portuguese);
    assert_eq!("English".parse::<Language>().unwrap(), Language::English);
    assert!("fr".parse::<Language>().is_err());
    assert_eq!(Language::English.other(), Language::Portuguese);
}
