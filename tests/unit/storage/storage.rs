use super::*;
use crate::{
    render::font::FontSet,
    scene::{dsl::SceneBuilder, model::CanvasSpec, model::Scene},
};

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "diagmock_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn tiny_scene(title: &str) -> Scene {
    SceneBuilder::new(title)
        .canvas(CanvasSpec::new(32, 80))
        .rect(2, 62, 10, 10)
        .build()
        .unwrap()
}

#[test]
fn rejects_names_that_escape_the_directory() {
    let store = MockupStore::new("unused");
    assert!(store.path_of("../x.png").is_err());
    assert!(store.path_of("a\\b.png").is_err());
    assert!(store.path_of("").is_err());
    assert!(store.path_of("..").is_err());
    assert_eq!(
        store.path_of("login.png").unwrap(),
        Path::new("unused").join("login.png")
    );
    assert!(!store.exists("../x.png"));
}

#[test]
fn save_creates_directory_and_png() {
    let dir = temp_dir("store_save");
    let store = MockupStore::new(dir.join("nested"));
    let bmp = Compositor::new(FontSet::bitmap())
        .render_scene(&tiny_scene("s"))
        .unwrap();

    let path = store.save(&bmp, "s.png").unwrap();
    assert!(store.exists("s.png"));
    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (32, 80));
}

#[test]
fn generates_only_missing_files_unless_forced() {
    let dir = temp_dir("store_missing");
    let store = MockupStore::new(&dir);
    let compositor = Compositor::new(FontSet::bitmap());
    let a = tiny_scene("a");
    let b = tiny_scene("b");
    let mockups = [
        Mockup {
            file_name: "a.png",
            scene: &a,
        },
        Mockup {
            file_name: "b.png",
            scene: &b,
        },
    ];

    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("a.png"), b"placeholder").unwrap();
    assert_eq!(store.missing(&mockups), vec!["b.png"]);

    let report = store.ensure_generated(&mockups, &compositor, false).unwrap();
    assert_eq!(report.written, vec!["b.png".to_string()]);
    assert_eq!(report.skipped, vec!["a.png".to_string()]);
    assert_eq!(std::fs::read(dir.join("a.png")).unwrap(), b"placeholder");

    let again = store.ensure_generated(&mockups, &compositor, false).unwrap();
    assert!(again.is_noop());
    assert_eq!(again.skipped.len(), 2);

    let forced = store.ensure_generated(&mockups, &compositor, true).unwrap();
    assert_eq!(forced.written.len(), 2);
    assert!(image::open(dir.join("a.png")).is_ok());
}
