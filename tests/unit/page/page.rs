use super::*;

fn catalog() -> Catalog {
    Catalog::builtin().unwrap()
}

#[test]
fn escapes_markup_characters() {
    assert_eq!(
        html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
    assert_eq!(html_escape("plain ç"), "plain ç");
}

#[test]
fn portuguese_page_links_pt_images_and_english_page() {
    let html = render_page(Language::Portuguese, &catalog());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"pt\">"));
    assert!(html.contains("href=\"index_en.html\""));
    assert!(html.contains("<img src=\"login.png\""));
    assert!(html.contains("<img src=\"knowledge.png\""));
    assert!(!html.contains("en_login.png"));
    assert!(html.contains("Tela de Login"));
    assert!(html.contains("Teste Interativo de Upload/Captura"));
}

#[test]
fn english_page_links_previews_and_portuguese_page() {
    let html = render_page(Language::English, &catalog());
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("href=\"index.html\""));
    assert!(html.contains("<img src=\"en_login.png\""));
    assert!(html.contains("Guided Diagnosis Flow"));
    assert!(html.contains("--lang en"));
}

#[test]
fn has_three_radio_tabs_and_nine_sections() {
    let html = render_page(Language::Portuguese, &catalog());
    assert_eq!(html.matches("type=\"radio\"").count(), 3);
    assert_eq!(html.matches(" checked>").count(), 1);
    assert_eq!(html.matches("<img ").count(), 9);
    assert!(html.contains("<h3>3. Visualização de Esquemas Elétricos</h3>"));
}

#[test]
fn interpolated_copy_is_escaped() {
    let html = render_page(Language::English, &catalog());
    assert!(html.contains("Mockups - AI for Automotive Electronics"));
    // Description copy containing a slash stays literal while '&' never appears raw.
    assert!(html.contains("make/model/year/engine"));
    assert!(!html.contains(" & "));
}

#[test]
fn write_site_emits_both_pages() {
    let dir = std::env::temp_dir().join(format!(
        "diagmock_page_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let written = write_site(&dir, &catalog()).unwrap();
    assert_eq!(written, vec![dir.join("index.html"), dir.join("index_en.html")]);
    let pt = std::fs::read_to_string(&written[0]).unwrap();
    assert!(pt.contains("index_en.html"));
}
