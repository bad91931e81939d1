use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(DiagmockError::color("x").to_string().contains("color error:"));
    assert!(DiagmockError::font("x").to_string().contains("font error:"));
    assert!(
        DiagmockError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        DiagmockError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn invalid_canvas_names_dimensions() {
    let msg = DiagmockError::invalid_canvas(0, 850, "width must be > 0").to_string();
    assert!(msg.contains("0x850"));
    assert!(msg.contains("width must be > 0"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DiagmockError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
