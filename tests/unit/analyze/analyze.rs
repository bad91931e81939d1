use std::io::Cursor;

use super::*;

fn png(img: image::DynamicImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn reports_size_and_mode_of_rgb_png() {
    let bytes = png(image::DynamicImage::ImageRgb8(image::RgbImage::new(7, 3)));
    let report = analyze_bytes(&bytes, ImageKind::Label).unwrap();
    assert_eq!((report.width, report.height), (7, 3));
    assert_eq!(report.color_mode, "RGB");
    assert_eq!(report.kind, ImageKind::Label);
}

#[test]
fn maps_grayscale_and_alpha_modes() {
    let gray = png(image::DynamicImage::ImageLuma8(image::GrayImage::new(2, 2)));
    assert_eq!(
        analyze_bytes(&gray, ImageKind::default()).unwrap().color_mode,
        "L"
    );
    let rgba = png(image::DynamicImage::ImageRgba8(image::RgbaImage::new(2, 2)));
    assert_eq!(
        analyze_bytes(&rgba, ImageKind::default()).unwrap().color_mode,
        "RGBA"
    );
}

#[test]
fn garbage_is_a_decode_error() {
    let err = analyze_bytes(b"definitely not an image", ImageKind::Component).unwrap_err();
    assert!(matches!(err, DiagmockError::Decode(_)));
}

#[test]
fn summary_is_localized() {
    let report = ImageReport {
        width: 640,
        height: 480,
        color_mode: "RGB".to_string(),
        kind: ImageKind::EcuModule,
    };
    let en = report.summary(Language::English);
    assert_eq!(en.len(), 4);
    assert_eq!(en[1], "Detected resolution: 640x480");
    assert_eq!(en[2], "Color mode: RGB");
    assert!(en[3].contains("placeholder"));

    let pt = report.summary(Language::Portuguese);
    assert_eq!(pt[1], "Resolucao detectada: 640x480");
    assert_eq!(report.caption(Language::Portuguese), "Imagem recebida (Modulo ECU)");
}

#[test]
fn kind_parses_and_defaults_to_component() {
    assert_eq!(ImageKind::default(), ImageKind::Component);
    assert_eq!("ECU-module".parse::<ImageKind>().unwrap(), ImageKind::EcuModule);
    assert_eq!("schematic".parse::<ImageKind>().unwrap(), ImageKind::Schematic);
    assert!("photo".parse::<ImageKind>().is_err());
    for k in ImageKind::ALL {
        assert_eq!(k.as_str().parse::<ImageKind>().unwrap(), k);
    }
}
