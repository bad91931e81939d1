use super::*;

fn solid(w: u32, h: u32, c: Color) -> Bitmap {
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for _ in 0..w * h {
        data.extend_from_slice(&[c.r, c.g, c.b, c.a]);
    }
    Bitmap {
        width: w,
        height: h,
        data,
    }
}

#[test]
fn pixel_lookup_is_bounds_checked() {
    let bmp = solid(3, 2, Color::rgb(1, 2, 3));
    assert_eq!(bmp.pixel(2, 1), Some(Color::rgb(1, 2, 3)));
    assert_eq!(bmp.pixel(3, 0), None);
    assert_eq!(bmp.pixel(0, 2), None);
}

#[test]
fn png_encoding_decodes_back_to_same_pixels() {
    let bmp = solid(4, 4, Color::rgb(0x2c, 0x7b, 0xe5));
    let png = bmp.encode_png().unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    let back = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (4, 4));
    assert_eq!(back.into_raw(), bmp.data);
}

#[test]
fn unpremultiply_restores_straight_channels() {
    let mut px = [64u8, 32, 0, 128];
    unpremul_in_place(&mut px);
    assert_eq!(px, [128, 64, 0, 128]);

    let mut opaque = [10u8, 20, 30, 255];
    unpremul_in_place(&mut opaque);
    assert_eq!(opaque, [10, 20, 30, 255]);
}

#[test]
fn mismatched_buffer_is_an_error() {
    let bmp = Bitmap {
        width: 10,
        height: 10,
        data: vec![0; 12],
    };
    assert!(bmp.to_image().is_err());
    assert!(bmp.encode_png().is_err());
}
