use std::{io::Cursor, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::{
        color::Color,
        error::{DiagmockError, DiagmockResult},
    },
    render::font::sha256_hex,
};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Rendered scene: straight-alpha RGBA8, row-major, no padding.
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Bitmap {
    pub(crate) fn from_premul_pixmap(pixmap: &vello_cpu::Pixmap) -> Self {
        let mut data = pixmap.data_as_u8_slice().to_vec();
        for px in data.chunks_exact_mut(4) {
            unpremul_in_place(px);
        }
        Self {
            width: u32::from(pixmap.width()),
            height: u32::from(pixmap.height()),
            data,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let p = &self.data[i..i + 4];
        Some(Color::rgba(p[0], p[1], p[2], p[3]))
    }

    pub fn to_image(&self) -> DiagmockResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            DiagmockError::Other(anyhow::anyhow!(
                "bitmap buffer of {} bytes does not match {}x{}",
                self.data.len(),
                self.width,
                self.height
            ))
        })
    }

    pub fn encode_png(&self) -> DiagmockResult<Vec<u8>> {
        let img = self.to_image()?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .context("encode png")?;
        Ok(out.into_inner())
    }

    pub fn save_png(&self, path: &Path) -> DiagmockResult<()> {
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }

    /// SHA-256 over the raw pixel buffer.
    pub fn digest_hex(&self) -> String {
        sha256_hex(&self.data)
    }
}

fn unpremul_in_place(px: &mut [u8]) {
    let a = px[3];
    if a == 0 || a == 255 {
        return;
    }
    let a16 = u16::from(a);
    for c in &mut px[..3] {
        *c = ((u16::from(*c) * 255 + a16 / 2) / a16).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/bitmap.rs"]
mod tests;
