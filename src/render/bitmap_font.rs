//! Built-in 8x8 face used when no scalable font can be loaded.

use font8x8::UnicodeFonts as _;

use crate::{
    foundation::{color::Color, core::PixelPoint},
    render::text::TextExtent,
};

const CELL: u32 = 8;
const LINE_GAP: u32 = 2;

fn glyph(c: char) -> Option<[u8; 8]> {
    let c = match c {
        '\u{2022}' => '\u{00b7}',
        '\u{2013}' | '\u{2014}' => '-',
        other => other,
    };
    font8x8::BASIC_FONTS
        .get(c)
        .or_else(|| font8x8::LATIN_FONTS.get(c))
        .or_else(|| font8x8::GREEK_FONTS.get(c))
        .or_else(|| font8x8::MISC_FONTS.get(c))
}

pub(crate) fn measure(text: &str, scale: u32) -> TextExtent {
    if text.is_empty() {
        return TextExtent::default();
    }
    let lines: Vec<&str> = text.split('\n').collect();
    let cols = lines
        .iter()
        .map(|l| l.chars().count() as u32)
        .max()
        .unwrap_or(0);
    let rows = lines.len() as u32;
    TextExtent {
        width: cols * CELL * scale,
        height: rows * CELL * scale + rows.saturating_sub(1) * LINE_GAP * scale,
    }
}

pub(crate) fn draw(
    ctx: &mut vello_cpu::RenderContext,
    origin: PixelPoint,
    text: &str,
    scale: u32,
    color: Color,
) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color.to_cpu());

    let s = f64::from(scale);
    let line_advance = i64::from((CELL + LINE_GAP) * scale);
    for (row, line) in text.split('\n').enumerate() {
        let top = origin.y + row as i64 * line_advance;
        for (col, c) in line.chars().enumerate() {
            let Some(bits) = glyph(c) else {
                continue;
            };
            let left = origin.x + (col as i64) * i64::from(CELL * scale);
            for (gy, bits_row) in bits.iter().enumerate() {
                for gx in 0..8u32 {
                    if *bits_row & (1u8 << gx) == 0 {
                        continue;
                    }
                    let x0 = (left + i64::from(gx * scale)) as f64;
                    let y0 = (top + (gy as i64) * i64::from(scale)) as f64;
                    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(x0, y0, x0 + s, y0 + s));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/bitmap_font.rs"]
mod tests;
