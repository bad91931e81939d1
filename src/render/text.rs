use std::borrow::Cow;

use crate::{
    foundation::{color::Color, core::PixelPoint},
    render::{
        bitmap_font,
        font::{FontSet, ScalableFont, TextSize},
    },
};

/// Measured layout box of a text run, in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct TextBrush {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl From<Color> for TextBrush {
    fn from(c: Color) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

struct ScalableEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    family: String,
    font: vello_cpu::peniko::FontData,
}

impl ScalableEngine {
    fn new(source: &ScalableFont) -> Self {
        let mut font_ctx = parley::FontContext::default();
        let bytes = source.shared_bytes();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::new(bytes.clone()), None);
        // Same bytes were accepted by `ScalableFont::from_bytes`, so the
        // registered family name matches.
        let family = families
            .first()
            .and_then(|(id, _)| font_ctx.collection.family_name(*id).map(str::to_string))
            .unwrap_or_else(|| source.family().to_string());
        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::new(bytes), 0);
        Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
            font,
        }
    }

    fn layout(&mut self, text: &str, size: TextSize, color: Color) -> parley::Layout<TextBrush> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size.px()));
        builder.push_default(parley::style::StyleProperty::Brush(TextBrush::from(color)));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

/// Per-render text measurement and drawing over a [`FontSet`].
///
/// Holds the layout contexts for one render call only, so compositing keeps
/// no state between calls.
pub(crate) struct TextPainter {
    scalable: Option<ScalableEngine>,
}

impl TextPainter {
    pub(crate) fn new(fonts: &FontSet) -> Self {
        Self {
            scalable: fonts.scalable_font().map(ScalableEngine::new),
        }
    }

    pub(crate) fn measure(&mut self, text: &str, size: TextSize) -> TextExtent {
        if text.is_empty() {
            return TextExtent::default();
        }
        match &mut self.scalable {
            Some(engine) => {
                let layout = engine.layout(text, size, Color::BLACK);
                TextExtent {
                    width: layout.width().max(0.0).ceil() as u32,
                    height: layout.height().max(0.0).ceil() as u32,
                }
            }
            None => bitmap_font::measure(text, size.bitmap_scale()),
        }
    }

    pub(crate) fn draw(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        origin: PixelPoint,
        text: &str,
        size: TextSize,
        color: Color,
    ) {
        if text.is_empty() {
            return;
        }
        let Some(engine) = &mut self.scalable else {
            bitmap_font::draw(ctx, origin, text, size.bitmap_scale(), color);
            return;
        };

        let layout = engine.layout(text, size, color);
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            origin.x as f64,
            origin.y as f64,
        )));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&engine.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
