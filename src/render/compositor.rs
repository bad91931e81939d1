use vello_cpu::kurbo::Shape as _;

use crate::{
    foundation::{
        color::Color,
        core::{PixelBox, PixelPoint, Position},
        error::DiagmockResult,
    },
    render::{
        bitmap::Bitmap,
        font::{FontSet, TextSize},
        text::{TextExtent, TextPainter},
    },
    scene::{
        model::{
            ButtonElement, CanvasSpec, CardElement, Element, ImagePlaceholderElement,
            InputElement, MenuElement, RectElement, Scene, TextElement,
        },
        theme::Palette,
    },
};

/// Height of the accent band painted across the top of every scene.
pub const HEADER_HEIGHT: u32 = 60;
/// Title anchor inside the header band.
pub const TITLE_ORIGIN: Position = Position::new(20, 15);

const INPUT_OUTLINE: Color = Color::rgb(0xcc, 0xcc, 0xcc);
const PLACEHOLDER_TEXT: Color = Color::rgb(0x99, 0x99, 0x99);
const IMAGE_FILL: Color = Color::rgb(0xe0, 0xe0, 0xe0);
const CARD_OUTLINE: Color = Color::rgb(0xdd, 0xdd, 0xdd);

const INPUT_TEXT_INSET: (i64, i64) = (10, 10);
const CARD_TITLE_INSET: (i64, i64) = (15, 15);
const CARD_BODY_INSET: (i64, i64) = (15, 50);
const MENU_TEXT_INSET: (i64, i64) = (15, 10);

/// Turns a canvas spec, a title and an ordered element list into a bitmap.
///
/// Only holds the resolved fonts; every `render` call builds its own
/// raster and text contexts, so calls are independent and repeatable.
#[derive(Clone, Debug)]
pub struct Compositor {
    fonts: FontSet,
}

impl Compositor {
    pub fn new(fonts: FontSet) -> Self {
        Self { fonts }
    }

    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    pub fn render_scene(&self, scene: &Scene) -> DiagmockResult<Bitmap> {
        self.render(&scene.canvas, &scene.title, &scene.elements)
    }

    #[tracing::instrument(skip(self, canvas, elements), fields(width = canvas.width, height = canvas.height, elements = elements.len()))]
    pub fn render(
        &self,
        canvas: &CanvasSpec,
        title: &str,
        elements: &[Element],
    ) -> DiagmockResult<Bitmap> {
        canvas.validate()?;
        // validate() bounds both edges by u16::MAX.
        let w = canvas.width as u16;
        let h = canvas.height as u16;

        let palette = canvas.theme.palette();
        let mut frame = Frame {
            ctx: vello_cpu::RenderContext::new(w, h),
            text: TextPainter::new(&self.fonts),
            palette,
        };

        let full = PixelBox::at(Position::new(0, 0), canvas.width, canvas.height);
        frame.fill(full, canvas.background());

        let header = PixelBox::at(Position::new(0, 0), canvas.width, HEADER_HEIGHT);
        frame.fill(header, palette.accent);
        frame.draw_text(
            TITLE_ORIGIN.into(),
            title,
            TextSize::Title,
            palette.inverse_text,
        );

        for element in elements {
            frame.paint(element);
        }

        frame.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        frame.ctx.render_to_pixmap(&mut pixmap);
        Ok(Bitmap::from_premul_pixmap(&pixmap))
    }

    pub fn measure_text(&self, text: &str, size: TextSize) -> TextExtent {
        TextPainter::new(&self.fonts).measure(text, size)
    }

    /// Where a button's label is drawn: centered in the button box using
    /// the measured label extent.
    pub fn button_label_origin(&self, button: &ButtonElement) -> PixelPoint {
        let extent = self.measure_text(button.label(), TextSize::Normal);
        button.bounds().centered(extent.width, extent.height)
    }
}

struct Frame {
    ctx: vello_cpu::RenderContext,
    text: TextPainter,
    palette: Palette,
}

impl Frame {
    fn paint(&mut self, element: &Element) {
        match element {
            Element::Text(e) => self.paint_text(e),
            Element::Rectangle(e) => self.paint_rect(e),
            Element::Button(e) => self.paint_button(e),
            Element::Input(e) => self.paint_input(e),
            Element::ImagePlaceholder(e) => self.paint_image_placeholder(e),
            Element::Card(e) => self.paint_card(e),
            Element::Menu(e) => self.paint_menu(e),
            // Unrecognized descriptors paint nothing.
            Element::Unknown => tracing::debug!("skipping element of unknown kind"),
        }
    }

    fn paint_text(&mut self, e: &TextElement) {
        let color = e.color.unwrap_or(self.palette.text);
        self.draw_text(e.position.into(), &e.content, TextSize::Normal, color);
    }

    fn paint_rect(&mut self, e: &RectElement) {
        let fill = e.fill.unwrap_or(self.palette.secondary_bg);
        let outline = e.outline.unwrap_or(self.palette.accent);
        self.outlined(e.bounds(), fill, outline);
    }

    fn paint_button(&mut self, e: &ButtonElement) {
        let bounds = e.bounds();
        let fill = e.fill.unwrap_or(self.palette.accent);
        let outline = e.outline.unwrap_or(self.palette.accent_dark);
        self.outlined(bounds, fill, outline);

        let label = e.label();
        let extent = self.text.measure(label, TextSize::Normal);
        let origin = bounds.centered(extent.width, extent.height);
        self.draw_text(origin, label, TextSize::Normal, self.palette.inverse_text);
    }

    fn paint_input(&mut self, e: &InputElement) {
        let bounds = e.bounds();
        self.outlined(bounds, Color::WHITE, INPUT_OUTLINE);
        let (dx, dy) = INPUT_TEXT_INSET;
        self.draw_text(
            bounds.inset(dx, dy),
            &e.placeholder,
            TextSize::Normal,
            PLACEHOLDER_TEXT,
        );
    }

    fn paint_image_placeholder(&mut self, e: &ImagePlaceholderElement) {
        let bounds = e.bounds();
        self.outlined(bounds, IMAGE_FILL, INPUT_OUTLINE);
        self.camera_glyph(bounds);
    }

    fn paint_card(&mut self, e: &CardElement) {
        let bounds = e.bounds();
        self.outlined(bounds, Color::WHITE, CARD_OUTLINE);
        let text = self.palette.text;
        let (tx, ty) = CARD_TITLE_INSET;
        self.draw_text(bounds.inset(tx, ty), &e.title, TextSize::Normal, text);
        let (bx, by) = CARD_BODY_INSET;
        self.draw_text(bounds.inset(bx, by), &e.content, TextSize::Small, text);
    }

    fn paint_menu(&mut self, e: &MenuElement) {
        let (dx, dy) = MENU_TEXT_INSET;
        for (i, item) in e.items.iter().enumerate() {
            let row = e.row(i);
            let bg = if i % 2 == 0 {
                self.palette.secondary_bg
            } else {
                Color::WHITE
            };
            self.fill(row, bg);
            self.draw_text(row.inset(dx, dy), item, TextSize::Normal, self.palette.text);
        }
    }

    /// 28x24 camera: body, viewfinder bump, ring lens.
    fn camera_glyph(&mut self, bounds: PixelBox) {
        const W: u32 = 28;
        const H: u32 = 24;
        let o = bounds.centered(W, H);

        let bump = PixelBox {
            x: o.x + 8,
            y: o.y,
            width: 12,
            height: 4,
        };
        let body = PixelBox {
            x: o.x,
            y: o.y + 4,
            width: W,
            height: H - 4,
        };
        self.fill(bump, PLACEHOLDER_TEXT);
        self.fill(body, PLACEHOLDER_TEXT);

        let center = vello_cpu::kurbo::Point::new(o.x as f64 + 14.0, o.y as f64 + 14.0);
        self.ctx.set_paint(IMAGE_FILL.to_cpu());
        self.ctx
            .fill_path(&vello_cpu::kurbo::Circle::new(center, 7.0).to_path(0.1));
        self.ctx.set_paint(PLACEHOLDER_TEXT.to_cpu());
        self.ctx
            .fill_path(&vello_cpu::kurbo::Circle::new(center, 4.0).to_path(0.1));
    }

    fn outlined(&mut self, bounds: PixelBox, fill: Color, outline: Color) {
        self.fill(bounds, fill);
        for strip in bounds.outline_strips() {
            self.fill(strip, outline);
        }
    }

    fn fill(&mut self, b: PixelBox, color: Color) {
        if b.is_empty() {
            return;
        }
        let r = b.to_rect();
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color.to_cpu());
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1));
    }

    fn draw_text(&mut self, origin: PixelPoint, text: &str, size: TextSize, color: Color) {
        self.text.draw(&mut self.ctx, origin, text, size, color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
