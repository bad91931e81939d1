use crate::{
    foundation::{color::Color, core::Position, error::DiagmockResult},
    scene::model::{
        ButtonElement, CanvasSpec, CardElement, Element, ImagePlaceholderElement, InputElement,
        MenuElement, RectElement, Scene, TextElement,
    },
};

/// Chainable construction of a [`Scene`]; elements keep insertion order.
pub struct SceneBuilder {
    canvas: CanvasSpec,
    title: String,
    elements: Vec<Element>,
}

impl SceneBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            canvas: CanvasSpec::catalog_default(),
            title: title.into(),
            elements: Vec::new(),
        }
    }

    pub fn canvas(mut self, canvas: CanvasSpec) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    pub fn text(self, x: u32, y: u32, content: impl Into<String>, color: Color) -> Self {
        self.element(text(x, y, content, Some(color)))
    }

    pub fn input(self, x: u32, y: u32, width: u32, placeholder: impl Into<String>) -> Self {
        self.element(Element::Input(InputElement {
            position: Position::new(x, y),
            width: Some(width),
            height: None,
            placeholder: placeholder.into(),
        }))
    }

    pub fn button(self, x: u32, y: u32, width: u32, label: impl Into<String>) -> Self {
        self.element(Element::Button(ButtonElement {
            position: Position::new(x, y),
            width: Some(width),
            text: Some(label.into()),
            ..ButtonElement::default()
        }))
    }

    pub fn rect(self, x: u32, y: u32, width: u32, height: u32) -> Self {
        self.element(Element::Rectangle(RectElement {
            position: Position::new(x, y),
            width: Some(width),
            height: Some(height),
            ..RectElement::default()
        }))
    }

    pub fn image(self, x: u32, y: u32, width: u32, height: u32) -> Self {
        self.element(Element::ImagePlaceholder(ImagePlaceholderElement {
            position: Position::new(x, y),
            width: Some(width),
            height: Some(height),
        }))
    }

    pub fn card(
        self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.element(Element::Card(CardElement {
            position: Position::new(x, y),
            width: Some(width),
            height: Some(height),
            title: title.into(),
            content: content.into(),
        }))
    }

    pub fn menu<I, S>(self, x: u32, y: u32, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.element(Element::Menu(MenuElement {
            position: Position::new(x, y),
            items: items.into_iter().map(Into::into).collect(),
            ..MenuElement::default()
        }))
    }

    pub fn build(self) -> DiagmockResult<Scene> {
        self.canvas.validate()?;
        Ok(Scene {
            canvas: self.canvas,
            title: self.title,
            elements: self.elements,
        })
    }
}

pub fn text(x: u32, y: u32, content: impl Into<String>, color: Option<Color>) -> Element {
    Element::Text(TextElement {
        position: Position::new(x, y),
        content: content.into(),
        color,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;
