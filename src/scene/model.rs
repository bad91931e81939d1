use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::{
        color::Color,
        core::{PixelBox, Position},
        error::{DiagmockError, DiagmockResult},
    },
    scene::theme::Theme,
};

/// Width shared by every scene in the default catalog.
pub const DEFAULT_CANVAS_WIDTH: u32 = 670;
/// Height shared by every scene in the default catalog.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 850;

/// Largest edge the raster backend can address.
pub const MAX_CANVAS_EDGE: u32 = u16::MAX as u32;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Canvas size plus background and theme.
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub theme: Theme,
    /// `None` means the theme's default background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
}

impl CanvasSpec {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            theme: Theme::Light,
            background: None,
        }
    }

    /// The 670x850 light canvas every catalog scene uses.
    pub fn catalog_default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    pub fn background(&self) -> Color {
        self.background
            .unwrap_or_else(|| self.theme.default_background())
    }

    pub fn validate(&self) -> DiagmockResult<()> {
        if self.width == 0 {
            return Err(DiagmockError::invalid_canvas(
                self.width,
                self.height,
                "width must be > 0",
            ));
        }
        if self.height == 0 {
            return Err(DiagmockError::invalid_canvas(
                self.width,
                self.height,
                "height must be > 0",
            ));
        }
        if self.width > MAX_CANVAS_EDGE || self.height > MAX_CANVAS_EDGE {
            return Err(DiagmockError::invalid_canvas(
                self.width,
                self.height,
                "edges must be <= 65535",
            ));
        }
        Ok(())
    }
}

/// One paintable UI primitive. Paint order is list order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Text(TextElement),
    Rectangle(RectElement),
    Button(ButtonElement),
    Input(InputElement),
    ImagePlaceholder(ImagePlaceholderElement),
    Card(CardElement),
    Menu(MenuElement),
    /// Any descriptor whose `type` is not recognized. Painting it is a no-op.
    #[serde(other)]
    Unknown,
}

impl Element {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Rectangle(_) => "rectangle",
            Self::Button(_) => "button",
            Self::Input(_) => "input",
            Self::ImagePlaceholder(_) => "image_placeholder",
            Self::Card(_) => "card",
            Self::Menu(_) => "menu",
            Self::Unknown => "unknown",
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Text(e) => Some(e.position),
            Self::Rectangle(e) => Some(e.position),
            Self::Button(e) => Some(e.position),
            Self::Input(e) => Some(e.position),
            Self::ImagePlaceholder(e) => Some(e.position),
            Self::Card(e) => Some(e.position),
            Self::Menu(e) => Some(e.position),
            Self::Unknown => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextElement {
    pub position: Position,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RectElement {
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<Color>,
}

impl RectElement {
    pub const DEFAULT_WIDTH: u32 = 100;
    pub const DEFAULT_HEIGHT: u32 = 40;

    pub fn bounds(&self) -> PixelBox {
        PixelBox::at(
            self.position,
            self.width.unwrap_or(Self::DEFAULT_WIDTH),
            self.height.unwrap_or(Self::DEFAULT_HEIGHT),
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ButtonElement {
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ButtonElement {
    pub const DEFAULT_WIDTH: u32 = 120;
    pub const DEFAULT_HEIGHT: u32 = 40;
    pub const DEFAULT_LABEL: &'static str = "Button";

    pub fn bounds(&self) -> PixelBox {
        PixelBox::at(
            self.position,
            self.width.unwrap_or(Self::DEFAULT_WIDTH),
            self.height.unwrap_or(Self::DEFAULT_HEIGHT),
        )
    }

    pub fn label(&self) -> &str {
        self.text.as_deref().unwrap_or(Self::DEFAULT_LABEL)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InputElement {
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub placeholder: String,
}

impl InputElement {
    pub const DEFAULT_WIDTH: u32 = 200;
    pub const DEFAULT_HEIGHT: u32 = 40;

    pub fn bounds(&self) -> PixelBox {
        PixelBox::at(
            self.position,
            self.width.unwrap_or(Self::DEFAULT_WIDTH),
            self.height.unwrap_or(Self::DEFAULT_HEIGHT),
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ImagePlaceholderElement {
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl ImagePlaceholderElement {
    pub const DEFAULT_WIDTH: u32 = 150;
    pub const DEFAULT_HEIGHT: u32 = 150;

    pub fn bounds(&self) -> PixelBox {
        PixelBox::at(
            self.position,
            self.width.unwrap_or(Self::DEFAULT_WIDTH),
            self.height.unwrap_or(Self::DEFAULT_HEIGHT),
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CardElement {
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub title: String,
    pub content: String,
}

impl CardElement {
    pub const DEFAULT_WIDTH: u32 = 300;
    pub const DEFAULT_HEIGHT: u32 = 200;

    pub fn bounds(&self) -> PixelBox {
        PixelBox::at(
            self.position,
            self.width.unwrap_or(Self::DEFAULT_WIDTH),
            self.height.unwrap_or(Self::DEFAULT_HEIGHT),
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MenuElement {
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_height: Option<u32>,
    pub items: Vec<String>,
}

impl MenuElement {
    pub const DEFAULT_WIDTH: u32 = 200;
    pub const DEFAULT_ITEM_HEIGHT: u32 = 40;

    /// Row box for item `index`; rows stack downward from `position`.
    pub fn row(&self, index: usize) -> PixelBox {
        let item_h = self.item_height.unwrap_or(Self::DEFAULT_ITEM_HEIGHT);
        let mut b = PixelBox::at(
            self.position,
            self.width.unwrap_or(Self::DEFAULT_WIDTH),
            item_h,
        );
        b.y += (index as i64) * i64::from(item_h);
        b
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A titled, ordered element list destined for one bitmap.
pub struct Scene {
    pub canvas: CanvasSpec,
    pub title: String,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Scene {
    pub fn from_json_str(s: &str) -> DiagmockResult<Self> {
        serde_json::from_str(s).map_err(|e| DiagmockError::serde(e.to_string()))
    }

    pub fn from_path(path: &Path) -> DiagmockResult<Self> {
        let f = File::open(path)?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| DiagmockError::serde(format!("{}: {e}", path.display())))
    }

    pub fn to_json_pretty(&self) -> DiagmockResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| DiagmockError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
