//! diagmock renders static UI mockups for an automotive-diagnostics assistant.
//!
//! The engine is the [`Compositor`]: a canvas, a title and an ordered list of
//! [`Element`]s go in, a straight-alpha RGBA [`Bitmap`] comes out. Around it the
//! crate ships the default bilingual [`Catalog`], a generate-if-missing
//! [`MockupStore`], a static page renderer and a small image analysis demo.
//!
//! - Build a [`Scene`] with [`SceneBuilder`] or load one from JSON
//! - Resolve fonts once with [`FontSet::resolve`]
//! - Render with [`Compositor::render_scene`] and persist with [`MockupStore`]
#![forbid(unsafe_code)]

mod foundation;

/// Image decoding and placeholder analysis.
pub mod analyze;
/// Named default scenes in both languages.
pub mod catalog;
/// Environment-driven settings.
pub mod config;
/// Static bilingual HTML page.
pub mod page;
pub(crate) mod render;
pub(crate) mod scene;
/// PNG persistence for catalog mockups.
pub mod storage;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{PixelBox, PixelPoint, Point, Position, Rect};
pub use crate::foundation::error::{DiagmockError, DiagmockResult};

pub use crate::analyze::{ImageKind, ImageReport, analyze_bytes, analyze_path};
pub use crate::catalog::{Catalog, CatalogEntry, Language, Mockup, Tab};
pub use crate::config::StudioConfig;
pub use crate::page::{render_page, write_site};
pub use crate::render::bitmap::Bitmap;
pub use crate::render::compositor::{Compositor, HEADER_HEIGHT, TITLE_ORIGIN};
pub use crate::render::font::{
    BUILTIN_FAMILY, FontConfig, FontSet, SYSTEM_FONT_CANDIDATES, ScalableFont, TextSize,
};
pub use crate::render::text::TextExtent;
pub use crate::scene::dsl::{SceneBuilder, text};
pub use crate::scene::model::{
    ButtonElement, CanvasSpec, CardElement, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, Element,
    ImagePlaceholderElement, InputElement, MAX_CANVAS_EDGE, MenuElement, RectElement, Scene,
    TextElement,
};
pub use crate::scene::theme::{Palette, Theme};
pub use crate::storage::{GenerateReport, MockupStore};
