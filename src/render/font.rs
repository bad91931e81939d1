use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use sha2::Digest as _;

use crate::foundation::error::{DiagmockError, DiagmockResult};

/// Where the preferred scalable font is looked for, in order, after any
/// explicitly configured path.
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Family name reported when the built-in bitmap face is in use.
pub const BUILTIN_FAMILY: &str = "builtin-8x8";

/// The three fixed text roles every scene draws with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextSize {
    Title,
    Normal,
    Small,
}

impl TextSize {
    pub fn px(self) -> f32 {
        match self {
            Self::Title => 24.0,
            Self::Normal => 16.0,
            Self::Small => 12.0,
        }
    }

    /// Integer magnification applied to 8x8 glyph cells by the fallback face.
    pub fn bitmap_scale(self) -> u32 {
        match self {
            Self::Title => 2,
            Self::Normal | Self::Small => 1,
        }
    }
}

#[derive(Clone, Debug, Default)]
/// Font lookup settings.
pub struct FontConfig {
    /// Tried before [`SYSTEM_FONT_CANDIDATES`].
    pub preferred: Option<PathBuf>,
    /// When false, only `preferred` is tried.
    pub search_system: bool,
}

impl FontConfig {
    pub fn system() -> Self {
        Self {
            preferred: None,
            search_system: true,
        }
    }

    pub fn with_preferred(mut self, path: impl Into<PathBuf>) -> Self {
        self.preferred = Some(path.into());
        self
    }

    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut out: Vec<PathBuf> = self.preferred.iter().cloned().collect();
        if self.search_system {
            out.extend(SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from));
        }
        out
    }
}

#[derive(Clone)]
/// A validated scalable font: raw bytes plus the family name the text
/// layout engine registered them under.
pub struct ScalableFont {
    bytes: Arc<Vec<u8>>,
    family: String,
    source: Option<PathBuf>,
}

impl std::fmt::Debug for ScalableFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalableFont")
            .field("family", &self.family)
            .field("bytes_len", &self.bytes.len())
            .field("source", &self.source)
            .finish()
    }
}

impl ScalableFont {
    pub fn from_bytes(bytes: Vec<u8>) -> DiagmockResult<Self> {
        if bytes.is_empty() {
            return Err(DiagmockError::font("font data is empty"));
        }
        let bytes = Arc::new(bytes);
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::new(bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| DiagmockError::font("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| DiagmockError::font("registered font family has no name"))?
            .to_string();

        Ok(Self {
            bytes,
            family,
            source: None,
        })
    }

    pub fn from_path(path: &Path) -> DiagmockResult<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| DiagmockError::font(format!("read '{}': {e}", path.display())))?;
        let mut font = Self::from_bytes(bytes)
            .map_err(|e| DiagmockError::font(format!("'{}': {e}", path.display())))?;
        font.source = Some(path.to_path_buf());
        Ok(font)
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn shared_bytes(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.bytes)
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

#[derive(Clone, Debug)]
enum Face {
    Scalable(ScalableFont),
    Bitmap,
}

#[derive(Clone, Debug)]
/// The resolved face used for all three [`TextSize`] roles.
pub struct FontSet {
    face: Face,
}

impl FontSet {
    /// Try each configured candidate in order; the first font that loads
    /// wins. Never fails: exhausting the list yields the bitmap face.
    #[tracing::instrument(skip(config))]
    pub fn resolve(config: &FontConfig) -> Self {
        for path in config.candidates() {
            match ScalableFont::from_path(&path) {
                Ok(font) => {
                    tracing::debug!(family = font.family(), path = %path.display(), "loaded scalable font");
                    return Self::scalable(font);
                }
                Err(err) => tracing::trace!(%err, "font candidate rejected"),
            }
        }
        tracing::warn!("no scalable font available; using built-in bitmap font");
        Self::bitmap()
    }

    pub fn scalable(font: ScalableFont) -> Self {
        Self {
            face: Face::Scalable(font),
        }
    }

    pub fn bitmap() -> Self {
        Self { face: Face::Bitmap }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.face, Face::Bitmap)
    }

    pub fn scalable_font(&self) -> Option<&ScalableFont> {
        match &self.face {
            Face::Scalable(f) => Some(f),
            Face::Bitmap => None,
        }
    }

    pub fn family_name(&self) -> &str {
        match &self.face {
            Face::Scalable(f) => f.family(),
            Face::Bitmap => BUILTIN_FAMILY,
        }
    }

    /// SHA-256 of the scalable font bytes; `None` for the bitmap face.
    pub fn sha256_hex(&self) -> Option<String> {
        self.scalable_font().map(|f| sha256_hex(f.bytes()))
    }
}

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{b:02x}"));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/font.rs"]
mod tests;
