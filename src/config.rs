use std::path::PathBuf;

use crate::{
    render::{
        compositor::Compositor,
        font::{FontConfig, FontSet},
    },
    scene::theme::Theme,
    storage::DEFAULT_OUT_DIR,
};

pub const ENV_OUT_DIR: &str = "DIAGMOCK_OUT_DIR";
pub const ENV_FONT: &str = "DIAGMOCK_FONT";
pub const ENV_THEME: &str = "DIAGMOCK_THEME";

/// Settings shared by every CLI command.
///
/// Layered as defaults, then environment, then explicit overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudioConfig {
    pub out_dir: PathBuf,
    pub font_path: Option<PathBuf>,
    /// Applied to catalog scenes; scene files carry their own theme.
    pub theme: Theme,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            font_path: None,
            theme: Theme::Light,
        }
    }
}

impl StudioConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source. Empty values
    /// count as unset; an unparsable theme is ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();
        if let Some(dir) = get(ENV_OUT_DIR) {
            cfg.out_dir = PathBuf::from(dir);
        }
        cfg.font_path = get(ENV_FONT).map(PathBuf::from);
        if let Some(raw) = get(ENV_THEME) {
            match raw.parse::<Theme>() {
                Ok(theme) => cfg.theme = theme,
                Err(err) => tracing::warn!(%err, "ignoring {ENV_THEME}"),
            }
        }
        cfg
    }

    pub fn with_out_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.out_dir = dir;
        }
        self
    }

    pub fn with_font(mut self, font: Option<PathBuf>) -> Self {
        if font.is_some() {
            self.font_path = font;
        }
        self
    }

    pub fn with_theme(mut self, theme: Option<Theme>) -> Self {
        if let Some(theme) = theme {
            self.theme = theme;
        }
        self
    }

    pub fn font_config(&self) -> FontConfig {
        let cfg = FontConfig::system();
        match &self.font_path {
            Some(p) => cfg.with_preferred(p),
            None => cfg,
        }
    }

    /// Resolve fonts and build the compositor every command renders with.
    pub fn compositor(&self) -> Compositor {
        Compositor::new(FontSet::resolve(&self.font_config()))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
