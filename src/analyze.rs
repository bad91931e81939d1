//! Placeholder image analysis: decode an upload and report what was received.
//!
//! No inspection happens beyond size and color layout; the report says so.

use std::{fmt, path::Path, str::FromStr};

use crate::{
    catalog::{Language, Localized},
    foundation::error::{DiagmockError, DiagmockResult},
};

/// What the user says the image shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImageKind {
    EcuModule,
    Label,
    #[default]
    Component,
    Schematic,
}

impl ImageKind {
    pub const ALL: [Self; 4] = [
        Self::EcuModule,
        Self::Label,
        Self::Component,
        Self::Schematic,
    ];

    /// Identifier accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EcuModule => "ecu",
            Self::Label => "label",
            Self::Component => "component",
            Self::Schematic => "schematic",
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        let s = match self {
            Self::EcuModule => Localized::new("Modulo ECU", "ECU Module"),
            Self::Label => Localized::new("Etiqueta", "Label"),
            Self::Component => Localized::new("Componente", "Component"),
            Self::Schematic => Localized::new("Esquema", "Schematic"),
        };
        s.get(language)
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageKind {
    type Err = DiagmockError;

    fn from_str(s: &str) -> DiagmockResult<Self> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "ecu" | "ecu_module" => Ok(Self::EcuModule),
            "label" => Ok(Self::Label),
            "component" => Ok(Self::Component),
            "schematic" => Ok(Self::Schematic),
            other => Err(DiagmockError::Other(anyhow::anyhow!(
                "unknown image kind '{other}' (expected ecu, label, component or schematic)"
            ))),
        }
    }
}

/// Result of [`analyze_bytes`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageReport {
    pub width: u32,
    pub height: u32,
    /// Conventional short mode name such as `RGB` or `LA`.
    pub color_mode: String,
    pub kind: ImageKind,
}

impl ImageReport {
    /// Caption shown above the received image.
    pub fn caption(&self, language: Language) -> String {
        let prefix = Localized::new("Imagem recebida", "Received image").get(language);
        format!("{prefix} ({})", self.kind.label(language))
    }

    /// Success line, resolution, color mode and the placeholder notice.
    pub fn summary(&self, language: Language) -> Vec<String> {
        match language {
            Language::Portuguese => vec![
                "Imagem processada com sucesso.".to_string(),
                format!("Resolucao detectada: {}x{}", self.width, self.height),
                format!("Modo de cor: {}", self.color_mode),
                "Este resultado e um placeholder. Conecte aqui seu modelo de visao computacional para diagnostico real.".to_string(),
            ],
            Language::English => vec![
                "Image processed successfully.".to_string(),
                format!("Detected resolution: {}x{}", self.width, self.height),
                format!("Color mode: {}", self.color_mode),
                "This result is a placeholder. Connect your computer vision model here for real diagnostics.".to_string(),
            ],
        }
    }
}

/// Decode PNG, JPEG or WebP bytes; the format is sniffed from content.
pub fn analyze_bytes(bytes: &[u8], kind: ImageKind) -> DiagmockResult<ImageReport> {
    let img = image::load_from_memory(bytes).map_err(|e| DiagmockError::decode(e.to_string()))?;
    Ok(ImageReport {
        width: img.width(),
        height: img.height(),
        color_mode: color_mode(img.color()).to_string(),
        kind,
    })
}

pub fn analyze_path(path: &Path, kind: ImageKind) -> DiagmockResult<ImageReport> {
    let bytes = std::fs::read(path)?;
    analyze_bytes(&bytes, kind)
        .map_err(|e| match e {
            DiagmockError::Decode(msg) => {
                DiagmockError::decode(format!("'{}': {msg}", path.display()))
            }
            other => other,
        })
}

fn color_mode(color: image::ColorType) -> &'static str {
    use image::ColorType as C;
    match color {
        C::L8 => "L",
        C::La8 => "LA",
        C::Rgb8 => "RGB",
        C::Rgba8 => "RGBA",
        C::L16 => "I;16",
        C::La16 => "LA;16",
        C::Rgb16 => "RGB;16",
        C::Rgba16 => "RGBA;16",
        C::Rgb32F => "F",
        C::Rgba32F => "RGBA;F",
        _ => "unknown",
    }
}

#[cfg(test)]
#[path = "../tests/unit/analyze/analyze.rs"]
mod tests;
