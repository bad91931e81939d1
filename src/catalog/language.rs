use std::{fmt, str::FromStr};

use crate::foundation::error::{DiagmockError, DiagmockResult};

/// Page and mockup language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Portuguese,
    English,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::Portuguese, Self::English];

    /// Short code used in CLI flags and HTML `lang` attributes.
    pub fn code(self) -> &'static str {
        match self {
            Self::Portuguese => "pt",
            Self::English => "en",
        }
    }

    /// Name of the language as shown in the selector link.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Portuguese => "Português",
            Self::English => "English",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Portuguese => Self::English,
            Self::English => Self::Portuguese,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = DiagmockError;

    fn from_str(s: &str) -> DiagmockResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "pt" | "pt-br" | "portuguese" | "português" | "portugues" => Ok(Self::Portuguese),
            "en" | "en-us" | "english" => Ok(Self::English),
            other => Err(DiagmockError::Other(anyhow::anyhow!(
                "unknown language '{other}' (expected 'pt' or 'en')"
            ))),
        }
    }
}

/// A pair of strings, one per [`Language`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Localized {
    pub pt: &'static str,
    pub en: &'static str,
}

impl Localized {
    pub const fn new(pt: &'static str, en: &'static str) -> Self {
        Self { pt, en }
    }

    pub fn get(self, language: Language) -> &'static str {
        match language {
            Language::Portuguese => self.pt,
            Language::English => self.en,
        }
    }
}
