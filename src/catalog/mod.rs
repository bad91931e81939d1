//! The fixed set of named default scenes.
//!
//! Every entry has a Portuguese mockup reproducing the full screen and an
//! English preview. Both render onto the 670x850 catalog canvas.

mod language;
mod scenes;

pub use language::{Language, Localized};

use crate::{
    foundation::error::DiagmockResult,
    scene::{model::Scene, theme::Theme},
};

/// File stems of the catalog, in presentation order.
pub const MOCKUP_NAMES: [&str; 9] = [
    "login",
    "vehicle_selection",
    "diagnostic",
    "results",
    "upload",
    "recognition",
    "schematic",
    "dashboard",
    "knowledge",
];

/// Page tab an entry is presented under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    GuidedDiagnosis,
    VisualInterpretation,
    Dashboard,
}

impl Tab {
    pub const ALL: [Self; 3] = [
        Self::GuidedDiagnosis,
        Self::VisualInterpretation,
        Self::Dashboard,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::GuidedDiagnosis => "diagnosis",
            Self::VisualInterpretation => "visual",
            Self::Dashboard => "dashboard",
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        let s = match self {
            Self::GuidedDiagnosis => Localized::new("Diagnóstico Guiado", "Guided Diagnosis"),
            Self::VisualInterpretation => {
                Localized::new("Interpretação Visual", "Visual Interpretation")
            }
            Self::Dashboard => Localized::new("Dashboard", "Dashboard"),
        };
        s.get(language)
    }

    pub fn header(self, language: Language) -> &'static str {
        let s = match self {
            Self::GuidedDiagnosis => {
                Localized::new("Fluxo de Diagnóstico Guiado", "Guided Diagnosis Flow")
            }
            Self::VisualInterpretation => Localized::new(
                "Sistema de Interpretação Visual",
                "Visual Interpretation System",
            ),
            Self::Dashboard => Localized::new(
                "Dashboard e Base de Conhecimento",
                "Dashboard and Knowledge Base",
            ),
        };
        s.get(language)
    }
}

/// One named mockup with its page copy in both languages.
#[derive(Clone, Debug)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub tab: Tab,
    heading: Localized,
    description: Localized,
    scene: Scene,
    preview: Scene,
}

impl CatalogEntry {
    /// `login.png` for Portuguese, `en_login.png` for English.
    pub fn file_name(&self, language: Language) -> String {
        match language {
            Language::Portuguese => format!("{}.png", self.name),
            Language::English => format!("en_{}.png", self.name),
        }
    }

    pub fn heading(&self, language: Language) -> &'static str {
        self.heading.get(language)
    }

    pub fn description(&self, language: Language) -> &'static str {
        self.description.get(language)
    }

    pub fn scene(&self, language: Language) -> &Scene {
        match language {
            Language::Portuguese => &self.scene,
            Language::English => &self.preview,
        }
    }
}

/// A scene paired with the file it is stored under.
#[derive(Clone, Copy, Debug)]
pub struct Mockup<'a> {
    pub file_name: &'a str,
    pub scene: &'a Scene,
}

#[derive(Clone, Debug)]
/// Ordered list of [`CatalogEntry`] values.
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    file_names: Vec<[String; 2]>,
}

impl Catalog {
    /// The nine default mockups.
    pub fn builtin() -> DiagmockResult<Self> {
        use Tab::{Dashboard, GuidedDiagnosis, VisualInterpretation};

        let entries = vec![
            entry(
                "login",
                GuidedDiagnosis,
                Localized::new("Tela de Login", "Login Screen"),
                Localized::new(
                    "Interface inicial onde o mecânico se identifica no sistema. Permite controle de acesso e personalização da experiência com base no histórico do usuário.",
                    "Entry point with user identification and access control.",
                ),
                scenes::login()?,
                scenes::preview("Login", "User authentication and access flow")?,
            ),
            entry(
                "vehicle_selection",
                GuidedDiagnosis,
                Localized::new("Seleção de Veículo", "Vehicle Selection"),
                Localized::new(
                    "Permite ao mecânico selecionar o veículo a ser diagnosticado através de marca, modelo, ano e motor, ou diretamente pelo código do chassi. Exibe também veículos recentemente diagnosticados.",
                    "Vehicle lookup by make/model/year/engine or chassis code.",
                ),
                scenes::vehicle_selection()?,
                scenes::preview("Vehicle Selection", "Select make, model, year, and engine")?,
            ),
            entry(
                "diagnostic",
                GuidedDiagnosis,
                Localized::new("Interface de Diagnóstico", "Diagnostic Interface"),
                Localized::new(
                    "Guia o mecânico através de um processo de diagnóstico passo a passo, solicitando testes específicos e coletando resultados. A IA analisa as respostas e determina os próximos passos mais relevantes.",
                    "Step-by-step diagnosis with test results and next actions.",
                ),
                scenes::diagnostic()?,
                scenes::preview("Diagnostic Interface", "Guided checklist and test results")?,
            ),
            entry(
                "results",
                GuidedDiagnosis,
                Localized::new("Visualização de Resultados", "Results View"),
                Localized::new(
                    "Apresenta o diagnóstico final com o problema identificado, resumo das verificações realizadas e solução recomendada. Inclui informações detalhadas sobre a peça a ser substituída e esquema elétrico relacionado.",
                    "Final diagnosis summary and recommended repair path.",
                ),
                scenes::results()?,
                scenes::preview("Results View", "Diagnosis summary and recommended repair")?,
            ),
            entry(
                "upload",
                VisualInterpretation,
                Localized::new("Upload/Captura de Imagem", "Image Upload/Capture"),
                Localized::new(
                    "Interface para envio ou captura de imagens de componentes, módulos, etiquetas ou esquemas elétricos. Inclui dicas para obter imagens de qualidade que facilitem o reconhecimento pela IA.",
                    "Upload or capture images of modules, labels, components, or schematics.",
                ),
                scenes::upload()?,
                scenes::preview("Image Upload/Capture", "Upload or capture component images")?,
            ),
            entry(
                "recognition",
                VisualInterpretation,
                Localized::new("Reconhecimento de Componentes", "Component Recognition"),
                Localized::new(
                    "Exibe o componente identificado com informações detalhadas como tipo, fabricante, número de série e aplicação. Mostra também histórico de diagnósticos relacionados a este componente específico.",
                    "Component details and related history context.",
                ),
                scenes::recognition()?,
                scenes::preview("Component Recognition", "Detected component details")?,
            ),
            entry(
                "schematic",
                VisualInterpretation,
                Localized::new(
                    "Visualização de Esquemas Elétricos",
                    "Electrical Schematics View",
                ),
                Localized::new(
                    "Apresenta o esquema elétrico relacionado ao componente identificado, com legenda detalhada dos componentes e suas conexões. Permite ampliar, imprimir ou salvar o esquema em PDF.",
                    "Related schematic with component legend and export options.",
                ),
                scenes::schematic()?,
                scenes::preview("Electrical Schematics", "Related diagram and legend")?,
            ),
            entry(
                "dashboard",
                Dashboard,
                Localized::new("Dashboard Principal", "Main Dashboard"),
                Localized::new(
                    "Visão geral das atividades de diagnóstico, incluindo estatísticas de uso, taxa de sucesso, tempo médio de diagnóstico, histórico recente e gráficos de problemas mais frequentes.",
                    "Operational overview with diagnostics and usage indicators.",
                ),
                scenes::dashboard()?,
                scenes::preview("Main Dashboard", "Usage metrics and diagnosis indicators")?,
            ),
            entry(
                "knowledge",
                Dashboard,
                Localized::new("Base de Conhecimento", "Knowledge Base"),
                Localized::new(
                    "Repositório de soluções e informações técnicas organizadas por tipo de problema, componente ou modelo de veículo. Permite busca, filtragem e contribuição de novas soluções pelos mecânicos.",
                    "Technical repository organized by issue type and component.",
                ),
                scenes::knowledge()?,
                scenes::preview("Knowledge Base", "Solutions and technical references")?,
            ),
        ];
        Ok(Self::from_entries(entries))
    }

    fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let file_names = entries
            .iter()
            .map(|e| Language::ALL.map(|l| e.file_name(l)))
            .collect();
        Self {
            entries,
            file_names,
        }
    }

    /// Re-theme every scene. Explicit element colors are kept.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        for e in &mut self.entries {
            e.scene.canvas.theme = theme;
            e.preview.canvas.theme = theme;
        }
        self
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn in_tab(&self, tab: Tab) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(move |e| e.tab == tab)
    }

    /// Scenes of one language, in catalog order.
    pub fn mockups(&self, language: Language) -> Vec<Mockup<'_>> {
        let slot = lang_slot(language);
        self.entries
            .iter()
            .zip(&self.file_names)
            .map(|(e, names)| Mockup {
                file_name: &names[slot],
                scene: e.scene(language),
            })
            .collect()
    }

    /// Portuguese mockups followed by the English previews.
    pub fn all_mockups(&self) -> Vec<Mockup<'_>> {
        Language::ALL
            .into_iter()
            .flat_map(|l| self.mockups(l))
            .collect()
    }
}

fn lang_slot(language: Language) -> usize {
    match language {
        Language::Portuguese => 0,
        Language::English => 1,
    }
}

fn entry(
    name: &'static str,
    tab: Tab,
    heading: Localized,
    description: Localized,
    scene: Scene,
    preview: Scene,
) -> CatalogEntry {
    CatalogEntry {
        name,
        tab,
        heading,
        description,
        scene,
        preview,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/catalog.rs"]
mod tests;
