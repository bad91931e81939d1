//! Static bilingual page presenting the catalog mockups.
//!
//! Tabs are plain radio inputs toggled with CSS, so the page needs no script.
//! Images are referenced by file name and expected next to the page.

use std::path::{Path, PathBuf};

use crate::{
    analyze::ImageKind,
    catalog::{Catalog, Language, Localized, Tab},
    foundation::error::DiagmockResult,
};

const PAGE_TITLE: Localized = Localized::new(
    "Mockups - IA para Eletrônica Automotiva",
    "Mockups - AI for Automotive Electronics",
);

const OVERVIEW_HEADING: Localized = Localized::new("Visão Geral do Projeto", "Project Overview");

const OVERVIEW_BODY: Localized = Localized::new(
    "Este projeto desenvolve uma solução de Inteligência Artificial aplicada à eletrônica automotiva, focada em auxiliar mecânicos no diagnóstico de falhas e interpretação de esquemas elétricos.",
    "This project demonstrates an AI-assisted automotive electronics prototype focused on:",
);

const OVERVIEW_POINTS_EN: [&str; 3] = [
    "guided diagnostics,",
    "visual interpretation of components and schematics,",
    "dashboard and knowledge-base workflows.",
];

const DESCRIPTION_LABEL: Localized = Localized::new("Descrição:", "Description:");

const RESOURCES_HEADING: Localized = Localized::new(
    "Recursos Técnicos Implementados",
    "Implemented Technical Resources",
);

const RESOURCES: [(Localized, Localized); 5] = [
    (
        Localized::new("Diagnóstico Guiado", "Guided Diagnosis"),
        Localized::new(
            "Sistema de checklist inteligente baseado em redes neurais e lógica de decisão",
            "intelligent checklist and decision flow",
        ),
    ),
    (
        Localized::new("Interpretação Visual", "Visual Interpretation"),
        Localized::new(
            "Reconhecimento de componentes, etiquetas e esquemas usando visão computacional",
            "component/label/schematic recognition path",
        ),
    ),
    (
        Localized::new("Base de Conhecimento", "Knowledge Base"),
        Localized::new(
            "Estruturação de dados de problemas e soluções em categorias",
            "structure for issue and solution cataloging",
        ),
    ),
    (
        Localized::new("Integração de Dados", "Data Integration"),
        Localized::new(
            "Processamento de mensagens de grupos técnicos e manuais de serviço",
            "foundation for technical data ingestion",
        ),
    ),
    (
        Localized::new("Interface Responsiva", "Responsive Interface"),
        Localized::new(
            "Design adaptável para uso em diferentes dispositivos na oficina",
            "usable across workshop device types",
        ),
    ),
];

const UPLOAD_HEADING: Localized = Localized::new(
    "Teste Interativo de Upload/Captura",
    "Interactive Upload/Capture Test",
);

const UPLOAD_CAPTION: Localized = Localized::new(
    "Sessao funcional para validar envio de imagem no prototipo.",
    "Functional section to validate image upload in the prototype.",
);

const UPLOAD_HOWTO: Localized = Localized::new(
    "Para analisar uma imagem (png, jpg, jpeg ou webp), execute:",
    "To analyze an image (png, jpg, jpeg or webp), run:",
);

const UPLOAD_KINDS: Localized = Localized::new("Tipos de imagem:", "Image types:");

const STYLE: &str = "body{font-family:sans-serif;margin:0 auto;max-width:980px;padding:0 16px;color:#333}\
.lang{float:right;margin-top:24px}\
.tabs>input{display:none}\
.tabs>label{display:inline-block;padding:8px 16px;border-bottom:2px solid transparent;cursor:pointer}\
.panel{display:none}\
#tab-diagnosis:checked~label[for=tab-diagnosis],#tab-visual:checked~label[for=tab-visual],#tab-dashboard:checked~label[for=tab-dashboard]{border-color:#2c7be5;color:#2c7be5}\
#tab-diagnosis:checked~#panel-diagnosis,#tab-visual:checked~#panel-visual,#tab-dashboard:checked~#panel-dashboard{display:block}\
img{max-width:100%;border:1px solid #dddddd}\
code{background:#e9ecef;padding:2px 4px}";

/// File the page for `language` is written to.
pub fn index_file(language: Language) -> &'static str {
    match language {
        Language::Portuguese => "index.html",
        Language::English => "index_en.html",
    }
}

/// Full HTML document for one language.
pub fn render_page(language: Language, catalog: &Catalog) -> String {
    let mut html = String::with_capacity(16 * 1024);
    let title = html_escape(PAGE_TITLE.get(language));

    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n",
        language.code()
    ));

    let other = language.other();
    html.push_str(&format!(
        "<nav class=\"lang\">Language / Idioma: <a href=\"{}\" hreflang=\"{}\">{}</a></nav>\n",
        index_file(other),
        other.code(),
        html_escape(other.display_name())
    ));
    html.push_str(&format!("<h1>{title}</h1>\n"));

    html.push_str(&format!(
        "<h2>{}</h2>\n<p>{}</p>\n",
        html_escape(OVERVIEW_HEADING.get(language)),
        html_escape(OVERVIEW_BODY.get(language))
    ));
    if language == Language::English {
        push_list(&mut html, OVERVIEW_POINTS_EN.iter().map(|p| html_escape(p)));
    }

    push_tabs(&mut html, language, catalog);

    html.push_str(&format!(
        "<h2>{}</h2>\n",
        html_escape(RESOURCES_HEADING.get(language))
    ));
    push_list(
        &mut html,
        RESOURCES.iter().map(|(name, detail)| {
            format!(
                "<strong>{}:</strong> {}",
                html_escape(name.get(language)),
                html_escape(detail.get(language))
            )
        }),
    );

    // The English page keeps the upload test inside its visual tab.
    if language == Language::Portuguese {
        html.push_str("<hr>\n");
        push_upload_section(&mut html, language);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn push_tabs(html: &mut String, language: Language, catalog: &Catalog) {
    html.push_str("<div class=\"tabs\">\n");
    for (i, tab) in Tab::ALL.iter().enumerate() {
        let checked = if i == 0 { " checked" } else { "" };
        html.push_str(&format!(
            "<input type=\"radio\" name=\"tabs\" id=\"tab-{}\"{checked}>\n",
            tab.slug()
        ));
    }
    for tab in Tab::ALL {
        html.push_str(&format!(
            "<label for=\"tab-{}\">{}</label>\n",
            tab.slug(),
            html_escape(tab.label(language))
        ));
    }

    for tab in Tab::ALL {
        html.push_str(&format!(
            "<section class=\"panel\" id=\"panel-{}\">\n<h2>{}</h2>\n",
            tab.slug(),
            html_escape(tab.header(language))
        ));
        for (n, entry) in catalog.in_tab(tab).enumerate() {
            let heading = html_escape(entry.heading(language));
            html.push_str(&format!(
                "<h3>{}. {heading}</h3>\n<img src=\"{}\" alt=\"{heading}\">\n<p><strong>{}</strong> {}</p>\n",
                n + 1,
                html_escape(&entry.file_name(language)),
                html_escape(DESCRIPTION_LABEL.get(language)),
                html_escape(entry.description(language))
            ));
        }
        if tab == Tab::VisualInterpretation && language == Language::English {
            html.push_str("<hr>\n");
            push_upload_section(html, language);
        }
        html.push_str("</section>\n");
    }
    html.push_str("</div>\n");
}

fn push_upload_section(html: &mut String, language: Language) {
    html.push_str(&format!(
        "<h3>{}</h3>\n<p><em>{}</em></p>\n<p>{}</p>\n<pre><code>diagmock analyze IMAGE --kind component --lang {}</code></pre>\n<p>{}</p>\n",
        html_escape(UPLOAD_HEADING.get(language)),
        html_escape(UPLOAD_CAPTION.get(language)),
        html_escape(UPLOAD_HOWTO.get(language)),
        language.code(),
        html_escape(UPLOAD_KINDS.get(language))
    ));
    push_list(
        html,
        ImageKind::ALL.iter().map(|k| {
            format!(
                "<code>{}</code> {}",
                k.as_str(),
                html_escape(k.label(language))
            )
        }),
    );
}

fn push_list(html: &mut String, items: impl Iterator<Item = String>) {
    html.push_str("<ul>\n");
    for item in items {
        html.push_str(&format!("<li>{item}</li>\n"));
    }
    html.push_str("</ul>\n");
}

/// Write `index.html` and `index_en.html` into `dir`.
pub fn write_site(dir: &Path, catalog: &Catalog) -> DiagmockResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(Language::ALL.len());
    for language in Language::ALL {
        let path = dir.join(index_file(language));
        std::fs::write(&path, render_page(language, catalog))?;
        tracing::info!(path = %path.display(), "wrote page");
        written.push(path);
    }
    Ok(written)
}

pub(crate) fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/unit/page/page.rs"]
mod tests;
