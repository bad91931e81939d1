use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "diagmock", version)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every catalog mockup that is missing from the output directory.
    Generate(GenerateArgs),
    /// Render a single scene JSON file to a PNG.
    Render(RenderArgs),
    /// Write the bilingual HTML pages next to the catalog mockups.
    Page(PageArgs),
    /// Decode an image and print the placeholder analysis.
    Analyze(AnalyzeArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Output directory (defaults to $DIAGMOCK_OUT_DIR or `mockups`).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Re-render files that already exist.
    #[arg(long)]
    force: bool,

    /// Preferred TTF/OTF font (defaults to $DIAGMOCK_FONT).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Catalog theme (defaults to $DIAGMOCK_THEME or light).
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Print diagnostics about font resolution (family name + SHA-256 of font bytes).
    #[arg(long)]
    dump_fonts: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Preferred TTF/OTF font (defaults to $DIAGMOCK_FONT).
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PageArgs {
    /// Output directory for pages and mockups.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Preferred TTF/OTF font (defaults to $DIAGMOCK_FONT).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Catalog theme (defaults to $DIAGMOCK_THEME or light).
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// PNG, JPEG or WebP image.
    file: PathBuf,

    /// What the image shows.
    #[arg(long, value_enum, default_value_t = KindChoice::Component)]
    kind: KindChoice,

    /// Report language.
    #[arg(long, value_enum, default_value_t = LangChoice::Pt)]
    lang: LangChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeChoice {
    Light,
    Dark,
}

impl From<ThemeChoice> for diagmock::Theme {
    fn from(t: ThemeChoice) -> Self {
        match t {
            ThemeChoice::Light => Self::Light,
            ThemeChoice::Dark => Self::Dark,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindChoice {
    Ecu,
    Label,
    Component,
    Schematic,
}

impl From<KindChoice> for diagmock::ImageKind {
    fn from(k: KindChoice) -> Self {
        match k {
            KindChoice::Ecu => Self::EcuModule,
            KindChoice::Label => Self::Label,
            KindChoice::Component => Self::Component,
            KindChoice::Schematic => Self::Schematic,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LangChoice {
    Pt,
    En,
}

impl From<LangChoice> for diagmock::Language {
    fn from(l: LangChoice) -> Self {
        match l {
            LangChoice::Pt => Self::Portuguese,
            LangChoice::En => Self::English,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Render(args) => cmd_render(args),
        Command::Page(args) => cmd_page(args),
        Command::Analyze(args) => cmd_analyze(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let cfg = diagmock::StudioConfig::from_env()
        .with_out_dir(args.out)
        .with_font(args.font)
        .with_theme(args.theme.map(Into::into));
    let compositor = cfg.compositor();

    if args.dump_fonts {
        dump_font_diagnostics(compositor.fonts());
    }

    let catalog = diagmock::Catalog::builtin()
        .context("build default catalog")?
        .with_theme(cfg.theme);
    generate_catalog(&cfg, &catalog, &compositor, args.force)?;
    Ok(())
}

fn generate_catalog(
    cfg: &diagmock::StudioConfig,
    catalog: &diagmock::Catalog,
    compositor: &diagmock::Compositor,
    force: bool,
) -> anyhow::Result<()> {
    let store = diagmock::MockupStore::new(&cfg.out_dir);
    let report = store
        .ensure_generated(&catalog.all_mockups(), compositor, force)
        .with_context(|| format!("generate mockups into '{}'", cfg.out_dir.display()))?;

    for name in &report.written {
        eprintln!("wrote {}", cfg.out_dir.join(name).display());
    }
    if report.is_noop() {
        eprintln!(
            "all {} mockups present in {}",
            report.skipped.len(),
            cfg.out_dir.display()
        );
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = diagmock::StudioConfig::from_env().with_font(args.font);
    let scene = diagmock::Scene::from_path(&args.in_path)
        .with_context(|| format!("load scene '{}'", args.in_path.display()))?;

    let bitmap = cfg
        .compositor()
        .render_scene(&scene)
        .with_context(|| format!("render scene '{}'", args.in_path.display()))?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    bitmap.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_page(args: PageArgs) -> anyhow::Result<()> {
    let cfg = diagmock::StudioConfig::from_env()
        .with_out_dir(args.out)
        .with_font(args.font)
        .with_theme(args.theme.map(Into::into));
    let compositor = cfg.compositor();
    let catalog = diagmock::Catalog::builtin()
        .context("build default catalog")?
        .with_theme(cfg.theme);

    generate_catalog(&cfg, &catalog, &compositor, false)?;
    let pages = diagmock::write_site(&cfg.out_dir, &catalog)
        .with_context(|| format!("write pages into '{}'", cfg.out_dir.display()))?;
    for p in pages {
        eprintln!("wrote {}", p.display());
    }
    Ok(())
}

fn cmd_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let language = diagmock::Language::from(args.lang);
    let report = diagmock::analyze_path(&args.file, args.kind.into())
        .with_context(|| format!("could not analyze image '{}'", args.file.display()))?;

    println!("{}", report.caption(language));
    for line in report.summary(language) {
        println!("{line}");
    }
    Ok(())
}

fn dump_font_diagnostics(fonts: &diagmock::FontSet) {
    eprintln!("text font diagnostics:");
    eprintln!("    family:      {}", fonts.family_name());
    match fonts.scalable_font() {
        Some(font) => {
            let source = font
                .source()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<memory>".to_string());
            eprintln!("    font_source: {source}");
            eprintln!("    sha256:      {}", fonts.sha256_hex().unwrap_or_default());
        }
        None => eprintln!("    font_source: built-in bitmap fallback"),
    }
}
