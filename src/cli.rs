//! Command line interface.
//!
//! - `render`: print sheet (HTML) for a template and product data
//! - `preview`: single label as SVG
//! - `templates`: list, create or export library templates

use crate::{blank_template, designer_options, print_options, Config};
use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use labelkit_core::units::{format_length, get_unit_label, parse_length, MeasurementSystem};
use labelkit_core::{CopiesPerPage, PrintDensity};
use labelkit_designer::model::{seed_presets, set_production_date, PresetProduct};
use labelkit_designer::render::{render_label_svg, render_print_document, LabelScene};
use labelkit_designer::{
    load_label_data, DesignerState, JsonTemplateStore, LabelData, LabelTemplate, TemplateFile,
    TemplateLibrary,
};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "labelkit", author, version, about = "Design and print product labels")]
pub struct Cli {
    /// Config file (JSON or TOML); the platform default is used when omitted
    #[arg(long, global = true, env = "LABELKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a print sheet with repeated copies
    Render(RenderArgs),
    /// Render a single label as SVG
    Preview(PreviewArgs),
    /// List, create or export templates
    Templates(TemplatesArgs),
}

/// Where the label content comes from.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Template file, or the id or name of a library template
    #[arg(short, long)]
    pub template: String,

    /// Product data JSON file
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Preset product applied over the data (id or name)
    #[arg(long)]
    pub preset: Option<String>,

    /// Production date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub production_date: Option<String>,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Copies per page: 4, 6 or 12
    #[arg(long)]
    pub copies: Option<CopiesPerPage>,

    /// Spacing between copies: normal or high
    #[arg(long)]
    pub density: Option<PrintDensity>,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Show `{field}` placeholders instead of product data
    #[arg(long)]
    pub placeholders: bool,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct TemplatesArgs {
    /// Save a blank template with this name to the library
    #[arg(long)]
    pub create: Option<String>,

    /// Width of the created template, in the configured units (e.g. "100" or "2 1/2")
    #[arg(long, requires = "create")]
    pub width: Option<String>,

    /// Height of the created template, in the configured units
    #[arg(long, requires = "create")]
    pub height: Option<String>,

    /// Write every library template to a file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Run a parsed command line.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Render(args) => render(&config, args),
        Command::Preview(args) => preview(&config, args),
        Command::Templates(args) => templates(&config, args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => match labelkit_settings::default_config_path() {
            Ok(path) => Config::load_or_default(&path)
                .with_context(|| format!("Failed to load config from {}", path.display())),
            Err(e) => {
                tracing::warn!("{}; using default configuration", e);
                Ok(Config::default())
            }
        },
    }
}

fn open_store(config: &Config) -> anyhow::Result<JsonTemplateStore> {
    let path = config
        .library
        .resolve_templates_file()
        .context("Cannot locate the template library")?;
    JsonTemplateStore::open(&path)
        .with_context(|| format!("Failed to open template library {}", path.display()))
}

/// A template from a file path, or from the library by id or name.
fn resolve_template(config: &Config, reference: &str) -> anyhow::Result<LabelTemplate> {
    let path = Path::new(reference);
    if path.is_file() {
        let file = TemplateFile::load_from_file(path)
            .with_context(|| format!("Failed to load template from {}", path.display()))?;
        return file
            .templates
            .into_iter()
            .next()
            .with_context(|| format!("No template in {}", path.display()));
    }

    let library = match open_store(config) {
        Ok(store) => store.library().clone(),
        Err(e) => {
            tracing::warn!("{:#}; using built-in templates only", e);
            TemplateLibrary::new()
        }
    };
    library
        .get(reference)
        .or_else(|| library.find_by_name(reference))
        .cloned()
        .with_context(|| format!("No template file or library template named '{}'", reference))
}

fn find_preset(reference: &str) -> anyhow::Result<PresetProduct> {
    seed_presets()
        .into_iter()
        .find(|p| p.id == reference || p.name.eq_ignore_ascii_case(reference.trim()))
        .with_context(|| format!("Unknown preset '{}'", reference))
}

fn resolve_data(source: &SourceArgs) -> anyhow::Result<LabelData> {
    let production_date = source
        .production_date
        .clone()
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());

    let mut data = match &source.data {
        Some(path) => load_label_data(path)
            .with_context(|| format!("Failed to load product data from {}", path.display()))?,
        None => LabelData::seed(&production_date),
    };

    let preset = source.preset.as_deref().map(find_preset).transpose()?;
    if let Some(preset) = &preset {
        preset.apply_to(&mut data);
    }
    if source.production_date.is_some() || data.production_date.is_empty() {
        set_production_date(&mut data, production_date, preset.as_ref());
    }
    Ok(data)
}

fn write_output(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn render(config: &Config, args: RenderArgs) -> anyhow::Result<()> {
    let template = resolve_template(config, &args.source.template)?;
    let data = resolve_data(&args.source)?;

    let mut options = print_options(config);
    if let Some(copies) = args.copies {
        options.copies = copies;
    }
    if let Some(density) = args.density {
        options.density = density;
    }

    let html = render_print_document(&template, &data, &options);
    write_output(args.output.as_deref(), &html)
}

fn preview(config: &Config, args: PreviewArgs) -> anyhow::Result<()> {
    let template = resolve_template(config, &args.source.template)?;
    let scene = if args.placeholders {
        LabelScene::placeholders(&template)
    } else {
        LabelScene::build(&template, &resolve_data(&args.source)?)
    };
    let svg = render_label_svg(
        &scene,
        &format!("{}mm", template.width_mm),
        &format!("{}mm", template.height_mm),
    );
    write_output(args.output.as_deref(), &svg)
}

fn templates(config: &Config, args: TemplatesArgs) -> anyhow::Result<()> {
    let mut store = open_store(config)?;

    if let Some(name) = args.create.as_deref() {
        let name = name.trim();
        if name.is_empty() {
            bail!("Template name cannot be blank");
        }
        let mut template = blank_template(config, name);
        let system = config.designer.measurement_system;
        if let Some(width) = args.width.as_deref() {
            template.width_mm = parse_dimension("width", width, system)?;
        }
        if let Some(height) = args.height.as_deref() {
            template.height_mm = parse_dimension("height", height, system)?;
        }

        let mut state = DesignerState::new(template, designer_options(config));
        state
            .save(&mut store)
            .with_context(|| format!("Failed to save template '{}'", name))?;
        println!("{}", state.template().id);
    }

    if let Some(path) = args.export.as_deref() {
        TemplateFile::new(store.library().list().to_vec())
            .save_to_file(path)
            .with_context(|| format!("Failed to export templates to {}", path.display()))?;
    }

    if args.create.is_none() && args.export.is_none() {
        let system = config.designer.measurement_system;
        for template in store.library().list() {
            println!(
                "{:<38} {:<28} {} x {} {} {:>3} elements{}",
                template.id,
                template.name,
                format_length(template.width_mm, system),
                format_length(template.height_mm, system),
                get_unit_label(system),
                template.len(),
                if template.is_default { "  (built-in)" } else { "" }
            );
        }
    }
    Ok(())
}

/// A positive length in `system` units, as millimetres.
fn parse_dimension(what: &str, input: &str, system: MeasurementSystem) -> anyhow::Result<f64> {
    let mm = parse_length(input, system)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("Invalid {} '{}'", what, input))?;
    if mm <= 0.0 {
        bail!("Template {} must be positive, got '{}'", what, input);
    }
    Ok(mm)
}
