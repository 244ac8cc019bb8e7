//! # LabelKit
//!
//! A label template designer and print-sheet renderer for small food
//! producers. Layouts are designed once, bound to product fields, and
//! printed as sheets of repeated copies.
//!
//! ## Architecture
//!
//! LabelKit is organized as a workspace with multiple crates:
//!
//! 1. **labelkit-core** - Errors, units, print sheet options, defaults
//! 2. **labelkit-designer** - Template model, undo history, pointer gestures,
//!    snapping, data binding and SVG / print rendering
//! 3. **labelkit-settings** - Configuration file handling
//! 4. **labelkit** - Command line front end that ties the crates together
//!
//! ## Features
//!
//! - **Templates**: Built-in and user templates stored as JSON
//! - **Data Binding**: Text, barcodes and QR codes filled from product data
//! - **Bilingual Labels**: Per-script font overrides and right-to-left text
//! - **Print Sheets**: 4, 6 or 12 copies per A4 page at two densities

pub mod cli;

pub use labelkit_designer as designer;
pub use labelkit_settings as settings;

pub use labelkit_core::{CopiesPerPage, Error, PrintDensity, Result};
pub use labelkit_designer::{
    DesignerOptions, DesignerState, LabelData, LabelTemplate, PrintOptions, TemplateLibrary,
};
pub use labelkit_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("LABELKIT_BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout free for rendered documents
/// - RUST_LOG environment variable support, `info` by default
///   (`debug` when `verbose`)
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(verbose);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Designer session options from the configuration
pub fn designer_options(config: &Config) -> DesignerOptions {
    let d = &config.designer;
    DesignerOptions {
        snap_enabled: d.snap_enabled,
        snap_threshold_px: d.snap_threshold_px,
        history_depth: d.history_depth,
        duplicate_offset_pct: d.duplicate_offset_pct,
        min_element_size_pct: d.min_element_size_pct,
        min_zoom: d.min_zoom,
        max_zoom: d.max_zoom,
        zoom_step: d.zoom_step,
    }
}

/// Print sheet options from the configuration
pub fn print_options(config: &Config) -> PrintOptions {
    let p = &config.print;
    PrintOptions {
        copies: p.copies_per_page,
        density: p.density,
        page_width_mm: p.page_width_mm,
        page_height_mm: p.page_height_mm,
        margin_mm: p.page_margin_mm,
    }
}

/// A blank template sized from the configuration defaults
pub fn blank_template(config: &Config, name: &str) -> LabelTemplate {
    LabelTemplate::new(
        name,
        config.designer.default_width_mm,
        config.designer.default_height_mm,
    )
}
