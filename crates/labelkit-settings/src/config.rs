//! Configuration and settings management for LabelKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Designer behaviour (snapping, history depth, zoom, new template size)
//! - Print sheet defaults (copies per page, density, page size)
//! - Template library location

use crate::error::{ConfigError, SettingsError, SettingsResult};
use labelkit_core::constants::{
    A4_HEIGHT_MM, A4_WIDTH_MM, DEFAULT_HISTORY_DEPTH, DEFAULT_LABEL_HEIGHT_MM,
    DEFAULT_LABEL_WIDTH_MM, DEFAULT_SNAP_THRESHOLD_PX, DUPLICATE_OFFSET_PCT, MAX_ZOOM,
    MIN_ELEMENT_SIZE_PCT, MIN_ZOOM, PAGE_MARGIN_MM, ZOOM_STEP,
};
pub use labelkit_core::units::MeasurementSystem;
use labelkit_core::{CopiesPerPage, PrintDensity};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the application directory under the platform config dir.
const APP_DIR: &str = "labelkit";

/// Designer behaviour settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerSettings {
    /// Snap moving elements to sibling and canvas guides
    pub snap_enabled: bool,
    /// Snap distance in screen pixels at 100% zoom
    pub snap_threshold_px: f64,
    /// Maximum number of undo snapshots
    pub history_depth: usize,
    /// Offset applied when duplicating an element, in percent of the canvas
    pub duplicate_offset_pct: f64,
    /// Smallest element width/height a resize can produce, in percent
    pub min_element_size_pct: f64,
    /// Width of newly created templates
    pub default_width_mm: f64,
    /// Height of newly created templates
    pub default_height_mm: f64,
    /// Lower zoom bound
    pub min_zoom: f64,
    /// Upper zoom bound
    pub max_zoom: f64,
    /// Multiplicative zoom step
    pub zoom_step: f64,
    /// Units shown in the properties panel
    pub measurement_system: MeasurementSystem,
}

impl Default for DesignerSettings {
    fn default() -> Self {
        Self {
            snap_enabled: true,
            snap_threshold_px: DEFAULT_SNAP_THRESHOLD_PX,
            history_depth: DEFAULT_HISTORY_DEPTH,
            duplicate_offset_pct: DUPLICATE_OFFSET_PCT,
            min_element_size_pct: MIN_ELEMENT_SIZE_PCT,
            default_width_mm: DEFAULT_LABEL_WIDTH_MM,
            default_height_mm: DEFAULT_LABEL_HEIGHT_MM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: ZOOM_STEP,
            measurement_system: MeasurementSystem::default(),
        }
    }
}

/// Print sheet defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintSettings {
    /// Copies tiled per page
    pub copies_per_page: CopiesPerPage,
    /// Spacing density
    pub density: PrintDensity,
    /// Page width
    pub page_width_mm: f64,
    /// Page height
    pub page_height_mm: f64,
    /// Margin between the page edge and the grid
    pub page_margin_mm: f64,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            copies_per_page: CopiesPerPage::default(),
            density: PrintDensity::default(),
            page_width_mm: A4_WIDTH_MM,
            page_height_mm: A4_HEIGHT_MM,
            page_margin_mm: PAGE_MARGIN_MM,
        }
    }
}

/// Template library settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// JSON file holding user templates; `None` uses the config directory
    pub templates_file: Option<PathBuf>,
}

impl LibrarySettings {
    /// Resolve the templates file, falling back to the config directory
    pub fn resolve_templates_file(&self) -> SettingsResult<PathBuf> {
        match &self.templates_file {
            Some(path) => Ok(path.clone()),
            None => Ok(config_dir()?.join("templates.json")),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Designer behaviour
    pub designer: DesignerSettings,
    /// Print defaults
    pub print: PrintSettings,
    /// Template library
    pub library: LibrarySettings,
}

/// Platform config directory for LabelKit
pub fn config_dir() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| SettingsError::ConfigDirectory("no platform config directory".to_string()))
}

/// Default config file location
pub fn default_config_path() -> SettingsResult<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

#[derive(Clone, Copy)]
enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("<none>").to_string()).into()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        tracing::info!("Saved config to {}", path.display());

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.designer;
        if !(d.snap_threshold_px.is_finite() && d.snap_threshold_px >= 0.0) {
            return Err(ConfigError::out_of_range(
                "designer.snap_threshold_px",
                d.snap_threshold_px,
            ));
        }
        if d.history_depth == 0 {
            return Err(ConfigError::out_of_range("designer.history_depth", d.history_depth));
        }
        if !(d.duplicate_offset_pct.is_finite() && d.duplicate_offset_pct >= 0.0) {
            return Err(ConfigError::out_of_range(
                "designer.duplicate_offset_pct",
                d.duplicate_offset_pct,
            ));
        }
        if !(d.min_element_size_pct > 0.0 && d.min_element_size_pct < 100.0) {
            return Err(ConfigError::out_of_range(
                "designer.min_element_size_pct",
                d.min_element_size_pct,
            ));
        }
        if d.default_width_mm <= 0.0 || d.default_height_mm <= 0.0 {
            return Err(ConfigError::out_of_range(
                "designer.default_size_mm",
                format!("{}x{}", d.default_width_mm, d.default_height_mm),
            ));
        }
        if d.min_zoom <= 0.0 || d.max_zoom <= d.min_zoom {
            return Err(ConfigError::out_of_range(
                "designer.zoom",
                format!("{}..{}", d.min_zoom, d.max_zoom),
            ));
        }
        if d.zoom_step <= 1.0 {
            return Err(ConfigError::out_of_range("designer.zoom_step", d.zoom_step));
        }

        let p = &self.print;
        if p.page_width_mm <= 0.0 || p.page_height_mm <= 0.0 {
            return Err(ConfigError::out_of_range(
                "print.page_size_mm",
                format!("{}x{}", p.page_width_mm, p.page_height_mm),
            ));
        }
        if p.page_margin_mm < 0.0
            || p.page_margin_mm * 2.0 >= p.page_width_mm.min(p.page_height_mm)
        {
            return Err(ConfigError::out_of_range("print.page_margin_mm", p.page_margin_mm));
        }

        Ok(())
    }
}
