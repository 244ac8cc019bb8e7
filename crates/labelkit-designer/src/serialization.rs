//! Serialization and deserialization for template files.
//!
//! A template file is versioned JSON holding any number of templates.
//! Readers also accept a bare template object or a bare array of them.

use crate::model::{LabelData, LabelTemplate};
use crate::templates::{TemplateLibrary, TemplateStore};
use chrono::{DateTime, Utc};
use labelkit_core::{StoreError, TemplateError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Template file format version
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Versioned template file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateFile {
    pub version: String,
    pub saved_at: DateTime<Utc>,
    pub templates: Vec<LabelTemplate>,
}

impl TemplateFile {
    pub fn new(templates: Vec<LabelTemplate>) -> Self {
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            saved_at: Utc::now(),
            templates,
        }
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a template document: a versioned file, an array of templates
    /// or a single template.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.is_array() {
            return Ok(Self::new(serde_json::from_value(value)?));
        }
        if value.get("templates").is_none() {
            return Ok(Self::new(vec![serde_json::from_value(value)?]));
        }
        let file: TemplateFile = serde_json::from_value(value)?;
        if major(&file.version) != major(FILE_FORMAT_VERSION) {
            return Err(StoreError::UnsupportedVersion {
                found: file.version,
                expected: FILE_FORMAT_VERSION.to_string(),
            });
        }
        Ok(file)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }
        std::fs::write(path, json).map_err(|e| io_error(path, e))?;
        tracing::info!("Saved {} template(s) to {}", self.templates.len(), path.display());
        Ok(())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
        let file = Self::from_json(&content)?;
        tracing::debug!("Loaded {} template(s) from {}", file.templates.len(), path.display());
        Ok(file)
    }
}

fn major(version: &str) -> &str {
    version.split('.').next().unwrap_or(version)
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Read product data from a JSON file.
pub fn load_label_data(path: impl AsRef<Path>) -> Result<LabelData, StoreError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    let mut data: LabelData = serde_json::from_str(&content)?;
    if data.net_weight.is_empty() {
        data.refresh_net_weight();
    }
    Ok(data)
}

/// Template library backed by a JSON file.
///
/// Only user templates are written; built-ins are restored on load.
#[derive(Debug)]
pub struct JsonTemplateStore {
    path: PathBuf,
    library: TemplateLibrary,
}

impl JsonTemplateStore {
    /// Open a store, starting from the built-ins when the file is missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let library = if path.exists() {
            TemplateLibrary::from_templates(TemplateFile::load_from_file(&path)?.templates)
        } else {
            tracing::debug!("No template file at {}, starting fresh", path.display());
            TemplateLibrary::new()
        };
        Ok(Self { path, library })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    /// Apply a library change and write the file.
    ///
    /// The change is kept only when both the change and the write succeed.
    pub fn update<T>(
        &mut self,
        f: impl FnOnce(&mut TemplateLibrary) -> labelkit_core::Result<T>,
    ) -> labelkit_core::Result<T> {
        let mut next = self.library.clone();
        let out = f(&mut next)?;
        Self::write(&self.path, &next)?;
        self.library = next;
        Ok(out)
    }

    /// Write user templates to disk.
    pub fn flush(&self) -> Result<(), StoreError> {
        Self::write(&self.path, &self.library)
    }

    fn write(path: &Path, library: &TemplateLibrary) -> Result<(), StoreError> {
        TemplateFile::new(library.user_templates().cloned().collect()).save_to_file(path)
    }
}

impl TemplateStore for JsonTemplateStore {
    fn save_template(&mut self, template: &LabelTemplate) -> labelkit_core::Result<()> {
        self.update(|library| library.save(template.clone()))
    }

    fn load_template(&self, id: &str) -> labelkit_core::Result<LabelTemplate> {
        self.library
            .get(id)
            .cloned()
            .ok_or_else(|| TemplateError::NotFound { id: id.to_string() }.into())
    }
}
