//! File I/O operations (save, load, new) for designer state.

use super::DesignerState;
use crate::model::LabelTemplate;
use crate::serialization::TemplateFile;
use crate::templates::TemplateStore;
use anyhow::Context;
use std::path::Path;

impl DesignerState {
    /// Hand the template to a store. Clears the modified flag on success.
    pub fn save(&mut self, store: &mut dyn TemplateStore) -> labelkit_core::Result<()> {
        store.save_template(self.template())?;
        self.is_modified = false;
        tracing::info!("Saved template '{}'", self.template().name);
        Ok(())
    }

    /// Save the template to its own file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let mut template = self.template().clone();
        template.touch();
        TemplateFile::new(vec![template])
            .save_to_file(path)
            .with_context(|| format!("Failed to save template to {}", path.display()))?;

        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Load the first template of a file and start over on it.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = TemplateFile::load_from_file(path)
            .with_context(|| format!("Failed to load template from {}", path.display()))?;
        let template = file
            .templates
            .into_iter()
            .next()
            .with_context(|| format!("No template in {}", path.display()))?;

        self.open_template(template);
        self.current_file_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Replace the document and clear history, selection and gestures.
    pub fn open_template(&mut self, template: LabelTemplate) {
        tracing::info!("Opened template '{}'", template.name);
        self.gestures.end();
        self.gesture_origin = None;
        self.guides.clear();
        self.selected = None;
        self.history.reset(template);
        self.current_file_path = None;
        self.is_modified = false;
        self.after_document_change();
    }

    /// Start a fresh default template.
    pub fn new_template(&mut self) {
        self.open_template(LabelTemplate::default());
    }

    /// Name for a title bar, with `*` when unsaved.
    pub fn display_name(&self) -> String {
        let name = &self.template().name;
        if self.is_modified {
            format!("{}*", name)
        } else {
            name.clone()
        }
    }
}
