//! Live preview and canvas rendering for designer state.

use super::DesignerState;
use crate::model::{LabelData, PresetProduct};
use crate::render::{render_editor_svg, EditorOverlay, LabelScene};

impl DesignerState {
    /// Products offered in the preview selector.
    pub fn presets(&self) -> &[PresetProduct] {
        &self.presets
    }

    /// Replace the preview products. A vanished active preset ends preview.
    pub fn set_presets(&mut self, presets: Vec<PresetProduct>) {
        self.presets = presets;
        if self.preview_preset().is_none() {
            self.preview_preset = None;
        }
    }

    /// Data the preset is layered on (dates, brand fields).
    pub fn set_preview_base(&mut self, data: LabelData) {
        self.preview_base = data;
    }

    /// Start previewing a preset by id, or stop with `None`. Unknown ids
    /// stop the preview. Returns whether preview is active.
    pub fn set_preview_preset(&mut self, preset_id: Option<&str>) -> bool {
        self.preview_preset = preset_id
            .filter(|id| self.presets.iter().any(|p| p.id == *id))
            .map(str::to_string);
        tracing::debug!(preset = ?self.preview_preset, "preview");
        self.is_previewing()
    }

    pub fn preview_preset(&self) -> Option<&PresetProduct> {
        let id = self.preview_preset.as_deref()?;
        self.presets.iter().find(|p| p.id == id)
    }

    pub fn is_previewing(&self) -> bool {
        self.preview_preset().is_some()
    }

    /// Data shown in preview mode.
    pub fn preview_data(&self) -> Option<LabelData> {
        self.preview_preset()
            .map(|preset| preset.preview_data(&self.preview_base))
    }

    /// Scene of the current document: preset data in preview mode,
    /// `{key}` placeholders otherwise.
    pub fn scene(&self) -> LabelScene {
        match self.preview_data() {
            Some(data) => LabelScene::build(self.template(), &data),
            None => LabelScene::placeholders(self.template()),
        }
    }

    /// The designer canvas as SVG at the current zoom.
    pub fn render_canvas_svg(&self) -> String {
        let overlay = EditorOverlay {
            selected: self.selected.as_ref(),
            guides: &self.guides,
            preview: self.is_previewing(),
        };
        render_editor_svg(&self.scene(), &overlay, &self.viewport)
    }
}
