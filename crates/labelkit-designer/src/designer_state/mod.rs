//! Designer state manager for UI integration.
//!
//! Binds pointer gestures, keyboard shortcuts and property edits to the
//! template document through the undo history. This module is split into
//! submodules:
//! - `gestures`: pointer down / move / up and gesture cancel
//! - `editing`: element and template edits from toolbars and the properties panel
//! - `keyboard`: shortcut handling
//! - `preview`: live preview with preset data and canvas rendering
//! - `file_io`: save/load operations

mod editing;
mod file_io;
mod gestures;
mod keyboard;
mod preview;

pub use editing::{ElementPatch, PropertiesPanel};
pub use keyboard::{Key, KeyAction, KeyModifiers};

use crate::history::History;
use crate::interaction::snapping::Guides;
use crate::interaction::{GestureController, GestureSettings};
use crate::model::{ElementId, LabelData, LabelTemplate, LayoutElement, PresetProduct};
use crate::viewport::Viewport;
use labelkit_core::constants::{
    DEFAULT_HISTORY_DEPTH, DEFAULT_SNAP_THRESHOLD_PX, DUPLICATE_OFFSET_PCT, MAX_ZOOM,
    MIN_ELEMENT_SIZE_PCT, MIN_ZOOM, ZOOM_STEP,
};
use std::path::PathBuf;

/// Behaviour knobs for a designer session.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignerOptions {
    pub snap_enabled: bool,
    pub snap_threshold_px: f64,
    pub history_depth: usize,
    pub duplicate_offset_pct: f64,
    pub min_element_size_pct: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_step: f64,
}

impl Default for DesignerOptions {
    fn default() -> Self {
        Self {
            snap_enabled: true,
            snap_threshold_px: DEFAULT_SNAP_THRESHOLD_PX,
            history_depth: DEFAULT_HISTORY_DEPTH,
            duplicate_offset_pct: DUPLICATE_OFFSET_PCT,
            min_element_size_pct: MIN_ELEMENT_SIZE_PCT,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: ZOOM_STEP,
        }
    }
}

impl DesignerOptions {
    pub fn gesture_settings(&self) -> GestureSettings {
        GestureSettings {
            snap_enabled: self.snap_enabled,
            snap_threshold_px: self.snap_threshold_px,
            min_size_pct: self.min_element_size_pct,
        }
    }
}

/// One designer session editing one template.
#[derive(Debug, Clone)]
pub struct DesignerState {
    history: History<LabelTemplate>,
    selected: Option<ElementId>,
    gestures: GestureController,
    /// Document as it was at pointer-down, restored before the final commit.
    gesture_origin: Option<LabelTemplate>,
    guides: Guides,
    viewport: Viewport,
    options: DesignerOptions,
    presets: Vec<PresetProduct>,
    preview_preset: Option<String>,
    preview_base: LabelData,
    close_requested: bool,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
}

impl DesignerState {
    /// Start a session on `template`.
    pub fn new(template: LabelTemplate, options: DesignerOptions) -> Self {
        let viewport = Viewport::new(template.width_mm, template.height_mm).with_zoom_limits(
            options.min_zoom,
            options.max_zoom,
            options.zoom_step,
        );
        Self {
            history: History::new(template, options.history_depth),
            selected: None,
            gestures: GestureController::new(),
            gesture_origin: None,
            guides: Guides::new(),
            viewport,
            options,
            presets: Vec::new(),
            preview_preset: None,
            preview_base: LabelData::default(),
            close_requested: false,
            current_file_path: None,
            is_modified: false,
        }
    }

    /// The current document.
    pub fn template(&self) -> &LabelTemplate {
        self.history.state()
    }

    pub fn options(&self) -> &DesignerOptions {
        &self.options
    }

    pub fn history(&self) -> &History<LabelTemplate> {
        &self.history
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    pub fn reset_zoom(&mut self) {
        self.viewport.reset_zoom();
    }

    /// Set the zoom; values outside the configured limits are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.viewport.set_zoom(zoom);
    }

    /// Zoom to fit the label into a host area.
    pub fn fit_to_area(&mut self, width_px: f64, height_px: f64, padding_px: f64) {
        self.viewport.fit_to_area(width_px, height_px, padding_px);
    }

    pub fn selected_id(&self) -> Option<&ElementId> {
        self.selected.as_ref()
    }

    pub fn selected_element(&self) -> Option<&LayoutElement> {
        self.selected.as_ref().and_then(|id| self.template().element(id))
    }

    /// Select an element. Unknown ids clear the selection.
    pub fn select(&mut self, id: &ElementId) {
        self.selected = self.template().contains(id).then(|| id.clone());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Snap guides of the running move gesture.
    pub fn guides(&self) -> &Guides {
        &self.guides
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) -> bool {
        if !self.gestures.is_idle() {
            return false;
        }
        let moved = self.history.undo();
        if moved {
            tracing::debug!(cursor = self.history.cursor(), "undo");
            self.after_document_change();
        }
        moved
    }

    pub fn redo(&mut self) -> bool {
        if !self.gestures.is_idle() {
            return false;
        }
        let moved = self.history.redo();
        if moved {
            tracing::debug!(cursor = self.history.cursor(), "redo");
            self.after_document_change();
        }
        moved
    }

    /// Whether Escape asked the host to close the designer.
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Read and reset the close request.
    pub fn take_close_request(&mut self) -> bool {
        std::mem::take(&mut self.close_requested)
    }

    /// Apply an edit to a copy of the document and commit it when it
    /// changed anything.
    pub(crate) fn edit(&mut self, f: impl FnOnce(&mut LabelTemplate) -> bool) -> bool {
        if !self.gestures.is_idle() {
            return false;
        }
        let mut next = self.template().clone();
        if !f(&mut next) || &next == self.template() {
            return false;
        }
        self.history.commit(next);
        self.is_modified = true;
        self.after_document_change();
        true
    }

    /// Keep selection and viewport consistent with the current document.
    fn after_document_change(&mut self) {
        if let Some(id) = &self.selected {
            if !self.template().contains(id) {
                self.selected = None;
            }
        }
        let (w, h) = (self.template().width_mm, self.template().height_mm);
        self.viewport.set_label_size(w, h);
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new(LabelTemplate::default(), DesignerOptions::default())
    }
}
