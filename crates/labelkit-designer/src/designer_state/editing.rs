//! Element and template edits for designer state.
//!
//! Every edit here is one committing history step. Edits that change
//! nothing (unknown id, a value equal to the current one) add no step.

use super::DesignerState;
use crate::model::{
    CodeBinding, DataBindingKey, ElementBody, ElementId, ElementKind, FontWeight, LayoutElement,
    ReorderDirection, StyleOverride, TextAlign, TextDirection, TextSource, VerticalAlign,
};

/// One field edit from the properties panel.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementPatch {
    X(f64),
    Y(f64),
    Width(f64),
    Height(f64),
    Rotation(f64),
    /// Static text; replaces a binding.
    Content(String),
    /// Bind to a field, or unbind to empty static text.
    Binding(Option<DataBindingKey>),
    FontFamily(String),
    FontSize(f64),
    FontWeight(FontWeight),
    TextAlign(TextAlign),
    VerticalAlign(VerticalAlign),
    Color(String),
    Uppercase(bool),
    Tracking(f64),
    SecondaryFontFamily(Option<String>),
    SecondaryFontWeight(Option<FontWeight>),
    Direction(Option<TextDirection>),
    StrokeWidth(f64),
    StrokeColor(String),
    CodeBinding(CodeBinding),
}

impl ElementPatch {
    /// Apply to an element. Patches that do not fit the element's kind
    /// leave it untouched and return `false`.
    pub fn apply(self, element: &mut LayoutElement, min_size: f64) -> bool {
        match self {
            Self::X(v) => element.x = v,
            Self::Y(v) => element.y = v,
            Self::Width(v) => element.width = v.max(min_size),
            Self::Height(v) => element.height = v.max(min_size),
            Self::Rotation(v) => element.rotation = v,
            Self::StrokeWidth(v) => match &mut element.body {
                ElementBody::Line(line) => line.stroke_width = v.max(0.0),
                _ => return false,
            },
            Self::StrokeColor(v) => match &mut element.body {
                ElementBody::Line(line) => line.stroke_color = v,
                _ => return false,
            },
            Self::CodeBinding(v) => match &mut element.body {
                ElementBody::Barcode(code) | ElementBody::Qrcode(code) => code.code_data_binding = v,
                _ => return false,
            },
            text_patch => {
                let Some(props) = element.text_mut() else {
                    return false;
                };
                let style = &mut props.style_by_script.default;
                match text_patch {
                    Self::Content(v) => props.source = TextSource::Static(v),
                    Self::Binding(Some(key)) => props.source = TextSource::Bound(key),
                    Self::Binding(None) => {
                        if props.source.binding().is_some() {
                            props.source = TextSource::Static(String::new());
                        }
                    }
                    Self::FontFamily(v) => style.font_family = v,
                    Self::FontSize(v) => style.font_size = v.max(0.0),
                    Self::FontWeight(v) => style.font_weight = v,
                    Self::TextAlign(v) => style.text_align = v,
                    Self::VerticalAlign(v) => style.vertical_align = v,
                    Self::Color(v) => style.color = v,
                    Self::Uppercase(v) => style.is_uppercase = v,
                    Self::Tracking(v) => style.tracking = v,
                    Self::SecondaryFontFamily(v) => {
                        props
                            .style_by_script
                            .secondary
                            .get_or_insert_with(StyleOverride::default)
                            .font_family = v;
                    }
                    Self::SecondaryFontWeight(v) => {
                        props
                            .style_by_script
                            .secondary
                            .get_or_insert_with(StyleOverride::default)
                            .font_weight = v;
                    }
                    Self::Direction(v) => props.direction = v,
                    _ => return false,
                }
            }
        }
        true
    }
}

/// Properties panel model for the selected element.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertiesPanel {
    pub element: LayoutElement,
    /// Paint position, 0 at the bottom.
    pub z_index: usize,
    pub layer_count: usize,
    /// Fields offered in the binding dropdown.
    pub binding_options: &'static [DataBindingKey],
}

impl PropertiesPanel {
    pub fn can_bring_forward(&self) -> bool {
        self.z_index + 1 < self.layer_count
    }

    pub fn can_send_backward(&self) -> bool {
        self.z_index > 0
    }
}

impl DesignerState {
    /// Add an element on top, select it and return its id.
    pub fn add_element(&mut self, kind: ElementKind) -> ElementId {
        let element = LayoutElement::new(kind);
        let id = element.id.clone();
        self.edit(|t| {
            t.push_element(element);
            true
        });
        self.selected = self.template().contains(&id).then(|| id.clone());
        id
    }

    /// Remove an element; clears the selection if it was selected.
    pub fn delete_element(&mut self, id: &ElementId) -> bool {
        self.edit(|t| t.delete_element(id))
    }

    pub fn delete_selected(&mut self) -> bool {
        match self.selected.clone() {
            Some(id) => self.delete_element(&id),
            None => false,
        }
    }

    /// Duplicate an element on top and select the copy.
    pub fn duplicate_element(&mut self, id: &ElementId) -> Option<ElementId> {
        let offset = self.options.duplicate_offset_pct;
        let mut copy_id = None;
        self.edit(|t| {
            copy_id = t.duplicate_element(id, offset);
            copy_id.is_some()
        });
        if let Some(copy) = &copy_id {
            self.selected = Some(copy.clone());
        }
        copy_id
    }

    pub fn duplicate_selected(&mut self) -> Option<ElementId> {
        let id = self.selected.clone()?;
        self.duplicate_element(&id)
    }

    pub fn reorder_element(&mut self, id: &ElementId, direction: ReorderDirection) -> bool {
        self.edit(|t| t.reorder(id, direction))
    }

    pub fn reorder_selected(&mut self, direction: ReorderDirection) -> bool {
        match self.selected.clone() {
            Some(id) => self.reorder_element(&id, direction),
            None => false,
        }
    }

    /// Apply a property edit to an element.
    pub fn update_element(&mut self, id: &ElementId, patch: ElementPatch) -> bool {
        let min_size = self.options.min_element_size_pct;
        self.edit(|t| {
            let mut applied = false;
            t.update_element(id, |e| applied = patch.apply(e, min_size));
            applied
        })
    }

    pub fn update_selected(&mut self, patch: ElementPatch) -> bool {
        match self.selected.clone() {
            Some(id) => self.update_element(&id, patch),
            None => false,
        }
    }

    /// Rename the template. Blank names are ignored.
    pub fn rename_template(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.edit(|t| {
            t.name = name.to_string();
            true
        })
    }

    /// Change the physical canvas size. Non-positive or non-finite sizes
    /// are ignored; element geometry stays in percent.
    pub fn resize_template(&mut self, width_mm: f64, height_mm: f64) -> bool {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width_mm) || !valid(height_mm) {
            return false;
        }
        self.edit(|t| {
            t.width_mm = width_mm;
            t.height_mm = height_mm;
            true
        })
    }

    /// Panel model for the current selection.
    pub fn properties(&self) -> Option<PropertiesPanel> {
        let element = self.selected_element()?;
        Some(PropertiesPanel {
            z_index: self.template().z_index_of(&element.id)?,
            layer_count: self.template().len(),
            element: element.clone(),
            binding_options: &DataBindingKey::ALL,
        })
    }
}
