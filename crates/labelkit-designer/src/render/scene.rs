//! Backend-neutral description of a rendered label.
//!
//! A [`LabelScene`] holds one [`SceneItem`] per element in paint order with
//! everything resolved: bound text filled in, symbols encoded, logos
//! swapped for placeholders when missing. Drawing backends only translate
//! items into their own primitives.

use super::binding::{ContentMode, TextVisual};
use super::symbols::{encode_code128, encode_qr, SymbolMatrix};
use crate::geometry::Rect;
use crate::model::{ElementBody, ElementId, ElementKind, LabelData, LabelTemplate, LayoutElement};
use labelkit_core::SymbolError;

pub const NO_SKU_PLACEHOLDER: &str = "NO SKU";
pub const INVALID_CODE_PLACEHOLDER: &str = "INVALID CODE";
pub const LOGO_PLACEHOLDER: &str = "LOGO";

/// What a scene item draws.
#[derive(Debug, Clone, PartialEq)]
pub enum Visual {
    Text(TextVisual),
    /// A raster or vector image reference, fitted into the box.
    Image { href: String },
    /// A dashed frame with a short caption.
    Placeholder { label: String },
    /// A horizontal rule through the middle of the box.
    Rule { stroke_width: f64, color: String },
    Symbol(SymbolMatrix),
}

/// One element, resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub element_id: ElementId,
    pub kind: ElementKind,
    /// Box in percent of the canvas.
    pub rect: Rect,
    /// Degrees clockwise about the box center.
    pub rotation: f64,
    pub visual: Visual,
}

/// A label ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelScene {
    pub width_mm: f64,
    pub height_mm: f64,
    pub items: Vec<SceneItem>,
}

impl LabelScene {
    /// Resolve a template against product data.
    pub fn build(template: &LabelTemplate, data: &LabelData) -> Self {
        Self::with_mode(template, ContentMode::Data(data))
    }

    /// Resolve a template with `{key}` placeholders in place of data.
    pub fn placeholders(template: &LabelTemplate) -> Self {
        Self::with_mode(template, ContentMode::Placeholders)
    }

    pub fn with_mode(template: &LabelTemplate, mode: ContentMode<'_>) -> Self {
        Self {
            width_mm: template.width_mm,
            height_mm: template.height_mm,
            items: template
                .elements()
                .iter()
                .map(|element| SceneItem {
                    element_id: element.id.clone(),
                    kind: element.kind(),
                    rect: element.rect(),
                    rotation: element.rotation,
                    visual: resolve_visual(element, mode),
                })
                .collect(),
        }
    }

    pub fn item(&self, id: &ElementId) -> Option<&SceneItem> {
        self.items.iter().find(|item| &item.element_id == id)
    }

    /// Text of every text item, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match &item.visual {
            Visual::Text(text) => Some(text.text.as_str()),
            _ => None,
        })
    }
}

fn resolve_visual(element: &LayoutElement, mode: ContentMode<'_>) -> Visual {
    match &element.body {
        ElementBody::Text(props) => Visual::Text(TextVisual::resolve(props, mode)),
        ElementBody::Logo => match mode {
            ContentMode::Data(data) => data.logo().map_or_else(
                || placeholder(LOGO_PLACEHOLDER),
                |href| Visual::Image {
                    href: href.to_string(),
                },
            ),
            ContentMode::Placeholders => placeholder(LOGO_PLACEHOLDER),
        },
        ElementBody::Line(props) => Visual::Rule {
            stroke_width: props.stroke_width,
            color: props.stroke_color.clone(),
        },
        ElementBody::Barcode(props) | ElementBody::Qrcode(props) => {
            let key = props.code_data_binding.key();
            let ContentMode::Data(data) = mode else {
                return placeholder(&format!("{{{}}}", key));
            };
            let value = data.get(key);
            let encoded = if element.kind() == ElementKind::Barcode {
                encode_code128(value)
            } else {
                encode_qr(value)
            };
            match encoded {
                Ok(matrix) => Visual::Symbol(matrix),
                Err(SymbolError::Empty) => placeholder(NO_SKU_PLACEHOLDER),
                Err(e) => {
                    tracing::warn!("Element {}: {}", element.id, e);
                    placeholder(INVALID_CODE_PLACEHOLDER)
                }
            }
        }
    }
}

fn placeholder(label: &str) -> Visual {
    Visual::Placeholder {
        label: label.to_string(),
    }
}
