//! Layout elements placed on a label canvas.

use super::label_data::{DataBindingKey, Script, TextDirection};
use crate::geometry::Rect;
use labelkit_core::constants::{DEFAULT_ARABIC_FONT, DEFAULT_LATIN_FONT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque element identifier, unique and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// A fresh random id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Element type tag; fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Logo,
    Line,
    Barcode,
    Qrcode,
}

impl ElementKind {
    pub const ALL: [ElementKind; 5] = [
        Self::Text,
        Self::Logo,
        Self::Line,
        Self::Barcode,
        Self::Qrcode,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Logo => "logo",
            Self::Line => "line",
            Self::Barcode => "barcode",
            Self::Qrcode => "qrcode",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a text element's words come from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TextSource {
    /// Literal text typed into the template.
    Static(String),
    /// A product data field resolved at render time.
    Bound(DataBindingKey),
}

impl TextSource {
    pub fn binding(&self) -> Option<DataBindingKey> {
        match self {
            Self::Bound(key) => Some(*key),
            Self::Static(_) => None,
        }
    }

    /// Script of the text: the bound field's declared script, Latin for static text.
    pub fn script(&self) -> Script {
        self.binding().map(DataBindingKey::script).unwrap_or_default()
    }
}

impl Default for TextSource {
    fn default() -> Self {
        Self::Static("New Text".to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VerticalAlign {
    /// CSS flexbox `justify-content` value for a column layout.
    pub fn as_flex(self) -> &'static str {
        match self {
            Self::Top => "flex-start",
            Self::Middle => "center",
            Self::Bottom => "flex-end",
        }
    }
}

/// CSS numeric font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    #[serde(rename = "400")]
    Regular,
    #[serde(rename = "500")]
    Medium,
    #[serde(rename = "600")]
    SemiBold,
    #[serde(rename = "700")]
    Bold,
    #[serde(rename = "900")]
    Black,
}

impl FontWeight {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Regular => "400",
            Self::Medium => "500",
            Self::SemiBold => "600",
            Self::Bold => "700",
            Self::Black => "900",
        }
    }
}

/// Primary style of a text element.
///
/// `font_size` is in label units: one unit is one pixel at the designer's
/// reference scale, and hosts scale it with their own pixels-per-mm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub text_align: TextAlign,
    pub vertical_align: VerticalAlign,
    pub color: String,
    pub is_uppercase: bool,
    /// Letter spacing in em.
    pub tracking: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Montserrat".to_string(),
            font_size: 8.0,
            font_weight: FontWeight::Regular,
            text_align: TextAlign::Left,
            vertical_align: VerticalAlign::Top,
            color: "#000000".to_string(),
            is_uppercase: false,
            tracking: 0.0,
        }
    }
}

/// Overrides applied when the resolved text is in the secondary script.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
}

/// Per-script styling: the primary style plus an optional secondary override.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptStyles {
    #[serde(default)]
    pub default: TextStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<StyleOverride>,
}

/// Style after script selection.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveStyle<'a> {
    pub base: &'a TextStyle,
    pub font_family: &'a str,
    pub font_weight: FontWeight,
    pub direction: TextDirection,
}

/// Text element properties.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "TextPropsRepr", into = "TextPropsRepr")]
pub struct TextProps {
    pub source: TextSource,
    pub style_by_script: ScriptStyles,
    /// User override of the flow direction; `None` follows the script.
    pub direction: Option<TextDirection>,
}

impl TextProps {
    pub fn bound(key: DataBindingKey) -> Self {
        Self {
            source: TextSource::Bound(key),
            ..Self::default()
        }
    }

    pub fn static_text(text: impl Into<String>) -> Self {
        Self {
            source: TextSource::Static(text.into()),
            ..Self::default()
        }
    }

    /// Style to paint with, selected by the source's declared script.
    pub fn effective_style(&self) -> EffectiveStyle<'_> {
        let script = self.source.script();
        let base = &self.style_by_script.default;
        let mut font_family = base.font_family.as_str();
        let mut font_weight = base.font_weight;

        if script.is_secondary() {
            let secondary = self.style_by_script.secondary.as_ref();
            font_family = secondary
                .and_then(|s| s.font_family.as_deref())
                .unwrap_or(DEFAULT_ARABIC_FONT);
            font_weight = secondary
                .and_then(|s| s.font_weight)
                .unwrap_or(base.font_weight);
        } else if font_family.trim().is_empty() {
            font_family = DEFAULT_LATIN_FONT;
        }

        EffectiveStyle {
            base,
            font_family,
            font_weight,
            direction: self.direction.unwrap_or_else(|| script.direction()),
        }
    }
}

/// Wire form of [`TextProps`]: `dataBinding` and `content` side by side.
///
/// When both are present the binding wins.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextPropsRepr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data_binding: Option<DataBindingKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default)]
    style_by_script: ScriptStyles,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    direction: Option<TextDirection>,
}

impl From<TextPropsRepr> for TextProps {
    fn from(repr: TextPropsRepr) -> Self {
        let source = match (repr.data_binding, repr.content) {
            (Some(key), _) => TextSource::Bound(key),
            (None, content) => TextSource::Static(content.unwrap_or_default()),
        };
        Self {
            source,
            style_by_script: repr.style_by_script,
            direction: repr.direction,
        }
    }
}

impl From<TextProps> for TextPropsRepr {
    fn from(props: TextProps) -> Self {
        let (data_binding, content) = match props.source {
            TextSource::Bound(key) => (Some(key), None),
            TextSource::Static(text) => (None, Some(text)),
        };
        Self {
            data_binding,
            content,
            style_by_script: props.style_by_script,
            direction: props.direction,
        }
    }
}

/// Horizontal rule properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineProps {
    /// Stroke thickness in label units.
    pub stroke_width: f64,
    pub stroke_color: String,
}

impl Default for LineProps {
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            stroke_color: "#000000".to_string(),
        }
    }
}

/// Fields a barcode or QR code may encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CodeBinding {
    #[default]
    Sku,
}

impl CodeBinding {
    pub fn key(self) -> DataBindingKey {
        match self {
            Self::Sku => DataBindingKey::Sku,
        }
    }
}

/// Barcode / QR code properties.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeProps {
    pub code_data_binding: CodeBinding,
}

/// Type-specific element content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementBody {
    Text(TextProps),
    Logo,
    Line(LineProps),
    Barcode(CodeProps),
    Qrcode(CodeProps),
}

impl ElementBody {
    /// Default body for a new element of `kind`.
    pub fn for_kind(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Text => Self::Text(TextProps::default()),
            ElementKind::Logo => Self::Logo,
            ElementKind::Line => Self::Line(LineProps::default()),
            ElementKind::Barcode => Self::Barcode(CodeProps::default()),
            ElementKind::Qrcode => Self::Qrcode(CodeProps::default()),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Text(_) => ElementKind::Text,
            Self::Logo => ElementKind::Logo,
            Self::Line(_) => ElementKind::Line,
            Self::Barcode(_) => ElementKind::Barcode,
            Self::Qrcode(_) => ElementKind::Qrcode,
        }
    }
}

/// One placed object on a template canvas.
///
/// Geometry is in percent of the canvas; `rotation` is in degrees with no
/// range restriction. Paint order is the element's position in its
/// template, not a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutElement {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(flatten)]
    pub body: ElementBody,
}

impl LayoutElement {
    /// A new element of `kind` with a fresh id at the default position.
    pub fn new(kind: ElementKind) -> Self {
        let (width, height) = match kind {
            ElementKind::Text | ElementKind::Logo => (25.0, 15.0),
            ElementKind::Line => (30.0, 0.5),
            ElementKind::Barcode => (30.0, 20.0),
            ElementKind::Qrcode => (15.0, 30.0),
        };
        Self {
            id: ElementId::generate(),
            x: 10.0,
            y: 10.0,
            width,
            height,
            rotation: 0.0,
            body: ElementBody::for_kind(kind),
        }
    }

    /// Builder-style body replacement; the body must keep the same kind.
    pub fn with_text(mut self, props: TextProps) -> Self {
        if let ElementBody::Text(existing) = &mut self.body {
            *existing = props;
        }
        self
    }

    /// Builder-style geometry setter.
    pub fn at(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.body.kind()
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.x = rect.x;
        self.y = rect.y;
        self.width = rect.width;
        self.height = rect.height;
    }

    pub fn text(&self) -> Option<&TextProps> {
        match &self.body {
            ElementBody::Text(props) => Some(props),
            _ => None,
        }
    }

    pub fn text_mut(&mut self) -> Option<&mut TextProps> {
        match &mut self.body {
            ElementBody::Text(props) => Some(props),
            _ => None,
        }
    }

    /// Copy with a fresh id, offset by `offset` percent on both axes.
    pub fn duplicate(&self, offset: f64) -> Self {
        Self {
            id: ElementId::generate(),
            x: self.x + offset,
            y: self.y + offset,
            ..self.clone()
        }
    }
}
