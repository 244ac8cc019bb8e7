//! Text content resolution against product data.

use crate::model::{
    FontWeight, LabelData, TextAlign, TextDirection, TextProps, TextSource, VerticalAlign,
};

/// How bound text is filled in.
#[derive(Debug, Clone, Copy)]
pub enum ContentMode<'a> {
    /// Real product data
    Data(&'a LabelData),
    /// `{bindingKey}` placeholders, as shown while editing
    Placeholders,
}

/// Raw content for a text source: the bound field when bound (missing data
/// is empty), the static text otherwise.
pub fn resolve_content<'a>(source: &'a TextSource, data: &'a LabelData) -> &'a str {
    match source {
        TextSource::Bound(key) => data.get(*key),
        TextSource::Static(text) => text,
    }
}

/// Text to draw: resolved content with the uppercase transform applied.
pub fn display_text(props: &TextProps, mode: ContentMode<'_>) -> String {
    let content = match (mode, &props.source) {
        (ContentMode::Data(data), source) => resolve_content(source, data).to_string(),
        (ContentMode::Placeholders, TextSource::Bound(key)) => return format!("{{{}}}", key),
        (ContentMode::Placeholders, TextSource::Static(text)) => text.clone(),
    };
    if props.style_by_script.default.is_uppercase {
        content.to_uppercase()
    } else {
        content
    }
}

/// Fully resolved text run, ready for a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct TextVisual {
    pub text: String,
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub text_align: TextAlign,
    pub vertical_align: VerticalAlign,
    pub color: String,
    pub tracking: f64,
    pub direction: TextDirection,
}

impl TextVisual {
    pub fn resolve(props: &TextProps, mode: ContentMode<'_>) -> Self {
        let style = props.effective_style();
        Self {
            text: display_text(props, mode),
            font_family: style.font_family.to_string(),
            font_size: style.base.font_size,
            font_weight: style.font_weight,
            text_align: style.base.text_align,
            vertical_align: style.base.vertical_align,
            color: style.base.color.clone(),
            tracking: style.base.tracking,
            direction: style.direction,
        }
    }
}
