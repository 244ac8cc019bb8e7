//! Template document model: product data, elements and templates.

mod element;
mod label_data;
mod preset;
mod template;

pub use element::{
    CodeBinding, CodeProps, EffectiveStyle, ElementBody, ElementId, ElementKind, FontWeight,
    LayoutElement, LineProps, ScriptStyles, StyleOverride, TextAlign, TextProps, TextSource,
    TextStyle, VerticalAlign,
};
pub use label_data::{net_weight, DataBindingKey, LabelData, Script, TextDirection};
pub use preset::{expiry_date, seed_presets, set_production_date, PresetProduct};
pub use template::{LabelTemplate, ReorderDirection};
