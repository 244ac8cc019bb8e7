//! Render / binding engine.
//!
//! Templates are resolved against [`LabelData`](crate::model::LabelData)
//! into a [`LabelScene`], which is then emitted as SVG for the screen or as
//! an HTML print sheet with repeated copies.

pub mod binding;
pub mod print;
pub mod scene;
pub mod svg;
pub mod symbols;

pub use binding::{display_text, resolve_content, ContentMode, TextVisual};
pub use print::{render_print_document, Placement, PrintLayout, PrintOptions};
pub use scene::{LabelScene, SceneItem, Visual};
pub use svg::{escape_xml, render_editor_svg, render_label_svg, EditorOverlay};
pub use symbols::{encode_code128, encode_qr, SymbolMatrix};
