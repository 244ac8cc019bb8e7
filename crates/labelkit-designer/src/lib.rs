//! # LabelKit Designer
//!
//! Visual layout editor for product labels. Templates are made of
//! positioned elements (text, logo, rule, barcode, QR code) placed in
//! percent of the label, bound to product data and rendered for the
//! screen or onto a print sheet.
//!
//! ## Core Components
//!
//! ### Document
//! - **Model**: Templates, layout elements, product data and preview presets
//! - **Templates**: Built-in and user template library
//! - **Serialization**: JSON template files and the on-disk store
//!
//! ### Editing
//! - **Designer State**: One editing session; selection, gestures, shortcuts
//! - **Interaction**: Move / resize / rotate gestures with snapping guides
//! - **Hit Testing**: Handles and element bodies under the pointer
//! - **Viewport**: Zoom and pixel / percent conversion
//! - **History/Undo-Redo**: Whole-document snapshots with commit and replace
//!
//! ### Output
//! - **Render**: Data binding, barcode / QR encoding, SVG and print sheets
//!
//! ## Architecture
//!
//! ```text
//! DesignerState
//!   ├── History<LabelTemplate> (Undo/redo)
//!   ├── GestureController (Pointer gestures)
//!   │     └── Snapping (Alignment guides)
//!   ├── Viewport (Zoom)
//!   └── Preview (Preset data)
//!
//! LabelTemplate + LabelData
//!   └── LabelScene (Resolved visuals)
//!         ├── Editor / label SVG
//!         └── Print sheet (HTML)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use labelkit_designer::{DesignerState, ElementKind, ElementPatch, DataBindingKey};
//!
//! let mut state = DesignerState::default();
//! state.add_element(ElementKind::Text);
//! state.update_selected(ElementPatch::Binding(Some(DataBindingKey::ProductName)));
//!
//! let svg = state.render_canvas_svg();
//! ```

pub mod designer_state;
pub mod geometry;
pub mod hit_test;
pub mod history;
pub mod interaction;
pub mod model;
pub mod render;
pub mod serialization;
pub mod templates;
pub mod viewport;

pub use designer_state::{
    DesignerOptions, DesignerState, ElementPatch, Key, KeyAction, KeyModifiers, PropertiesPanel,
};
pub use geometry::{Corner, Point, Rect};
pub use hit_test::{hit_test, HitTarget};
pub use history::{DispatchMode, History};
pub use interaction::snapping::{Guide, GuideOrientation, Guides};
pub use interaction::{Gesture, GestureController, GestureFrame, GestureSettings};
pub use model::{
    seed_presets, CodeBinding, DataBindingKey, ElementBody, ElementId, ElementKind, FontWeight,
    LabelData, LabelTemplate, LayoutElement, PresetProduct, ReorderDirection, TextAlign,
    TextDirection, TextProps, TextSource, VerticalAlign,
};
pub use render::{
    render_editor_svg, render_label_svg, render_print_document, LabelScene, PrintLayout,
    PrintOptions,
};
pub use serialization::{load_label_data, JsonTemplateStore, TemplateFile};
pub use templates::{builtin_templates, TemplateLibrary, TemplateStore};
pub use viewport::Viewport;
