//! Shared defaults for the label designer.
//!
//! Element geometry is stored in percent of the canvas; the values below
//! are in the unit named by their suffix.

/// Default label width for new templates.
pub const DEFAULT_LABEL_WIDTH_MM: f64 = 100.0;

/// Default label height for new templates.
pub const DEFAULT_LABEL_HEIGHT_MM: f64 = 50.0;

/// Name given to freshly created templates.
pub const DEFAULT_TEMPLATE_NAME: &str = "New Template";

/// Screen pixels per millimeter at zoom 1.0.
pub const REFERENCE_PX_PER_MM: f64 = 4.0;

/// Snap distance in screen pixels at zoom 1.0.
pub const DEFAULT_SNAP_THRESHOLD_PX: f64 = 5.0;

/// Offset applied to both axes when duplicating an element.
pub const DUPLICATE_OFFSET_PCT: f64 = 2.0;

/// Smallest width/height a resize gesture may produce.
pub const MIN_ELEMENT_SIZE_PCT: f64 = 0.5;

/// Maximum number of history snapshots kept before the oldest is dropped.
pub const DEFAULT_HISTORY_DEPTH: usize = 200;

/// Zoom limits for the designer view.
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 8.0;
pub const ZOOM_STEP: f64 = 1.2;

/// Handle hit radius in screen pixels.
pub const HANDLE_RADIUS_PX: f64 = 6.0;

/// Distance of the rotation handle above the element's top edge, in screen pixels.
pub const ROTATION_HANDLE_OFFSET_PX: f64 = 20.0;

/// A4 portrait page used for print sheets.
pub const A4_WIDTH_MM: f64 = 210.0;
pub const A4_HEIGHT_MM: f64 = 297.0;

/// Page margin around the print grid.
pub const PAGE_MARGIN_MM: f64 = 10.0;

/// Font family used for right-to-left (Arabic) text when none is set.
pub const DEFAULT_ARABIC_FONT: &str = "Noto Kufi Arabic";

/// Font family used for Latin text when none is set.
pub const DEFAULT_LATIN_FONT: &str = "Inter";
