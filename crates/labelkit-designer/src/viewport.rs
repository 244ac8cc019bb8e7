//! Viewport and coordinate transformation for the label canvas.
//!
//! Handles conversion between pointer pixel coordinates (relative to the
//! canvas's top-left corner on screen) and percentage coordinates used by
//! element geometry. Zoom is purely a view transform: it changes how many
//! screen pixels a percent occupies and never touches stored geometry.

use std::fmt;

use crate::geometry::Point;
use labelkit_core::constants::{MAX_ZOOM, MIN_ZOOM, REFERENCE_PX_PER_MM, ZOOM_STEP};

/// Represents the canvas view: physical label size, base scale and zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    width_mm: f64,
    height_mm: f64,
    px_per_mm: f64,
    min_zoom: f64,
    max_zoom: f64,
    zoom_step: f64,
}

impl Viewport {
    /// Creates a viewport for a label of the given physical size at zoom 1.0.
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            zoom: 1.0,
            width_mm,
            height_mm,
            px_per_mm: REFERENCE_PX_PER_MM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: ZOOM_STEP,
        }
    }

    /// Overrides zoom limits and step; invalid limits are ignored.
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64, zoom_step: f64) -> Self {
        if min_zoom > 0.0 && max_zoom > min_zoom {
            self.min_zoom = min_zoom;
            self.max_zoom = max_zoom;
        }
        if zoom_step > 1.0 {
            self.zoom_step = zoom_step;
        }
        self.zoom = self.zoom.clamp(self.min_zoom, self.max_zoom);
        self
    }

    /// Updates the physical label size (template resize).
    pub fn set_label_size(&mut self, width_mm: f64, height_mm: f64) {
        self.width_mm = width_mm;
        self.height_mm = height_mm;
    }

    /// Canvas size in pixels at zoom 1.0.
    pub fn base_size_px(&self) -> (f64, f64) {
        (self.width_mm * self.px_per_mm, self.height_mm * self.px_per_mm)
    }

    /// Canvas size in screen pixels at the current zoom.
    pub fn screen_size_px(&self) -> (f64, f64) {
        let (w, h) = self.base_size_px();
        (w * self.zoom, h * self.zoom)
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level; values outside the limits are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom >= self.min_zoom && zoom <= self.max_zoom {
            self.zoom = zoom;
        }
    }

    /// Zooms in by one step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * self.zoom_step);
    }

    /// Zooms out by one step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / self.zoom_step);
    }

    /// Resets zoom to 1.0 (100%).
    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    /// Converts a screen pixel offset from the canvas origin to percent.
    ///
    /// ```text
    /// pct_x = pixel_x / (base_width_px * zoom) * 100
    /// ```
    pub fn pixel_to_percent(&self, pixel: Point) -> Point {
        let (w, h) = self.screen_size_px();
        Point::new(safe_div(pixel.x, w) * 100.0, safe_div(pixel.y, h) * 100.0)
    }

    /// Converts percent coordinates to a screen pixel offset.
    pub fn percent_to_pixel(&self, pct: Point) -> Point {
        let (w, h) = self.screen_size_px();
        Point::new(pct.x / 100.0 * w, pct.y / 100.0 * h)
    }

    /// A screen distance expressed in percent of width and of height.
    pub fn pixels_as_percent(&self, px: f64) -> (f64, f64) {
        let p = self.pixel_to_percent(Point::new(px, px));
        (p.x, p.y)
    }

    /// Fits the label into an area of the given pixel size with padding.
    ///
    /// `padding` is the fraction of the area reserved on each side (0.0 - 0.5).
    pub fn fit_to_area(&mut self, area_width_px: f64, area_height_px: f64, padding: f64) {
        let (w, h) = self.base_size_px();
        if w <= 0.0 || h <= 0.0 || area_width_px <= 0.0 || area_height_px <= 0.0 {
            return;
        }
        let padding_factor = (1.0 - padding.clamp(0.0, 0.45) * 2.0).max(0.1);
        let zoom_x = area_width_px * padding_factor / w;
        let zoom_y = area_height_px * padding_factor / h;
        self.zoom = zoom_x.min(zoom_y).clamp(self.min_zoom, self.max_zoom);
    }
}

fn safe_div(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a / b
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.0}% | Label: {}mm x {}mm",
            self.zoom * 100.0,
            self.width_mm,
            self.height_mm
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(100.0, 50.0)
    }
}
