//! SVG output for label scenes.
//!
//! The viewBox is in label units (millimeters times
//! [`REFERENCE_PX_PER_MM`]), so font sizes and stroke widths stored on
//! elements keep their proportion to the label at any output size. Hosts
//! scale with the `width`/`height` attributes only.

use super::binding::TextVisual;
use super::scene::{LabelScene, SceneItem, Visual};
use super::symbols::SymbolMatrix;
use crate::geometry::{Corner, Rect};
use crate::interaction::snapping::{Guide, GuideOrientation};
use crate::model::ElementId;
use crate::viewport::Viewport;
use labelkit_core::constants::{HANDLE_RADIUS_PX, REFERENCE_PX_PER_MM, ROTATION_HANDLE_OFFSET_PX};
use std::fmt::Write;

const SELECTION_COLOR: &str = "#2563eb";
const GUIDE_COLOR: &str = "#ec4899";
const OUTLINE_COLOR: &str = "#9ca3af";
const PLACEHOLDER_COLOR: &str = "#9ca3af";
const DIMMED_OUTLINE_OPACITY: f64 = 0.35;

/// Escape text for XML content and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Compact number formatting: at most three decimals, no trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Label-unit geometry for a scene.
#[derive(Debug, Clone, Copy)]
struct Frame {
    width: f64,
    height: f64,
}

impl Frame {
    fn of(scene: &LabelScene) -> Self {
        Self {
            width: scene.width_mm * REFERENCE_PX_PER_MM,
            height: scene.height_mm * REFERENCE_PX_PER_MM,
        }
    }

    /// Percent box to label units.
    fn rect(&self, r: Rect) -> Rect {
        Rect::new(
            r.x * self.width / 100.0,
            r.y * self.height / 100.0,
            r.width * self.width / 100.0,
            r.height * self.height / 100.0,
        )
    }
}

/// Render a scene as a standalone SVG document.
///
/// `width` and `height` are used verbatim as the root attributes, e.g.
/// `"100mm"` for print or `"400"` for a screen preview.
pub fn render_label_svg(scene: &LabelScene, width: &str, height: &str) -> String {
    let frame = Frame::of(scene);
    let mut svg = open_svg(frame, width, height);
    write_items(&mut svg, scene, frame);
    svg.push_str("</svg>");
    svg
}

/// Editor decorations drawn above the label.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorOverlay<'a> {
    pub selected: Option<&'a ElementId>,
    pub guides: &'a [Guide],
    /// Preview mode: real data under dimmed outlines, no selection chrome.
    pub preview: bool,
}

/// Render the designer canvas at the viewport's zoom.
pub fn render_editor_svg(scene: &LabelScene, overlay: &EditorOverlay<'_>, viewport: &Viewport) -> String {
    let frame = Frame::of(scene);
    let (w, h) = viewport.screen_size_px();
    let units_per_px = if w > 0.0 { frame.width / w } else { 1.0 };
    let mut svg = open_svg(frame, &num(w), &num(h));
    write_items(&mut svg, scene, frame);

    let outline_opacity = if overlay.preview {
        DIMMED_OUTLINE_OPACITY
    } else {
        1.0
    };
    for item in &scene.items {
        let r = frame.rect(item.rect);
        let _ = write!(
            svg,
            r#"<rect class="outline" x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}" stroke-dasharray="{} {}"{}/>"#,
            num(r.x),
            num(r.y),
            num(r.width),
            num(r.height),
            OUTLINE_COLOR,
            num(outline_opacity),
            num(units_per_px),
            num(4.0 * units_per_px),
            num(3.0 * units_per_px),
            rotate_attr(item.rotation, r),
        );
    }

    if !overlay.preview {
        if let Some(item) = overlay.selected.and_then(|id| scene.item(id)) {
            write_selection(&mut svg, item, frame, units_per_px);
        }
    }

    for guide in overlay.guides {
        write_guide(&mut svg, guide, frame, units_per_px);
    }

    svg.push_str("</svg>");
    svg
}

fn open_svg(frame: Frame, width: &str, height: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}"><rect width="{}" height="{}" fill="#ffffff"/>"##,
        escape_xml(width),
        escape_xml(height),
        num(frame.width),
        num(frame.height),
        num(frame.width),
        num(frame.height),
    )
}

fn rotate_attr(rotation: f64, r: Rect) -> String {
    if rotation == 0.0 {
        String::new()
    } else {
        format!(
            r#" transform="rotate({} {} {})""#,
            num(rotation),
            num(r.center_x()),
            num(r.center_y())
        )
    }
}

fn write_items(svg: &mut String, scene: &LabelScene, frame: Frame) {
    for item in &scene.items {
        write_item(svg, item, frame);
    }
}

fn write_item(svg: &mut String, item: &SceneItem, frame: Frame) {
    let r = frame.rect(item.rect);
    let _ = write!(
        svg,
        r#"<g data-element-id="{}"{}>"#,
        escape_xml(item.element_id.as_str()),
        rotate_attr(item.rotation, r)
    );
    match &item.visual {
        Visual::Text(text) => write_text(svg, text, r),
        Visual::Image { href } => {
            let _ = write!(
                svg,
                r#"<image href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid meet"/>"#,
                escape_xml(href),
                num(r.x),
                num(r.y),
                num(r.width),
                num(r.height)
            );
        }
        Visual::Placeholder { label } => write_placeholder(svg, label, r),
        Visual::Rule {
            stroke_width,
            color,
        } => {
            let _ = write!(
                svg,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                num(r.left()),
                num(r.center_y()),
                num(r.right()),
                num(r.center_y()),
                escape_xml(color),
                num(*stroke_width)
            );
        }
        Visual::Symbol(matrix) => write_symbol(svg, matrix, r),
    }
    svg.push_str("</g>");
}

fn write_text(svg: &mut String, text: &TextVisual, r: Rect) {
    let style = format!(
        "width:100%;height:100%;box-sizing:border-box;display:flex;flex-direction:column;\
         justify-content:{};text-align:{};direction:{};font-family:'{}';font-size:{}px;\
         font-weight:{};color:{};letter-spacing:{}em;line-height:1.2;white-space:pre-wrap;\
         overflow:hidden;overflow-wrap:break-word",
        text.vertical_align.as_flex(),
        text.text_align.as_str(),
        text.direction.as_str(),
        text.font_family,
        num(text.font_size),
        text.font_weight.as_css(),
        text.color,
        num(text.tracking),
    );
    let _ = write!(
        svg,
        r#"<foreignObject x="{}" y="{}" width="{}" height="{}"><div xmlns="http://www.w3.org/1999/xhtml" style="{}"><div>{}</div></div></foreignObject>"#,
        num(r.x),
        num(r.y),
        num(r.width),
        num(r.height),
        escape_xml(&style),
        escape_xml(&text.text)
    );
}

fn write_placeholder(svg: &mut String, label: &str, r: Rect) {
    let font_size = (r.height * 0.3).clamp(1.0, 8.0);
    let _ = write!(
        svg,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{c}" stroke-width="0.5" stroke-dasharray="2 2"/><text x="{}" y="{}" fill="{c}" font-family="sans-serif" font-size="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
        num(r.x),
        num(r.y),
        num(r.width),
        num(r.height),
        num(r.center_x()),
        num(r.center_y()),
        num(font_size),
        escape_xml(label),
        c = PLACEHOLDER_COLOR,
    );
}

/// Dark-module runs `(start, len)` in a row.
fn runs(len: usize, dark: impl Fn(usize) -> bool) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut start = None;
    for i in 0..=len {
        match (start, i < len && dark(i)) {
            (None, true) => start = Some(i),
            (Some(s), false) => {
                out.push((s, i - s));
                start = None;
            }
            _ => {}
        }
    }
    out
}

fn write_symbol(svg: &mut String, matrix: &SymbolMatrix, r: Rect) {
    let mut path = String::new();
    match matrix {
        SymbolMatrix::Linear(bars) => {
            if bars.is_empty() {
                return;
            }
            let module = r.width / bars.len() as f64;
            for (start, len) in runs(bars.len(), |i| bars[i]) {
                let _ = write!(
                    path,
                    "M{} {}h{}v{}h-{}z",
                    num(r.x + start as f64 * module),
                    num(r.y),
                    num(len as f64 * module),
                    num(r.height),
                    num(len as f64 * module)
                );
            }
        }
        SymbolMatrix::Square { width, .. } => {
            if *width == 0 {
                return;
            }
            let side = r.width.min(r.height);
            let module = side / *width as f64;
            let x0 = r.x + (r.width - side) / 2.0;
            let y0 = r.y + (r.height - side) / 2.0;
            for row in 0..*width {
                for (start, len) in runs(*width, |col| matrix.is_dark(col, row)) {
                    let _ = write!(
                        path,
                        "M{} {}h{}v{}h-{}z",
                        num(x0 + start as f64 * module),
                        num(y0 + row as f64 * module),
                        num(len as f64 * module),
                        num(module),
                        num(len as f64 * module)
                    );
                }
            }
        }
    }
    let _ = write!(svg, r##"<path d="{}" fill="#000000" shape-rendering="crispEdges"/>"##, path);
}

fn write_selection(svg: &mut String, item: &SceneItem, frame: Frame, units_per_px: f64) {
    let r = frame.rect(item.rect);
    let stroke = num(units_per_px * 1.5);
    let radius = num(HANDLE_RADIUS_PX * units_per_px);
    let handle_y = r.top() - ROTATION_HANDLE_OFFSET_PX * units_per_px;

    let _ = write!(svg, r#"<g class="selection"{}>"#, rotate_attr(item.rotation, r));
    let _ = write!(
        svg,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
        num(r.x),
        num(r.y),
        num(r.width),
        num(r.height),
        SELECTION_COLOR,
        stroke
    );
    for corner in Corner::ALL {
        let p = r.corner(corner);
        let _ = write!(
            svg,
            r##"<circle class="resize-handle" data-handle="{}" cx="{}" cy="{}" r="{}" fill="#ffffff" stroke="{}" stroke-width="{}"/>"##,
            corner.handle(),
            num(p.x),
            num(p.y),
            radius,
            SELECTION_COLOR,
            stroke
        );
    }
    let _ = write!(
        svg,
        r##"<line x1="{cx}" y1="{}" x2="{cx}" y2="{}" stroke="{}" stroke-width="{}"/><circle class="rotate-handle" cx="{cx}" cy="{}" r="{}" fill="#ffffff" stroke="{}" stroke-width="{}"/>"##,
        num(r.top()),
        num(handle_y),
        SELECTION_COLOR,
        stroke,
        num(handle_y),
        radius,
        SELECTION_COLOR,
        stroke,
        cx = num(r.center_x()),
    );
    svg.push_str("</g>");
}

fn write_guide(svg: &mut String, guide: &Guide, frame: Frame, units_per_px: f64) {
    let (x1, y1, x2, y2) = match guide.orientation {
        GuideOrientation::Vertical => {
            let x = guide.position * frame.width / 100.0;
            (x, guide.start * frame.height / 100.0, x, guide.end * frame.height / 100.0)
        }
        GuideOrientation::Horizontal => {
            let y = guide.position * frame.height / 100.0;
            (guide.start * frame.width / 100.0, y, guide.end * frame.width / 100.0, y)
        }
    };
    let _ = write!(
        svg,
        r#"<line class="guide" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        num(x1),
        num(y1),
        num(x2),
        num(y2),
        GUIDE_COLOR,
        num(units_per_px)
    );
}
