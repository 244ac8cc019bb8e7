//! Multi-copy print sheet layout and the HTML print document.

use super::scene::LabelScene;
use super::svg::{escape_xml, render_label_svg};
use crate::model::{LabelData, LabelTemplate};
use labelkit_core::constants::{A4_HEIGHT_MM, A4_WIDTH_MM, PAGE_MARGIN_MM};
use labelkit_core::{CopiesPerPage, PrintDensity};

/// Sheet options for a print run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintOptions {
    pub copies: CopiesPerPage,
    pub density: PrintDensity,
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    pub margin_mm: f64,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            copies: CopiesPerPage::default(),
            density: PrintDensity::default(),
            page_width_mm: A4_WIDTH_MM,
            page_height_mm: A4_HEIGHT_MM,
            margin_mm: PAGE_MARGIN_MM,
        }
    }
}

/// Where one copy lands on the page, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub column: usize,
    pub row: usize,
    pub x_mm: f64,
    pub y_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

/// Grid of copies on one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintLayout {
    pub columns: usize,
    pub rows: usize,
    pub gap_mm: f64,
    pub cell_width_mm: f64,
    pub cell_height_mm: f64,
    /// Uniform scale applied to the label to fit its cell.
    pub scale: f64,
    pub placements: Vec<Placement>,
}

impl PrintLayout {
    /// Lay out copies of a `label_width_mm` x `label_height_mm` label.
    ///
    /// The grid comes from the copies count and the gap from the density.
    /// Each copy keeps the label's aspect ratio and is centered in its cell.
    pub fn compute(label_width_mm: f64, label_height_mm: f64, options: &PrintOptions) -> Self {
        let (columns, rows) = options.copies.grid();
        let gap_mm = options.density.gap_mm();

        let usable_w = (options.page_width_mm - 2.0 * options.margin_mm).max(0.0);
        let usable_h = (options.page_height_mm - 2.0 * options.margin_mm).max(0.0);
        let cell_width_mm = ((usable_w - gap_mm * (columns as f64 - 1.0)) / columns as f64).max(0.0);
        let cell_height_mm = ((usable_h - gap_mm * (rows as f64 - 1.0)) / rows as f64).max(0.0);

        let scale = if label_width_mm > 0.0 && label_height_mm > 0.0 {
            (cell_width_mm / label_width_mm).min(cell_height_mm / label_height_mm)
        } else {
            0.0
        };
        let width_mm = label_width_mm * scale;
        let height_mm = label_height_mm * scale;

        let placements = (0..columns * rows)
            .map(|index| {
                let (row, column) = (index / columns, index % columns);
                let cell_x = options.margin_mm + column as f64 * (cell_width_mm + gap_mm);
                let cell_y = options.margin_mm + row as f64 * (cell_height_mm + gap_mm);
                Placement {
                    index,
                    column,
                    row,
                    x_mm: cell_x + (cell_width_mm - width_mm) / 2.0,
                    y_mm: cell_y + (cell_height_mm - height_mm) / 2.0,
                    width_mm,
                    height_mm,
                }
            })
            .collect();

        Self {
            columns,
            rows,
            gap_mm,
            cell_width_mm,
            cell_height_mm,
            scale,
            placements,
        }
    }
}

fn mm(v: f64) -> String {
    format!("{:.2}mm", v)
}

/// HTML document with print CSS holding one sheet of copies.
///
/// Every copy is its own `.label-copy` container with its own SVG.
pub fn render_print_document(template: &LabelTemplate, data: &LabelData, options: &PrintOptions) -> String {
    let scene = LabelScene::build(template, data);
    let layout = PrintLayout::compute(template.width_mm, template.height_mm, options);
    tracing::debug!(
        template = %template.name,
        copies = layout.placements.len(),
        scale = layout.scale,
        "Rendering print sheet"
    );

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_xml(&template.name)));
    html.push_str("<style>\n");
    html.push_str(&format!(
        "@page {{ size: {} {}; margin: 0; }}\n",
        mm(options.page_width_mm),
        mm(options.page_height_mm)
    ));
    html.push_str("html, body { margin: 0; padding: 0; }\n");
    html.push_str(&format!(
        ".sheet {{ position: relative; width: {}; height: {}; overflow: hidden; page-break-after: always; }}\n",
        mm(options.page_width_mm),
        mm(options.page_height_mm)
    ));
    html.push_str(".label-copy { position: absolute; overflow: hidden; }\n");
    html.push_str(".label-copy svg { display: block; width: 100%; height: 100%; }\n");
    html.push_str("@media print { body { -webkit-print-color-adjust: exact; print-color-adjust: exact; } }\n");
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(&format!(
        "<div class=\"sheet density-{}\" data-copies=\"{}\">\n",
        options.density,
        options.copies.count()
    ));

    for placement in &layout.placements {
        let svg = render_label_svg(&scene, "100%", "100%");
        html.push_str(&format!(
            "<div class=\"label-copy\" data-copy=\"{}\" style=\"left: {}; top: {}; width: {}; height: {};\">{}</div>\n",
            placement.index + 1,
            mm(placement.x_mm),
            mm(placement.y_mm),
            mm(placement.width_mm),
            mm(placement.height_mm),
            svg
        ));
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}
