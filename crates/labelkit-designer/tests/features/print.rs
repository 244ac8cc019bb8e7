use labelkit_core::{CopiesPerPage, PrintDensity};
use labelkit_designer::model::{seed_presets, LabelData};
use labelkit_designer::render::{render_print_document, PrintLayout, PrintOptions};
use labelkit_designer::templates::builtin_templates;

fn sourdough() -> LabelData {
    let mut data = LabelData::seed("2024-03-01");
    seed_presets()[1].apply_to(&mut data);
    data
}

#[test]
fn test_six_copies_are_independent() {
    let template = &builtin_templates()[0];
    let options = PrintOptions {
        copies: CopiesPerPage::Six,
        ..PrintOptions::default()
    };
    let html = render_print_document(template, &sourdough(), &options);

    assert_eq!(html.matches("<div class=\"label-copy\"").count(), 6);
    assert_eq!(html.matches("<svg").count(), 6);
    assert_eq!(html.matches("ARTISAN SOURDOUGH BREAD").count(), 6);
    for copy in 1..=6 {
        assert!(html.contains(&format!("data-copy=\"{}\"", copy)));
    }
}

#[test]
fn test_every_copy_has_its_own_cell() {
    let template = &builtin_templates()[0];
    for copies in CopiesPerPage::ALL {
        for density in [PrintDensity::Normal, PrintDensity::High] {
            let options = PrintOptions {
                copies,
                density,
                ..PrintOptions::default()
            };
            let layout = PrintLayout::compute(template.width_mm, template.height_mm, &options);
            assert_eq!(layout.placements.len(), copies.count());

            let mut cells: Vec<_> = layout.placements.iter().map(|p| (p.row, p.column)).collect();
            cells.sort();
            cells.dedup();
            assert_eq!(cells.len(), copies.count());

            for a in &layout.placements {
                for b in layout.placements.iter().filter(|b| b.index != a.index) {
                    let apart_x = a.x_mm + a.width_mm <= b.x_mm + 1e-9
                        || b.x_mm + b.width_mm <= a.x_mm + 1e-9;
                    let apart_y = a.y_mm + a.height_mm <= b.y_mm + 1e-9
                        || b.y_mm + b.height_mm <= a.y_mm + 1e-9;
                    assert!(apart_x || apart_y, "copies {} and {} overlap", a.index, b.index);
                }
            }
        }
    }
}

#[test]
fn test_copies_stay_on_page() {
    let options = PrintOptions {
        copies: CopiesPerPage::Twelve,
        density: PrintDensity::High,
        ..PrintOptions::default()
    };
    let layout = PrintLayout::compute(60.0, 60.0, &options);
    for p in &layout.placements {
        assert!(p.x_mm >= options.margin_mm - 1e-9);
        assert!(p.y_mm >= options.margin_mm - 1e-9);
        assert!(p.x_mm + p.width_mm <= options.page_width_mm - options.margin_mm + 1e-9);
        assert!(p.y_mm + p.height_mm <= options.page_height_mm - options.margin_mm + 1e-9);
        assert!((p.width_mm - p.height_mm).abs() < 1e-9);
    }
}
