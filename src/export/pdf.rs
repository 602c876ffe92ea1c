use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};

use crate::errors::{PlanError, Result};
use crate::schedule::AmortizationPlan;

pub const ATTACHMENT_FILENAME: &str = "amortization_plan.pdf";

const DOCUMENT_TITLE: &str = "Piano di Ammortamento";
const LAYER_NAME: &str = "schedule";

// A4 portrait
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const ROW_HEIGHT_MM: f32 = 6.0;

const TITLE_SIZE_PT: f32 = 16.0;
const BODY_SIZE_PT: f32 = 9.0;
const PT_TO_MM: f32 = 0.352_778;

const HEADER_LABELS: [&str; 5] = ["N°", "Rata", "Cap", "Int", "Res"];

/// right edge of each of the five columns
const COLUMN_EDGES_MM: [f32; 5] = [40.0, 77.5, 115.0, 152.5, 190.0];

/// render the plan as a paginated A4 document
///
/// the header row repeats at the top of every page; header and totals are bold
pub fn render_document(plan: &AmortizationPlan) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        LAYER_NAME,
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(render_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(render_error)?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut cursor = PAGE_HEIGHT_MM - MARGIN_MM;

    layer.use_text(DOCUMENT_TITLE, TITLE_SIZE_PT, Mm(MARGIN_MM), Mm(cursor), &bold);
    cursor -= 2.0 * ROW_HEIGHT_MM;

    write_header(&layer, &bold, cursor);
    cursor -= ROW_HEIGHT_MM;

    for row in &plan.rows {
        if cursor < MARGIN_MM + ROW_HEIGHT_MM {
            layer = start_page(&doc, &bold, &mut cursor);
        }
        let cells = [
            row.period.to_string(),
            format!("{:.2}", row.payment.as_decimal()),
            format!("{:.2}", row.principal_portion.as_decimal()),
            format!("{:.2}", row.interest_portion.as_decimal()),
            format!("{:.2}", row.remaining_balance.as_decimal()),
        ];
        write_cells(&layer, &regular, cursor, &cells);
        cursor -= ROW_HEIGHT_MM;
    }

    if cursor < MARGIN_MM + ROW_HEIGHT_MM {
        layer = start_page(&doc, &bold, &mut cursor);
    }
    rule(&layer, cursor + ROW_HEIGHT_MM - 2.0);
    let totals = [
        "Tot".to_string(),
        format!("{:.2}", plan.totals.total_payment.as_decimal()),
        format!("{:.2}", plan.totals.total_principal.as_decimal()),
        format!("{:.2}", plan.totals.total_interest.as_decimal()),
        format!("{:.2}", plan.totals.final_balance.as_decimal()),
    ];
    write_cells(&layer, &bold, cursor, &totals);

    doc.save_to_bytes().map_err(render_error)
}

/// open a fresh page with the repeated header row
fn start_page(
    doc: &PdfDocumentReference,
    bold: &IndirectFontRef,
    cursor: &mut f32,
) -> PdfLayerReference {
    let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
    let layer = doc.get_page(page).get_layer(layer);

    *cursor = PAGE_HEIGHT_MM - MARGIN_MM;
    write_header(&layer, bold, *cursor);
    *cursor -= ROW_HEIGHT_MM;

    layer
}

fn write_header(layer: &PdfLayerReference, bold: &IndirectFontRef, y: f32) {
    let labels = HEADER_LABELS.map(str::to_string);
    write_cells(layer, bold, y, &labels);
    rule(layer, y - 2.0);
}

/// write one table row, every cell right-aligned to its column edge
fn write_cells(layer: &PdfLayerReference, font: &IndirectFontRef, y: f32, cells: &[String; 5]) {
    for (text, edge) in cells.iter().zip(COLUMN_EDGES_MM) {
        let x = edge - text_width_mm(text, BODY_SIZE_PT);
        layer.use_text(text.as_str(), BODY_SIZE_PT, Mm(x), Mm(y), font);
    }
}

/// horizontal separator across the table width
fn rule(layer: &PdfLayerReference, y: f32) {
    layer.set_outline_color(Color::Rgb(Rgb::new(0.6, 0.6, 0.6, None)));
    layer.set_outline_thickness(0.5);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN_MM), Mm(y)), false),
            (Point::new(Mm(PAGE_WIDTH_MM - MARGIN_MM), Mm(y)), false),
        ],
        is_closed: false,
    });
}

/// approximate helvetica advance widths, enough to right-align numeric cells
fn text_width_mm(text: &str, size_pt: f32) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| match c {
            '.' | ',' => 278,
            '°' => 400,
            _ => 556,
        })
        .sum();
    units as f32 / 1000.0 * size_pt * PT_TO_MM
}

fn render_error(err: impl std::fmt::Display) -> PlanError {
    PlanError::DocumentRender {
        message: err.to_string(),
    }
}
