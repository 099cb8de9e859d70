//! PDF artifact generation.
//!
//! A single fixed-layout page: heading, six field lines, and a 50x50 mm
//! photo block when the report carries one.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, Image, ImageTransform, Mm, PdfDocument, PdfLayerReference};

use crate::error::{ReportError, Result};
use crate::export::layout::{
    field_lines, y_from_top_mm, FIELD_START_Y_MM, FIELD_STEP_MM, FONT_SIZE_PT, HEADING,
    HEADING_Y_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PHOTO_SIZE_MM, PHOTO_X_MM, PHOTO_Y_MM, TEXT_X_MM,
};
use crate::model::Report;
use crate::photo;

/// Resolution the embedded photo is declared at when scaling to the block.
const PHOTO_DPI: f64 = 300.0;
const MM_PER_INCH: f64 = 25.4;

pub fn generate_pdf(report: &Report, output_path: &Path) -> Result<()> {
    let (doc, page1, layer1) = PdfDocument::new(
        HEADING,
        Mm(PAGE_WIDTH_MM as f32),
        Mm(PAGE_HEIGHT_MM as f32),
        "Layer 1",
    );
    let layer = doc.get_page(page1).get_layer(layer1);

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::PdfGeneration(format!("font: {:?}", e)))?;

    layer.use_text(
        HEADING,
        FONT_SIZE_PT as f32,
        Mm(TEXT_X_MM as f32),
        Mm(y_from_top_mm(HEADING_Y_MM) as f32),
        &font,
    );

    for (i, line) in field_lines(report).into_iter().enumerate() {
        let y = FIELD_START_Y_MM + FIELD_STEP_MM * i as f64;
        layer.use_text(
            line,
            FONT_SIZE_PT as f32,
            Mm(TEXT_X_MM as f32),
            Mm(y_from_top_mm(y) as f32),
            &font,
        );
    }

    if let Some(data_uri) = report.photo_url.as_deref() {
        place_photo(&layer, data_uri)?;
    }

    let file = File::create(output_path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ReportError::PdfGeneration(format!("save: {:?}", e)))?;

    Ok(())
}

/// Decode the report's data URI and place it as the fixed photo block.
fn place_photo(layer: &PdfLayerReference, data_uri: &str) -> Result<()> {
    let bytes = photo::decode_data_uri(data_uri)
        .ok_or_else(|| ReportError::PdfGeneration("photo is not a base64 data URI".into()))?;

    let decoded = printpdf::image_crate::load_from_memory(&bytes)
        .map_err(|e| ReportError::PdfGeneration(format!("photo decode: {}", e)))?;
    let image = Image::from_dynamic_image(&decoded);

    // Natural size at PHOTO_DPI, scaled so the block comes out 50x50 mm.
    let natural_w_mm = image.image.width.0 as f64 * MM_PER_INCH / PHOTO_DPI;
    let natural_h_mm = image.image.height.0 as f64 * MM_PER_INCH / PHOTO_DPI;

    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(PHOTO_X_MM as f32)),
            translate_y: Some(Mm(y_from_top_mm(PHOTO_Y_MM + PHOTO_SIZE_MM) as f32)),
            scale_x: Some((PHOTO_SIZE_MM / natural_w_mm) as f32),
            scale_y: Some((PHOTO_SIZE_MM / natural_h_mm) as f32),
            dpi: Some(PHOTO_DPI as f32),
            ..Default::default()
        },
    );

    Ok(())
}
