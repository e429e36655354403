//! PDF rendering of the unified document
//!
//! Letter page, portrait, 1-inch margins. The body is wrapped to the
//! content width and flowed across pages, followed by the location/date
//! line and the fixed centered signature. Best-effort: there is no
//! recovery path for export failures.

use crate::error::{RegDocError, Result};
use printpdf::*;
use regdoc_common::{wrap_text, DocumentMeta, Locale, PdfLayout, SIGNATURE};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub fn generate_pdf(
    doc_text: &str,
    meta: &DocumentMeta,
    locale: Locale,
    output_path: &Path,
) -> Result<()> {
    let strings = locale.strings();
    let layout = PdfLayout::letter();

    let (doc, page1, layer1) = PdfDocument::new(
        strings.result_title,
        Mm(layout.page_width_mm),
        Mm(layout.page_height_mm),
        "Layer 1",
    );

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RegDocError::PdfGeneration(format!("font: {:?}", e)))?;

    let mut layer = doc.get_page(page1).get_layer(layer1);
    let mut y = layout.top_y_mm();

    let mut lines = wrap_text(doc_text, layout.max_chars_per_line());
    lines.push(String::new());
    lines.push(meta.display_line(strings.location_label, strings.date_label));
    lines.push(String::new());

    for line in &lines {
        if y < layout.margin_mm {
            let (page, new_layer) = doc.add_page(
                Mm(layout.page_width_mm),
                Mm(layout.page_height_mm),
                "Layer 1",
            );
            layer = doc.get_page(page).get_layer(new_layer);
            y = layout.top_y_mm();
        }
        if !line.is_empty() {
            layer.use_text(
                line.as_str(),
                layout.body_font_size_pt,
                Mm(layout.margin_mm),
                Mm(y),
                &font,
            );
        }
        y -= layout.line_height_mm;
    }

    // centered signature on its own line
    if y < layout.margin_mm {
        let (page, new_layer) = doc.add_page(
            Mm(layout.page_width_mm),
            Mm(layout.page_height_mm),
            "Layer 1",
        );
        layer = doc.get_page(page).get_layer(new_layer);
        y = layout.top_y_mm();
    }
    layer.use_text(
        SIGNATURE,
        layout.body_font_size_pt,
        Mm(layout.centered_x_mm(SIGNATURE)),
        Mm(y),
        &font,
    );

    let file = File::create(output_path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| RegDocError::PdfGeneration(format!("save: {:?}", e)))?;

    Ok(())
}
