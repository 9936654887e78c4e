use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};

use crate::errors::ExportError;
use crate::export::layout::{Element, FontWeight, Page, Rgb8, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};

const LAYER_NAME: &str = "Transcript";
const RULE_THICKNESS: f32 = 0.3;

fn render_error(e: impl std::fmt::Debug) -> ExportError {
    ExportError::Render(format!("{e:?}"))
}

fn color(rgb: Rgb8) -> Color {
    let Rgb8(r, g, b) = rgb;
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

/// Renders laid-out pages into the bytes of a single PDF document. Text is
/// expected in the WinAnsiEncoding repertoire of the built-in Helvetica.
pub fn render_pdf(title: &str, pages: &[Page]) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(render_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(render_error)?;

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
            doc.get_page(page_index).get_layer(layer_index)
        };

        for element in &page.elements {
            draw(&layer, element, &regular, &bold);
        }
    }

    doc.save_to_bytes().map_err(render_error)
}

fn draw(
    layer: &PdfLayerReference,
    element: &Element,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    match element {
        Element::Text {
            text,
            x,
            y,
            size,
            weight,
            color: rgb,
        } => {
            let font = match weight {
                FontWeight::Regular => regular,
                FontWeight::Bold => bold,
            };
            layer.set_fill_color(color(*rgb));
            layer.use_text(text.as_str(), *size, Mm(*x), Mm(PAGE_HEIGHT_MM - y), font);
        }
        Element::Rule { x1, x2, y, color: rgb } => {
            let baseline = Mm(PAGE_HEIGHT_MM - y);
            layer.set_outline_color(color(*rgb));
            layer.set_outline_thickness(RULE_THICKNESS);
            layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(*x1), baseline), false),
                    (Point::new(Mm(*x2), baseline), false),
                ],
                is_closed: false,
            });
        }
    }
}
