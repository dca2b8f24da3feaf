//! Plain-text documents laid out on A4 pages.
//!
//! Text is set in the built-in Helvetica face, which only covers ASCII, so
//! every other character is replaced with `?` before layout.

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::app::{ExportError, Result};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const LINE_HEIGHT_MM: f32 = 10.0;
const FONT_SIZE_PT: f32 = 12.0;

/// Characters of 12pt Helvetica that fit the 190 mm text width.
pub const CHARS_PER_LINE: usize = 90;

/// Lines of 10 mm that fit between the page margins.
pub const LINES_PER_PAGE: usize = 26;

/// Renders `text` into the bytes of a PDF document titled `title`.
pub fn render_pdf(title: &str, text: &str) -> Result<Vec<u8>> {
    let lines = wrap_lines(&to_ascii(text), CHARS_PER_LINE);

    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Content");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    for (index, page_lines) in lines.chunks(LINES_PER_PAGE).enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Content");
            doc.get_page(page).get_layer(layer)
        };

        for (row, line) in page_lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let y = PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM * (row as f32 + 1.0);
            layer.use_text(line.as_str(), FONT_SIZE_PT, Mm(MARGIN_MM), Mm(y), &font);
        }
    }

    tracing::debug!("Laid out {} lines for {}", lines.len(), title);
    doc.save_to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}

/// Replaces every non-ASCII character with `?`.
pub fn to_ascii(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() { c } else { '?' })
        .collect()
}

/// Splits `text` into lines of at most `width` characters.
///
/// Existing line breaks are kept. Words longer than a line are cut.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word = word;
            while let Some((cut, _)) = word.char_indices().nth(width) {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                lines.push(word[..cut].to_string());
                word = &word[cut..];
            }

            let word_len = word.chars().count();
            if line_len > 0 && line_len + 1 + word_len > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.push_str(word);
            line_len += word_len;
        }

        lines.push(line);
    }

    lines
}
