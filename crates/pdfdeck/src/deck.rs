use std::path::Path;

use eframe::egui;
use mupdf::{Colorspace, Document, Matrix};

/// Intrinsic size of a page in PDF user-space points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("could not open {path}: {source}")]
    Open {
        path: String,
        source: mupdf::error::Error,
    },
    #[error("PDF error: {0}")]
    Pdf(#[from] mupdf::error::Error),
    #[error("document has no pages")]
    EmptyDocument,
}

/// The opened PDF: page count, intrinsic page sizes, and on-demand
/// rasterization. Immutable once loaded; lives for the whole run.
pub struct Deck {
    doc: Document,
    sizes: Vec<PageSize>,
}

impl Deck {
    pub fn open(path: &Path) -> Result<Self, DeckError> {
        let doc =
            Document::open(path.to_string_lossy().as_ref()).map_err(|source| DeckError::Open {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_document(doc)
    }

    /// Opens a deck from an in-memory PDF.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DeckError> {
        let doc = Document::from_bytes(bytes, "application/pdf")?;
        Self::from_document(doc)
    }

    fn from_document(doc: Document) -> Result<Self, DeckError> {
        let page_count = doc.page_count()? as usize;
        if page_count == 0 {
            return Err(DeckError::EmptyDocument);
        }

        let mut sizes = Vec::with_capacity(page_count);
        for index in 0..page_count {
            let page = doc.load_page(index as i32)?;
            let bounds = page.bounds()?;
            sizes.push(PageSize {
                width: (bounds.x1 - bounds.x0).abs(),
                height: (bounds.y1 - bounds.y0).abs(),
            });
        }

        Ok(Self { doc, sizes })
    }

    pub fn page_count(&self) -> usize {
        self.sizes.len()
    }

    /// Callers hold clamped indices, so out-of-range access is a bug.
    pub fn page_size(&self, index: usize) -> PageSize {
        self.sizes[index]
    }

    /// Rasterizes a page at a uniform scale into an RGB image ready for
    /// texture upload. Pixmap rows are stride-padded, so copy row by row.
    pub fn render_page(&self, index: usize, scale: f32) -> Result<egui::ColorImage, DeckError> {
        let page = self.doc.load_page(index as i32)?;
        let matrix = Matrix::new_scale(scale, scale);
        let pixmap = page.to_pixmap(&matrix, &Colorspace::device_rgb(), false, false)?;

        let width = pixmap.width() as usize;
        let height = pixmap.height() as usize;
        let n = pixmap.n() as usize;
        let stride = pixmap.stride() as usize;
        let samples = pixmap.samples();

        let mut rgb = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            let row = &samples[y * stride..y * stride + width * n];
            if n == 3 {
                rgb.extend_from_slice(row);
            } else {
                for px in row.chunks_exact(n) {
                    rgb.extend_from_slice(&px[..3]);
                }
            }
        }

        Ok(egui::ColorImage::from_rgb([width, height], &rgb))
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::Deck;

    /// Assembles a valid in-memory PDF with `page_count` blank US-Letter
    /// pages, computing the xref offsets as the body is built.
    pub fn minimal_pdf(page_count: usize) -> Vec<u8> {
        let mut objects: Vec<String> = Vec::new();
        objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());

        let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", i + 3)).collect();
        objects.push(format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            page_count
        ));
        for _ in 0..page_count {
            objects.push("<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] >>".to_string());
        }

        let mut out = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
        }

        let xref_at = out.len();
        out.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
        out.push_str("0000000000 65535 f \n");
        for offset in offsets {
            out.push_str(&format!("{offset:010} 00000 n \n"));
        }
        out.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_at
        ));

        out.into_bytes()
    }

    pub fn sample_deck(page_count: usize) -> Deck {
        Deck::from_bytes(&minimal_pdf(page_count)).expect("fixture PDF should load")
    }
}

#[cfg(test)]
mod tests {
    use super::testutil::{minimal_pdf, sample_deck};
    use super::*;

    #[test]
    fn opens_pdf_and_reads_page_sizes() {
        let deck = sample_deck(3);
        assert_eq!(deck.page_count(), 3);

        let size = deck.page_size(0);
        assert_eq!(size.width, 612.0);
        assert_eq!(size.height, 792.0);
        assert!((size.aspect() - 612.0 / 792.0).abs() < 1e-6);
    }

    #[test]
    fn empty_document_is_a_load_error() {
        let err = Deck::from_bytes(&minimal_pdf(0)).expect_err("zero pages should not load");
        assert!(matches!(err, DeckError::EmptyDocument));
    }

    #[test]
    fn garbage_bytes_are_a_load_error() {
        assert!(Deck::from_bytes(b"this is not a pdf").is_err());
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = Deck::open(Path::new("/nonexistent/talk.pdf")).expect_err("should not open");
        assert!(matches!(err, DeckError::Open { .. }));
    }

    #[test]
    fn renders_a_page_at_scale() {
        let deck = sample_deck(1);
        let image = deck.render_page(0, 0.5).expect("blank page should render");
        assert_eq!(image.width(), 306);
        assert_eq!(image.height(), 396);
    }
}
