use crate::{
    font::Font,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    OverlayError,
};
use id_arena::{Arena, Id};
use log::debug;
use pdf_writer::{Pdf, Ref};
use std::io::Write;

/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Font>,
    /// Flate-compress page content streams when writing
    pub compress: bool,
}

impl Default for Document {
    fn default() -> Self {
        Document {
            info: None,
            pages: Arena::new(),
            page_order: Vec::new(),
            fonts: Arena::new(),
            compress: true,
        }
    }
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its ID
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Add a font to the document structure. Fonts are stored "globally" within
    /// the document and every page lists all of them in its resources, so any
    /// content stream can select one by its resource name.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Write the entire document to the writer. The whole document is rendered
    /// in memory first.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), OverlayError> {
        let Document {
            info,
            pages,
            page_order,
            fonts,
            compress,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = page_order
            .iter()
            .enumerate()
            .map(|(i, _id)| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (id, font) in fonts.iter() {
            font.write(&mut refs, id, &mut writer);
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(OverlayError::PageMissing)?;
            page.write(&mut refs, page_index, &fonts, compress, &mut writer)?;
        }

        writer.catalog(catalog_id).pages(page_tree_id);

        let bytes = writer.finish();
        debug!("writing {} pages, {} bytes", page_order.len(), bytes.len());
        w.write_all(bytes.as_slice()).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pagesize, ContentStream, Coord};

    fn sample(compress: bool) -> Vec<u8> {
        let mut doc = Document {
            compress,
            ..Document::default()
        };
        doc.add_font(Font::helvetica("F1"));

        let mut content = ContentStream::new(true);
        content
            .move_to(Coord::new(72.0, 72.0))
            .line_to(Coord::new(144.0, 144.0))
            .path_stroke();
        let mut page = Page::new(pagesize::LETTER);
        page.add_content(content);
        doc.add_page(page);

        let mut out = Vec::new();
        doc.write(&mut out).expect("writes to memory");
        out
    }

    fn contains(haystack: &[u8], needle: &str) -> bool {
        haystack
            .windows(needle.len())
            .any(|w| w == needle.as_bytes())
    }

    #[test]
    fn uncompressed_content_is_written_verbatim() {
        let pdf = sample(false);
        assert!(pdf.starts_with(b"%PDF-"));
        assert!(contains(&pdf, "q 72 72 m 144 144 l S\nQ\n"));
        assert!(contains(&pdf, "/BaseFont /Helvetica"));
        assert!(contains(&pdf, "/F1 "));
        assert!(contains(&pdf, "/MediaBox"));
    }

    #[test]
    fn compressed_content_is_flate_encoded() {
        let pdf = sample(true);
        assert!(contains(&pdf, "/FlateDecode"));
        assert!(!contains(&pdf, "144 144 l"));
    }

    #[test]
    fn missing_page_is_an_error() {
        let mut doc = Document::default();
        let mut other: Arena<Page> = Arena::new();
        let stray = other.alloc(Page::new(pagesize::LETTER));
        doc.page_order.push(stray);
        // an id from another arena with no page behind it in this one
        assert!(matches!(
            doc.write(Vec::new()),
            Err(OverlayError::PageMissing)
        ));
    }
}
