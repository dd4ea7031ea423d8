use crate::content::ContentStream;
use crate::font::Font;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use crate::OverlayError;
use id_arena::Arena;
use log::debug;
use pdf_writer::types::ProcSet;
use pdf_writer::{Filter, Finish, Name, Pdf};

/// A single page: a fixed media box and the content streams drawn on it, in
/// the order they were added
#[derive(Debug, Clone)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Finished operator text, one entry per added stream
    pub contents: Vec<Vec<u8>>,
}

impl Page {
    pub fn new(size: PageSize) -> Page {
        let (width, height) = size;
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            contents: Vec::default(),
        }
    }

    /// Add a finished content stream to the page. The stream is not
    /// interpreted any further.
    pub fn add_content(&mut self, content: ContentStream) {
        self.contents.push(content.finish());
    }

    fn render(&self) -> Vec<u8> {
        let mut rendered = Vec::with_capacity(self.contents.iter().map(Vec::len).sum());
        for content in self.contents.iter() {
            rendered.extend_from_slice(content);
        }
        rendered
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        compress: bool,
        writer: &mut Pdf,
    ) -> Result<(), OverlayError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(OverlayError::PageMissing)?;
        let page_tree_id = refs.get(RefType::PageTree).ok_or(OverlayError::PageMissing)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.parent(page_tree_id);
        page.contents(content_id);

        let mut resources = page.resources();
        resources.proc_sets([ProcSet::Pdf, ProcSet::Text]);
        let mut resource_fonts = resources.fonts();
        for (font_id, font) in fonts.iter() {
            if let Some(font_ref) = refs.get(RefType::Font(font_id.index())) {
                resource_fonts.pair(Name(font.resource_name.as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        resources.finish();
        page.finish();

        let rendered = self.render();
        if compress {
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
                &rendered,
                miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
            );
            debug!(
                "page {page_index}: {} bytes of content, {} compressed",
                rendered.len(),
                compressed.len()
            );
            writer.stream(content_id, &compressed).filter(Filter::FlateDecode);
        } else {
            debug!("page {page_index}: {} bytes of content", rendered.len());
            writer.stream(content_id, &rendered);
        }

        Ok(())
    }
}
