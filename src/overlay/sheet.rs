use super::draw::{overlay, registration, Legends};
use super::geometry::{OverlayGeometry, RegistrationGeometry, CAMEO4_NO_MAT};
use super::legend::LegendTable;
use super::{Device, Mode};
use crate::content::ContentStream;
use crate::document::Document;
use crate::font::Font;
use crate::info::Info;
use crate::layout::TileLayout;
use crate::page::Page;
use crate::pagesize::{self, PageSize};
use crate::transform::Transform;
use crate::units::*;
use crate::OverlayError;
use log::info;

/// Extra clearance between the registration mark insets and the overlays
const ADDITIONAL_INSET: f64 = 0.1;

/// Smallest acceptable space between stacked overlays
const MINIMUM_GAP: f64 = 0.1;

/// Legend text size
const LEGEND_SIZE: Pt = Pt(6.0);

/// A printable page of overlays: registration marks around the cut area and
/// as many overlays as fit stacked down the page
#[derive(Debug, Clone)]
pub struct Sheet {
    pub page_size: PageSize,
    pub registration: RegistrationGeometry,
    pub overlay: OverlayGeometry,
    pub mode: Mode,
    pub legends: LegendTable,
    pub font: Font,
}

impl Sheet {
    /// A US Letter sheet for `device` with Cameo 4 registration marks and the
    /// default legends in Helvetica
    pub fn new(device: Device, mode: Mode) -> Sheet {
        Sheet {
            page_size: pagesize::LETTER,
            registration: CAMEO4_NO_MAT,
            overlay: device.geometry(),
            mode,
            legends: LegendTable::default(),
            font: Font::helvetica("F1"),
        }
    }

    fn page_dimensions(&self) -> (f64, f64) {
        let (width, height) = self.page_size;
        (In::from(width).0, In::from(height).0)
    }

    /// Where the overlays go, measured in inches down from the top of the page
    pub fn tile_layout(&self) -> TileLayout {
        let (_, page_height) = self.page_dimensions();
        let top = self.registration.inset_top + ADDITIONAL_INSET;
        let bottom = page_height - (self.registration.inset_bottom + ADDITIONAL_INSET);
        TileLayout::compute(top, bottom, self.overlay.height, MINIMUM_GAP)
    }

    /// The page's content stream. Everything inside is drawn in inches.
    pub fn contents(&self) -> Result<ContentStream, OverlayError> {
        let (page_width, page_height) = self.page_dimensions();

        let mut page = ContentStream::new(true);
        page.transform(&Transform::scale(PT_PER_IN, PT_PER_IN));

        if self.mode.registration() {
            page.append(&registration(page_width, page_height, &self.registration)?);
        }

        let legends = Legends {
            table: &self.legends,
            font_name: &self.font.resource_name,
            size: LEGEND_SIZE.into(),
        };
        let tile = overlay(
            &self.overlay,
            self.mode.outlines(),
            self.mode.legends().then_some(&legends),
        )?;

        let layout = self.tile_layout();
        let left = (page_width - self.overlay.width) / 2.0;
        info!(
            "placing {} overlays, {:.3} in apart",
            layout.count(),
            layout.gap()
        );
        layout.place(&mut page, page_height, left, &tile);

        Ok(page)
    }

    /// A one page document holding the sheet
    pub fn document(&self) -> Result<Document, OverlayError> {
        let mut doc = Document::default();

        let mut meta = Info::new();
        meta.title(format!("keyboard overlays ({})", self.mode.name()))
            .subject("calculator keyboard overlays")
            .keywords(format!("calculator, keyboard overlay, {}", self.mode.name()));
        doc.set_info(meta);

        doc.add_font(self.font.clone());

        let mut page = Page::new(self.page_size);
        page.add_content(self.contents()?);
        doc.add_page(page);

        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voyager_fits_four_overlays_on_letter() {
        let sheet = Sheet::new(Device::Voyager, Mode::All);
        let layout = sheet.tile_layout();
        assert_eq!(layout.count(), 4);
        assert!((layout.gap() - (9.151 - 8.4) / 3.0).abs() < 1e-9);
        assert!((layout.tile_top(0) - 0.725).abs() < 1e-12);
    }

    #[test]
    fn dm1xl_fits_four_overlays_on_letter() {
        let layout = Sheet::new(Device::Dm1xl, Mode::Cut).tile_layout();
        assert_eq!(layout.count(), 4);
        assert!((layout.gap() - (9.151 - 7.8) / 3.0).abs() < 1e-9);
    }

    #[test]
    fn contents_work_in_inches() {
        let s = Sheet::new(Device::Voyager, Mode::All)
            .contents()
            .expect("pen is set")
            .to_string();
        assert!(s.starts_with("q 72 0 0 72 0 0 cm\n"));
        assert!(s.ends_with("Q\n"));
        assert_eq!(s.matches("q 1 0 0 1 1.925 ").count(), 4);
    }

    #[test]
    fn modes_choose_what_is_drawn() {
        let cut = Sheet::new(Device::Voyager, Mode::Cut)
            .contents()
            .expect("pen is set")
            .to_string();
        assert!(!cut.contains("/DeviceRGB cs"));
        assert!(!cut.contains(" Tj "));
        assert!(cut.contains(" m s\n"));

        let print = Sheet::new(Device::Voyager, Mode::Print)
            .contents()
            .expect("pen is set")
            .to_string();
        assert!(print.contains("/DeviceRGB cs"));
        assert!(print.contains(" Tj "));
        assert!(!print.contains(" m s\n"));

        let all = Sheet::new(Device::Voyager, Mode::All)
            .contents()
            .expect("pen is set")
            .to_string();
        assert!(all.contains("/DeviceRGB cs"));
        assert!(all.contains(" Tj "));
        assert!(all.contains(" m s\n"));
    }

    #[test]
    fn document_describes_the_sheet() {
        let doc = Sheet::new(Device::Dm1xl, Mode::Cut)
            .document()
            .expect("sheet draws");
        let info = doc.info.as_ref().expect("info is set");
        assert_eq!(info.title.as_deref(), Some("keyboard overlays (cut)"));
        assert_eq!(
            info.keywords.as_deref(),
            Some("calculator, keyboard overlay, cut")
        );
        assert_eq!(doc.page_order.len(), 1);
    }

    #[test]
    fn tiles_sit_inside_the_usable_span() {
        let sheet = Sheet::new(Device::Voyager, Mode::Cut);
        let layout = sheet.tile_layout();
        let last = layout.tile_top(layout.count() - 1) + layout.item_height();
        assert!(last <= 11.0 - 1.124 + 1e-9);
    }
}
