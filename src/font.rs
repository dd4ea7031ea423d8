use crate::refs::{ObjectReferences, RefType};
use id_arena::Id;
use pdf_writer::{Name, Pdf};

/// One of the standard Type1 fonts every PDF reader carries, so nothing is
/// embedded. Content streams select it by its resource name, e.g. `/F1 12 Tf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    /// The name content streams use to select the font
    pub resource_name: String,
    /// The PostScript name of the standard font, e.g. `Helvetica`
    pub base_font: String,
    /// A predefined encoding, e.g. `WinAnsiEncoding`
    pub encoding: String,
}

impl Font {
    /// A standard Type1 font with the WinAnsi encoding
    pub fn type1<N: ToString, B: ToString>(resource_name: N, base_font: B) -> Font {
        Font {
            resource_name: resource_name.to_string(),
            base_font: base_font.to_string(),
            encoding: "WinAnsiEncoding".to_string(),
        }
    }

    /// Helvetica, registered under `resource_name`
    pub fn helvetica<N: ToString>(resource_name: N) -> Font {
        Font::type1(resource_name, "Helvetica")
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_id = refs.gen(RefType::Font(id.index()));

        let mut font = writer.type1_font(font_id);
        font.base_font(Name(self.base_font.as_bytes()));
        font.encoding_predefined(Name(self.encoding.as_bytes()));
    }
}
