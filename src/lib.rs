mod colour;
pub use colour::*;

mod content;
pub use content::*;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod geometry;
pub use geometry::*;

mod info;
pub use info::*;

/// Utility functions and structures to lay out repeated drawings on pages
pub mod layout;

/// Calculator keyboard overlays: registration marks, key outlines, legends and sheets
pub mod overlay;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod transform;
pub use transform::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export pdf-writer, which assembles the document objects
pub use pdf_writer;
