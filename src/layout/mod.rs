//! Layout utilities for positioning repeated drawings on pages.
//!
//! [`TileLayout`](crate::layout::TileLayout) decides how many copies of a
//! drawing fit down a page and where each one goes, then stamps the copies
//! into a page's content stream.
//!
//! # Example
//!
//! ```
//! use overlay_gen::layout::TileLayout;
//! use overlay_gen::{ContentStream, Coord, Dimensions};
//!
//! let mut card = ContentStream::new(true);
//! card.move_to(Coord::new(0.0, 2.0))
//!     .rounded_rect(Dimensions::new(4.0, 2.0), 0.1)?
//!     .path_close_stroke();
//!
//! let layout = TileLayout::compute(0.5, 10.5, 2.0, 0.25);
//! let mut page = ContentStream::new(true);
//! layout.place(&mut page, 11.0, 2.25, &card);
//! assert_eq!(page.to_string().matches(" cm\n").count(), layout.count());
//! # Ok::<(), overlay_gen::OverlayError>(())
//! ```

mod tiling;

pub use tiling::*;
