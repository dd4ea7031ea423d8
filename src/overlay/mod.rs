//! Calculator keyboard overlays.
//!
//! An overlay is a thin card laid over a calculator's keyboard, with a hole
//! for each key and short labels ("legends") printed above the keys. A
//! [`Sheet`] stacks as many overlays as fit on a page, optionally with
//! registration marks so a cutting plotter can cut the holes out of the
//! printed sheet.
//!
//! ```
//! use overlay_gen::overlay::{Device, Mode, Sheet};
//!
//! let sheet = Sheet::new(Device::Voyager, Mode::All);
//! let mut pdf = Vec::new();
//! sheet.document()?.write(&mut pdf)?;
//! assert!(pdf.starts_with(b"%PDF"));
//! # Ok::<(), overlay_gen::OverlayError>(())
//! ```

mod draw;
mod geometry;
mod legend;
mod sheet;

pub use draw::*;
pub use geometry::*;
pub use legend::*;
pub use sheet::*;

/// What a sheet is for
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Key and overlay outlines only, for the plotter to cut
    Cut,
    /// Registration marks and legends, for the printer
    Print,
    /// Everything, to preview alignment
    All,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Cut => "cut",
            Mode::Print => "print",
            Mode::All => "all",
        }
    }

    pub fn outlines(self) -> bool {
        matches!(self, Mode::Cut | Mode::All)
    }

    pub fn registration(self) -> bool {
        matches!(self, Mode::Print | Mode::All)
    }

    pub fn legends(self) -> bool {
        matches!(self, Mode::Print | Mode::All)
    }
}

/// The calculator an overlay is made for
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Device {
    /// HP Voyager series
    #[default]
    Voyager,
    /// SwissMicros DM1xL series
    Dm1xl,
}

impl Device {
    /// Model name used in output file names
    pub fn model(self) -> &'static str {
        match self {
            Device::Voyager => "voyager",
            Device::Dm1xl => "dm1xl",
        }
    }

    pub fn geometry(self) -> OverlayGeometry {
        match self {
            Device::Voyager => HP_VOYAGER,
            Device::Dm1xl => SWISSMICROS_DM1XL,
        }
    }
}

/// The default output file name, e.g. `voyager-overlay-cut.pdf`
pub fn output_filename(device: Device, mode: Mode) -> String {
    format!("{}-overlay-{}.pdf", device.model(), mode.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names() {
        assert_eq!(output_filename(Device::Voyager, Mode::Cut), "voyager-overlay-cut.pdf");
        assert_eq!(output_filename(Device::Dm1xl, Mode::Print), "dm1xl-overlay-print.pdf");
        assert_eq!(output_filename(Device::default(), Mode::All), "voyager-overlay-all.pdf");
    }

    #[test]
    fn modes() {
        assert!(Mode::Cut.outlines() && !Mode::Cut.registration() && !Mode::Cut.legends());
        assert!(!Mode::Print.outlines() && Mode::Print.registration() && Mode::Print.legends());
        assert!(Mode::All.outlines() && Mode::All.registration() && Mode::All.legends());
    }
}
