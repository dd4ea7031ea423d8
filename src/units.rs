//! Physical units used when measuring pages and drawings.
//!
//! Drawing code works in inches, the PDF page itself is measured in points.
//! Conversions between the two go through [`From`]:
//!
//! ```
//! use overlay_gen::{In, Mm, Pt};
//!
//! let margin: Pt = In(0.5).into();
//! assert_eq!(margin, Pt(36.0));
//!
//! let line: In = Mm(25.4).into();
//! assert_eq!(line, In(1.0));
//! ```

use derive_more::{Add, AddAssign, Deref, Display, From, Into, Sub, SubAssign};

/// Points per inch
pub const PT_PER_IN: f64 = 72.0;
/// Millimetres per inch
pub const MM_PER_IN: f64 = 25.4;

/// PostScript points, 1/72 of an inch
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, AddAssign, SubAssign, Deref, Display, From, Into,
)]
pub struct Pt(pub f64);

/// Inches
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, AddAssign, SubAssign, Deref, Display, From, Into,
)]
pub struct In(pub f64);

/// Millimetres
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, AddAssign, SubAssign, Deref, Display, From, Into,
)]
pub struct Mm(pub f64);

impl From<In> for Pt {
    fn from(v: In) -> Self {
        Pt(v.0 * PT_PER_IN)
    }
}

impl From<Pt> for In {
    fn from(v: Pt) -> Self {
        In(v.0 / PT_PER_IN)
    }
}

impl From<Mm> for In {
    fn from(v: Mm) -> Self {
        In(v.0 / MM_PER_IN)
    }
}

impl From<Mm> for Pt {
    fn from(v: Mm) -> Self {
        Pt(v.0 * PT_PER_IN / MM_PER_IN)
    }
}
