//! Content stream construction.
//!
//! A [`ContentStream`] accumulates PDF path, colour and text operators as
//! text. Every operator is written between a fixed header and a fixed
//! trailer, so a stream created with [`ContentStream::new(true)`](ContentStream::new)
//! always stays wrapped in a `q ... Q` pair no matter what is appended to it.
//!
//! ```
//! use overlay_gen::{ContentStream, Coord, Dimensions};
//!
//! let mut s = ContentStream::new(true);
//! s.move_to(Coord::new(0.0, 1.0))
//!     .rect(Dimensions::new(2.0, 1.0))?
//!     .path_close_stroke();
//! assert_eq!(s.to_string(), "q 0 1 m 2 1 l 2 0 l 0 0 l s\nQ\n");
//! # Ok::<(), overlay_gen::OverlayError>(())
//! ```

use crate::error::OverlayError;
use crate::geometry::{Coord, Dimensions};
use crate::transform::Transform;
use crate::Colour;
use log::warn;
use std::fmt::{self, Write};

/// Distance of a quarter circle's Bézier control points from its end points,
/// as a fraction of the radius
const KAPPA: f64 = 4.0 * (std::f64::consts::SQRT_2 - 1.0) / 3.0;

const SIGNIFICANT_DIGITS: i32 = 6;

/// Which rule decides the inside of a path when filling
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum FillRule {
    #[default]
    NonzeroWinding,
    EvenOdd,
}

impl FillRule {
    fn suffix(self) -> &'static str {
        match self {
            FillRule::NonzeroWinding => "",
            FillRule::EvenOdd => "*",
        }
    }
}

/// Where text sits relative to the point it is drawn at.
///
/// Text width is never measured, so every alignment currently places the
/// start of the text at the given point.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A real number formatted the way content streams expect it: at most six
/// significant digits, no trailing zeros and no exponent.
///
/// PDF has no way to write NaN or infinity, so a non-finite operand is
/// logged at `warn` level and written as `0`.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Real(pub f64);

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if !v.is_finite() {
            warn!("non-finite operand {v} written as 0");
            return f.write_str("0");
        }
        if v == 0.0 {
            return f.write_str("0");
        }

        let magnitude = v.abs().log10().floor() as i32;
        let decimals = (SIGNIFICANT_DIGITS - 1 - magnitude).max(0) as usize;
        let s = format!("{v:.decimals$}");
        let s = if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.')
        } else {
            s.as_str()
        };
        match s {
            "-0" => f.write_str("0"),
            s => f.write_str(s),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Axis {
    X,
    Y,
}

/// Moves a Bézier control point off an arc end point along one axis
#[derive(Debug, Copy, Clone, PartialEq)]
struct Nudge {
    axis: Axis,
    sign: f64,
}

impl Nudge {
    const fn new(axis: Axis, sign: f64) -> Nudge {
        Nudge { axis, sign }
    }

    fn apply(self, p: Coord, distance: f64) -> Coord {
        match self.axis {
            Axis::X => Coord::new(p.x + self.sign * distance, p.y),
            Axis::Y => Coord::new(p.x, p.y + self.sign * distance),
        }
    }
}

/// Control point nudges for a quarter arc, keyed by whether the arc heads
/// right, whether it heads up, and whether it turns clockwise. The first
/// nudge pushes the first control point off the start point along the start
/// tangent; the second pulls the second control point back off the end point
/// against the end tangent.
fn arc_nudges(rightward: bool, upward: bool, clockwise: bool) -> [Nudge; 2] {
    use Axis::*;
    match (rightward, upward, clockwise) {
        // clockwise: the rounded rectangle corners
        (true, false, true) => [Nudge::new(X, 1.0), Nudge::new(Y, 1.0)],
        (true, true, true) => [Nudge::new(Y, 1.0), Nudge::new(X, -1.0)],
        (false, true, true) => [Nudge::new(X, -1.0), Nudge::new(Y, -1.0)],
        (false, false, true) => [Nudge::new(Y, -1.0), Nudge::new(X, 1.0)],
        // counter-clockwise
        (true, true, false) => [Nudge::new(X, 1.0), Nudge::new(Y, -1.0)],
        (true, false, false) => [Nudge::new(Y, -1.0), Nudge::new(X, -1.0)],
        (false, false, false) => [Nudge::new(X, -1.0), Nudge::new(Y, 1.0)],
        (false, true, false) => [Nudge::new(Y, 1.0), Nudge::new(X, 1.0)],
    }
}

/// Literal strings are written verbatim, which is only valid PDF if every
/// parenthesis is balanced and there is nothing to escape
fn is_plain_literal(text: &str) -> bool {
    let mut depth: usize = 0;
    for ch in text.chars() {
        match ch {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            '\\' | '\r' => return false,
            _ => {}
        }
    }
    depth == 0
}

/// A PDF content stream under construction.
///
/// The stream is made of a fixed header, a body that grows with every
/// operator, and a fixed trailer. The three parts are only joined when the
/// stream is finalised with [`finish`](ContentStream::finish) or
/// [`to_string`](ToString::to_string), so the trailer is always the last text
/// of the stream.
///
/// The builder also tracks the pen: the last point established by
/// [`move_to`](ContentStream::move_to), [`line_to`](ContentStream::line_to) or
/// [`arc_to`](ContentStream::arc_to). Closing a path forgets it, since the
/// pen then returns to a subpath start that isn't tracked. Operations that
/// draw relative to the pen return [`OverlayError::NoCurrentPoint`] when
/// there is none.
///
/// Operands should be finite; NaN and infinities are written as `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentStream {
    header: String,
    body: String,
    trailer: String,
    pen: Option<Coord>,
}

impl ContentStream {
    /// Start a stream, wrapped in a save / restore graphics state pair when
    /// `push_graphics_state` is set
    pub fn new(push_graphics_state: bool) -> ContentStream {
        if push_graphics_state {
            ContentStream::bracketed("q ", "Q\n")
        } else {
            ContentStream::bracketed("", "")
        }
    }

    /// Start a stream with arbitrary fixed header and trailer text
    pub fn bracketed<H: Into<String>, T: Into<String>>(header: H, trailer: T) -> ContentStream {
        ContentStream {
            header: header.into(),
            body: String::new(),
            trailer: trailer.into(),
            pen: None,
        }
    }

    /// The pen position, if one is established
    pub fn current_point(&self) -> Option<Coord> {
        self.pen
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        // writing to a String can't fail
        let _ = self.body.write_fmt(args);
        self
    }

    fn require_pen(&self, operation: &'static str) -> Result<Coord, OverlayError> {
        self.pen.ok_or(OverlayError::NoCurrentPoint { operation })
    }

    /// Select the named colour space for filling and / or stroking
    pub fn set_color_space(&mut self, name: &str, fill: bool, stroke: bool) -> &mut Self {
        if fill {
            self.emit(format_args!("/{name} cs "));
        }
        if stroke {
            self.emit(format_args!("/{name} CS "));
        }
        self
    }

    /// Set the fill and / or stroke colour in the current colour space
    pub fn set_color(&mut self, colour: Colour, fill: bool, stroke: bool) -> &mut Self {
        let Colour { r, g, b } = colour;
        if fill {
            self.emit(format_args!("{} {} {} sc ", Real(r), Real(g), Real(b)));
        }
        if stroke {
            self.emit(format_args!("{} {} {} SC ", Real(r), Real(g), Real(b)));
        }
        self
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.emit(format_args!("{} w ", Real(width)))
    }

    /// Concatenate a transformation onto the current transformation matrix
    pub fn transform(&mut self, transform: &Transform) -> &mut Self {
        let [a, b, c, d, e, f] = transform.coefficients();
        self.emit(format_args!(
            "{} {} {} {} {} {} cm\n",
            Real(a),
            Real(b),
            Real(c),
            Real(d),
            Real(e),
            Real(f)
        ))
    }

    /// Begin a new subpath at `dest`
    pub fn move_to(&mut self, dest: Coord) -> &mut Self {
        self.emit(format_args!("{} {} m ", Real(dest.x), Real(dest.y)));
        self.pen = Some(dest);
        self
    }

    /// Draw a straight segment from the pen to `dest`
    pub fn line_to(&mut self, dest: Coord) -> &mut Self {
        self.emit(format_args!("{} {} l ", Real(dest.x), Real(dest.y)));
        self.pen = Some(dest);
        self
    }

    /// Draw a quarter circle from the pen to `dest` as a single cubic Bézier.
    ///
    /// Only axis-aligned 90° arcs can be drawn: `dest` must differ from the
    /// pen by the same amount in x and in y. The radius is taken from the x
    /// difference alone and this isn't checked.
    pub fn arc_to(&mut self, dest: Coord, clockwise: bool) -> Result<&mut Self, OverlayError> {
        let start = self.require_pen("arc_to")?;

        let radius = (dest.x - start.x).abs();
        let reach = radius * KAPPA;

        let [first, second] = arc_nudges(dest.x > start.x, dest.y > start.y, clockwise);
        let p1 = first.apply(start, reach);
        let p2 = second.apply(dest, reach);

        self.emit(format_args!(
            "{} {} {} {} {} {} c\n",
            Real(p1.x),
            Real(p1.y),
            Real(p2.x),
            Real(p2.y),
            Real(dest.x),
            Real(dest.y)
        ));
        self.pen = Some(dest);
        Ok(self)
    }

    /// Trace the top, right and bottom edges of a rectangle whose top-left
    /// corner is the pen. The left edge is left for the caller to close.
    pub fn rect(&mut self, dimensions: Dimensions) -> Result<&mut Self, OverlayError> {
        let origin = self.require_pen("rect")?;
        let Dimensions { width, height } = dimensions;

        self.line_to(Coord::new(origin.x + width, origin.y)) // top
            .line_to(Coord::new(origin.x + width, origin.y - height)) // right
            .line_to(Coord::new(origin.x, origin.y - height)); // bottom
        Ok(self)
    }

    /// Trace a rectangle with quarter circle corners, clockwise from the top
    /// of its left edge. The pen is the top-left corner of the unrounded
    /// rectangle and is moved back there afterwards.
    pub fn rounded_rect(&mut self, dimensions: Dimensions, radius: f64) -> Result<&mut Self, OverlayError> {
        let origin = self.require_pen("rounded_rect")?;
        if radius == 0.0 {
            return self.rect(dimensions);
        }

        let Coord { x, y } = origin;
        let Dimensions { width, height } = dimensions;

        self.move_to(Coord::new(x, y - radius));
        self.arc_to(Coord::new(x + radius, y), true)?;
        self.line_to(Coord::new(x + width - radius, y));
        self.arc_to(Coord::new(x + width, y - radius), true)?;
        self.line_to(Coord::new(x + width, y - height + radius));
        self.arc_to(Coord::new(x + width - radius, y - height), true)?;
        self.line_to(Coord::new(x + radius, y - height));
        self.arc_to(Coord::new(x, y - height + radius), true)?;
        self.line_to(Coord::new(x, y - radius));
        self.move_to(origin);
        Ok(self)
    }

    /// Draw a line of text as a self-contained text object.
    ///
    /// `text` is written as a literal string without any escaping, so it
    /// must not contain unbalanced parentheses or backslashes.
    pub fn text(
        &mut self,
        dest: Coord,
        alignment: HorizontalAlignment,
        text: &str,
        font_name: &str,
        size: f64,
    ) -> &mut Self {
        // TODO: measure glyph advances once fonts carry metrics
        let width = 0.0;
        let x = match alignment {
            HorizontalAlignment::Left => dest.x,
            HorizontalAlignment::Center => dest.x - width / 2.0,
            HorizontalAlignment::Right => dest.x - width,
        };

        if !is_plain_literal(text) {
            warn!("text {text:?} is not a valid literal string and will corrupt the content stream");
        }

        self.emit(format_args!(
            "BT {} {} Td 0 Tr /{} {} Tf\n({}) Tj ET\n",
            Real(x),
            Real(dest.y),
            font_name,
            Real(size),
            text
        ))
    }

    pub fn path_close(&mut self) -> &mut Self {
        self.pen = None;
        self.emit(format_args!("h\n"))
    }

    pub fn path_stroke(&mut self) -> &mut Self {
        self.emit(format_args!("S\n"))
    }

    pub fn path_close_stroke(&mut self) -> &mut Self {
        self.pen = None;
        self.emit(format_args!("s\n"))
    }

    pub fn path_fill(&mut self, rule: FillRule) -> &mut Self {
        self.emit(format_args!("f{}\n", rule.suffix()))
    }

    pub fn path_fill_stroke(&mut self, rule: FillRule) -> &mut Self {
        self.emit(format_args!("B{}\n", rule.suffix()))
    }

    pub fn path_close_fill_stroke(&mut self, rule: FillRule) -> &mut Self {
        self.pen = None;
        self.emit(format_args!("b{}\n", rule.suffix()))
    }

    /// Nest a finished stream, header and trailer included, inside this one
    pub fn append(&mut self, other: &ContentStream) -> &mut Self {
        self.emit(format_args!("{other}"))
    }

    /// Join header, body and trailer into the final operator bytes
    pub fn finish(self) -> Vec<u8> {
        String::from(self).into_bytes()
    }
}

impl fmt::Display for ContentStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header)?;
        f.write_str(&self.body)?;
        f.write_str(&self.trailer)
    }
}

impl From<ContentStream> for String {
    fn from(s: ContentStream) -> Self {
        let ContentStream {
            mut header,
            body,
            trailer,
            ..
        } = s;
        header.reserve(body.len() + trailer.len());
        header.push_str(&body);
        header.push_str(&trailer);
        header
    }
}
