use super::geometry::{OverlayGeometry, RegistrationGeometry};
use super::legend::LegendTable;
use crate::colours;
use crate::content::{ContentStream, FillRule, HorizontalAlignment};
use crate::geometry::{Coord, Dimensions};
use crate::units::*;
use crate::OverlayError;

/// Stroke width of overlay and key outlines
const OUTLINE_WIDTH: Mm = Mm(0.1);

/// Legend baseline, relative to the top-left corner of its key
const LEGEND_OFFSET: Coord = Coord::new(-0.125, 0.03);

/// How legends are printed
#[derive(Debug, Clone, Copy)]
pub struct Legends<'a> {
    pub table: &'a LegendTable,
    /// Resource name of the font to print with
    pub font_name: &'a str,
    pub size: In,
}

/// Registration marks for a cutting plotter, in page coordinates (inches,
/// origin at the bottom-left of the page): a filled square at the top-left
/// of the cut area and right angles at its bottom-left and top-right.
pub fn registration(
    page_width: f64,
    page_height: f64,
    geom: &RegistrationGeometry,
) -> Result<ContentStream, OverlayError> {
    let left = geom.inset_left;
    let right = page_width - geom.inset_right;
    let top = page_height - geom.inset_top;
    let bottom = geom.inset_bottom;

    let mut s = ContentStream::new(true);
    s.set_line_width(geom.line_width)
        .set_color_space("DeviceRGB", true, true)
        .set_color(colours::BLACK, true, true);

    s.move_to(Coord::new(left, top))
        .rect(Dimensions::new(geom.square_size, geom.square_size))?
        .path_close_fill_stroke(FillRule::NonzeroWinding);

    s.move_to(Coord::new(left, bottom + geom.line_length))
        .line_to(Coord::new(left, bottom))
        .line_to(Coord::new(left + geom.line_length, bottom))
        .path_stroke();

    s.move_to(Coord::new(right - geom.line_length, top))
        .line_to(Coord::new(right, top))
        .line_to(Coord::new(right, top - geom.line_length))
        .path_stroke();

    Ok(s)
}

/// One overlay in its own coordinates (inches, origin at its bottom-left
/// corner): optionally the outline of the overlay and every key hole, and
/// optionally a legend above each labelled key.
pub fn overlay(
    geom: &OverlayGeometry,
    outlines: bool,
    legends: Option<&Legends<'_>>,
) -> Result<ContentStream, OverlayError> {
    let mut s = ContentStream::new(true);
    s.set_line_width(In::from(OUTLINE_WIDTH).0)
        .set_color_space("DeviceRGB", false, true)
        .set_color(colours::BLACK, false, true);

    if outlines {
        s.move_to(Coord::new(0.0, geom.height))
            .rounded_rect(Dimensions::new(geom.width, geom.height), geom.corner_radius)?
            .path_close_stroke();
    }

    for key in geom.keys() {
        if outlines {
            s.move_to(Coord::new(key.x, key.y))
                .rounded_rect(Dimensions::new(geom.key_width, key.height), geom.key_corner_radius)?
                .path_close_stroke();
        }

        let Some(legends) = legends else {
            continue;
        };
        if let Some(label) = legends.table.label(key.code) {
            s.text(
                Coord::new(
                    key.x + geom.key_width / 2.0 + LEGEND_OFFSET.x,
                    key.y + LEGEND_OFFSET.y,
                ),
                HorizontalAlignment::Center,
                label,
                legends.font_name,
                legends.size.0,
            );
        }
    }

    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::geometry::{CAMEO4_NO_MAT, HP_VOYAGER};

    #[test]
    fn registration_marks() {
        let s = registration(8.5, 11.0, &CAMEO4_NO_MAT).expect("pen is set").to_string();
        assert!(s.starts_with("q 0.019685 w /DeviceRGB cs /DeviceRGB CS 0 0 0 sc 0 0 0 SC "), "{s}");
        assert!(s.contains("0.625 10.375 m 0.875 10.375 l 0.875 10.125 l 0.625 10.125 l b\n"), "{s}");
        assert!(s.contains("0.625 1.274 m 0.625 1.024 l 0.875 1.024 l S\n"), "{s}");
        assert!(s.contains("7.625 10.375 m 7.875 10.375 l 7.875 10.125 l S\n"), "{s}");
        assert!(s.ends_with("S\nQ\n"));
    }

    #[test]
    fn outlines_only() {
        let s = overlay(&HP_VOYAGER, true, None).expect("pen is set").to_string();
        // the overlay itself plus 39 keys, four corners each
        assert_eq!(s.matches(" m s\n").count(), 40);
        assert_eq!(s.matches(" c\n").count(), 160);
        assert!(!s.contains("Tj"));
        assert!(s.starts_with("q 0.00393701 w /DeviceRGB CS 0 0 0 SC 0 2.1 m 0 2.075 m "), "{s}");
    }

    #[test]
    fn legends_only() {
        let table = LegendTable::default();
        let legends = Legends {
            table: &table,
            font_name: "F1",
            size: Pt(6.0).into(),
        };
        let s = overlay(&HP_VOYAGER, false, Some(&legends)).expect("pen is set").to_string();
        assert_eq!(s.matches(" Tj ").count(), 36);
        assert!(!s.contains(" s\n"));
        assert!(s.contains("/F1 0.0833333 Tf\n(ln e^x) Tj ET\n"), "{s}");
        assert!(!s.contains("()"));
    }

    #[test]
    fn legend_sits_above_its_key() {
        let table = LegendTable::new([(11, "A")]);
        let legends = Legends {
            table: &table,
            font_name: "F1",
            size: In(0.1),
        };
        let s = overlay(&HP_VOYAGER, false, Some(&legends)).expect("pen is set").to_string();
        let key = HP_VOYAGER.keys().next().expect("first key");
        let x = key.x + HP_VOYAGER.key_width / 2.0 - 0.125;
        let y = key.y + 0.03;
        assert!(
            s.contains(&format!(
                "BT {} {} Td",
                crate::content::Real(x),
                crate::content::Real(y)
            )),
            "{s}"
        );
    }
}
