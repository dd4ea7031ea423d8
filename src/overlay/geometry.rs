use crate::units::MM_PER_IN;

/// Where a cutting plotter looks for its registration marks, and how big they
/// are. All values are in inches, measured from the page edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegistrationGeometry {
    pub inset_left: f64,
    pub inset_right: f64,
    pub inset_top: f64,
    pub inset_bottom: f64,

    pub square_size: f64,
    pub line_length: f64,
    pub line_width: f64,
}

/// Silhouette Cameo 4 registration marks, printed without a cutting mat
pub const CAMEO4_NO_MAT: RegistrationGeometry = RegistrationGeometry {
    inset_left: 0.625,
    inset_right: 0.625,
    inset_top: 0.625,
    inset_bottom: 1.024,

    square_size: 0.25,
    line_length: 0.25,
    line_width: 0.5 / MM_PER_IN,
};

/// Outline and key grid of one overlay, in inches. The overlay's origin is
/// its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayGeometry {
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,

    pub key_col_pitch: f64,
    pub key_row_pitch: f64,
    /// Distance from the top of the overlay to the top of the first key row
    pub key_row_1_offset: f64,

    pub key_width: f64,
    pub key_height: f64,
    pub key_corner_radius: f64,
}

/// HP Voyager series (10C, 11C, 12C, 15C, 16C)
pub const HP_VOYAGER: OverlayGeometry = OverlayGeometry {
    width: 4.65,
    height: 2.10,
    corner_radius: 0.025,

    key_col_pitch: 0.45,
    key_row_pitch: 0.50,
    key_row_1_offset: 0.133,

    key_width: 0.34,
    key_height: 0.32,
    key_corner_radius: 0.025,
};

/// SwissMicros DM1xL series
pub const SWISSMICROS_DM1XL: OverlayGeometry = OverlayGeometry {
    width: 4.75,
    height: 1.95,
    corner_radius: 0.025,

    key_col_pitch: 0.475,
    key_row_pitch: 0.475,
    key_row_1_offset: 0.175,

    key_width: 0.33,
    key_height: 0.30,
    key_corner_radius: 0.025,
};

const KEY_ROWS: usize = 4;
const KEY_COLS: usize = 10;
const ENTER_ROW: usize = 2;
const ENTER_COL: usize = 5;

/// One key hole of an overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Key {
    pub row: usize,
    pub col: usize,
    /// The calculator's user key code: row and column, counted from 1, with
    /// the tenth column as 0
    pub code: u32,
    /// Left edge, from the overlay's left edge
    pub x: f64,
    /// Top edge, from the overlay's bottom edge
    pub y: f64,
    pub height: f64,
}

impl OverlayGeometry {
    /// Every key hole, row by row. ENTER spans the third and fourth rows of
    /// the sixth column, so it is one tall key.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        (0..KEY_ROWS)
            .flat_map(|row| (0..KEY_COLS).map(move |col| (row, col)))
            .filter(|&(row, col)| !(row == ENTER_ROW + 1 && col == ENTER_COL))
            .map(move |(row, col)| {
                let height = if row == ENTER_ROW && col == ENTER_COL {
                    self.key_height + self.key_row_pitch
                } else {
                    self.key_height
                };
                Key {
                    row,
                    col,
                    code: ((row + 1) * 10 + (col + 1) % 10) as u32,
                    x: self.width / 2.0 - (KEY_COLS as f64 / 2.0) * self.key_col_pitch
                        + (self.key_col_pitch - self.key_width) / 2.0
                        + col as f64 * self.key_col_pitch,
                    y: self.height - (row as f64 * self.key_row_pitch + self.key_row_1_offset),
                    height,
                }
            })
    }
}
