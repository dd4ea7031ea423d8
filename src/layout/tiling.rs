use crate::content::ContentStream;
use crate::transform::Transform;
use log::debug;

/// How copies of one fixed-height drawing are spread down a page.
///
/// Distances are measured downward from the top of the page, in whatever unit
/// the caller draws in. As many whole items as fit are stacked with an even
/// gap between them, dropping one item if a first estimate of the gap falls
/// under the requested minimum.
///
/// When only one item fits there is no gap to spread; that item is centred
/// in the span instead. When nothing fits the layout is empty.
///
/// ```
/// use overlay_gen::layout::TileLayout;
///
/// let layout = TileLayout::compute(0.725, 9.876, 2.1, 0.1);
/// assert_eq!(layout.count(), 4);
/// assert!((layout.gap() - 0.250333).abs() < 1e-6);
/// assert_eq!(layout.tile_top(0), 0.725);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileLayout {
    top: f64,
    item_height: f64,
    count: usize,
    gap: f64,
    lead: f64,
}

impl TileLayout {
    /// Fit items of `item_height` between `usable_top` and `usable_bottom`
    /// with at least roughly `min_gap` between neighbours
    pub fn compute(usable_top: f64, usable_bottom: f64, item_height: f64, min_gap: f64) -> TileLayout {
        let available = usable_bottom - usable_top;

        let mut count = if available > 0.0 && item_height > 0.0 {
            (available / item_height).floor() as usize
        } else {
            0
        };

        if count >= 2 {
            let n = count as f64;
            let tentative_gap = available - (n * item_height) / (n - 1.0);
            if tentative_gap < min_gap {
                count -= 1;
            }
        }

        let (gap, lead) = match count {
            0 => (0.0, 0.0),
            1 => (0.0, (available - item_height) / 2.0),
            n => {
                let n = n as f64;
                ((available - n * item_height) / (n - 1.0), 0.0)
            }
        };

        debug!("tiling {count} items of height {item_height} into {available} (top {usable_top}, bottom {usable_bottom}), gap {gap}");

        TileLayout {
            top: usable_top,
            item_height,
            count,
            gap,
            lead,
        }
    }

    /// How many items fit
    pub fn count(&self) -> usize {
        self.count
    }

    /// The space between neighbouring items, zero unless there are at least two
    pub fn gap(&self) -> f64 {
        self.gap
    }

    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    /// Distance from the top of the page to the top edge of item `index`
    pub fn tile_top(&self, index: usize) -> f64 {
        self.top + self.lead + index as f64 * (self.item_height + self.gap)
    }

    /// Top edges of every item, in order
    pub fn tile_tops(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |i| self.tile_top(i))
    }

    /// Stamp `tile` onto `target` once per item.
    ///
    /// Each copy is moved so that its origin lands on the bottom-left corner
    /// of its slot, `left` from the page's left edge, and is wrapped in its
    /// own graphics state so the move doesn't leak into the next copy.
    pub fn place(&self, target: &mut ContentStream, page_height: f64, left: f64, tile: &ContentStream) {
        for (index, top) in self.tile_tops().enumerate() {
            let bottom = page_height - (top + self.item_height);
            debug!("tile {index}: top {top}, origin ({left}, {bottom})");

            let mut slot = ContentStream::new(true);
            slot.transform(&Transform::translate(left, bottom)).append(tile);
            target.append(&slot);
        }
    }
}
