//! Inner corner pixels, or a diagonal where an adjacent band is empty

use crate::finishing::domains::MarginDomain;
use crate::spatial::{Canvas, Corner, Side};

/// Size of the block a fallback diagonal is drawn in
const BLOCK: usize = 4;

/// Centre pixel of an inner corner as `(row, col)`
pub const fn inner_corner_pixel(corner: Corner) -> (usize, usize) {
    match corner {
        Corner::TopLeft => (9, 9),
        Corner::TopRight => (9, 22),
        Corner::BottomLeft => (22, 9),
        Corner::BottomRight => (22, 22),
    }
}

/// Top-left `(row, col)` of the block a fallback diagonal is drawn in
pub const fn inner_corner_block(corner: Corner) -> (usize, usize) {
    match corner {
        Corner::TopLeft => (6, 6),
        Corner::TopRight => (6, 22),
        Corner::BottomLeft => (22, 6),
        Corner::BottomRight => (22, 22),
    }
}

/// The two sides meeting at a corner
pub const fn adjacent_sides(corner: Corner) -> (Side, Side) {
    match corner {
        Corner::TopLeft => (Side::Top, Side::Left),
        Corner::TopRight => (Side::Top, Side::Right),
        Corner::BottomLeft => (Side::Bottom, Side::Left),
        Corner::BottomRight => (Side::Bottom, Side::Right),
    }
}

/// Whether a corner's fallback diagonal runs bottom-left to top-right
const fn is_slash(corner: Corner) -> bool {
    matches!(corner, Corner::TopLeft | Corner::BottomRight)
}

/// Fill inner corners whose two adjacent AND bands are both filled
///
/// Band state is read once before any corner is drawn. Corners with an empty
/// adjacent band get a diagonal across their 4x4 block instead.
pub fn fill_inner_corners(canvas: &mut Canvas) {
    let band_filled = |side: Side| MarginDomain::for_side(side).and_band_filled(canvas);
    let filled: Vec<(Corner, bool)> = Corner::ALL
        .into_iter()
        .map(|corner| {
            let (first, second) = adjacent_sides(corner);
            (corner, band_filled(first) && band_filled(second))
        })
        .collect();

    for (corner, both_filled) in filled {
        if both_filled {
            let (row, col) = inner_corner_pixel(corner);
            canvas.set(row, col, true);
        } else {
            let (row0, col0) = inner_corner_block(corner);
            for i in 0..BLOCK {
                let j = if is_slash(corner) { BLOCK - 1 - i } else { i };
                canvas.set(row0 + i, col0 + j, true);
            }
        }
    }
}
