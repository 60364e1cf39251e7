//! Finishing pipeline applied to a canvas that carries all four margins
//!
//! Stages run in a fixed order: margin compression, inner corners, centre
//! pull, gridlines. Each stage mutates the canvas in place.

/// Centre band filled from each side's input cells
pub mod centre;
/// OR/AND compression of each margin's input columns or rows
pub mod compression;
/// Per-side line indices used by the finishing stages
pub mod domains;
/// Square borders and full-width lines
pub mod gridlines;
/// Inner corner pixels and fallback diagonals
pub mod inner_corners;
/// Game of Life emergence, border tracing and dissipation of the solvability matrix
pub mod life;

use crate::spatial::Canvas;

pub use centre::pull_centre;
pub use compression::{compress_all_margins, compress_margin};
pub use domains::{DomainAxis, MarginDomain};
pub use gridlines::draw_gridlines;
pub use inner_corners::fill_inner_corners;
pub use life::{emergence_frames, framed_matrix, life_step, solvability_animation};

/// Run every finishing stage in order
pub fn finish(canvas: &mut Canvas) {
    compress_all_margins(canvas);
    fill_inner_corners(canvas);
    pull_centre(canvas);
    draw_gridlines(canvas);
    log::debug!("Finishing complete: {} cells filled", canvas.count_filled());
}

/// Copy of `canvas` after [`finish`]
#[must_use]
pub fn finished(canvas: &Canvas) -> Canvas {
    let mut result = canvas.clone();
    finish(&mut result);
    result
}
