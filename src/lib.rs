//! Transmission margins between mirror-symmetric corner patterns
//!
//! A 2x2 seed expands into a symmetric 4x4 corner. Four corners sit on a
//! 32x32 canvas; for each side, the cells that differ between its two
//! corners are split into segments and greedily moved so the start corner
//! becomes the end corner. The moves are encoded into a margin strip
//! embedded along that side. The crate also enumerates which of the 256
//! seed pairs admit four valid margins.

#![forbid(unsafe_code)]

/// Corner algebra, segmentation, move selection, margin assembly and the canvas loop
pub mod algorithm;
/// Post-processing stages for a canvas with all four margins
pub mod finishing;
/// Input/output operations and error handling
pub mod io;
/// Seeds, corner patterns and the canvas
pub mod spatial;

pub use algorithm::{build_margin, compute_solvability_matrix};
pub use io::error::{MarginError, Result};
pub use spatial::{Canvas, Pattern4, Seed};
pub use spatial::canvas::rotate_canvas_90_left;
pub use spatial::pattern::expand_seed;
