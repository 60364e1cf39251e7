//! Spatial data structures for seeds, corners and the canvas
//!
//! This module contains spatial-related functionality including:
//! - Cell coordinates and cell sets within a 4x4 frame
//! - Seed and corner patterns with symmetric expansion
//! - The 32x32 canvas with corner access, margin embedding and rotation

/// Canvas buffer, corner and side naming
pub mod canvas;
/// Cell coordinates and bitset-backed cell sets
pub mod cells;
/// Seeds, 4x4 patterns and the symmetry expander
pub mod pattern;

pub use canvas::{Canvas, Corner, Side};
pub use cells::{Cell, CellSet};
pub use pattern::{Pattern4, Seed};
