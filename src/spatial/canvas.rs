//! The 32x32 canvas: corner placement, margin embedding and rotation
//!
//! The canvas is an owned buffer. The margin loop embeds a strip into the
//! rightmost columns and then rotates the whole canvas a quarter turn
//! counter-clockwise, so every side is processed as "the right side".

use crate::io::configuration::{CANVAS_SIZE, CORNER_SIZE, MARGIN_WIDTH};
use crate::io::error::{MarginError, Result};
use crate::spatial::cells::Cell;
use crate::spatial::pattern::{Pattern4, Seed, render_rows};
use ndarray::{Array2, ArrayView2, Axis};
use std::fmt;
use std::str::FromStr;

/// One of the four 4x4 corners of the canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Rows 0-3, columns 0-3
    TopLeft,
    /// Rows 0-3, columns 28-31
    TopRight,
    /// Rows 28-31, columns 0-3
    BottomLeft,
    /// Rows 28-31, columns 28-31
    BottomRight,
}

impl Corner {
    /// All corners
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Canvas `(row, col)` of the corner's top-left cell
    pub const fn origin(self) -> (usize, usize) {
        let far = CANVAS_SIZE - CORNER_SIZE;
        match self {
            Self::TopLeft => (0, 0),
            Self::TopRight => (0, far),
            Self::BottomLeft => (far, 0),
            Self::BottomRight => (far, far),
        }
    }

    /// Canonical name
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "topLeft",
            Self::TopRight => "topRight",
            Self::BottomLeft => "bottomLeft",
            Self::BottomRight => "bottomRight",
        }
    }
}

impl FromStr for Corner {
    type Err = MarginError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace(['_', '-'], "").as_str() {
            "topleft" => Ok(Self::TopLeft),
            "topright" => Ok(Self::TopRight),
            "bottomleft" => Ok(Self::BottomLeft),
            "bottomright" => Ok(Self::BottomRight),
            _ => Err(MarginError::UnknownCorner {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Canvas side, in the order the margin loop visits them
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// First margin
    Right,
    /// Second margin, after one left rotation
    Bottom,
    /// Third margin
    Left,
    /// Fourth margin
    Top,
}

impl Side {
    /// All sides in loop order
    pub const ALL: [Self; 4] = [Self::Right, Self::Bottom, Self::Left, Self::Top];

    /// Side processed at loop iteration `step` (taken modulo 4)
    pub const fn from_step(step: usize) -> Self {
        match step % 4 {
            0 => Self::Right,
            1 => Self::Bottom,
            2 => Self::Left,
            _ => Self::Top,
        }
    }

    /// The side processed after this one
    pub const fn next(self) -> Self {
        match self {
            Self::Right => Self::Bottom,
            Self::Bottom => Self::Left,
            Self::Left => Self::Top,
            Self::Top => Self::Right,
        }
    }

    /// Canonical name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Top => "top",
        }
    }
}

impl FromStr for Side {
    type Err = MarginError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "right" => Ok(Self::Right),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "top" => Ok(Self::Top),
            _ => Err(MarginError::UnknownSide {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Square bit canvas indexed `[row, col]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    cells: Array2<bool>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a blank canvas
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: Array2::from_elem((CANVAS_SIZE, CANVAS_SIZE), false),
        }
    }

    /// Wrap an existing array
    ///
    /// # Errors
    ///
    /// Returns an error if the array is not 32x32
    pub fn from_array(cells: Array2<bool>) -> Result<Self> {
        if cells.dim() != (CANVAS_SIZE, CANVAS_SIZE) {
            return Err(crate::io::error::invalid_parameter(
                "canvas",
                &format!("{:?}", cells.dim()),
                &format!("canvas must be {CANVAS_SIZE}x{CANVAS_SIZE}"),
            ));
        }
        Ok(Self { cells })
    }

    /// Canvas with the seed pair's corners in place
    ///
    /// The expanded start seed sits top-right and the expanded end seed
    /// bottom-right; their inverses occupy the diagonally opposite corners.
    pub fn from_seed_pair(start: &Seed, end: &Seed) -> Self {
        let start_pattern = start.expand();
        let end_pattern = end.expand();

        let mut canvas = Self::new();
        canvas.place_corner(Corner::TopRight, &start_pattern);
        canvas.place_corner(Corner::BottomRight, &end_pattern);
        canvas.place_corner(Corner::BottomLeft, &start_pattern.inverted());
        canvas.place_corner(Corner::TopLeft, &end_pattern.inverted());
        canvas
    }

    /// Underlying cell array
    pub const fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Whether the cell at `(row, col)` is filled; outside reads as unfilled
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells.get([row, col]).copied().unwrap_or(false)
    }

    /// Set a cell; positions outside the canvas are ignored
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        if let Some(cell) = self.cells.get_mut([row, col]) {
            *cell = value;
        }
    }

    /// Number of filled cells
    pub fn count_filled(&self) -> usize {
        self.cells.iter().filter(|&&bit| bit).count()
    }

    /// Copy out one corner
    pub fn extract_corner(&self, corner: Corner) -> Pattern4 {
        let (row0, col0) = corner.origin();
        let mut pattern = Pattern4::empty();
        for y in 0..CORNER_SIZE {
            for x in 0..CORNER_SIZE {
                pattern.set(Cell::new(x, y), self.get(row0 + y, col0 + x));
            }
        }
        pattern
    }

    /// Overwrite one corner
    pub fn place_corner(&mut self, corner: Corner, pattern: &Pattern4) {
        let (row0, col0) = corner.origin();
        for y in 0..CORNER_SIZE {
            for x in 0..CORNER_SIZE {
                self.set(row0 + y, col0 + x, pattern.get(Cell::new(x, y)));
            }
        }
    }

    /// Write margin rows into the rightmost columns, starting at row 0
    ///
    /// Rows beyond the canvas height and columns beyond the margin width are
    /// dropped.
    pub fn embed_margin(&mut self, margin: ArrayView2<'_, bool>) {
        let first_col = CANVAS_SIZE - MARGIN_WIDTH;
        for ((row, col), &value) in margin.indexed_iter() {
            if row < CANVAS_SIZE && col < MARGIN_WIDTH {
                self.set(row, first_col + col, value);
            }
        }
    }

    /// Copy of this canvas rotated 90 degrees counter-clockwise
    ///
    /// Cell `(r, c)` moves to `(N - 1 - c, r)`.
    #[must_use]
    pub fn rotated_left(&self) -> Self {
        let mut view = self.cells.t();
        view.invert_axis(Axis(0));
        Self {
            cells: view.to_owned(),
        }
    }

    /// Rotate in place 90 degrees counter-clockwise
    pub fn rotate_left(&mut self) {
        *self = self.rotated_left();
    }
}

/// Rotate a canvas 90 degrees counter-clockwise
pub fn rotate_canvas_90_left(canvas: &Canvas) -> Canvas {
    canvas.rotated_left()
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<bool>> = self.cells.rows().into_iter().map(|row| row.to_vec()).collect();
        write!(f, "{}", render_rows(rows.iter().map(Vec::as_slice)))
    }
}
