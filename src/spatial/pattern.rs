//! Seed and corner patterns with the mirror-symmetric seed expansion
//!
//! A seed is the 2x2 unit of user input. Expanding it mirrors each row
//! left-right and then the pair of rows top-bottom, so the resulting 4x4
//! corner is symmetric under both reflections.

use crate::io::configuration::{CORNER_SIZE, SEED_COUNT, SEED_SIZE};
use crate::io::error::{MarginError, Result};
use crate::spatial::cells::{Cell, CellSet};
use ndarray::Array2;
use std::fmt;
use std::str::FromStr;

/// Glyph used for filled cells in text renderings
pub const FILLED_GLYPH: char = '■';
/// Glyph used for empty cells in text renderings
pub const EMPTY_GLYPH: char = '·';

/// A 2x2 bit matrix `[[a, b], [c, d]]`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Seed {
    cells: [[bool; SEED_SIZE]; SEED_SIZE],
}

impl Seed {
    /// Create a seed from explicit rows
    pub const fn new(cells: [[bool; SEED_SIZE]; SEED_SIZE]) -> Self {
        Self { cells }
    }

    /// Build the seed whose cells are the bits of `index`, most significant first
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeed` if `index` is not in 0-15
    pub fn from_index(index: usize) -> Result<Self> {
        if index >= SEED_COUNT {
            return Err(MarginError::InvalidSeed {
                value: index.to_string(),
            });
        }
        let bit = |shift: usize| (index >> shift) & 1 == 1;
        Ok(Self::new([[bit(3), bit(2)], [bit(1), bit(0)]]))
    }

    /// All sixteen seeds in index order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SEED_COUNT).filter_map(|index| Self::from_index(index).ok())
    }

    /// The integer whose bits spell this seed
    pub fn index(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .fold(0, |acc, &bit| (acc << 1) | usize::from(bit))
    }

    /// The raw rows of the seed
    pub const fn cells(&self) -> &[[bool; SEED_SIZE]; SEED_SIZE] {
        &self.cells
    }

    /// Toggle a single cell, as a click on the input grid would
    #[must_use]
    pub fn toggled(mut self, row: usize, col: usize) -> Self {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = !*cell;
        }
        self
    }

    /// Expand into the mirror-symmetric corner pattern
    pub fn expand(&self) -> Pattern4 {
        expand_seed(self)
    }
}

impl FromStr for Seed {
    type Err = MarginError;

    /// Accepts four binary digits in row-major order (`"1001"`) or an integer 0-15
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let binary = trimmed.len() == SEED_SIZE * SEED_SIZE
            && trimmed.chars().all(|c| c == '0' || c == '1');
        let parsed = if binary {
            usize::from_str_radix(trimmed, 2)
        } else {
            trimmed.parse::<usize>()
        };

        match parsed {
            Ok(index) if index < SEED_COUNT => Self::from_index(index),
            _ => Err(MarginError::InvalidSeed {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_rows(self.cells.iter().map(<[bool; SEED_SIZE]>::as_slice)))
    }
}

/// Expand a 2x2 seed `[[a,b],[c,d]]` into `[[a,b,b,a],[c,d,d,c],[c,d,d,c],[a,b,b,a]]`
pub const fn expand_seed(seed: &Seed) -> Pattern4 {
    let [[a, b], [c, d]] = seed.cells;
    let outer = [a, b, b, a];
    let inner = [c, d, d, c];
    Pattern4::new([outer, inner, inner, outer])
}

/// A 4x4 bit matrix indexed `[row][col]`
///
/// Corners produced by [`expand_seed`] are symmetric; header, footer and
/// transmission blocks are general patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Pattern4 {
    rows: [[bool; CORNER_SIZE]; CORNER_SIZE],
}

impl Pattern4 {
    /// Create a pattern from explicit rows
    pub const fn new(rows: [[bool; CORNER_SIZE]; CORNER_SIZE]) -> Self {
        Self { rows }
    }

    /// All cells unfilled
    pub const fn empty() -> Self {
        Self::new([[false; CORNER_SIZE]; CORNER_SIZE])
    }

    /// All cells filled
    pub const fn full() -> Self {
        Self::new([[true; CORNER_SIZE]; CORNER_SIZE])
    }

    /// Build a pattern from 0/1 rows, any non-zero value counts as filled
    pub fn from_bits(bits: [[u8; CORNER_SIZE]; CORNER_SIZE]) -> Self {
        Self::new(bits.map(|row| row.map(|bit| bit != 0)))
    }

    /// Build a pattern with exactly the given cells filled
    pub fn from_cells(cells: &CellSet) -> Self {
        let mut pattern = Self::empty();
        for cell in cells.iter() {
            pattern.set(cell, true);
        }
        pattern
    }

    /// The raw rows of the pattern
    pub const fn rows(&self) -> &[[bool; CORNER_SIZE]; CORNER_SIZE] {
        &self.rows
    }

    /// Whether the cell is filled; cells outside the frame read as unfilled
    pub fn get(&self, cell: Cell) -> bool {
        self.rows
            .get(cell.y)
            .and_then(|row| row.get(cell.x))
            .copied()
            .unwrap_or(false)
    }

    /// Set or clear a cell; cells outside the frame are ignored
    pub fn set(&mut self, cell: Cell, value: bool) {
        if let Some(slot) = self.rows.get_mut(cell.y).and_then(|row| row.get_mut(cell.x)) {
            *slot = value;
        }
    }

    /// Set of filled cells
    pub fn filled_cells(&self) -> CellSet {
        (0..CORNER_SIZE * CORNER_SIZE)
            .map(Cell::from_index)
            .filter(|&cell| self.get(cell))
            .collect()
    }

    /// Number of filled cells
    pub fn count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&bit| bit).count()
    }

    /// Whether no cell is filled
    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(|&bit| !bit)
    }

    /// Bitwise inverse
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self::new(self.rows.map(|row| row.map(|bit| !bit)))
    }

    /// Cells filled here and unfilled in `other`
    #[must_use]
    pub fn and_not(&self, other: &Self) -> Self {
        let mut result = *self;
        for (row, other_row) in result.rows.iter_mut().zip(other.rows.iter()) {
            for (bit, &other_bit) in row.iter_mut().zip(other_row.iter()) {
                *bit = *bit && !other_bit;
            }
        }
        result
    }

    /// Whether the two patterns share no filled cell
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(&a, &b)| !(a && b))
    }

    /// Left-right reflection
    #[must_use]
    pub fn mirrored_horizontally(&self) -> Self {
        Self::new(self.rows.map(|mut row| {
            row.reverse();
            row
        }))
    }

    /// Top-bottom reflection
    #[must_use]
    pub fn mirrored_vertically(&self) -> Self {
        let mut rows = self.rows;
        rows.reverse();
        Self::new(rows)
    }

    /// Copy into a 4x4 array for block assembly
    pub fn to_block(&self) -> Array2<bool> {
        Array2::from_shape_fn((CORNER_SIZE, CORNER_SIZE), |(row, col)| {
            self.get(Cell::new(col, row))
        })
    }

    /// Render this pattern and `other` side by side, marking differing cells with `✗`
    pub fn side_by_side(&self, other: &Self) -> String {
        let mut lines = Vec::with_capacity(CORNER_SIZE);
        for (row_a, row_b) in self.rows.iter().zip(other.rows.iter()) {
            let left: String = row_a.iter().map(|&bit| glyph(bit)).collect();
            let right: String = row_b.iter().map(|&bit| glyph(bit)).collect();
            let diff: String = row_a
                .iter()
                .zip(row_b.iter())
                .map(|(a, b)| if a == b { ' ' } else { '✗' })
                .collect();
            lines.push(format!("A: {left}   B: {right}   Diff: {diff}"));
        }
        lines.join("\n")
    }
}

impl fmt::Display for Pattern4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_rows(self.rows.iter().map(<[bool; CORNER_SIZE]>::as_slice)))
    }
}

const fn glyph(bit: bool) -> char {
    if bit { FILLED_GLYPH } else { EMPTY_GLYPH }
}

/// Render rows of bits as lines of space-separated glyphs
pub fn render_rows<'a>(rows: impl Iterator<Item = &'a [bool]>) -> String {
    rows.map(|row| {
        row.iter()
            .map(|&bit| glyph(bit).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    })
    .collect::<Vec<_>>()
    .join("\n")
}
