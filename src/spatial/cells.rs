//! Cell coordinates and fixed-size cell sets within a 4x4 corner frame

use crate::io::configuration::CORNER_SIZE;
use bitvec::prelude::*;
use std::fmt;

/// Number of cells in a corner frame
pub const FRAME_CELLS: usize = CORNER_SIZE * CORNER_SIZE;

/// Position inside a 4x4 frame, `x` is the column and `y` the row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Cell {
    /// Create a cell from column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Row-major index of the cell within the frame
    pub const fn index(self) -> usize {
        self.y * CORNER_SIZE + self.x
    }

    /// Inverse of [`Cell::index`]
    pub const fn from_index(index: usize) -> Self {
        Self {
            x: index % CORNER_SIZE,
            y: index / CORNER_SIZE,
        }
    }

    /// Whether the cell lies inside the frame
    pub const fn in_frame(self) -> bool {
        self.x < CORNER_SIZE && self.y < CORNER_SIZE
    }

    /// Translate by `[dx, dy]`, returning `None` if the result leaves the frame
    pub fn shifted(self, offset: [i32; 2]) -> Option<Self> {
        let [dx, dy] = offset;
        let x = i32::try_from(self.x).ok()? + dx;
        let y = i32::try_from(self.y).ok()? + dy;
        let moved = Self::new(usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        moved.in_frame().then_some(moved)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Set of cells within one frame
///
/// Iteration is row-major, so a set built from any insertion order yields
/// its cells in the same order. Duplicate insertions collapse.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellSet {
    bits: BitVec,
}

impl Default for CellSet {
    fn default() -> Self {
        Self::new()
    }
}

impl CellSet {
    /// Create a set with no cells present
    pub fn new() -> Self {
        Self {
            bits: bitvec![0; FRAME_CELLS],
        }
    }

    /// Insert a cell; cells outside the frame are ignored
    pub fn insert(&mut self, cell: Cell) {
        if cell.in_frame() {
            self.bits.set(cell.index(), true);
        }
    }

    /// Remove a cell if present
    pub fn remove(&mut self, cell: Cell) {
        if cell.in_frame() {
            self.bits.set(cell.index(), false);
        }
    }

    /// Test cell membership
    pub fn contains(&self, cell: Cell) -> bool {
        cell.in_frame() && self.bits.get(cell.index()).as_deref() == Some(&true)
    }

    /// Add every cell of `other` to this set
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Whether the two sets share no cell
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let mut shared = self.bits.clone();
        shared &= &other.bits;
        shared.not_any()
    }

    /// Test if no cells are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count cells in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate over the cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.bits.iter_ones().map(Cell::from_index)
    }

    /// Collect all cells as a vector
    pub fn to_vec(&self) -> Vec<Cell> {
        self.iter().collect()
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = Self::new();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.iter().map(|cell| cell.to_string()).collect();
        write!(f, "[{}]", cells.join(", "))
    }
}
