//! Partition of a header's filled cells into four labeled segments
//!
//! Two quadrant schemes exist. Orthogonal splits the frame at its coordinate
//! halves; Diagonal splits it along both diagonals into north, east, south
//! and west triangles. Diagonal is preferred when either diagonal of the
//! header is clear, falling back to Orthogonal if any diagonal segment ends
//! up empty.

use crate::io::configuration::{CORNER_SIZE, SEGMENT_COUNT};
use crate::spatial::{Cell, CellSet, Pattern4};
use std::fmt;

/// Quadrant scheme used to label header cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentationScheme {
    /// 1 = top-left, 2 = top-right, 3 = bottom-right, 4 = bottom-left
    Orthogonal,
    /// 1 = north, 2 = east, 3 = south, 4 = west
    Diagonal,
}

impl SegmentationScheme {
    /// Segment index (1-4) of a cell under this scheme
    pub const fn label(self, cell: Cell) -> usize {
        let half = CORNER_SIZE / 2;
        let last = CORNER_SIZE - 1;
        let (x, y) = (cell.x, cell.y);
        match self {
            Self::Orthogonal => {
                if y < half && x < half {
                    1
                } else if y < half {
                    2
                } else if x >= half {
                    3
                } else {
                    4
                }
            }
            Self::Diagonal => {
                if y <= x && x + y < last {
                    1
                } else if x > y && x + y >= last {
                    2
                } else if y >= x && x + y > last {
                    3
                } else {
                    4
                }
            }
        }
    }
}

impl fmt::Display for SegmentationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Orthogonal => f.write_str("Orthogonal"),
            Self::Diagonal => f.write_str("Diagonal"),
        }
    }
}

/// Whether the main diagonal or the anti-diagonal holds no filled cell
pub fn diagonal_clear(header: &Pattern4) -> bool {
    let main_clear = (0..CORNER_SIZE).all(|i| !header.get(Cell::new(i, i)));
    let anti_clear = (0..CORNER_SIZE).all(|i| !header.get(Cell::new(CORNER_SIZE - 1 - i, i)));
    main_clear || anti_clear
}

/// Scheme chosen by the diagonal-clearance test, before any fallback
pub fn classify(header: &Pattern4) -> SegmentationScheme {
    if diagonal_clear(header) {
        SegmentationScheme::Diagonal
    } else {
        SegmentationScheme::Orthogonal
    }
}

/// Four cell groups indexed 1-4
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segments {
    scheme: SegmentationScheme,
    groups: [CellSet; SEGMENT_COUNT],
}

impl Segments {
    /// Scheme that produced these groups
    pub const fn scheme(&self) -> SegmentationScheme {
        self.scheme
    }

    /// Cells of segment `index` (1-4)
    pub fn get(&self, index: usize) -> Option<&CellSet> {
        index.checked_sub(1).and_then(|i| self.groups.get(i))
    }

    /// Iterate `(index, cells)` in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &CellSet)> + '_ {
        self.groups.iter().enumerate().map(|(i, cells)| (i + 1, cells))
    }

    /// Whether any of the four groups holds no cell
    pub fn has_empty_group(&self) -> bool {
        self.groups.iter().any(CellSet::is_empty)
    }

    /// Union of all groups
    pub fn all_cells(&self) -> CellSet {
        let mut all = CellSet::new();
        for group in &self.groups {
            all.union_with(group);
        }
        all
    }
}

/// Label every filled header cell under `scheme`, without fallback
pub fn segment_with(header: &Pattern4, scheme: SegmentationScheme) -> Segments {
    let mut groups: [CellSet; SEGMENT_COUNT] = Default::default();
    for cell in header.filled_cells().iter() {
        if let Some(group) = groups.get_mut(scheme.label(cell) - 1) {
            group.insert(cell);
        }
    }
    Segments { scheme, groups }
}

/// Segment a header, falling back to Orthogonal when Diagonal leaves a group empty
pub fn segment(header: &Pattern4) -> Segments {
    let scheme = classify(header);
    let segments = segment_with(header, scheme);
    if scheme == SegmentationScheme::Diagonal && segments.has_empty_group() {
        return segment_with(header, SegmentationScheme::Orthogonal);
    }
    segments
}
